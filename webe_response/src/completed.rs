use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::ResponseError;
use crate::headers::HeaderLines;
use crate::status::Status;

/// A finished response. Nothing more can be added; it can only be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completed {
  pub protocol: String,
  pub status: Status,
  pub headers: HeaderLines,
  pub body: Option<Vec<u8>>,
}

impl Completed {
  pub fn status_line(&self) -> String {
    self.status.line(&self.protocol)
  }

  // status line, header lines and the blank line that ends them
  pub fn head(&self) -> String {
    let mut head = self.status_line();
    head.push_str("\r\n");
    for (name, value) in self.headers.iter() {
      head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("\r\n");
    return head;
  }

  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes = self.head().into_bytes();
    if let Some(body) = &self.body {
      bytes.extend_from_slice(body);
    }
    bytes
  }

  pub async fn write_to<W>(&self, writer: &mut W) -> Result<(), ResponseError>
  where
    W: AsyncWrite + Unpin,
  {
    writer.write_all(self.head().as_bytes()).await?;
    if let Some(body) = &self.body {
      writer.write_all(body).await?;
    }
    // flush the stream
    writer.flush().await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn completed(body: Option<&str>) -> Completed {
    let mut headers = HeaderLines::new();
    headers.set("Location".to_owned(), "/home".to_owned());
    headers.append("Set-Cookie".to_owned(), "a=1".to_owned());
    Completed {
      protocol: "HTTP/1.1".to_owned(),
      status: Status::from_standard_code(302).unwrap(),
      headers: headers,
      body: body.map(|body| body.as_bytes().to_vec()),
    }
  }

  #[test]
  fn head_layout() {
    assert_eq!(
      completed(None).head(),
      "HTTP/1.1 302 Found\r\nLocation: /home\r\nSet-Cookie: a=1\r\n\r\n"
    );
  }

  #[test]
  fn bytes_include_body() {
    let bytes = completed(Some("moved")).to_bytes();
    assert!(bytes.ends_with(b"\r\n\r\nmoved"));
  }

  #[tokio::test]
  async fn writes_to_async_sink() {
    let response = completed(Some("moved"));
    let mut sink: Vec<u8> = Vec::new();
    response.write_to(&mut sink).await.unwrap();
    assert_eq!(sink, response.to_bytes());
  }
}
