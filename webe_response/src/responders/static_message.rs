use async_trait::async_trait;

use super::Completed;
use super::Responder;
use super::Response;
use super::ResponseError;
use crate::constants::MIME_HTML;
use crate::status::Status;

#[derive(Clone)]
pub struct StaticResponder {
  status_code: u16,
  message: String,
}

impl StaticResponder {
  pub fn new(status_code: u16, message: String) -> StaticResponder {
    StaticResponder {
      status_code: status_code,
      message: message,
    }
  }

  pub fn from_status(status: Status) -> StaticResponder {
    StaticResponder {
      status_code: status.code,
      message: status.to_string(),
    }
  }

  // the message is the status itself, ex. "404 Not Found"
  pub fn from_standard_code(status_code: u16) -> Result<StaticResponder, ResponseError> {
    let status = Status::from_standard_code(status_code)?;
    return Ok(StaticResponder::from_status(status));
  }
}

#[async_trait]
impl Responder for StaticResponder {
  async fn respond(&self, mut response: Response) -> Result<Completed, ResponseError> {
    response.set_status(self.status_code)?;
    let bytes = self.message.clone().into_bytes();
    return Ok(response.send(MIME_HTML, bytes));
  }
}
