use async_trait::async_trait;

use super::Completed;
use super::Responder;
use super::Response;
use super::ResponseError;
use crate::status::FOUND;

pub struct RedirectResponder {
  url: String,
  code: u16,
}

impl RedirectResponder {
  pub fn new(url: &str, code: u16) -> RedirectResponder {
    RedirectResponder {
      url: url.to_owned(),
      code: code,
    }
  }

  // 302 Found
  pub fn found(url: &str) -> RedirectResponder {
    RedirectResponder::new(url, FOUND)
  }
}

#[async_trait]
impl Responder for RedirectResponder {
  async fn respond(&self, response: Response) -> Result<Completed, ResponseError> {
    response.redirect(&self.url, self.code)
  }
}
