// wraps another responder and makes sure the request arrived over https.
// insecure requests are redirected to the https version of the same url
// - and never reach the internal responder

use async_trait::async_trait;

use super::Completed;
use super::Responder;
use super::Response;
use super::ResponseError;
use crate::response::Secured;

pub struct SecureResponder<R: Responder> {
  internal_responder: R,
}

impl<R: Responder> SecureResponder<R> {
  pub fn new(internal_responder: R) -> SecureResponder<R> {
    SecureResponder {
      internal_responder: internal_responder,
    }
  }
}

#[async_trait]
impl<R: Responder> Responder for SecureResponder<R> {
  async fn respond(&self, response: Response) -> Result<Completed, ResponseError> {
    match response.enforce_secure()? {
      Secured::Secure(response) => self.internal_responder.respond(response).await,
      Secured::Redirected(completed) => Ok(completed),
    }
  }
}
