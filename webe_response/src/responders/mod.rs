pub mod json;
pub mod redirect;
pub mod secure;
pub mod static_message;

use async_trait::async_trait;

use super::completed::Completed;
use super::error::ResponseError;
use super::response::Response;

#[async_trait]
pub trait Responder: Send + Sync {
  // consumes the response for this request and finishes it
  async fn respond(&self, response: Response) -> Result<Completed, ResponseError>;
}
