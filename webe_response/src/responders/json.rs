use async_trait::async_trait;
use serde::Serialize;

use super::Completed;
use super::Responder;
use super::Response;
use super::ResponseError;

// Serializes a fixed value for every request.
// Optionally wraps it for JSONP when the request names a callback in the query string.
pub struct JsonResponder<T: Serialize + Send + Sync> {
  object: T,
  callback_param: Option<String>,
}

impl<T: Serialize + Send + Sync> JsonResponder<T> {
  pub fn new(object: T) -> JsonResponder<T> {
    JsonResponder {
      object: object,
      callback_param: None,
    }
  }

  pub fn with_callback_param(mut self, param: &str) -> JsonResponder<T> {
    self.callback_param = Some(param.to_owned());
    self
  }
}

// the callback ends up inside a script, so only plain js identifiers (and dotted paths) get through
pub fn is_safe_callback(name: &str) -> bool {
  !name.is_empty()
    && !name.starts_with(|c: char| c.is_ascii_digit())
    && name
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.')
}

#[async_trait]
impl<T: Serialize + Send + Sync> Responder for JsonResponder<T> {
  async fn respond(&self, response: Response) -> Result<Completed, ResponseError> {
    let callback = match &self.callback_param {
      Some(param) => response
        .request()
        .query_param(param)
        .filter(|name| is_safe_callback(name)),
      None => None,
    };
    response.json(&self.object, callback.as_deref())
  }
}
