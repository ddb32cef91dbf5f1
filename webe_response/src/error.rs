use std::fmt;

#[derive(Debug)]
pub enum ResponseError {
  UnknownStatus(u16),      // status code is not in the registry
  MissingHost,             // https redirect needs the request host
  Json(serde_json::Error), // value could not be serialized
  Write(std::io::Error),   // failed writing a completed response to its sink
}

impl From<serde_json::Error> for ResponseError {
  fn from(err: serde_json::Error) -> ResponseError {
    ResponseError::Json(err)
  }
}

impl From<std::io::Error> for ResponseError {
  fn from(err: std::io::Error) -> ResponseError {
    ResponseError::Write(err)
  }
}

impl fmt::Display for ResponseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ResponseError::UnknownStatus(code) => write!(f, "unknown status code {}", code),
      ResponseError::MissingHost => write!(f, "request has no host to redirect to"),
      ResponseError::Json(err) => write!(f, "json serialization failed - {}", err),
      ResponseError::Write(err) => write!(f, "failed to write response - {}", err),
    }
  }
}

impl std::error::Error for ResponseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ResponseError::UnknownStatus(_) | ResponseError::MissingHost => None,
      ResponseError::Json(err) => Some(err),
      ResponseError::Write(err) => Some(err),
    }
  }
}
