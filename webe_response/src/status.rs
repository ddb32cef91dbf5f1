use crate::error::ResponseError;

// Informational
pub const CONTINUE: u16 = 100;
pub const SWITCHING_PROTOCOLS: u16 = 101;

// Successful
pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const ACCEPTED: u16 = 202;
pub const NON_AUTHORITATIVE_INFORMATION: u16 = 203;
pub const NO_CONTENT: u16 = 204;
pub const RESET_CONTENT: u16 = 205;
pub const PARTIAL_CONTENT: u16 = 206;

// Redirection
pub const MULTIPLE_CHOICES: u16 = 300;
pub const MOVED_PERMANENTLY: u16 = 301;
pub const FOUND: u16 = 302;
pub const SEE_OTHER: u16 = 303;
pub const NOT_MODIFIED: u16 = 304;
pub const USE_PROXY: u16 = 305;
pub const UNUSED: u16 = 306;
pub const TEMPORARY_REDIRECT: u16 = 307;

// Client Error
pub const BAD_REQUEST: u16 = 400;
pub const UNAUTHORIZED: u16 = 401;
pub const PAYMENT_REQUIRED: u16 = 402;
pub const FORBIDDEN: u16 = 403;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const NOT_ACCEPTABLE: u16 = 406;
pub const PROXY_AUTHENTICATION_REQUIRED: u16 = 407;
pub const REQUEST_TIMEOUT: u16 = 408;
pub const CONFLICT: u16 = 409;
pub const GONE: u16 = 410;
pub const LENGTH_REQUIRED: u16 = 411;
pub const PRECONDITION_FAILED: u16 = 412;
pub const REQUEST_ENTITY_TOO_LARGE: u16 = 413;
pub const REQUEST_URI_TOO_LONG: u16 = 414;
pub const UNSUPPORTED_MEDIA_TYPE: u16 = 415;
pub const REQUESTED_RANGE_NOT_SATISFIABLE: u16 = 416;
pub const EXPECTATION_FAILED: u16 = 417;
pub const IM_A_TEAPOT: u16 = 418; // rfc2324

// Server Error
pub const INTERNAL_SERVER_ERROR: u16 = 500;
pub const NOT_IMPLEMENTED: u16 = 501;
pub const BAD_GATEWAY: u16 = 502;
pub const SERVICE_UNAVAILABLE: u16 = 503;
pub const GATEWAY_TIMEOUT: u16 = 504;
pub const VERSION_NOT_SUPPORTED: u16 = 505;

// every status code the helper is willing to emit, in ascending order
pub const STATUS_REGISTRY: [(u16, &str); 42] = [
  (CONTINUE, "Continue"),
  (SWITCHING_PROTOCOLS, "Switching Protocols"),
  (OK, "OK"),
  (CREATED, "Created"),
  (ACCEPTED, "Accepted"),
  (NON_AUTHORITATIVE_INFORMATION, "Non-Authoritative Information"),
  (NO_CONTENT, "No Content"),
  (RESET_CONTENT, "Reset Content"),
  (PARTIAL_CONTENT, "Partial Content"),
  (MULTIPLE_CHOICES, "Multiple Choices"),
  (MOVED_PERMANENTLY, "Moved Permanently"),
  (FOUND, "Found"),
  (SEE_OTHER, "See Other"),
  (NOT_MODIFIED, "Not Modified"),
  (USE_PROXY, "Use Proxy"),
  (UNUSED, "(Unused)"),
  (TEMPORARY_REDIRECT, "Temporary Redirect"),
  (BAD_REQUEST, "Bad Request"),
  (UNAUTHORIZED, "Unauthorized"),
  (PAYMENT_REQUIRED, "Payment Required"),
  (FORBIDDEN, "Forbidden"),
  (NOT_FOUND, "Not Found"),
  (METHOD_NOT_ALLOWED, "Method Not Allowed"),
  (NOT_ACCEPTABLE, "Not Acceptable"),
  (PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required"),
  (REQUEST_TIMEOUT, "Request Timeout"),
  (CONFLICT, "Conflict"),
  (GONE, "Gone"),
  (LENGTH_REQUIRED, "Length Required"),
  (PRECONDITION_FAILED, "Precondition Failed"),
  (REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large"),
  (REQUEST_URI_TOO_LONG, "Request-URI Too Long"),
  (UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type"),
  (REQUESTED_RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable"),
  (EXPECTATION_FAILED, "Expectation Failed"),
  (IM_A_TEAPOT, "I'm a teapot"),
  (INTERNAL_SERVER_ERROR, "Internal Server Error"),
  (NOT_IMPLEMENTED, "Not Implemented"),
  (BAD_GATEWAY, "Bad Gateway"),
  (SERVICE_UNAVAILABLE, "Service Unavailable"),
  (GATEWAY_TIMEOUT, "Gateway Timeout"),
  (VERSION_NOT_SUPPORTED, "HTTP Version Not Supported"),
];

// reason phrase for a registered code. None for anything outside the registry
pub fn get_standard_reason(code: u16) -> Option<&'static str> {
  match STATUS_REGISTRY.binary_search_by_key(&code, |&(registered, _)| registered) {
    Ok(index) => Some(STATUS_REGISTRY[index].1),
    Err(_) => None,
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
  pub code: u16,
  pub reason: &'static str,
}

impl Status {
  // what a response reports when nothing ever set a status
  pub const DEFAULT: Status = Status {
    code: OK,
    reason: "OK",
  };

  // only codes in the registry are accepted
  pub fn from_standard_code(code: u16) -> Result<Status, ResponseError> {
    match get_standard_reason(code) {
      Some(reason) => Ok(Status { code, reason }),
      None => Err(ResponseError::UnknownStatus(code)),
    }
  }

  /// The full status line, ex. `HTTP/1.1 404 Not Found`
  pub fn line(&self, protocol: &str) -> String {
    format!("{} {} {}", protocol, self.code, self.reason)
  }
}

impl std::fmt::Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", self.code, self.reason)
  }
}
