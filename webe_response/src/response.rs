use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use webe_log::{LogLevel, WebeLogger};

use crate::completed::Completed;
use crate::config::ResponseConfig;
use crate::constants::{CURRENT_URL, MIME_JSON};
use crate::cookie::Cookie;
use crate::error::ResponseError;
use crate::headers::{normalize_name, HeaderLines};
use crate::request::RequestContext;
use crate::status::{Status, FOUND};

/// A response under construction for a single request.
///
/// Header-level operations take `&mut self` and may be repeated. The terminal operations
/// (`json`, `redirect`, `send`, `finish`) consume the response and hand back a [`Completed`],
/// so nothing can be emitted once a response has ended.
pub struct Response {
  request: RequestContext,
  config: ResponseConfig,
  status: Option<Status>, // None until a status is emitted
  headers: HeaderLines,
  logger: Option<Arc<WebeLogger>>,
}

// result of enforce_secure
pub enum Secured {
  Secure(Response),      // request was already secure. keep building
  Redirected(Completed), // response ended with a redirect to https
}

impl Response {
  pub fn new(request: RequestContext) -> Response {
    Response::with_config(request, ResponseConfig::default())
  }

  pub fn with_config(request: RequestContext, config: ResponseConfig) -> Response {
    Response {
      request: request,
      config: config,
      status: None,
      headers: HeaderLines::new(),
      logger: None,
    }
  }

  pub fn with_logger(mut self, logger: Arc<WebeLogger>) -> Response {
    self.logger = Some(logger);
    self
  }

  pub fn request(&self) -> &RequestContext {
    &self.request
  }

  pub fn headers(&self) -> &HeaderLines {
    &self.headers
  }

  // protocol the request declared, else the configured default
  pub fn protocol(&self) -> &str {
    match &self.request.protocol {
      Some(protocol) => protocol,
      None => &self.config.default_protocol,
    }
  }

  // most recently emitted status code, 200 if none was
  pub fn status(&self) -> u16 {
    match &self.status {
      Some(status) => status.code,
      None => Status::DEFAULT.code,
    }
  }

  /// Emits the status line for `code` and makes it the current status.
  ///
  /// Codes outside the registry are refused with `UnknownStatus`; the previous status stays.
  pub fn set_status(&mut self, code: u16) -> Result<u16, ResponseError> {
    let status = match Status::from_standard_code(code) {
      Ok(status) => status,
      Err(error) => {
        self.log(LogLevel::WARN, &format!("refusing unregistered status {}", code));
        return Err(error);
      }
    };
    self.log(LogLevel::DEBUG, &format!("status {}", status.line(self.protocol())));
    self.status = Some(status);
    Ok(code)
  }

  // None until set_status succeeds
  pub fn status_line(&self) -> Option<String> {
    self.status.as_ref().map(|status| status.line(self.protocol()))
  }

  // the value is written as given. keep CR and LF out of it
  pub fn header(&mut self, name: &str, value: &str) {
    self.headers.set(normalize_name(name), value.to_owned());
  }

  /// Emits a `Set-Cookie` line. Returns false, emitting nothing, if the cookie name, path or
  /// domain is not legal or its expiry can't be resolved to a time.
  pub fn set_cookie(&mut self, cookie: Cookie) -> bool {
    self.set_cookie_at(cookie, Utc::now())
  }

  // set_cookie with an explicit clock
  pub fn set_cookie_at(&mut self, cookie: Cookie, now: DateTime<Utc>) -> bool {
    match cookie.to_header_value(now, self.config.cookie_lifetime, &self.config.cookie_path) {
      Ok(value) => {
        self.headers.append("Set-Cookie".to_owned(), value);
        true
      }
      Err(error) => {
        self.log(LogLevel::WARN, &format!("cookie not set: {:?}", error));
        false
      }
    }
  }

  pub fn unset_cookie(&mut self, name: &str) -> bool {
    self.set_cookie(Cookie::removal(name))
  }

  pub fn no_cache(&mut self) {
    self.header("Pragma", "no-cache");
    self.header("Cache-Control", "no-store, no-cache");
  }

  /// Ends the response with `value` serialized as JSON.
  ///
  /// With a callback the body becomes `;callback(json);` for script-tag consumers.
  pub fn json<T: Serialize + ?Sized>(
    mut self,
    value: &T,
    callback: Option<&str>,
  ) -> Result<Completed, ResponseError> {
    self.header("Content-Type", MIME_JSON);
    let json = serde_json::to_string(value)?;
    let body = match callback {
      Some(callback) => format!(";{}({});", callback, json),
      None => json,
    };
    Ok(self.complete(Some(body.into_bytes())))
  }

  /// Ends the response with a `Location` header and status `code`.
  ///
  /// A url of `.` means the current request uri, or `/` if there isn't one.
  pub fn redirect(mut self, url: &str, code: u16) -> Result<Completed, ResponseError> {
    self.set_status(code)?;
    let location = if url == CURRENT_URL {
      self.request.uri.clone().unwrap_or_else(|| "/".to_owned())
    } else {
      url.to_owned()
    };
    self.log(LogLevel::DEBUG, &format!("redirect {} -> {}", code, location));
    self.header("Location", &location);
    Ok(self.complete(None))
  }

  // redirect to the current uri with 302 Found
  pub fn redirect_back(self) -> Result<Completed, ResponseError> {
    self.redirect(CURRENT_URL, FOUND)
  }

  /// Redirects insecure requests to the same host and uri over https.
  pub fn enforce_secure(self) -> Result<Secured, ResponseError> {
    if self.request.secure {
      return Ok(Secured::Secure(self));
    }
    let host = match &self.request.host {
      Some(host) => host.clone(),
      None => return Err(ResponseError::MissingHost),
    };
    let uri = self.request.uri.clone().unwrap_or_else(|| "/".to_owned());
    let url = format!("https://{}{}", host, uri);
    let completed = self.redirect(&url, FOUND)?;
    Ok(Secured::Redirected(completed))
  }

  // ends the response with an arbitrary body
  pub fn send(mut self, content_type: &str, body: Vec<u8>) -> Completed {
    self.header("Content-Type", content_type);
    self.complete(Some(body))
  }

  // ends the response with no body
  pub fn finish(self) -> Completed {
    self.complete(None)
  }

  fn complete(mut self, body: Option<Vec<u8>>) -> Completed {
    if let Some(body) = &body {
      if !self.headers.contains("Content-Length") {
        self.headers.set("Content-Length".to_owned(), body.len().to_string());
      }
    }
    let status = self.status.take().unwrap_or(Status::DEFAULT);
    self.log(LogLevel::DEBUG, &format!("response complete: {}", status));
    Completed {
      protocol: self.protocol().to_owned(),
      status: status,
      headers: self.headers,
      body: body,
    }
  }

  fn log(&self, level: LogLevel, msg: &str) {
    if let Some(logger) = &self.logger {
      logger.log(level, msg);
    }
  }
}
