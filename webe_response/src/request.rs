use std::collections::HashMap;
use std::env;

// CGI variables the helper reads from the host environment
pub const CGI_HTTPS: &str = "HTTPS";
pub const CGI_HTTP_HOST: &str = "HTTP_HOST";
pub const CGI_REQUEST_URI: &str = "REQUEST_URI";
pub const CGI_SERVER_PROTOCOL: &str = "SERVER_PROTOCOL";
pub const CGI_QUERY_STRING: &str = "QUERY_STRING";

/// The ambient facts about the current request that a response needs.
/// Nothing here is parsed off the wire; the host (a CGI server, or the caller) hands them over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
  pub secure: bool,
  pub host: Option<String>,
  pub uri: Option<String>,
  pub protocol: Option<String>,
  pub query: Option<String>,
}

impl RequestContext {
  pub fn new(secure: bool, host: &str, uri: &str) -> RequestContext {
    RequestContext {
      secure: secure,
      host: Some(host.to_owned()),
      uri: Some(uri.to_owned()),
      protocol: None,
      query: None,
    }
  }

  // reads the CGI variables of the current process
  pub fn from_cgi_env() -> RequestContext {
    return RequestContext::from_vars(env::vars());
  }

  pub fn from_vars<I, K, V>(vars: I) -> RequestContext
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut vars: HashMap<String, String> = vars
      .into_iter()
      .map(|(key, value)| (key.as_ref().to_owned(), value.into()))
      .collect();
    // empty CGI variables are treated the same as missing ones
    vars.retain(|_, value| !value.is_empty());

    let secure = match vars.get(CGI_HTTPS) {
      Some(https) => https.eq_ignore_ascii_case("on"),
      None => false,
    };
    return RequestContext {
      secure: secure,
      host: vars.remove(CGI_HTTP_HOST),
      uri: vars.remove(CGI_REQUEST_URI),
      protocol: vars.remove(CGI_SERVER_PROTOCOL),
      query: vars.remove(CGI_QUERY_STRING),
    };
  }

  pub fn with_protocol(mut self, protocol: &str) -> RequestContext {
    self.protocol = Some(protocol.to_owned());
    self
  }

  pub fn with_query(mut self, query: &str) -> RequestContext {
    self.query = Some(query.to_owned());
    self
  }

  // the request path, without the query string
  pub fn path(&self) -> Option<&str> {
    self.uri.as_deref().map(|uri| match uri.find('?') {
      Some(pos) => &uri[..pos],
      None => uri,
    })
  }

  // first value of a query parameter, percent-decoded. A bare `key` yields an empty value
  pub fn query_param(&self, name: &str) -> Option<String> {
    let query = self.query.as_deref()?;
    for pair in query.split('&') {
      let mut parts = pair.splitn(2, '=');
      let key = parts.next().unwrap_or("");
      if key != name {
        continue;
      }
      let raw = parts.next().unwrap_or("").replace('+', " ");
      return match urlencoding::decode(&raw) {
        Ok(value) => Some(value.into_owned()),
        Err(_) => None, // not valid utf-8 once decoded
      };
    }
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cgi(pairs: &[(&str, &str)]) -> RequestContext {
    RequestContext::from_vars(pairs.iter().map(|(k, v)| (*k, v.to_string())))
  }

  #[test]
  fn reads_cgi_variables() {
    let request = cgi(&[
      ("HTTPS", "ON"),
      ("HTTP_HOST", "example.com"),
      ("REQUEST_URI", "/a/b?c=d"),
      ("SERVER_PROTOCOL", "HTTP/1.1"),
      ("QUERY_STRING", "c=d"),
      ("PATH", "/usr/bin"),
    ]);
    assert!(request.secure);
    assert_eq!(request.host.as_deref(), Some("example.com"));
    assert_eq!(request.uri.as_deref(), Some("/a/b?c=d"));
    assert_eq!(request.path(), Some("/a/b"));
    assert_eq!(request.protocol.as_deref(), Some("HTTP/1.1"));
  }

  #[test]
  fn https_must_be_on() {
    assert!(!cgi(&[("HTTPS", "off")]).secure);
    assert!(!cgi(&[("HTTPS", "")]).secure);
    assert!(!cgi(&[]).secure);
    assert!(cgi(&[("HTTPS", "on")]).secure);
  }

  #[test]
  fn empty_variables_are_missing() {
    let request = cgi(&[("REQUEST_URI", ""), ("SERVER_PROTOCOL", "")]);
    assert_eq!(request.uri, None);
    assert_eq!(request.protocol, None);
  }

  #[test]
  fn query_params() {
    let request =
      RequestContext::new(false, "h", "/").with_query("a=1&callback=my%20cb&flag&b=x+y");
    assert_eq!(request.query_param("a").as_deref(), Some("1"));
    assert_eq!(request.query_param("callback").as_deref(), Some("my cb"));
    assert_eq!(request.query_param("flag").as_deref(), Some(""));
    assert_eq!(request.query_param("b").as_deref(), Some("x y"));
    assert_eq!(request.query_param("missing"), None);
  }
}
