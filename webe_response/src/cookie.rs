use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::constants::{
  COOKIE_ATTRIBUTE_RESERVED, COOKIE_DATE_FORMAT, COOKIE_NAME_RESERVED, MAX_EXPIRY_OFFSET_SECS,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expiry {
  Default,           // the configured lifetime, starting now
  At(DateTime<Utc>), // absolute time
  Timestamp(i64),    // absolute time as unix seconds. 0 means a session cookie
  Parse(String),     // absolute or relative time, see parse_expiry
  Session,           // no expiry attribute. browser drops it when closed
  Expired,           // a time in the past. tells the browser to discard the cookie
}

#[derive(Debug, PartialEq, Eq)]
pub enum CookieError {
  BadName(String),     // empty or contains a reserved character
  BadPath(String),     // contains a reserved character
  BadDomain(String),   // contains a reserved character
  BadExpiry(String),   // expiry string could not be understood
  BadTimestamp(i64),   // timestamp outside what chrono can represent
  BadLifetime(Duration), // now + lifetime is outside what chrono can represent
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
  pub name: String,
  pub value: String,
  pub expiry: Expiry,
  pub path: Option<String>, // None uses the configured cookie path
  pub domain: Option<String>,
  pub secure: bool,
  pub http_only: bool,
}

impl Cookie {
  pub fn new(name: &str, value: &str) -> Cookie {
    Cookie {
      name: name.to_owned(),
      value: value.to_owned(),
      expiry: Expiry::Default,
      path: None,
      domain: None,
      secure: false,
      http_only: false,
    }
  }

  // the cookie a client needs to receive in order to forget `name`
  pub fn removal(name: &str) -> Cookie {
    Cookie::new(name, "").expires(Expiry::Expired)
  }

  pub fn expires(mut self, expiry: Expiry) -> Cookie {
    self.expiry = expiry;
    self
  }

  pub fn path(mut self, path: &str) -> Cookie {
    self.path = Some(path.to_owned());
    self
  }

  pub fn domain(mut self, domain: &str) -> Cookie {
    self.domain = Some(domain.to_owned());
    self
  }

  pub fn secure(mut self, secure: bool) -> Cookie {
    self.secure = secure;
    self
  }

  pub fn http_only(mut self, http_only: bool) -> Cookie {
    self.http_only = http_only;
    self
  }

  pub fn validate_name(&self) -> Result<(), CookieError> {
    if self.name.is_empty() || self.name.contains(COOKIE_NAME_RESERVED) {
      return Err(CookieError::BadName(self.name.clone()));
    }
    Ok(())
  }

  // path and domain end up inside the header line, same rules as the name minus '='
  fn validate_attributes(&self, path: &str) -> Result<(), CookieError> {
    if path.contains(COOKIE_ATTRIBUTE_RESERVED) {
      return Err(CookieError::BadPath(path.to_owned()));
    }
    if let Some(domain) = &self.domain {
      if domain.contains(COOKIE_ATTRIBUTE_RESERVED) {
        return Err(CookieError::BadDomain(domain.clone()));
      }
    }
    Ok(())
  }

  // absolute expiry time, or None for a session cookie
  pub fn resolve_expiry(
    &self,
    now: DateTime<Utc>,
    lifetime: Duration,
  ) -> Result<Option<DateTime<Utc>>, CookieError> {
    match &self.expiry {
      Expiry::Default => match now.checked_add_signed(lifetime) {
        Some(at) => Ok(Some(at)),
        None => Err(CookieError::BadLifetime(lifetime)),
      },
      Expiry::At(at) => Ok(Some(*at)),
      Expiry::Timestamp(0) => Ok(None),
      Expiry::Timestamp(secs) => match Utc.timestamp_opt(*secs, 0).single() {
        Some(at) => Ok(Some(at)),
        None => Err(CookieError::BadTimestamp(*secs)),
      },
      Expiry::Parse(text) => match parse_expiry(text, now) {
        Some(at) => Ok(Some(at)),
        None => Err(CookieError::BadExpiry(text.clone())),
      },
      Expiry::Session => Ok(None),
      Expiry::Expired => match Utc.timestamp_opt(1, 0).single() {
        Some(at) => Ok(Some(at)),
        None => Err(CookieError::BadTimestamp(1)),
      },
    }
  }

  /// Renders the value of a `Set-Cookie` header.
  ///
  /// `default_path` is used when the cookie has no path of its own.
  /// An empty path omits the attribute.
  pub fn to_header_value(
    &self,
    now: DateTime<Utc>,
    lifetime: Duration,
    default_path: &str,
  ) -> Result<String, CookieError> {
    self.validate_name()?;
    let path = self.path.as_deref().unwrap_or(default_path);
    self.validate_attributes(path)?;
    let expiry = self.resolve_expiry(now, lifetime)?;

    let mut header = format!("{}={}", self.name, urlencoding::encode(&self.value));
    if let Some(at) = expiry {
      let max_age = (at - now).num_seconds().max(0);
      header.push_str(&format!(
        "; expires={}; Max-Age={}",
        at.format(COOKIE_DATE_FORMAT),
        max_age
      ));
    }
    if !path.is_empty() {
      header.push_str("; path=");
      header.push_str(path);
    }
    if let Some(domain) = &self.domain {
      header.push_str("; domain=");
      header.push_str(domain);
    }
    if self.secure {
      header.push_str("; secure");
    }
    if self.http_only {
      header.push_str("; HttpOnly");
    }
    return Ok(header);
  }
}

/// Turns a human-supplied expiry into an absolute time.
///
/// Accepts RFC 3339, RFC 2822, the cookie date format, a bare `YYYY-MM-DD` date (midnight UTC),
/// `now`, and relative offsets like `+1 day`, `-2 hours` or `30 minutes`.
pub fn parse_expiry(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
  let text = text.trim();
  if text.eq_ignore_ascii_case("now") {
    return Some(now);
  }
  if let Ok(at) = DateTime::parse_from_rfc3339(text) {
    return Some(at.with_timezone(&Utc));
  }
  if let Ok(at) = DateTime::parse_from_rfc2822(text) {
    return Some(at.with_timezone(&Utc));
  }
  if let Ok(naive) = NaiveDateTime::parse_from_str(text, COOKIE_DATE_FORMAT) {
    return Some(Utc.from_utc_datetime(&naive));
  }
  if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
    return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
  }
  let offset = parse_relative(text)?;
  return now.checked_add_signed(offset);
}

fn parse_relative(text: &str) -> Option<Duration> {
  let mut parts = text.split_whitespace();
  let amount = parts.next()?;
  let unit = parts.next()?;
  if parts.next().is_some() {
    return None;
  }
  let amount = amount.strip_prefix('+').unwrap_or(amount).parse::<i64>().ok()?;
  let unit_secs: i64 = match unit.to_ascii_lowercase().trim_end_matches('s') {
    "sec" | "second" => 1,
    "min" | "minute" => 60,
    "hour" => 3600,
    "day" => 86400,
    "week" => 604800,
    _ => return None,
  };
  let total = amount.checked_mul(unit_secs)?;
  if !(-MAX_EXPIRY_OFFSET_SECS..=MAX_EXPIRY_OFFSET_SECS).contains(&total) {
    return None;
  }
  Some(Duration::seconds(total))
}
