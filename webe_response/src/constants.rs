// ---PROTOCOL---
pub const DEFAULT_PROTOCOL: &str = "HTTP/1.0"; // used when the request never declared one

// ---TIME---
pub const SECONDS_30_DAYS: i64 = 2592000; // 30 days

// ---COOKIES---
pub const DEFAULT_COOKIE_PATH: &str = "/";
// characters that can never appear in a cookie name
pub const COOKIE_NAME_RESERVED: &[char] = &['=', ',', ';', ' ', '\t', '\r', '\n', '\x0b', '\x0c'];
// characters that can never appear in a cookie path or domain
pub const COOKIE_ATTRIBUTE_RESERVED: &[char] = &[',', ';', ' ', '\t', '\r', '\n', '\x0b', '\x0c'];
// furthest a cookie lifetime or relative expiry may reach from now, about 10,000 years
pub const MAX_EXPIRY_OFFSET_SECS: i64 = 10_000 * 365 * 24 * 3600;
// IMF-fixdate, the only date format browsers reliably accept in Set-Cookie
pub const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// ---REDIRECTS---
pub const CURRENT_URL: &str = "."; // redirect target meaning "the current request path"

// ---MIME TYPES---
pub const MIME_JSON: &str = "application/json";
pub const MIME_HTML: &str = "text/html; charset=utf-8";

// ---ENV CONFIG KEYS---
pub const ENV_DEFAULT_PROTOCOL: &str = "WEBE_DEFAULT_PROTOCOL";
pub const ENV_COOKIE_LIFETIME_SECS: &str = "WEBE_COOKIE_LIFETIME_SECS";
pub const ENV_COOKIE_PATH: &str = "WEBE_COOKIE_PATH";
