use std::sync::Arc;

use serde::Serialize;
use webe_log::{LogLevel, MemorySink, WebeLogger};
use webe_response::responders::json::JsonResponder;
use webe_response::responders::redirect::RedirectResponder;
use webe_response::responders::secure::SecureResponder;
use webe_response::responders::static_message::StaticResponder;
use webe_response::responders::Responder;
use webe_response::{RequestContext, Response, ResponseConfig, ResponseError};

#[derive(Serialize)]
struct Health {
  ok: bool,
  version: &'static str,
}

fn cgi(pairs: &[(&str, &str)]) -> RequestContext {
  RequestContext::from_vars(pairs.iter().map(|(k, v)| (*k, v.to_string())))
}

fn body_text(bytes: &[u8]) -> String {
  String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn static_responder_writes_full_response() {
  let request = cgi(&[("SERVER_PROTOCOL", "HTTP/1.1"), ("REQUEST_URI", "/missing")]);
  let responder = StaticResponder::from_standard_code(404).unwrap();
  let completed = responder.respond(Response::new(request)).await.unwrap();

  let mut out: Vec<u8> = Vec::new();
  completed.write_to(&mut out).await.unwrap();
  assert_eq!(
    body_text(&out),
    "HTTP/1.1 404 Not Found\r\n\
     Content-Type: text/html; charset=utf-8\r\n\
     Content-Length: 13\r\n\
     \r\n\
     404 Not Found"
  );
}

#[tokio::test]
async fn static_responder_with_unknown_code() {
  assert!(StaticResponder::from_standard_code(299).is_err());
  let responder = StaticResponder::new(299, "odd".to_owned());
  match responder.respond(Response::new(RequestContext::default())).await {
    Err(ResponseError::UnknownStatus(299)) => {}
    _ => panic!("unregistered codes never reach the wire"),
  }
}

#[tokio::test]
async fn json_responder_plain_and_jsonp() {
  let responder = JsonResponder::new(Health {
    ok: true,
    version: "1",
  })
  .with_callback_param("callback");

  let plain = responder
    .respond(Response::new(RequestContext::new(false, "h", "/health")))
    .await
    .unwrap();
  assert_eq!(plain.body.as_deref(), Some(&br#"{"ok":true,"version":"1"}"#[..]));

  let request =
    RequestContext::new(false, "h", "/health?callback=handle").with_query("callback=handle");
  let wrapped = responder.respond(Response::new(request)).await.unwrap();
  assert_eq!(
    wrapped.body.as_deref(),
    Some(&br#";handle({"ok":true,"version":"1"});"#[..])
  );
  assert_eq!(wrapped.headers.get("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn json_responder_ignores_unsafe_callbacks() {
  let responder = JsonResponder::new(vec!["a"]).with_callback_param("callback");
  let request = RequestContext::new(false, "h", "/").with_query("callback=alert(1)%3Bx");
  let completed = responder.respond(Response::new(request)).await.unwrap();
  assert_eq!(completed.body.as_deref(), Some(&br#"["a"]"#[..]));
}

#[tokio::test]
async fn secure_responder_redirects_plain_http() {
  let responder = SecureResponder::new(StaticResponder::new(200, "secret".to_owned()));
  let request = cgi(&[
    ("HTTPS", "off"),
    ("HTTP_HOST", "shop.example"),
    ("REQUEST_URI", "/cart?id=3"),
  ]);
  let completed = responder.respond(Response::new(request)).await.unwrap();
  assert_eq!(completed.status.code, 302);
  assert_eq!(completed.headers.get("Location"), Some("https://shop.example/cart?id=3"));
  assert_eq!(completed.body, None);
}

#[tokio::test]
async fn secure_responder_delegates_when_secure() {
  let responder = SecureResponder::new(StaticResponder::new(200, "secret".to_owned()));
  let request = cgi(&[("HTTPS", "on"), ("HTTP_HOST", "shop.example"), ("REQUEST_URI", "/cart")]);
  let completed = responder.respond(Response::new(request)).await.unwrap();
  assert_eq!(completed.status.code, 200);
  assert_eq!(completed.body.as_deref(), Some(&b"secret"[..]));
}

#[tokio::test]
async fn redirect_responder_logs_and_uses_config_protocol() {
  let sink = MemorySink::new();
  let logger = Arc::new(WebeLogger::new());
  logger.add_sink(Box::new(sink.clone()));

  let mut config = ResponseConfig::default();
  config.default_protocol = "HTTP/1.1".to_owned();
  let response = Response::with_config(RequestContext::default(), config).with_logger(logger);

  let completed = RedirectResponder::new("/login", 303).respond(response).await.unwrap();
  assert_eq!(completed.status_line(), "HTTP/1.1 303 See Other");
  assert_eq!(completed.headers.get("Location"), Some("/login"));
  assert!(sink.contains(LogLevel::DEBUG, "redirect 303 -> /login"));
  assert!(sink.contains(LogLevel::DEBUG, "response complete: 303 See Other"));
}

#[tokio::test]
async fn responders_behind_trait_objects() {
  let routes: Vec<Box<dyn Responder>> = vec![
    Box::new(RedirectResponder::found("/")),
    Box::new(StaticResponder::new(418, "short and stout".to_owned())),
  ];
  let mut codes = Vec::new();
  for responder in routes.iter() {
    let completed = responder.respond(Response::new(RequestContext::default())).await.unwrap();
    codes.push(completed.status.code);
  }
  assert_eq!(codes, vec![302, 418]);
}
