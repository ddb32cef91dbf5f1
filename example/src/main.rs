extern crate dotenv;

extern crate webe_log;
extern crate webe_response;

// A CGI program: the web server hands over the request as environment variables
// and relays whatever we print to stdout as the response.
// Point a CGI-capable server (with non-parsed-header output) at this binary.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use webe_log::{ConsoleLogger, LogLevel, WebeLogger};
use webe_response::responders::json::JsonResponder;
use webe_response::responders::redirect::RedirectResponder;
use webe_response::responders::secure::SecureResponder;
use webe_response::responders::static_message::StaticResponder;
use webe_response::responders::Responder;
use webe_response::{Completed, RequestContext, Response, ResponseConfig, ResponseError};

#[derive(Serialize)]
struct ServiceInfo {
  name: &'static str,
  version: &'static str,
}

// picks a responder by path prefix. first match wins
fn pick_responder(path: &str) -> Result<Box<dyn Responder>, ResponseError> {
  if path.starts_with("/info") {
    let info = ServiceInfo {
      name: env!("CARGO_PKG_NAME"),
      version: env!("CARGO_PKG_VERSION"),
    };
    return Ok(Box::new(JsonResponder::new(info).with_callback_param("callback")));
  }
  if path.starts_with("/account") {
    let page = StaticResponder::new(200, "<h1>Account</h1>".to_owned());
    return Ok(Box::new(SecureResponder::new(page)));
  }
  if path.starts_with("/old-home") {
    return Ok(Box::new(RedirectResponder::new("/", 301)));
  }
  Ok(Box::new(StaticResponder::from_standard_code(404)?))
}

async fn handle(
  request: RequestContext,
  config: ResponseConfig,
  logger: Arc<WebeLogger>,
) -> Completed {
  let path = request.path().unwrap_or("/").to_owned();
  let error_response =
    Response::with_config(request.clone(), config.clone()).with_logger(logger.clone());
  let mut response = Response::with_config(request, config).with_logger(logger.clone());
  response.no_cache();

  let result = match pick_responder(&path) {
    Ok(responder) => responder.respond(response).await,
    Err(error) => Err(error),
  };
  match result {
    Ok(completed) => completed,
    Err(error) => {
      logger.log(LogLevel::ERROR, &format!("{} failed: {}", path, error));
      // 500 is always registered
      let mut fallback = error_response;
      let _ = fallback.set_status(500);
      fallback.finish()
    }
  }
}

#[tokio::main]
async fn main() {
  // load environment. a missing .env file just means defaults
  let _ = dotenv::dotenv();

  let logger = Arc::new(WebeLogger::with_level(LogLevel::INFO));
  // stdout carries the response, so logs go to stderr
  logger.add_sink(Box::new(ConsoleLogger::stderr(Duration::from_millis(250))));

  let config = match ResponseConfig::from_env() {
    Ok(config) => config,
    Err(error) => {
      logger.log(LogLevel::WARN, &format!("bad response config, using defaults: {:?}", error));
      ResponseConfig::default()
    }
  };

  let request = RequestContext::from_cgi_env();
  let completed = handle(request, config, logger.clone()).await;

  let mut stdout = tokio::io::stdout();
  if let Err(error) = completed.write_to(&mut stdout).await {
    logger.log(LogLevel::ERROR, &format!("{}", error));
  }
  // the process ends here, don't leave queued lines behind
  logger.flush();
}
