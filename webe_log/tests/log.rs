use webe_log::{format_line, ConsoleLogger, LogLevel, MemorySink, WebeLogger};

#[test]
fn console_log_test() {
  let logger = WebeLogger::new();
  logger.add_sink(Box::new(ConsoleLogger::new(std::time::Duration::from_millis(100))));
  logger.log(LogLevel::INFO, "hi mom");
  // sleep the main thread so the sink's can write on their own schedules
  std::thread::sleep(std::time::Duration::from_millis(300));
}

#[test]
fn memory_sink_sees_every_message() {
  let sink = MemorySink::new();
  let logger = WebeLogger::new();
  logger.add_sink(Box::new(sink.clone()));
  logger.debug("status set to 404");
  logger.warn("cookie rejected");

  assert_eq!(
    sink.lines(),
    vec![
      (LogLevel::DEBUG, "status set to 404".to_owned()),
      (LogLevel::WARN, "cookie rejected".to_owned()),
    ]
  );
  assert!(sink.contains(LogLevel::WARN, "rejected"));
  assert!(!sink.contains(LogLevel::DEBUG, "rejected"));
}

#[test]
fn min_level_filters() {
  let sink = MemorySink::new();
  let logger = WebeLogger::with_level(LogLevel::WARN);
  logger.add_sink(Box::new(sink.clone()));
  logger.trace("dropped");
  logger.info("dropped");
  logger.error("kept");
  assert_eq!(sink.lines(), vec![(LogLevel::ERROR, "kept".to_owned())]);
}

#[test]
fn formatted_line_has_level_and_message() {
  let line = format_line(LogLevel::INFO, "hello");
  assert!(line.ends_with("- [INFO] hello"));
  assert!(line.starts_with('['));
}

#[test]
fn flush_skips_the_timer() {
  let logger = WebeLogger::new();
  logger.add_sink(Box::new(ConsoleLogger::stderr(std::time::Duration::from_secs(60))));
  logger.info("written by flush, not by the timer");
  logger.flush();
}
