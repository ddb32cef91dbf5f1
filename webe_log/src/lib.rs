extern crate chrono;
use chrono::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  TRACE,
  DEBUG,
  INFO,
  WARN,
  ERROR,
}

pub struct WebeLogger {
  min_level: LogLevel,
  sinks: Mutex<Vec<Box<dyn Sink + Send>>>,
}

impl WebeLogger {
  pub fn new() -> WebeLogger {
    WebeLogger::with_level(LogLevel::TRACE)
  }

  // messages below min_level are dropped before reaching any sink
  pub fn with_level(min_level: LogLevel) -> WebeLogger {
    WebeLogger {
      min_level: min_level,
      sinks: Mutex::new(Vec::new()),
    }
  }

  pub fn log(&self, level: LogLevel, msg: &str) {
    if level < self.min_level {
      return;
    }
    // a poisoned lock only means another thread panicked mid-write. keep logging
    let mut sinks = match self.sinks.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    for sink in sinks.iter_mut() {
      sink.write(level, msg);
    }
  }

  pub fn add_sink(&self, sink: Box<dyn Sink + Send>) {
    match self.sinks.lock() {
      Ok(mut sinks) => sinks.push(sink),
      Err(poisoned) => poisoned.into_inner().push(sink),
    }
  }

  pub fn flush(&self) {
    let mut sinks = match self.sinks.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    for sink in sinks.iter_mut() {
      sink.flush();
    }
  }

  pub fn trace(&self, msg: &str) {
    self.log(LogLevel::TRACE, msg)
  }

  pub fn debug(&self, msg: &str) {
    self.log(LogLevel::DEBUG, msg)
  }

  pub fn info(&self, msg: &str) {
    self.log(LogLevel::INFO, msg)
  }

  pub fn warn(&self, msg: &str) {
    self.log(LogLevel::WARN, msg)
  }

  pub fn error(&self, msg: &str) {
    self.log(LogLevel::ERROR, msg)
  }
}

pub trait Sink {
  fn write(&mut self, level: LogLevel, msg: &str);

  fn flush(&mut self) {}
}

pub fn format_line(level: LogLevel, msg: &str) -> String {
  format!("[{}] - [{:?}] {}", Local::now(), level, msg)
}

// Queues formatted lines and writes them out from its own thread.
pub struct ConsoleLogger {
  queue: Arc<Mutex<Vec<String>>>,
  target: Target,
  _scheduler: JoinHandle<()>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
  Stdout,
  Stderr,
}

impl Target {
  fn handle(self) -> Box<dyn Write + Send> {
    match self {
      Target::Stdout => Box::new(io::stdout()),
      Target::Stderr => Box::new(io::stderr()),
    }
  }
}

fn drain(queue: &Mutex<Vec<String>>) -> Vec<String> {
  match queue.lock() {
    Ok(mut queue_guard) => queue_guard.drain(..).collect(),
    Err(poisoned) => poisoned.into_inner().drain(..).collect(),
  }
}

fn write_all(handle: &mut dyn Write, pending: Vec<String>) {
  for msg in pending {
    // nowhere left to report a failed console write
    let _ = writeln!(handle, "{}", msg);
  }
  let _ = handle.flush();
}

impl ConsoleLogger {
  pub fn new(flush_interval: Duration) -> ConsoleLogger {
    ConsoleLogger::with_target(Target::Stdout, flush_interval)
  }

  pub fn stderr(flush_interval: Duration) -> ConsoleLogger {
    ConsoleLogger::with_target(Target::Stderr, flush_interval)
  }

  pub fn with_target(target: Target, flush_interval: Duration) -> ConsoleLogger {
    let queue = Arc::new(Mutex::new(Vec::<String>::new()));
    let thread_queue = queue.clone();
    let scheduler = thread::spawn(move || {
      let mut std_handle = io::BufWriter::new(target.handle());
      loop {
        write_all(&mut std_handle, drain(&thread_queue));
        thread::sleep(flush_interval);
      }
    });
    ConsoleLogger {
      queue: queue,
      target: target,
      _scheduler: scheduler,
    }
  }
}

impl Sink for ConsoleLogger {
  // Add message to the queue.  It'll get picked up by the next write timer.
  fn write(&mut self, level: LogLevel, msg: &str) {
    let formatted_msg = format_line(level, msg);
    match self.queue.lock() {
      Ok(mut shared_queue) => shared_queue.push(formatted_msg),
      Err(poisoned) => poisoned.into_inner().push(formatted_msg),
    }
  }

  // write whatever is queued now instead of waiting for the timer
  fn flush(&mut self) {
    let mut handle = self.target.handle();
    write_all(&mut *handle, drain(&self.queue));
  }
}

// Keeps every (level, message) pair. Clones share the same buffer, so tests can hand one
// clone to a logger and read back through the other.
#[derive(Clone, Default)]
pub struct MemorySink {
  lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemorySink {
  pub fn new() -> MemorySink {
    MemorySink::default()
  }

  pub fn lines(&self) -> Vec<(LogLevel, String)> {
    match self.lines.lock() {
      Ok(lines) => lines.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  pub fn contains(&self, level: LogLevel, fragment: &str) -> bool {
    self
      .lines()
      .iter()
      .any(|(logged, msg)| *logged == level && msg.contains(fragment))
  }
}

impl Sink for MemorySink {
  fn write(&mut self, level: LogLevel, msg: &str) {
    match self.lines.lock() {
      Ok(mut lines) => lines.push((level, msg.to_owned())),
      Err(poisoned) => poisoned.into_inner().push((level, msg.to_owned())),
    }
  }
}
