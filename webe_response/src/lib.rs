extern crate serde;
extern crate serde_json;

pub mod completed;
pub mod config;
pub mod constants;
pub mod cookie;
pub mod error;
pub mod headers;
pub mod request;
pub mod responders;
pub mod response;
pub mod status;

pub use completed::Completed;
pub use config::ResponseConfig;
pub use cookie::{Cookie, Expiry};
pub use error::ResponseError;
pub use request::RequestContext;
pub use response::{Response, Secured};
pub use status::Status;
