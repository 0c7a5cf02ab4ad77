//! Tower middleware aplicados a todas las requests.
//!
//! - `RequestIdLayer`: propaga o genera X-Request-Id
//! - `LoggingLayer`: un span de tracing por request

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};
