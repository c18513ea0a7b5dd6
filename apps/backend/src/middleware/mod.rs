//! Request middleware. Register as
//! `.wrap(StructuredLogger).wrap(TraceSpan).wrap(RequestTrace)` so that
//! `RequestTrace` runs first and the others can read its `TraceId`.

pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
