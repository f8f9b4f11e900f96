//! Finding text and the sinks that receive it

pub mod finding;
pub mod sink;

pub use finding::{Diagnostic, Finding, Party};
pub use sink::{MemorySink, ReportSink, TeeSink};
