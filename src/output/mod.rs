//! Output formatters for scenario results

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
