mod formatter;

pub use formatter::{format_generated, format_validation, OutputFormat};
