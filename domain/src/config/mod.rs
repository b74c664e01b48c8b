//! Presentation-neutral settings shared by every front end.

mod output_format;

pub use output_format::OutputFormat;
