//! vidpages Generator Library
//!
//! Turns a JSON list of video records and one HTML template into one static
//! page per record.
//!
//! # Modules
//!
//! - [`data`] - Data file loading
//! - [`template`] - Page template and its fixed markers
//! - [`report`] - Styled console reporting
//! - [`generate`] - Run orchestration

pub mod data;
pub mod generate;
pub mod report;
pub mod template;

pub use data::{DataError, RawRecord, load_records, parse_records};
pub use generate::{GenerateError, Generator, PageError, PageOutcome, RunSummary};
pub use report::{LogLine, Reporter, Style};
pub use template::{Marker, PageTemplate};
