//! vidpages Core Library
//!
//! Core types, configuration, and error handling for the vidpages page generator.

pub mod config;
pub mod error;
pub mod record;

pub use config::Config;
pub use error::{CoreError, Result};
pub use record::{RecordError, VideoRecord};
