//! Per-file CRLF detection and in-place rewriting.
//!
//! The converter decides, one file at a time, whether any line ends in
//! `\r\n`, and in rewrite mode stages a converted copy in a scratch file
//! before replacing the original.

pub mod config;
pub mod engine;
pub mod sniff;

pub use config::{ConvertConfig, ScanMode};
pub use engine::{Converter, Outcome};
