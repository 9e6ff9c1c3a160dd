//! Configuration types
//!
//! Board-agnostic scroller settings and a parser for the `[scrolltext]`
//! section of a TOML config file.

pub mod parser;
pub mod types;

pub use parser::{parse_config, ParseError};
pub use types::*;
