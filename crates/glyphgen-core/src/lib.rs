//! Core contracts for glyphgen.
//!
//! This crate defines the range-spec and character-set types shared by the
//! generation engine and the CLI.

pub mod charset;
pub mod ranges;
pub mod request;

pub use charset::CharSet;
pub use ranges::{BMP_MAX, PointSpec, RangeSpec};
pub use request::{ExcludeGroup, GenerateOptions, IncludeGroup};
