// file: src/options/mod.rs
// version: 1.0.0
// guid: 4e8c1f06-a2b7-4d39-9f15-b07d6e3a52c8

//! Named options for the GDAL command builders
//!
//! An [`OptionBag`] is a loose property bag: every option the tool knows is
//! predefined with its default, and any other name may be stored as well.
//! Names the tool does not know are kept but never serialized.

pub mod bag;
pub mod value;

pub use bag::OptionBag;
pub use value::{OptionValue, Scalar};
