//! Straightforward serialization: plain cross-reference tables, no object
//! streams.

pub(crate) mod object;
pub(crate) mod section;

pub struct SimpleEncoder;
