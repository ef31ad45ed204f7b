//! Derive macros shared by the value types: `Display` for the enums and
//! `Duration`, arithmetic derives for `Duration`.

#[allow(unused_imports)]
pub use derive_more::{Add, Display, Neg, Sub};
