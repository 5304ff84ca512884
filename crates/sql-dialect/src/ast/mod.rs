//! Typed input structures consumed by the rendering entry points.

pub mod expr;
pub mod fields;

pub use expr::{FieldCond, Node};
pub use fields::FieldRef;
