//! A compile-time `Incrementable` predicate over pre- and post-increment
//! operators, and a `double_increment` function constrained by it.

pub mod core;
pub mod error;


pub use crate::core::counter::{Counter, FieldCounter};
pub use crate::core::increment::{double_increment, Incrementable, PostIncrement, PreIncrement};
pub use error::Error;
