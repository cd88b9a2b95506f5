//! Shared types

mod errors;

pub use errors::{DepError, Result, ShapeError};
