//! Public API for the sg-tiles crate.
//!
//! This module provides the high-level API: [`TileConverter`] builder and
//! [`ConvertError`] unified error type.

mod builder;
mod error;

pub use builder::{Conversion, TileConverter};
pub use error::ConvertError;
