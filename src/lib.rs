//! gfx2sg - convert images into tile streams for 16-color tile displays
//!
//! Command-line front end around the `sg-tiles` encoder.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
