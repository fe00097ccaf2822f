pub mod config;

pub use config::{CliOverrides, ConvertOptions, ConverterConfig, RecomputeSetting, CONFIG_ENV};
