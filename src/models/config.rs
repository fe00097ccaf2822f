use serde::Deserialize;
use sg_tiles::{LineRecompute, TransparentIndex};
use std::path::Path;

use crate::error::AppError;

/// Environment variable naming a config file used when `--config` is absent
pub const CONFIG_ENV: &str = "GFX2SG_CONFIG";

/// Converter configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Drawn palette index (1-15) encoded as transparent
    pub transparent_index: Option<i64>,

    /// Collect and log conversion diagnostics
    pub diagnostics: bool,

    /// Also write `<stem> (preview).png`
    pub preview: bool,

    /// Line color recomputation policy for sprite tiles
    pub recompute: RecomputeSetting,
}

/// Config/CLI spelling of [`LineRecompute`]
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecomputeSetting {
    #[default]
    WhenTileExceedsPair,
    Always,
}

impl From<RecomputeSetting> for LineRecompute {
    fn from(setting: RecomputeSetting) -> Self {
        match setting {
            RecomputeSetting::WhenTileExceedsPair => LineRecompute::WhenTileExceedsPair,
            RecomputeSetting::Always => LineRecompute::Always,
        }
    }
}

impl ConverterConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from a file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the file named by `GFX2SG_CONFIG`, if set
    pub fn load_from_env() -> Result<Option<Self>, AppError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)).map(Some),
            _ => Ok(None),
        }
    }
}

/// Effective options for a conversion run, after CLI overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub transparent: Option<TransparentIndex>,
    pub diagnostics: bool,
    pub preview: bool,
    pub recompute: LineRecompute,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub transparent_index: Option<i64>,
    pub verbose: bool,
    pub preview: bool,
    pub recompute: Option<RecomputeSetting>,
}

impl ConvertOptions {
    /// Merge config and CLI values. The transparent index is validated here,
    /// before any file is touched.
    pub fn resolve(config: &ConverterConfig, cli: CliOverrides) -> Result<Self, AppError> {
        let transparent = cli
            .transparent_index
            .or(config.transparent_index)
            .map(TransparentIndex::new)
            .transpose()?;

        Ok(Self {
            transparent,
            diagnostics: cli.verbose || config.diagnostics,
            preview: cli.preview || config.preview,
            recompute: cli.recompute.unwrap_or(config.recompute).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sg_tiles::PaletteError;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();

        assert_eq!(config.transparent_index, None);
        assert!(!config.diagnostics);
        assert!(!config.preview);
        assert_eq!(config.recompute, RecomputeSetting::WhenTileExceedsPair);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
transparent_index: 13
diagnostics: true
preview: true
recompute: always
"#;
        let config = ConverterConfig::from_yaml(yaml).unwrap();

        assert_eq!(
            config,
            ConverterConfig {
                transparent_index: Some(13),
                diagnostics: true,
                preview: true,
                recompute: RecomputeSetting::Always,
            }
        );
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = ConverterConfig::from_yaml("preview: true\n").unwrap();

        assert!(config.preview);
        assert_eq!(config.transparent_index, None);
        assert_eq!(config.recompute, RecomputeSetting::WhenTileExceedsPair);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let result = ConverterConfig::from_yaml("transparency: 3\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_recompute() {
        let result = ConverterConfig::from_yaml("recompute: sometimes\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConverterConfig::load(Path::new("/nonexistent/gfx2sg.yaml"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gfx2sg.yaml");
        std::fs::write(&path, "transparent_index: 4\n").unwrap();

        let config = ConverterConfig::load(&path).unwrap();
        assert_eq!(config.transparent_index, Some(4));
    }

    #[test]
    fn test_recompute_setting_maps_to_policy() {
        assert_eq!(
            LineRecompute::from(RecomputeSetting::WhenTileExceedsPair),
            LineRecompute::WhenTileExceedsPair
        );
        assert_eq!(
            LineRecompute::from(RecomputeSetting::Always),
            LineRecompute::Always
        );
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = ConverterConfig {
            transparent_index: Some(3),
            recompute: RecomputeSetting::Always,
            ..Default::default()
        };
        let cli = CliOverrides {
            transparent_index: Some(9),
            recompute: Some(RecomputeSetting::WhenTileExceedsPair),
            ..Default::default()
        };

        let options = ConvertOptions::resolve(&config, cli).unwrap();
        assert_eq!(options.transparent, Some(TransparentIndex::new(9).unwrap()));
        assert_eq!(options.recompute, LineRecompute::WhenTileExceedsPair);
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let config = ConverterConfig {
            transparent_index: Some(3),
            diagnostics: true,
            preview: true,
            recompute: RecomputeSetting::Always,
        };

        let options = ConvertOptions::resolve(&config, CliOverrides::default()).unwrap();
        assert_eq!(options.transparent, Some(TransparentIndex::new(3).unwrap()));
        assert!(options.diagnostics);
        assert!(options.preview);
        assert_eq!(options.recompute, LineRecompute::Always);
    }

    #[test]
    fn test_resolve_no_transparency() {
        let options =
            ConvertOptions::resolve(&ConverterConfig::default(), CliOverrides::default()).unwrap();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_resolve_rejects_out_of_range_index() {
        for value in [0, 16, -1] {
            let cli = CliOverrides {
                transparent_index: Some(value),
                ..Default::default()
            };
            match ConvertOptions::resolve(&ConverterConfig::default(), cli) {
                Err(AppError::TransparentIndex(PaletteError::TransparentIndexOutOfRange {
                    value: v,
                })) => assert_eq!(v, value),
                other => panic!("Expected TransparentIndex error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_resolve_rejects_index_from_config() {
        let config = ConverterConfig {
            transparent_index: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            ConvertOptions::resolve(&config, CliOverrides::default()),
            Err(AppError::TransparentIndex(_))
        ));
    }
}
