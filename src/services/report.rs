use serde::Serialize;
use sg_tiles::{Diagnostic, Diagnostics, Severity};
use std::path::PathBuf;

/// A diagnostic as shown in the JSON report
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub severity: String,
    pub message: String,
}

impl From<&Diagnostic> for DiagnosticEntry {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity().to_string(),
            message: diagnostic.to_string(),
        }
    }
}

/// Summary of one successfully converted file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub tiles: PathBuf,
    pub palette: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub tile_count: usize,
    pub duplicate_tiles: usize,
    pub warnings: usize,
    pub diagnostics: Vec<DiagnosticEntry>,
}

impl FileReport {
    pub(crate) fn with_diagnostics(mut self, diagnostics: &Diagnostics) -> Self {
        self.duplicate_tiles = diagnostics.duplicate_tiles();
        self.warnings = diagnostics.count(Severity::Warning);
        self.diagnostics = diagnostics.iter().map(DiagnosticEntry::from).collect();
        self
    }
}

/// A file that could not be converted
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: String,
}

/// Outcome of a `convert` run over several files
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub converted: Vec<FileReport>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    /// True when every file converted
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sg_tiles::Rgb;

    fn report() -> FileReport {
        FileReport {
            input: PathBuf::from("logo.png"),
            tiles: PathBuf::from("logo (tiles).bin"),
            palette: PathBuf::from("logo (palette).bin"),
            preview: None,
            width: 16,
            height: 8,
            tile_count: 2,
            duplicate_tiles: 0,
            warnings: 0,
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn test_diagnostic_entry() {
        let entry = DiagnosticEntry::from(&Diagnostic::ColorClash {
            tile_x: 4,
            tile_y: 2,
            line: 7,
            colors: 3,
        });
        assert_eq!(
            entry,
            DiagnosticEntry {
                severity: "warning".to_string(),
                message: "color clash in tile (4, 2) line 7: 3 colors, only 2 kept".to_string(),
            }
        );
    }

    #[test]
    fn test_with_diagnostics_counts() {
        let mut diagnostics = Diagnostics::new(true);
        diagnostics.push(Diagnostic::BlackRemapped {
            color: Rgb::new(0, 0, 0),
        });
        diagnostics.push(Diagnostic::DuplicateTile { tile: 1, first: 0 });
        diagnostics.push(Diagnostic::SpriteColorBudget {
            tile_x: 0,
            tile_y: 0,
            line: 2,
            missing: 2,
        });

        let report = report().with_diagnostics(&diagnostics);
        assert_eq!(report.duplicate_tiles, 1);
        assert_eq!(report.warnings, 1);
        assert_eq!(report.diagnostics.len(), 3);
        assert_eq!(report.diagnostics[0].severity, "info");
    }

    #[test]
    fn test_json_shape() {
        let batch = BatchReport {
            converted: vec![report()],
            failed: vec![FailedFile {
                input: PathBuf::from("big.png"),
                error: "too big".to_string(),
            }],
        };

        let json: serde_json::Value = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["converted"][0]["tile_count"], 2);
        assert_eq!(json["converted"][0]["tiles"], "logo (tiles).bin");
        assert!(json["converted"][0].get("preview").is_none());
        assert_eq!(json["failed"][0]["error"], "too big");
        assert!(!batch.is_success());
        assert_eq!(batch.total(), 2);
    }
}
