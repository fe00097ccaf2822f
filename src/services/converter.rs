use sg_tiles::{Diagnostics, Severity, StreamPaths, TileConverter};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::ConvertOptions;
use crate::services::image_loader::load_png;
use crate::services::preview::render_preview;
use crate::services::report::{BatchReport, FailedFile, FileReport};
use crate::services::writer::write_outputs;

/// Converts image files into tile streams on disk.
///
/// Each file is an independent run with its own color table, duplicate
/// registry and diagnostics. A file that fails at any step leaves no
/// outputs behind.
pub struct ConversionService {
    options: ConvertOptions,
    converter: TileConverter,
}

impl ConversionService {
    pub fn new(options: ConvertOptions) -> Self {
        let converter = TileConverter::new()
            .transparent(options.transparent)
            .diagnostics(options.diagnostics)
            .recompute(options.recompute);
        Self { options, converter }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert one file and write `<stem> (tiles).bin` and `<stem> (palette).bin`
    /// (plus `<stem> (preview).png` when enabled) next to it.
    pub fn convert_file(&self, input: &Path) -> Result<FileReport, AppError> {
        let image = load_png(input)?;
        tracing::info!(
            file = %input.display(),
            width = image.width(),
            height = image.height(),
            "Converting"
        );

        let conversion = self.converter.convert(&image)?;
        log_diagnostics(input, &conversion.diagnostics);

        // Everything is rendered in memory before the first file is created
        let preview = if self.options.preview {
            let path = StreamPaths::sibling(input, " (preview).png");
            let png_bytes = render_preview(&conversion.image, self.converter.palette())?;
            Some((path, png_bytes))
        } else {
            None
        };

        let paths = StreamPaths::for_input(input);
        write_outputs(
            &paths,
            &conversion.image,
            preview
                .as_ref()
                .map(|(path, bytes)| (path.as_path(), bytes.as_slice())),
        )?;
        let preview = preview.map(|(path, _)| path);

        let report = FileReport {
            input: input.to_path_buf(),
            tiles: paths.tiles,
            palette: paths.palette,
            preview,
            width: conversion.image.width(),
            height: conversion.image.height(),
            tile_count: conversion.image.tile_count(),
            duplicate_tiles: 0,
            warnings: 0,
            diagnostics: Vec::new(),
        };
        Ok(report.with_diagnostics(&conversion.diagnostics))
    }

    /// Convert every file in turn. A failing file is logged and recorded,
    /// and the remaining files still run.
    pub fn convert_batch(&self, inputs: &[PathBuf]) -> BatchReport {
        let mut batch = BatchReport::default();
        for input in inputs {
            match self.convert_file(input) {
                Ok(report) => batch.converted.push(report),
                Err(e) => {
                    tracing::error!(file = %input.display(), error = %e, "Conversion failed");
                    batch.failed.push(FailedFile {
                        input: input.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        batch
    }
}

fn log_diagnostics(input: &Path, diagnostics: &Diagnostics) {
    if !diagnostics.is_enabled() {
        return;
    }
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Info => tracing::info!(file = %input.display(), "{}", diagnostic),
            Severity::Warning => tracing::warn!(file = %input.display(), "{}", diagnostic),
        }
    }
    tracing::info!(
        file = %input.display(),
        warnings = diagnostics.count(Severity::Warning),
        duplicates = diagnostics.duplicate_tiles(),
        "Diagnostics summary"
    );
}
