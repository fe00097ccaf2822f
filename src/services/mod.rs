pub mod converter;
pub mod image_loader;
pub mod preview;
pub mod report;
pub mod writer;

pub use converter::ConversionService;
pub use image_loader::{decode_png, load_png};
pub use preview::render_preview;
pub use report::{BatchReport, DiagnosticEntry, FailedFile, FileReport};
pub use writer::write_outputs;
