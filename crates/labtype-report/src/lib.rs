//! labtype-report — Result card export.
//!
//! Renders a completed assessment as an SVG image, a self-contained HTML
//! page, JSON, or plain text, and falls back to a share summary when the
//! image cannot be produced.

pub mod error;
pub mod export;
pub mod html;
pub mod svg;
pub mod text;

pub use error::ExportError;
pub use export::{export_or_fallback, parse_formats, ExportFormat, ExportOutcome, FileExporter, ResultExporter};
