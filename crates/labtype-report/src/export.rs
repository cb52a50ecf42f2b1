//! Result export with a text fallback.
//!
//! An exporter turns a completed [`AssessmentResult`] into files. Capture may
//! take a while (or fail), so callers go through [`export_or_fallback`],
//! which bounds the wait and degrades to the plain-text share summary.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;

use labtype_core::report::AssessmentResult;

use crate::error::ExportError;
use crate::html::generate_html;
use crate::svg::generate_svg;
use crate::text::{export_file_stem, render_text_card, share_text};

/// Output formats for a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Svg,
    Html,
    Json,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Svg,
        ExportFormat::Html,
        ExportFormat::Json,
        ExportFormat::Text,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    /// Render the result in this format.
    pub fn render(self, result: &AssessmentResult) -> Result<String, ExportError> {
        Ok(match self {
            ExportFormat::Svg => generate_svg(result),
            ExportFormat::Html => generate_html(result),
            ExportFormat::Json => result.to_json()?,
            ExportFormat::Text => render_text_card(result),
        })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Svg => write!(f, "svg"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "svg" | "image" => Ok(ExportFormat::Svg),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parse a list of format names. `all` expands to every format; duplicates
/// are dropped.
pub fn parse_formats<S: AsRef<str>>(names: &[S]) -> Result<Vec<ExportFormat>, ExportError> {
    let mut formats = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        let parsed = if name.eq_ignore_ascii_case("all") {
            ExportFormat::ALL.to_vec()
        } else {
            vec![name.parse()?]
        };
        for format in parsed {
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
    }
    if formats.is_empty() {
        return Err(ExportError::NoFormats);
    }
    Ok(formats)
}

/// Something that can capture a result card.
#[async_trait]
pub trait ResultExporter: Send + Sync {
    /// Human-readable exporter name.
    fn name(&self) -> &str;

    /// Produce the card, pushing each path onto `written` as soon as it is on
    /// disk. If the future is dropped early, `written` still lists what exists.
    async fn export(
        &self,
        result: &AssessmentResult,
        written: &mut Vec<PathBuf>,
    ) -> Result<(), ExportError>;
}

/// Writes one file per format into an output directory.
#[derive(Debug, Clone)]
pub struct FileExporter {
    output_dir: PathBuf,
    formats: Vec<ExportFormat>,
}

impl FileExporter {
    pub fn new(output_dir: impl Into<PathBuf>, formats: Vec<ExportFormat>) -> Self {
        Self {
            output_dir: output_dir.into(),
            formats,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn formats(&self) -> &[ExportFormat] {
        &self.formats
    }

    /// Destination for one format, e.g. `AI研究者人格测评-FEMI-炼丹宗师.svg`.
    pub fn path_for(&self, result: &AssessmentResult, format: ExportFormat) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            export_file_stem(result),
            format.extension()
        ))
    }
}

#[async_trait]
impl ResultExporter for FileExporter {
    fn name(&self) -> &str {
        "file"
    }

    async fn export(
        &self,
        result: &AssessmentResult,
        written: &mut Vec<PathBuf>,
    ) -> Result<(), ExportError> {
        if self.formats.is_empty() {
            return Err(ExportError::NoFormats);
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ExportError::Io {
                path: self.output_dir.clone(),
                source,
            })?;

        for &format in &self.formats {
            let content = format.render(result)?;
            let path = self.path_for(result, format);
            tokio::fs::write(&path, content)
                .await
                .map_err(|source| ExportError::Io {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(%format, path = %path.display(), "wrote result card");
            written.push(path);
        }
        Ok(())
    }
}

/// What happened when exporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Files written successfully.
    Saved(Vec<PathBuf>),
    /// Capture failed; here is the text to share instead. `partial` lists
    /// cards that were written before the failure or timeout.
    TextFallback {
        text: String,
        reason: String,
        partial: Vec<PathBuf>,
    },
}

impl ExportOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ExportOutcome::TextFallback { .. })
    }
}

/// Run an exporter with a best-effort time limit, falling back to the
/// share text on failure or timeout.
pub async fn export_or_fallback(
    exporter: &dyn ResultExporter,
    result: &AssessmentResult,
    limit: Duration,
) -> ExportOutcome {
    let mut written = Vec::new();
    let attempt = tokio::time::timeout(limit, exporter.export(result, &mut written)).await;
    let error = match attempt {
        Ok(Ok(())) => {
            tracing::info!(
                exporter = exporter.name(),
                files = written.len(),
                "result card exported"
            );
            return ExportOutcome::Saved(written);
        }
        Ok(Err(e)) => e,
        Err(_) => ExportError::Timeout(limit.as_millis() as u64),
    };

    tracing::warn!(
        exporter = exporter.name(),
        error = %error,
        partial = written.len(),
        "export failed, falling back to text"
    );
    ExportOutcome::TextFallback {
        text: share_text(result),
        reason: error.to_string(),
        partial: written,
    }
}
