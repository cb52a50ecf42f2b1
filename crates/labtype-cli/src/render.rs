//! Result presentation and export shared by the result-producing commands.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use comfy_table::{Cell, Table};

use labtype_core::config::{load_config_from, LabtypeConfig};
use labtype_core::model::Pole;
use labtype_core::report::AssessmentResult;
use labtype_report::export::{export_or_fallback, parse_formats, ExportFormat, ExportOutcome, FileExporter};
use labtype_report::text::ASSESSMENT_NAME;

use crate::ExportArgs;

/// Config file merged with command-line flags. Flags win.
pub struct Settings {
    pub config: LabtypeConfig,
    pub output_dir: PathBuf,
    pub formats: Vec<ExportFormat>,
    pub capture_timeout: Duration,
}

impl Settings {
    pub fn resolve(args: &ExportArgs) -> Result<Self> {
        let config = load_config_from(args.config.as_deref())?;

        let output_dir = args
            .output
            .clone()
            .unwrap_or_else(|| config.output_dir.clone());
        let formats = match &args.format {
            Some(list) => parse_formats(list.split(',').collect::<Vec<_>>().as_slice())?,
            None => parse_formats(config.formats.as_slice())?,
        };
        let capture_timeout = Duration::from_millis(config.capture_timeout_ms);

        Ok(Self {
            config,
            output_dir,
            formats,
            capture_timeout,
        })
    }
}

/// Print the result card to stdout.
pub fn print_result(result: &AssessmentResult) {
    let profile = result.profile();

    println!();
    println!("{ASSESSMENT_NAME}");
    println!();
    println!("  {}  {}", result.code, profile.display_title());
    println!();
    println!("{}", profile.description);
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Dimension", "Score", "Leaning", "Strength"]);
    for axis in result.axes() {
        let info = axis.dimension.info();
        let (label, english) = match axis.pole {
            Pole::Positive => (info.positive_label, info.positive_english),
            Pole::Negative => (info.negative_label, info.negative_english),
        };
        table.add_row(vec![
            Cell::new(format!("{} ({})", info.name, info.english_name)),
            Cell::new(format!("{:+}", axis.score)),
            Cell::new(format!("{} {label} {english}", axis.letter())),
            Cell::new(format!("{}%", axis.deviation_percent)),
        ]);
    }
    println!("{table}");
    println!();
    println!("优势: {}", profile.strengths);
    println!("挑战: {}", profile.needs);
    println!("最佳拍档: {}", profile.advice);
}

/// Export result cards, printing where they went or the fallback text.
pub async fn export_result(result: &AssessmentResult, settings: &Settings) -> ExportOutcome {
    let exporter = FileExporter::new(&settings.output_dir, settings.formats.clone());
    let outcome = export_or_fallback(&exporter, result, settings.capture_timeout).await;

    println!();
    match &outcome {
        ExportOutcome::Saved(paths) => {
            println!("Saved:");
            for path in paths {
                println!("  {}", path.display());
            }
        }
        ExportOutcome::TextFallback {
            text,
            reason,
            partial,
        } => {
            eprintln!("Could not save result cards ({reason}).");
            if !partial.is_empty() {
                eprintln!("Written before the failure:");
                for path in partial {
                    eprintln!("  {}", path.display());
                }
            }
            println!("{text}");
        }
    }
    outcome
}
