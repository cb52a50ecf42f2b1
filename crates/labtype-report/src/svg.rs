//! SVG result card.
//!
//! The shareable image: personality code, title, one bar per dimension and
//! the profile text, laid out on a fixed-width card.

use std::fmt::Write as _;

use labtype_core::model::Pole;
use labtype_core::report::AssessmentResult;
use labtype_core::scoring::AxisReading;

use crate::html::html_escape;
use crate::text::ASSESSMENT_NAME;

const CARD_WIDTH: u32 = 720;
const MARGIN: u32 = 60;
const AXIS_WIDTH: u32 = CARD_WIDTH - 2 * MARGIN;
const AXIS_BLOCK_HEIGHT: u32 = 96;
const LINE_HEIGHT: u32 = 26;
const WRAP_CHARS: usize = 30;
const ACCENT: &str = "#667eea";
const INK: &str = "#2c3e50";
const MUTED: &str = "#7f8c8d";

/// Break `text` into lines of at most `width` characters.
///
/// Counts chars, not display width; the card text is mostly CJK so every
/// glyph is roughly one em.
pub(crate) fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Generate the SVG card for a result.
pub fn generate_svg(result: &AssessmentResult) -> String {
    let profile = result.profile();
    let description = wrap_chars(profile.description, WRAP_CHARS);
    let sections: Vec<(&str, Vec<String>)> = vec![
        ("优势", wrap_chars(profile.strengths, WRAP_CHARS)),
        ("挑战", wrap_chars(profile.needs, WRAP_CHARS)),
        ("最佳拍档", wrap_chars(profile.advice, WRAP_CHARS)),
    ];

    let mut body = String::new();
    let mut y: u32 = 60;

    let _ = writeln!(
        body,
        "  <text x=\"{}\" y=\"{y}\" font-size=\"18\" fill=\"{MUTED}\" text-anchor=\"middle\">{}</text>",
        CARD_WIDTH / 2,
        ASSESSMENT_NAME
    );
    y += 80;
    let _ = writeln!(
        body,
        "  <text x=\"{}\" y=\"{y}\" font-size=\"64\" font-weight=\"900\" letter-spacing=\"6\" fill=\"{ACCENT}\" text-anchor=\"middle\">{}</text>",
        CARD_WIDTH / 2,
        result.code
    );
    y += 44;
    let _ = writeln!(
        body,
        "  <text x=\"{}\" y=\"{y}\" font-size=\"24\" font-weight=\"600\" fill=\"{INK}\" text-anchor=\"middle\">{}</text>",
        CARD_WIDTH / 2,
        html_escape(&profile.display_title())
    );
    y += 44;

    for line in &description {
        let _ = writeln!(
            body,
            "  <text x=\"{MARGIN}\" y=\"{y}\" font-size=\"17\" fill=\"{INK}\">{}</text>",
            html_escape(line)
        );
        y += LINE_HEIGHT;
    }
    y += 20;

    for axis in result.axes() {
        body.push_str(&axis_block(&axis, y));
        y += AXIS_BLOCK_HEIGHT;
    }

    for (heading, lines) in &sections {
        let _ = writeln!(
            body,
            "  <text x=\"{MARGIN}\" y=\"{y}\" font-size=\"18\" font-weight=\"700\" fill=\"{ACCENT}\">{heading}</text>"
        );
        y += LINE_HEIGHT + 4;
        for line in lines {
            let _ = writeln!(
                body,
                "  <text x=\"{MARGIN}\" y=\"{y}\" font-size=\"16\" fill=\"{INK}\">{}</text>",
                html_escape(line)
            );
            y += LINE_HEIGHT;
        }
        y += 12;
    }

    let height = y + 30;
    let mut svg = format!(
        "<svg width=\"{CARD_WIDTH}\" height=\"{height}\" viewBox=\"0 0 {CARD_WIDTH} {height}\" xmlns=\"http://www.w3.org/2000/svg\" font-family=\"Inter, 'PingFang SC', 'Noto Sans CJK SC', sans-serif\">\n"
    );
    let _ = writeln!(
        svg,
        "  <rect x=\"0\" y=\"0\" width=\"{CARD_WIDTH}\" height=\"{height}\" rx=\"16\" fill=\"#ffffff\"/>"
    );
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}

/// One dimension: heading, pole labels, percentage, bar, and marker.
fn axis_block(axis: &AxisReading, top: u32) -> String {
    let info = axis.dimension.info();
    let (positive, negative) = axis.dimension.letters();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "  <text x=\"{}\" y=\"{top}\" font-size=\"18\" font-weight=\"600\" fill=\"{INK}\" text-anchor=\"middle\">{} <tspan font-size=\"14\" font-style=\"italic\" fill=\"{MUTED}\">{}</tspan></text>",
        CARD_WIDTH / 2,
        info.name,
        info.english_name
    );

    let label_y = top + 28;
    let _ = writeln!(
        out,
        "  <text x=\"{MARGIN}\" y=\"{label_y}\" font-size=\"14\" fill=\"{INK}\">{} <tspan font-weight=\"900\" fill=\"{ACCENT}\">{negative}</tspan><tspan font-style=\"italic\" fill=\"{MUTED}\">{}</tspan></text>",
        info.negative_label,
        info.negative_english.get(1..).unwrap_or_default()
    );
    let _ = writeln!(
        out,
        "  <text x=\"{}\" y=\"{label_y}\" font-size=\"14\" fill=\"{INK}\" text-anchor=\"end\">{} <tspan font-weight=\"900\" fill=\"{ACCENT}\">{positive}</tspan><tspan font-style=\"italic\" fill=\"{MUTED}\">{}</tspan></text>",
        CARD_WIDTH - MARGIN,
        info.positive_label,
        info.positive_english.get(1..).unwrap_or_default()
    );
    let _ = writeln!(
        out,
        "  <text x=\"{}\" y=\"{label_y}\" font-size=\"16\" font-weight=\"700\" fill=\"{INK}\" text-anchor=\"middle\">{}%</text>",
        CARD_WIDTH / 2,
        axis.deviation_percent
    );

    let bar_y = top + 44;
    let _ = writeln!(
        out,
        "  <rect x=\"{MARGIN}\" y=\"{bar_y}\" width=\"{AXIS_WIDTH}\" height=\"12\" rx=\"6\" fill=\"#ecf0f1\"/>"
    );

    let fill_width = f64::from(AXIS_WIDTH) * axis.fill_width_percent() / 100.0;
    if fill_width > 0.0 {
        let centre = f64::from(MARGIN) + f64::from(AXIS_WIDTH) / 2.0;
        let fill_x = match axis.pole {
            Pole::Positive => centre,
            Pole::Negative => centre - fill_width,
        };
        let _ = writeln!(
            out,
            "  <rect x=\"{fill_x:.1}\" y=\"{bar_y}\" width=\"{fill_width:.1}\" height=\"12\" fill=\"{}\"/>",
            info.color
        );
    }

    let marker_x = f64::from(MARGIN) + f64::from(AXIS_WIDTH) * axis.marker_percent / 100.0;
    let _ = writeln!(
        out,
        "  <circle cx=\"{marker_x:.1}\" cy=\"{}\" r=\"10\" fill=\"{}\" stroke=\"#ffffff\" stroke-width=\"3\"/>",
        bar_y + 6,
        info.color
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtype_core::scoring::DimensionScores;

    fn make_result(scores: DimensionScores) -> AssessmentResult {
        AssessmentResult::new(uuid::Uuid::nil(), chrono::Utc::now(), scores, 40)
    }

    #[test]
    fn wrap_splits_on_char_count() {
        assert_eq!(wrap_chars("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_chars("理论先知", 2), vec!["理论", "先知"]);
        assert!(wrap_chars("", 3).is_empty());
    }

    #[test]
    fn svg_contains_code_title_and_axes() {
        let result = make_result(DimensionScores {
            horizon: -12,
            paradigm: -3,
            lever: -8,
            strategy: -20,
        });
        let svg = generate_svg(&result);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("AEDI"));
        assert!(svg.contains("屠榜工程师 (Benchmark Slayer)"));
        assert!(svg.contains("科研坐标"));
        assert!(svg.contains("创新策略"));
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn neutral_axes_have_no_fill() {
        let svg = generate_svg(&make_result(DimensionScores::default()));
        // background + four empty tracks
        assert_eq!(svg.matches("<rect").count(), 5);
        assert_eq!(svg.matches(">50%<").count(), 4);
    }

    #[test]
    fn negative_fill_extends_left_of_centre() {
        let result = make_result(DimensionScores {
            horizon: -15,
            ..DimensionScores::default()
        });
        let svg = generate_svg(&result);
        // centre 360, quarter of 600 = 150
        assert!(svg.contains("<rect x=\"210.0\""));
        assert!(svg.contains("width=\"150.0\""));
    }

    #[test]
    fn quotes_in_profile_text_are_escaped() {
        // FPMI advice contains ASCII quotes
        let result = make_result(DimensionScores {
            strategy: -1,
            ..DimensionScores::default()
        });
        assert_eq!(result.code.to_string(), "FPMI");
        let svg = generate_svg(&result);
        assert!(svg.contains("&quot;"));
    }
}
