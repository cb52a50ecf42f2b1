//! HTML result card.
//!
//! Produces a self-contained HTML file with all CSS inlined and the SVG card
//! embedded, so it can be opened or shared without any other assets.

use labtype_core::model::Pole;
use labtype_core::report::AssessmentResult;
use labtype_core::scoring::AxisReading;

use crate::svg::generate_svg;
use crate::text::ASSESSMENT_NAME;

/// Escape a string for safe HTML insertion.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML result page.
pub fn generate_html(result: &AssessmentResult) -> String {
    let profile = result.profile();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{ASSESSMENT_NAME} — {} {}</title>\n",
        result.code,
        html_escape(profile.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{ASSESSMENT_NAME}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | {}</p>\n",
        result.answered,
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Result card
    html.push_str("<section class=\"result-card\">\n");
    html.push_str(&format!(
        "<div class=\"personality-type\">{}</div>\n",
        result.code
    ));
    html.push_str(&format!(
        "<h2 class=\"personality-title\">{}</h2>\n",
        html_escape(&profile.display_title())
    ));
    html.push_str(&format!(
        "<p class=\"personality-desc\">{}</p>\n",
        html_escape(profile.description)
    ));

    html.push_str("<div class=\"dimension-chart\">\n");
    for axis in result.axes() {
        html.push_str(&axis_html(&axis));
    }
    html.push_str("</div>\n");

    for (heading, text) in [
        ("优势", profile.strengths),
        ("挑战", profile.needs),
        ("最佳拍档", profile.advice),
    ] {
        html.push_str(&format!(
            "<h3>{heading}</h3>\n<p>{}</p>\n",
            html_escape(text)
        ));
    }
    html.push_str("</section>\n");

    // Shareable image
    html.push_str("<section class=\"image\">\n");
    html.push_str("<details>\n<summary>Result image</summary>\n");
    html.push_str(&generate_svg(result));
    html.push_str("</details>\n</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(result)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

fn axis_html(axis: &AxisReading) -> String {
    let info = axis.dimension.info();
    let (positive, negative) = axis.dimension.letters();

    let fill_style = match (axis.fill_width_percent() > 0.0, axis.pole) {
        (false, _) => "width: 0%;".to_string(),
        (true, Pole::Positive) => format!(
            "left: 50%; width: {:.1}%; background: linear-gradient(90deg, #ffffff 0%, {} 100%);",
            axis.fill_width_percent(),
            info.color
        ),
        (true, Pole::Negative) => format!(
            "right: 50%; width: {:.1}%; background: linear-gradient(90deg, {} 0%, #ffffff 100%);",
            axis.fill_width_percent(),
            info.color
        ),
    };

    format!(
        r#"<div class="dimension-axis">
  <div class="dimension-title">{name} <span class="dimension-english">{english}</span></div>
  <div class="axis-info">
    <div class="label-group"><span class="label-text">{neg_label}</span> <span class="label-english"><span class="first-letter">{negative}</span>{neg_rest}</span></div>
    <div class="deviation-percent">{deviation}%</div>
    <div class="label-group"><span class="label-text">{pos_label}</span> <span class="label-english"><span class="first-letter">{positive}</span>{pos_rest}</span></div>
  </div>
  <div class="axis-bar">
    <div class="axis-fill" style="{fill_style}"></div>
    <div class="axis-marker" style="left: {marker:.1}%; background: {color};"></div>
  </div>
</div>
"#,
        name = info.name,
        english = info.english_name,
        neg_label = info.negative_label,
        neg_rest = info.negative_english.get(1..).unwrap_or_default(),
        pos_label = info.positive_label,
        pos_rest = info.positive_english.get(1..).unwrap_or_default(),
        deviation = axis.deviation_percent,
        marker = axis.marker_percent,
        color = info.color,
    )
}

const CSS: &str = r#"
:root { --bg: #f5f7fb; --card: #ffffff; --fg: #2c3e50; --muted: #7f8c8d; --accent: #667eea; --track: #ecf0f1; }
body { font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'PingFang SC', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
header { text-align: center; }
.meta { color: var(--muted); }
.result-card { max-width: 720px; margin: 1rem auto; padding: 40px; background: var(--card); border-radius: 16px; box-shadow: 0 8px 32px rgba(102, 126, 234, 0.3); }
.personality-type { text-align: center; color: var(--accent); font-size: 3.5rem; font-weight: 900; letter-spacing: 0.1em; }
.personality-title { text-align: center; }
p { line-height: 1.7; }
.dimension-axis { margin: 1.5rem 0; }
.dimension-title { text-align: center; font-size: 1.1rem; font-weight: 600; }
.dimension-english, .label-english { color: var(--muted); font-style: italic; font-size: 0.85rem; }
.axis-info { display: flex; justify-content: space-between; align-items: center; margin: 0.5rem 0; }
.label-text { font-size: 0.9rem; font-weight: 600; }
.first-letter { color: var(--accent); font-weight: 900; font-size: 1.1em; font-style: normal; }
.deviation-percent { font-weight: 700; border: 2px solid var(--accent); border-radius: 8px; padding: 4px 8px; min-width: 50px; text-align: center; }
.axis-bar { position: relative; height: 12px; background: var(--track); border-radius: 6px; }
.axis-fill { position: absolute; top: 0; height: 100%; }
.axis-marker { position: absolute; top: -4px; width: 20px; height: 20px; border-radius: 50%; transform: translateX(-50%); border: 3px solid #fff; }
pre { overflow-x: auto; padding: 1rem; background: var(--track); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { max-width: 720px; margin: 1rem auto; }
summary { cursor: pointer; font-weight: bold; }
"#;
