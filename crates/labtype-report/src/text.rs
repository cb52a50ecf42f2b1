//! Plain-text renderings: share summary, fallback text, and a terminal card.

use std::fmt::Write as _;

use labtype_core::report::AssessmentResult;

/// Display name of the assessment.
pub const ASSESSMENT_NAME: &str = "AI研究者科研人格测评";

/// `"{code} {title}"`.
pub fn summary_line(result: &AssessmentResult) -> String {
    format!("{} {}", result.code, result.profile().title)
}

/// Share message used when no image can be produced.
pub fn share_text(result: &AssessmentResult) -> String {
    format!(
        "我在{ASSESSMENT_NAME}中的结果是：{}！快来测测你的科研人格吧！",
        summary_line(result)
    )
}

/// File name stem for exported cards, e.g. `AI研究者人格测评-FEMI-炼丹宗师`.
pub fn export_file_stem(result: &AssessmentResult) -> String {
    format!("AI研究者人格测评-{}-{}", result.code, result.profile().title)
}

/// Full result as plain text, one section per paragraph.
pub fn render_text_card(result: &AssessmentResult) -> String {
    let profile = result.profile();
    let mut out = String::new();

    let _ = writeln!(out, "{ASSESSMENT_NAME}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}  {}", result.code, profile.display_title());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", profile.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "优势: {}", profile.strengths);
    let _ = writeln!(out, "挑战: {}", profile.needs);
    let _ = writeln!(out, "最佳拍档: {}", profile.advice);
    let _ = writeln!(out);

    for axis in result.axes() {
        let info = axis.dimension.info();
        let _ = writeln!(
            out,
            "{} ({}): {:+} -> {} {}%",
            info.name,
            info.english_name,
            axis.score,
            axis.letter(),
            axis.deviation_percent
        );
    }

    out
}
