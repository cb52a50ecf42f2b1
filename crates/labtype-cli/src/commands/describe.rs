//! The `labtype describe` command.

use anyhow::{Context, Result};

use labtype_core::model::{Dimension, Pole};
use labtype_core::profiles::PersonalityCode;

pub fn execute(code: &str) -> Result<()> {
    let code: PersonalityCode = code.parse().context("expected a code like FEMI or AEDI")?;
    let profile = code.profile();

    println!("{code}  {}", profile.display_title());
    println!();
    for dimension in Dimension::ALL {
        let info = dimension.info();
        let pole = code.pole(dimension);
        let letter = dimension.letter(pole);
        let (label, english) = match pole {
            Pole::Positive => (info.positive_label, info.positive_english),
            Pole::Negative => (info.negative_label, info.negative_english),
        };
        println!("  {letter}  {} ({}): {label} {english}", info.name, info.english_name);
    }
    println!();
    println!("{}", profile.description);
    println!();
    println!("优势: {}", profile.strengths);
    println!("挑战: {}", profile.needs);
    println!("最佳拍档: {}", profile.advice);
    Ok(())
}
