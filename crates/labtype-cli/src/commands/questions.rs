//! The `labtype questions` command.

use anyhow::Result;

use labtype_core::corpus::questions_for;
use labtype_core::model::Dimension;

pub fn execute(dimension: Option<&str>) -> Result<()> {
    let dimensions = match dimension {
        Some(name) => vec![name.parse::<Dimension>()?],
        None => Dimension::ALL.to_vec(),
    };

    for dimension in dimensions {
        let info = dimension.info();
        let (positive, negative) = dimension.letters();
        println!(
            "== {} ({}): A leans {positive} {}, B leans {negative} {} ==",
            info.name, info.english_name, info.positive_label, info.negative_label
        );
        for (i, question) in questions_for(dimension).enumerate() {
            println!("{:>2}. {}", i + 1, question.prompt);
            println!("    A: {}", question.option_a);
            println!("    B: {}", question.option_b);
        }
        println!();
    }
    Ok(())
}
