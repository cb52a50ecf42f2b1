//! The `labtype profiles` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use labtype_core::profiles::PersonalityCode;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Title", "English", "Best partner"]);

    for code in PersonalityCode::all() {
        let profile = code.profile();
        let partner = profile
            .partner()
            .map(|p| format!("{p} {}", p.profile().title))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(code),
            Cell::new(profile.title),
            Cell::new(profile.english_title),
            Cell::new(partner),
        ]);
    }

    println!("{table}");
    Ok(())
}
