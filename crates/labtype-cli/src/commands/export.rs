//! The `labtype export` command.

use std::path::PathBuf;

use anyhow::Result;

use labtype_core::report::AssessmentResult;

use crate::render::{export_result, print_result, Settings};
use crate::ExportArgs;

pub async fn execute(result_path: PathBuf, export: ExportArgs) -> Result<()> {
    let settings = Settings::resolve(&export)?;
    let result = AssessmentResult::load_json(&result_path)?;

    print_result(&result);
    export_result(&result, &settings).await;
    Ok(())
}
