//! The `labtype random` command.

use anyhow::Result;

use labtype_core::session::{Intent, Session};

use crate::render::{export_result, print_result, Settings};
use crate::ExportArgs;

pub async fn execute(seed: Option<u64>, export: ExportArgs) -> Result<()> {
    let settings = Settings::resolve(&export)?;

    let mut options = settings.config.session_options();
    if seed.is_some() {
        options.seed = seed;
    }
    options.debug_fill = true;

    let mut session = Session::new(options);
    session.dispatch(Intent::FillRandom)?;
    let Some(result) = session.results() else {
        anyhow::bail!("random fill did not complete the assessment");
    };

    print_result(&result);
    export_result(&result, &settings).await;
    Ok(())
}
