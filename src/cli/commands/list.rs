use crate::auth;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::table::{ConsoleSink, RenderSink};
use crate::workflow::attendance::list_attendance;

/// Handle the `list` command: print the monthly attendance report.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::load(cli.config.as_deref())?;

    let mut session = auth::establish(&cfg.credential)?;
    let report = list_attendance(&mut session)?;

    let mut sink = ConsoleSink;
    sink.render_table(&report.header, &report.rows, Some(&report.footer));
    Ok(())
}
