use crate::auth;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::ui::prompt::StdinPrompter;
use crate::ui::table::ConsoleSink;
use crate::workflow::correction::{Day, Outcome, correct_day};

/// Handle the `show [DAY]` command: list the day's punches and walk the
/// correction workflow if the caller wants a fix.
pub fn handle(cli: &Cli, day: &Option<String>) -> AppResult<()> {
    let day_arg = match day {
        Some(d) => d.clone(),
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };
    // validate before touching the credentials or the network
    Day::parse(&day_arg)?;

    let cfg = Config::load(cli.config.as_deref())?;
    let mut session = auth::establish(&cfg.credential)?;

    let mut ui = StdinPrompter;
    let mut sink = ConsoleSink;
    match correct_day(&mut session, &mut ui, &mut sink, &day_arg)? {
        Outcome::Committed => messages::success("Punch time fixed."),
        Outcome::Aborted => messages::info("Nothing changed."),
    }
    Ok(())
}
