use crate::auth;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::net::{EMPLOYEE_PATH, ORIGIN};
use crate::ui::messages;
use crate::workflow::attendance::{PunchMode, punch};

/// Handle the `start` and `end` commands: log in and record the punch.
pub fn handle(cli: &Cli, mode: PunchMode) -> AppResult<()> {
    let cfg = Config::load(cli.config.as_deref())?;

    let mut session = auth::establish(&cfg.credential)?;
    punch(&mut session, mode)?;

    messages::success("done!");
    messages::info(format!("see {}{}/", ORIGIN, EMPLOYEE_PATH));
    Ok(())
}
