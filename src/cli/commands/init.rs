use crate::cli::parser::Cli;
use crate::config::{AccountType, Config, Credentials};
use crate::errors::AppResult;
use crate::ui::prompt::{Interaction, StdinPrompter};
use crate::ui::messages;

/// Handle the `init` command
///
/// Collects the service credentials interactively and writes the
/// credentials file. Values are stored as entered; the password is never
/// echoed back.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut prompter = StdinPrompter;
    let credential = collect(&mut prompter);

    let cfg = Config { credential };
    cfg.save(cli.config.as_deref())?;

    let path = match &cli.config {
        Some(p) => p.clone(),
        None => Config::config_file().display().to_string(),
    };
    messages::success(format!("Credentials saved to {}", path));
    Ok(())
}

fn collect(ui: &mut dyn Interaction) -> Credentials {
    let labels = vec!["staff".to_string(), "admin".to_string()];
    let picked = ui.select_one("Choose your account type", &labels);
    let account_type = AccountType::from_label(&picked).unwrap_or(AccountType::Staff);

    Credentials {
        client_id: ui.prompt_text("Enter your client ID"),
        login_id: ui.prompt_text("Enter your login ID"),
        password: ui.prompt_text("Enter your password"),
        account_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::testing::ScriptedPrompter;

    #[test]
    fn collect_builds_admin_credentials() {
        let mut ui = ScriptedPrompter::new()
            .select("admin")
            .text("acme")
            .text("boss@example.com")
            .text("hunter2");

        let c = collect(&mut ui);
        assert_eq!(c.account_type, AccountType::Admin);
        assert_eq!(c.client_id, "acme");
        assert_eq!(c.login_id, "boss@example.com");
        assert_eq!(c.password, "hunter2");
    }
}
