//! Credential store: a small YAML file under the user's home directory.
//!
//! The file holds the service credentials and the account mode. It is read
//! once per invocation and never written back outside `kintai init`.
//! Passwords are never printed or logged.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// How the session is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Log in as an administrator, then impersonate the employee.
    Admin,
    /// Log in directly as the employee.
    Staff,
}

impl AccountType {
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

/// Service credentials, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub login_id: String,
    pub password: String,
    pub account_type: AccountType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub credential: Credentials,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kintai")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kintai")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kintai.conf")
    }

    /// Load the configuration from `path`, or from the standard location
    /// when `path` is `None`. A missing or unparsable file is
    /// [`AppError::ConfigLoad`], which the CLI turns into a hint to run
    /// `kintai init`.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };
        let content = fs::read_to_string(&file).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Write the configuration to `path`, or to the standard location when
    /// `path` is `None`, creating the directory if needed.
    pub fn save(&self, path: Option<&str>) -> AppResult<()> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => {
                fs::create_dir_all(Self::config_dir())?;
                Self::config_file()
            }
        };
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(&file, yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_yaml() {
        let cfg = Config {
            credential: Credentials {
                client_id: "acme".into(),
                login_id: "boss@example.com".into(),
                password: "hunter2".into(),
                account_type: AccountType::Admin,
            },
        };
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(yaml.contains("account_type: admin"));

        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.credential.client_id, "acme");
        assert_eq!(back.credential.account_type, AccountType::Admin);
    }

    #[test]
    fn missing_file_is_config_load_error() {
        let err = Config::load(Some("/nonexistent/kintai.conf")).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoad));
    }

    #[test]
    fn account_type_labels() {
        assert_eq!(AccountType::from_label("admin"), Some(AccountType::Admin));
        assert_eq!(AccountType::from_label("staff"), Some(AccountType::Staff));
        assert_eq!(AccountType::from_label("boss"), None);
        assert_eq!(AccountType::Staff.as_label(), "staff");
    }
}
