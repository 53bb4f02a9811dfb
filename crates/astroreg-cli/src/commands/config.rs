//! Config command and the settings shared by every subcommand
//!
//! Usage: astroreg config [--config <PATH>] [--reject-duplicates] [--log-profile <PROFILE>]

use std::path::PathBuf;

use astroreg_core::config::ConfigError;
use astroreg_core::logging_facility::Profile;
use astroreg_core::{AgencyConfig, DuplicateKeyMode};
use clap::Args;

/// Configuration sources; flags override the file
#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Refuse registrations that reuse an existing identifier or flight code
    #[arg(long)]
    pub reject_duplicates: bool,

    /// Logging profile (interactive, development, production, test)
    #[arg(long)]
    pub log_profile: Option<Profile>,
}

impl SettingsArgs {
    /// Merge the optional config file with command-line overrides
    ///
    /// # Errors
    /// Returns the `ConfigError` from loading `--config`, if one was given.
    pub fn resolve(&self) -> Result<AgencyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AgencyConfig::load(path)?,
            None => AgencyConfig::default(),
        };

        if self.reject_duplicates {
            config.duplicate_keys = DuplicateKeyMode::Reject;
        }
        if let Some(profile) = self.log_profile {
            config.log_profile = profile;
        }

        Ok(config)
    }
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Execute config command
pub fn execute(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.settings.resolve()?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = SettingsArgs::default().resolve().unwrap();
        assert_eq!(config, AgencyConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let settings = SettingsArgs {
            config: None,
            reject_duplicates: true,
            log_profile: Some(Profile::Production),
        };

        let config = settings.resolve().unwrap();

        assert_eq!(config.duplicate_keys, DuplicateKeyMode::Reject);
        assert_eq!(config.log_profile, Profile::Production);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let settings = SettingsArgs {
            config: Some(PathBuf::from("/nonexistent/astroreg.toml")),
            ..SettingsArgs::default()
        };

        assert!(matches!(settings.resolve(), Err(ConfigError::Io { .. })));
    }
}
