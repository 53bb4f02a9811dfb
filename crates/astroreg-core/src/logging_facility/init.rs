//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::str::FromStr;
use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output, warnings only; the menu shares the terminal
    #[default]
    Interactive,
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(Profile::Interactive),
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile '{}'", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(profile: Profile) -> &'static str {
    match profile {
        Profile::Interactive => "astroreg=warn",
        Profile::Development => "astroreg=debug",
        Profile::Production => "astroreg=info",
        Profile::Test => "off",
    }
}

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(profile)))
}

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops. All output goes
/// to stderr so stdout stays reserved for the menu.
///
/// # Profiles
///
/// - **Interactive**: Human-readable logs, warnings and above
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: No output
///
/// # Example
///
/// ```
/// use astroreg_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Interactive | Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };

        // A subscriber installed elsewhere (e.g. test capture) wins.
        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("development".parse(), Ok(Profile::Development));
        assert_eq!("interactive".parse(), Ok(Profile::Interactive));
        assert_eq!("PROD".parse(), Ok(Profile::Production));
        assert_eq!("test".parse(), Ok(Profile::Test));
        assert!("verbose".parse::<Profile>().is_err());
    }

    #[test]
    fn test_default_profile_is_interactive() {
        assert_eq!(Profile::default(), Profile::Interactive);
    }

    #[test]
    fn test_interactive_profile_hides_op_events() {
        assert_eq!(default_directive(Profile::Interactive), "astroreg=warn");
        assert_eq!(default_directive(Profile::Development), "astroreg=debug");
        assert_eq!(default_directive(Profile::Production), "astroreg=info");
    }
}
