//! Intake configuration.
//!
//! The only setting is the duplicate policy, controlling what happens when a
//! patient who is already waiting arrives again. It defaults to skipping the
//! repeat arrival and can be switched with the
//! `EMERGENCY_INTAKE_DUPLICATE_POLICY` environment variable.

use std::str::FromStr;

use thiserror::Error;

/// Environment variable consulted by [`IntakeConfig::from_env`].
pub const DUPLICATE_POLICY_ENV: &str = "EMERGENCY_INTAKE_DUPLICATE_POLICY";

/// How intake treats an identifier that is already waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Drop the repeat arrival silently; the first arrival wins.
    #[default]
    Skip,
    /// Reject the whole intake with
    /// [`WaitlistError::DuplicateIdentifier`](crate::WaitlistError::DuplicateIdentifier).
    Reject,
}

/// Raised when a duplicate policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown duplicate policy '{0}'")]
pub struct UnknownPolicy(pub String);

impl FromStr for DuplicatePolicy {
    type Err = UnknownPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" | "ignore" | "first-wins" => Ok(Self::Skip),
            "reject" | "error" => Ok(Self::Reject),
            _ => Err(UnknownPolicy(value.to_owned())),
        }
    }
}

/// Settings applied by [`ScenarioContext`](crate::ScenarioContext).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Policy for identifiers that are already waiting.
    pub duplicate_policy: DuplicatePolicy,
}

impl IntakeConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Unrecognised values are logged and ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let duplicate_policy = lookup(DUPLICATE_POLICY_ENV)
            .and_then(|raw| match raw.parse() {
                Ok(policy) => Some(policy),
                Err(err) => {
                    log::warn!("ignoring {DUPLICATE_POLICY_ENV}: {err}");
                    None
                }
            })
            .unwrap_or_default();
        Self { duplicate_policy }
    }

    /// Returns a copy using `policy` for repeat arrivals.
    #[must_use]
    pub fn with_duplicate_policy(self, policy: DuplicatePolicy) -> Self {
        Self {
            duplicate_policy: policy,
        }
    }
}
