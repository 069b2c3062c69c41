//! Environment-driven settings for the `lagrange` binary.

use lagrange_solvers::equation::hybrid;

use crate::Error;

/// Enables the iteration trace on stderr when set to anything but `""` or `0`.
pub const TRACE_VAR: &str = "LAGRANGE_TRACE";

/// Overrides the hybrid solver's iteration cap.
pub const MAX_ITERS_VAR: &str = "LAGRANGE_MAX_ITERS";

/// Settings read from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    trace: bool,
    max_iters: Option<usize>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] if a variable is set to a value that
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value if set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] if a variable is set to a value that
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let trace = lookup(TRACE_VAR).is_some_and(|value| {
            let value = value.trim();
            !value.is_empty() && value != "0"
        });

        let max_iters = match lookup(MAX_ITERS_VAR) {
            Some(value) => Some(value.trim().parse().map_err(|_| Error::InvalidSetting {
                name: MAX_ITERS_VAR,
                value,
            })?),
            None => None,
        };

        Ok(Self { trace, max_iters })
    }

    /// Returns true if the iteration trace should be written.
    #[must_use]
    pub fn trace(&self) -> bool {
        self.trace
    }

    /// Returns the iteration cap override, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns the hybrid solver config with any overrides applied.
    #[must_use]
    pub fn solver_config(&self) -> hybrid::Config {
        let config = hybrid::Config::default();
        match self.max_iters {
            Some(max_iters) => config.with_max_iters(max_iters),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, Error> {
        Settings::from_lookup(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        })
    }

    #[test]
    fn defaults_when_unset() {
        let settings = settings(&[]).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.solver_config(), hybrid::Config::default());
    }

    #[test]
    fn trace_flag() {
        assert!(settings(&[(TRACE_VAR, "1")]).unwrap().trace());
        assert!(settings(&[(TRACE_VAR, "yes")]).unwrap().trace());
        assert!(!settings(&[(TRACE_VAR, "0")]).unwrap().trace());
        assert!(!settings(&[(TRACE_VAR, " ")]).unwrap().trace());
    }

    #[test]
    fn max_iters_override() {
        let settings = settings(&[(MAX_ITERS_VAR, " 7 ")]).unwrap();

        assert_eq!(settings.max_iters(), Some(7));
        assert_eq!(settings.solver_config().max_iters(), 7);
        assert_eq!(
            settings.solver_config().radius_factor(),
            hybrid::Config::default().radius_factor()
        );
    }

    #[test]
    fn invalid_max_iters_is_rejected() {
        let error = settings(&[(MAX_ITERS_VAR, "many")]).unwrap_err();

        assert!(matches!(
            error,
            Error::InvalidSetting { name: MAX_ITERS_VAR, ref value } if value == "many"
        ));
    }
}
