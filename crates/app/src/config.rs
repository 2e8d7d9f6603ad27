//! Startup configuration from command-line flags and environment variables.
//!
//! Flags win over environment variables:
//!
//! | flag                    | env                       | default   |
//! |-------------------------|---------------------------|-----------|
//! | `--factor-table <path>` | `CARBON_SURVEY_FACTORS`   | built-in  |
//! | `--records <dir>`       | `CARBON_SURVEY_RECORDS`   | `records` |
//! | `--factors`             |                           | off       |

use std::fmt;
use std::path::PathBuf;

use footprint::factors::FactorTableError;
use footprint::FactorTable;

pub const FACTOR_TABLE_ENV: &str = "CARBON_SURVEY_FACTORS";
pub const RECORDS_ENV: &str = "CARBON_SURVEY_RECORDS";
pub const DEFAULT_RECORDS_DIR: &str = "records";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON override for the factor table, applied once at startup.
    pub factor_table: Option<PathBuf>,
    pub records_dir: PathBuf,
    /// Print the factor table and exit instead of serving the protocol.
    pub print_factors: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingValue(&'static str),
    UnknownArgument(String),
    FactorTable {
        path: PathBuf,
        source: FactorTableError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => write!(f, "{flag} needs a value"),
            ConfigError::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            ConfigError::FactorTable { path, source } => {
                write!(f, "cannot load factor table {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FactorTable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Parse flags (without the program name), falling back to `env` for
    /// anything not given on the command line.
    pub fn parse<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut factor_table = None;
        let mut records_dir = None;
        let mut print_factors = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--factor-table" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--factor-table"))?;
                    factor_table = Some(PathBuf::from(value));
                }
                "--records" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--records"))?;
                    records_dir = Some(PathBuf::from(value));
                }
                "--factors" => print_factors = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        Ok(Self {
            factor_table: factor_table.or_else(|| non_empty(FACTOR_TABLE_ENV).map(PathBuf::from)),
            records_dir: records_dir
                .or_else(|| non_empty(RECORDS_ENV).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_DIR)),
            print_factors,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// The factor table to run with: the override if configured, else the
    /// compiled-in defaults.
    pub fn load_factor_table(&self) -> Result<FactorTable, ConfigError> {
        match &self.factor_table {
            Some(path) => FactorTable::load(path).map_err(|source| ConfigError::FactorTable {
                path: path.clone(),
                source,
            }),
            None => Ok(FactorTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse(args(&[]), no_env).unwrap();
        assert_eq!(config.factor_table, None);
        assert_eq!(config.records_dir, PathBuf::from("records"));
        assert!(!config.print_factors);
    }

    #[test]
    fn test_flags() {
        let config = AppConfig::parse(
            args(&["--factor-table", "sg.json", "--records", "/data", "--factors"]),
            no_env,
        )
        .unwrap();
        assert_eq!(config.factor_table, Some(PathBuf::from("sg.json")));
        assert_eq!(config.records_dir, PathBuf::from("/data"));
        assert!(config.print_factors);
    }

    #[test]
    fn test_env_fallback_and_flag_precedence() {
        let env = |key: &str| match key {
            FACTOR_TABLE_ENV => Some("env.json".to_string()),
            RECORDS_ENV => Some("/env/records".to_string()),
            _ => None,
        };
        let config = AppConfig::parse(args(&[]), env).unwrap();
        assert_eq!(config.factor_table, Some(PathBuf::from("env.json")));
        assert_eq!(config.records_dir, PathBuf::from("/env/records"));

        let config = AppConfig::parse(args(&["--records", "cli"]), env).unwrap();
        assert_eq!(config.records_dir, PathBuf::from("cli"));
    }

    #[test]
    fn test_blank_env_ignored() {
        let env = |_: &str| Some("  ".to_string());
        let config = AppConfig::parse(args(&[]), env).unwrap();
        assert_eq!(config.factor_table, None);
        assert_eq!(config.records_dir, PathBuf::from("records"));
    }

    #[test]
    fn test_missing_value() {
        let err = AppConfig::parse(args(&["--records"]), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue("--records")));
    }

    #[test]
    fn test_unknown_argument() {
        let err = AppConfig::parse(args(&["--verbose"]), no_env).unwrap_err();
        assert_eq!(format!("{err}"), "unknown argument: --verbose");
    }

    #[test]
    fn test_missing_override_file() {
        let config = AppConfig {
            factor_table: Some(PathBuf::from("/nonexistent/carbon/factors.json")),
            records_dir: PathBuf::from("records"),
            print_factors: false,
        };
        let err = config.load_factor_table().unwrap_err();
        assert!(matches!(err, ConfigError::FactorTable { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
