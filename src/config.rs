use std::path::PathBuf;

use crate::error::AppError;

pub const HELP: &str = "\
pagenav

USAGE:
  pagenav [OPTIONS]

OPTIONS:
  -h, --help              Print help information
  -b, --bind ADDR         Listen address [default: 0.0.0.0:8080]
  -n, --per-page N        Items per page [default: 10]
  -c, --catalog FILE      JSON array of {\"id\", \"title\"} items [default: built-in sample]
";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_PER_PAGE: usize = 10;

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub per_page: usize,
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// `Ok(None)` when help was requested.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Option<Self>, AppError> {
        if args.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let config = Self {
            bind: args
                .opt_value_from_str(["-b", "--bind"])?
                .unwrap_or_else(|| DEFAULT_BIND.to_owned()),
            per_page: args
                .opt_value_from_str(["-n", "--per-page"])?
                .unwrap_or(DEFAULT_PER_PAGE),
            catalog: args.opt_value_from_str(["-c", "--catalog"])?,
        };

        if config.per_page == 0 {
            return Err(AppError::Internal("--per-page must be positive".into()));
        }

        let remaining = args.finish();
        if !remaining.is_empty() {
            log::warn!("ignoring unused arguments: {:?}", remaining);
        }

        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Config>, AppError> {
        let args = args.iter().map(OsString::from).collect();
        Config::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap().unwrap();
        assert_eq!(
            config,
            Config {
                bind: DEFAULT_BIND.to_owned(),
                per_page: DEFAULT_PER_PAGE,
                catalog: None,
            }
        );
    }

    #[test]
    fn explicit_values() {
        let config = parse(&["--bind", "127.0.0.1:3000", "-n", "25", "--catalog", "items.json"])
            .unwrap()
            .unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.per_page, 25);
        assert_eq!(config.catalog, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).unwrap().is_none());
        assert!(parse(&["-h", "--per-page", "0"]).unwrap().is_none());
    }

    #[test]
    fn rejects_zero_per_page() {
        let err = parse(&["--per-page", "0"]).unwrap_err();
        assert!(err.message().contains("--per-page"));
    }

    #[test]
    fn rejects_non_numeric_per_page() {
        assert!(parse(&["--per-page", "many"]).is_err());
    }
}
