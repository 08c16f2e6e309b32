use std::path::PathBuf;

use airboard_logic::config::CabinConfig;
use anyhow::Context;
use clap::Parser;

/// Airboard - airplane boarding and disembarking simulator
#[derive(Parser, Debug)]
#[command(name = "airboard")]
#[command(version)]
#[command(about = "Interactive airplane boarding and disembarking simulator", long_about = None)]
pub struct Cli {
    /// JSON cabin config file, e.g. {"rows": 10, "seats_per_row": 6}
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Number of rows (overrides the config file)
    #[arg(short = 'r', long = "rows")]
    pub rows: Option<u32>,

    /// Seats in each row (overrides the config file)
    #[arg(short = 's', long = "seats-per-row")]
    pub seats_per_row: Option<u32>,

    /// Seed for generated passenger names (random when omitted)
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Log level filter; RUST_LOG takes precedence when set
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the cabin shape: defaults, then the config file, then flags.
    pub fn cabin_config(&self) -> anyhow::Result<CabinConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading cabin config {}", path.display()))?;
                CabinConfig::from_json(&text)
                    .with_context(|| format!("parsing cabin config {}", path.display()))?
            }
            None => CabinConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(seats_per_row) = self.seats_per_row {
            config.seats_per_row = seats_per_row;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["airboard"]).unwrap();
        assert_eq!(cli.cabin_config().unwrap(), CabinConfig::default());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.seed.is_none());
    }

    #[test]
    fn flags_override_dimensions() {
        let cli = Cli::try_parse_from(["airboard", "-r", "20", "--seats-per-row", "6", "--seed", "3"])
            .unwrap();
        let config = cli.cabin_config().unwrap();
        assert_eq!((config.rows, config.seats_per_row), (20, 6));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn flags_override_file() {
        let path = std::env::temp_dir().join(format!("airboard-args-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "rows": 8, "seats_per_row": 2 }"#).unwrap();

        let args: Vec<std::ffi::OsString> = vec![
            "airboard".into(),
            "--config".into(),
            path.clone().into_os_string(),
            "--seats-per-row".into(),
            "5".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.cabin_config().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((config.rows, config.seats_per_row), (8, 5));
    }

    #[test]
    fn missing_config_file_is_error() {
        let cli = Cli::try_parse_from(["airboard", "--config", "/nonexistent/airboard.json"]).unwrap();
        let err = cli.cabin_config().unwrap_err();
        assert!(err.to_string().contains("reading cabin config"));
    }

    #[test]
    fn non_numeric_rows_rejected_by_parser() {
        assert!(Cli::try_parse_from(["airboard", "--rows", "many"]).is_err());
    }
}
