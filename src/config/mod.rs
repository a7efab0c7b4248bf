pub mod toml_config;

pub use toml_config::FileConfig;

use crate::core::export::ExportFormat;

#[cfg(feature = "cli")]
use crate::core::export::FORMAT_NAMES;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "person-info")]
#[command(about = "Read person records and print them as labeled text, CSV or JSON")]
pub struct CliConfig {
    #[arg(long, help = "Input file of whitespace-separated records (default: stdin)")]
    pub input: Option<String>,

    #[arg(long, help = "Output format: labeled, csv or json")]
    pub format: Option<String>,

    #[arg(long, help = "Order records by ascending age")]
    pub sort_by_age: bool,

    #[arg(long, help = "TOML file with default settings")]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after command-line flags are layered over the file config.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: Option<String>,
    pub format: ExportFormat,
    pub sort_by_age: bool,
    pub log_level: Option<String>,
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the `--config` file, if any.
    pub fn load_file_config(&self) -> Result<Option<FileConfig>> {
        match self.config.as_deref() {
            Some(path) => {
                let file = FileConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// Flags win over the file; `--verbose` forces debug logging.
    pub fn resolve(&self, file: Option<&FileConfig>) -> Result<RunSettings> {
        let format: ExportFormat = match self.format.as_deref() {
            Some(name) => name.parse()?,
            None => match file {
                Some(file) => file.format()?.unwrap_or_default(),
                None => ExportFormat::default(),
            },
        };

        let log_level = if self.verbose {
            Some("debug".to_string())
        } else {
            file.and_then(|f| f.log_level()).map(str::to_ascii_lowercase)
        };

        Ok(RunSettings {
            input: self.input.clone(),
            format,
            sort_by_age: self.sort_by_age || file.is_some_and(|f| f.sort_by_age()),
            log_level,
            log_json: self.log_json || file.is_some_and(|f| f.json_logs()),
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = self.input.as_deref() {
            validate_path("input", input)?;
        }
        if let Some(config) = self.config.as_deref() {
            validate_path("config", config)?;
        }
        if let Some(format) = self.format.as_deref() {
            validate_one_of("format", format, &FORMAT_NAMES)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("person-info").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.validate().is_ok());

        let settings = cli.resolve(None).unwrap();
        assert_eq!(
            settings,
            RunSettings {
                input: None,
                format: ExportFormat::Labeled,
                sort_by_age: false,
                log_level: None,
                log_json: false,
            }
        );
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::from_toml_str(
            "[output]\nformat = \"json\"\nsort_by_age = true\n[logging]\nlevel = \"WARN\"\n",
        )
        .unwrap();

        let cli = parse(&["--format", "csv", "--input", "people.txt"]);
        let settings = cli.resolve(Some(&file)).unwrap();
        assert_eq!(settings.format, ExportFormat::Csv);
        assert!(settings.sort_by_age);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
        assert_eq!(settings.input.as_deref(), Some("people.txt"));

        let settings = parse(&["--verbose"]).resolve(Some(&file)).unwrap();
        assert_eq!(settings.format, ExportFormat::Json);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_format_flag() {
        let cli = parse(&["--format", "xml"]);
        assert!(cli.validate().is_err());
        assert!(cli.resolve(None).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["--config", "/nonexistent/person-info.toml"]);
        assert!(cli.load_file_config().is_err());
        assert!(parse(&[]).load_file_config().unwrap().is_none());
    }
}
