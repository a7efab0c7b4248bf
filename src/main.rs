use clap::Parser;
use person_info::utils::{logger, validation::Validate};
use person_info::{export, read_all, sort_by_age, CliConfig, TokenReader};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(&config) {
        tracing::error!("❌ person-info failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> person_info::Result<()> {
    config.validate()?;
    let file_config = config.load_file_config()?;
    let settings = config.resolve(file_config.as_ref())?;

    if settings.log_json {
        logger::init_json_logger(settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.log_level.as_deref());
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let reader: Box<dyn BufRead> = match settings.input.as_deref() {
        Some(path) => {
            tracing::info!("📂 Reading records from {}", path);
            Box::new(BufReader::new(File::open(path)?))
        }
        None => {
            tracing::info!("📂 Reading records from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let mut input = TokenReader::new(reader);
    let mut records = read_all(&mut input)?;
    tracing::info!("Read {} records", records.len());

    if settings.sort_by_age {
        sort_by_age(&mut records);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    export(&records, settings.format, &mut out)?;

    tracing::info!("✅ Wrote {} records as {}", records.len(), settings.format);
    Ok(())
}
