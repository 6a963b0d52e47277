use clap::{Arg, Command};
use fraudcheck::domain;
use fraudcheck::{Config, FraudEngine};
use log::LevelFilter;
use serde::Serialize;
use std::process;

#[derive(Debug, Serialize)]
struct CheckOutcome {
    domain: String,
    supported_tld: bool,
    is_fraudulent: bool,
    reason: Option<String>,
}

fn main() {
    let matches = Command::new("fraudcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic fraud checks for candidate domain registrations")
        .arg(
            Arg::new("domains")
                .value_name("DOMAIN")
                .help("Candidate domain(s) to check")
                .num_args(0..),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path (built-in reference data if omitted)"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default configuration to FILE and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the configuration and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit one JSON object per domain instead of text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-rule detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        if let Err(e) = Config::default().to_file(generate_path) {
            eprintln!("Error writing configuration: {e}");
            process::exit(1);
        }
        println!("Default configuration written to {generate_path}");
        return;
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    if matches.get_flag("test-config") {
        println!("Reference companies: {}", config.companies.len());
        println!("Supported TLDs: {}", config.supported_tlds.len());
        match FraudEngine::new() {
            Ok(_) => println!("All brand patterns compiled successfully."),
            Err(e) => {
                eprintln!("Configuration validation failed: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let engine = match FraudEngine::new() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error initializing fraud engine: {e}");
            process::exit(1);
        }
    };

    let domains: Vec<&String> = matches
        .get_many::<String>("domains")
        .map(|values| values.collect())
        .unwrap_or_default();

    if domains.is_empty() {
        eprintln!("No domains given. Usage: fraudcheck [OPTIONS] DOMAIN...");
        process::exit(2);
    }

    let as_json = matches.get_flag("json");
    let mut any_flagged = false;

    for candidate in domains {
        if !domain::is_valid_format(candidate) {
            log::warn!("{candidate}: invalid domain format");
            if as_json {
                println!(
                    "{}",
                    serde_json::json!({ "domain": candidate, "error": "invalid domain format" })
                );
            } else {
                println!("{candidate}: INVALID (letters, digits, and hyphens only)");
            }
            continue;
        }

        let outcome = check_domain(&engine, &config, candidate);
        any_flagged |= outcome.is_fraudulent;

        if as_json {
            match serde_json::to_string(&outcome) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("{candidate}: failed to serialize outcome: {e}"),
            }
        } else {
            print_outcome(&outcome);
        }
    }

    if any_flagged {
        process::exit(1);
    }
}

fn check_domain(engine: &FraudEngine, config: &Config, candidate: &str) -> CheckOutcome {
    let supported_tld = domain::parse(candidate)
        .map(|parsed| config.is_supported_tld(&parsed.tld))
        .unwrap_or(false);

    let verdict = engine.assess(candidate, &config.companies);

    CheckOutcome {
        domain: candidate.to_string(),
        supported_tld,
        is_fraudulent: verdict.is_fraudulent,
        reason: verdict.reason,
    }
}

fn print_outcome(outcome: &CheckOutcome) {
    if outcome.is_fraudulent {
        println!("{}: FLAGGED", outcome.domain);
        if let Some(reason) = &outcome.reason {
            println!("  {reason}");
        }
    } else if !outcome.supported_tld {
        println!("{}: OK (TLD not supported for registration)", outcome.domain);
    } else {
        println!("{}: OK", outcome.domain);
    }
}
