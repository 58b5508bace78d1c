// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::Config;
use crate::runner::{self, RunFlags};

const DEFAULT_CONFIG: &str = "config.json";

pub struct CliArgs {
    pub config_path: PathBuf,
    pub url: Option<String>,
    pub local: Option<PathBuf>,
    pub no_report: bool,
    pub save: bool,
}

impl CliArgs {
    fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG),
            url: None,
            local: None,
            no_report: false,
            save: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut args = CliArgs::new();
    parse_cli(&mut args)?;

    // Missing config.json is fine when the source comes from the command
    // line; defaults cover the rest.
    let mut cfg = if args.config_path.exists() || (args.url.is_none() && args.local.is_none()) {
        Config::load(&args.config_path)?
    } else {
        Config::default()
    };

    if let Some(url) = args.url {
        cfg.target_url = Some(url);
        cfg.local_file = None; // --url always hits the network
    }
    if let Some(path) = args.local {
        cfg.local_file = Some(path);
    }

    runner::run(&cfg, &RunFlags { no_report: args.no_report, save: args.save })
}

fn parse_cli(args: &mut CliArgs) -> Result<(), Box<dyn Error>> {
    let mut it = env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "-c" | "--config" => {
                args.config_path = PathBuf::from(it.next().ok_or("Missing value for --config")?);
            }
            "-u" | "--url" => {
                args.url = Some(it.next().ok_or("Missing value for --url")?);
            }
            "-l" | "--local" => {
                args.local = Some(PathBuf::from(it.next().ok_or("Missing value for --local")?));
            }
            "--no-report" => args.no_report = true,
            "-s" | "--save" => args.save = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
