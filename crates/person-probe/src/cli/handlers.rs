use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{check, config, list};

pub fn dispatch(matches: &ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("check", sub_m)) => handle_check(sub_m),
        Some(("list", _)) => {
            list::run();
            Ok(ExitCode::SUCCESS)
        }
        Some(("config", sub_m)) => {
            config::run(config_path(sub_m))?;
            Ok(ExitCode::SUCCESS)
        }
        _ => anyhow::bail!("Unknown command. Run 'person-probe --help' for usage."),
    }
}

fn handle_check(matches: &ArgMatches) -> Result<ExitCode> {
    let options = check::CheckOptions {
        config: config_path(matches),
        only: matches
            .get_many::<String>("only")
            .map(|ids| ids.cloned().collect())
            .unwrap_or_default(),
        json: matches.get_flag("json"),
    };

    if check::run(&options)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}
