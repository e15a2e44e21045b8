pub mod handlers;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("person-probe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Locate a Person type and verify its behavior")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log resolution and per-check detail to stderr"),
        )
        .subcommand(cmd_check())
        .subcommand(cmd_list())
        .subcommand(cmd_config())
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Config file layered over the global config")
}

fn cmd_check() -> Command {
    Command::new("check")
        .about("Resolve the Person type and run the checks")
        .arg(config_arg())
        .arg(
            Arg::new("only")
                .long("only")
                .value_name("ID")
                .action(ArgAction::Append)
                .help("Run only this check (repeatable); see `person-probe list`"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
}

fn cmd_list() -> Command {
    Command::new("list").about("List check ids and what they verify")
}

fn cmd_config() -> Command {
    Command::new("config")
        .about("Print the effective configuration as TOML")
        .arg(config_arg())
}
