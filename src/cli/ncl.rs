// SPDX-License-Identifier: Apache-2.0

mod config;
mod error;
mod gen_conf;
mod state;

use env_logger::Builder;
use log::LevelFilter;

use crate::error::CliError;

const APP_NAME: &str = "netscriptsctl";

const SUB_CMD_GEN_CONF: &str = "gc";
const SUB_CMD_VERSION: &str = "version";

fn main() {
    let matches = clap::Command::new(APP_NAME)
        .version(clap::crate_version!())
        .about("Command line of netscripts")
        .subcommand_required(true)
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Set verbose level")
                .global(true),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .help("Disable logging")
                .global(true),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_GEN_CONF)
                .about("Generate ifcfg files for specified state")
                .alias("gen-conf")
                .arg(
                    clap::Arg::new("STATE_FILE")
                        .required(true)
                        .index(1)
                        .help("State file, use - for stdin"),
                )
                .arg(
                    clap::Arg::new("JSON")
                        .long("json")
                        .takes_value(false)
                        .help("Show generated files in json format"),
                )
                .arg(
                    clap::Arg::new("OUTPUT_DIR")
                        .long("output-dir")
                        .short('o')
                        .takes_value(true)
                        .help(
                            "Also write generated files into this folder \
                            and remove absent ones from it",
                        ),
                )
                .arg(
                    clap::Arg::new("SCRIPTS_DIR")
                        .long("scripts-dir")
                        .takes_value(true)
                        .help(
                            "Folder of ifcfg files on the target host, \
                            default is /etc/sysconfig/network-scripts",
                        ),
                )
                .arg(
                    clap::Arg::new("INTERFACES")
                        .long("interfaces")
                        .takes_value(true)
                        .help(
                            "Comma separated interfaces currently known \
                            to the host, overriding the state file",
                        ),
                )
                .arg(
                    clap::Arg::new("CONFIG")
                        .long("config")
                        .short('c')
                        .takes_value(true)
                        .help("Configuration file path"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_VERSION).about("Show version"),
        )
        .get_matches();
    let (log_module_filters, log_level) =
        match matches.occurrences_of("verbose") {
            0 => (vec!["netscripts", "netscriptsctl"], LevelFilter::Warn),
            1 => (vec!["netscripts", "netscriptsctl"], LevelFilter::Info),
            2 => (vec!["netscripts", "netscriptsctl"], LevelFilter::Debug),
            _ => (vec![""], LevelFilter::Trace),
        };

    if !matches.is_present("quiet") {
        let mut log_builder = Builder::new();
        for log_module_filter in log_module_filters {
            if !log_module_filter.is_empty() {
                log_builder.filter(Some(log_module_filter), log_level);
            } else {
                log_builder.filter(None, log_level);
            }
        }
        log_builder.init();
    }

    if let Some(matches) = matches.subcommand_matches(SUB_CMD_GEN_CONF) {
        print_result_and_exit(gen_conf::gen_conf(matches));
    } else if matches.subcommand_matches(SUB_CMD_VERSION).is_some() {
        print_string_and_exit(format!(
            "{} {}",
            APP_NAME,
            clap::crate_version!()
        ));
    }
}

fn print_result_and_exit(result: Result<String, CliError>) {
    match result {
        Ok(s) => print_string_and_exit(s),
        Err(e) => print_error_and_exit(e),
    }
}

fn print_error_and_exit(e: CliError) {
    eprintln!("{e}");
    std::process::exit(e.code);
}

fn print_string_and_exit(s: String) {
    println!("{s}");
    std::process::exit(0);
}
