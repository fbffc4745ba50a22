// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::{Path, PathBuf};

use netscripts::GeneratedConf;
use tempfile::NamedTempFile;

use crate::{config::Config, error::CliError, state::state_from_file};

#[derive(Debug, Default)]
pub(crate) struct GenConfOpts<'a> {
    pub(crate) state_file: &'a str,
    pub(crate) config_path: &'a str,
    pub(crate) scripts_dir: Option<&'a str>,
    pub(crate) interfaces: Option<&'a str>,
    pub(crate) output_dir: Option<&'a str>,
    pub(crate) json: bool,
}

impl<'a> GenConfOpts<'a> {
    fn from_matches(matches: &'a clap::ArgMatches) -> Result<Self, CliError> {
        let state_file = match matches.value_of("STATE_FILE") {
            Some(f) => f,
            None => {
                return Err(CliError::usage(
                    "Please define at least one STATE_FILE".to_string(),
                ))
            }
        };
        Ok(Self {
            state_file,
            config_path: matches
                .value_of("CONFIG")
                .unwrap_or(Config::DEFAULT_CONFIG_PATH),
            scripts_dir: matches.value_of("SCRIPTS_DIR"),
            interfaces: matches.value_of("INTERFACES"),
            output_dir: matches.value_of("OUTPUT_DIR"),
            json: matches.is_present("JSON"),
        })
    }
}

pub(crate) fn gen_conf(matches: &clap::ArgMatches) -> Result<String, CliError> {
    gen_conf_with_opts(&GenConfOpts::from_matches(matches)?)
}

pub(crate) fn gen_conf_with_opts(
    opts: &GenConfOpts,
) -> Result<String, CliError> {
    let mut state = state_from_file(opts.state_file)?;
    let config = Config::load(opts.config_path)?;

    if let Some(scripts_dir) = opts
        .scripts_dir
        .or(config.gen_conf.scripts_dir.as_deref())
    {
        state.set_scripts_dir(scripts_dir);
    }
    if let Some(ifaces) = opts.interfaces {
        state.set_interfaces_fact(ifaces);
    } else if state.facts.interfaces.is_empty() {
        if let Some(ifaces) = config.gen_conf.interfaces.as_deref() {
            state.set_interfaces_fact(ifaces);
        }
    }
    if state.is_empty() {
        log::warn!(
            "No alias or promisc interface defined in {}",
            opts.state_file
        );
    }

    let confs = state.gen_conf()?;

    if let Some(output_dir) = opts.output_dir {
        write_confs(Path::new(output_dir), &confs)?;
    }

    if opts.json {
        Ok(serde_json::to_string_pretty(&confs)?)
    } else {
        Ok(serde_yaml::to_string(&confs)?)
    }
}

// Files are written under `output_dir` by file name only, the `path` of
// the generated file is what the host will eventually use.
//
// Every file is staged into a temporary file inside `output_dir` first, so
// a failure while staging leaves the folder untouched. Only the final
// renames and removals can fail halfway.
pub(crate) fn write_confs(
    output_dir: &Path,
    confs: &[GeneratedConf],
) -> Result<(), CliError> {
    if !output_dir.is_dir() {
        return Err(CliError::usage(format!(
            "Output folder {} does not exist",
            output_dir.display()
        )));
    }
    let mut staged: Vec<(NamedTempFile, PathBuf)> = Vec::new();
    let mut removals: Vec<PathBuf> = Vec::new();
    for conf in confs {
        let file_path = output_dir.join(conf.file.file_name());
        if file_path.is_dir() {
            return Err(CliError::from(format!(
                "{} is a folder, refusing to replace it",
                file_path.display()
            )));
        }
        if conf.file.present {
            let mut tmp = NamedTempFile::new_in(output_dir)?;
            tmp.write_all(conf.file.content().as_bytes())?;
            set_file_mode(tmp.as_file(), conf.file.mode_bits())?;
            staged.push((tmp, file_path));
        } else if file_path.exists() {
            removals.push(file_path);
        }
    }

    for (tmp, file_path) in staged {
        tmp.persist(&file_path).map_err(|e| e.error)?;
        log::info!("Wrote {}", file_path.display());
    }
    for file_path in removals {
        std::fs::remove_file(&file_path)?;
        log::info!("Removed {}", file_path.display());
    }
    for conf in confs.iter().filter(|c| !c.side_effect.is_none()) {
        log::info!(
            "{} requires {}",
            conf.file.file_name(),
            conf.side_effect
        );
    }
    Ok(())
}

#[cfg(unix)]
fn set_file_mode(fd: &std::fs::File, mode: u32) -> Result<(), CliError> {
    use std::os::unix::fs::PermissionsExt;
    fd.set_permissions(std::fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_mode(_fd: &std::fs::File, _mode: u32) -> Result<(), CliError> {
    Ok(())
}
