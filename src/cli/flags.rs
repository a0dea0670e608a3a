//! Per-action flag parsing, generated from the action's declared flags

use clap::{Arg, ArgAction, Command};

use crate::action::{ActionSpec, ExpModel};
use crate::error::{ChaosError, Result};

/// Build the clap command accepting exactly the flags `spec` declares
pub fn action_command(spec: &dyn ActionSpec) -> Command {
    let mut cmd = Command::new(spec.name())
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .about(spec.short_desc());

    for flag in spec.all_flags() {
        let arg = Arg::new(flag.name).long(flag.name).help(flag.desc);
        let arg = if flag.no_args {
            arg.action(ArgAction::SetTrue)
        } else {
            arg.action(ArgAction::Set).num_args(1).allow_hyphen_values(true)
        };
        cmd = cmd.arg(arg);
    }
    cmd
}

/// Parse raw action flags into an experiment model.
///
/// Required flags are left to the catalog so a missing flag is reported as an
/// action response rather than a usage error.
pub fn parse_action_flags(spec: &dyn ActionSpec, raw: &[String]) -> Result<ExpModel> {
    let matches = action_command(spec)
        .try_get_matches_from(raw)
        .map_err(|e| ChaosError::ArgumentError(e.to_string().trim().to_string()))?;

    let mut model = ExpModel::new(spec.target(), spec.name());
    for flag in spec.all_flags() {
        if flag.no_args {
            if matches.get_flag(flag.name) {
                model.flags.insert(flag.name.to_string(), "true".to_string());
            }
        } else if let Some(value) = matches.get_one::<String>(flag.name) {
            model.flags.insert(flag.name.to_string(), value.clone());
        }
    }
    Ok(model)
}
