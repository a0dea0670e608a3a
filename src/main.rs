//! chaosctl - inject and recover faults through chaos helper binaries

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chaos_actions::cli::{parse_action_flags, Args, SubCommand};
use chaos_actions::{
    create_experiment, destroy_experiment, format_output, ActionInfo, ActionSpec, Catalog,
    Channel, ChaosError, DryRunChannel, ExecutionOptions, LocalChannel, OutputFormat,
    ResultData,
};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Returns whether the command succeeded
fn run(args: Args) -> anyhow::Result<bool> {
    let config = args.config();
    let channel: Arc<dyn Channel> = if args.dry_run {
        Arc::new(DryRunChannel::new(config.script_path.clone()))
    } else {
        Arc::new(LocalChannel::new(config.script_path.clone()))
    };
    let catalog = Catalog::with_defaults(&config, channel).context("failed to build action catalog")?;

    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Human };
    let opts = ExecutionOptions {
        dry_run: args.dry_run,
        allow_actions: args.allow_actions,
    };

    let result = match args.command {
        SubCommand::Create { target, action, flags } => {
            let spec = lookup(&catalog, &target, &action)?;
            let model = parse_action_flags(spec, &flags)?;
            ResultData::Experiment(create_experiment(&catalog, &model, &opts)?)
        }

        SubCommand::Destroy { uid, target, action, flags } => {
            let spec = lookup(&catalog, &target, &action)?;
            let model = parse_action_flags(spec, &flags)?;
            ResultData::Experiment(destroy_experiment(&catalog, &uid, &model, &opts)?)
        }

        SubCommand::List => ResultData::Actions(
            catalog.list().into_iter().map(ActionInfo::from_spec).collect(),
        ),

        SubCommand::Describe { target, action } => {
            ResultData::Action(ActionInfo::from_spec(lookup(&catalog, &target, &action)?))
        }
    };

    println!("{}", format_output(&result, &output_format));
    Ok(result.is_success())
}

fn lookup<'a>(
    catalog: &'a Catalog,
    target: &str,
    action: &str,
) -> Result<&'a dyn ActionSpec, ChaosError> {
    catalog.get(target, action).ok_or_else(|| ChaosError::UnknownAction {
        target: target.to_string(),
        action: action.to_string(),
    })
}
