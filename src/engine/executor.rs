//! Experiment executor: the create/destroy entry points used by the CLI

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::action::{ActionInfo, ExpModel, Response};
use crate::context::ExecutionContext;
use crate::engine::catalog::Catalog;
use crate::error::{ChaosError, Result};

/// Runtime switches for an experiment request
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionOptions {
    pub dry_run: bool,
    pub allow_actions: bool,
}

/// Outcome of a create or destroy request
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentResult {
    pub uid: String,
    pub target: String,
    pub action: String,
    pub destroy: bool,
    pub dry_run: bool,
    pub response: Response,
}

impl ExperimentResult {
    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }
}

/// Result of a CLI command
#[derive(Debug, Clone)]
pub enum ResultData {
    Experiment(ExperimentResult),
    Actions(Vec<ActionInfo>),
    Action(ActionInfo),
}

impl ResultData {
    pub fn is_success(&self) -> bool {
        match self {
            ResultData::Experiment(result) => result.is_success(),
            ResultData::Actions(_) | ResultData::Action(_) => true,
        }
    }
}

/// Inject the fault described by `model` under a fresh uid
pub fn create_experiment(
    catalog: &Catalog,
    model: &ExpModel,
    opts: &ExecutionOptions,
) -> Result<ExperimentResult> {
    let uid = Uuid::new_v4().simple().to_string();
    run_experiment(catalog, uid, ExecutionContext::create(), model, opts)
}

/// Reverse the fault previously created under `uid`
pub fn destroy_experiment(
    catalog: &Catalog,
    uid: &str,
    model: &ExpModel,
    opts: &ExecutionOptions,
) -> Result<ExperimentResult> {
    run_experiment(
        catalog,
        uid.to_string(),
        ExecutionContext::destroy(uid),
        model,
        opts,
    )
}

fn run_experiment(
    catalog: &Catalog,
    uid: String,
    ctx: ExecutionContext,
    model: &ExpModel,
    opts: &ExecutionOptions,
) -> Result<ExperimentResult> {
    if !opts.allow_actions && !opts.dry_run {
        return Err(ChaosError::ActionsDisabled);
    }

    let response = catalog.dispatch(&uid, &ctx, model);
    if response.is_success() {
        info!(
            uid = %uid,
            resource = %model.target,
            action = %model.action,
            destroy = ctx.is_destroy(),
            "experiment finished"
        );
    } else {
        warn!(
            uid = %uid,
            code = %response.code(),
            message = response.message(),
            "experiment failed"
        );
    }

    Ok(ExperimentResult {
        uid,
        target: model.target.clone(),
        action: model.action.clone(),
        destroy: ctx.is_destroy(),
        dry_run: opts.dry_run,
        response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Code;
    use crate::channel::DryRunChannel;
    use crate::config::Config;
    use std::sync::Arc;

    fn catalog() -> Catalog {
        let config = Config::default();
        let channel = Arc::new(DryRunChannel::new(config.script_path.clone()));
        Catalog::with_defaults(&config, channel).unwrap()
    }

    fn dry_run() -> ExecutionOptions {
        ExecutionOptions {
            dry_run: true,
            allow_actions: false,
        }
    }

    #[test]
    fn test_actions_disabled_without_opt_in() {
        let model = ExpModel::new("process", "stop").with_flag("process", "nginx");
        let err = create_experiment(&catalog(), &model, &ExecutionOptions::default()).unwrap_err();
        assert!(matches!(err, ChaosError::ActionsDisabled));

        let err = destroy_experiment(&catalog(), "abc", &model, &ExecutionOptions::default())
            .unwrap_err();
        assert!(matches!(err, ChaosError::ActionsDisabled));
    }

    #[test]
    fn test_create_assigns_uid() {
        let model = ExpModel::new("process", "stop").with_flag("process", "nginx");
        let first = create_experiment(&catalog(), &model, &dry_run()).unwrap();
        let second = create_experiment(&catalog(), &model, &dry_run()).unwrap();

        assert_eq!(first.uid.len(), 32);
        assert_ne!(first.uid, second.uid);
        assert!(first.is_success());
        assert!(!first.destroy);
        assert!(first.dry_run);
    }

    #[test]
    fn test_destroy_keeps_uid() {
        let model = ExpModel::new("process", "stop").with_flag("process", "nginx");
        let result = destroy_experiment(&catalog(), "6a1f", &model, &dry_run()).unwrap();

        assert_eq!(result.uid, "6a1f");
        assert!(result.destroy);
        assert_eq!(
            result.response.result(),
            Some(r#"/opt/chaosblade/bin/chaos_stopprocess --stop --debug=false --process "nginx""#)
        );
    }

    #[test]
    fn test_failed_response_is_not_an_error() {
        let model = ExpModel::new("process", "stop");
        let result = create_experiment(&catalog(), &model, &dry_run()).unwrap();
        assert!(!result.is_success());
        assert_eq!(result.response.code(), Code::IllegalParameters);
    }
}
