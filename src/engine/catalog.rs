//! Action catalog: registered actions keyed by target and action name

use std::sync::Arc;

use tracing::{debug, info};

use crate::action::{ActionSpec, Code, ExpModel, Response};
use crate::channel::Channel;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::engine::actions::{FileAppendActionSpec, StopProcessActionSpec};
use crate::error::{ChaosError, Result};

const NAME_PATTERN: &str = r"^[a-z][a-z0-9-]*$";

#[derive(Default)]
pub struct Catalog {
    specs: Vec<Box<dyn ActionSpec>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Catalog holding every built-in action, bound to `channel`
    pub fn with_defaults(config: &Config, channel: Arc<dyn Channel>) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.register(Box::new(
            StopProcessActionSpec::new(config).with_channel(Arc::clone(&channel)),
        ))?;
        catalog.register(Box::new(
            FileAppendActionSpec::new(config).with_channel(channel),
        ))?;
        Ok(catalog)
    }

    /// Register an action. Names and aliases must be unique within a target.
    pub fn register(&mut self, spec: Box<dyn ActionSpec>) -> Result<()> {
        for name in [spec.target(), spec.name()]
            .into_iter()
            .chain(spec.aliases().iter().copied())
        {
            if !is_valid_name(name) {
                return Err(ChaosError::CatalogError(format!(
                    "invalid name `{}` in action {} {}",
                    name,
                    spec.target(),
                    spec.name()
                )));
            }
        }
        for flag in spec.all_flags() {
            if !is_valid_name(flag.name) {
                return Err(ChaosError::InvalidFlagName(flag.name.to_string()));
            }
        }

        let conflict = std::iter::once(spec.name())
            .chain(spec.aliases().iter().copied())
            .find(|name| self.get(spec.target(), name).is_some());
        if let Some(name) = conflict {
            return Err(ChaosError::CatalogError(format!(
                "action `{} {}` is already registered",
                spec.target(),
                name
            )));
        }

        info!(resource = spec.target(), action = spec.name(), "registered action");
        self.specs.push(spec);
        Ok(())
    }

    /// Look up an action by name or alias
    pub fn get(&self, target: &str, action: &str) -> Option<&dyn ActionSpec> {
        self.specs
            .iter()
            .find(|s| s.target() == target && s.matches(action))
            .map(|s| s.as_ref())
    }

    /// Every action, ordered by target then name
    pub fn list(&self) -> Vec<&dyn ActionSpec> {
        let mut specs: Vec<&dyn ActionSpec> = self.specs.iter().map(|s| s.as_ref()).collect();
        specs.sort_by_key(|s| (s.target(), s.name()));
        specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Resolve the action named by `model`, check its flags and run it
    pub fn dispatch(&self, uid: &str, ctx: &ExecutionContext, model: &ExpModel) -> Response {
        let Some(spec) = self.get(&model.target, &model.action) else {
            return Response::fail(
                Code::ActionNotSupported,
                format!("`{} {}`: action not supported", model.target, model.action),
            );
        };

        if let Err(resp) = check_flags(spec, ctx, model) {
            debug!(uid, message = resp.message(), "flag check failed");
            return resp;
        }

        debug!(
            uid,
            resource = spec.target(),
            action = spec.name(),
            destroy = ctx.is_destroy(),
            "dispatching"
        );
        spec.executor().exec(uid, ctx, model)
    }
}

fn is_valid_name(name: &str) -> bool {
    regex::Regex::new(NAME_PATTERN)
        .map(|r| r.is_match(name))
        .unwrap_or(false)
}

/// Unknown flags and malformed switches are always rejected. Required flags
/// are enforced on create; a destroy only needs the required matchers.
fn check_flags(
    spec: &dyn ActionSpec,
    ctx: &ExecutionContext,
    model: &ExpModel,
) -> std::result::Result<(), Response> {
    for (name, value) in &model.flags {
        let Some(flag) = spec.find_flag(name) else {
            return Err(Response::fail(
                Code::IllegalParameters,
                format!("unknown flag: --{}", name),
            ));
        };
        if flag.no_args && !matches!(value.as_str(), "" | "true" | "false") {
            return Err(Response::fail(
                Code::IllegalParameters,
                format!("--{} takes no value, got `{}`", name, value),
            ));
        }
    }

    let required = if ctx.is_destroy() {
        spec.matchers().to_vec()
    } else {
        spec.all_flags()
    };
    if let Some(missing) = required
        .iter()
        .find(|f| f.required && model.flag(f.name).is_none())
    {
        return Err(Response::fail(
            Code::IllegalParameters,
            format!("less parameter: --{}", missing.name),
        ));
    }
    Ok(())
}
