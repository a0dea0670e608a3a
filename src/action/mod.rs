//! Action descriptors and the executor contract
//!
//! An action is described by an [`ActionSpec`]: its identity, the flags it
//! accepts and the helper programs it needs. Each descriptor owns an [`Executor`]
//! that turns a resolved [`ExpModel`] into a helper invocation.

pub mod flag;
pub mod model;
pub mod response;

pub use flag::FlagSpec;
pub use model::ExpModel;
pub use response::{Code, Response};

use serde::Serialize;

use crate::context::ExecutionContext;

/// Runtime half of an action
pub trait Executor {
    fn name(&self) -> &'static str;

    /// Apply or reverse the fault described by `model`, depending on `ctx`
    fn exec(&self, uid: &str, ctx: &ExecutionContext, model: &ExpModel) -> Response;
}

/// Static description of an action
pub trait ActionSpec {
    /// Resource kind the action works on, e.g. `process`
    fn target(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn short_desc(&self) -> &'static str;

    fn long_desc(&self) -> String;

    /// Flags that select the resource to act on
    fn matchers(&self) -> &[FlagSpec];

    fn flags(&self) -> &[FlagSpec];

    /// Helper binaries the executor invokes
    fn programs(&self) -> &[&'static str];

    fn categories(&self) -> &[&'static str];

    fn example(&self) -> &'static str;

    fn executor(&self) -> &dyn Executor;

    /// Matchers followed by action flags
    fn all_flags(&self) -> Vec<FlagSpec> {
        self.matchers()
            .iter()
            .chain(self.flags().iter())
            .copied()
            .collect()
    }

    fn find_flag(&self, name: &str) -> Option<FlagSpec> {
        self.matchers()
            .iter()
            .chain(self.flags().iter())
            .find(|f| f.name == name)
            .copied()
    }

    fn matches(&self, name: &str) -> bool {
        self.name() == name || self.aliases().iter().any(|alias| *alias == name)
    }
}

/// Serializable snapshot of an [`ActionSpec`], used for listing and describing actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub target: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub short_desc: String,
    pub long_desc: String,
    pub matchers: Vec<FlagSpec>,
    pub flags: Vec<FlagSpec>,
    pub programs: Vec<String>,
    pub categories: Vec<String>,
    pub example: String,
}

impl ActionInfo {
    pub fn from_spec(spec: &dyn ActionSpec) -> Self {
        Self {
            target: spec.target().to_string(),
            name: spec.name().to_string(),
            aliases: spec.aliases().iter().map(|s| s.to_string()).collect(),
            short_desc: spec.short_desc().to_string(),
            long_desc: spec.long_desc(),
            matchers: spec.matchers().to_vec(),
            flags: spec.flags().to_vec(),
            programs: spec.programs().iter().map(|s| s.to_string()).collect(),
            categories: spec.categories().iter().map(|s| s.to_string()).collect(),
            example: spec.example().trim().to_string(),
        }
    }
}
