//! Execution context handed to executors and channels
//!
//! The context tells an executor which half of the fault lifecycle it is
//! being asked to perform: applying a fault, or reversing a fault that was
//! applied earlier under a known experiment uid.

/// Lifecycle phase of a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Create,
    Destroy { uid: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    phase: Phase,
}

impl ExecutionContext {
    /// Context for applying a fault
    pub fn create() -> Self {
        Self { phase: Phase::Create }
    }

    /// Context for reversing the fault recorded under `uid`
    pub fn destroy(uid: impl Into<String>) -> Self {
        Self {
            phase: Phase::Destroy { uid: uid.into() },
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The uid being destroyed, if this is a destroy request
    pub fn destroy_uid(&self) -> Option<&str> {
        match &self.phase {
            Phase::Destroy { uid } => Some(uid),
            Phase::Create => None,
        }
    }

    pub fn is_destroy(&self) -> bool {
        self.destroy_uid().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_create() {
        let ctx = ExecutionContext::default();
        assert_eq!(ctx.phase(), &Phase::Create);
        assert!(!ctx.is_destroy());
        assert_eq!(ctx, ExecutionContext::create());
    }

    #[test]
    fn test_destroy_carries_uid() {
        let ctx = ExecutionContext::destroy("a1b2");
        assert!(ctx.is_destroy());
        assert_eq!(ctx.destroy_uid(), Some("a1b2"));
    }
}
