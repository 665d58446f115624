use std::fmt;

/// Per-window lifecycle, strictly monotonic.
///
/// `Running` is the only state that repeats; it does so without transitions,
/// by handling events.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    WindowCreated,
    ContextReady,
    ResourcesCreated,
    Running,
    ResourcesDestroyed,
    Terminated,
}

impl Lifecycle {
    /// The only state reachable from `self`, if any.
    pub fn next(self) -> Option<Lifecycle> {
        use Lifecycle::*;
        match self {
            Uninitialized => Some(WindowCreated),
            WindowCreated => Some(ContextReady),
            ContextReady => Some(ResourcesCreated),
            ResourcesCreated => Some(Running),
            Running => Some(ResourcesDestroyed),
            ResourcesDestroyed => Some(Terminated),
            Terminated => None,
        }
    }

    /// Moves to `to`, which must be the immediate successor.
    pub fn advance(&mut self, to: Lifecycle) -> Result<(), LifecycleError> {
        if self.next() != Some(to) {
            return Err(LifecycleError { from: *self, to });
        }
        log::debug!("lifecycle: {:?} -> {:?}", *self, to);
        *self = to;
        Ok(())
    }
}

/// A transition that skips a state or goes backwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LifecycleError {
    pub from: Lifecycle,
    pub to: Lifecycle,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid lifecycle transition {:?} -> {:?}", self.from, self.to)
    }
}

impl std::error::Error for LifecycleError {}
