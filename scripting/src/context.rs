use crate::{ActorId, ActorSource};

/// Execution context threaded by the host into every script call.
///
/// Carries the actor the script is running for (the "current actor") and the source
/// used to read actor state. Every query takes an `Option<ActorId>`; `None` resolves to
/// [`ScriptContext::current`] so a script can ask about itself without naming itself.
pub struct ScriptContext<'a, S: ?Sized> {
    source: &'a S,
    current: ActorId,
}

impl<S: ?Sized> Clone for ScriptContext<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ScriptContext<'_, S> {}

impl<'a, S: ActorSource + ?Sized> ScriptContext<'a, S> {
    pub fn new(source: &'a S, current: ActorId) -> Self {
        Self { source, current }
    }

    /// The actor this context runs for.
    #[inline]
    pub fn current(&self) -> ActorId {
        self.current
    }

    #[inline]
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Same source, different current actor.
    pub fn with_actor(&self, current: ActorId) -> Self {
        Self::new(self.source, current)
    }

    /// Resolves an optional actor argument to a concrete handle.
    ///
    /// No lookup happens here; an invalid handle fails later at the source.
    #[inline]
    pub fn resolve(&self, actor: Option<ActorId>) -> ActorId {
        match actor {
            Some(actor) => actor,
            None => {
                log::trace!("defaulting to current actor {}", self.current);
                self.current
            }
        }
    }
}
