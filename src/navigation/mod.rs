//! Navigation between locations with interruptible transitions.
//!
//! [`Navigator::navigate`] starts a transition and hands it back to the caller;
//! nothing is committed until [`Navigator::commit`] is called with it. Starting
//! another navigation first supersedes the pending one, and committing a
//! superseded transition is a silent no-op. Only the latest navigation ever
//! reaches the location source or the subscribers.

mod error;
mod location;
mod source;

pub use self::error::NavigationError;
pub use self::location::Location;
pub use self::source::{LocationSource, MemorySource};

use crate::router::{Match, MatchChain, Router};

use serde_json::Value;
use tracing::{debug, trace};

const SLASH: char = '/';

type Listener<'r, T> = Box<dyn FnMut(&Location, &[Match<'r, T>]) + 'r>;

#[derive(Debug, Clone, Default)]
pub struct NavigateOptions {
    /// Opaque state stored with the new location.
    pub state: Option<Value>,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push,
    Replace,
    /// Move through existing history by the given offset.
    Pop(isize),
    /// The location source already moved on its own.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// A later navigation superseded this one, or the navigator was disposed.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    location: Location,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    committed: Location,
    pending: Option<Pending>,
    generation: u64,
}

impl NavigationState {
    fn new(committed: Location) -> Self {
        Self {
            committed,
            pending: None,
            generation: 0,
        }
    }

    pub fn committed(&self) -> &Location {
        &self.committed
    }

    pub fn pending(&self) -> Option<&Location> {
        self.pending.as_ref().map(|p| &p.location)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }
}

/// An in-flight navigation. Pass it to [`Navigator::commit`] to apply it.
#[must_use = "a transition has no effect until it is committed"]
pub struct Transition<'r, T> {
    generation: u64,
    action: Action,
    location: Location,
    matches: MatchChain<'r, T>,
}

impl<'r, T> Transition<'r, T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// The target location. Its index is assigned at commit.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn matches(&self) -> &[Match<'r, T>] {
        &self.matches
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Transition<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("generation", &self.generation)
            .field("action", &self.action)
            .field("location", &self.location)
            .field("matches", &self.matches)
            .finish()
    }
}

/// Owns the navigation state of one routing scope.
///
/// The route tree is borrowed, so several navigators can share one tree.
pub struct Navigator<'r, T, S = MemorySource> {
    router: &'r Router<T>,
    source: S,
    state: NavigationState,
    listeners: Vec<(SubscriptionId, Listener<'r, T>)>,
    next_listener: u64,
    disposed: bool,
}

impl<'r, T> Navigator<'r, T, MemorySource> {
    /// A navigator over an in-memory history starting at `initial`.
    pub fn memory(router: &'r Router<T>, initial: &str) -> Self {
        Self::new(router, MemorySource::new(initial))
    }
}

impl<'r, T, S: LocationSource> Navigator<'r, T, S> {
    pub fn new(router: &'r Router<T>, source: S) -> Self {
        let committed = source.location().with_index(0);
        Self {
            router,
            source,
            state: NavigationState::new(committed),
            listeners: Vec::new(),
            next_listener: 0,
            disposed: false,
        }
    }

    pub fn router(&self) -> &'r Router<T> {
        self.router
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Changes made through this handle are picked up by [`Navigator::sync`].
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn location(&self) -> &Location {
        &self.state.committed
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Resolves the committed location against the route tree.
    pub fn current_matches(&self) -> MatchChain<'r, T> {
        self.router.resolve(self.state.committed.pathname())
    }

    /// Starts a transition to `to`, superseding any pending one.
    pub fn navigate(
        &mut self,
        to: &str,
        options: NavigateOptions,
    ) -> Result<Transition<'r, T>, NavigationError> {
        if self.disposed {
            return Err(NavigationError::Disposed);
        }
        if !to.starts_with(SLASH) {
            return Err(self.abort(NavigationError::RelativeTarget(to.to_owned())));
        }

        let action = if options.replace {
            Action::Replace
        } else {
            Action::Push
        };
        let location = Location::new(to).with_state(options.state);
        Ok(self.begin(action, location))
    }

    /// Starts a transition `delta` steps through history; `-1` is back.
    pub fn go(&mut self, delta: isize) -> Result<Transition<'r, T>, NavigationError> {
        if self.disposed {
            return Err(NavigationError::Disposed);
        }
        match self.source.peek(delta) {
            Some(location) => Ok(self.begin(Action::Pop(delta), location)),
            None => Err(self.abort(NavigationError::OutOfHistory(delta))),
        }
    }

    /// Commits a change made to the location source from outside, such as a
    /// back button press.
    ///
    /// The change supersedes any pending transition. If the source still
    /// points at the committed location nothing happens and `Discarded` is
    /// returned.
    pub fn sync(&mut self) -> Result<CommitOutcome, NavigationError> {
        if self.disposed {
            return Err(NavigationError::Disposed);
        }
        let location = self.source.location();
        let committed = &self.state.committed;
        if location.href() == committed.href() && location.state() == committed.state() {
            return Ok(CommitOutcome::Discarded);
        }
        let transition = self.begin(Action::External, location);
        Ok(self.commit(transition))
    }

    /// Applies `transition` if it is still the latest one.
    ///
    /// On success the committed location, its index and the location source
    /// are updated together, then every subscriber is notified once.
    pub fn commit(&mut self, transition: Transition<'r, T>) -> CommitOutcome {
        let current = match &self.state.pending {
            Some(p) if !self.disposed => p.generation == transition.generation,
            _ => false,
        };
        if !current {
            trace!(
                generation = transition.generation,
                latest = self.state.generation,
                pathname = transition.location.pathname(),
                "discard stale transition"
            );
            return CommitOutcome::Discarded;
        }

        if let Action::Pop(delta) = transition.action {
            if !self.source.go(delta) {
                // history changed underneath the pending transition
                self.abort(NavigationError::OutOfHistory(delta));
                return CommitOutcome::Discarded;
            }
        }

        let index = self.state.committed.index() + 1;
        let location = transition.location.with_index(index);

        match transition.action {
            Action::Push => self.source.push(&location),
            Action::Replace => self.source.replace(&location),
            Action::Pop(_) | Action::External => {}
        }

        self.state.committed = location;
        self.state.pending = None;

        debug!(
            generation = transition.generation,
            index,
            pathname = self.state.committed.pathname(),
            matches = transition.matches.len(),
            "commit navigation"
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state.committed, &transition.matches);
        }

        CommitOutcome::Committed
    }

    /// Navigates and commits immediately.
    pub fn navigate_now(
        &mut self,
        to: &str,
        options: NavigateOptions,
    ) -> Result<CommitOutcome, NavigationError> {
        let transition = self.navigate(to, options)?;
        Ok(self.commit(transition))
    }

    /// Registers `f` to be called after every committed navigation.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&Location, &[Match<'r, T>]) + 'r,
    {
        let id = SubscriptionId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.listeners.len();
        self.listeners.retain(|(i, _)| *i != id);
        self.listeners.len() != len
    }

    /// Drops every subscriber and any pending transition.
    ///
    /// Afterwards `navigate` and `go` fail and commits are discarded.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!(subscribers = self.listeners.len(), "dispose navigator");
        self.listeners.clear();
        self.state.pending = None;
        self.disposed = true;
    }

    fn begin(&mut self, action: Action, location: Location) -> Transition<'r, T> {
        self.state.generation += 1;
        let generation = self.state.generation;

        if let Some(p) = &self.state.pending {
            trace!(
                superseded = p.generation,
                pathname = p.location.pathname(),
                "supersede pending transition"
            );
        }

        let matches = self.router.resolve(location.pathname());

        debug!(
            generation,
            ?action,
            pathname = location.pathname(),
            matches = matches.len(),
            "navigate"
        );

        self.state.pending = Some(Pending {
            generation,
            location: location.clone(),
        });

        Transition {
            generation,
            action,
            location,
            matches,
        }
    }

    /// Returns to idle so that no earlier transition can commit.
    fn abort(&mut self, err: NavigationError) -> NavigationError {
        self.state.generation += 1;
        self.state.pending = None;
        debug!(error = %err, "navigation failed");
        err
    }
}
