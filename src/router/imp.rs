use super::chain::{Match, MatchChain};
use super::{Params, Route, Router};

use crate::pattern::PatternError;

impl<T> Router<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn insert(&mut self, pattern: &str, payload: T) -> &mut Self {
        if let Err(e) = self.insert_route(pattern, payload, Router::new()) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, payload: T) -> Result<&mut Self, PatternError> {
        self.insert_route(pattern, payload, Router::new())?;
        Ok(self)
    }

    /// Declares a route whose children are declared by `f`.
    pub fn nest(&mut self, pattern: &str, payload: T, f: impl FnOnce(&mut Router<T>)) -> &mut Self {
        let mut children = Self::new();
        f(&mut children);
        if let Err(e) = self.insert_route(pattern, payload, children) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_nest(
        &mut self,
        pattern: &str,
        payload: T,
        f: impl FnOnce(&mut Router<T>) -> Result<(), PatternError>,
    ) -> Result<&mut Self, PatternError> {
        let mut children = Self::new();
        f(&mut children)?;
        self.insert_route(pattern, payload, children)?;
        Ok(self)
    }

    /// Finds the best route among these siblings only, without descending.
    pub fn find(&self, path: &str) -> Option<Match<'_, T>> {
        self.match_at(path, "", &Params::new())
    }

    /// Resolves `path` to the chain of matched routes, outermost first.
    ///
    /// An empty chain means no route matched.
    pub fn resolve(&self, path: &str) -> MatchChain<'_, T> {
        let mut chain = MatchChain::new();
        self.resolve_into(path, "", &Params::new(), &mut chain);
        chain
    }

    /// Resolves the remainder of a match from another router against this one.
    ///
    /// The resulting URIs extend `parent.uri()` and the parent's params are inherited.
    pub fn resolve_nested<U>(&self, parent: &Match<'_, U>) -> MatchChain<'_, T> {
        let mut chain = MatchChain::new();
        self.resolve_into(parent.remainder(), parent.uri(), parent.params(), &mut chain);
        chain
    }
}
