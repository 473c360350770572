mod captures;
mod chain;
mod core;
mod imp;

pub use self::captures::Params;
pub use self::chain::{Match, MatchChain};

use crate::pattern::{Pattern, Rank};

use std::fmt;

/// An ordered set of sibling routes. Each route owns its children.
pub struct Router<T> {
    routes: Vec<Route<T>>,
}

pub struct Route<T> {
    pattern: Pattern,
    rank: Rank,
    payload: T,
    children: Router<T>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Route");
        s.field("pattern", &self.pattern.as_str())
            .field("rank", &self.rank)
            .field("payload", &self.payload);
        if !self.children.is_empty() {
            s.field("children", &self.children);
        }
        s.finish()
    }
}

impl<T> Route<T> {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn children(&self) -> &Router<T> {
        &self.children
    }

    /// A route with children matches its pattern as a prefix of the pathname.
    pub fn is_prefix(&self) -> bool {
        !self.children.is_empty()
    }
}
