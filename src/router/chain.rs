use super::{Params, Route};

use std::fmt;
use std::ptr;

use smallvec::SmallVec;

/// Matches from the outermost route to the innermost. Empty means not found.
pub type MatchChain<'r, T> = SmallVec<[Match<'r, T>; 4]>;

/// One route of a resolved match chain.
pub struct Match<'r, T> {
    pub(super) route: &'r Route<T>,
    pub(super) params: Params,
    pub(super) uri: String,
    pub(super) remainder: String,
}

impl<'r, T> Match<'r, T> {
    pub fn route(&self) -> &'r Route<T> {
        self.route
    }

    pub fn payload(&self) -> &'r T {
        self.route.payload()
    }

    /// Params of this route merged over those of its ancestors.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The absolute URI matched up to and including this route.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The part of the pathname not consumed by this route, without a leading slash.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }
}

impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        Self {
            route: self.route,
            params: self.params.clone(),
            uri: self.uri.clone(),
            remainder: self.remainder.clone(),
        }
    }
}

impl<T> PartialEq for Match<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.route, other.route)
            && self.params == other.params
            && self.uri == other.uri
            && self.remainder == other.remainder
    }
}

impl<T: fmt::Debug> fmt::Debug for Match<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("pattern", &self.route.pattern().as_str())
            .field("payload", self.route.payload())
            .field("params", &self.params)
            .field("uri", &self.uri)
            .field("remainder", &self.remainder)
            .finish()
    }
}
