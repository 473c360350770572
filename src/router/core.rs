use super::chain::{Match, MatchChain};
use super::{Params, Route, Router};

use crate::pattern::{pick_by, trim_slashes, Candidate, Pattern, PatternError, PatternMatch, Rank};

use tracing::trace;

const SLASH: char = '/';

impl<T> Router<T> {
    pub(super) fn insert_route(
        &mut self,
        pattern: &str,
        payload: T,
        children: Router<T>,
    ) -> Result<(), PatternError> {
        let pattern = Pattern::parse(pattern)?;
        let rank = Rank::of(pattern.segments(), !children.is_empty());

        trace!(
            pattern = pattern.as_str(),
            score = rank.score(),
            children = children.len(),
            "declare route"
        );

        self.routes.push(Route {
            pattern,
            rank,
            payload,
            children,
        });
        Ok(())
    }

    pub(super) fn find_route<'s, 'p>(
        &'s self,
        path: &'p str,
    ) -> Option<(&'s Route<T>, PatternMatch<'s, 'p>)> {
        let candidates = self.routes.iter().map(|route| Candidate {
            pattern: &route.pattern,
            rank: route.rank,
            prefix: route.is_prefix(),
        });
        let (idx, m) = pick_by(path, candidates)?;
        Some((&self.routes[idx], m))
    }

    pub(super) fn match_at<'s>(
        &'s self,
        path: &str,
        base: &str,
        inherited: &Params,
    ) -> Option<Match<'s, T>> {
        let (route, m) = match self.find_route(path) {
            Some(found) => found,
            None => {
                trace!(path, base, "no route matched");
                return None;
            }
        };

        let mut params = inherited.clone();
        for (name, value) in m.captures {
            params.insert(name, value.into_owned());
        }

        Some(Match {
            route,
            params,
            uri: join_uri(base, m.matched),
            remainder: m.remainder.to_owned(),
        })
    }

    pub(super) fn resolve_into<'s>(
        &'s self,
        path: &str,
        base: &str,
        inherited: &Params,
        chain: &mut MatchChain<'s, T>,
    ) {
        let m = match self.match_at(path, base, inherited) {
            Some(m) => m,
            None => return,
        };

        let route = m.route;
        if !route.is_prefix() {
            chain.push(m);
            return;
        }

        let (remainder, uri, params) = (m.remainder.clone(), m.uri.clone(), m.params.clone());
        chain.push(m);
        route
            .children
            .resolve_into(&remainder, &uri, &params, chain);
    }
}

/// Appends the trimmed `matched` part to an absolute `base`.
fn join_uri(base: &str, matched: &str) -> String {
    let base = base.trim_end_matches(SLASH);
    let matched = trim_slashes(matched);
    let mut uri = String::with_capacity(base.len() + matched.len() + 2);
    if !base.is_empty() && !base.starts_with(SLASH) {
        uri.push(SLASH);
    }
    uri.push_str(base);
    if !matched.is_empty() || uri.is_empty() {
        uri.push(SLASH);
    }
    uri.push_str(matched);
    uri
}
