use super::{Pattern, Rank, SLASH};

use std::borrow::Cow;

use smallvec::SmallVec;

pub(crate) type Tokens<'p> = SmallVec<[&'p str; 8]>;

/// The outcome of matching one pattern against a pathname.
///
/// `matched` and `remainder` are slices of the trimmed pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'s, 'p> {
    pub(crate) captures: SmallVec<[(&'s str, Cow<'p, str>); 8]>,
    pub(crate) matched: &'p str,
    pub(crate) remainder: &'p str,
}

impl<'s, 'p> PatternMatch<'s, 'p> {
    pub(super) fn new() -> Self {
        Self {
            captures: SmallVec::new(),
            matched: "",
            remainder: "",
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .rev()
            .find_map(|(k, v)| if *k == name { Some(&**v) } else { None })
    }

    pub fn captures(&self) -> &[(&'s str, Cow<'p, str>)] {
        &self.captures
    }

    /// The part of the pathname consumed by static and dynamic segments.
    pub fn matched(&self) -> &'p str {
        self.matched
    }

    /// The part of the pathname left for nested routes.
    pub fn remainder(&self) -> &'p str {
        self.remainder
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'s> {
    pub(crate) pattern: &'s Pattern,
    pub(crate) rank: Rank,
    pub(crate) prefix: bool,
}

/// Picks the highest ranked pattern among `candidates` that matches `path`.
///
/// Returns the index of the winner and its captures. Equal ranks go to the
/// candidate declared first.
pub fn pick<'s, 'p>(
    path: &'p str,
    candidates: &'s [Pattern],
) -> Option<(usize, PatternMatch<'s, 'p>)> {
    let candidates = candidates.iter().map(|pattern| Candidate {
        pattern,
        rank: pattern.rank(),
        prefix: false,
    });
    pick_by(path, candidates)
}

pub(crate) fn pick_by<'s, 'p, I>(
    path: &'p str,
    candidates: I,
) -> Option<(usize, PatternMatch<'s, 'p>)>
where
    I: IntoIterator<Item = Candidate<'s>>,
{
    let path = trim_slashes(path);
    let tokens = tokenize(path);

    let mut best: Option<(usize, Rank, PatternMatch<'s, 'p>)> = None;

    for (i, c) in candidates.into_iter().enumerate() {
        if let Some((_, rank, _)) = &best {
            if c.rank <= *rank {
                continue;
            }
        }
        if let Some(m) = c.pattern.match_tokens(path, &tokens, c.prefix) {
            best = Some((i, c.rank, m));
        }
    }

    best.map(|(i, _, m)| (i, m))
}

#[inline]
pub(crate) fn trim_slashes(s: &str) -> &str {
    s.trim_matches(SLASH)
}

pub(crate) fn tokenize(path: &str) -> Tokens<'_> {
    if path.is_empty() {
        return SmallVec::new();
    }
    path.split(SLASH).collect()
}

pub(super) fn decode(token: &str) -> Cow<'_, str> {
    urlencoding::decode(token).unwrap_or(Cow::Borrowed(token))
}

/// `path[..]` up to, not including, the separator before `tokens[i]`.
pub(super) fn consumed<'p>(path: &'p str, tokens: &[&'p str], i: usize) -> &'p str {
    if i == 0 {
        return "";
    }
    match tokens.get(i) {
        Some(t) => &path[..calc_offset(path, t) - 1],
        None => path,
    }
}

/// `path[..]` starting at `tokens[i]`.
pub(super) fn rest_from<'p>(path: &'p str, tokens: &[&'p str], i: usize) -> &'p str {
    match tokens.get(i) {
        Some(t) => &path[calc_offset(path, t)..],
        None => &path[path.len()..],
    }
}

#[inline(always)]
fn calc_offset(src: &str, dst: &str) -> usize {
    let p2 = dst.as_ptr() as usize;
    let p1 = src.as_ptr() as usize;
    p2 - p1
}
