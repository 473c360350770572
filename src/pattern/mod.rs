//! Route patterns: parsing, ranking and matching against a single pathname.

mod error;
mod matcher;
mod rank;

pub use self::error::PatternError;
pub use self::matcher::{pick, PatternMatch};
pub use self::rank::Rank;

pub(crate) use self::matcher::{pick_by, tokenize, trim_slashes, Candidate};

use smallvec::SmallVec;

const STAR: &str = "*";
const COLON: char = ':';
pub(crate) const SLASH: char = '/';

/// The capture name used for the value of a splat segment.
pub const SPLAT: &str = "splat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches one token exactly.
    Static(Box<str>),
    /// Captures one token under a name.
    Dynamic(Box<str>),
    /// Captures every remaining token.
    Splat,
}

/// A parsed route pattern such as `/groups/:groupId/users/*`.
///
/// Leading and trailing slashes are not significant: `/a/b`, `a/b/` and `a/b`
/// parse to the same segments. An empty pattern or `/` is the root pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    segments: SmallVec<[Segment; 8]>,
}

impl Pattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let trimmed = trim_slashes(pattern);

        let mut segments: SmallVec<[Segment; 8]> = SmallVec::new();

        if !trimmed.is_empty() {
            let parts: SmallVec<[&str; 8]> = trimmed.split(SLASH).collect();
            let last = parts.len() - 1;

            for (i, &part) in parts.iter().enumerate() {
                if part.is_empty() {
                    return Err(PatternError::new("empty segment in pattern"));
                }
                if part == STAR {
                    if i != last {
                        return Err(PatternError::new("splat can only appear at end"));
                    }
                    segments.push(Segment::Splat);
                } else if part.starts_with(COLON) {
                    let name = &part[COLON.len_utf8()..];
                    if name.is_empty() {
                        return Err(PatternError::new("capture name can not be empty"));
                    }
                    segments.push(Segment::Dynamic(name.into()));
                } else {
                    segments.push(Segment::Static(part.into()));
                }
            }
        }

        Ok(Self {
            source: pattern.into(),
            segments,
        })
    }

    /// The pattern text as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_splat(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Splat))
    }

    pub fn rank(&self) -> Rank {
        Rank::of(&self.segments, false)
    }

    /// Matches the whole of `path` against this pattern alone.
    pub fn matches<'s, 'p>(&'s self, path: &'p str) -> Option<PatternMatch<'s, 'p>> {
        let path = trim_slashes(path);
        let tokens = tokenize(path);
        self.match_tokens(path, &tokens, false)
    }

    /// `path` must already be trimmed and `tokens` must be its tokens.
    ///
    /// With `prefix` set, tokens left over after the last segment become the
    /// remainder instead of failing the match.
    pub(crate) fn match_tokens<'s, 'p>(
        &'s self,
        path: &'p str,
        tokens: &[&'p str],
        prefix: bool,
    ) -> Option<PatternMatch<'s, 'p>> {
        let mut m = PatternMatch::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Splat => {
                    let rest = matcher::rest_from(path, tokens, i);
                    m.captures.push((SPLAT, rest.into()));
                    m.matched = matcher::consumed(path, tokens, i);
                    m.remainder = rest;
                    return Some(m);
                }
                Segment::Static(text) => {
                    if *tokens.get(i)? != &**text {
                        return None;
                    }
                }
                Segment::Dynamic(name) => {
                    let token = *tokens.get(i)?;
                    m.captures.push((&**name, matcher::decode(token)));
                }
            }
        }

        let n = self.segments.len();
        if tokens.len() > n && !prefix {
            return None;
        }

        m.matched = matcher::consumed(path, tokens, n);
        m.remainder = matcher::rest_from(path, tokens, n);
        Some(m)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segments() {
        let p = Pattern::parse("/groups/:groupId/users/*").unwrap();
        assert_eq!(
            p.segments(),
            &[
                Segment::Static("groups".into()),
                Segment::Dynamic("groupId".into()),
                Segment::Static("users".into()),
                Segment::Splat,
            ]
        );
        assert!(p.has_splat());
        assert_eq!(p.as_str(), "/groups/:groupId/users/*");
    }

    #[test]
    fn parse_ignores_outer_slashes() {
        let a = Pattern::parse("/a/b").unwrap();
        let b = Pattern::parse("a/b/").unwrap();
        let c = Pattern::parse("a/b").unwrap();
        assert_eq!(a.segments(), b.segments());
        assert_eq!(b.segments(), c.segments());
    }

    #[test]
    fn parse_root() {
        assert!(Pattern::parse("/").unwrap().is_root());
        assert!(Pattern::parse("").unwrap().is_root());
        assert!(Pattern::parse("//").unwrap().is_root());
    }

    #[test]
    fn parse_errors() {
        let err = Pattern::parse("/a/*/b").unwrap_err();
        assert_eq!(err.message(), "splat can only appear at end");
        assert!(Pattern::parse("/a/:/b").is_err());
        assert!(Pattern::parse("/a//b").is_err());
        assert!("/files/*".parse::<Pattern>().is_ok());
    }

    #[test]
    fn match_single() {
        let p = Pattern::parse("/groups/:groupId/users/:userId").unwrap();
        let m = p.matches("/groups/123/users/456").unwrap();
        assert_eq!(m.get("groupId"), Some("123"));
        assert_eq!(m.get("userId"), Some("456"));
        assert_eq!(m.matched(), "groups/123/users/456");
        assert_eq!(m.remainder(), "");

        assert!(p.matches("/groups/123/users").is_none());
        assert!(p.matches("/groups/123/users/456/extra").is_none());
        assert!(p.matches("/Groups/123/users/456").is_none());
    }

    #[test]
    fn match_decodes_dynamic() {
        let p = Pattern::parse("/files/:name").unwrap();
        let m = p.matches("/files/hello%20world").unwrap();
        assert_eq!(m.get("name"), Some("hello world"));
    }

    #[test]
    fn match_splat() {
        let p = Pattern::parse("/groups/:groupId/users/*").unwrap();
        let m = p.matches("/groups/123/users/a/bunch/of/junk").unwrap();
        assert_eq!(m.get(SPLAT), Some("a/bunch/of/junk"));
        assert_eq!(m.matched(), "groups/123/users");
        assert_eq!(m.remainder(), "a/bunch/of/junk");

        let m = p.matches("/groups/123/users").unwrap();
        assert_eq!(m.get(SPLAT), Some(""));
    }

    #[test]
    fn match_root() {
        let p = Pattern::parse("/").unwrap();
        assert!(p.matches("/").is_some());
        assert!(p.matches("").is_some());
        assert!(p.matches("/dash").is_none());
    }
}
