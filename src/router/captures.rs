use crate::pattern::SPLAT;

use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured along a match chain, in declaration order.
///
/// A name captured again deeper in the chain replaces the outer value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if name == &**k { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn splat(&self) -> Option<&str> {
        self.get(SPLAT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, v.as_str()))
    }

    pub(super) fn insert(&mut self, name: &str, value: String) {
        match self.buf.iter_mut().find(|(k, _)| name == &**k) {
            Some((_, v)) => *v = value,
            None => self.buf.push((name.into(), value)),
        }
    }
}

impl Deref for Params {
    type Target = [(Box<str>, String)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}
