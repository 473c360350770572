use serde::{Deserialize, Serialize};
use serde_json::Value;

const QUERY: char = '?';

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pathname: String,
    search: String,
    state: Option<Value>,
    index: u64,
}

impl Location {
    /// Splits `href` into a pathname and a search string.
    ///
    /// The search string keeps its leading `?`. An empty pathname becomes `/`.
    pub fn new(href: &str) -> Self {
        let (pathname, search) = match href.find(QUERY) {
            Some(i) => href.split_at(i),
            None => (href, ""),
        };
        let pathname = if pathname.is_empty() { "/" } else { pathname };
        Self {
            pathname: pathname.to_owned(),
            search: search.to_owned(),
            state: None,
            index: 0,
        }
    }

    pub fn with_state(mut self, state: Option<Value>) -> Self {
        self.state = state;
        self
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    /// The number of navigations committed before this location, starting at 0.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn href(&self) -> String {
        let mut href = String::with_capacity(self.pathname.len() + self.search.len());
        href.push_str(&self.pathname);
        href.push_str(&self.search);
        href
    }

    pub(super) fn with_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }
}
