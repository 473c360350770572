use super::Location;

/// Where locations come from and where committed navigations are recorded.
///
/// The navigator only writes to a source when a transition commits.
pub trait LocationSource {
    /// The current history entry.
    fn location(&self) -> Location;

    fn push(&mut self, location: &Location);

    fn replace(&mut self, location: &Location);

    /// The entry `delta` steps away from the current one, if any.
    fn peek(&self, delta: isize) -> Option<Location>;

    /// Moves `delta` steps through history. Returns `false` if out of range.
    fn go(&mut self, delta: isize) -> bool;
}

/// A history stack held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    entries: Vec<Location>,
    position: usize,
}

impl MemorySource {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::new(initial)],
            position: 0,
        }
    }

    /// Index of the current entry in the stack.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    fn offset(&self, delta: isize) -> Option<usize> {
        let target = (self.position as isize).checked_add(delta)?;
        if target < 0 || target as usize >= self.entries.len() {
            return None;
        }
        Some(target as usize)
    }
}

impl LocationSource for MemorySource {
    fn location(&self) -> Location {
        self.entries[self.position].clone()
    }

    fn push(&mut self, location: &Location) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location.clone());
        self.position += 1;
    }

    fn replace(&mut self, location: &Location) {
        self.entries[self.position] = location.clone();
    }

    fn peek(&self, delta: isize) -> Option<Location> {
        self.offset(delta).map(|i| self.entries[i].clone())
    }

    fn go(&mut self, delta: isize) -> bool {
        match self.offset(delta) {
            Some(i) => {
                self.position = i;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_stack() {
        let mut source = MemorySource::new("/");
        source.push(&Location::new("/a"));
        source.push(&Location::new("/b"));
        assert_eq!(source.position(), 2);

        assert!(source.go(-2));
        assert_eq!(source.location().pathname(), "/");
        assert!(!source.go(-1));
        assert_eq!(source.peek(1).unwrap().pathname(), "/a");

        source.push(&Location::new("/c"));
        assert_eq!(source.entries().len(), 2);
        assert!(source.peek(1).is_none());

        source.replace(&Location::new("/d"));
        assert_eq!(source.location().pathname(), "/d");
        assert_eq!(source.position(), 1);
    }

    #[test]
    fn memory_offset_extremes() {
        let mut source = MemorySource::new("/");
        source.push(&Location::new("/a"));

        for &delta in &[isize::MAX, isize::MIN, isize::MAX - 1, isize::MIN + 1] {
            assert!(source.peek(delta).is_none());
            assert!(!source.go(delta));
        }
        assert_eq!(source.position(), 1);
        assert_eq!(source.location().pathname(), "/a");
    }
}
