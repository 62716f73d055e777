use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::rc::Rc;

#[derive(Clone)]
pub struct Source(Rc<Vec<u8>>);

impl Source {
    pub fn new(code: Vec<u8>) -> Source {
        Source(Rc::new(code))
    }

    pub fn code(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// A string backed by a source. Treated as a string, so contents rather than position is
/// considered the value. For example, two SourceRange values are equal if their contents equal,
/// even if they are from different files or positions in the same file.
#[derive(Clone)]
pub struct SourceRange {
    pub source: Source,
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn anonymous<T: Into<Vec<u8>>>(code: T) -> SourceRange {
        let code = code.into();
        let end = code.len();
        SourceRange {
            source: Source::new(code),
            start: 0,
            end,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.source.code()[self.start..self.end]
    }

    pub fn as_str(&self) -> &str {
        unsafe { std::str::from_utf8_unchecked(self.as_slice()) }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl Debug for SourceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&format!("`{}`[{}:{}]", self.as_str(), self.start, self.end))
    }
}

impl Eq for SourceRange {}

impl PartialEq for SourceRange {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<str> for SourceRange {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl Hash for SourceRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
