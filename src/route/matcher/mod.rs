pub use dynamic::Dynamic;
pub use exact::Exact;
pub use subtree::Subtree;

mod dynamic;
mod exact;
mod subtree;

/// What a matcher extracts from a path it accepts.
#[derive(Debug, PartialEq)]
pub struct Captured<'p> {
    /// Variable values in declaration order.
    pub values: Vec<&'p str>,
    /// Remainder after the matched part; empty unless the route is a subtree.
    pub tail: &'p str,
}

impl<'p> Captured<'p> {
    fn new(values: Vec<&'p str>, tail: &'p str) -> Self {
        Self { values, tail }
    }
}

#[derive(Debug)]
pub enum Matcher {
    Exact(Exact),
    Subtree(Subtree),
    Dynamic(Dynamic),
}

impl Matcher {
    /// Literal text every accepted path starts with.
    pub fn entry_prefix(&self) -> &str {
        match self {
            Matcher::Exact(exact) => exact.path(),
            Matcher::Subtree(subtree) => subtree.prefix(),
            Matcher::Dynamic(dynamic) => dynamic.prefix(),
        }
    }

    pub fn is_prefix(&self) -> bool {
        match self {
            Matcher::Exact(_) => false,
            Matcher::Subtree(_) => true,
            Matcher::Dynamic(dynamic) => dynamic.is_prefix(),
        }
    }

    pub fn pattern_match<'p>(&self, path: &'p str) -> Option<Captured<'p>> {
        match self {
            Matcher::Exact(exact) => exact.pattern_match(path),
            Matcher::Subtree(subtree) => subtree.pattern_match(path),
            Matcher::Dynamic(dynamic) => dynamic.pattern_match(path),
        }
    }
}
