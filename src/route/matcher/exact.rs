use super::Captured;

#[derive(Debug)]
pub struct Exact(String);

impl Exact {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn pattern_match<'p>(&self, path: &'p str) -> Option<Captured<'p>> {
        (path == self.0).then(|| Captured::new(vec![], ""))
    }
}
