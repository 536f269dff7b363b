use super::Captured;

/// Matches a literal prefix and everything below it.
#[derive(Debug)]
pub struct Subtree(String);

impl Subtree {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn prefix(&self) -> &str {
        &self.0
    }

    pub fn pattern_match<'p>(&self, path: &'p str) -> Option<Captured<'p>> {
        path.strip_prefix(self.0.as_str())
            .map(|tail| Captured::new(vec![], tail))
    }
}

#[cfg(test)]
mod tests {
    use super::Subtree;

    #[test]
    fn test_subtree_match() {
        let subtree = Subtree::new("/fst/");

        let tests = [
            ("/fst/", ""),
            ("/fst/xyz", "xyz"),
            ("/fst/xyz/", "xyz/"),
            ("/fst/xy/z", "xy/z"),
            ("/fst/xy/z/", "xy/z/"),
        ];

        for (path, tail_want) in tests {
            let captured = subtree.pattern_match(path).unwrap();
            assert!(captured.values.is_empty());
            assert_eq!(captured.tail, tail_want);
        }
    }

    #[test]
    fn test_subtree_root() {
        let subtree = Subtree::new("/");
        assert_eq!(subtree.pattern_match("/").unwrap().tail, "");
        assert_eq!(subtree.pattern_match("/a/b").unwrap().tail, "a/b");
    }

    #[test]
    fn test_subtree_no_match() {
        let subtree = Subtree::new("/fst/");

        assert!(subtree.pattern_match("/fst").is_none());
        assert!(subtree.pattern_match("/fstxyz").is_none());
        assert!(subtree.pattern_match("/snd/fst/").is_none());
    }
}
