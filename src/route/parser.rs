use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::RouteError;

lazy_static! {
    static ref SPLIT_OR: Regex = Regex::new(r"\s*\|\s*").unwrap();
    static ref VARIABLE: Regex =
        Regex::new(r"\{(?P<name>\w+)(?::\s*(?P<pattern>[^}]*))?\s*\}").unwrap();
}

/// Implicit pattern of `{name}`.
pub const DEFAULT_VAR_PATTERN: &str = "[^/]+";

/// Name of a variable whose value is captured but not bound to a name.
pub const ANONYMOUS_VAR: &str = "_";

/// Splits `"GET|POST /path"` into its condition tokens and its path pattern.
pub fn split_rule(rule: &str) -> Result<(Vec<&str>, &str), RouteError> {
    let rule = rule.trim();
    if rule.is_empty() {
        return Err(RouteError::EmptyPattern);
    }
    let Some(i) = rule.find('/') else {
        return Err(RouteError::MissingPathSeparator(rule.to_owned()));
    };
    let (conditions, path) = rule.split_at(i);
    Ok((split_conditions(conditions), path))
}

/// Splits a condition clause on `|`, ignoring surrounding whitespace and
/// stray separators at either end.
pub fn split_conditions(s: &str) -> Vec<&str> {
    let s = s.trim_matches(|c: char| matches!(c, '|' | ' ' | '\t' | '\r' | '\n'));
    if s.is_empty() {
        return vec![];
    }
    SPLIT_OR.split(s).collect()
}

/// Applies the suffix rules of a path pattern.
///
/// A trailing `/` marks a subtree route and is kept. A trailing `!` is
/// removed, so `"/foo/!"` is the exact path `"/foo/"` and `"/foo/!!"` the
/// exact path `"/foo/!"`.
///
/// # Returns
///
/// The effective pattern and whether it is a subtree route.
pub fn strip_suffix(path: &str) -> (&str, bool) {
    if path.ends_with('/') {
        return (path, true);
    }
    match path.strip_suffix('!') {
        Some(stripped) => (stripped, false),
        None => (path, false),
    }
}

#[derive(Debug, PartialEq)]
pub struct Variable<'a> {
    pub name: &'a str,
    pub pattern: &'a str,
    /// Byte range of the whole `{...}` chunk.
    pub range: Range<usize>,
}

impl Variable<'_> {
    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_VAR
    }
}

/// Finds every `{name}` and `{name:pattern}` in `path`, left to right.
pub fn scan_variables(path: &str) -> Vec<Variable<'_>> {
    VARIABLE
        .captures_iter(path)
        .filter_map(|caps| {
            let range = caps.get(0)?.range();
            let name = caps.name("name")?.as_str();
            let pattern = match caps.name("pattern").map(|m| m.as_str()) {
                Some(pattern) if !pattern.is_empty() => pattern,
                _ => DEFAULT_VAR_PATTERN,
            };
            Some(Variable {
                name,
                pattern,
                range,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::error::RouteError;

    use super::{scan_variables, split_conditions, split_rule, strip_suffix, Variable};

    #[test]
    fn test_split_rule() {
        let tests = [
            ("/", vec![], "/"),
            ("  /items  ", vec![], "/items"),
            ("GET /items", vec!["GET"], "/items"),
            ("GET|POST /items", vec!["GET", "POST"], "/items"),
            ("GET | POST\t/items", vec!["GET", "POST"], "/items"),
            ("|GET| /items", vec!["GET"], "/items"),
            ("* /items", vec!["*"], "/items"),
            ("GET/items", vec!["GET"], "/items"),
        ];

        for (rule, conditions_want, path_want) in tests {
            let (conditions, path) = split_rule(rule).unwrap();
            assert_eq!(conditions, conditions_want, "{}", rule);
            assert_eq!(path, path_want, "{}", rule);
        }
    }

    #[test]
    fn test_split_rule_err() {
        assert!(matches!(split_rule(""), Err(RouteError::EmptyPattern)));
        assert!(matches!(split_rule("  \t"), Err(RouteError::EmptyPattern)));
        match split_rule("GET items") {
            Err(RouteError::MissingPathSeparator(rule)) => assert_eq!(rule, "GET items"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_split_conditions() {
        assert!(split_conditions("").is_empty());
        assert!(split_conditions(" | ").is_empty());
        assert_eq!(split_conditions("GET||POST"), vec!["GET", "", "POST"]);
    }

    #[test]
    fn test_strip_suffix() {
        let tests = [
            ("/", "/", true),
            ("/foo", "/foo", false),
            ("/foo/", "/foo/", true),
            ("/foo/!", "/foo/", false),
            ("/foo/!!", "/foo/!", false),
            ("/!", "/", false),
        ];

        for (path, want, is_prefix) in tests {
            assert_eq!(strip_suffix(path), (want, is_prefix), "{}", path);
        }
    }

    #[test]
    fn test_scan_variables() {
        let path = "/user/{id:[0-9]+}/{action}/{_}/{q: \\w+}/{e:}";
        let vars = scan_variables(path);
        let got: Vec<_> = vars.iter().map(|v| (v.name, v.pattern)).collect();
        assert_eq!(
            got,
            vec![
                ("id", "[0-9]+"),
                ("action", "[^/]+"),
                ("_", "[^/]+"),
                ("q", "\\w+"),
                ("e", "[^/]+"),
            ]
        );
        assert!(vars[2].is_anonymous());
        assert_eq!(
            vars[0],
            Variable {
                name: "id",
                pattern: "[0-9]+",
                range: 6..17,
            }
        );
    }

    #[test]
    fn test_scan_variables_none() {
        assert!(scan_variables("/user/profile").is_empty());
        assert!(scan_variables("/user/{}").is_empty());
        assert!(scan_variables("/user/{a-b}").is_empty());
    }
}
