use std::fmt::{self, Display};

use matcher::{Captured, Dynamic, Exact, Matcher, Subtree};
use regex::Regex;

use crate::{cond::CondFlags, error::RouteError};

pub(crate) mod matcher;
pub(crate) mod parser;

/// A compiled rule.
///
/// Rule text is an optional condition clause followed by a path pattern:
///
/// ```text
/// GET|POST /user/{id:[0-9]+}/{action}
/// ```
///
/// Variable-free patterns compile to a literal comparison; patterns with
/// variables compile to an anchored regular expression. A pattern ending in
/// `/` matches its whole subtree.
#[derive(Debug)]
pub struct Route<H> {
    conditions: CondFlags,
    pattern: String,
    matcher: Matcher,
    handler: H,
}

impl<H> Route<H> {
    pub fn parse(rule: &str, handler: H) -> Result<Self, RouteError> {
        let (conditions, path) = parser::split_rule(rule)?;
        let conditions = CondFlags::parse(conditions)?;

        let (effective, is_prefix) = parser::strip_suffix(path);
        let variables = parser::scan_variables(effective);
        let matcher = match (variables.is_empty(), is_prefix) {
            (true, true) => Matcher::Subtree(Subtree::new(effective)),
            (true, false) => Matcher::Exact(Exact::new(effective)),
            (false, _) => Matcher::Dynamic(Dynamic::compile(effective, &variables, is_prefix)?),
        };

        Ok(Self {
            conditions,
            pattern: path.to_owned(),
            matcher,
            handler,
        })
    }

    pub fn conditions(&self) -> CondFlags {
        self.conditions
    }

    /// The path pattern as written in the rule.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Literal text every matching path starts with.
    pub fn entry_prefix(&self) -> &str {
        self.matcher.entry_prefix()
    }

    pub fn is_prefix(&self) -> bool {
        self.matcher.is_prefix()
    }

    /// The compiled expression, present only for patterns with variables.
    pub fn regex(&self) -> Option<&Regex> {
        match &self.matcher {
            Matcher::Dynamic(dynamic) => Some(dynamic.regex()),
            _ => None,
        }
    }

    /// Position of a named variable among the captured values.
    pub fn var_index(&self, name: &str) -> Option<usize> {
        match &self.matcher {
            Matcher::Dynamic(dynamic) => dynamic.vars().get(name).copied(),
            _ => None,
        }
    }

    /// Named variables and their positions, in no particular order.
    pub fn var_names(&self) -> impl Iterator<Item = (&str, usize)> {
        let vars = match &self.matcher {
            Matcher::Dynamic(dynamic) => Some(dynamic.vars()),
            _ => None,
        };
        vars.into_iter()
            .flatten()
            .map(|(name, index)| (name.as_str(), *index))
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub(crate) fn pattern_match<'p>(
        &self,
        conditions: CondFlags,
        path: &'p str,
    ) -> Option<Captured<'p>> {
        if !self.conditions.admits(conditions) {
            return None;
        }
        if !path.starts_with(self.entry_prefix()) {
            return None;
        }
        self.matcher.pattern_match(path)
    }
}

impl<H> Display for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.conditions, self.pattern)
    }
}
