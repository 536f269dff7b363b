use std::collections::HashMap;

use regex::Regex;

use crate::{error::RouteError, route::parser::Variable};

use super::Captured;

/// Regular-expression matcher for patterns with variables.
#[derive(Debug)]
pub struct Dynamic {
    regex: Regex,
    /// Literal text before the first variable.
    prefix: String,
    /// Named variables and their positions; anonymous ones are left out.
    vars: HashMap<String, usize>,
    /// Capture group of each declared variable, in declaration order.
    slots: Vec<usize>,
    is_prefix: bool,
}

impl Dynamic {
    /// Assembles `^literal(var)literal(var)...literal$` from `path`, where
    /// `variables` are the `{...}` chunks found in it. The trailing `$` is
    /// left out for subtree routes.
    pub fn compile(
        path: &str,
        variables: &[Variable<'_>],
        is_prefix: bool,
    ) -> Result<Self, RouteError> {
        let mut prefix = String::new();
        let mut vars = HashMap::with_capacity(variables.len());
        let mut source = String::with_capacity(path.len() * 2);
        source.push('^');

        let mut plain_start = 0;
        for (index, var) in variables.iter().enumerate() {
            if plain_start < var.range.start {
                let chunk = &path[plain_start..var.range.start];
                if plain_start == 0 {
                    prefix = chunk.to_owned();
                }
                source.push_str(&regex::escape(chunk));
            }
            plain_start = var.range.end;

            if !var.is_anonymous() && vars.insert(var.name.to_owned(), index).is_some() {
                return Err(RouteError::DuplicateVariable {
                    name: var.name.to_owned(),
                    pattern: path.to_owned(),
                });
            }

            // Named so that groups inside a custom pattern don't shift positions.
            source.push_str(&format!("(?P<{}>{})", group_name(index), var.pattern));
        }

        if plain_start < path.len() {
            source.push_str(&regex::escape(&path[plain_start..]));
        }
        if !is_prefix {
            source.push('$');
        }

        let regex = Regex::new(&source).map_err(|source| RouteError::InvalidPatternSyntax {
            pattern: path.to_owned(),
            source,
        })?;

        let slots = (0..variables.len())
            .filter_map(|index| {
                let name = group_name(index);
                regex
                    .capture_names()
                    .position(|n| n == Some(name.as_str()))
            })
            .collect();

        Ok(Self {
            regex,
            prefix,
            vars,
            slots,
            is_prefix,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn vars(&self) -> &HashMap<String, usize> {
        &self.vars
    }

    pub fn is_prefix(&self) -> bool {
        self.is_prefix
    }

    pub fn pattern_match<'p>(&self, path: &'p str) -> Option<Captured<'p>> {
        let caps = self.regex.captures(path)?;
        let values: Vec<&'p str> = self
            .slots
            .iter()
            .filter_map(|slot| caps.get(*slot))
            .map(|m| m.as_str())
            .collect();
        if values.len() != self.slots.len() {
            return None;
        }

        let end = caps.get(0)?.end();
        Some(Captured::new(values, &path[end..]))
    }
}

fn group_name(index: usize) -> String {
    format!("__var{}", index)
}
