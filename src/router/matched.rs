use std::collections::HashMap;

use crate::route::{matcher::Captured, Route};

/// A route that accepted a request, with the values it captured.
///
/// Borrows both the route table and the request path, so it lives no longer
/// than the request it was produced for.
#[derive(Debug)]
pub struct Match<'r, 'p, H> {
    route: &'r Route<H>,
    path: &'p str,
    values: Vec<&'p str>,
    tail: &'p str,
}

impl<'r, 'p, H> Match<'r, 'p, H> {
    pub(crate) fn new(route: &'r Route<H>, path: &'p str, captured: Captured<'p>) -> Self {
        Self {
            route,
            path,
            values: captured.values,
            tail: captured.tail,
        }
    }

    pub fn route(&self) -> &'r Route<H> {
        self.route
    }

    pub fn handler(&self) -> &'r H {
        self.route.handler()
    }

    /// The request path relative to the router's base path.
    pub fn path(&self) -> &'p str {
        self.path
    }

    /// Part of the path below a subtree route's match; empty otherwise.
    pub fn tail(&self) -> &'p str {
        self.tail
    }

    /// All captured values in declaration order, anonymous ones included.
    pub fn values(&self) -> &[&'p str] {
        &self.values
    }

    /// Named captured values.
    pub fn vars(&self) -> HashMap<&'r str, &'p str> {
        self.route
            .var_names()
            .filter_map(|(name, index)| self.values.get(index).map(|value| (name, *value)))
            .collect()
    }

    /// Value of the variable `name`, or `""` if the route has no such variable.
    pub fn var(&self, name: &str) -> &'p str {
        self.var_or(name, "")
    }

    pub fn var_or<'a>(&self, name: &str, fallback: &'a str) -> &'a str
    where
        'p: 'a,
    {
        self.route
            .var_index(name)
            .and_then(|index| self.values.get(index).copied())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use crate::{cond::CondFlags, route::Route};

    #[test]
    fn test_match_accessors() {
        let route = Route::parse("/user/{id:[0-9]+}/{_}/{action}", "handler").unwrap();
        let captured = route
            .pattern_match(CondFlags::ANY, "/user/42/x/edit")
            .unwrap();
        let m = super::Match::new(&route, "/user/42/x/edit", captured);

        assert_eq!(*m.handler(), "handler");
        assert_eq!(m.path(), "/user/42/x/edit");
        assert_eq!(m.tail(), "");
        assert_eq!(m.values(), &["42", "x", "edit"]);

        let vars = m.vars();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["id"], "42");
        assert_eq!(vars["action"], "edit");

        assert_eq!(m.var("id"), "42");
        assert_eq!(m.var("action"), "edit");
        assert_eq!(m.var("_"), "");
        assert_eq!(m.var("unknown"), "");
        assert_eq!(m.var_or("unknown", "none"), "none");
        assert_eq!(m.var_or("id", "none"), "42");
    }

    #[test]
    fn test_match_without_vars() {
        let route = Route::parse("/static/", ()).unwrap();
        let captured = route
            .pattern_match(CondFlags::ANY, "/static/css/site.css")
            .unwrap();
        let m = super::Match::new(&route, "/static/css/site.css", captured);

        assert!(m.values().is_empty());
        assert!(m.vars().is_empty());
        assert_eq!(m.var("anything"), "");
        assert_eq!(m.var_or("anything", "fallback"), "fallback");
        assert_eq!(m.tail(), "css/site.css");
    }
}
