use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::{
    cond::{CondFlags, HttpMethod},
    error::RouteError,
    route::Route,
};

pub use matched::Match;

mod matched;

/// Ordered table of routes under a base path.
///
/// Routes are tried in the order they were added and the first one that
/// accepts a request wins, even when a later route would match it more
/// specifically. Registration order is the only precedence rule, so
/// register narrow rules before broad ones:
///
/// ```text
/// /a/{y:[0-9]+}   tried first, takes /a/7
/// /a/{x}          takes everything else under /a/
/// ```
///
/// Adding routes needs `&mut self`; matching needs only `&self` and keeps
/// all per-request state in the returned [`Match`], so a fully built table
/// can be shared between threads without locking.
#[derive(Debug)]
pub struct Router<H> {
    base_path: String,
    routes: Vec<Route<H>>,
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            base_path: String::new(),
            routes: vec![],
        }
    }

    pub fn with_base_path(base_path: &str) -> Self {
        let mut router = Self::new();
        router.set_base_path(base_path);
        router
    }

    /// Scopes every route under `base_path`.
    ///
    /// `"/"` is the same as no base path. Otherwise the value is made to
    /// start with `/` and trailing `/` characters are dropped.
    pub fn set_base_path(&mut self, base_path: &str) {
        self.base_path = normalize_base_path(base_path);
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Compiles `rule` and appends it. On error the table is unchanged.
    pub fn add(&mut self, rule: &str, handler: H) -> Result<&Route<H>, RouteError> {
        let route = match Route::parse(rule, handler) {
            Ok(route) => route,
            Err(err) => {
                warn!(rule, %err, "route rejected");
                return Err(err);
            }
        };
        debug!(%route, regex = ?route.regex().map(|re| re.as_str()), "route added");

        let idx = self.routes.len();
        self.routes.push(route);
        Ok(&self.routes[idx])
    }

    /// Finds the first route accepting `conditions` and `path`.
    ///
    /// `path` is the full request path; it must lie under the base path.
    /// `Ok(None)` means no route matched.
    pub fn pattern_match<'r, 'p>(
        &'r self,
        conditions: CondFlags,
        path: &'p str,
    ) -> Result<Option<Match<'r, 'p, H>>, RouteError> {
        let path = self.strip_base_path(path)?;

        for route in &self.routes {
            if let Some(captured) = route.pattern_match(conditions, path) {
                trace!(%route, path, "match");
                return Ok(Some(Match::new(route, path, captured)));
            }
        }

        trace!(%conditions, path, "no match");
        Ok(None)
    }

    /// Like [`Router::pattern_match`] but takes the request method as sent.
    ///
    /// A method outside the known set only reaches unrestricted routes.
    pub fn match_method<'r, 'p>(
        &'r self,
        method: &str,
        path: &'p str,
    ) -> Result<Option<Match<'r, 'p, H>>, RouteError> {
        let conditions = HttpMethod::from_str(method)
            .map(CondFlags::from)
            .unwrap_or_default();
        self.pattern_match(conditions, path)
    }

    /// Methods for which some route accepts `path`, in canonical order.
    ///
    /// Empty when no route matches the path at all; useful for telling a
    /// "405 Method Not Allowed" apart from a "404 Not Found".
    pub fn allowed_methods(&self, path: &str) -> Result<Vec<HttpMethod>, RouteError> {
        let path = self.strip_base_path(path)?;

        let mut allowed = CondFlags::ANY;
        for route in &self.routes {
            if route.pattern_match(CondFlags::ALL, path).is_none() {
                continue;
            }
            if route.conditions().is_any() {
                allowed = CondFlags::ALL;
                break;
            }
            allowed |= route.conditions();
        }
        Ok(allowed.methods().collect())
    }

    fn strip_base_path<'p>(&self, path: &'p str) -> Result<&'p str, RouteError> {
        if self.base_path.is_empty() {
            return Ok(path);
        }
        path.strip_prefix(self.base_path.as_str())
            .ok_or_else(|| RouteError::OutsideBasePath {
                path: path.to_owned(),
                base_path: self.base_path.clone(),
            })
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{}", trimmed)
    }
}
