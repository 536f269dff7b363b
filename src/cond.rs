use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{error::RouteError, route::parser};

/// HTTP methods a route can be restricted to.
///
/// Declaration order is the canonical order used for both bit positions and
/// rendering.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get = 0,
    Connect = 1,
    Delete = 2,
    Head = 3,
    Options = 4,
    Patch = 5,
    Post = 6,
    Put = 7,
    Trace = 8,
}

impl HttpMethod {
    pub fn flag(self) -> CondFlags {
        CondFlags(1 << self as u32)
    }
}

/// Set of HTTP methods encoded as bits. The empty set means "unrestricted".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CondFlags(u32);

impl CondFlags {
    pub const ANY: CondFlags = CondFlags(0);
    pub const ALL: CondFlags = CondFlags((1 << 9) - 1);

    /// Parses method tokens into a bitset.
    ///
    /// An empty list and the single token `"*"` both yield [`CondFlags::ANY`].
    /// Tokens are case-sensitive.
    pub fn parse<I, S>(tokens: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        if tokens.len() == 1 && tokens[0].as_ref() == "*" {
            return Ok(Self::ANY);
        }

        let mut flags = Self::ANY;
        for token in &tokens {
            let token = token.as_ref();
            let method = HttpMethod::from_str(token)
                .map_err(|_| RouteError::InvalidCondition(token.to_owned()))?;
            flags |= method.flag();
        }
        Ok(flags)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_any(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, method: HttpMethod) -> bool {
        self.0 & method.flag().0 != 0
    }

    pub fn intersects(self, other: CondFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// Reports whether a route restricted to `self` accepts a request
    /// carrying `request`.
    pub fn admits(self, request: CondFlags) -> bool {
        self.is_any() || self.intersects(request)
    }

    /// Set methods in canonical order.
    pub fn methods(self) -> impl Iterator<Item = HttpMethod> {
        HttpMethod::iter().filter(move |m| self.contains(*m))
    }
}

impl From<HttpMethod> for CondFlags {
    fn from(method: HttpMethod) -> Self {
        method.flag()
    }
}

impl BitOr for HttpMethod {
    type Output = CondFlags;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.flag() | rhs.flag()
    }
}

impl BitOr for CondFlags {
    type Output = CondFlags;
    fn bitor(self, rhs: Self) -> Self::Output {
        CondFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for CondFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CondFlags {
    type Output = CondFlags;
    fn bitand(self, rhs: Self) -> Self::Output {
        CondFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for CondFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("*");
        }
        let rendered = self
            .methods()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("|");
        f.write_str(&rendered)
    }
}

impl FromStr for CondFlags {
    type Err = RouteError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(parser::split_conditions(s))
    }
}
