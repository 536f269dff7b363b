use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("invalid route pattern {0:?}; missing leading \"/\" in path")]
    MissingPathSeparator(String),

    #[error("empty route pattern")]
    EmptyPattern,

    #[error("invalid condition {0:?}")]
    InvalidCondition(String),

    #[error("duplicate var {name:?} in route pattern {pattern:?}")]
    DuplicateVariable { name: String, pattern: String },

    #[error("invalid route pattern {pattern:?}")]
    InvalidPatternSyntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("requested path {path:?} outside of base path {base_path:?}")]
    OutsideBasePath { path: String, base_path: String },
}
