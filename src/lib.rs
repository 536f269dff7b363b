//! Method and path routing.
//!
//! A [`Router`] holds compiled [`Route`]s in registration order and hands
//! back a [`Match`] with the captured path variables for the first route
//! that accepts a request.

pub use cond::{CondFlags, HttpMethod};
pub use error::RouteError;
pub use route::Route;
pub use router::{Match, Router};

pub mod cli;
mod cond;
mod error;
mod route;
mod router;
#[cfg(test)]
mod test_utils;
