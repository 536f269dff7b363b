use tracing::Level;

use crate::router::Router;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .try_init();
}

/// Builds a router whose handlers are the rules' registration positions.
pub fn router_of(rules: &[&str]) -> Router<usize> {
    let mut router = Router::new();
    for (idx, rule) in rules.iter().enumerate() {
        router.add(rule, idx).unwrap();
    }
    router
}
