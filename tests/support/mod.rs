// tests/support/mod.rs
// The mocks and builders modules are shared by multiple integration test
// binaries. Some symbols are purposely unused in individual test crates,
// which causes dead_code / unused_imports warnings. Allow those warnings
// at the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;

use once_cell::sync::Lazy;

#[allow(dead_code)]
static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

/// Idempotent; every test binary that wants log output calls this first.
#[allow(dead_code)]
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
