//! Shared fixtures for integration tests.

use tracing_subscriber::EnvFilter;

/// Keyed sample message with punctuation and spaces.
#[allow(dead_code)]
pub const CTF_MESSAGE: &str =
    "the anwser is wctf{C01umnar},if u is a big new,u can help us think more question,tks.";

/// Classic textbook plaintext.
#[allow(dead_code)]
pub const CLASSIC: &str = "WEAREDISCOVEREDFLEEATONCE";

/// Installs a test subscriber honoring `RUST_LOG`; repeated calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
