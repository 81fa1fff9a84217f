//! Skip helper for tests that need a localhost wiremock server.
//!
//! Sandboxed CI runners sometimes forbid binding sockets. Tests call
//! [`start_mock_server_or_skip`] and return early on `None`; setting
//! `STARR_REQUIRE_SOCKET_TESTS=1` turns the skip into a failure.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

const REQUIRE_ENV: &str = "STARR_REQUIRE_SOCKET_TESTS";

fn sockets_required() -> bool {
    std::env::var(REQUIRE_ENV)
        .is_ok_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

#[track_caller]
fn localhost_unavailable() -> bool {
    if TcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }

    let caller = Location::caller();
    let message = format!(
        "[socket-bound-test] {}:{} cannot bind a localhost socket",
        caller.file(),
        caller.line()
    );
    assert!(!sockets_required(), "{message}; unset {REQUIRE_ENV} to skip instead");

    eprintln!("{message}; skipping (set {REQUIRE_ENV}=1 to fail instead)");
    true
}

pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if localhost_unavailable() {
        None
    } else {
        Some(MockServer::start().await)
    }
}
