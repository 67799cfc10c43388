//! Mock server infrastructure for testing
//!
//! This module provides a shared mockito server for parallel test
//! execution. Using a single shared server eliminates port churn and
//! enables true parallel testing, provided each test mocks a unique
//! path.

use lazy_static::lazy_static;
use mockito::{Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global shared mockito server for all tests
    ///
    /// Initialized once and shared across all test threads.
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Get reference to shared mock server
///
/// # Thread Safety
///
/// The server is protected by a Mutex to ensure thread-safe access when
/// creating/removing mocks. Acquire the lock only during mock setup,
/// not for the whole test, and give every test a unique request path so
/// parallel tests never collide. Mocks are removed automatically when
/// the Mock object drops.
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    SHARED_MOCK_SERVER.lock().unwrap_or_else(|poisoned| {
        // The server stays functional after a panicking test; we are
        // only serializing access here.
        poisoned.into_inner()
    })
}
