//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid request fixtures
//! - An in-memory payment provider that records calls and echoes input
//! - An in-process HTTP server standing in for the Stripe API
//! - A builder for `AppState` wired to test dependencies

mod app_state_builder;
mod payment_mocks;
mod stripe_echo;

pub use app_state_builder::*;
pub use factories::*;
pub use payment_mocks::*;
pub use stripe_echo::*;
