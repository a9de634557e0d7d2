//! Cardfolio Engine library.
//!
//! This crate contains everything around the card registry domain:
//!
//! - `application/` - The card service (use cases), its DTOs, and the
//!   outbound ports it requires from external collaborators
//! - `infrastructure/` - In-process adapters (clock, event bus) and
//!   environment configuration
//! - `app` - Application composition
//!
//! Transport front-ends (HTTP, RPC, CLI) are hosts of this crate: they
//! construct an [`App`] once at startup and route calls into it.

pub mod app;
pub mod application;
pub mod infrastructure;

/// Test fixtures module with hand-rolled port fakes.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests driving the composed application.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
