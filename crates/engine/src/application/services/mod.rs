//! Application services - Use case implementations
//!
//! Each service accepts its outbound port dependencies at construction
//! and exposes the use cases as an object-safe trait, so hosts depend on
//! the interface rather than the wiring.

pub mod card_service;

pub use card_service::{CardService, CardServiceError, CardServiceImpl};
