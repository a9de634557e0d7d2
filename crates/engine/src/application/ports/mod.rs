//! Port definitions for the application layer

pub mod outbound;
