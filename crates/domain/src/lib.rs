extern crate self as cardfolio_domain;

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

// Re-export the aggregate roots
pub use aggregates::{Card, CardDraft, Registry};

pub use error::RegistryError;
pub use events::{AvailabilityChange, CardEvent, DescriptionUpdate, Notification, PortfolioUpdate};

// Re-export ID types
pub use ids::{AccountId, CardId};

// Re-export value objects
pub use value_objects::{ImageReference, TokenAmount};
