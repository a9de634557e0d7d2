//! Card read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cardfolio_domain::{AccountId, Card, CardId, ImageReference};

/// Read-only projection of a card, as handed to any caller.
///
/// Reads are public: there is no access control on lookups, only
/// mutations are owner-gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub owner: AccountId,
    pub name: String,
    pub title: String,
    pub technologies: String,
    pub portfolio: String,
    pub contact: String,
    pub image_reference: ImageReference,
    pub description: Option<String>,
    pub years_of_experience: u8,
    pub open_to_work: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            owner: card.owner(),
            name: card.name().to_string(),
            title: card.title().to_string(),
            technologies: card.technologies().to_string(),
            portfolio: card.portfolio().to_string(),
            contact: card.contact().to_string(),
            image_reference: card.image_reference().clone(),
            description: card.description().map(ToString::to_string),
            years_of_experience: card.years_of_experience(),
            open_to_work: card.open_to_work(),
            created_at: card.created_at(),
            updated_at: card.updated_at(),
        }
    }
}
