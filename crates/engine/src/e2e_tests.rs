//! End-to-end tests driving the composed application.

use std::sync::Arc;

use tokio::sync::broadcast::error::TryRecvError;

use cardfolio_domain::{
    AccountId, CardDraft, CardEvent, CardId, ImageReference, RegistryError, TokenAmount,
};

use crate::application::services::{CardService, CardServiceError};
use crate::infrastructure::EngineConfig;
use crate::test_fixtures::payment_mocks::RecordingPaymentPort;
use crate::App;

fn draft(name: &str) -> CardDraft {
    CardDraft {
        name: name.to_string(),
        title: "Compiler Engineer".to_string(),
        image_reference: ImageReference::new("https://images.example.com/ada.png"),
        years_of_experience: 9,
        technologies: "Rust, LLVM".to_string(),
        portfolio: "https://ada.example.com".to_string(),
        contact: "ada@example.com".to_string(),
    }
}

fn app() -> (App, Arc<RecordingPaymentPort>, AccountId) {
    let registry_owner = AccountId::new();
    let payments = Arc::new(RecordingPaymentPort::new());
    let app = App::new(&EngineConfig::default(), registry_owner, payments.clone());
    (app, payments, registry_owner)
}

#[tokio::test]
async fn card_lifecycle_end_to_end() {
    let (app, payments, registry_owner) = app();
    let fee = TokenAmount::new(1);
    let u1 = AccountId::new();
    let u2 = AccountId::new();

    // U1 pays the exact fee and gets card 1.
    let id = app.cards.create_card(draft("Ada"), fee, u1).await.unwrap();
    assert_eq!(id, CardId::from_u64(1));
    assert!(app.cards.get_card(id).await.unwrap().open_to_work);

    // The fee went to the registry owner, once.
    let settlements = payments.settlements();
    assert_eq!(settlements.len(), 1);
    assert_eq!(settlements[0].payer, u1);
    assert_eq!(settlements[0].payee, registry_owner);
    assert_eq!(settlements[0].amount, fee);

    // U2 cannot close Ada's card.
    let err = app.cards.deactivate(id, u2).await.unwrap_err();
    assert!(matches!(
        err,
        CardServiceError::Registry(RegistryError::NotOwner { .. })
    ));
    assert!(app.cards.get_card(id).await.unwrap().open_to_work);

    // U1 closes it; doing so twice stays a success.
    app.cards.deactivate(id, u1).await.unwrap();
    assert!(!app.cards.get_card(id).await.unwrap().open_to_work);
    app.cards.deactivate(id, u1).await.unwrap();
    assert!(!app.cards.get_card(id).await.unwrap().open_to_work);
}

#[tokio::test]
async fn notification_stream_matches_committed_changes() {
    let (app, _payments, _) = app();
    let fee = TokenAmount::new(1);
    let u1 = AccountId::new();
    let mut notifications = app.subscribe();

    let id = app.cards.create_card(draft("Ada"), fee, u1).await.unwrap();
    app.cards
        .update_description(id, "Writes compilers".to_string(), u1)
        .await
        .unwrap();
    app.cards.deactivate(id, u1).await.unwrap();
    app.cards
        .update_portfolio(id, "https://ada.dev".to_string(), u1)
        .await
        .unwrap();

    // A rejected creation must not show up in the stream.
    let _ = app
        .cards
        .create_card(draft("Eve"), TokenAmount::new(9), u1)
        .await;

    let received = [
        notifications.recv().await.unwrap(),
        notifications.recv().await.unwrap(),
        notifications.recv().await.unwrap(),
    ];
    let types: Vec<&str> = received.iter().map(|n| n.event.event_type()).collect();
    // Deactivation is silent, so three events cover four mutations.
    assert_eq!(
        types,
        vec!["card_created", "description_updated", "portfolio_updated"]
    );
    assert!(matches!(
        notifications.try_recv(),
        Err(TryRecvError::Empty)
    ));
}

#[tokio::test]
async fn notification_wire_format_is_stable() {
    let (app, _payments, _) = app();
    let u1 = AccountId::new();
    let mut notifications = app.subscribe();

    let id = app
        .cards
        .create_card(draft("Ada"), TokenAmount::new(1), u1)
        .await
        .unwrap();

    let notification = notifications.recv().await.unwrap();
    let json = serde_json::to_string(&notification).unwrap();
    assert!(json.contains("occurredAt"));
    assert!(json.contains("cardCreated"));
    assert!(matches!(
        notification.event,
        CardEvent::CardCreated { id: event_id, .. } if event_id == id
    ));
}
