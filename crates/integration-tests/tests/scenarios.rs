//! End-to-end walk through the Emma story on a small pool.

use integration_tests::engine_with;
use sm_core::models::NotificationKind;
use sm_core::{EngineConfig, MatchOutcome, PolicyViolation, Store};
use sm_store_memory::seed::{self, EMMA, MICHAEL, SOPHIA};

fn emma_michael_sophia() -> Vec<sm_core::User> {
    seed::demo_users(2)
        .into_iter()
        .filter(|u| [EMMA, MICHAEL, SOPHIA].contains(&u.id))
        .collect()
}

#[tokio::test]
async fn emma_finds_her_one_eligible_match() {
    let (store, engine) = engine_with(emma_michael_sophia(), EngineConfig::default());

    let outcome = engine.request_matches(EMMA).await.unwrap();
    let MatchOutcome::Created(matches) = outcome else {
        panic!("expected new matches, got {outcome:?}");
    };
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].matched_user_id, MICHAEL);

    assert_eq!(store.find_user(EMMA).await.unwrap().unwrap().matches_remaining, 1);

    let notes = engine.get_user_notifications(MICHAEL).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Match);
    assert_eq!(notes[0].related_user_id, EMMA);
    assert_eq!(notes[0].content, "You've been selected as a potential match!");
}

#[tokio::test]
async fn michael_waits_for_emma_to_write_first() {
    let (store, engine) = engine_with(emma_michael_sophia(), EngineConfig::default());
    engine.generate_matches(EMMA).await.unwrap();

    let err = engine.send_message(MICHAEL, EMMA, "Hi Emma!").await.unwrap_err();
    assert_eq!(err.policy(), Some(PolicyViolation::FirstContactNotPermitted));
    assert_eq!(
        err.policy().unwrap().description(),
        "Males cannot initiate contact. Wait for the other person to message you first."
    );

    engine.send_message(EMMA, MICHAEL, "hi").await.unwrap();
    let reply = engine.send_message(MICHAEL, EMMA, "Hi Emma!").await.unwrap();
    assert_eq!(reply.sender_id, MICHAEL);

    let conversation = engine.get_conversation(EMMA, MICHAEL).await.unwrap();
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[0].content, "hi");
    assert!(conversation[0].timestamp <= conversation[1].timestamp);

    let emma_match = &store.list_matches_for(EMMA).await.unwrap()[0];
    assert!(emma_match.contacted);

    let emma_notes = engine.get_user_notifications(EMMA).await.unwrap();
    assert_eq!(emma_notes.len(), 1);
    assert_eq!(emma_notes[0].content, "New message from Michael Davis");
}
