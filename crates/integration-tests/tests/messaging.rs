use chrono::Duration;
use integration_tests::{demo_engine, engine_with, epoch, person};
use sm_core::models::{Gender, Message, NotificationKind};
use sm_core::{AppError, EngineConfig, PolicyViolation, Store};
use sm_store_memory::seed::{EMMA, JAMES, MICHAEL, OLIVIA, SOPHIA};
use uuid::Uuid;

#[tokio::test]
async fn male_first_contact_fails_without_side_effects() {
    let (store, engine) = demo_engine();
    engine.generate_matches(EMMA).await.unwrap();

    let err = engine.send_message(MICHAEL, EMMA, "hey").await.unwrap_err();
    assert_eq!(err.policy(), Some(PolicyViolation::FirstContactNotPermitted));

    assert!(engine.get_conversation(EMMA, MICHAEL).await.unwrap().is_empty());
    assert!(engine.get_user_notifications(EMMA).await.unwrap().is_empty());
    let pair = store.list_matches_between(EMMA, MICHAEL).await.unwrap();
    assert!(pair.iter().all(|m| !m.contacted));
}

#[tokio::test]
async fn female_first_contact_succeeds() {
    let (_store, engine) = demo_engine();
    let message = engine.send_message(SOPHIA, JAMES, "hey").await.unwrap();
    assert_eq!(message.sender_id, SOPHIA);
    assert_eq!(message.receiver_id, JAMES);
    assert!(!message.read);

    let notes = engine.get_user_notifications(JAMES).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Message { first_contact: true });
    assert_eq!(notes[0].content, "Sophia Martinez sent you a first message!");
}

#[tokio::test]
async fn replies_use_the_regular_notification_text() {
    let (_store, engine) = demo_engine();
    engine.send_message(OLIVIA, MICHAEL, "hello").await.unwrap();
    engine.send_message(MICHAEL, OLIVIA, "hi back").await.unwrap();

    let notes = engine.get_user_notifications(OLIVIA).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Message { first_contact: false });
    assert_eq!(notes[0].content, "New message from Michael Davis");
    assert_eq!(notes[0].related_user_id, MICHAEL);
}

#[tokio::test]
async fn messaging_a_match_marks_it_contacted_and_unblocks_generation() {
    let (store, engine) = demo_engine();
    let matches = engine.generate_matches(EMMA).await.unwrap();
    let james = matches.iter().find(|m| m.matched_user_id == JAMES).unwrap().clone();

    engine.send_message(EMMA, JAMES, "hi James").await.unwrap();
    let stored = store.find_match(james.id).await.unwrap().unwrap();
    assert!(stored.contacted);

    assert!(engine.delete_match(james.id).await.unwrap());
    assert!(!engine.delete_match(james.id).await.unwrap());

    for m in matches.iter().filter(|m| m.id != james.id) {
        engine.delete_match(m.id).await.unwrap();
    }
    // nothing pending any more: the request is judged on the candidate pool
    assert!(engine.request_matches(EMMA).await.unwrap().policy().is_none());
}

#[tokio::test]
async fn reply_marks_matches_in_both_directions() {
    let (store, engine) = demo_engine();
    engine.generate_matches(EMMA).await.unwrap();
    engine.generate_matches(MICHAEL).await.unwrap();
    assert_eq!(store.list_matches_between(EMMA, MICHAEL).await.unwrap().len(), 2);

    engine.send_message(EMMA, MICHAEL, "hi").await.unwrap();
    let pair = store.list_matches_between(EMMA, MICHAEL).await.unwrap();
    assert!(pair.iter().all(|m| m.contacted));
}

#[tokio::test]
async fn unknown_participants_are_not_found_not_blocked() {
    let (_store, engine) = demo_engine();
    let ghost = Uuid::now_v7();

    let err = engine.send_message(ghost, EMMA, "hi").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("user", _)));
    assert_eq!(err.policy(), None);

    let err = engine.send_message(MICHAEL, ghost, "hi").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn blank_and_self_messages_are_validation_errors() {
    let (_store, engine) = demo_engine();
    assert!(matches!(
        engine.send_message(EMMA, JAMES, "  ").await,
        Err(AppError::ValidationError(_))
    ));
    assert!(matches!(
        engine.send_message(EMMA, EMMA, "note to self").await,
        Err(AppError::ValidationError(_))
    ));
}

#[tokio::test]
async fn unmatched_contact_is_allowed_unless_configured_otherwise() {
    let (_store, engine) = demo_engine();
    assert!(engine.send_message(EMMA, OLIVIA, "hi").await.is_ok());

    let config = EngineConfig {
        require_match_for_contact: true,
        ..EngineConfig::default()
    };
    let (_store, strict) = engine_with(sm_store_memory::seed::demo_users(2), config);
    let err = strict.send_message(EMMA, OLIVIA, "hi").await.unwrap_err();
    assert_eq!(err.policy(), Some(PolicyViolation::ContactRequiresMatch));

    strict.generate_matches(EMMA).await.unwrap();
    assert!(strict.send_message(EMMA, JAMES, "hi").await.is_ok());
}

#[tokio::test]
async fn conversation_is_sorted_by_timestamp_whatever_the_insertion_order() {
    let ann = person("Ann", 30, Gender::Female);
    let ben = person("Ben", 31, Gender::Male);
    let (a, b) = (ann.id, ben.id);
    let (store, engine) = engine_with(vec![ann, ben], EngineConfig::default());

    let at = |secs| epoch() + Duration::seconds(secs);
    for (from, to, text, secs) in [
        (a, b, "third", 30),
        (b, a, "first", 10),
        (a, b, "tie-1", 20),
        (b, a, "tie-2", 20),
    ] {
        store
            .insert_message(Message::new(from, to, text.into(), at(secs)))
            .await
            .unwrap();
    }

    let texts: Vec<String> = engine
        .get_conversation(b, a)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.content)
        .collect();
    assert_eq!(texts, vec!["first", "tie-1", "tie-2", "third"]);
}

#[tokio::test]
async fn mark_notification_as_read_is_idempotent() {
    let (_store, engine) = demo_engine();
    engine.send_message(EMMA, JAMES, "hi").await.unwrap();
    let note = engine.get_user_notifications(JAMES).await.unwrap().remove(0);

    assert!(engine.mark_notification_as_read(note.id).await.unwrap());
    assert!(engine.mark_notification_as_read(note.id).await.unwrap());
    assert!(engine.get_user_notifications(JAMES).await.unwrap()[0].read);
    assert!(!engine.mark_notification_as_read(Uuid::now_v7()).await.unwrap());
}
