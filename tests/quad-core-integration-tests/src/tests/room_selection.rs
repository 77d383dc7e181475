// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use quad_core_client::dtos::{ChatError, MessageId, RemoteEvent, RoomId};
use quad_core_client::test::RoomBuilder;

use super::async_test;
use super::helpers::{fixtures, TestEnvBuilder};

#[async_test]
async fn test_select_room_loads_page_in_display_order() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    // The backend serves pages newest first.
    builder.expect_room_selection(
        "r1",
        vec![
            fixtures::inbound_message(2, "r1"),
            fixtures::inbound_message(1, "r1"),
        ],
    );

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    let snapshot = env.snapshot();
    assert_eq!(
        snapshot.current_room.as_ref().map(|room| room.id.clone()),
        Some(RoomId::from("r1"))
    );
    let ids = snapshot
        .messages
        .iter()
        .map(|m| m.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![MessageId::from("msg-1"), MessageId::from("msg-2")],
        "the window shows oldest first"
    );
    assert!(!snapshot.is_loading);
    Ok(())
}

#[async_test]
async fn test_switching_rooms_cancels_previous_subscriptions() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    let r1_cancellations = builder.expect_room_selection("r1", vec![]);
    let r2_cancellations = builder.expect_room_selection("r2", vec![]);

    let env = builder
        .start(vec![
            fixtures::group_room("r1", "Climbing"),
            fixtures::group_room("r2", "Chess"),
        ])
        .await?;

    env.client.chat.select_room(Some("r1".into())).await?;
    assert!(r1_cancellations.lock().is_empty());

    env.client.chat.select_room(Some("r2".into())).await?;

    let mut cancelled = r1_cancellations.lock().clone();
    cancelled.sort();
    assert_eq!(cancelled, vec!["messages:r1", "updates:r1"]);
    assert!(
        r2_cancellations.lock().is_empty(),
        "the new room's subscriptions stay live"
    );
    assert_eq!(
        env.snapshot().current_room.map(|room| room.id),
        Some(RoomId::from("r2"))
    );
    Ok(())
}

#[async_test]
async fn test_select_none_clears_window_and_subscriptions() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    let cancellations =
        builder.expect_room_selection("r1", vec![fixtures::inbound_message(1, "r1")]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;
    assert_eq!(env.snapshot().messages.len(), 1);

    env.client.chat.select_room(None).await?;

    let snapshot = env.snapshot();
    assert_eq!(snapshot.current_room, None);
    assert!(snapshot.messages.is_empty());
    assert!(snapshot.typing_users.is_empty());
    assert_eq!(cancellations.lock().len(), 2);
    Ok(())
}

#[async_test]
async fn test_page_load_keeps_messages_delivered_meanwhile() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![fixtures::inbound_message(1, "r1")]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;

    // A message arrives over the subscription before the page response lands in the window.
    env.apply(RemoteEvent::MessageAppended {
        message: fixtures::inbound_message(5, "r1"),
    })
    .await;

    env.client.chat.select_room(Some("r1".into())).await?;

    let ids = env
        .snapshot()
        .messages
        .iter()
        .map(|m| m.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![MessageId::from("msg-1"), MessageId::from("msg-5")],
        "the page merges into the window instead of replacing it"
    );
    Ok(())
}

#[async_test]
async fn test_select_unknown_room_fails() -> Result<()> {
    let env = TestEnvBuilder::new()
        .start(vec![fixtures::group_room("r1", "Climbing")])
        .await?;

    let result = env.client.chat.select_room(Some("nope".into())).await;

    assert_eq!(result, Err(ChatError::RoomNotFound("nope".into())));
    Ok(())
}

#[async_test]
async fn test_selecting_a_room_resets_its_unread_count() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);

    let room = RoomBuilder::group("r1", "Climbing")
        .add_member("me", "Mel River", quad_core_client::dtos::MemberRole::Owner)
        .set_unread_count(3)
        .build();

    let env = builder.start(vec![room]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    let snapshot = env.snapshot();
    assert_eq!(snapshot.current_room.map(|room| room.unread_count), Some(0));
    Ok(())
}
