// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use quad_core_client::dtos::{MessageId, RemoteEvent, RoomId, UserId};
use quad_core_client::ClientEvent;

use super::async_test;
use super::helpers::{fixtures, TestEnvBuilder};

#[async_test]
async fn test_inbound_message_in_closed_room_increments_unread_and_notifies() -> Result<()> {
    let env = TestEnvBuilder::new()
        .start(vec![fixtures::group_room("r1", "Climbing")])
        .await?;
    env.drain_events();

    env.apply(RemoteEvent::MessageAppended {
        message: fixtures::inbound_message(1, "r1"),
    })
    .await;

    let snapshot = env.snapshot();
    assert_eq!(snapshot.rooms[0].unread_count, 1);

    let events = env.drain_events();
    let notification = events
        .iter()
        .find_map(|event| match event {
            ClientEvent::MessageNotification { notification } => Some(notification),
            _ => None,
        })
        .expect("a notification should have been raised");
    assert_eq!(notification.room_id, RoomId::from("r1"));
    assert_eq!(notification.sender_name, "Ana Petrov");
    assert_eq!(notification.body_preview, "Message 1");
    assert!(events
        .iter()
        .any(|event| matches!(event, ClientEvent::SidebarChanged)));
    Ok(())
}

#[async_test]
async fn test_duplicate_delivery_is_idempotent() -> Result<()> {
    let env = TestEnvBuilder::new()
        .start(vec![fixtures::group_room("r1", "Climbing")])
        .await?;
    env.drain_events();

    let message = fixtures::inbound_message(1, "r1");
    env.apply(RemoteEvent::MessageAppended {
        message: message.clone(),
    })
    .await;
    env.apply(RemoteEvent::MessageAppended { message }).await;

    let snapshot = env.snapshot();
    assert_eq!(snapshot.rooms[0].unread_count, 1, "no double counting");

    let notifications = env
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, ClientEvent::MessageNotification { .. }))
        .count();
    assert_eq!(notifications, 1, "no repeated notification");
    Ok(())
}

#[async_test]
async fn test_own_message_does_not_notify() -> Result<()> {
    let env = TestEnvBuilder::new()
        .start(vec![fixtures::group_room("r1", "Climbing")])
        .await?;
    env.drain_events();

    env.apply(RemoteEvent::MessageAppended {
        message: fixtures::own_message(1, "r1"),
    })
    .await;

    assert_eq!(env.snapshot().rooms[0].unread_count, 0);
    assert!(!env
        .drain_events()
        .iter()
        .any(|event| matches!(event, ClientEvent::MessageNotification { .. })));
    Ok(())
}

#[async_test]
async fn test_message_in_selected_room_is_read_immediately() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;
    env.drain_events();

    env.apply(RemoteEvent::MessageAppended {
        message: fixtures::inbound_message(1, "r1"),
    })
    .await;

    let snapshot = env.snapshot();
    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(snapshot.rooms[0].unread_count, 0);
    assert!(!env
        .drain_events()
        .iter()
        .any(|event| matches!(event, ClientEvent::MessageNotification { .. })));
    Ok(())
}

#[async_test]
async fn test_echo_of_confirmed_message_does_not_duplicate() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);
    builder.messaging.expect_send_message().return_once(|_, request| {
        let mut message = fixtures::own_message(9, "r1");
        message.local_id = Some(request.local_id);
        message.body = request.body;
        Ok(message)
    });

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.client
        .chat
        .send_message(Some("hello".to_string()), vec![], None)
        .await?;

    // The subscription delivers our own message again after the call already confirmed it.
    let mut echo = fixtures::own_message(9, "r1");
    echo.local_id = Some("local-1".into());
    echo.body = Some("hello".to_string());
    env.apply(RemoteEvent::MessageAppended { message: echo }).await;

    let snapshot = env.snapshot();
    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(snapshot.messages[0].id, MessageId::from("msg-9"));
    Ok(())
}

#[async_test]
async fn test_reaction_events_converge_to_set_semantics() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![fixtures::inbound_message(1, "r1")]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    let reaction = |user: &str, added: bool| {
        let (room_id, message_id) = (RoomId::from("r1"), MessageId::from("msg-1"));
        let (user_id, emoji) = (UserId::from(user), "👍".into());
        if added {
            RemoteEvent::ReactionAdded {
                room_id,
                message_id,
                user_id,
                emoji,
            }
        } else {
            RemoteEvent::ReactionRemoved {
                room_id,
                message_id,
                user_id,
                emoji,
            }
        }
    };

    env.apply(reaction("ana", true)).await;
    env.apply(reaction("me", true)).await;
    // Repeated add must not double count.
    env.apply(reaction("me", true)).await;
    env.apply(reaction("ana", false)).await;

    let snapshot = env.snapshot();
    let reactions = &snapshot.messages[0].reactions;
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].count, 1);
    assert_eq!(reactions[0].from, vec![UserId::from("me")]);
    assert!(reactions[0].did_react);

    // Removing the last reactor prunes the entry.
    env.apply(reaction("me", false)).await;
    assert!(env.snapshot().messages[0].reactions.is_empty());
    Ok(())
}

#[async_test]
async fn test_retraction_event_tombstones_message() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![fixtures::inbound_message(1, "r1")]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.apply(RemoteEvent::MessageRetracted {
        room_id: "r1".into(),
        message_id: "msg-1".into(),
    })
    .await;

    let snapshot = env.snapshot();
    assert!(snapshot.messages[0].flags.is_deleted);
    assert_eq!(snapshot.messages[0].body, None);
    Ok(())
}

#[async_test]
async fn test_events_for_unknown_rooms_and_messages_are_dropped() -> Result<()> {
    let env = TestEnvBuilder::new()
        .start(vec![fixtures::group_room("r1", "Climbing")])
        .await?;
    env.drain_events();

    env.apply(RemoteEvent::MessageAppended {
        message: fixtures::inbound_message(1, "r-unknown"),
    })
    .await;
    env.apply(RemoteEvent::MessageRetracted {
        room_id: "r1".into(),
        message_id: "msg-unknown".into(),
    })
    .await;
    env.apply(RemoteEvent::ReactionAdded {
        room_id: "r1".into(),
        message_id: "msg-unknown".into(),
        user_id: "ana".into(),
        emoji: "👍".into(),
    })
    .await;

    assert_eq!(env.snapshot().rooms[0].unread_count, 0);
    assert!(env.drain_events().is_empty());
    Ok(())
}
