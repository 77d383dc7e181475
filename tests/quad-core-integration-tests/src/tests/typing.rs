// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Duration as ChronoDuration;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use quad_core_client::dtos::{ComposeState, ComposingUser, RemoteEvent};

use super::async_test;
use super::helpers::{fixtures, TestEnvBuilder};

fn record_pings(builder: &mut TestEnvBuilder) -> Arc<Mutex<Vec<bool>>> {
    let pings = Arc::new(Mutex::new(Vec::new()));
    let log = pings.clone();
    builder
        .messaging
        .expect_set_user_is_composing()
        .returning(move |_, is_composing| {
            log.lock().push(is_composing);
            Ok(())
        });
    pings
}

fn composing_event(user_id: &str, user_name: &str, state: ComposeState) -> RemoteEvent {
    RemoteEvent::ComposeStateChanged {
        room_id: "r1".into(),
        user_id: user_id.into(),
        user_name: user_name.to_string(),
        state,
    }
}

#[tokio::test(start_paused = true)]
async fn test_typing_ping_auto_stops_after_timeout() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);
    let pings = record_pings(&mut builder);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.client.chat.set_user_is_composing(true).await;
    tokio::time::sleep(Duration::from_secs(4)).await;

    assert_eq!(*pings.lock(), vec![true, false]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_repeated_pings_defer_the_auto_stop() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);
    let pings = record_pings(&mut builder);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.client.chat.set_user_is_composing(true).await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    env.client.chat.set_user_is_composing(true).await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    // Only the second ping's timer is still valid; the first one was superseded.
    assert_eq!(*pings.lock(), vec![true, true]);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(*pings.lock(), vec![true, true, false]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_leaving_the_room_suppresses_the_auto_stop() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);
    let pings = record_pings(&mut builder);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.client.chat.set_user_is_composing(true).await;
    env.client.chat.select_room(None).await?;
    tokio::time::sleep(Duration::from_secs(4)).await;

    assert_eq!(
        *pings.lock(),
        vec![true],
        "no stale stop ping after the room was left"
    );
    Ok(())
}

#[async_test]
async fn test_inbound_typing_expires_without_a_refresh() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.apply(composing_event("ana", "Ana Petrov", ComposeState::Composing))
        .await;
    assert_eq!(
        env.snapshot().typing_users,
        vec![ComposingUser {
            id: "ana".into(),
            name: "Ana Petrov".to_string()
        }]
    );

    env.time_provider.advance(ChronoDuration::milliseconds(2900));
    assert_eq!(env.snapshot().typing_users.len(), 1, "still within the TTL");

    env.time_provider.advance(ChronoDuration::milliseconds(200));
    assert!(env.snapshot().typing_users.is_empty(), "expired");

    // A refresh brings the user back.
    env.apply(composing_event("ana", "Ana Petrov", ComposeState::Composing))
        .await;
    assert_eq!(env.snapshot().typing_users.len(), 1);
    Ok(())
}

#[async_test]
async fn test_explicit_stop_clears_typing_state() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.apply(composing_event("ana", "Ana Petrov", ComposeState::Composing))
        .await;
    env.apply(composing_event("ana", "Ana Petrov", ComposeState::Idle))
        .await;

    assert!(env.snapshot().typing_users.is_empty());
    Ok(())
}

#[async_test]
async fn test_own_typing_ping_is_not_shown() -> Result<()> {
    let mut builder = TestEnvBuilder::new();
    builder.expect_room_selection("r1", vec![]);

    let env = builder.start(vec![fixtures::group_room("r1", "Climbing")]).await?;
    env.client.chat.select_room(Some("r1".into())).await?;

    env.apply(composing_event("me", "Mel River", ComposeState::Composing))
        .await;

    assert!(env.snapshot().typing_users.is_empty());
    Ok(())
}
