// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use url::Url;

use crate::domain::rooms::models::{ComposingUser, Member, MemberRole};
use crate::domain::shared::models::{ComposeState, RoomId, SocietyId, UserId};

/// What kind of conversation a room is. The few call sites that branch on this (display name,
/// avatar) match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomKind {
    /// Exactly two members, unique per unordered member pair. The gateway deduplicates on
    /// creation.
    DirectMessage,
    Group,
    SocietyLinked { society_id: SocietyId },
}

/// The immutable part of a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomInfo {
    pub id: RoomId,
    pub kind: RoomKind,
}

/// The mutable part, only ever written through sync-engine reconciliation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomState {
    /// The stored room name. Direct rooms usually have none; their display name derives from
    /// the other member.
    pub name: Option<String>,
    pub avatar: Option<Url>,
    pub members: Vec<Member>,
    pub last_activity_at: DateTime<Utc>,
    /// The local member's materialized unread counter.
    pub unread_count: u32,
    /// Ephemeral compose state per user. Never persisted.
    pub occupants: HashMap<UserId, Occupant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Occupant {
    pub name: String,
    pub compose_state: ComposeState,
    pub compose_state_updated: DateTime<Utc>,
}

pub struct Room {
    info: RoomInfo,
    state: RwLock<RoomState>,
}

impl Room {
    pub fn new(info: RoomInfo, state: RoomState) -> Self {
        Room {
            info,
            state: RwLock::new(state),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.info.id
    }

    pub fn kind(&self) -> &RoomKind {
        &self.info.kind
    }

    pub fn name(&self) -> Option<String> {
        self.state.read().name.clone()
    }

    pub fn members(&self) -> Vec<Member> {
        self.state.read().members.clone()
    }

    pub fn last_activity_at(&self) -> DateTime<Utc> {
        self.state.read().last_activity_at
    }

    pub fn unread_count(&self) -> u32 {
        self.state.read().unread_count
    }

    /// The name shown in the room list. Direct rooms derive it from the other member.
    pub fn display_name(&self, current_user: &UserId) -> String {
        let state = self.state.read();
        match &self.info.kind {
            RoomKind::DirectMessage => state
                .members
                .iter()
                .find(|member| &member.id != current_user)
                .map(|member| member.name.clone())
                .unwrap_or_else(|| "Unknown user".to_string()),
            RoomKind::Group | RoomKind::SocietyLinked { .. } => state
                .name
                .clone()
                .unwrap_or_else(|| "Untitled room".to_string()),
        }
    }

    /// Direct rooms show the other member's avatar, everything else the room's own.
    pub fn display_avatar(&self, current_user: &UserId) -> Option<Url> {
        let state = self.state.read();
        match &self.info.kind {
            RoomKind::DirectMessage => state
                .members
                .iter()
                .find(|member| &member.id != current_user)
                .and_then(|member| member.avatar.clone()),
            RoomKind::Group | RoomKind::SocietyLinked { .. } => state.avatar.clone(),
        }
    }

    pub fn touch(&self, timestamp: DateTime<Utc>) {
        let mut state = self.state.write();
        if timestamp > state.last_activity_at {
            state.last_activity_at = timestamp;
        }
    }

    pub fn increment_unread_count(&self) {
        self.state.write().unread_count += 1;
    }

    pub fn mark_read(&self, current_user: &UserId, timestamp: DateTime<Utc>) {
        let mut state = self.state.write();
        state.unread_count = 0;
        if let Some(member) = state
            .members
            .iter_mut()
            .find(|member| &member.id == current_user)
        {
            member.last_read_at = Some(timestamp);
        }
    }

    /// Idempotent. Owners keep their role.
    pub fn promote_to_admin(&self, user_id: &UserId) {
        let mut state = self.state.write();
        if let Some(member) = state.members.iter_mut().find(|member| &member.id == user_id) {
            if member.role == MemberRole::Member {
                member.role = MemberRole::Admin;
            }
        }
    }

    pub fn set_name(&self, name: Option<String>) {
        self.state.write().name = name;
    }

    pub fn set_compose_state(
        &self,
        user_id: &UserId,
        user_name: &str,
        timestamp: DateTime<Utc>,
        compose_state: ComposeState,
    ) {
        let mut state = self.state.write();
        let occupant = state
            .occupants
            .entry(user_id.clone())
            .or_insert_with(|| Occupant {
                name: user_name.to_string(),
                compose_state: ComposeState::Idle,
                compose_state_updated: Default::default(),
            });
        occupant.name = user_name.to_string();
        occupant.compose_state = compose_state;
        occupant.compose_state_updated = timestamp;
    }

    /// Returns an owned snapshot of all users whose compose state is `Composing` and was
    /// refreshed after `started_after`. Entries older than that have expired; they are a
    /// liveness signal, not a stored fact.
    pub fn composing_users(&self, started_after: DateTime<Utc>) -> Vec<ComposingUser> {
        let state = self.state.read();
        let mut users = state
            .occupants
            .iter()
            .filter(|(_, occupant)| {
                occupant.compose_state == ComposeState::Composing
                    && occupant.compose_state_updated >= started_after
            })
            .map(|(id, occupant)| ComposingUser {
                id: id.clone(),
                name: occupant.name.clone(),
            })
            .collect::<Vec<_>>();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }
}

impl Debug for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.info.id)
            .field("kind", &self.info.kind)
            .field("name", &self.state.read().name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.info.id == other.info.id
    }
}
