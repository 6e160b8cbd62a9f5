// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::EntityId;

pub const DEFAULT_PARTICIPANT_NAME: &str = "Participant";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Sequence {
    participants: Vec<Participant>,
    messages: Vec<Message>,
}

impl Sequence {
    pub fn new(participants: Vec<Participant>, messages: Vec<Message>) -> Self {
        Self { participants, messages }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participants_mut(&mut self) -> &mut Vec<Participant> {
        &mut self.participants
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut Vec<Message> {
        &mut self.messages
    }

    pub fn participant(&self, id: EntityId) -> Option<&Participant> {
        self.participants.iter().find(|participant| participant.id == id)
    }

    pub fn participant_mut(&mut self, id: EntityId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|participant| participant.id == id)
    }

    pub fn message_mut(&mut self, id: EntityId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|message| message.id == id)
    }

    /// Removes a participant and every message that references it. Returns the removed message
    /// ids, or `None` when the participant does not exist.
    pub fn remove_participant(&mut self, id: EntityId) -> Option<Vec<EntityId>> {
        let index = self.participants.iter().position(|participant| participant.id == id)?;
        self.participants.remove(index);

        let removed = self
            .messages
            .iter()
            .filter(|message| message.touches(id))
            .map(|message| message.id)
            .collect::<Vec<_>>();
        self.messages.retain(|message| !message.touches(id));
        Some(removed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Participant {
    pub id: EntityId,
    pub name: String,
}

impl Participant {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Solid,
    Dashed,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub id: EntityId,
    pub from: EntityId,
    pub to: EntityId,
    pub label: String,
    pub line: LineKind,
}

impl Message {
    pub fn new(id: EntityId, from: EntityId, to: EntityId) -> Self {
        Self { id, from, to, label: String::new(), line: LineKind::default() }
    }

    pub fn touches(&self, participant_id: EntityId) -> bool {
        self.from == participant_id || self.to == participant_id
    }
}
