// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::diagram::Diagram;

/// Identifier of any entity inside a [`Diagram`].
///
/// All seven entity collections (nodes, edges, participants, messages, pie slices, gantt tasks,
/// journey steps) draw from one namespace, so an `EntityId` is unique across the whole diagram and
/// not just within its own collection. `0` is never handed out and is treated as "missing".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub const MISSING: Self = Self(0);
    /// Largest id accepted from JSON or text: `2^53 - 1`, the largest integer a JSON number holds
    /// exactly. Ids above it read as missing, which keeps the counter from running out.
    pub const MAX: Self = Self((1 << 53) - 1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_missing(self) -> bool {
        self.0 == 0
    }

    /// `1..=MAX`.
    pub const fn is_in_range(self) -> bool {
        self.0 >= 1 && self.0 <= Self::MAX.0
    }

    pub(crate) const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for EntityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Largest id currently present in any of the seven entity collections (`0` when empty).
pub fn max_entity_id(diagram: &Diagram) -> EntityId {
    diagram.entity_ids().max().unwrap_or(EntityId::MISSING)
}

/// Computes the allocator counter for `diagram`.
///
/// Returns `max(stored counter, max observed id + 1)`. External edits can introduce ids larger than
/// the stored counter, so this is re-derived after every normalize/parse.
pub fn next_id(diagram: &Diagram) -> EntityId {
    let observed = max_entity_id(diagram).successor();
    let stored = diagram.next_id();
    let next = stored.max(observed);
    if next.is_missing() {
        EntityId::new(1)
    } else {
        next
    }
}
