// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::model::{Diagram, DiagramKind, EntityId};

/// Id allocation for one parse call.
///
/// The running counter starts at the base diagram's counter. Ids owned by the kinds that are not
/// being parsed are reserved and never handed out again.
pub(super) struct IdScope {
    next: EntityId,
    reserved: HashSet<EntityId>,
    claimed: HashSet<EntityId>,
}

impl IdScope {
    pub(super) fn new(base: &Diagram, parsed: DiagramKind) -> Self {
        Self {
            next: crate::model::next_id(base),
            reserved: base.entity_ids_except(Some(parsed)).collect(),
            claimed: HashSet::new(),
        }
    }

    pub(super) fn next(&self) -> EntityId {
        self.next
    }

    pub(super) fn fresh(&mut self) -> EntityId {
        let id = self.next;
        self.next = id.successor();
        self.claimed.insert(id);
        id
    }

    /// Honours a literal `<prefix><digits>` token when its id is still free, else allocates.
    fn resolve_literal(&mut self, token: &str, prefix: char) -> EntityId {
        let Some(id) = literal_id(token, prefix) else {
            return self.fresh();
        };
        if id.is_missing() || self.reserved.contains(&id) || !self.claimed.insert(id) {
            debug!(token, id = id.get(); "literal id already taken, allocating a fresh one");
            return self.fresh();
        }
        if id >= self.next {
            self.next = id.successor();
        }
        id
    }
}

fn literal_id(token: &str, prefix: char) -> Option<EntityId> {
    let digits = token.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<EntityId>().ok().filter(|id| id.is_in_range())
}

/// Source token to id mapping, scoped to one parse call.
pub(super) struct Aliases {
    prefix: char,
    ids: HashMap<String, EntityId>,
}

impl Aliases {
    pub(super) fn new(prefix: char) -> Self {
        Self { prefix, ids: HashMap::new() }
    }

    pub(super) fn get(&self, token: &str) -> Option<EntityId> {
        self.ids.get(token).copied()
    }

    /// Resolves `token` to its id, allocating on first sight. The flag is true for a new token.
    pub(super) fn resolve(&mut self, scope: &mut IdScope, token: &str) -> (EntityId, bool) {
        if let Some(id) = self.get(token) {
            return (id, false);
        }
        let id = scope.resolve_literal(token, self.prefix);
        self.ids.insert(token.to_owned(), id);
        (id, true)
    }
}
