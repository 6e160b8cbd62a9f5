// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::debug;

use super::alias::{Aliases, IdScope};
use super::escape::{escape_text, unescape_text};
use super::lines::{keyword_rest, split_word, strip_quotes, Body};
use crate::model::{EntityId, LineKind, Message, Participant, Sequence};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SequenceLine<'a> {
    Participant { alias: Option<&'a str>, name: String },
    Message { from: &'a str, to: &'a str, line: LineKind, label: &'a str },
}

fn classify(line: &str) -> Option<SequenceLine<'_>> {
    if let Some(rest) = keyword_rest(line, "participant") {
        if rest.is_empty() {
            return None;
        }
        let (alias, after) = split_word(rest);
        if let Some(name) = keyword_rest(after, "as").filter(|name| !name.is_empty()) {
            return Some(SequenceLine::Participant {
                alias: Some(alias),
                name: unescape_text(strip_quotes(name)),
            });
        }
        return Some(SequenceLine::Participant {
            alias: None,
            name: unescape_text(strip_quotes(rest)),
        });
    }
    classify_message(line)
}

/// `<from>->>` / `<from>-->>` (single `>` accepted too) `<to>[: label]`.
fn classify_message(line: &str) -> Option<SequenceLine<'_>> {
    let head = line.find("->")?;
    let (arrow_start, kind) = match line[..head].strip_suffix('-') {
        Some(_) => (head - 1, LineKind::Dashed),
        None => (head, LineKind::Solid),
    };
    let from = line[..arrow_start].trim_end();
    if from.is_empty() || from.contains(char::is_whitespace) {
        return None;
    }

    let after = &line[head + 2..];
    let after = after.strip_prefix('>').unwrap_or(after).trim_start();
    let to_end = after.find(|ch: char| ch.is_whitespace() || ch == ':').unwrap_or(after.len());
    let to = &after[..to_end];
    if to.is_empty() {
        return None;
    }

    let tail = after[to_end..].trim_start();
    let label = match tail.strip_prefix(':') {
        Some(label) => label.trim(),
        None if tail.is_empty() => "",
        None => return None,
    };
    Some(SequenceLine::Message { from, to, line: kind, label })
}

/// Parses sequence body lines (header already removed).
///
/// `participant <alias> as <name>` and `participant <name>` declare participants; a bare name is
/// its own alias with whitespace removed. Aliases shaped `P<digits>` keep their id when it is free.
/// A declaration that follows a message using the same alias renames that participant.
pub(super) fn parse_sequence(lines: &[&str], scope: &mut IdScope) -> Sequence {
    let mut aliases = Aliases::new('P');
    let mut participants = Vec::<Participant>::new();
    let mut messages = Vec::new();

    for &line in lines {
        match classify(line) {
            Some(SequenceLine::Participant { alias, name }) => {
                let alias = alias
                    .map_or_else(|| name.split_whitespace().collect::<String>(), str::to_owned);
                let (id, new) = aliases.resolve(scope, &alias);
                if new {
                    participants.push(Participant::new(id, name));
                } else if let Some(participant) = participants.iter_mut().find(|p| p.id == id) {
                    participant.name = name;
                }
            }
            Some(SequenceLine::Message { from, to, line: kind, label }) => {
                let from = ensure_participant(&mut aliases, scope, &mut participants, from);
                let to = ensure_participant(&mut aliases, scope, &mut participants, to);
                let mut message = Message::new(scope.fresh(), from, to);
                message.line = kind;
                message.label = unescape_text(label);
                messages.push(message);
            }
            None => debug!(line; "skipping unrecognized sequence line"),
        }
    }

    Sequence::new(participants, messages)
}

/// A participant first seen in a message is named after its alias.
fn ensure_participant(
    aliases: &mut Aliases,
    scope: &mut IdScope,
    participants: &mut Vec<Participant>,
    alias: &str,
) -> EntityId {
    let (id, new) = aliases.resolve(scope, alias);
    if new {
        participants.push(Participant::new(id, alias));
    }
    id
}

/// Writes participants as `P<id>` aliases, then messages whose endpoints both exist.
pub(super) fn write_sequence(sequence: &Sequence) -> String {
    let mut body = Body::new("sequenceDiagram");

    for participant in sequence.participants() {
        let name = escape_text(&participant.name);
        body.push(format!("participant P{} as \"{name}\"", participant.id));
    }

    for message in sequence.messages() {
        if sequence.participant(message.from).is_none()
            || sequence.participant(message.to).is_none()
        {
            continue;
        }
        let arrow = match message.line {
            LineKind::Solid => "->>",
            LineKind::Dashed => "-->>",
        };
        let label = escape_text(&message.label);
        if label.is_empty() {
            body.push(format!("P{}{arrow}P{}", message.from, message.to));
        } else {
            body.push(format!("P{}{arrow}P{}: {label}", message.from, message.to));
        }
    }

    body.finish()
}

#[cfg(test)]
mod tests {
    use super::{classify, SequenceLine};
    use crate::model::LineKind;

    #[test]
    fn participant_declarations() {
        assert_eq!(
            classify("participant P4 as \"Web \\\"App\\\"\""),
            Some(SequenceLine::Participant { alias: Some("P4"), name: "Web \"App\"".to_owned() })
        );
        assert_eq!(
            classify("Participant Billing Service"),
            Some(SequenceLine::Participant { alias: None, name: "Billing Service".to_owned() })
        );
        assert_eq!(classify("participant"), None);
    }

    #[test]
    fn message_arrows_and_labels() {
        assert_eq!(
            classify("P1->>P2: Request: v2"),
            Some(SequenceLine::Message {
                from: "P1",
                to: "P2",
                line: LineKind::Solid,
                label: "Request: v2",
            })
        );
        assert_eq!(
            classify("api-gw -->> db"),
            Some(SequenceLine::Message {
                from: "api-gw",
                to: "db",
                line: LineKind::Dashed,
                label: "",
            })
        );
        assert_eq!(
            classify("A->B"),
            Some(SequenceLine::Message { from: "A", to: "B", line: LineKind::Solid, label: "" })
        );
        assert_eq!(classify("A B->>C"), None);
        assert_eq!(classify("A->>B extra"), None);
        assert_eq!(classify("Note over A: hi"), None);
    }
}
