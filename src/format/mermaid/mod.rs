// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid-ish text parsing and exporting for all five diagram kinds.
//!
//! Parsing is tolerant: unrecognized lines are skipped (logged at `debug`), and the only failure is
//! text with no content at all. A parse replaces just the parsed kind's substructure of the
//! previous diagram so switching between kinds never loses data.

mod alias;
mod escape;
mod flowchart;
mod gantt;
mod journey;
mod lines;
mod marker;
mod pie;
mod sequence;

use std::fmt;

use crate::model::{Diagram, DiagramKind};
use crate::normalize::reconcile;

pub use escape::{escape_text, unescape_text};
pub use marker::{has_marker, strip_marker, with_marker, MARKER_LINE};

use alias::IdScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTextError {
    /// Nothing left after dropping the marker line, blank lines, and `%%` comments.
    Empty,
}

impl fmt::Display for ParseTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "diagram text has no content"),
        }
    }
}

impl std::error::Error for ParseTextError {}

/// Grammar selected by the first content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Sequence,
    Pie,
    Gantt,
    Journey,
    Flowchart,
    /// No recognized header; every line is flowchart body.
    BareFlowchart,
}

impl Grammar {
    fn detect(header: &str) -> Self {
        let header = header.to_ascii_lowercase();
        if header.starts_with("sequencediagram") {
            Self::Sequence
        } else if header.starts_with("pie") {
            Self::Pie
        } else if header.starts_with("gantt") {
            Self::Gantt
        } else if header.starts_with("journey") {
            Self::Journey
        } else if header.starts_with("flowchart") || header.starts_with("graph") {
            Self::Flowchart
        } else {
            Self::BareFlowchart
        }
    }

    fn kind(self) -> DiagramKind {
        match self {
            Self::Sequence => DiagramKind::Sequence,
            Self::Pie => DiagramKind::Pie,
            Self::Gantt => DiagramKind::Gantt,
            Self::Journey => DiagramKind::Journey,
            Self::Flowchart | Self::BareFlowchart => DiagramKind::Flowchart,
        }
    }
}

/// Parses diagram text against `previous`.
///
/// The result is `previous` (reconciled) with the parsed kind's substructure replaced and the kind
/// switched to the parsed one. Ids of the other kinds are never handed out again.
pub fn parse_text(source: &str, previous: &Diagram) -> Result<Diagram, ParseTextError> {
    let lines = lines::content_lines(source);
    let Some(header) = lines.first() else {
        return Err(ParseTextError::Empty);
    };

    let grammar = Grammar::detect(header);
    let kind = grammar.kind();
    let mut diagram = reconcile(previous.clone());
    let mut scope = IdScope::new(&diagram, kind);
    let body = &lines[1..];

    match grammar {
        Grammar::Sequence => {
            diagram.replace_sequence(sequence::parse_sequence(body, &mut scope));
        }
        Grammar::Pie => {
            diagram.replace_pie(pie::parse_pie(&lines, &mut scope));
        }
        Grammar::Gantt => {
            diagram.replace_gantt(gantt::parse_gantt(body, &mut scope));
        }
        Grammar::Journey => {
            diagram.replace_journey(journey::parse_journey(body, &mut scope));
        }
        Grammar::Flowchart | Grammar::BareFlowchart => {
            let body = if grammar == Grammar::Flowchart { body } else { &lines[..] };
            let parsed = flowchart::parse_flowchart(body, &mut scope, diagram.flowchart());
            diagram.replace_flowchart(parsed);
        }
    }

    diagram.set_kind(kind);
    diagram.set_next_id(scope.next());
    diagram.refresh_next_id();
    Ok(diagram)
}

/// Serializes the active kind of `diagram`. Total and deterministic.
pub fn to_text(diagram: &Diagram) -> String {
    match diagram.kind() {
        DiagramKind::Flowchart => flowchart::write_flowchart(diagram.flowchart()),
        DiagramKind::Sequence => sequence::write_sequence(diagram.sequence()),
        DiagramKind::Pie => pie::write_pie(diagram.pie()),
        DiagramKind::Gantt => gantt::write_gantt(diagram.gantt()),
        DiagramKind::Journey => journey::write_journey(diagram.journey()),
    }
}
