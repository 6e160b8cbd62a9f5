// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use mermaid_magic::model::{
    ArrowKind, Diagram, DiagramKind, Edge, EntityId, Flowchart, Gantt, GanttStatus, GanttTask,
    Journey, JourneyStep, LineKind, Message, Node, NodeShape, Participant, Pie, PieSlice, Sequence,
};

pub const KINDS: [DiagramKind; 5] = [
    DiagramKind::Flowchart,
    DiagramKind::Sequence,
    DiagramKind::Pie,
    DiagramKind::Gantt,
    DiagramKind::Journey,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeLongLabels,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeLongLabels];

    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeLongLabels => "large_long_labels",
        }
    }

    /// Entities per substructure.
    fn size(self) -> u64 {
        match self {
            Self::Small => 12,
            Self::Medium => 200,
            Self::LargeLongLabels => 2_000,
        }
    }

    fn label_len(self) -> usize {
        match self {
            Self::Small | Self::Medium => 12,
            Self::LargeLongLabels => 96,
        }
    }
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

/// Ids are laid out in disjoint ranges per entity kind so every fixture is already reconciled.
struct IdRanges {
    size: u64,
}

impl IdRanges {
    fn id(&self, range: u64, idx: u64) -> EntityId {
        EntityId::new(1 + range * self.size + idx)
    }
}

/// A diagram with `case`-sized content in every substructure, active kind `kind`.
pub fn diagram(case: Case, kind: DiagramKind) -> Diagram {
    let n = case.size();
    let ids = IdRanges { size: n };
    let label = |prefix: &str, idx: u64| {
        ascii_repeat_to_len(&format!("{prefix} {idx} "), 'x', case.label_len())
    };

    let shapes = [NodeShape::Process, NodeShape::Decision, NodeShape::Terminator];
    let arrows = [ArrowKind::Arrow, ArrowKind::Dashed, ArrowKind::Thick, ArrowKind::Double];

    let nodes = (0..n)
        .map(|idx| {
            let mut node = Node::new(ids.id(0, idx), label("Node", idx));
            node.shape = shapes[(idx % 3) as usize];
            node.x = 180.0 + (idx % 4) as f64 * 220.0;
            node.y = 140.0 + (idx / 4) as f64 * 140.0;
            node
        })
        .collect::<Vec<_>>();
    let edges = (1..n)
        .map(|idx| {
            let mut edge = Edge::new(ids.id(1, idx), ids.id(0, idx - 1), ids.id(0, idx));
            edge.arrow = arrows[(idx % 4) as usize];
            if idx % 2 == 0 {
                edge.label = label("edge", idx);
            }
            edge
        })
        .collect::<Vec<_>>();

    let participants = (0..n.min(16))
        .map(|idx| Participant::new(ids.id(2, idx), label("Actor", idx)))
        .collect::<Vec<_>>();
    let messages = (0..n)
        .map(|idx| {
            let count = participants.len() as u64;
            let from = participants[(idx % count) as usize].id;
            let to = participants[((idx + 1) % count) as usize].id;
            let mut message = Message::new(ids.id(3, idx), from, to);
            message.label = label("call", idx);
            if idx % 3 == 0 {
                message.line = LineKind::Dashed;
            }
            message
        })
        .collect::<Vec<_>>();

    let slices = (0..n)
        .map(|idx| PieSlice::new(ids.id(4, idx), label("Slice", idx), (idx % 17 + 1) as f64))
        .collect::<Vec<_>>();

    let statuses = [GanttStatus::Unset, GanttStatus::Done, GanttStatus::Active, GanttStatus::Crit];
    let tasks = (0..n)
        .map(|idx| {
            let mut task =
                GanttTask::new(ids.id(5, idx), format!("Phase {}", idx / 10), label("Task", idx));
            task.status = statuses[(idx % 4) as usize];
            task
        })
        .collect::<Vec<_>>();

    let steps = (0..n)
        .map(|idx| {
            let mut step =
                JourneyStep::new(ids.id(6, idx), format!("Stage {}", idx / 8), label("Step", idx));
            step.score = (idx % 5 + 1) as f64;
            step.personas = vec!["User".to_owned(), format!("Persona {}", idx % 3)];
            step
        })
        .collect::<Vec<_>>();

    let mut diagram = Diagram::new(kind);
    diagram.replace_flowchart(Flowchart::new(nodes, edges));
    diagram.replace_sequence(Sequence::new(participants, messages));
    diagram.replace_pie(Pie::new("Bench pie", slices));
    diagram.replace_gantt(Gantt::new("Bench plan", "YYYY-MM-DD", tasks));
    diagram.replace_journey(Journey::new("Bench journey", steps));
    diagram.refresh_next_id();
    diagram
}

/// Entity count of the active kind, used as criterion throughput.
pub fn active_elements(diagram: &Diagram) -> u64 {
    let count = match diagram.kind() {
        DiagramKind::Flowchart => {
            diagram.flowchart().nodes().len() + diagram.flowchart().edges().len()
        }
        DiagramKind::Sequence => {
            diagram.sequence().participants().len() + diagram.sequence().messages().len()
        }
        DiagramKind::Pie => diagram.pie().slices().len(),
        DiagramKind::Gantt => diagram.gantt().tasks().len(),
        DiagramKind::Journey => diagram.journey().steps().len(),
    };
    count as u64
}

pub fn checksum_diagram(diagram: &Diagram) -> u64 {
    let mut acc = diagram.next_id().get();
    for id in diagram.entity_ids() {
        acc = acc.wrapping_mul(131).wrapping_add(id.get());
    }
    for node in diagram.flowchart().nodes() {
        acc = acc.wrapping_mul(131).wrapping_add(node.label.len() as u64);
    }
    for message in diagram.sequence().messages() {
        acc = acc.wrapping_mul(131).wrapping_add(message.label.len() as u64);
    }
    for task in diagram.gantt().tasks() {
        acc = acc.wrapping_mul(131).wrapping_add(task.label.len() as u64);
    }
    acc
}
