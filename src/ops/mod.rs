// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing operations for diagrams.
//!
//! Operations are applied to a copy of the diagram; either every op in a batch applies or the
//! input is left as it was. The result carries a minimal delta of touched entity ids.

use std::collections::HashSet;
use std::fmt;

use crate::model::pie::palette_color;
use crate::model::{
    ArrowKind, Diagram, DiagramKind, Edge, EntityId, GanttStatus, GanttTask, JourneyStep, LineKind,
    Message, Node, NodeShape, Participant, PieSlice,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Flow(FlowOp),
    Seq(SeqOp),
    Pie(PieOp),
    Gantt(GanttOp),
    Journey(JourneyOp),
    /// Switches the active kind; every substructure is kept.
    SetKind(DiagramKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowOp {
    AddNode {
        label: Option<String>,
        shape: NodeShape,
        x: f64,
        y: f64,
    },
    UpdateNode {
        node_id: EntityId,
        patch: NodePatch,
    },
    MoveNode {
        node_id: EntityId,
        x: f64,
        y: f64,
    },
    /// Removes every listed node plus each edge that references one of them.
    RemoveNodes {
        node_ids: Vec<EntityId>,
    },
    AddEdge {
        from: EntityId,
        to: EntityId,
        label: String,
        arrow: ArrowKind,
    },
    UpdateEdge {
        edge_id: EntityId,
        patch: EdgePatch,
    },
    RemoveEdge {
        edge_id: EntityId,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub label: Option<String>,
    pub shape: Option<NodeShape>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub text_color: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgePatch {
    pub from: Option<EntityId>,
    pub to: Option<EntityId>,
    pub label: Option<String>,
    pub stroke: Option<String>,
    pub arrow: Option<ArrowKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqOp {
    AddParticipant {
        name: Option<String>,
    },
    RenameParticipant {
        participant_id: EntityId,
        name: String,
    },
    /// Also removes every message to or from the participant.
    RemoveParticipant {
        participant_id: EntityId,
    },
    AddMessage {
        from: EntityId,
        to: EntityId,
        label: String,
        line: LineKind,
    },
    UpdateMessage {
        message_id: EntityId,
        patch: MessagePatch,
    },
    RemoveMessage {
        message_id: EntityId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePatch {
    pub from: Option<EntityId>,
    pub to: Option<EntityId>,
    pub label: Option<String>,
    pub line: Option<LineKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PieOp {
    SetTitle(String),
    /// Color comes from the slice palette by position.
    AddSlice {
        label: Option<String>,
        value: f64,
    },
    UpdateSlice {
        slice_id: EntityId,
        patch: SlicePatch,
    },
    RemoveSlice {
        slice_id: EntityId,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlicePatch {
    pub label: Option<String>,
    pub value: Option<f64>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GanttOp {
    SetTitle(String),
    SetDateFormat(String),
    AddTask {
        section: Option<String>,
        label: Option<String>,
    },
    UpdateTask {
        task_id: EntityId,
        patch: TaskPatch,
    },
    RemoveTask {
        task_id: EntityId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub section: Option<String>,
    pub label: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub status: Option<GanttStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JourneyOp {
    SetTitle(String),
    AddStep {
        section: Option<String>,
        task: Option<String>,
    },
    UpdateStep {
        step_id: EntityId,
        patch: StepPatch,
    },
    RemoveStep {
        step_id: EntityId,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepPatch {
    pub section: Option<String>,
    pub task: Option<String>,
    pub score: Option<f64>,
    pub personas: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyResult {
    pub diagram: Diagram,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which entities changed as the result of applying ops.
///
/// Title, date format, and kind changes are not entity changes and do not show up here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntityId>,
    pub removed: Vec<EntityId>,
    pub updated: Vec<EntityId>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<EntityId>,
    removed: HashSet<EntityId>,
    updated: HashSet<EntityId>,
}

impl DeltaBuilder {
    fn record_added(&mut self, id: EntityId) {
        self.removed.remove(&id);
        self.updated.remove(&id);
        self.added.insert(id);
    }

    /// An entity added and removed within the same batch leaves no trace.
    fn record_removed(&mut self, id: EntityId) {
        self.updated.remove(&id);
        if !self.added.remove(&id) {
            self.removed.insert(id);
        }
    }

    fn record_updated(&mut self, id: EntityId) {
        if self.added.contains(&id) || self.removed.contains(&id) {
            return;
        }
        self.updated.insert(id);
    }

    fn finish(self) -> Delta {
        let sorted = |ids: HashSet<EntityId>| {
            let mut ids = ids.into_iter().collect::<Vec<_>>();
            ids.sort_unstable();
            ids
        };
        Delta {
            added: sorted(self.added),
            removed: sorted(self.removed),
            updated: sorted(self.updated),
        }
    }
}

pub fn apply_ops(diagram: &Diagram, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
    let mut next = diagram.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        match op {
            Op::Flow(op) => apply_flow_op(&mut next, op, &mut delta)?,
            Op::Seq(op) => apply_seq_op(&mut next, op, &mut delta)?,
            Op::Pie(op) => apply_pie_op(&mut next, op, &mut delta)?,
            Op::Gantt(op) => apply_gantt_op(&mut next, op, &mut delta)?,
            Op::Journey(op) => apply_journey_op(&mut next, op, &mut delta)?,
            Op::SetKind(kind) => next.set_kind(*kind),
        }
    }

    Ok(ApplyResult { diagram: next, applied: ops.len(), delta: delta.finish() })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Node,
    Edge,
    Participant,
    Message,
    Slice,
    Task,
    Step,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    NotFound { kind: EntityKind, id: EntityId },
    /// An edge or message would start and end at the same entity.
    SelfLoop { kind: EntityKind, endpoint: EntityId },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "entity not found ({kind:?}, id={id})"),
            Self::SelfLoop { kind, endpoint } => {
                write!(f, "{kind:?} cannot connect {endpoint} to itself")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

// Extracted per-kind op implementations.
include!("ops_impl.rs");
