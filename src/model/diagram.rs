// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::flowchart::{Edge, Flowchart, Node, NodeShape};
use super::gantt::{Gantt, GanttStatus, GanttTask};
use super::ids::{self, EntityId};
use super::journey::{Journey, JourneyStep};
use super::pie::{Pie, PieSlice};
use super::sequence::{Message, Participant, Sequence};

/// Version of the persisted document layout written by this crate.
pub const SCHEMA_VERSION: u32 = 2;

/// The type of diagram.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    #[default]
    Flowchart,
    Sequence,
    Pie,
    Gantt,
    Journey,
}

impl DiagramKind {
    pub const ALL: [Self; 5] =
        [Self::Flowchart, Self::Sequence, Self::Pie, Self::Gantt, Self::Journey];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Pie => "pie",
            Self::Gantt => "gantt",
            Self::Journey => "journey",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagramKindError {
    value: String,
}

impl fmt::Display for ParseDiagramKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown diagram kind: {:?} (expected flowchart/sequence/pie/gantt/journey)",
            self.value
        )
    }
}

impl std::error::Error for ParseDiagramKindError {}

impl FromStr for DiagramKind {
    type Err = ParseDiagramKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseDiagramKindError { value: s.to_owned() })
    }
}

/// One diagram document: a kind tag plus all five per-kind substructures.
///
/// Every substructure always exists. The kind only selects which one is active for
/// serialization and export, so switching kinds never discards work done in another kind.
///
/// Deserializing goes through [`crate::normalize::normalize`], so any JSON value (including the
/// legacy v1 shape) yields a valid diagram.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    version: u32,
    #[serde(rename = "type")]
    kind: DiagramKind,
    next_id: EntityId,
    flowchart: Flowchart,
    sequence: Sequence,
    pie: Pie,
    gantt: Gantt,
    journey: Journey,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new(DiagramKind::default())
    }
}

impl<'de> Deserialize<'de> for Diagram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::normalize::normalize(&raw))
    }
}

impl Diagram {
    /// An empty diagram of the given kind.
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            version: SCHEMA_VERSION,
            kind,
            next_id: EntityId::new(1),
            flowchart: Flowchart::default(),
            sequence: Sequence::default(),
            pie: Pie::default(),
            gantt: Gantt::default(),
            journey: Journey::default(),
        }
    }

    /// The sample content a fresh data file starts with.
    pub fn starter() -> Self {
        let mut diagram = Self::new(DiagramKind::Flowchart);

        let mut start = Node::new(EntityId::new(2), "Start");
        start.x = 180.0;
        start.y = 140.0;
        start.shape = NodeShape::Terminator;
        let mut process = Node::new(EntityId::new(3), "Process");
        process.x = 420.0;
        process.y = 140.0;
        diagram.flowchart.nodes_mut().extend([start, process]);
        diagram.flowchart.edges_mut().push(Edge::new(
            EntityId::new(100),
            EntityId::new(2),
            EntityId::new(3),
        ));

        diagram.sequence.participants_mut().extend([
            Participant::new(EntityId::new(4), "User"),
            Participant::new(EntityId::new(5), "System"),
        ]);
        let mut request = Message::new(EntityId::new(101), EntityId::new(4), EntityId::new(5));
        request.label = "Request".to_owned();
        diagram.sequence.messages_mut().push(request);

        diagram.pie.set_title("Usage");
        let mut beta = PieSlice::new(EntityId::new(103), "Beta", 60.0);
        beta.color = "#34d399".to_owned();
        diagram
            .pie
            .slices_mut()
            .extend([PieSlice::new(EntityId::new(102), "Alpha", 40.0), beta]);

        diagram.gantt.set_title("Project Plan");
        let mut build = GanttTask::new(EntityId::new(105), "Build", "Implementation");
        build.start = "2024-01-06".to_owned();
        build.end = "2024-01-14".to_owned();
        build.status = GanttStatus::Active;
        diagram
            .gantt
            .tasks_mut()
            .extend([GanttTask::new(EntityId::new(104), "Design", "Wireframes"), build]);

        diagram.journey.set_title("User Journey");
        let mut browse = JourneyStep::new(EntityId::new(106), "Discover", "Browse");
        browse.score = 4.0;
        diagram
            .journey
            .steps_mut()
            .extend([browse, JourneyStep::new(EntityId::new(107), "Purchase", "Checkout")]);

        diagram.next_id = EntityId::new(112);
        diagram
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: DiagramKind) {
        self.kind = kind;
    }

    /// The stored allocator counter (see [`ids::next_id`] for the derived value).
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }

    pub fn set_next_id(&mut self, next_id: EntityId) {
        self.next_id = next_id;
    }

    /// Re-derives the counter from the entities currently present.
    pub fn refresh_next_id(&mut self) {
        self.next_id = ids::next_id(self);
    }

    /// Hands out a fresh id and advances the counter.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = ids::next_id(self);
        self.next_id = id.successor();
        id
    }

    pub fn flowchart(&self) -> &Flowchart {
        &self.flowchart
    }

    pub fn flowchart_mut(&mut self) -> &mut Flowchart {
        &mut self.flowchart
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut Sequence {
        &mut self.sequence
    }

    pub fn pie(&self) -> &Pie {
        &self.pie
    }

    pub fn pie_mut(&mut self) -> &mut Pie {
        &mut self.pie
    }

    pub fn gantt(&self) -> &Gantt {
        &self.gantt
    }

    pub fn gantt_mut(&mut self) -> &mut Gantt {
        &mut self.gantt
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn journey_mut(&mut self) -> &mut Journey {
        &mut self.journey
    }

    pub fn replace_flowchart(&mut self, flowchart: Flowchart) -> Flowchart {
        std::mem::replace(&mut self.flowchart, flowchart)
    }

    pub fn replace_sequence(&mut self, sequence: Sequence) -> Sequence {
        std::mem::replace(&mut self.sequence, sequence)
    }

    pub fn replace_pie(&mut self, pie: Pie) -> Pie {
        std::mem::replace(&mut self.pie, pie)
    }

    pub fn replace_gantt(&mut self, gantt: Gantt) -> Gantt {
        std::mem::replace(&mut self.gantt, gantt)
    }

    pub fn replace_journey(&mut self, journey: Journey) -> Journey {
        std::mem::replace(&mut self.journey, journey)
    }

    /// Ids of every entity in every kind, in collection order
    /// (nodes, edges, participants, messages, slices, tasks, steps).
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entity_ids_except(None)
    }

    /// Like [`Self::entity_ids`] but skipping the collections that belong to `skip`.
    pub fn entity_ids_except(
        &self,
        skip: Option<DiagramKind>,
    ) -> impl Iterator<Item = EntityId> + '_ {
        let keep = move |kind: DiagramKind| skip != Some(kind);
        let flowchart = keep(DiagramKind::Flowchart).then(|| {
            self.flowchart
                .nodes()
                .iter()
                .map(|node| node.id)
                .chain(self.flowchart.edges().iter().map(|edge| edge.id))
        });
        let sequence = keep(DiagramKind::Sequence).then(|| {
            self.sequence
                .participants()
                .iter()
                .map(|participant| participant.id)
                .chain(self.sequence.messages().iter().map(|message| message.id))
        });
        let pie = keep(DiagramKind::Pie).then(|| self.pie.slices().iter().map(|slice| slice.id));
        let gantt = keep(DiagramKind::Gantt).then(|| self.gantt.tasks().iter().map(|task| task.id));
        let journey =
            keep(DiagramKind::Journey).then(|| self.journey.steps().iter().map(|step| step.id));

        flowchart
            .into_iter()
            .flatten()
            .chain(sequence.into_iter().flatten())
            .chain(pie.into_iter().flatten())
            .chain(gantt.into_iter().flatten())
            .chain(journey.into_iter().flatten())
    }
}
