// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turns untrusted or legacy JSON into a valid [`Diagram`].
//!
//! [`normalize`] is total: whatever the input, the result is a diagram whose ids are unique across
//! all seven entity collections and whose counter exceeds every id present.

mod coerce;

use std::collections::HashSet;

use log::{info, warn};
use serde_json::Value;

use crate::model::flowchart::{
    DEFAULT_EDGE_STROKE, DEFAULT_NODE_FILL, DEFAULT_NODE_HEIGHT, DEFAULT_NODE_LABEL,
    DEFAULT_NODE_STROKE, DEFAULT_NODE_TEXT_COLOR, DEFAULT_NODE_WIDTH,
};
use crate::model::gantt::{
    DEFAULT_DATE_FORMAT, DEFAULT_TASK_END, DEFAULT_TASK_LABEL, DEFAULT_TASK_SECTION,
    DEFAULT_TASK_START,
};
use crate::model::journey::{
    DEFAULT_PERSONA, DEFAULT_STEP_SCORE, DEFAULT_STEP_SECTION, DEFAULT_STEP_TASK,
};
use crate::model::pie::{DEFAULT_SLICE_COLOR, DEFAULT_SLICE_LABEL};
use crate::model::sequence::DEFAULT_PARTICIPANT_NAME;
use crate::model::{
    ArrowKind, Diagram, DiagramKind, Edge, EntityId, Flowchart, Gantt, GanttStatus, GanttTask,
    Journey, JourneyStep, LineKind, Message, Node, NodeShape, Participant, Pie, PieSlice, Sequence,
};

pub(crate) use coerce::numeric_text;
use coerce::{array, entity_id, number_or, object, str_field, strict_text, text_or, Object};

/// Coerces `raw` into a diagram and re-keys missing or duplicate ids.
///
/// A non-object input yields the empty [`Diagram::default`].
pub fn normalize(raw: &Value) -> Diagram {
    let Some(raw) = raw.as_object() else {
        return Diagram::default();
    };
    reconcile(coerce_diagram(raw))
}

/// Enforces id uniqueness on an already typed diagram.
///
/// Entities are visited in collection order (nodes, edges, participants, messages, slices, tasks,
/// steps); any entity whose id is missing or was already seen gets a fresh id from the counter.
/// References keep pointing at the first owner of an id. The counter is re-derived afterwards.
pub fn reconcile(mut diagram: Diagram) -> Diagram {
    let mut ids = IdClaims::new(crate::model::next_id(&diagram));

    for node in diagram.flowchart_mut().nodes_mut() {
        ids.claim("node", &mut node.id);
    }
    for edge in diagram.flowchart_mut().edges_mut() {
        ids.claim("edge", &mut edge.id);
    }
    for participant in diagram.sequence_mut().participants_mut() {
        ids.claim("participant", &mut participant.id);
    }
    for message in diagram.sequence_mut().messages_mut() {
        ids.claim("message", &mut message.id);
    }
    for slice in diagram.pie_mut().slices_mut() {
        ids.claim("slice", &mut slice.id);
    }
    for task in diagram.gantt_mut().tasks_mut() {
        ids.claim("task", &mut task.id);
    }
    for step in diagram.journey_mut().steps_mut() {
        ids.claim("step", &mut step.id);
    }

    diagram.set_next_id(ids.next);
    diagram.refresh_next_id();
    diagram
}

struct IdClaims {
    seen: HashSet<EntityId>,
    next: EntityId,
}

impl IdClaims {
    fn new(next: EntityId) -> Self {
        Self { seen: HashSet::new(), next }
    }

    fn claim(&mut self, entity: &'static str, id: &mut EntityId) {
        if !id.is_missing() && self.seen.insert(*id) {
            return;
        }
        let fresh = self.next;
        self.next = fresh.successor();
        warn!(entity, old_id = id.get(), new_id = fresh.get(); "reassigning entity id");
        *id = fresh;
        self.seen.insert(fresh);
    }
}

fn coerce_diagram(raw: &Object) -> Diagram {
    let kind = str_field(raw.get("type"))
        .and_then(|kind| kind.parse::<DiagramKind>().ok())
        .unwrap_or_default();

    let mut diagram = Diagram::new(kind);
    diagram.replace_flowchart(coerce_flowchart(raw));
    diagram.replace_sequence(coerce_sequence(object(raw.get("sequence"))));
    diagram.replace_pie(coerce_pie(object(raw.get("pie"))));
    diagram.replace_gantt(coerce_gantt(object(raw.get("gantt"))));
    diagram.replace_journey(coerce_journey(object(raw.get("journey"))));

    let stored = entity_id(raw.get("nextId"));
    diagram.set_next_id(if stored.is_missing() { EntityId::new(1) } else { stored });
    diagram
}

fn coerce_flowchart(raw: &Object) -> Flowchart {
    let legacy = object(raw.get("flowchart")).is_none()
        && (array(raw.get("nodes")).is_some() || array(raw.get("edges")).is_some());
    let source = if legacy {
        info!(
            nodes = array(raw.get("nodes")).map_or(0, <[Value]>::len),
            edges = array(raw.get("edges")).map_or(0, <[Value]>::len);
            "migrating legacy top-level flowchart"
        );
        Some(raw)
    } else {
        object(raw.get("flowchart"))
    };

    let nodes = items(source.and_then(|flowchart| flowchart.get("nodes")), coerce_node);
    let edges = items(source.and_then(|flowchart| flowchart.get("edges")), coerce_edge);
    Flowchart::new(nodes, edges)
}

fn items<T>(value: Option<&Value>, coerce_item: impl Fn(Option<&Object>) -> T) -> Vec<T> {
    array(value)
        .map(|values| values.iter().map(|value| coerce_item(value.as_object())).collect())
        .unwrap_or_default()
}

fn field<'a>(raw: Option<&'a Object>, key: &str) -> Option<&'a Value> {
    raw.and_then(|raw| raw.get(key))
}

fn coerce_node(raw: Option<&Object>) -> Node {
    Node {
        id: entity_id(field(raw, "id")),
        label: text_or(field(raw, "label"), DEFAULT_NODE_LABEL),
        x: number_or(field(raw, "x"), 0.0),
        y: number_or(field(raw, "y"), 0.0),
        width: number_or(field(raw, "width"), DEFAULT_NODE_WIDTH),
        height: number_or(field(raw, "height"), DEFAULT_NODE_HEIGHT),
        shape: str_field(field(raw, "shape")).and_then(NodeShape::from_name).unwrap_or_default(),
        fill: text_or(field(raw, "fill"), DEFAULT_NODE_FILL),
        stroke: text_or(field(raw, "stroke"), DEFAULT_NODE_STROKE),
        text_color: text_or(field(raw, "textColor"), DEFAULT_NODE_TEXT_COLOR),
    }
}

fn coerce_edge(raw: Option<&Object>) -> Edge {
    Edge {
        id: entity_id(field(raw, "id")),
        from: entity_id(field(raw, "from")),
        to: entity_id(field(raw, "to")),
        label: strict_text(field(raw, "label")),
        stroke: text_or(field(raw, "stroke"), DEFAULT_EDGE_STROKE),
        arrow: str_field(field(raw, "arrow")).and_then(ArrowKind::from_name).unwrap_or_default(),
    }
}

fn coerce_sequence(raw: Option<&Object>) -> Sequence {
    let participants = items(field(raw, "participants"), |raw| {
        Participant::new(
            entity_id(field(raw, "id")),
            text_or(field(raw, "name"), DEFAULT_PARTICIPANT_NAME),
        )
    });
    let messages = items(field(raw, "messages"), |raw| Message {
        id: entity_id(field(raw, "id")),
        from: entity_id(field(raw, "from")),
        to: entity_id(field(raw, "to")),
        label: text_or(field(raw, "label"), ""),
        line: match str_field(field(raw, "line")) {
            Some("dashed") => LineKind::Dashed,
            _ => LineKind::Solid,
        },
    });
    Sequence::new(participants, messages)
}

fn coerce_pie(raw: Option<&Object>) -> Pie {
    let slices = items(field(raw, "slices"), |raw| PieSlice {
        id: entity_id(field(raw, "id")),
        label: text_or(field(raw, "label"), DEFAULT_SLICE_LABEL),
        value: number_or(field(raw, "value"), 0.0),
        color: text_or(field(raw, "color"), DEFAULT_SLICE_COLOR),
    });
    Pie::new(text_or(field(raw, "title"), ""), slices)
}

fn coerce_gantt(raw: Option<&Object>) -> Gantt {
    let tasks = items(field(raw, "tasks"), |raw| GanttTask {
        id: entity_id(field(raw, "id")),
        section: text_or(field(raw, "section"), DEFAULT_TASK_SECTION),
        label: text_or(field(raw, "label"), DEFAULT_TASK_LABEL),
        start: text_or(field(raw, "start"), DEFAULT_TASK_START),
        end: text_or(field(raw, "end"), DEFAULT_TASK_END),
        status: GanttStatus::from_keyword(&text_or(field(raw, "status"), "").to_lowercase())
            .unwrap_or_default(),
    });
    Gantt::new(
        text_or(field(raw, "title"), ""),
        text_or(field(raw, "dateFormat"), DEFAULT_DATE_FORMAT),
        tasks,
    )
}

fn coerce_journey(raw: Option<&Object>) -> Journey {
    let steps = items(field(raw, "steps"), |raw| JourneyStep {
        id: entity_id(field(raw, "id")),
        section: text_or(field(raw, "section"), DEFAULT_STEP_SECTION),
        task: text_or(field(raw, "task"), DEFAULT_STEP_TASK),
        score: number_or(field(raw, "score"), DEFAULT_STEP_SCORE),
        personas: match array(field(raw, "personas")) {
            Some(personas) => personas.iter().map(|persona| text_or(Some(persona), "")).collect(),
            None => vec![DEFAULT_PERSONA.to_owned()],
        },
    });
    Journey::new(text_or(field(raw, "title"), ""), steps)
}

#[cfg(test)]
mod tests;
