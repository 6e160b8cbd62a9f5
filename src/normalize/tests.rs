// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use rstest::rstest;
use serde_json::{json, Value};

use crate::model::{
    ArrowKind, Diagram, DiagramKind, EntityId, GanttStatus, LineKind, NodeShape, SCHEMA_VERSION,
};

use super::{normalize, reconcile};

fn assert_ids_unique(diagram: &Diagram) {
    let ids = diagram.entity_ids().collect::<Vec<_>>();
    let unique = ids.iter().copied().collect::<BTreeSet<_>>();
    assert_eq!(ids.len(), unique.len(), "duplicate ids in {ids:?}");
    assert!(ids.iter().all(|id| !id.is_missing()));
    assert!(ids.iter().all(|id| *id < diagram.next_id()));
}

#[rstest]
#[case(json!(null))]
#[case(json!(42))]
#[case(json!("flowchart"))]
#[case(json!([{"id": 1}]))]
fn non_object_input_yields_empty_diagram(#[case] raw: Value) {
    assert_eq!(normalize(&raw), Diagram::default());
}

#[test]
fn empty_object_gets_every_substructure() {
    let diagram = normalize(&json!({}));
    assert_eq!(diagram.version(), SCHEMA_VERSION);
    assert_eq!(diagram.kind(), DiagramKind::Flowchart);
    assert_eq!(diagram.next_id(), EntityId::new(1));
    assert!(diagram.flowchart().nodes().is_empty());
    assert!(diagram.sequence().participants().is_empty());
    assert_eq!(diagram.gantt().date_format(), "YYYY-MM-DD");
}

#[test]
fn legacy_top_level_flowchart_is_migrated() {
    let nodes = json!([
        {"id": 1, "label": "Start", "x": 10.0, "y": 20.0, "width": 100.0, "height": 50.0,
         "shape": "terminator", "fill": "#fff", "stroke": "#000", "textColor": "#111"},
        {"id": 2, "label": "End", "x": 30.0, "y": 40.0, "width": 100.0, "height": 50.0,
         "shape": "process", "fill": "#fff", "stroke": "#000", "textColor": "#111"}
    ]);
    let edges = json!([
        {"id": 3, "from": 1, "to": 2, "label": "go", "stroke": "#444", "arrow": "dashed"}
    ]);
    let diagram = normalize(&json!({ "nodes": nodes, "edges": edges }));

    assert_eq!(diagram.version(), 2);
    let round_tripped = serde_json::to_value(diagram.flowchart()).expect("json");
    assert_eq!(round_tripped["nodes"], nodes);
    assert_eq!(round_tripped["edges"], edges);
    assert_eq!(diagram.next_id(), EntityId::new(4));
}

#[test]
fn nested_flowchart_wins_over_top_level_arrays() {
    let diagram = normalize(&json!({
        "flowchart": {"nodes": [{"id": 5, "label": "Nested"}], "edges": []},
        "nodes": [{"id": 1, "label": "Legacy"}]
    }));
    assert_eq!(diagram.flowchart().nodes().len(), 1);
    assert_eq!(diagram.flowchart().nodes()[0].label, "Nested");
}

#[test]
fn malformed_fields_take_documented_defaults() {
    let diagram = normalize(&json!({
        "type": "mindmap",
        "nextId": "soon",
        "flowchart": {
            "nodes": [{"id": 1, "width": 0, "height": "tall", "shape": "hexagon", "label": null}],
            "edges": [{"id": 2, "from": 1, "to": 1, "label": 7, "arrow": "zigzag"}]
        },
        "sequence": {
            "participants": [{"id": 3}],
            "messages": [{"id": 4, "from": 3, "to": 3, "line": "dotted"}]
        },
        "pie": {"slices": [{"id": 5, "value": "lots"}]},
        "gantt": {"tasks": [{"id": 6, "status": "DONE"}, {"id": 7, "status": "later"}]},
        "journey": {"steps": [{"id": 8, "score": 0, "personas": "Alice"}]}
    }));

    assert_eq!(diagram.kind(), DiagramKind::Flowchart);
    let node = &diagram.flowchart().nodes()[0];
    assert_eq!(node.label, "Node");
    assert_eq!((node.width, node.height), (160.0, 64.0));
    assert_eq!(node.shape, NodeShape::Process);
    assert_eq!(node.fill, "#F2F2F2");

    let edge = &diagram.flowchart().edges()[0];
    assert_eq!(edge.label, "");
    assert_eq!(edge.arrow, ArrowKind::Arrow);
    assert_eq!(edge.stroke, "#444444");

    assert_eq!(diagram.sequence().participants()[0].name, "Participant");
    assert_eq!(diagram.sequence().messages()[0].line, LineKind::Solid);

    let slice = &diagram.pie().slices()[0];
    assert_eq!(
        (slice.label.as_str(), slice.value, slice.color.as_str()),
        ("Slice", 0.0, "#60a5fa")
    );

    let tasks = diagram.gantt().tasks();
    assert_eq!(tasks[0].status, GanttStatus::Done);
    assert_eq!(tasks[1].status, GanttStatus::Unset);
    assert_eq!(tasks[0].section, "Phase");
    assert_eq!((tasks[0].start.as_str(), tasks[0].end.as_str()), ("2024-01-01", "2024-01-05"));

    let step = &diagram.journey().steps()[0];
    assert_eq!(step.score, 3.0);
    assert_eq!(step.personas, vec!["User".to_owned()]);
    assert_eq!(diagram.next_id(), EntityId::new(9));
}

#[test]
fn next_id_covers_externally_added_ids() {
    let diagram = normalize(&json!({
        "nextId": 3,
        "pie": {"title": "Usage", "slices": [{"id": 40, "label": "Alpha", "value": 1}]}
    }));
    assert_eq!(diagram.next_id(), EntityId::new(41));

    let diagram = normalize(&json!({ "nextId": 500, "journey": {"steps": [{"id": 2}]} }));
    assert_eq!(diagram.next_id(), EntityId::new(500));
}

#[test]
fn duplicate_and_missing_ids_are_reassigned_across_kinds() {
    let diagram = normalize(&json!({
        "nextId": 10,
        "flowchart": {"nodes": [{"id": 1}, {"id": 1}, {"label": "no id"}], "edges": []},
        "sequence": {"participants": [{"id": 1, "name": "Clash"}], "messages": []},
        "gantt": {"tasks": [{"id": 2}]}
    }));

    assert_ids_unique(&diagram);
    let node_ids = diagram.flowchart().nodes().iter().map(|node| node.id).collect::<Vec<_>>();
    assert_eq!(node_ids, vec![EntityId::new(1), EntityId::new(10), EntityId::new(11)]);
    assert_eq!(diagram.sequence().participants()[0].id, EntityId::new(12));
    assert_eq!(diagram.gantt().tasks()[0].id, EntityId::new(2));
    assert_eq!(diagram.next_id(), EntityId::new(13));
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        json!({}),
        json!({"nodes": [{"id": 3, "label": "Legacy"}], "edges": [{"id": 3, "from": 3, "to": 9}]}),
        json!({"type": "journey", "journey": {"title": "T", "steps": [{"task": "x", "score": "4"}]}}),
        serde_json::to_value(Diagram::starter()).expect("json"),
    ];

    for raw in inputs {
        let once = normalize(&raw);
        let twice = normalize(&serde_json::to_value(&once).expect("json"));
        assert_eq!(twice, once);
        assert_ids_unique(&once);
    }
}

#[test]
fn reconcile_leaves_valid_diagrams_untouched() {
    let starter = Diagram::starter();
    assert_eq!(reconcile(starter.clone()), starter);
}
