// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{
    gantt_status_label, headers, slice_percentage, to_csv, FLOWCHART_HEADERS, GANTT_HEADERS,
    JOURNEY_HEADERS, PIE_HEADERS, SEQUENCE_HEADERS,
};
use crate::format::mermaid::parse_text;
use crate::model::{
    ArrowKind, Diagram, DiagramKind, Edge, EntityId, GanttStatus, Message, PieSlice,
};

/// Cell of `column` (its `occurrence`-th instance) in a row without quoted cells.
fn cell<'a>(headers: &[&str], line: &'a str, column: &str, occurrence: usize) -> &'a str {
    let idx = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| **header == column)
        .nth(occurrence)
        .map(|(idx, _)| idx)
        .expect("column exists");
    line.split(',').nth(idx).expect("cell exists")
}

fn export(diagram: &Diagram, kind: DiagramKind) -> Vec<String> {
    let mut diagram = diagram.clone();
    diagram.set_kind(kind);
    to_csv(&diagram).expect("kind has a mapping").lines().map(str::to_owned).collect()
}

#[rstest]
#[case::flowchart(DiagramKind::Flowchart, 12)]
#[case::sequence(DiagramKind::Sequence, 14)]
#[case::pie(DiagramKind::Pie, 18)]
#[case::gantt(DiagramKind::Gantt, 27)]
#[case::journey(DiagramKind::Journey, 18)]
fn header_row_comes_first_and_rows_match_its_width(
    #[case] kind: DiagramKind,
    #[case] width: usize,
) {
    let headers = headers(kind).expect("mapped");
    assert_eq!(headers.len(), width);

    let lines = export(&Diagram::starter(), kind);
    assert_eq!(lines[0], headers.join(","));
    assert!(lines.iter().all(|line| line.split(',').count() == width));
}

#[test]
fn gantt_header_repeats_name_and_status() {
    let names = GANTT_HEADERS.iter().filter(|header| **header == "Name").count();
    let statuses = GANTT_HEADERS.iter().filter(|header| **header == "Status").count();
    assert_eq!((names, statuses), (2, 2));
    assert_eq!(GANTT_HEADERS[21], "Name");
    assert_eq!(GANTT_HEADERS[23], "Status");
}

#[test]
fn flowchart_rows_use_model_ids() {
    let lines = export(&Diagram::starter(), DiagramKind::Flowchart);
    assert_eq!(
        lines[1..],
        [
            "1,Page,,,,,,,,Page 1,,",
            "2,Terminator,Flowchart Shapes,1,,,,,,Start,,",
            "3,Process,Flowchart Shapes,1,,,,,,Process,,",
            "100,Line,,1,,2,3,None,Arrow,,,",
        ]
    );
}

#[rstest]
#[case::arrow(ArrowKind::Arrow, "None", "Arrow")]
#[case::none(ArrowKind::None, "None", "None")]
#[case::dashed(ArrowKind::Dashed, "None", "Arrow")]
#[case::thick(ArrowKind::Thick, "None", "Arrow")]
#[case::double(ArrowKind::Double, "Arrow", "Arrow")]
fn edge_arrow_columns(
    #[case] arrow: ArrowKind,
    #[case] source: &str,
    #[case] destination: &str,
) {
    let mut diagram = Diagram::starter();
    diagram.flowchart_mut().edges_mut()[0].arrow = arrow;
    let lines = export(&diagram, DiagramKind::Flowchart);
    let edge = &lines[4];
    assert_eq!(cell(FLOWCHART_HEADERS, edge, "Source Arrow", 0), source);
    assert_eq!(cell(FLOWCHART_HEADERS, edge, "Destination Arrow", 0), destination);
}

#[test]
fn dangling_edges_and_messages_are_skipped() {
    let mut diagram = Diagram::starter();
    diagram
        .flowchart_mut()
        .edges_mut()
        .push(Edge::new(EntityId::new(120), EntityId::new(2), EntityId::new(99)));
    diagram
        .sequence_mut()
        .messages_mut()
        .push(Message::new(EntityId::new(121), EntityId::new(98), EntityId::new(5)));

    assert_eq!(export(&diagram, DiagramKind::Flowchart).len(), 5);

    let lines = export(&diagram, DiagramKind::Sequence);
    assert_eq!(lines.len(), 6);
    let message = &lines[5];
    assert_eq!(cell(SEQUENCE_HEADERS, message, "Id", 0), "5");
    assert_eq!(cell(SEQUENCE_HEADERS, message, "Line Source", 0), "3");
    assert_eq!(cell(SEQUENCE_HEADERS, message, "Line Destination", 0), "4");
    assert_eq!(cell(SEQUENCE_HEADERS, message, "Text Area 1", 0), "Request");
}

#[test]
fn sequence_metadata_rows() {
    let lines = export(&Diagram::starter(), DiagramKind::Sequence);
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[1], "Name", 0), "Document");
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[1], "Status", 0), "Draft");
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[1], "Text Area 1", 0), "Sequence diagram");
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[2], "Id", 0), "2");
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[3], "Name", 0), "Class");
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[3], "Shape Library", 0), "UML");
    assert_eq!(cell(SEQUENCE_HEADERS, &lines[3], "Text Area 1", 0), "User");
}

#[test]
fn parsed_pie_exports_percentages() {
    let source = "pie title Usage\n  \"Alpha\": 40\n  \"Beta\": 60";
    let diagram = parse_text(source, &Diagram::default()).expect("parse");
    let lines = export(&diagram, DiagramKind::Pie);

    assert_eq!(cell(PIE_HEADERS, &lines[1], "Text Area 1", 0), "Usage");
    assert_eq!(cell(PIE_HEADERS, &lines[3], "value", 0), "40");
    assert_eq!(cell(PIE_HEADERS, &lines[4], "value", 0), "60");
    assert_eq!(cell(PIE_HEADERS, &lines[3], "foreground", 0), "#60a5fa");
    assert_eq!(cell(PIE_HEADERS, &lines[3], "background", 0), "#00000000");
    assert_eq!(cell(PIE_HEADERS, &lines[3], "Name", 0), "Progress Bar");
}

#[rstest]
#[case::third(1.0, 3.0, 33.0)]
#[case::two_thirds(2.0, 3.0, 67.0)]
#[case::half_rounds_up(1.0, 8.0, 13.0)]
#[case::zero_total(0.0, 0.0, 0.0)]
#[case::zero_total_nonzero_slice(5.0, 0.0, 500.0)]
fn percentages_round_half_up(#[case] value: f64, #[case] total: f64, #[case] expected: f64) {
    assert_eq!(slice_percentage(value, total), expected);
}

#[test]
fn empty_titles_fall_back() {
    let mut diagram = Diagram::default();
    diagram.pie_mut().slices_mut().push(PieSlice::new(EntityId::new(1), "Solo", 0.0));
    let pie = export(&diagram, DiagramKind::Pie);
    assert_eq!(cell(PIE_HEADERS, &pie[1], "Text Area 1", 0), "Pie chart");
    assert_eq!(cell(PIE_HEADERS, &pie[3], "value", 0), "0");

    let gantt = export(&diagram, DiagramKind::Gantt);
    assert_eq!(cell(GANTT_HEADERS, &gantt[1], "Text Area 1", 0), "Gantt chart");
    let journey = export(&diagram, DiagramKind::Journey);
    assert_eq!(cell(JOURNEY_HEADERS, &journey[1], "Text Area 1", 0), "User journey");
}

#[test]
fn parsed_gantt_task_fills_both_status_and_name_columns() {
    let source = "gantt\n  section Build\n  Implementation : active, 2024-01-06, 2024-01-14";
    let diagram = parse_text(source, &Diagram::default()).expect("parse");
    let lines = export(&diagram, DiagramKind::Gantt);
    let task = &lines[3];

    assert_eq!(cell(GANTT_HEADERS, task, "Id", 0), "3");
    assert_eq!(cell(GANTT_HEADERS, task, "Name", 0), "LucidCardBlock");
    assert_eq!(cell(GANTT_HEADERS, task, "Name", 1), "Implementation");
    assert_eq!(cell(GANTT_HEADERS, task, "Status", 0), "In Progress");
    assert_eq!(cell(GANTT_HEADERS, task, "Status", 1), "In Progress");
    assert_eq!(cell(GANTT_HEADERS, task, "Title", 0), "Implementation");
    assert_eq!(cell(GANTT_HEADERS, task, "Text Area 1", 0), "Build");
    assert_eq!(cell(GANTT_HEADERS, task, "Start Date", 0), "2024-01-06");
    assert_eq!(cell(GANTT_HEADERS, task, "End Date", 0), "2024-01-14");
}

#[rstest]
#[case(GanttStatus::Done, "Done")]
#[case(GanttStatus::Active, "In Progress")]
#[case(GanttStatus::Crit, "At Risk")]
#[case(GanttStatus::Unset, "New")]
fn gantt_status_labels(#[case] status: GanttStatus, #[case] label: &str) {
    assert_eq!(gantt_status_label(status), label);
}

#[test]
fn journey_rows_describe_stage_score_and_personas() {
    let mut diagram = Diagram::starter();
    diagram.journey_mut().steps_mut()[1].personas = vec!["Ann".to_owned(), "Bo".to_owned()];
    let lines = export(&diagram, DiagramKind::Journey);

    assert_eq!(cell(JOURNEY_HEADERS, &lines[1], "Text Area 1", 0), "User Journey");
    assert_eq!(
        lines[3],
        "3,Process,Flowchart Shapes/Containers,2,,,,,,,,Browse,Stage: Discover,Score: 4,User,,,"
    );
    assert!(lines[4].ends_with(",Checkout,Stage: Purchase,Score: 3,\"Ann, Bo\",,,"));
}

#[test]
fn free_text_is_csv_escaped() {
    let mut diagram = Diagram::starter();
    diagram.flowchart_mut().nodes_mut()[0].label = "Say \"hi\", then\nleave".to_owned();
    let csv = to_csv(&diagram).expect("mapped");
    assert!(csv.contains(",\"Say \"\"hi\"\", then\nleave\",,"));
}
