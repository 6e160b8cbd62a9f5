// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! CSV export in the import layout of the external diagramming tool.
//!
//! Every kind has a fixed header list; the first data rows are the document/page metadata, then one
//! row per entity. The mappings are lookup tables and not configurable.

mod table;

use std::collections::HashMap;

use crate::format::number_text;
use crate::model::{
    ArrowKind, Diagram, DiagramKind, EntityId, Flowchart, Gantt, GanttStatus, Journey, NodeShape,
    Pie, Sequence,
};

pub use table::csv_escape;

use table::Table;

pub const FLOWCHART_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Shape Library",
    "Page ID",
    "Contained By",
    "Line Source",
    "Line Destination",
    "Source Arrow",
    "Destination Arrow",
    "Text Area 1",
    "Text Area 2",
    "Text Area 3",
];

pub const SEQUENCE_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Shape Library",
    "Page ID",
    "Contained By",
    "Group",
    "Line Source",
    "Line Destination",
    "Source Arrow",
    "Destination Arrow",
    "Status",
    "Text Area 1",
    "Text Area 2",
    "Comments",
];

pub const PIE_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Shape Library",
    "Page ID",
    "Contained By",
    "Group",
    "Status",
    "Text Area 1",
    "Text Area 2",
    "Text Area 3",
    "Text Area 4",
    "Comments",
    "background",
    "foreground",
    "max",
    "min",
    "thickness",
    "value",
];

/// `Name` and `Status` both appear twice.
pub const GANTT_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Shape Library",
    "Page ID",
    "Contained By",
    "Group",
    "Visualization",
    "Status",
    "Text Area 1",
    "Text Area 2",
    "Text Area 3",
    "Text Area 4",
    "Text Area 5",
    "Text Area 6",
    "Text Area 7",
    "Comments",
    "Assignee",
    "Description",
    "displaydue",
    "End Date",
    "Estimate",
    "Name",
    "Start Date",
    "Status",
    "T-shirt size",
    "Title",
    "value",
];

pub const JOURNEY_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Shape Library",
    "Page ID",
    "Contained By",
    "Group",
    "Line Source",
    "Line Destination",
    "Source Arrow",
    "Destination Arrow",
    "Status",
    "Text Area 1",
    "Text Area 2",
    "Text Area 3",
    "Text Area 4",
    "Text Area 5",
    "Text Area 6",
    "Comments",
];

/// Header list for `kind`, or `None` when the kind has no export mapping.
pub fn headers(kind: DiagramKind) -> Option<&'static [&'static str]> {
    match kind {
        DiagramKind::Flowchart => Some(FLOWCHART_HEADERS),
        DiagramKind::Sequence => Some(SEQUENCE_HEADERS),
        DiagramKind::Pie => Some(PIE_HEADERS),
        DiagramKind::Gantt => Some(GANTT_HEADERS),
        DiagramKind::Journey => Some(JOURNEY_HEADERS),
    }
}

/// Exports the active kind of `diagram`.
///
/// `None` means the kind has no export mapping; every current kind has one.
pub fn to_csv(diagram: &Diagram) -> Option<String> {
    let csv = match diagram.kind() {
        DiagramKind::Flowchart => flowchart_csv(diagram.flowchart()),
        DiagramKind::Sequence => sequence_csv(diagram.sequence()),
        DiagramKind::Pie => pie_csv(diagram.pie()),
        DiagramKind::Gantt => gantt_csv(diagram.gantt()),
        DiagramKind::Journey => journey_csv(diagram.journey()),
    };
    Some(csv)
}

pub fn gantt_status_label(status: GanttStatus) -> &'static str {
    match status {
        GanttStatus::Done => "Done",
        GanttStatus::Active => "In Progress",
        GanttStatus::Crit => "At Risk",
        GanttStatus::Unset => "New",
    }
}

fn shape_name(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Process => "Process",
        NodeShape::Decision => "Decision",
        NodeShape::Terminator => "Terminator",
    }
}

/// `(Source Arrow, Destination Arrow)`.
fn arrow_ends(arrow: ArrowKind) -> (&'static str, &'static str) {
    let source = if arrow == ArrowKind::Double { "Arrow" } else { "None" };
    let destination = if arrow == ArrowKind::None { "None" } else { "Arrow" };
    (source, destination)
}

/// Row ids 1 and 2 are the document and page rows; entities are numbered from 3.
struct RowIds(usize);

impl RowIds {
    fn new() -> Self {
        Self(3)
    }

    fn take(&mut self) -> String {
        let id = self.0;
        self.0 += 1;
        id.to_string()
    }
}

/// Flowchart rows keep model ids; edges whose endpoints are missing are left out.
fn flowchart_csv(flowchart: &Flowchart) -> String {
    let mut table = Table::new(FLOWCHART_HEADERS);
    table.push_labelled("1", "Page", "Page 1");

    for node in flowchart.nodes() {
        let mut row = table.row();
        row.set("Id", node.id.to_string())
            .set("Name", shape_name(node.shape))
            .set("Shape Library", "Flowchart Shapes")
            .set("Page ID", "1")
            .set("Text Area 1", node.label.as_str());
        table.push(row);
    }

    for edge in flowchart.connected_edges() {
        let (source_arrow, destination_arrow) = arrow_ends(edge.arrow);
        let mut row = table.row();
        row.set("Id", edge.id.to_string())
            .set("Name", "Line")
            .set("Page ID", "1")
            .set("Line Source", edge.from.to_string())
            .set("Line Destination", edge.to.to_string())
            .set("Source Arrow", source_arrow)
            .set("Destination Arrow", destination_arrow)
            .set("Text Area 1", edge.label.as_str());
        table.push(row);
    }

    table.finish()
}

fn sequence_csv(sequence: &Sequence) -> String {
    let mut table = Table::new(SEQUENCE_HEADERS);
    table.push_labelled("1", "Document", "Sequence diagram").set("Status", "Draft");
    table.push_labelled("2", "Page", "Page 1");

    let mut ids = RowIds::new();
    let mut rows_by_participant = HashMap::<EntityId, String>::new();
    for participant in sequence.participants() {
        let id = ids.take();
        rows_by_participant.insert(participant.id, id.clone());
        let mut row = table.row();
        row.set("Id", id)
            .set("Name", "Class")
            .set("Shape Library", "UML")
            .set("Page ID", "2")
            .set("Text Area 1", participant.name.as_str());
        table.push(row);
    }

    for message in sequence.messages() {
        let (Some(from), Some(to)) =
            (rows_by_participant.get(&message.from), rows_by_participant.get(&message.to))
        else {
            continue;
        };
        let mut row = table.row();
        row.set("Id", ids.take())
            .set("Name", "Line")
            .set("Page ID", "2")
            .set("Line Source", from.as_str())
            .set("Line Destination", to.as_str())
            .set("Source Arrow", "None")
            .set("Destination Arrow", "Arrow")
            .set("Text Area 1", message.label.as_str());
        table.push(row);
    }

    table.finish()
}

/// Percentage of the total, rounded half up. An all-zero pie divides by 1.
fn slice_percentage(value: f64, total: f64) -> f64 {
    let total = if total == 0.0 || total.is_nan() { 1.0 } else { total };
    (value / total * 100.0 + 0.5).floor()
}

fn pie_csv(pie: &Pie) -> String {
    let mut table = Table::new(PIE_HEADERS);
    let title = if pie.title().is_empty() { "Pie chart" } else { pie.title() };
    table.push_labelled("1", "Document", title);
    table.push_labelled("2", "Page", "Page 1");

    let total = pie.total();
    let mut ids = RowIds::new();
    for slice in pie.slices() {
        let color = if slice.color.is_empty() {
            crate::model::pie::DEFAULT_SLICE_COLOR
        } else {
            slice.color.as_str()
        };
        let mut row = table.row();
        row.set("Id", ids.take())
            .set("Name", "Progress Bar")
            .set("Shape Library", "Dynamic Shapes")
            .set("Page ID", "2")
            .set("Text Area 1", slice.label.as_str())
            .set("background", "#00000000")
            .set("foreground", color)
            .set("max", "100")
            .set("min", "0")
            .set("thickness", "100")
            .set("value", number_text(slice_percentage(slice.value, total)));
        table.push(row);
    }

    table.finish()
}

fn gantt_csv(gantt: &Gantt) -> String {
    let mut table = Table::new(GANTT_HEADERS);
    let title = if gantt.title().is_empty() { "Gantt chart" } else { gantt.title() };
    table.push_labelled("1", "Document", title);
    table.push_labelled("2", "Page", "Page 1");

    let mut ids = RowIds::new();
    for task in gantt.tasks() {
        let status = gantt_status_label(task.status);
        let mut row = table.row();
        row.set("Id", ids.take())
            .set_nth("Name", 0, "LucidCardBlock")
            .set("Page ID", "2")
            .set("Text Area 1", task.section.as_str())
            .set("Title", task.label.as_str())
            .set("Start Date", task.start.as_str())
            .set("End Date", task.end.as_str())
            .set_nth("Status", 0, status)
            .set_nth("Status", 1, status)
            .set_nth("Name", 1, task.label.as_str());
        table.push(row);
    }

    table.finish()
}

fn journey_csv(journey: &Journey) -> String {
    let mut table = Table::new(JOURNEY_HEADERS);
    let title = if journey.title().is_empty() { "User journey" } else { journey.title() };
    table.push_labelled("1", "Document", title);
    table.push_labelled("2", "Page", "Page 1");

    let mut ids = RowIds::new();
    for step in journey.steps() {
        let mut row = table.row();
        row.set("Id", ids.take())
            .set("Name", "Process")
            .set("Shape Library", "Flowchart Shapes/Containers")
            .set("Page ID", "2")
            .set("Text Area 1", step.task.as_str())
            .set("Text Area 2", format!("Stage: {}", step.section))
            .set("Text Area 3", format!("Score: {}", number_text(step.score)))
            .set("Text Area 4", step.personas.join(", "));
        table.push(row);
    }

    table.finish()
}

#[cfg(test)]
mod tests;
