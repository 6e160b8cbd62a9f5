// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-kind mutation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_flow_op(
    diagram: &mut Diagram,
    op: &FlowOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        FlowOp::AddNode { label, shape, x, y } => {
            let id = diagram.allocate_id();
            let label = label
                .clone()
                .unwrap_or_else(|| format!("{} {id}", crate::model::flowchart::DEFAULT_NODE_LABEL));
            let node = Node::new(id, label).with_shape(*shape).at(*x, *y);
            diagram.flowchart_mut().nodes_mut().push(node);
            delta.record_added(id);
            Ok(())
        }
        FlowOp::UpdateNode { node_id, patch } => {
            let Some(node) = diagram.flowchart_mut().node_mut(*node_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Node, id: *node_id });
            };
            if let Some(label) = &patch.label {
                node.label = label.clone();
            }
            if let Some(shape) = patch.shape {
                node.shape = shape;
            }
            if let Some(fill) = &patch.fill {
                node.fill = fill.clone();
            }
            if let Some(stroke) = &patch.stroke {
                node.stroke = stroke.clone();
            }
            if let Some(text_color) = &patch.text_color {
                node.text_color = text_color.clone();
            }
            if let Some(width) = patch.width {
                node.width = width;
            }
            if let Some(height) = patch.height {
                node.height = height;
            }
            delta.record_updated(*node_id);
            Ok(())
        }
        FlowOp::MoveNode { node_id, x, y } => {
            let Some(node) = diagram.flowchart_mut().node_mut(*node_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Node, id: *node_id });
            };
            node.x = *x;
            node.y = *y;
            delta.record_updated(*node_id);
            Ok(())
        }
        FlowOp::RemoveNodes { node_ids } => {
            for node_id in node_ids {
                let Some(removed_edges) = diagram.flowchart_mut().remove_node(*node_id) else {
                    return Err(ApplyError::NotFound { kind: EntityKind::Node, id: *node_id });
                };
                for edge_id in removed_edges {
                    delta.record_removed(edge_id);
                }
                delta.record_removed(*node_id);
            }
            Ok(())
        }
        FlowOp::AddEdge { from, to, label, arrow } => {
            check_edge_endpoints(diagram, *from, *to)?;
            let id = diagram.allocate_id();
            let edge = Edge::new(id, *from, *to).with_arrow(*arrow).with_label(label.clone());
            diagram.flowchart_mut().edges_mut().push(edge);
            delta.record_added(id);
            Ok(())
        }
        FlowOp::UpdateEdge { edge_id, patch } => {
            let Some(edge) = diagram.flowchart().edge(*edge_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Edge, id: *edge_id });
            };
            let from = patch.from.unwrap_or(edge.from);
            let to = patch.to.unwrap_or(edge.to);
            if patch.from.is_some() || patch.to.is_some() {
                check_edge_endpoints(diagram, from, to)?;
            }

            let Some(edge) = diagram.flowchart_mut().edge_mut(*edge_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Edge, id: *edge_id });
            };
            edge.from = from;
            edge.to = to;
            if let Some(label) = &patch.label {
                edge.label = label.clone();
            }
            if let Some(stroke) = &patch.stroke {
                edge.stroke = stroke.clone();
            }
            if let Some(arrow) = patch.arrow {
                edge.arrow = arrow;
            }
            delta.record_updated(*edge_id);
            Ok(())
        }
        FlowOp::RemoveEdge { edge_id } => {
            let edges = diagram.flowchart_mut().edges_mut();
            let Some(index) = edges.iter().position(|edge| edge.id == *edge_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Edge, id: *edge_id });
            };
            edges.remove(index);
            delta.record_removed(*edge_id);
            Ok(())
        }
    }
}

fn check_edge_endpoints(diagram: &Diagram, from: EntityId, to: EntityId) -> Result<(), ApplyError> {
    for endpoint in [from, to] {
        if diagram.flowchart().node(endpoint).is_none() {
            return Err(ApplyError::NotFound { kind: EntityKind::Node, id: endpoint });
        }
    }
    if from == to {
        return Err(ApplyError::SelfLoop { kind: EntityKind::Edge, endpoint: from });
    }
    Ok(())
}

fn apply_seq_op(
    diagram: &mut Diagram,
    op: &SeqOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        SeqOp::AddParticipant { name } => {
            let id = diagram.allocate_id();
            let name = name.clone().unwrap_or_else(|| {
                format!("{} {id}", crate::model::sequence::DEFAULT_PARTICIPANT_NAME)
            });
            diagram.sequence_mut().participants_mut().push(Participant::new(id, name));
            delta.record_added(id);
            Ok(())
        }
        SeqOp::RenameParticipant { participant_id, name } => {
            let Some(participant) = diagram.sequence_mut().participant_mut(*participant_id) else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Participant,
                    id: *participant_id,
                });
            };
            participant.name = name.clone();
            delta.record_updated(*participant_id);
            Ok(())
        }
        SeqOp::RemoveParticipant { participant_id } => {
            let Some(removed_messages) = diagram.sequence_mut().remove_participant(*participant_id)
            else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Participant,
                    id: *participant_id,
                });
            };
            for message_id in removed_messages {
                delta.record_removed(message_id);
            }
            delta.record_removed(*participant_id);
            Ok(())
        }
        SeqOp::AddMessage { from, to, label, line } => {
            check_message_endpoints(diagram, *from, *to)?;
            let id = diagram.allocate_id();
            let mut message = Message::new(id, *from, *to);
            message.label = label.clone();
            message.line = *line;
            diagram.sequence_mut().messages_mut().push(message);
            delta.record_added(id);
            Ok(())
        }
        SeqOp::UpdateMessage { message_id, patch } => {
            let Some(message) =
                diagram.sequence().messages().iter().find(|message| message.id == *message_id)
            else {
                return Err(ApplyError::NotFound { kind: EntityKind::Message, id: *message_id });
            };
            let from = patch.from.unwrap_or(message.from);
            let to = patch.to.unwrap_or(message.to);
            if patch.from.is_some() || patch.to.is_some() {
                check_message_endpoints(diagram, from, to)?;
            }

            let Some(message) = diagram.sequence_mut().message_mut(*message_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Message, id: *message_id });
            };
            message.from = from;
            message.to = to;
            if let Some(label) = &patch.label {
                message.label = label.clone();
            }
            if let Some(line) = patch.line {
                message.line = line;
            }
            delta.record_updated(*message_id);
            Ok(())
        }
        SeqOp::RemoveMessage { message_id } => {
            let messages = diagram.sequence_mut().messages_mut();
            let Some(index) = messages.iter().position(|message| message.id == *message_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Message, id: *message_id });
            };
            messages.remove(index);
            delta.record_removed(*message_id);
            Ok(())
        }
    }
}

fn check_message_endpoints(
    diagram: &Diagram,
    from: EntityId,
    to: EntityId,
) -> Result<(), ApplyError> {
    for endpoint in [from, to] {
        if diagram.sequence().participant(endpoint).is_none() {
            return Err(ApplyError::NotFound { kind: EntityKind::Participant, id: endpoint });
        }
    }
    if from == to {
        return Err(ApplyError::SelfLoop { kind: EntityKind::Message, endpoint: from });
    }
    Ok(())
}

fn apply_pie_op(
    diagram: &mut Diagram,
    op: &PieOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        PieOp::SetTitle(title) => {
            diagram.pie_mut().set_title(title.clone());
            Ok(())
        }
        PieOp::AddSlice { label, value } => {
            let id = diagram.allocate_id();
            let label = label
                .clone()
                .unwrap_or_else(|| format!("{} {id}", crate::model::pie::DEFAULT_SLICE_LABEL));
            let mut slice = PieSlice::new(id, label, *value);
            slice.color = palette_color(diagram.pie().slices().len()).to_owned();
            diagram.pie_mut().slices_mut().push(slice);
            delta.record_added(id);
            Ok(())
        }
        PieOp::UpdateSlice { slice_id, patch } => {
            let Some(slice) = diagram.pie_mut().slice_mut(*slice_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Slice, id: *slice_id });
            };
            if let Some(label) = &patch.label {
                slice.label = label.clone();
            }
            if let Some(value) = patch.value {
                slice.value = value;
            }
            if let Some(color) = &patch.color {
                slice.color = color.clone();
            }
            delta.record_updated(*slice_id);
            Ok(())
        }
        PieOp::RemoveSlice { slice_id } => {
            let slices = diagram.pie_mut().slices_mut();
            let Some(index) = slices.iter().position(|slice| slice.id == *slice_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Slice, id: *slice_id });
            };
            slices.remove(index);
            delta.record_removed(*slice_id);
            Ok(())
        }
    }
}

fn apply_gantt_op(
    diagram: &mut Diagram,
    op: &GanttOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    use crate::model::gantt::{DEFAULT_TASK_LABEL, DEFAULT_TASK_SECTION};

    match op {
        GanttOp::SetTitle(title) => {
            diagram.gantt_mut().set_title(title.clone());
            Ok(())
        }
        GanttOp::SetDateFormat(format) => {
            diagram.gantt_mut().set_date_format(format.clone());
            Ok(())
        }
        GanttOp::AddTask { section, label } => {
            let id = diagram.allocate_id();
            let section = section.clone().unwrap_or_else(|| DEFAULT_TASK_SECTION.to_owned());
            let label = label.clone().unwrap_or_else(|| format!("{DEFAULT_TASK_LABEL} {id}"));
            diagram.gantt_mut().tasks_mut().push(GanttTask::new(id, section, label));
            delta.record_added(id);
            Ok(())
        }
        GanttOp::UpdateTask { task_id, patch } => {
            let Some(task) = diagram.gantt_mut().task_mut(*task_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Task, id: *task_id });
            };
            if let Some(section) = &patch.section {
                task.section = section.clone();
            }
            if let Some(label) = &patch.label {
                task.label = label.clone();
            }
            if let Some(start) = &patch.start {
                task.start = start.clone();
            }
            if let Some(end) = &patch.end {
                task.end = end.clone();
            }
            if let Some(status) = patch.status {
                task.status = status;
            }
            delta.record_updated(*task_id);
            Ok(())
        }
        GanttOp::RemoveTask { task_id } => {
            let tasks = diagram.gantt_mut().tasks_mut();
            let Some(index) = tasks.iter().position(|task| task.id == *task_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Task, id: *task_id });
            };
            tasks.remove(index);
            delta.record_removed(*task_id);
            Ok(())
        }
    }
}

fn apply_journey_op(
    diagram: &mut Diagram,
    op: &JourneyOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    use crate::model::journey::{DEFAULT_STEP_SECTION, DEFAULT_STEP_TASK};

    match op {
        JourneyOp::SetTitle(title) => {
            diagram.journey_mut().set_title(title.clone());
            Ok(())
        }
        JourneyOp::AddStep { section, task } => {
            let id = diagram.allocate_id();
            let section = section.clone().unwrap_or_else(|| DEFAULT_STEP_SECTION.to_owned());
            let task = task.clone().unwrap_or_else(|| format!("{DEFAULT_STEP_TASK} {id}"));
            diagram.journey_mut().steps_mut().push(JourneyStep::new(id, section, task));
            delta.record_added(id);
            Ok(())
        }
        JourneyOp::UpdateStep { step_id, patch } => {
            let Some(step) = diagram.journey_mut().step_mut(*step_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Step, id: *step_id });
            };
            if let Some(section) = &patch.section {
                step.section = section.clone();
            }
            if let Some(task) = &patch.task {
                step.task = task.clone();
            }
            if let Some(score) = patch.score {
                step.score = score;
            }
            if let Some(personas) = &patch.personas {
                step.personas = personas.clone();
            }
            delta.record_updated(*step_id);
            Ok(())
        }
        JourneyOp::RemoveStep { step_id } => {
            let steps = diagram.journey_mut().steps_mut();
            let Some(index) = steps.iter().position(|step| step.id == *step_id) else {
                return Err(ApplyError::NotFound { kind: EntityKind::Step, id: *step_id });
            };
            steps.remove(index);
            delta.record_removed(*step_id);
            Ok(())
        }
    }
}
