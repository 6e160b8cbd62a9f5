// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::EntityId;

pub const DEFAULT_NODE_LABEL: &str = "Node";
pub const DEFAULT_NODE_WIDTH: f64 = 160.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 64.0;
pub const DEFAULT_NODE_FILL: &str = "#F2F2F2";
pub const DEFAULT_NODE_STROKE: &str = "#333333";
pub const DEFAULT_NODE_TEXT_COLOR: &str = "#111111";
pub const DEFAULT_EDGE_STROKE: &str = "#444444";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Flowchart {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Flowchart {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    pub fn node(&self, id: EntityId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: EntityId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    pub fn edge(&self, id: EntityId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn edge_mut(&mut self, id: EntityId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|edge| edge.id == id)
    }

    /// Edges whose endpoints both reference existing nodes, in insertion order.
    pub fn connected_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|edge| self.node(edge.from).is_some() && self.node(edge.to).is_some())
    }

    /// Removes a node and every edge that references it. Returns the removed edge ids, or `None`
    /// when the node does not exist.
    pub fn remove_node(&mut self, id: EntityId) -> Option<Vec<EntityId>> {
        let index = self.nodes.iter().position(|node| node.id == id)?;
        self.nodes.remove(index);

        let removed = self
            .edges
            .iter()
            .filter(|edge| edge.touches(id))
            .map(|edge| edge.id)
            .collect::<Vec<_>>();
        self.edges.retain(|edge| !edge.touches(id));
        Some(removed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Process,
    Decision,
    Terminator,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Terminator => "terminator",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "process" => Some(Self::Process),
            "decision" => Some(Self::Decision),
            "terminator" => Some(Self::Terminator),
            _ => None,
        }
    }
}

/// Line/arrowhead style of a flowchart edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    #[default]
    Arrow,
    None,
    Dashed,
    Thick,
    Double,
}

impl ArrowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::None => "none",
            Self::Dashed => "dashed",
            Self::Thick => "thick",
            Self::Double => "double",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "arrow" => Some(Self::Arrow),
            "none" => Some(Self::None),
            "dashed" => Some(Self::Dashed),
            "thick" => Some(Self::Thick),
            "double" => Some(Self::Double),
            _ => Option::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: EntityId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shape: NodeShape,
    pub fill: String,
    pub stroke: String,
    pub text_color: String,
}

impl Node {
    /// A process node at the origin with the default size and colors.
    pub fn new(id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            x: 0.0,
            y: 0.0,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            shape: NodeShape::default(),
            fill: DEFAULT_NODE_FILL.to_owned(),
            stroke: DEFAULT_NODE_STROKE.to_owned(),
            text_color: DEFAULT_NODE_TEXT_COLOR.to_owned(),
        }
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Edge {
    pub id: EntityId,
    pub from: EntityId,
    pub to: EntityId,
    pub label: String,
    pub stroke: String,
    pub arrow: ArrowKind,
}

impl Edge {
    pub fn new(id: EntityId, from: EntityId, to: EntityId) -> Self {
        Self {
            id,
            from,
            to,
            label: String::new(),
            stroke: DEFAULT_EDGE_STROKE.to_owned(),
            arrow: ArrowKind::default(),
        }
    }

    pub fn with_arrow(mut self, arrow: ArrowKind) -> Self {
        self.arrow = arrow;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn touches(&self, node_id: EntityId) -> bool {
        self.from == node_id || self.to == node_id
    }
}
