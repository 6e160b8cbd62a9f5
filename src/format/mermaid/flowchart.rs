// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use log::debug;

use super::alias::{Aliases, IdScope};
use super::escape::{escape_text, find_unescaped, unescape_text};
use super::lines::{keyword_rest, split_word, Body};
use crate::model::{ArrowKind, Edge, EntityId, Flowchart, Node, NodeShape};

const GRID_COLUMNS: usize = 4;
const GRID_ORIGIN: (f64, f64) = (180.0, 140.0);
const GRID_GAP: (f64, f64) = (220.0, 140.0);

/// Arrow tokens, longest first so `<-->` wins over `-->`.
const ARROW_TOKENS: [(&str, ArrowKind); 5] = [
    ("<-->", ArrowKind::Double),
    ("-.->", ArrowKind::Dashed),
    ("-->", ArrowKind::Arrow),
    ("---", ArrowKind::None),
    ("==>", ArrowKind::Thick),
];

pub(super) fn arrow_token(arrow: ArrowKind) -> &'static str {
    ARROW_TOKENS
        .iter()
        .find(|(_, kind)| *kind == arrow)
        .map_or("-->", |(token, _)| token)
}

fn strip_arrow(text: &str) -> Option<(ArrowKind, &str)> {
    ARROW_TOKENS
        .iter()
        .find_map(|(token, kind)| text.strip_prefix(token).map(|rest| (*kind, rest)))
}

fn is_token_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '[' | ']' | '{' | '}' | '(' | ')' | '"' | '|')
}

/// Leading node token of `text`. Stops at whitespace, bracket/quote/pipe characters, and at the
/// start of an arrow token so `A-->B` splits as expected.
fn split_token(text: &str) -> (&str, &str) {
    for (idx, ch) in text.char_indices() {
        if !is_token_char(ch) || (idx > 0 && strip_arrow(&text[idx..]).is_some()) {
            return (&text[..idx], &text[idx..]);
        }
    }
    (text, "")
}

#[derive(Debug, Clone, PartialEq)]
enum FlowLine<'a> {
    Style { token: &'a str, declarations: &'a str },
    Edge { from: &'a str, arrow: ArrowKind, label: Option<&'a str>, to: &'a str },
    Node { token: &'a str, label: &'a str, shape: NodeShape },
}

fn classify(line: &str) -> Option<FlowLine<'_>> {
    if let Some(rest) = keyword_rest(line, "style") {
        let (token, declarations) = split_word(rest);
        return (!token.is_empty() && !declarations.is_empty())
            .then_some(FlowLine::Style { token, declarations });
    }

    let (token, rest) = split_token(line);
    if token.is_empty() {
        return None;
    }
    let rest = rest.trim_start();

    if let Some((arrow, after)) = strip_arrow(rest) {
        return classify_edge(token, arrow, after.trim_start());
    }

    let (label, shape) = if let Some(inner) = rest.strip_prefix('{') {
        (inner.strip_suffix('}')?, NodeShape::Decision)
    } else if let Some(inner) = rest.strip_prefix("([") {
        (inner.strip_suffix("])")?, NodeShape::Terminator)
    } else if let Some(inner) =
        rest.strip_prefix("[\"").and_then(|inner| inner.strip_suffix("\"]"))
    {
        (inner, NodeShape::Process)
    } else if let Some(inner) = rest.strip_prefix('[') {
        (inner.strip_suffix(']')?, NodeShape::Process)
    } else {
        return None;
    };
    Some(FlowLine::Node { token, label, shape })
}

fn classify_edge<'a>(from: &'a str, arrow: ArrowKind, rest: &'a str) -> Option<FlowLine<'a>> {
    let (label, rest) = match rest.strip_prefix('|') {
        Some(after) => {
            let end = find_unescaped(after, '|')?;
            (Some(&after[..end]), after[end + 1..].trim_start())
        }
        None => (None, rest),
    };
    let (to, tail) = split_token(rest);
    (!to.is_empty() && tail.is_empty()).then_some(FlowLine::Edge { from, arrow, label, to })
}

struct FlowchartBuilder<'p> {
    scope: &'p mut IdScope,
    aliases: Aliases,
    index: HashMap<EntityId, usize>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl FlowchartBuilder<'_> {
    fn ensure_node(&mut self, token: &str, declared: Option<(String, NodeShape)>) -> EntityId {
        let (id, new) = self.aliases.resolve(self.scope, token);
        if new {
            self.index.insert(id, self.nodes.len());
            let (label, shape) = declared.unwrap_or_else(|| (token.to_owned(), NodeShape::Process));
            self.nodes.push(Node::new(id, label).with_shape(shape));
        } else if let Some((label, shape)) = declared {
            if let Some(node) = self.index.get(&id).and_then(|idx| self.nodes.get_mut(*idx)) {
                node.label = label;
                node.shape = shape;
            }
        }
        id
    }
}

/// Parses flowchart body lines (header already removed).
///
/// Supported lines, in priority order:
/// - `style <token> fill:<c>,stroke:<c>,color:<c>` (applied after all nodes exist)
/// - `<token> <arrow> [|label|] <token>` with arrows `-->`, `---`, `-.->`, `==>`, `<-->`
/// - `<token>{label}`, `<token>([label])`, `<token>["label"]`, `<token>[label]`
///
/// Anything else is skipped. Nodes that already existed in `previous` (by id) keep their geometry;
/// new nodes are placed on a four-column grid in order of first appearance.
pub(super) fn parse_flowchart(
    lines: &[&str],
    scope: &mut IdScope,
    previous: &Flowchart,
) -> Flowchart {
    let mut builder = FlowchartBuilder {
        scope,
        aliases: Aliases::new('N'),
        index: HashMap::new(),
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    let mut styles = Vec::new();

    for &line in lines {
        match classify(line) {
            Some(FlowLine::Style { token, declarations }) => styles.push((token, declarations)),
            Some(FlowLine::Edge { from, arrow, label, to }) => {
                let from = builder.ensure_node(from, None);
                let to = builder.ensure_node(to, None);
                let id = builder.scope.fresh();
                let mut edge = Edge::new(id, from, to).with_arrow(arrow);
                if let Some(label) = label {
                    edge.label = unescape_text(label);
                }
                builder.edges.push(edge);
            }
            Some(FlowLine::Node { token, label, shape }) => {
                builder.ensure_node(token, Some((unescape_text(label), shape)));
            }
            None => debug!(line; "skipping unrecognized flowchart line"),
        }
    }

    let FlowchartBuilder { aliases, mut nodes, edges, .. } = builder;

    for (idx, node) in nodes.iter_mut().enumerate() {
        match previous.node(node.id) {
            Some(old) => {
                node.x = old.x;
                node.y = old.y;
                node.width = old.width;
                node.height = old.height;
            }
            None => {
                node.x = GRID_ORIGIN.0 + (idx % GRID_COLUMNS) as f64 * GRID_GAP.0;
                node.y = GRID_ORIGIN.1 + (idx / GRID_COLUMNS) as f64 * GRID_GAP.1;
            }
        }
    }

    for (token, declarations) in styles {
        let Some(id) = aliases.get(token) else {
            debug!(token; "style line targets an unknown node");
            continue;
        };
        if let Some(node) = nodes.iter_mut().find(|node| node.id == id) {
            apply_style(node, declarations);
        }
    }

    Flowchart::new(nodes, edges)
}

fn apply_style(node: &mut Node, declarations: &str) {
    for declaration in declarations.split(',') {
        let mut parts = declaration.split(':').map(str::trim);
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key {
            "fill" => node.fill = value.to_owned(),
            "stroke" => node.stroke = value.to_owned(),
            "color" => node.text_color = value.to_owned(),
            _ => {}
        }
    }
}

fn node_syntax(shape: NodeShape, label: &str) -> String {
    match shape {
        NodeShape::Decision => format!("{{{label}}}"),
        NodeShape::Terminator => format!("([{label}])"),
        NodeShape::Process => format!("[\"{label}\"]"),
    }
}

/// Writes nodes, then edges between existing nodes, then one `style` line per node.
pub(super) fn write_flowchart(flowchart: &Flowchart) -> String {
    let mut body = Body::new("flowchart TD");

    for node in flowchart.nodes() {
        body.push(format!("N{}{}", node.id, node_syntax(node.shape, &escape_text(&node.label))));
    }

    for edge in flowchart.connected_edges() {
        let arrow = arrow_token(edge.arrow);
        if edge.label.is_empty() {
            body.push(format!("N{} {arrow} N{}", edge.from, edge.to));
        } else {
            let label = escape_text(&edge.label);
            body.push(format!("N{} {arrow}|{label}| N{}", edge.from, edge.to));
        }
    }

    for node in flowchart.nodes() {
        body.push(format!(
            "style N{} fill:{},stroke:{},color:{}",
            node.id, node.fill, node.stroke, node.text_color
        ));
    }

    body.finish()
}
