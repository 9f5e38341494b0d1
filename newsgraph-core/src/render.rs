// Copyright 2025 Newsgraph Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Render planning
//!
//! Turns a graph model plus its layout into an ordered list of drawing
//! commands. No canvas API is touched here; callers replay the commands
//! against whatever surface they have. Edges come first so node circles
//! paint over them, exactly as a 2D canvas would need.

use serde::Serialize;

use crate::layout::GraphLayout;
use crate::model::GraphModel;

/// Longest node label drawn before truncation.
const NODE_LABEL_MAX: usize = 25;
/// Longest edge label drawn before truncation.
const EDGE_LABEL_MAX: usize = 15;
/// Greedy wrap width for node labels, in characters.
const LABEL_WRAP_CHARS: usize = 16;
/// Gap between the bottom of a node circle and its first label line.
const LABEL_OFFSET: f64 = 15.0;
/// Vertical advance between wrapped label lines.
const LABEL_LINE_HEIGHT: f64 = 13.0;
/// Edge labels float this far above the edge midpoint.
const EDGE_LABEL_LIFT: f64 = 5.0;

/// One primitive drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Straight line between two node centers.
    Edge { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Relation label centered near an edge midpoint.
    EdgeLabel { x: f64, y: f64, text: String },
    /// Filled node circle. `selected` asks for the highlight stroke.
    Node {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
        selected: bool,
    },
    /// One line of a node's wrapped label, centered at `(x, y)`.
    NodeLabel { x: f64, y: f64, text: String },
}

/// Cut `text` to at most `max` characters. No ellipsis is added; the
/// backend already trims labels the same way.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Greedy word wrap at `max_chars` per line.
///
/// Words longer than a line are kept whole rather than split, matching
/// how a measure-and-wrap pass behaves on the canvas. Empty input
/// produces no lines.
pub fn wrap_label(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        if !current.is_empty() && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Plan the draw commands for one frame.
///
/// `selected` is the id of the currently selected entity, if any. Edges
/// whose endpoints are not both placed are skipped silently; the
/// extraction service trims node lists harder than edge lists, so
/// dangling relations are expected input, not an error.
pub fn render(model: &GraphModel, layout: &GraphLayout, selected: Option<&str>) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    for relation in &model.relations {
        let (source, target) = match (layout.get(&relation.source), layout.get(&relation.target)) {
            (Some(s), Some(t)) => (s, t),
            _ => continue,
        };
        commands.push(DrawCommand::Edge {
            x1: source.x,
            y1: source.y,
            x2: target.x,
            y2: target.y,
        });
        if !relation.relationship.is_empty() {
            commands.push(DrawCommand::EdgeLabel {
                x: (source.x + target.x) / 2.0,
                y: (source.y + target.y) / 2.0 - EDGE_LABEL_LIFT,
                text: truncate(&relation.relationship, EDGE_LABEL_MAX),
            });
        }
    }

    for placement in layout.iter() {
        let Some(entity) = model.entity(&placement.id) else {
            continue;
        };
        commands.push(DrawCommand::Node {
            x: placement.x,
            y: placement.y,
            radius: placement.display_radius,
            color: placement.color,
            selected: selected == Some(placement.id.as_str()),
        });
        let label = truncate(&entity.label, NODE_LABEL_MAX);
        let start_y = placement.y + placement.display_radius + LABEL_OFFSET;
        for (line_no, line) in wrap_label(&label, LABEL_WRAP_CHARS).into_iter().enumerate() {
            commands.push(DrawCommand::NodeLabel {
                x: placement.x,
                y: start_y + line_no as f64 * LABEL_LINE_HEIGHT,
                text: line,
            });
        }
    }

    commands
}
