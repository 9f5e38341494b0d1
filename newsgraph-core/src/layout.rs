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

//! Radial layout
//!
//! Places the main entity at the canvas center and distributes satellite
//! entities at evenly spaced angles over two concentric orbit bands,
//! alternating band by satellite index. The layout is a pure function of
//! the entity list and canvas size, so the same graph always lands in
//! the same pixels.

use serde::Serialize;

use crate::entity::EntityKind;
use crate::model::GraphModel;

/// Hit-test radius of the central main node, in canvas units.
pub const MAIN_HIT_RADIUS: f64 = 35.0;
/// Hit-test radius of every satellite node.
pub const SATELLITE_HIT_RADIUS: f64 = 25.0;
/// Outer orbit radius used for graphs with more than [`DENSE_THRESHOLD`]
/// entities.
const ORBIT_DENSE: f64 = 220.0;
/// Outer orbit radius for small graphs.
const ORBIT_SPARSE: f64 = 180.0;
/// Entity count above which the wider orbit is used.
const DENSE_THRESHOLD: usize = 5;
/// Inner band radius as a fraction of the outer band.
const INNER_BAND_RATIO: f64 = 0.65;
/// Vertical room reserved below a node for its wrapped label.
const LABEL_CLEARANCE: f64 = 45.0;
/// Orbits never collapse below this, however small the canvas.
const MIN_ORBIT: f64 = 40.0;
/// Upper bound on the decorative radius enlargement.
const JITTER_MAX: u64 = 6;

/// Tuning knobs for [`radial_layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    /// Enlarge satellite display radii by a small id-derived amount.
    ///
    /// Purely decorative: hit testing always uses the fixed base radius.
    pub jitter: bool,
}

impl LayoutOptions {
    /// Options with decorative radius jitter enabled.
    pub fn jittered() -> Self {
        Self { jitter: true }
    }
}

/// Where one entity ended up on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePlacement {
    /// Entity id this placement belongs to.
    pub id: String,
    /// Center x coordinate.
    pub x: f64,
    /// Center y coordinate.
    pub y: f64,
    /// Radius used for hit testing. Fixed per node tier.
    pub hit_radius: f64,
    /// Radius used when drawing. At least `hit_radius`, never more than
    /// `hit_radius + 6`.
    pub display_radius: f64,
    /// Fill color for the node circle.
    pub color: &'static str,
}

/// A computed layout: one placement per entity, in entity order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphLayout {
    placements: Vec<NodePlacement>,
}

impl GraphLayout {
    /// Wrap a list of placements. Order is preserved and decides
    /// hit-test priority.
    pub fn new(placements: Vec<NodePlacement>) -> Self {
        Self { placements }
    }

    /// Placement for a given entity id.
    pub fn get(&self, id: &str) -> Option<&NodePlacement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Iterate placements in entity order.
    pub fn iter(&self) -> impl Iterator<Item = &NodePlacement> {
        self.placements.iter()
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Topmost node containing the point `(x, y)`, if any.
    ///
    /// Nodes are probed in entity order and the first hit wins, so when
    /// circles overlap the earlier entity takes priority. Only
    /// `hit_radius` counts; decorative enlargement never changes what a
    /// click selects.
    pub fn node_at(&self, x: f64, y: f64) -> Option<&NodePlacement> {
        self.placements
            .iter()
            .find(|p| (x - p.x).hypot(y - p.y) <= p.hit_radius)
    }
}

/// Decorative enlargement for a satellite, derived from its id so the
/// same node always gets the same size.
fn radius_jitter(id: &str) -> f64 {
    (seahash::hash(id.as_bytes()) % (JITTER_MAX + 1)) as f64
}

/// Compute the radial layout for `model` on a `width` x `height` canvas.
///
/// The main entity (or the first entity, when none is marked main) sits
/// at the canvas center. The remaining `m` entities are placed at angles
/// `k / m * 2π` for `k = 1..=m`, counted clockwise from east, hopping
/// between an outer and an inner orbit band by index parity. Both bands
/// shrink as needed so nodes and their labels stay on the canvas.
pub fn radial_layout(
    model: &GraphModel,
    width: f64,
    height: f64,
    options: LayoutOptions,
) -> GraphLayout {
    if model.entities.is_empty() {
        return GraphLayout::default();
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;

    let center_idx = model
        .entities
        .iter()
        .position(|e| e.is_main())
        .unwrap_or(0);
    let satellite_count = model.entities.len() - 1;

    let base_orbit = if model.entities.len() > DENSE_THRESHOLD {
        ORBIT_DENSE
    } else {
        ORBIT_SPARSE
    };
    let max_orbit = width.min(height) / 2.0 - SATELLITE_HIT_RADIUS - LABEL_CLEARANCE;
    let outer_orbit = base_orbit.min(max_orbit).max(MIN_ORBIT);
    let inner_orbit = outer_orbit * INNER_BAND_RATIO;

    let mut placements = Vec::with_capacity(model.entities.len());
    let mut satellite_index = 0usize;

    for (idx, entity) in model.entities.iter().enumerate() {
        let placement = if idx == center_idx {
            NodePlacement {
                id: entity.id.clone(),
                x: center_x,
                y: center_y,
                hit_radius: MAIN_HIT_RADIUS,
                display_radius: MAIN_HIT_RADIUS,
                color: EntityKind::Main.color(),
            }
        } else {
            satellite_index += 1;
            let angle =
                satellite_index as f64 / satellite_count as f64 * std::f64::consts::TAU;
            let orbit = if satellite_index % 2 == 1 {
                outer_orbit
            } else {
                inner_orbit
            };
            let display_radius = if options.jitter {
                SATELLITE_HIT_RADIUS + radius_jitter(&entity.id)
            } else {
                SATELLITE_HIT_RADIUS
            };
            NodePlacement {
                id: entity.id.clone(),
                x: center_x + orbit * angle.cos(),
                y: center_y + orbit * angle.sin(),
                hit_radius: SATELLITE_HIT_RADIUS,
                display_radius,
                color: entity.kind.color(),
            }
        };
        placements.push(placement);
    }

    GraphLayout::new(placements)
}
