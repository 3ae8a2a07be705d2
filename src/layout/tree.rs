// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{FamilyTree, MemorialId, RelationId, RelationKind};

/// Geometry knobs for the band layout.
///
/// All distances are in abstract canvas units (the SVG renderer treats them
/// as pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub canvas_width: f32,
    /// Horizontal distance between neighbouring token centres in a row.
    pub h_spacing: f32,
    /// Vertical distance between the three bands.
    pub tier_spacing: f32,
    /// Distance from the canvas top to the parent band.
    pub top_margin: f32,
    pub node_radius: f32,
    /// Length of the two arrowhead wings.
    pub arrow_length: f32,
    /// Half-angle between the shaft and each arrowhead wing, in radians.
    pub arrow_spread: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1080.0,
            h_spacing: 140.0,
            tier_spacing: 180.0,
            top_margin: 120.0,
            node_radius: 28.0,
            arrow_length: 14.0,
            arrow_spread: 0.45,
        }
    }
}

impl LayoutConfig {
    pub fn with_canvas_width(mut self, canvas_width: f32) -> Self {
        self.canvas_width = canvas_width;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An opaque sRGB edge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fallback stroke for anything without a dedicated palette entry.
pub const DEFAULT_EDGE_COLOR: Color = Color::rgb(0x9e, 0x9e, 0x9e);

/// Stroke colour keyed by relation kind.
pub const fn edge_color(kind: RelationKind) -> Color {
    match kind {
        RelationKind::Parent => Color::rgb(0x1e, 0x88, 0xe5),
        RelationKind::Child => Color::rgb(0x43, 0xa0, 0x47),
        RelationKind::Spouse => Color::rgb(0xe5, 0x39, 0x35),
        RelationKind::Sibling => Color::rgb(0xfb, 0x8c, 0x00),
        RelationKind::Grandparent => Color::rgb(0x5e, 0x35, 0xb1),
        RelationKind::Grandchild => Color::rgb(0x00, 0x89, 0x7b),
        RelationKind::UncleAunt => Color::rgb(0x6d, 0x4c, 0x41),
        RelationKind::NephewNiece => Color::rgb(0x03, 0x9b, 0xe5),
        RelationKind::Placeholder => DEFAULT_EDGE_COLOR,
    }
}

/// A filled triangle drawn near the target end of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

/// One straight line between two positioned memorials, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableEdge {
    pub relation_id: RelationId,
    pub kind: RelationKind,
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub arrow: Option<ArrowHead>,
}

impl DrawableEdge {
    pub fn has_arrow(&self) -> bool {
        self.arrow.is_some()
    }
}

/// A memorial's circular token plus its name label.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeToken {
    pub memorial_id: MemorialId,
    pub center: Point,
    pub radius: f32,
    pub label: String,
}

/// The three fixed vertical bands, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Parent,
    Mid,
    Child,
}

impl Tier {
    const fn band_index(self) -> usize {
        match self {
            Self::Parent => 0,
            Self::Mid => 1,
            Self::Child => 2,
        }
    }
}

/// The pure partition of memorials into the three bands.
///
/// Within each row, ids keep first-seen order from a single ascending
/// relation-id scan, so the partition is deterministic for a given tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierAssignment {
    parent_row: Vec<MemorialId>,
    mid_row: Vec<MemorialId>,
    child_row: Vec<MemorialId>,
}

impl TierAssignment {
    pub fn row(&self, tier: Tier) -> &[MemorialId] {
        match tier {
            Tier::Parent => &self.parent_row,
            Tier::Mid => &self.mid_row,
            Tier::Child => &self.child_row,
        }
    }

    pub fn tier_of(&self, memorial_id: MemorialId) -> Option<Tier> {
        for tier in [Tier::Parent, Tier::Mid, Tier::Child] {
            if self.row(tier).contains(&memorial_id) {
                return Some(tier);
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.parent_row.is_empty() && self.mid_row.is_empty() && self.child_row.is_empty()
    }
}

/// Partitions memorials into bands with fixed precedence:
/// parent band wins, then child band, then the mid band catch-all.
///
/// Band membership rules, applied over one relation scan:
/// - parent band: sources of `Parent` relations;
/// - child band: targets of `Parent` relations and targets of `Child`
///   relations (unless already claimed by the parent band);
/// - mid band: both sides of `Spouse` relations, then every remaining
///   endpoint of any relation (placeholder self-loops included, which is how
///   lone memorials still get a token).
///
/// Ids without a memorial record are skipped entirely; memorials that appear
/// in no relation are not placed. Classification is not revisited after
/// assignment: a memorial that is both a parent and a spouse stays in the
/// parent band.
pub fn assign_tiers(tree: &FamilyTree) -> TierAssignment {
    let mut assignment = TierAssignment::default();
    let mut claimed = BTreeSet::<MemorialId>::new();

    let mut claim = |row: &mut Vec<MemorialId>,
                     claimed: &mut BTreeSet<MemorialId>,
                     memorial_id: MemorialId| {
        if tree.memorial(memorial_id).is_none() {
            return;
        }
        if claimed.insert(memorial_id) {
            row.push(memorial_id);
        }
    };

    for relation in tree.relations().values() {
        if relation.kind() == RelationKind::Parent {
            claim(&mut assignment.parent_row, &mut claimed, relation.from_memorial_id());
        }
    }

    for relation in tree.relations().values() {
        match relation.kind() {
            RelationKind::Parent => {
                claim(&mut assignment.child_row, &mut claimed, relation.to_memorial_id());
            }
            RelationKind::Child => {
                claim(&mut assignment.child_row, &mut claimed, relation.to_memorial_id());
            }
            _ => {}
        }
    }

    for relation in tree.relations().values() {
        if relation.kind() == RelationKind::Spouse {
            claim(&mut assignment.mid_row, &mut claimed, relation.from_memorial_id());
            claim(&mut assignment.mid_row, &mut claimed, relation.to_memorial_id());
        }
    }

    for relation in tree.relations().values() {
        claim(&mut assignment.mid_row, &mut claimed, relation.from_memorial_id());
        claim(&mut assignment.mid_row, &mut claimed, relation.to_memorial_id());
    }

    assignment
}

/// A computed layout: token positions, paint-ready tokens, and edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeLayout {
    positions: BTreeMap<MemorialId, Point>,
    tokens: Vec<NodeToken>,
    edges: Vec<DrawableEdge>,
    canvas_width: f32,
    canvas_height: f32,
}

impl TreeLayout {
    pub fn positions(&self) -> &BTreeMap<MemorialId, Point> {
        &self.positions
    }

    pub fn position(&self, memorial_id: MemorialId) -> Option<Point> {
        self.positions.get(&memorial_id).copied()
    }

    pub fn tokens(&self) -> &[NodeToken] {
        &self.tokens
    }

    pub fn edges(&self) -> &[DrawableEdge] {
        &self.edges
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Computes the full band layout for one tree snapshot.
///
/// Total over arbitrary input: degenerate trees produce an empty layout,
/// placeholder relations contribute no edges, and relations whose endpoints
/// do not resolve to a position are skipped silently. The whole layout is
/// recomputed on every call; there is no incremental path.
pub fn compute_layout(tree: &FamilyTree, config: &LayoutConfig) -> TreeLayout {
    let assignment = assign_tiers(tree);
    if assignment.is_empty() {
        return TreeLayout::default();
    }

    let mut layout = TreeLayout {
        canvas_width: config.canvas_width,
        canvas_height: config.top_margin * 2.0 + config.tier_spacing * 2.0,
        ..TreeLayout::default()
    };

    for tier in [Tier::Parent, Tier::Mid, Tier::Child] {
        let row = assignment.row(tier);
        let y = config.top_margin + config.tier_spacing * tier.band_index() as f32;
        let row_width = config.h_spacing * row.len().saturating_sub(1) as f32;
        let x0 = (config.canvas_width - row_width) / 2.0;

        for (index, memorial_id) in row.iter().enumerate() {
            let center = Point::new(x0 + config.h_spacing * index as f32, y);
            layout.positions.insert(*memorial_id, center);

            let label = tree
                .memorial(*memorial_id)
                .map(|memorial| memorial.name().to_owned())
                .unwrap_or_default();
            layout.tokens.push(NodeToken {
                memorial_id: *memorial_id,
                center,
                radius: config.node_radius,
                label,
            });
        }
    }

    for (relation_id, relation) in tree.relations() {
        if relation.is_placeholder() {
            continue;
        }

        let (Some(from), Some(to)) = (
            layout.position(relation.from_memorial_id()),
            layout.position(relation.to_memorial_id()),
        ) else {
            continue;
        };

        let arrow = relation
            .kind()
            .is_directed()
            .then(|| arrow_head(from, to, config))
            .flatten();

        layout.edges.push(DrawableEdge {
            relation_id: *relation_id,
            kind: relation.kind(),
            from,
            to,
            color: edge_color(relation.kind()),
            arrow,
        });
    }

    layout
}

/// Triangle for the target end of `from -> to`, tip pulled back from the
/// target centre by the node radius so it does not overlap the token glyph.
///
/// Returns `None` for zero-length edges, where the shaft angle is undefined.
fn arrow_head(from: Point, to: Point, config: &LayoutConfig) -> Option<ArrowHead> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }

    let angle = dy.atan2(dx);
    let tip = Point::new(
        to.x - config.node_radius * angle.cos(),
        to.y - config.node_radius * angle.sin(),
    );

    let wing = |spread: f32| {
        let back = angle + std::f32::consts::PI + spread;
        Point::new(
            tip.x + config.arrow_length * back.cos(),
            tip.y + config.arrow_length * back.sin(),
        )
    };

    Some(ArrowHead { tip, left: wing(config.arrow_spread), right: wing(-config.arrow_spread) })
}
