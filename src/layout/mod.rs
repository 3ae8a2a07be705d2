// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Band layout for family trees.
//!
//! Memorials are partitioned into three fixed vertical bands (parent, mid,
//! child) and laid out left-to-right within each band; relations become
//! straight coloured edges, directed ones with a triangular arrowhead.

pub mod tree;

pub use tree::{
    assign_tiers, compute_layout, edge_color, ArrowHead, Color, DrawableEdge, LayoutConfig,
    NodeToken, Point, Tier, TierAssignment, TreeLayout, DEFAULT_EDGE_COLOR,
};
