// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A family tree is a set of memorial records plus typed kinship relations
//! among them, keyed by stable integer ids.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod memorial;
pub mod relation;
pub mod tree;

pub use ids::{Id, MemorialId, RelationId};
pub use memorial::Memorial;
pub use relation::{ParseRelationKindError, Relation, RelationKind};
pub use tree::FamilyTree;
