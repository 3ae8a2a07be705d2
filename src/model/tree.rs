// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::{MemorialId, RelationId};
use super::memorial::Memorial;
use super::relation::Relation;

/// A snapshot of one family tree: memorials keyed by id plus the typed
/// relations among them.
///
/// `BTreeMap` keying makes iteration order (and therefore every derived
/// layout) deterministic. The revision counter supports optimistic
/// concurrency in the ops layer; layout and validation ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FamilyTree {
    memorials: BTreeMap<MemorialId, Memorial>,
    relations: BTreeMap<RelationId, Relation>,
    rev: u64,
}

impl FamilyTree {
    pub fn memorials(&self) -> &BTreeMap<MemorialId, Memorial> {
        &self.memorials
    }

    pub fn memorials_mut(&mut self) -> &mut BTreeMap<MemorialId, Memorial> {
        &mut self.memorials
    }

    pub fn relations(&self) -> &BTreeMap<RelationId, Relation> {
        &self.relations
    }

    pub fn relations_mut(&mut self) -> &mut BTreeMap<RelationId, Relation> {
        &mut self.relations
    }

    pub fn memorial(&self, memorial_id: MemorialId) -> Option<&Memorial> {
        self.memorials.get(&memorial_id)
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }

    /// Whether the memorial participates in at least one real (non-placeholder)
    /// relation. Placeholder self-loops mark presence in a tree but do not
    /// count as connections.
    pub fn has_connections(&self, memorial_id: MemorialId) -> bool {
        self.relations.values().any(|relation| {
            !relation.is_placeholder()
                && (relation.from_memorial_id() == memorial_id
                    || relation.to_memorial_id() == memorial_id)
        })
    }

    /// Ids of relations that touch the memorial on either side.
    pub fn incident_relation_ids(&self, memorial_id: MemorialId) -> Vec<RelationId> {
        self.relations
            .iter()
            .filter(|(_, relation)| {
                relation.from_memorial_id() == memorial_id
                    || relation.to_memorial_id() == memorial_id
            })
            .map(|(relation_id, _)| *relation_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FamilyTree;
    use crate::model::{Memorial, MemorialId, Relation, RelationId, RelationKind};

    fn mid(value: u64) -> MemorialId {
        MemorialId::new(value)
    }

    #[test]
    fn placeholder_relations_do_not_count_as_connections() {
        let mut tree = FamilyTree::default();
        tree.memorials_mut().insert(mid(1), Memorial::new("A"));
        tree.relations_mut().insert(
            RelationId::new(10),
            Relation::new(mid(1), mid(1), RelationKind::Placeholder),
        );

        assert!(!tree.has_connections(mid(1)));
        assert_eq!(tree.incident_relation_ids(mid(1)), vec![RelationId::new(10)]);
    }

    #[test]
    fn real_relations_count_as_connections_on_both_sides() {
        let mut tree = FamilyTree::default();
        tree.memorials_mut().insert(mid(1), Memorial::new("A"));
        tree.memorials_mut().insert(mid(2), Memorial::new("B"));
        tree.relations_mut().insert(
            RelationId::new(10),
            Relation::new(mid(1), mid(2), RelationKind::Spouse),
        );

        assert!(tree.has_connections(mid(1)));
        assert!(tree.has_connections(mid(2)));
        assert!(!tree.has_connections(mid(3)));
    }

    #[test]
    fn rev_starts_at_zero_and_bumps() {
        let mut tree = FamilyTree::default();
        assert_eq!(tree.rev(), 0);
        tree.bump_rev();
        assert_eq!(tree.rev(), 1);
    }
}
