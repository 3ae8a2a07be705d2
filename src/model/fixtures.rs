// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{MemorialId, RelationId};
use super::memorial::Memorial;
use super::relation::{Relation, RelationKind};
use super::tree::FamilyTree;

fn mid(value: u64) -> MemorialId {
    MemorialId::new(value)
}

fn rid(value: u64) -> RelationId {
    RelationId::new(value)
}

/// Two parents, their marriage, and two children.
pub(crate) fn small_family() -> FamilyTree {
    let mut tree = FamilyTree::default();

    tree.memorials_mut().insert(
        mid(1),
        Memorial::new_with("Pyotr", Some("1950-03-10".to_owned()), Some("2015-08-01".to_owned())),
    );
    tree.memorials_mut().insert(
        mid(2),
        Memorial::new_with("Maria", Some("1952-07-21".to_owned()), None),
    );
    tree.memorials_mut().insert(
        mid(3),
        Memorial::new_with("Sergei", Some("1975-01-15".to_owned()), None),
    );
    tree.memorials_mut().insert(
        mid(4),
        Memorial::new_with("Olga", Some("1978-11-30".to_owned()), None),
    );

    tree.relations_mut().insert(rid(1), Relation::new(mid(1), mid(3), RelationKind::Parent));
    tree.relations_mut().insert(rid(2), Relation::new(mid(1), mid(4), RelationKind::Parent));
    tree.relations_mut().insert(rid(3), Relation::new(mid(2), mid(3), RelationKind::Parent));
    tree.relations_mut().insert(rid(4), Relation::new(mid(1), mid(2), RelationKind::Spouse));
    tree.relations_mut().insert(rid(5), Relation::new(mid(3), mid(1), RelationKind::Child));
    tree.relations_mut().insert(rid(6), Relation::new(mid(4), mid(1), RelationKind::Child));

    tree
}

/// A tree holding one connected pair plus a lone placeholder-only memorial.
pub(crate) fn family_with_placeholder() -> FamilyTree {
    let mut tree = FamilyTree::default();

    tree.memorials_mut().insert(mid(1), Memorial::new("Root"));
    tree.memorials_mut().insert(mid(2), Memorial::new("Heir"));
    tree.memorials_mut().insert(mid(9), Memorial::new("Alone"));

    tree.relations_mut().insert(rid(1), Relation::new(mid(1), mid(2), RelationKind::Parent));
    tree.relations_mut().insert(rid(2), Relation::new(mid(2), mid(1), RelationKind::Child));
    tree.relations_mut().insert(rid(3), Relation::new(mid(9), mid(9), RelationKind::Placeholder));

    tree
}
