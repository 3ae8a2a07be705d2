// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for family trees.
//!
//! Operations are applied with optimistic concurrency (revision checks) and
//! produce a minimal delta that callers can use to refresh derived state.
//! A failed batch leaves the tree untouched.

use std::collections::HashSet;
use std::fmt;

use crate::model::{FamilyTree, MemorialId, RelationId, RelationKind};
use crate::validate::{check_age_compatibility, AgeObjection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    AddMemorial {
        memorial_id: MemorialId,
        name: String,
        birth_date: Option<String>,
        death_date: Option<String>,
    },
    UpdateMemorial {
        memorial_id: MemorialId,
        patch: MemorialPatch,
    },
    SetMemorialDates {
        memorial_id: MemorialId,
        birth_date: Option<String>,
        death_date: Option<String>,
    },
    /// Removes the memorial and every relation touching it.
    RemoveMemorial {
        memorial_id: MemorialId,
    },
    AddRelation {
        relation_id: RelationId,
        from_memorial_id: MemorialId,
        to_memorial_id: MemorialId,
        kind: RelationKind,
    },
    RemoveRelation {
        relation_id: RelationId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorialPatch {
    pub name: Option<String>,
}

/// A stable reference to one changed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TreeRef {
    Memorial(MemorialId),
    Relation(RelationId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which objects changed as the result of applying
/// ops. Intentionally coarse: added/removed/updated refs only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<TreeRef>,
    pub removed: Vec<TreeRef>,
    pub updated: Vec<TreeRef>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<TreeRef>,
    removed: HashSet<TreeRef>,
    updated: HashSet<TreeRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, tree_ref: TreeRef) {
        self.removed.remove(&tree_ref);
        self.updated.remove(&tree_ref);
        self.added.insert(tree_ref);
    }

    fn record_removed(&mut self, tree_ref: TreeRef) {
        self.added.remove(&tree_ref);
        self.updated.remove(&tree_ref);
        self.removed.insert(tree_ref);
    }

    fn record_updated(&mut self, tree_ref: TreeRef) {
        if self.added.contains(&tree_ref) || self.removed.contains(&tree_ref) {
            return;
        }
        self.updated.insert(tree_ref);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort_unstable();
        removed.sort_unstable();
        updated.sort_unstable();

        Delta { added, removed, updated }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    MemorialAlreadyExists { memorial_id: MemorialId },
    MemorialNotFound { memorial_id: MemorialId },
    RelationAlreadyExists { relation_id: RelationId },
    RelationNotFound { relation_id: RelationId },
    MissingEndpoint { relation_id: RelationId, memorial_id: MemorialId },
    PlaceholderEndpointsDiffer { relation_id: RelationId, from: MemorialId, to: MemorialId },
    ImplausibleAge { relation_id: RelationId, objection: AgeObjection },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { base_rev, current_rev } => {
                write!(f, "stale base_rev (base_rev={base_rev}, current_rev={current_rev})")
            }
            Self::MemorialAlreadyExists { memorial_id } => {
                write!(f, "memorial {memorial_id} already exists")
            }
            Self::MemorialNotFound { memorial_id } => {
                write!(f, "memorial {memorial_id} not found")
            }
            Self::RelationAlreadyExists { relation_id } => {
                write!(f, "relation {relation_id} already exists")
            }
            Self::RelationNotFound { relation_id } => {
                write!(f, "relation {relation_id} not found")
            }
            Self::MissingEndpoint { relation_id, memorial_id } => {
                write!(f, "relation {relation_id} references unknown memorial {memorial_id}")
            }
            Self::PlaceholderEndpointsDiffer { relation_id, from, to } => {
                write!(
                    f,
                    "relation {relation_id}: placeholder must be self-referential, got {from} -> {to}"
                )
            }
            Self::ImplausibleAge { relation_id, objection } => {
                write!(f, "relation {relation_id}: {objection}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Applies a batch of ops atomically against `base_rev`.
///
/// On success the tree's revision is bumped exactly once for the whole
/// batch; on any error the tree is left exactly as it was.
pub fn apply_ops(
    tree: &mut FamilyTree,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = tree.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: Delta::default() });
    }

    let mut next = tree.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        apply_op(&mut next, op, &mut delta)?;
    }

    next.bump_rev();
    let new_rev = next.rev();
    *tree = next;

    Ok(ApplyResult { new_rev, applied: ops.len(), delta: delta.finish() })
}

fn apply_op(tree: &mut FamilyTree, op: &Op, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    match op {
        Op::AddMemorial { memorial_id, name, birth_date, death_date } => {
            if tree.memorials().contains_key(memorial_id) {
                return Err(ApplyError::MemorialAlreadyExists { memorial_id: *memorial_id });
            }
            let memorial = crate::model::Memorial::new_with(
                name.clone(),
                birth_date.clone(),
                death_date.clone(),
            );
            tree.memorials_mut().insert(*memorial_id, memorial);
            delta.record_added(TreeRef::Memorial(*memorial_id));
        }
        Op::UpdateMemorial { memorial_id, patch } => {
            let memorial = tree
                .memorials_mut()
                .get_mut(memorial_id)
                .ok_or(ApplyError::MemorialNotFound { memorial_id: *memorial_id })?;
            if let Some(name) = &patch.name {
                memorial.set_name(name.clone());
            }
            delta.record_updated(TreeRef::Memorial(*memorial_id));
        }
        Op::SetMemorialDates { memorial_id, birth_date, death_date } => {
            let memorial = tree
                .memorials_mut()
                .get_mut(memorial_id)
                .ok_or(ApplyError::MemorialNotFound { memorial_id: *memorial_id })?;
            memorial.set_birth_date(birth_date.clone());
            memorial.set_death_date(death_date.clone());
            delta.record_updated(TreeRef::Memorial(*memorial_id));
        }
        Op::RemoveMemorial { memorial_id } => {
            if tree.memorials_mut().remove(memorial_id).is_none() {
                return Err(ApplyError::MemorialNotFound { memorial_id: *memorial_id });
            }
            for relation_id in tree.incident_relation_ids(*memorial_id) {
                tree.relations_mut().remove(&relation_id);
                delta.record_removed(TreeRef::Relation(relation_id));
            }
            delta.record_removed(TreeRef::Memorial(*memorial_id));
        }
        Op::AddRelation { relation_id, from_memorial_id, to_memorial_id, kind } => {
            if tree.relations().contains_key(relation_id) {
                return Err(ApplyError::RelationAlreadyExists { relation_id: *relation_id });
            }
            if kind.is_placeholder() && from_memorial_id != to_memorial_id {
                return Err(ApplyError::PlaceholderEndpointsDiffer {
                    relation_id: *relation_id,
                    from: *from_memorial_id,
                    to: *to_memorial_id,
                });
            }

            let source = tree.memorial(*from_memorial_id).ok_or(ApplyError::MissingEndpoint {
                relation_id: *relation_id,
                memorial_id: *from_memorial_id,
            })?;
            let target = tree.memorial(*to_memorial_id).ok_or(ApplyError::MissingEndpoint {
                relation_id: *relation_id,
                memorial_id: *to_memorial_id,
            })?;

            if let Some(objection) =
                check_age_compatibility(source.birth_date(), target.birth_date(), *kind)
            {
                return Err(ApplyError::ImplausibleAge { relation_id: *relation_id, objection });
            }

            let relation =
                crate::model::Relation::new(*from_memorial_id, *to_memorial_id, *kind);
            tree.relations_mut().insert(*relation_id, relation);
            delta.record_added(TreeRef::Relation(*relation_id));
        }
        Op::RemoveRelation { relation_id } => {
            if tree.relations_mut().remove(relation_id).is_none() {
                return Err(ApplyError::RelationNotFound { relation_id: *relation_id });
            }
            delta.record_removed(TreeRef::Relation(*relation_id));
        }
    }

    Ok(())
}
