// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON snapshot format for a family tree.
//!
//! The document mirrors what the upstream record store hands out:
//!
//! ```json
//! {
//!   "memorials": [{ "id": 1, "name": "Anna", "birth_date": "1931-05-02" }],
//!   "relations": [{ "id": 1, "from": 1, "to": 2, "kind": "parent" }]
//! }
//! ```
//!
//! Parsing validates id uniqueness, kind tags, and the placeholder
//! self-reference invariant. Dangling relation endpoints are deliberately
//! *not* rejected: the layout engine treats them as unrenderable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    FamilyTree, Memorial, MemorialId, ParseRelationKindError, Relation, RelationId, RelationKind,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct TreeDoc {
    #[serde(default)]
    memorials: Vec<MemorialDoc>,
    #[serde(default)]
    relations: Vec<RelationDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MemorialDoc {
    id: u64,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    death_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RelationDoc {
    id: u64,
    from: u64,
    to: u64,
    kind: String,
}

#[derive(Debug)]
pub enum TreeParseError {
    Json(serde_json::Error),
    DuplicateMemorialId { memorial_id: MemorialId },
    DuplicateRelationId { relation_id: RelationId },
    UnknownRelationKind { relation_id: RelationId, source: ParseRelationKindError },
    PlaceholderEndpointsDiffer { relation_id: RelationId, from: MemorialId, to: MemorialId },
}

impl fmt::Display for TreeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "invalid tree document: {source}"),
            Self::DuplicateMemorialId { memorial_id } => {
                write!(f, "duplicate memorial id {memorial_id}")
            }
            Self::DuplicateRelationId { relation_id } => {
                write!(f, "duplicate relation id {relation_id}")
            }
            Self::UnknownRelationKind { relation_id, source } => {
                write!(f, "relation {relation_id}: {source}")
            }
            Self::PlaceholderEndpointsDiffer { relation_id, from, to } => {
                write!(
                    f,
                    "relation {relation_id}: placeholder must be self-referential, got {from} -> {to}"
                )
            }
        }
    }
}

impl std::error::Error for TreeParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            Self::UnknownRelationKind { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum TreeExportError {
    Json(serde_json::Error),
}

impl fmt::Display for TreeExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "failed to export tree document: {source}"),
        }
    }
}

impl std::error::Error for TreeExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
        }
    }
}

/// Parses one snapshot document into a [`FamilyTree`] at revision zero.
pub fn parse_tree(src: &str) -> Result<FamilyTree, TreeParseError> {
    let doc: TreeDoc = serde_json::from_str(src).map_err(TreeParseError::Json)?;

    let mut tree = FamilyTree::default();

    for memorial in doc.memorials {
        let memorial_id = MemorialId::new(memorial.id);
        let record =
            Memorial::new_with(memorial.name, memorial.birth_date, memorial.death_date);
        if tree.memorials_mut().insert(memorial_id, record).is_some() {
            return Err(TreeParseError::DuplicateMemorialId { memorial_id });
        }
    }

    for relation in doc.relations {
        let relation_id = RelationId::new(relation.id);
        let from = MemorialId::new(relation.from);
        let to = MemorialId::new(relation.to);

        let kind: RelationKind = relation
            .kind
            .parse()
            .map_err(|source| TreeParseError::UnknownRelationKind { relation_id, source })?;

        if kind.is_placeholder() && from != to {
            return Err(TreeParseError::PlaceholderEndpointsDiffer { relation_id, from, to });
        }

        let record = Relation::new(from, to, kind);
        if tree.relations_mut().insert(relation_id, record).is_some() {
            return Err(TreeParseError::DuplicateRelationId { relation_id });
        }
    }

    Ok(tree)
}

/// Exports a tree as a pretty-printed snapshot document.
///
/// Records are emitted in ascending id order, so export is deterministic and
/// diff-friendly.
pub fn export_tree(tree: &FamilyTree) -> Result<String, TreeExportError> {
    let doc = TreeDoc {
        memorials: tree
            .memorials()
            .iter()
            .map(|(memorial_id, memorial)| MemorialDoc {
                id: memorial_id.value(),
                name: memorial.name().to_owned(),
                birth_date: memorial.birth_date().map(ToOwned::to_owned),
                death_date: memorial.death_date().map(ToOwned::to_owned),
            })
            .collect(),
        relations: tree
            .relations()
            .iter()
            .map(|(relation_id, relation)| RelationDoc {
                id: relation_id.value(),
                from: relation.from_memorial_id().value(),
                to: relation.to_memorial_id().value(),
                kind: relation.kind().as_str().to_owned(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&doc).map_err(TreeExportError::Json)
}

#[cfg(test)]
mod tests {
    use super::{export_tree, parse_tree, TreeParseError};
    use crate::model::{MemorialId, RelationId, RelationKind};

    #[test]
    fn parses_a_minimal_document() {
        let tree = parse_tree(
            r#"{
                "memorials": [
                    { "id": 1, "name": "Anna", "birth_date": "1931-05-02" },
                    { "id": 2, "name": "Boris" }
                ],
                "relations": [
                    { "id": 10, "from": 1, "to": 2, "kind": "parent" }
                ]
            }"#,
        )
        .expect("tree");

        assert_eq!(tree.memorials().len(), 2);
        assert_eq!(tree.relations().len(), 1);
        assert_eq!(tree.rev(), 0);

        let anna = tree.memorial(MemorialId::new(1)).expect("anna");
        assert_eq!(anna.name(), "Anna");
        assert_eq!(anna.birth_date(), Some("1931-05-02"));
        assert_eq!(anna.death_date(), None);

        let relation = tree.relations().get(&RelationId::new(10)).expect("relation");
        assert_eq!(relation.kind(), RelationKind::Parent);
    }

    #[test]
    fn empty_document_parses_to_an_empty_tree() {
        let tree = parse_tree("{}").expect("tree");
        assert!(tree.memorials().is_empty());
        assert!(tree.relations().is_empty());
    }

    #[test]
    fn dangling_relation_endpoints_are_not_a_parse_error() {
        let tree = parse_tree(
            r#"{
                "memorials": [{ "id": 1, "name": "Anna" }],
                "relations": [{ "id": 10, "from": 1, "to": 99, "kind": "spouse" }]
            }"#,
        )
        .expect("tree");
        assert_eq!(tree.relations().len(), 1);
    }

    #[test]
    fn rejects_duplicate_memorial_ids() {
        let err = parse_tree(
            r#"{
                "memorials": [
                    { "id": 1, "name": "Anna" },
                    { "id": 1, "name": "Also Anna" }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TreeParseError::DuplicateMemorialId { memorial_id } if memorial_id == MemorialId::new(1)
        ));
    }

    #[test]
    fn rejects_duplicate_relation_ids() {
        let err = parse_tree(
            r#"{
                "relations": [
                    { "id": 10, "from": 1, "to": 2, "kind": "parent" },
                    { "id": 10, "from": 2, "to": 1, "kind": "child" }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TreeParseError::DuplicateRelationId { relation_id } if relation_id == RelationId::new(10)
        ));
    }

    #[test]
    fn rejects_unknown_relation_kinds() {
        let err = parse_tree(
            r#"{ "relations": [{ "id": 10, "from": 1, "to": 2, "kind": "cousin" }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown relation kind 'cousin'"));
    }

    #[test]
    fn rejects_placeholder_with_differing_endpoints() {
        let err = parse_tree(
            r#"{ "relations": [{ "id": 10, "from": 1, "to": 2, "kind": "placeholder" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TreeParseError::PlaceholderEndpointsDiffer { .. }));
    }

    #[test]
    fn export_then_parse_round_trips() {
        let tree = parse_tree(
            r#"{
                "memorials": [
                    { "id": 2, "name": "Boris", "death_date": "2001-09-09" },
                    { "id": 1, "name": "Anna", "birth_date": "1931-05-02" }
                ],
                "relations": [
                    { "id": 10, "from": 1, "to": 2, "kind": "parent" },
                    { "id": 11, "from": 2, "to": 2, "kind": "placeholder" }
                ]
            }"#,
        )
        .expect("tree");

        let exported = export_tree(&tree).expect("export");
        let reparsed = parse_tree(&exported).expect("reparse");
        assert_eq!(tree, reparsed);

        // Ascending id order makes the export deterministic.
        let anna_at = exported.find("Anna").expect("anna in export");
        let boris_at = exported.find("Boris").expect("boris in export");
        assert!(anna_at < boris_at);
    }
}
