// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::MemorialId;

/// The closed set of supported kinship kinds.
///
/// Directed kinds read source-to-target (e.g. `Parent` means "source is a
/// parent of target"); `Spouse` and `Sibling` are symmetric in meaning even
/// though the pair is stored ordered. `Placeholder` marks a memorial that is
/// part of a tree without any real connection yet and is always
/// self-referential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    Parent,
    Child,
    Spouse,
    Sibling,
    Grandparent,
    Grandchild,
    UncleAunt,
    NephewNiece,
    Placeholder,
}

impl RelationKind {
    pub const ALL: [Self; 9] = [
        Self::Parent,
        Self::Child,
        Self::Spouse,
        Self::Sibling,
        Self::Grandparent,
        Self::Grandchild,
        Self::UncleAunt,
        Self::NephewNiece,
        Self::Placeholder,
    ];

    /// Directed kinds get an arrowhead near the target end; symmetric kinds
    /// and placeholders do not.
    pub const fn is_directed(self) -> bool {
        matches!(
            self,
            Self::Parent
                | Self::Child
                | Self::Grandparent
                | Self::Grandchild
                | Self::UncleAunt
                | Self::NephewNiece
        )
    }

    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// The canonical snapshot-format tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse => "spouse",
            Self::Sibling => "sibling",
            Self::Grandparent => "grandparent",
            Self::Grandchild => "grandchild",
            Self::UncleAunt => "uncle_aunt",
            Self::NephewNiece => "nephew_niece",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRelationKindError {
    raw: String,
}

impl ParseRelationKindError {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseRelationKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown relation kind '{}'", self.raw)
    }
}

impl std::error::Error for ParseRelationKindError {}

impl FromStr for RelationKind {
    type Err = ParseRelationKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for kind in Self::ALL {
            if kind.as_str() == s {
                return Ok(kind);
            }
        }
        Err(ParseRelationKindError { raw: s.to_owned() })
    }
}

/// A typed edge between two memorials, stored as an ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    from_memorial_id: MemorialId,
    to_memorial_id: MemorialId,
    kind: RelationKind,
}

impl Relation {
    pub fn new(from_memorial_id: MemorialId, to_memorial_id: MemorialId, kind: RelationKind) -> Self {
        Self { from_memorial_id, to_memorial_id, kind }
    }

    pub fn from_memorial_id(&self) -> MemorialId {
        self.from_memorial_id
    }

    pub fn to_memorial_id(&self) -> MemorialId {
        self.to_memorial_id
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// True for placeholder self-loops, which never render as edges.
    pub fn is_placeholder(&self) -> bool {
        self.kind.is_placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::{RelationKind, Relation};
    use crate::model::MemorialId;

    #[test]
    fn directed_kinds_are_exactly_the_six_directional_ones() {
        let directed = RelationKind::ALL
            .into_iter()
            .filter(|kind| kind.is_directed())
            .collect::<Vec<_>>();
        assert_eq!(
            directed,
            vec![
                RelationKind::Parent,
                RelationKind::Child,
                RelationKind::Grandparent,
                RelationKind::Grandchild,
                RelationKind::UncleAunt,
                RelationKind::NephewNiece,
            ]
        );
        assert!(!RelationKind::Spouse.is_directed());
        assert!(!RelationKind::Sibling.is_directed());
        assert!(!RelationKind::Placeholder.is_directed());
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in RelationKind::ALL {
            let parsed: RelationKind = kind.as_str().parse().expect("kind tag");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_tag_is_rejected() {
        let err = "cousin".parse::<RelationKind>().unwrap_err();
        assert_eq!(err.raw(), "cousin");
        assert_eq!(err.to_string(), "unknown relation kind 'cousin'");
    }

    #[test]
    fn relation_exposes_its_endpoints_and_kind() {
        let relation =
            Relation::new(MemorialId::new(1), MemorialId::new(2), RelationKind::Parent);
        assert_eq!(relation.from_memorial_id(), MemorialId::new(1));
        assert_eq!(relation.to_memorial_id(), MemorialId::new(2));
        assert_eq!(relation.kind(), RelationKind::Parent);
        assert!(!relation.is_placeholder());
    }
}
