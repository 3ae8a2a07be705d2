// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::model::RelationKind;

/// Inclusive bounds on the signed age difference for one relation kind.
///
/// The difference is measured in whole calendar years from the source's
/// birth date to the target's birth date; positive means the source is
/// older. `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBounds {
    pub min_years: Option<i32>,
    pub max_years: Option<i32>,
}

impl AgeBounds {
    pub const fn new(min_years: Option<i32>, max_years: Option<i32>) -> Self {
        Self { min_years, max_years }
    }

    pub fn contains(&self, difference_years: i32) -> bool {
        if let Some(min) = self.min_years {
            if difference_years < min {
                return false;
            }
        }
        if let Some(max) = self.max_years {
            if difference_years > max {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for AgeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min_years, self.max_years) {
            (Some(min), Some(max)) => write!(f, "between {min} years and {max} years"),
            (Some(min), None) => write!(f, "at least {min} years"),
            (None, Some(max)) => write!(f, "at most {max} years"),
            (None, None) => f.write_str("unbounded"),
        }
    }
}

/// The plausibility table, as data: one bounds entry per checked kind.
///
/// Kinds without an entry are never objected to.
pub const fn age_bounds(kind: RelationKind) -> Option<AgeBounds> {
    match kind {
        RelationKind::Parent => Some(AgeBounds::new(Some(12), Some(80))),
        RelationKind::Child => Some(AgeBounds::new(Some(-80), Some(-12))),
        RelationKind::Spouse => Some(AgeBounds::new(Some(-50), Some(50))),
        RelationKind::Sibling => Some(AgeBounds::new(Some(-30), Some(30))),
        RelationKind::Grandparent => Some(AgeBounds::new(Some(30), None)),
        RelationKind::Grandchild => Some(AgeBounds::new(None, Some(-30))),
        RelationKind::UncleAunt
        | RelationKind::NephewNiece
        | RelationKind::Placeholder => None,
    }
}

/// Why a proposed relation looks implausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeObjection {
    kind: RelationKind,
    difference_years: i32,
    bounds: AgeBounds,
}

impl AgeObjection {
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn difference_years(&self) -> i32 {
        self.difference_years
    }

    pub fn bounds(&self) -> AgeBounds {
        self.bounds
    }
}

impl fmt::Display for AgeObjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diff = self.difference_years;
        if diff >= 0 {
            write!(
                f,
                "implausible {} relation: source is {diff} years older than target, expected {}",
                self.kind, self.bounds
            )
        } else {
            write!(
                f,
                "implausible {} relation: source is {} years younger than target, expected {}",
                self.kind,
                -diff,
                self.bounds
            )
        }
    }
}

impl std::error::Error for AgeObjection {}

/// Signed whole calendar years from `from` to `to`.
///
/// Positive when `to` is later; the count only ticks once the month/day
/// anniversary has been reached.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    if to < from {
        return -whole_years_between(to, from);
    }

    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Advisory plausibility check for a proposed relation.
///
/// Returns `None` to accept. The check abstains (accepts) whenever either
/// birth date is missing or fails to parse as an ISO-8601 date: incomplete
/// records must never block the user, the rule only catches differences that
/// are knowably absurd.
pub fn check_age_compatibility(
    source_birth_date: Option<&str>,
    target_birth_date: Option<&str>,
    kind: RelationKind,
) -> Option<AgeObjection> {
    let bounds = age_bounds(kind)?;

    let source = parse_iso_date(source_birth_date)?;
    let target = parse_iso_date(target_birth_date)?;

    let difference_years = whole_years_between(source, target);
    if bounds.contains(difference_years) {
        return None;
    }

    Some(AgeObjection { kind, difference_years, bounds })
}

fn parse_iso_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw?.parse().ok()
}
