// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A memorial record: the node type of the genealogy graph.
///
/// Records are supplied by an upstream store and treated as read-only here.
/// Birth/death dates are kept as the raw ISO-8601 strings they arrive with;
/// parsing happens at the validation seam so that an unparsable date degrades
/// to "unknown" instead of poisoning the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memorial {
    name: String,
    birth_date: Option<String>,
    death_date: Option<String>,
}

impl Memorial {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), birth_date: None, death_date: None }
    }

    pub fn new_with(
        name: impl Into<String>,
        birth_date: Option<String>,
        death_date: Option<String>,
    ) -> Self {
        Self { name: name.into(), birth_date, death_date }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_birth_date<T: Into<String>>(&mut self, birth_date: Option<T>) {
        self.birth_date = birth_date.map(Into::into);
    }

    pub fn set_death_date<T: Into<String>>(&mut self, death_date: Option<T>) {
        self.death_date = death_date.map(Into::into);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    pub fn death_date(&self) -> Option<&str> {
        self.death_date.as_deref()
    }
}
