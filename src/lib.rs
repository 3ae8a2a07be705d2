// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stemma — deterministic genealogy-tree layout and kinship plausibility
//! checks for memorial graphs.
//!
//! The crate is split along the data path: `model` holds the tree, `ops`
//! mutates it under revision checks, `layout` turns it into geometry,
//! `render` turns geometry into SVG, `validate` judges age compatibility,
//! and `format` reads and writes the JSON snapshot.

pub mod format;
pub mod layout;
pub mod model;
pub mod ops;
pub mod render;
pub mod validate;
