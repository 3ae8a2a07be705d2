// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Advisory plausibility checks for proposed relations.

pub mod age;

pub use age::{age_bounds, check_age_compatibility, whole_years_between, AgeBounds, AgeObjection};
