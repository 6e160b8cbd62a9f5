// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! mermaid-magic: one structured diagram model, five Mermaid kinds.
//!
//! A [`model::Diagram`] holds a flowchart, a sequence diagram, a pie chart, a gantt chart and a
//! user journey side by side; its `kind` picks which one is active. The entry points:
//!
//! - [`normalize::normalize`] turns arbitrary JSON into a valid diagram,
//! - [`format::mermaid::parse_text`] / [`format::mermaid::to_text`] round-trip the Mermaid dialect,
//! - [`format::csv::to_csv`] exports the active kind as CSV,
//! - [`ops::apply_ops`] applies editing operations,
//! - [`store::DataFile`] persists the document.

pub mod format;
pub mod model;
pub mod normalize;
pub mod ops;
pub mod store;
