// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::EntityId;

pub const DEFAULT_SLICE_LABEL: &str = "Slice";
pub const DEFAULT_SLICE_COLOR: &str = "#60a5fa";

/// Colors handed to newly added slices, cycled by slice index.
pub const SLICE_PALETTE: [&str; 8] =
    ["#60a5fa", "#34d399", "#fbbf24", "#f87171", "#a78bfa", "#fb7185", "#38bdf8", "#22c55e"];

pub fn palette_color(index: usize) -> &'static str {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Pie {
    title: String,
    slices: Vec<PieSlice>,
}

impl Pie {
    pub fn new(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self { title: title.into(), slices }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    pub fn slices_mut(&mut self) -> &mut Vec<PieSlice> {
        &mut self.slices
    }

    pub fn slice_mut(&mut self, id: EntityId) -> Option<&mut PieSlice> {
        self.slices.iter_mut().find(|slice| slice.id == id)
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PieSlice {
    pub id: EntityId,
    pub label: String,
    /// Non-negative by convention; not enforced.
    pub value: f64,
    pub color: String,
}

impl PieSlice {
    pub fn new(id: EntityId, label: impl Into<String>, value: f64) -> Self {
        Self { id, label: label.into(), value, color: DEFAULT_SLICE_COLOR.to_owned() }
    }
}
