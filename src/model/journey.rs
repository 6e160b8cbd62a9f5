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

pub const DEFAULT_STEP_SECTION: &str = "Stage";
pub const DEFAULT_STEP_TASK: &str = "Step";
pub const DEFAULT_STEP_SCORE: f64 = 3.0;
pub const DEFAULT_PERSONA: &str = "User";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Journey {
    title: String,
    steps: Vec<JourneyStep>,
}

impl Journey {
    pub fn new(title: impl Into<String>, steps: Vec<JourneyStep>) -> Self {
        Self { title: title.into(), steps }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn steps(&self) -> &[JourneyStep] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut Vec<JourneyStep> {
        &mut self.steps
    }

    pub fn step_mut(&mut self, id: EntityId) -> Option<&mut JourneyStep> {
        self.steps.iter_mut().find(|step| step.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JourneyStep {
    pub id: EntityId,
    pub section: String,
    pub task: String,
    /// Intended range is 1..=5; not clamped.
    pub score: f64,
    /// Ordered; duplicates allowed.
    pub personas: Vec<String>,
}

impl JourneyStep {
    pub fn new(id: EntityId, section: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id,
            section: section.into(),
            task: task.into(),
            score: DEFAULT_STEP_SCORE,
            personas: vec![DEFAULT_PERSONA.to_owned()],
        }
    }
}
