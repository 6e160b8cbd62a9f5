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

pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DEFAULT_TASK_SECTION: &str = "Phase";
pub const DEFAULT_TASK_LABEL: &str = "Task";
pub const DEFAULT_TASK_START: &str = "2024-01-01";
pub const DEFAULT_TASK_END: &str = "2024-01-05";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Gantt {
    title: String,
    date_format: String,
    tasks: Vec<GanttTask>,
}

impl Default for Gantt {
    fn default() -> Self {
        Self {
            title: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            tasks: Vec::new(),
        }
    }
}

impl Gantt {
    pub fn new(
        title: impl Into<String>,
        date_format: impl Into<String>,
        tasks: Vec<GanttTask>,
    ) -> Self {
        Self { title: title.into(), date_format: date_format.into(), tasks }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn set_date_format(&mut self, date_format: impl Into<String>) {
        self.date_format = date_format.into();
    }

    pub fn tasks(&self) -> &[GanttTask] {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut Vec<GanttTask> {
        &mut self.tasks
    }

    pub fn task_mut(&mut self, id: EntityId) -> Option<&mut GanttTask> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

/// Task status. The unset status serializes as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum GanttStatus {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "crit")]
    Crit,
}

impl GanttStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Done => "done",
            Self::Active => "active",
            Self::Crit => "crit",
        }
    }

    /// Recognizes a status keyword, ignoring ASCII case. The empty string is the unset status.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Unset, Self::Done, Self::Active, Self::Crit]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(keyword))
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GanttTask {
    pub id: EntityId,
    pub section: String,
    pub label: String,
    pub start: String,
    pub end: String,
    pub status: GanttStatus,
}

impl GanttTask {
    /// A task with the default date range and no status.
    pub fn new(id: EntityId, section: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            section: section.into(),
            label: label.into(),
            start: DEFAULT_TASK_START.to_owned(),
            end: DEFAULT_TASK_END.to_owned(),
            status: GanttStatus::default(),
        }
    }
}
