// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Diagram`] carries all five diagram kinds at once plus the shared id counter; the kind tag
//! only selects which one is active.

pub mod diagram;
pub mod flowchart;
pub mod gantt;
pub mod ids;
pub mod journey;
pub mod pie;
pub mod sequence;

pub use diagram::{Diagram, DiagramKind, ParseDiagramKindError, SCHEMA_VERSION};
pub use flowchart::{ArrowKind, Edge, Flowchart, Node, NodeShape};
pub use gantt::{Gantt, GanttStatus, GanttTask};
pub use ids::{max_entity_id, next_id, EntityId};
pub use journey::{Journey, JourneyStep};
pub use pie::{Pie, PieSlice};
pub use sequence::{LineKind, Message, Participant, Sequence};
