// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::debug;

use super::alias::IdScope;
use super::escape::{
    escape_field, escape_text, split_once_unescaped, split_unescaped, unescape_text,
};
use super::lines::{keyword_rest, Body};
use crate::format::number_text;
use crate::model::journey::DEFAULT_STEP_SCORE;
use crate::model::{Journey, JourneyStep};
use crate::normalize::numeric_text;

pub(super) const DEFAULT_SECTION: &str = "Journey";

/// `<task>: <score>: <persona>, <persona>`. An empty score reads as 0, a non-numeric one as 3.
/// Escaped `:` and `,` do not split.
fn parse_step(line: &str) -> Option<(String, f64, Vec<String>)> {
    let (task, rest) = split_once_unescaped(line, ':')?;
    let (score, personas) = split_once_unescaped(rest, ':').unwrap_or((rest, ""));
    let score = numeric_text(score);

    let personas = split_unescaped(personas, ',')
        .into_iter()
        .map(str::trim)
        .filter(|persona| !persona.is_empty())
        .map(unescape_text)
        .collect();
    let score = if score.is_finite() { score } else { DEFAULT_STEP_SCORE };
    Some((unescape_text(task.trim()), score, personas))
}

/// Parses journey body lines (header already removed).
pub(super) fn parse_journey(lines: &[&str], scope: &mut IdScope) -> Journey {
    let mut journey = Journey::default();
    let mut section = DEFAULT_SECTION.to_owned();

    for &line in lines {
        if let Some(title) = keyword_rest(line, "title") {
            journey.set_title(unescape_text(title));
        } else if let Some(name) = keyword_rest(line, "section") {
            section =
                if name.is_empty() { DEFAULT_SECTION.to_owned() } else { unescape_text(name) };
        } else if let Some((task, score, personas)) = parse_step(line) {
            let mut step = JourneyStep::new(scope.fresh(), section.clone(), task);
            step.score = score;
            step.personas = personas;
            journey.steps_mut().push(step);
        } else {
            debug!(line; "skipping unrecognized journey line");
        }
    }

    journey
}

pub(super) fn write_journey(journey: &Journey) -> String {
    let mut body = Body::new("journey");
    if !journey.title().is_empty() {
        body.push(format!("title {}", escape_text(journey.title())));
    }

    let mut current: Option<&str> = None;
    for step in journey.steps() {
        let section = if step.section.is_empty() { DEFAULT_SECTION } else { step.section.as_str() };
        if current != Some(section) {
            current = Some(section);
            body.push(format!("section {}", escape_text(section)));
        }
        let task = escape_field(&step.task, &[':']);
        let score = number_text(step.score);
        if step.personas.is_empty() {
            body.push(format!("{task}: {score}:"));
        } else {
            let personas = step
                .personas
                .iter()
                .map(|persona| escape_field(persona, &[',']))
                .collect::<Vec<_>>();
            body.push(format!("{task}: {score}: {}", personas.join(", ")));
        }
    }

    body.finish()
}
