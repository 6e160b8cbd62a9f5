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
use crate::model::{Gantt, GanttStatus, GanttTask};

pub(super) const DEFAULT_SECTION: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskLine {
    label: String,
    status: GanttStatus,
    start: String,
    end: String,
}

/// `<label> : <token>, <token>, ...`. The first status keyword wins; the next two other tokens are
/// start and end. Escaped `:` and `,` do not split.
fn parse_task(line: &str) -> Option<TaskLine> {
    let (label, rest) = split_once_unescaped(line, ':')?;
    let mut task = TaskLine {
        label: unescape_text(label.trim()),
        status: GanttStatus::Unset,
        start: String::new(),
        end: String::new(),
    };

    for token in split_unescaped(rest, ',').into_iter().map(str::trim).filter(|t| !t.is_empty()) {
        match GanttStatus::from_keyword(token) {
            Some(status) if status.is_set() && !task.status.is_set() => task.status = status,
            _ if task.start.is_empty() => task.start = unescape_text(token),
            _ if task.end.is_empty() => task.end = unescape_text(token),
            _ => {}
        }
    }
    Some(task)
}

/// Parses gantt body lines (header already removed).
pub(super) fn parse_gantt(lines: &[&str], scope: &mut IdScope) -> Gantt {
    let mut gantt = Gantt::default();
    let mut section = DEFAULT_SECTION.to_owned();

    for &line in lines {
        if let Some(title) = keyword_rest(line, "title") {
            gantt.set_title(unescape_text(title));
        } else if let Some(format) = keyword_rest(line, "dateformat") {
            if !format.is_empty() {
                gantt.set_date_format(format);
            }
        } else if let Some(name) = keyword_rest(line, "section") {
            section =
                if name.is_empty() { DEFAULT_SECTION.to_owned() } else { unescape_text(name) };
        } else if let Some(task) = parse_task(line) {
            let mut entry = GanttTask::new(scope.fresh(), section.clone(), task.label);
            entry.start = task.start;
            entry.end = task.end;
            entry.status = task.status;
            gantt.tasks_mut().push(entry);
        } else {
            debug!(line; "skipping unrecognized gantt line");
        }
    }

    gantt
}

/// Writes a `section` line whenever the (defaulted) section changes between consecutive tasks.
pub(super) fn write_gantt(gantt: &Gantt) -> String {
    let mut body = Body::new("gantt");
    if !gantt.title().is_empty() {
        body.push(format!("title {}", escape_text(gantt.title())));
    }
    if !gantt.date_format().is_empty() {
        body.push(format!("dateFormat {}", gantt.date_format()));
    }

    let mut current: Option<&str> = None;
    for task in gantt.tasks() {
        let section = if task.section.is_empty() { DEFAULT_SECTION } else { task.section.as_str() };
        if current != Some(section) {
            current = Some(section);
            body.push(format!("section {}", escape_text(section)));
        }
        let status = match task.status {
            GanttStatus::Unset => String::new(),
            status => format!("{}, ", status.as_str()),
        };
        body.push(format!(
            "{} : {status}{}, {}",
            escape_field(&task.label, &[':']),
            escape_field(&task.start, &[',']),
            escape_field(&task.end, &[','])
        ));
    }

    body.finish()
}

#[cfg(test)]
mod tests {
    use super::{parse_task, TaskLine};
    use crate::model::GanttStatus;

    fn task(label: &str, status: GanttStatus, start: &str, end: &str) -> TaskLine {
        TaskLine { label: label.to_owned(), status, start: start.to_owned(), end: end.to_owned() }
    }

    #[test]
    fn status_is_found_anywhere_in_the_tokens() {
        assert_eq!(
            parse_task("Implementation : active, 2024-01-06, 2024-01-14"),
            Some(task("Implementation", GanttStatus::Active, "2024-01-06", "2024-01-14"))
        );
        assert_eq!(
            parse_task("Review : 2024-02-01, CRIT, 2024-02-03"),
            Some(task("Review", GanttStatus::Crit, "2024-02-01", "2024-02-03"))
        );
    }

    #[test]
    fn second_status_keyword_is_a_date_token() {
        assert_eq!(
            parse_task("Odd : done, active"),
            Some(task("Odd", GanttStatus::Done, "active", ""))
        );
    }

    #[test]
    fn missing_tokens_stay_empty() {
        assert_eq!(parse_task("Lonely :"), Some(task("Lonely", GanttStatus::Unset, "", "")));
        assert_eq!(parse_task("no colon here"), None);
    }

    #[test]
    fn escaped_separators_stay_in_their_field() {
        assert_eq!(
            parse_task("Deploy\\: prod : 2024-01-01 10:00, after a\\, b"),
            Some(task("Deploy: prod", GanttStatus::Unset, "2024-01-01 10:00", "after a, b"))
        );
    }
}
