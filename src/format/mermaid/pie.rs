// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::debug;

use super::alias::IdScope;
use super::escape::{escape_text, find_unescaped, unescape_text};
use super::lines::{keyword_rest, Body};
use crate::format::number_text;
use crate::model::{Pie, PieSlice};
use crate::normalize::numeric_text;

/// `"label": value` or `label: value`; the value is an optional `-` then digits and dots.
fn parse_slice(line: &str) -> Option<(String, f64)> {
    let (label, value) = line.rsplit_once(':')?;
    let value = value.trim();
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return None;
    }

    let label = label.trim();
    let label = match label.strip_prefix('"') {
        Some(quoted) => find_unescaped(quoted, '"').map_or(quoted, |end| &quoted[..end]),
        None => label,
    };
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let value = numeric_text(value);
    Some((unescape_text(label), if value.is_finite() { value } else { 0.0 }))
}

/// Parses pie lines, header included (`pie [title ...]`).
///
/// Slices get sequential ids from the scope and the default color; colors are not part of the text.
pub(super) fn parse_pie(lines: &[&str], scope: &mut IdScope) -> Pie {
    let mut pie = Pie::default();

    for &line in lines {
        if let Some(rest) = keyword_rest(line, "pie") {
            if let Some(title) = keyword_rest(rest, "title") {
                pie.set_title(unescape_text(title));
            }
            continue;
        }
        if let Some(title) = keyword_rest(line, "title") {
            pie.set_title(unescape_text(title));
            continue;
        }
        match parse_slice(line) {
            Some((label, value)) => {
                pie.slices_mut().push(PieSlice::new(scope.fresh(), label, value));
            }
            None => debug!(line; "skipping unrecognized pie line"),
        }
    }

    pie
}

pub(super) fn write_pie(pie: &Pie) -> String {
    let mut body = Body::new("pie");
    if !pie.title().is_empty() {
        body.push(format!("title {}", escape_text(pie.title())));
    }
    for slice in pie.slices() {
        body.push(format!("\"{}\": {}", escape_text(&slice.label), number_text(slice.value)));
    }
    body.finish()
}
