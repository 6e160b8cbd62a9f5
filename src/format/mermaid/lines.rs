// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::marker::MARKER_LINE;

/// Trimmed content lines: the first marker line, blank lines, and `%%` comments are dropped.
pub(super) fn content_lines(source: &str) -> Vec<&str> {
    let mut marker_seen = false;
    let mut lines = Vec::new();
    for line in source.lines() {
        let trimmed = line.trim();
        if !marker_seen && trimmed == MARKER_LINE {
            marker_seen = true;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }
        lines.push(trimmed);
    }
    lines
}

/// Text after a leading keyword (ASCII case-insensitive).
///
/// The keyword must be followed by whitespace or the end of the line, so `titles` does not match
/// `title`. The returned rest is trimmed.
pub(super) fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &line[keyword.len()..];
    match rest.chars().next() {
        None => Some(""),
        Some(ch) if ch.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

/// Removes one pair of matching surrounding quotes (`"` or `'`).
pub(super) fn strip_quotes(text: &str) -> &str {
    let text = text.trim();
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Splits at the first whitespace run: `(head, trimmed rest)`.
pub(super) fn split_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim()),
        None => (text, ""),
    }
}

/// Collects indented body lines under a header, joined the way the serializer emits them.
pub(super) struct Body {
    lines: Vec<String>,
}

impl Body {
    pub(super) fn new(header: &str) -> Self {
        Self { lines: vec![header.to_owned()] }
    }

    pub(super) fn push(&mut self, line: impl AsRef<str>) {
        self.lines.push(format!("  {}", line.as_ref()));
    }

    pub(super) fn finish(self) -> String {
        self.lines.join("\n")
    }
}
