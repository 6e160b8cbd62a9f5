// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Escapes free text for embedding into a single dialect line.
///
/// `\` becomes `\\`, `"` becomes `\"`, `|` becomes `\|`, and line breaks (`\n` or `\r\n`) become
/// the two characters `\n`.
pub fn escape_text(text: &str) -> String {
    escape_field(text, &[])
}

/// [`escape_text`] plus a backslash before every `separators` character, for fields of grammars
/// that split lines on `:` or `,`. [`unescape_text`] reverses both.
pub(super) fn escape_field(text: &str, separators: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '|' => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {}
            _ if separators.contains(&ch) => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape_text`] and [`escape_field`]. Unknown escapes are kept verbatim.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(ch @ ('|' | ':' | ',')) => out.push(ch),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Byte index of the first `needle` that is not preceded by an escaping backslash.
pub(super) fn find_unescaped(text: &str, needle: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == needle {
            return Some(idx);
        }
    }
    None
}

/// Splits at the first unescaped `needle`.
pub(super) fn split_once_unescaped(text: &str, needle: char) -> Option<(&str, &str)> {
    let idx = find_unescaped(text, needle)?;
    Some((&text[..idx], &text[idx + needle.len_utf8()..]))
}

/// Splits at every unescaped `needle`.
pub(super) fn split_unescaped(mut text: &str, needle: char) -> Vec<&str> {
    let mut parts = Vec::new();
    while let Some((head, tail)) = split_once_unescaped(text, needle) {
        parts.push(head);
        text = tail;
    }
    parts.push(text);
    parts
}
