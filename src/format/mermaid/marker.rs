// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The comment line that flags a text document as "re-import me into the model".

pub const MARKER_LINE: &str = "%% mermaid-magic";

/// True when the first non-blank line is exactly the marker.
pub fn has_marker(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line == MARKER_LINE)
}

/// Removes the first marker line, keeping every other line as-is.
pub fn strip_marker(source: &str) -> String {
    let mut removed = false;
    let mut kept = Vec::new();
    for line in source.lines() {
        if !removed && line.trim() == MARKER_LINE {
            removed = true;
            continue;
        }
        kept.push(line);
    }
    kept.join("\n")
}

/// Prefixes `text` with the marker line.
pub fn with_marker(text: &str) -> String {
    format!("{MARKER_LINE}\n{text}")
}

#[cfg(test)]
mod tests {
    use super::{has_marker, strip_marker, with_marker};

    #[test]
    fn marker_must_be_first_non_blank_line() {
        assert!(has_marker("\n  %% mermaid-magic\nflowchart TD"));
        assert!(!has_marker("flowchart TD\n%% mermaid-magic"));
        assert!(!has_marker("%% mermaid-magic extra"));
        assert!(!has_marker(""));
    }

    #[test]
    fn strip_removes_only_the_marker() {
        let text = with_marker("pie\r\n  title Usage");
        assert!(has_marker(&text));
        assert_eq!(strip_marker(&text), "pie\n  title Usage");
    }
}
