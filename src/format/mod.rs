// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram format parsing/export.
//!
//! [`mermaid`] is the round-trippable text dialect; [`csv`] is the export-only tabular import
//! format of the external diagramming tool.

pub mod csv;
pub mod mermaid;

/// Renders a number the way the text dialect and the CSV columns expect it: integral values
/// without a fractional part, everything else in shortest round-trip form.
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{value:.0}");
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::number_text;

    #[test]
    fn number_text_drops_integral_fraction() {
        assert_eq!(number_text(40.0), "40");
        assert_eq!(number_text(-3.0), "-3");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(2.5), "2.5");
        assert_eq!(number_text(0.1 + 0.2), "0.30000000000000004");
    }
}
