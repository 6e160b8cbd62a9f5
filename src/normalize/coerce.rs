// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loose value coercion for untrusted JSON fields.

use serde_json::{Map, Value};

use crate::format::number_text;
use crate::model::EntityId;

pub(super) type Object = Map<String, Value>;

/// Numeric reading of a JSON value; `NaN` when the value has no numeric reading.
///
/// Strings are trimmed and parsed as decimal (or `0x` hex) numbers, the empty string reads as `0`,
/// booleans read as `0`/`1` and `null` as `0`.
pub(super) fn numeric(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => numeric_text(text),
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    }
}

pub(crate) fn numeric_text(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, |value| value as f64);
    }
    match text.trim_start_matches(['+', '-']) {
        "Infinity" => {
            return if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
        }
        unsigned
            if unsigned.chars().any(|ch| ch.is_ascii_alphabetic() && !matches!(ch, 'e' | 'E')) =>
        {
            return f64::NAN;
        }
        _ => {}
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Numeric field that falls back to `default` when missing, zero, or not a number.
pub(super) fn number_or(value: Option<&Value>, default: f64) -> f64 {
    let number = numeric(value);
    if number == 0.0 || !number.is_finite() {
        default
    } else {
        number
    }
}

/// Entity id or reference; anything that is not an integer in `1..=EntityId::MAX` reads as
/// missing.
pub(super) fn entity_id(value: Option<&Value>) -> EntityId {
    let number = numeric(value);
    let max = EntityId::MAX.get() as f64;
    if number.is_finite() && number >= 1.0 && number.fract() == 0.0 && number <= max {
        EntityId::new(number as u64)
    } else {
        EntityId::MISSING
    }
}

/// Text field. Strings pass through, scalars are rendered, everything else takes `default`.
pub(super) fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => {
            number.as_f64().map_or_else(|| number.to_string(), number_text)
        }
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => default.to_owned(),
    }
}

/// Text field that only accepts an actual string.
pub(super) fn strict_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        _ => String::new(),
    }
}

pub(super) fn str_field<'a>(value: Option<&'a Value>) -> Option<&'a str> {
    value.and_then(Value::as_str)
}

pub(super) fn array<'a>(value: Option<&'a Value>) -> Option<&'a [Value]> {
    value.and_then(Value::as_array).map(Vec::as_slice)
}

pub(super) fn object(value: Option<&Value>) -> Option<&Object> {
    value.and_then(Value::as_object)
}
