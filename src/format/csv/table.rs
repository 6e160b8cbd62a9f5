// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Quotes a cell when it contains `"`, `,` or a newline; inner quotes are doubled.
pub fn csv_escape(value: &str) -> String {
    if value.contains(['"', ',', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// One data row laid out against a fixed header list.
///
/// Some header lists repeat a column name, so cells are addressed by name plus occurrence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Row {
    headers: &'static [&'static str],
    cells: Vec<String>,
}

impl Row {
    pub(super) fn new(headers: &'static [&'static str]) -> Self {
        Self { headers, cells: vec![String::new(); headers.len()] }
    }

    /// Sets the first column named `column`.
    pub(super) fn set(&mut self, column: &str, value: impl Into<String>) -> &mut Self {
        self.set_nth(column, 0, value)
    }

    /// Sets the `occurrence`-th (zero based) column named `column`. Unknown columns are ignored.
    pub(super) fn set_nth(
        &mut self,
        column: &str,
        occurrence: usize,
        value: impl Into<String>,
    ) -> &mut Self {
        let slot = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| **header == column)
            .nth(occurrence)
            .map(|(idx, _)| idx);
        debug_assert!(slot.is_some(), "no column {column:?} #{occurrence}");
        if let Some(idx) = slot {
            self.cells[idx] = value.into();
        }
        self
    }

    fn encode(&self) -> String {
        self.cells.iter().map(|cell| csv_escape(cell)).collect::<Vec<_>>().join(",")
    }
}

/// Header row plus data rows, encoded with `\n` between rows and no trailing newline.
pub(super) struct Table {
    headers: &'static [&'static str],
    rows: Vec<Row>,
}

impl Table {
    pub(super) fn new(headers: &'static [&'static str]) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub(super) fn row(&self) -> Row {
        Row::new(self.headers)
    }

    pub(super) fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// `Id`, `Name` and `Text Area 1` set; the shape of every page/document row.
    pub(super) fn push_labelled(&mut self, id: &str, name: &str, text: &str) -> &mut Row {
        let mut row = self.row();
        row.set("Id", id).set("Name", name).set("Text Area 1", text);
        self.rows.push(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub(super) fn finish(self) -> String {
        let header = self.headers.iter().map(|header| csv_escape(header)).collect::<Vec<_>>();
        std::iter::once(header.join(","))
            .chain(self.rows.iter().map(Row::encode))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
