// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the diagram document on disk.
//!
//! The document is a single pretty-printed JSON file. Reads always pass through the normalizer, so
//! a readable file never fails on shape; only I/O and JSON syntax problems surface as errors.

pub mod data_file;

pub use data_file::{DataFile, StoreError, DEFAULT_DATA_FILE};
