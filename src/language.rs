/*
 * ==========================================================================
 * PFMODE - Packet Filter Syntax Highlighting
 * ==========================================================================
 *
 * File:      language.rs
 * Purpose:   Editor registration record binding the mode to file names
 *            and the line-comment marker.
 *
 * Author:    Sam Wilcox
 * Github:    https://github.com/samwilcox/pfmode
 *
 * License:
 * This file is part of the PFMODE syntax highlighting project.
 *
 * PFMODE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::{Deserialize, Serialize};

/// The registration record a host editor consumes to wire this mode up.
///
/// This is configuration, not scanning logic: it tells the editor which
/// files get the mode (files named exactly `pf.conf`) and which marker
/// its comment-toggling commands should use (`#`). The field names
/// serialize in camelCase to match the manifest shape editors expect:
///
/// ```json
/// {
///   "name": "Packet Filter",
///   "mode": "packetfilter",
///   "fileNames": ["pf.conf"],
///   "lineComment": ["#"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    /// Human-readable language name shown in the editor UI.
    pub name: String,

    /// Mode identifier the editor resolves to this tokenizer.
    pub mode: String,

    /// Exact file names the mode binds to.
    pub file_names: Vec<String>,

    /// Line-comment markers for comment-toggling commands.
    pub line_comment: Vec<String>,
}

impl LanguageConfig {
    /// The canonical registration for PF firewall configuration files.
    pub fn packet_filter() -> Self {
        Self {
            name: "Packet Filter".to_string(),
            mode: "packetfilter".to_string(),
            file_names: vec!["pf.conf".to_string()],
            line_comment: vec!["#".to_string()],
        }
    }

    /// Renders the registration as pretty-printed manifest JSON.
    pub fn to_manifest(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a registration back out of manifest JSON.
    pub fn from_manifest(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::packet_filter()
    }
}
