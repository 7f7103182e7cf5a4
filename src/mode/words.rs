/*
 * ==========================================================================
 * PFMODE - Packet Filter Syntax Highlighting
 * ==========================================================================
 *
 * File:      words.rs
 * Purpose:   The word classification table mapping PF vocabulary to
 *            highlight styles.
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

use crate::mode::token::Style;
use std::collections::HashMap;

/// The static word → [`Style`] table used by the scanner.
///
/// This table decides how the fixed PF vocabulary is highlighted:
/// `pass` is a keyword, `tcp` a builtin, `quick` a qualifier, and so
/// on. It is built once when the mode is constructed and read-only
/// afterwards; lookups are O(1) expected.
///
/// Words not present simply fail [`lookup`](WordTable::lookup) and are
/// left unstyled by the scanner — interface names, addresses, and
/// user-chosen labels all take that path.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    words: HashMap<&'static str, Style>,
}

impl WordTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table seeded with the PF vocabulary.
    ///
    /// The word lists follow the pf.conf grammar: rule actions and
    /// translation targets as keywords, protocol names as builtins,
    /// option words as defs, plus the tag/qualifier/attribute words.
    pub fn packet_filter() -> Self {
        let mut table = Self::new();

        table.define(
            Style::Keyword,
            "altq anchor antispoof binat nat pass block queue rdr match scrub table set \
             in out rdr-to divert-to route-to reply-to nat-to",
        );
        table.define(Style::Atom, "all any yes no drop return");
        table.define(
            Style::Builtin,
            "proto inet inet6 tcp udp icmp icmp6 port other carp pfsync",
        );
        table.define(
            Style::Def,
            "label user file timeout limit optimization block-policy loginterface \
             require-order skip synproxy state parent bandwidth static-port",
        );
        table.define(Style::Tag, "tag tagged");
        table.define(Style::Qualifier, "quick persist");
        table.define(Style::Attribute, "log");

        table
    }

    /// Registers every word of a space-separated list under one style.
    ///
    /// # Parameters
    /// - `style`: The style every listed word maps to.
    /// - `list`: Words separated by single spaces.
    ///
    /// Registering a word twice keeps the later style.
    pub fn define(&mut self, style: Style, list: &'static str) {
        for word in list.split(' ') {
            if word.is_empty() {
                continue;
            }
            self.words.insert(word, style);
        }
    }

    /// Looks up the style registered for `word`, if any.
    pub fn lookup(&self, word: &str) -> Option<Style> {
        self.words.get(word).copied()
    }

    /// Number of registered words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
