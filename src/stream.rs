/*
 * ==========================================================================
 * PFMODE - Packet Filter Syntax Highlighting
 * ==========================================================================
 *
 * File:      stream.rs
 * Purpose:   Per-line character stream consumed by the tokenizer.
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

use regex::Regex;

/// A cursor over a single line of source text.
///
/// The tokenizer never sees raw strings; it consumes characters through
/// this stream, which supports exactly the operations the scanner
/// needs:
///
/// - one-character consume (`next`) and push-back (`back_up`)
/// - anchored pattern matching at the cursor (`match_pattern`),
///   with or without consuming the match
/// - predicate-driven runs (`eat_while`, `eat_space`)
/// - end-of-line detection (`eol`) and `skip_to_end`
///
/// The stream also tracks where the current token began, so the driver
/// can extract the consumed text (`current`) after each scan step.
///
/// Positions are character indices, not byte offsets, so push-back and
/// spans stay correct on non-ASCII input. A byte cursor is kept in
/// step with the character cursor so pattern matching can slice the
/// line directly instead of rebuilding the remainder per call.
pub struct LineStream {
    line: String,
    chars: Vec<char>,
    pos: usize,
    byte_pos: usize,
    start: usize,
}

impl LineStream {
    /// Creates a stream over one line (no trailing newline expected).
    pub fn new(line: &str) -> Self {
        Self {
            line: line.to_string(),
            chars: line.chars().collect(),
            pos: 0,
            byte_pos: 0,
            start: 0,
        }
    }

    /// True once every character of the line has been consumed.
    pub fn eol(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Consumes and returns the next character, or `None` at end of line.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        self.byte_pos += ch.len_utf8();
        Some(ch)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Steps the cursor back by `n` characters.
    ///
    /// Used by the scanner to un-consume a speculatively read character,
    /// never to rewind past the start of the current token in practice.
    pub fn back_up(&mut self, n: usize) {
        for _ in 0..n {
            if self.pos == 0 {
                break;
            }
            self.pos -= 1;
            self.byte_pos -= self.chars[self.pos].len_utf8();
        }
    }

    /// Consumes a run of whitespace.
    ///
    /// # Returns
    /// `true` if at least one whitespace character was consumed.
    pub fn eat_space(&mut self) -> bool {
        let from = self.pos;
        while self.peek().map_or(false, |c| c.is_whitespace()) {
            self.next();
        }
        self.pos > from
    }

    /// Consumes characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().map_or(false, |c| pred(c)) {
            self.next();
        }
    }

    /// Matches `pattern` against the text at the cursor.
    ///
    /// The match must begin exactly at the cursor; a hit further into
    /// the remainder counts as no match. When `consume` is `true` the
    /// cursor advances past the matched text.
    ///
    /// # Returns
    /// The matched text, or `None` if the pattern does not match at
    /// the cursor.
    pub fn match_pattern(&mut self, pattern: &Regex, consume: bool) -> Option<String> {
        let found = pattern.find(&self.line[self.byte_pos..])?;
        if found.start() != 0 {
            return None;
        }
        let matched = found.as_str().to_string();
        if consume {
            self.pos += matched.chars().count();
            self.byte_pos += matched.len();
        }
        Some(matched)
    }

    /// Consumes the remainder of the line.
    pub fn skip_to_end(&mut self) {
        self.pos = self.chars.len();
        self.byte_pos = self.line.len();
    }

    /// Marks the cursor as the start of the next token.
    pub fn begin_token(&mut self) {
        self.start = self.pos;
    }

    /// The text consumed since the last `begin_token`.
    pub fn current(&self) -> String {
        self.chars[self.start..self.pos].iter().collect()
    }

    /// Character column where the current token began.
    pub fn token_start(&self) -> usize {
        self.start
    }

    /// Current cursor column.
    pub fn position(&self) -> usize {
        self.pos
    }
}
