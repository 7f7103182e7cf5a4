/*
 * ==========================================================================
 * PFMODE - Packet Filter Syntax Highlighting
 * ==========================================================================
 *
 * File:      scanner.rs
 * Purpose:   The incremental pf.conf tokenizer: one scan step per call,
 *            carried string state across calls and lines.
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

use crate::mode::token::{Style, Token};
use crate::mode::words::WordTable;
use crate::span::Span;
use crate::stream::LineStream;
use regex::Regex;

/// Carried tokenizer state for one buffer.
///
/// The scanner is stateless apart from this record: whether a quoted
/// string is still open from an earlier call, and which quote character
/// will close it. One instance belongs to exactly one tokenization
/// session; tokenizing several buffers concurrently needs one state
/// each.
///
/// `quote` is meaningful only while `string_open` is true. A stale
/// quote may remain after a string closes; readers must gate on
/// `string_open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    /// Is the scanner inside an unterminated quoted string?
    pub string_open: bool,

    /// The quote character (`'` or `"`) that closes the open string.
    pub quote: Option<char>,
}

impl ScanState {
    /// A fresh state: no string open, no pending quote.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The **pf.conf highlighting mode**: word table plus compiled
/// lookahead patterns.
///
/// Construct once, then share freely — every method takes `&self`.
/// The host feeds it one line at a time through a [`LineStream`],
/// threading a single [`ScanState`] across calls:
///
/// ```text
/// let mode = PacketFilterMode::new();
/// let mut state = mode.start_state();
/// for each line:
///     let mut stream = LineStream::new(line);
///     while !stream.eol():
///         stream.begin_token();
///         let style = mode.token(&mut stream, &mut state);
///         render(stream.current(), style);
/// ```
///
/// [`tokenize_line`](PacketFilterMode::tokenize_line) and
/// [`tokenize`](PacketFilterMode::tokenize) wrap that loop for hosts
/// that want ready-made [`Token`] vectors.
pub struct PacketFilterMode {
    words: WordTable,
    word: Regex,
    var_name: Regex,
    table_ref: Regex,
    digits: Regex,
}

impl PacketFilterMode {
    /// Builds the mode: seeds the word table and compiles the
    /// lookahead patterns.
    pub fn new() -> Self {
        Self {
            words: WordTable::packet_filter(),
            word: compile(r"[\w-]+"),
            var_name: compile(r"[a-zA-Z0-9_-]+"),
            table_ref: compile(r"[a-zA-Z0-9_.-]+>"),
            digits: compile(r"[0-9]+"),
        }
    }

    /// Fresh carried state for a new buffer.
    pub fn start_state(&self) -> ScanState {
        ScanState::new()
    }

    /// The word classification table backing this mode.
    pub fn words(&self) -> &WordTable {
        &self.words
    }

    /// Scans one token's worth of input.
    ///
    /// Consumes at least one character whenever the stream is not at
    /// end of line, updates `state` in place, and returns the style for
    /// the consumed span — `None` for separators and plain text.
    ///
    /// Whitespace is stripped first and reported as `None`, except
    /// while a string is open: whitespace inside an open string belongs
    /// to the string token.
    pub fn token(&self, stream: &mut LineStream, state: &mut ScanState) -> Option<Style> {
        if !state.string_open && stream.eat_space() {
            return None;
        }
        self.scan(stream, state)
    }

    /// One step of the priority-ordered rule chain.
    fn scan(&self, stream: &mut LineStream, state: &mut ScanState) -> Option<Style> {
        // Peek one whole word before advancing; rule 4 re-anchors on it.
        let word = stream.match_pattern(&self.word, false);

        let ch = stream.next()?;

        // Macro reference, valid or not. Inside a double-quoted string
        // this is reached because the string scanner stopped just
        // before the `$`.
        if ch == '$' {
            if stream.match_pattern(&self.var_name, true).is_some() {
                return Some(if state.string_open {
                    Style::Variable2
                } else {
                    Style::Variable
                });
            }
            return Some(Style::Error);
        }

        // Still inside a string from a previous call: hand the
        // speculatively consumed character back and keep scanning it.
        if state.string_open {
            stream.back_up(1);
            return Some(self.scan_string(stream, state));
        }

        // Classified vocabulary. Negate the speculative next(), then
        // consume the whole word.
        if let Some(style) = word.as_deref().and_then(|w| self.words.lookup(w)) {
            stream.back_up(1);
            stream.match_pattern(&self.word, true);
            return Some(style);
        }

        // Comments run to end of line.
        if ch == '#' {
            stream.skip_to_end();
            return Some(Style::Comment);
        }

        // String start: remember which quote closes it.
        if ch == '\'' || ch == '"' {
            state.quote = Some(ch);
            return Some(self.scan_string(stream, state));
        }

        if ch == '{' || ch == '}' {
            return Some(Style::Bracket);
        }

        // Table reference <name>. A bare `<` falls through and is
        // picked up as an operator below.
        if ch == '<' && stream.match_pattern(&self.table_ref, true).is_some() {
            return Some(Style::Special);
        }

        // CIDR mask suffix.
        if ch == '/' {
            stream.match_pattern(&self.digits, true);
            return Some(Style::Property);
        }

        // Numbers, decimals, and dotted IPv4 addresses.
        if ch.is_ascii_digit() {
            stream.eat_while(|c| c.is_ascii_digit() || c == '.');
            return Some(Style::Number);
        }

        if matches!(ch, '=' | ':' | '>' | '<' | '!') {
            return Some(Style::Operator);
        }

        // List separator, consumed but unstyled.
        if ch == ',' {
            return None;
        }

        // Anything else: swallow the rest of the word, unstyled.
        stream.eat_while(|c| c.is_alphanumeric() || c == '_' || c == '-');
        None
    }

    /// Scans string text until the closing quote or end of line.
    ///
    /// Inside a double-quoted string an unescaped `$` stops the scan
    /// one character early, so the next [`token`](Self::token) call
    /// classifies the macro reference on its own. Single-quoted
    /// strings never stop: `$name` inside `'...'` is literal text.
    ///
    /// Sets `state.string_open` to false only when the closing quote
    /// was consumed in this call.
    fn scan_string(&self, stream: &mut LineStream, state: &mut ScanState) -> Style {
        let quote = state.quote;
        let mut current = None;
        let mut prev = None;
        let mut found_var = false;

        while !stream.eol() {
            current = stream.next();
            if current == quote {
                break;
            }
            if current == Some('$') && prev != Some('\\') && quote == Some('"') {
                found_var = true;
                break;
            }
            prev = current;
        }

        if found_var {
            stream.back_up(1);
        }
        state.string_open = current != quote || found_var;

        Style::String
    }

    /// Tokenizes one full line, threading `state` across calls.
    ///
    /// The returned tokens tile the line exactly: whitespace runs and
    /// separators appear as tokens with `style: None`, so a renderer
    /// can emit the line verbatim. `line_no` is 1-based and only
    /// recorded in the spans.
    pub fn tokenize_line(&self, line_no: usize, line: &str, state: &mut ScanState) -> Vec<Token> {
        let mut stream = LineStream::new(line);
        let mut tokens = Vec::new();

        while !stream.eol() {
            stream.begin_token();
            let style = self.token(&mut stream, state);
            tokens.push(Token {
                text: stream.current(),
                span: Span::new(line_no, stream.token_start(), stream.position()),
                style,
            });
        }

        tokens
    }

    /// Tokenizes a whole buffer with a fresh state.
    ///
    /// One token vector per source line. A string left open on one
    /// line stays open on the next, matching how an editor re-enters
    /// the scanner mid-string.
    pub fn tokenize(&self, source: &str) -> Vec<Vec<Token>> {
        let mut state = self.start_state();
        source
            .lines()
            .enumerate()
            .map(|(index, line)| self.tokenize_line(index + 1, line, &mut state))
            .collect()
    }
}

impl Default for PacketFilterMode {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles one of the fixed lookahead patterns.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("built-in pattern {pattern:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode() -> PacketFilterMode {
        PacketFilterMode::new()
    }

    /// Tokenizes one line with a fresh state, returning the tokens and
    /// the state left behind.
    fn scan_line(line: &str) -> (Vec<Token>, ScanState) {
        let mode = mode();
        let mut state = mode.start_state();
        let tokens = mode.tokenize_line(1, line, &mut state);
        (tokens, state)
    }

    fn styles(tokens: &[Token]) -> Vec<(String, Option<Style>)> {
        tokens
            .iter()
            .map(|t| (t.text.clone(), t.style))
            .collect()
    }

    #[test]
    fn every_seed_word_gets_its_registered_style() {
        let cases = [
            ("pass", Style::Keyword),
            ("block", Style::Keyword),
            ("rdr-to", Style::Keyword),
            ("nat-to", Style::Keyword),
            ("any", Style::Atom),
            ("drop", Style::Atom),
            ("tcp", Style::Builtin),
            ("icmp6", Style::Builtin),
            ("pfsync", Style::Builtin),
            ("timeout", Style::Def),
            ("block-policy", Style::Def),
            ("static-port", Style::Def),
            ("tagged", Style::Tag),
            ("quick", Style::Qualifier),
            ("persist", Style::Qualifier),
            ("log", Style::Attribute),
        ];
        for (word, expected) in cases {
            let (tokens, _) = scan_line(word);
            assert_eq!(
                styles(&tokens),
                vec![(word.to_string(), Some(expected))],
                "word {word:?}"
            );
        }
    }

    #[test]
    fn whitespace_and_comma_are_unstyled_separators() {
        let (tokens, _) = scan_line("   ");
        assert_eq!(styles(&tokens), vec![("   ".to_string(), None)]);

        let (tokens, _) = scan_line(",");
        assert_eq!(styles(&tokens), vec![(",".to_string(), None)]);
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let (tokens, _) = scan_line("# this is a comment");
        assert_eq!(
            styles(&tokens),
            vec![("# this is a comment".to_string(), Some(Style::Comment))]
        );
    }

    #[test]
    fn closed_string_is_one_token_and_state_closes() {
        let (tokens, state) = scan_line("\"hello\"");
        assert_eq!(
            styles(&tokens),
            vec![("\"hello\"".to_string(), Some(Style::String))]
        );
        assert!(!state.string_open);
    }

    #[test]
    fn unterminated_string_leaves_state_open() {
        let (tokens, state) = scan_line("\"hello");
        assert_eq!(
            styles(&tokens),
            vec![("\"hello".to_string(), Some(Style::String))]
        );
        assert!(state.string_open);
        assert_eq!(state.quote, Some('"'));
    }

    #[test]
    fn double_quoted_string_splits_out_macro_references() {
        let (tokens, state) = scan_line("\"ip is $addr done\"");
        assert_eq!(
            styles(&tokens),
            vec![
                ("\"ip is ".to_string(), Some(Style::String)),
                ("$addr".to_string(), Some(Style::Variable2)),
                (" done\"".to_string(), Some(Style::String)),
            ]
        );
        assert!(!state.string_open);
    }

    #[test]
    fn single_quoted_string_keeps_macro_text_literal() {
        let (tokens, state) = scan_line("'ip is $addr done'");
        assert_eq!(
            styles(&tokens),
            vec![("'ip is $addr done'".to_string(), Some(Style::String))]
        );
        assert!(!state.string_open);
    }

    #[test]
    fn escaped_dollar_stays_inside_string() {
        let (tokens, _) = scan_line("\"costs \\$5\"");
        assert_eq!(
            styles(&tokens),
            vec![("\"costs \\$5\"".to_string(), Some(Style::String))]
        );
    }

    #[test]
    fn macro_reference_outside_string_is_variable() {
        let (tokens, _) = scan_line("$ext_if");
        assert_eq!(
            styles(&tokens),
            vec![("$ext_if".to_string(), Some(Style::Variable))]
        );
    }

    #[test]
    fn bare_dollar_is_an_error_token() {
        let (tokens, _) = scan_line("$");
        assert_eq!(styles(&tokens), vec![("$".to_string(), Some(Style::Error))]);

        let (tokens, _) = scan_line("$!x");
        assert_eq!(tokens[0].style, Some(Style::Error));
        assert_eq!(tokens[0].text, "$");
    }

    #[test]
    fn addresses_and_cidr_masks_split_into_number_and_property() {
        let (tokens, _) = scan_line("10.0.0.1/24");
        assert_eq!(
            styles(&tokens),
            vec![
                ("10.0.0.1".to_string(), Some(Style::Number)),
                ("/24".to_string(), Some(Style::Property)),
            ]
        );
    }

    #[test]
    fn table_reference_is_one_special_token() {
        let (tokens, _) = scan_line("<mytable>");
        assert_eq!(
            styles(&tokens),
            vec![("<mytable>".to_string(), Some(Style::Special))]
        );

        let (tokens, _) = scan_line("<spam.hosts>");
        assert_eq!(
            styles(&tokens),
            vec![("<spam.hosts>".to_string(), Some(Style::Special))]
        );
    }

    #[test]
    fn unmatched_angle_falls_through_to_operator() {
        let (tokens, _) = scan_line("<");
        assert_eq!(styles(&tokens), vec![("<".to_string(), Some(Style::Operator))]);
    }

    #[test]
    fn single_character_operators() {
        for op in ["=", ":", ">", "!"] {
            let (tokens, _) = scan_line(op);
            assert_eq!(
                styles(&tokens),
                vec![(op.to_string(), Some(Style::Operator))],
                "operator {op:?}"
            );
        }
    }

    #[test]
    fn braces_are_brackets() {
        let (tokens, _) = scan_line("{}");
        assert_eq!(
            styles(&tokens),
            vec![
                ("{".to_string(), Some(Style::Bracket)),
                ("}".to_string(), Some(Style::Bracket)),
            ]
        );
    }

    #[test]
    fn unknown_words_are_plain_text() {
        let (tokens, _) = scan_line("em0");
        assert_eq!(styles(&tokens), vec![("em0".to_string(), None)]);
    }

    #[test]
    fn scanning_makes_forward_progress() {
        let lines = [
            "pass in all",
            "\"open string with $var and no close",
            "@@@ ??? ,,, <<< $$$",
            "{{{}}}===:::",
            "10.0.0.1/24 <t> 'x'",
        ];
        let mode = mode();
        for line in lines {
            let mut state = mode.start_state();
            let mut stream = LineStream::new(line);
            let mut calls = 0;
            while !stream.eol() {
                let before = stream.position();
                stream.begin_token();
                mode.token(&mut stream, &mut state);
                assert!(stream.position() > before, "no progress on {line:?}");
                calls += 1;
            }
            assert!(calls <= line.chars().count(), "too many calls on {line:?}");
        }
    }

    #[test]
    fn tokens_tile_the_line_exactly() {
        let line = "pass in quick on $ext_if proto tcp from any to 10.0.0.1/24 port 80 # web";
        let (tokens, _) = scan_line(line);

        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, line);

        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.span.start, cursor, "gap before {:?}", token.text);
            assert_eq!(token.span.len(), token.text.chars().count());
            cursor = token.span.end;
        }
        assert_eq!(cursor, line.chars().count());
    }

    #[test]
    fn realistic_rule_line_classification() {
        let line = "pass in quick on $ext_if proto tcp from any to 10.0.0.1/24 port 80 # web";
        let (tokens, _) = scan_line(line);
        let styled: Vec<(String, Style)> = tokens
            .iter()
            .filter_map(|t| t.style.map(|s| (t.text.clone(), s)))
            .collect();
        assert_eq!(
            styled,
            vec![
                ("pass".to_string(), Style::Keyword),
                ("in".to_string(), Style::Keyword),
                ("quick".to_string(), Style::Qualifier),
                ("$ext_if".to_string(), Style::Variable),
                ("proto".to_string(), Style::Builtin),
                ("tcp".to_string(), Style::Builtin),
                ("any".to_string(), Style::Atom),
                ("10.0.0.1".to_string(), Style::Number),
                ("/24".to_string(), Style::Property),
                ("port".to_string(), Style::Builtin),
                ("80".to_string(), Style::Number),
                ("# web".to_string(), Style::Comment),
            ]
        );
    }

    #[test]
    fn block_list_rule_classification() {
        let line = "block drop in on em0 proto { tcp, udp } from <spammers> to any port 25";
        let (tokens, _) = scan_line(line);
        let styled: Vec<(String, Style)> = tokens
            .iter()
            .filter_map(|t| t.style.map(|s| (t.text.clone(), s)))
            .collect();
        assert_eq!(
            styled,
            vec![
                ("block".to_string(), Style::Keyword),
                ("drop".to_string(), Style::Atom),
                ("in".to_string(), Style::Keyword),
                ("proto".to_string(), Style::Builtin),
                ("{".to_string(), Style::Bracket),
                ("tcp".to_string(), Style::Builtin),
                ("udp".to_string(), Style::Builtin),
                ("}".to_string(), Style::Bracket),
                ("<spammers>".to_string(), Style::Special),
                ("any".to_string(), Style::Atom),
                ("port".to_string(), Style::Builtin),
                ("25".to_string(), Style::Number),
            ]
        );
    }

    #[test]
    fn macro_assignment_line() {
        let (tokens, _) = scan_line("ext_if = \"em0\"");
        assert_eq!(
            styles(&tokens),
            vec![
                ("ext_if".to_string(), None),
                (" ".to_string(), None),
                ("=".to_string(), Some(Style::Operator)),
                (" ".to_string(), None),
                ("\"em0\"".to_string(), Some(Style::String)),
            ]
        );
    }

    #[test]
    fn open_string_carries_across_lines() {
        let mode = mode();
        let lines = mode.tokenize("set loginterface \"pf\nlog0\" pass");

        assert_eq!(lines.len(), 2);
        let last_of_first = lines[0].last().unwrap();
        assert_eq!(last_of_first.text, "\"pf");
        assert_eq!(last_of_first.style, Some(Style::String));

        let second = &lines[1];
        assert_eq!(second[0].text, "log0\"");
        assert_eq!(second[0].style, Some(Style::String));
        assert_eq!(second[0].span.line, 2);
        let pass = second.last().unwrap();
        assert_eq!(pass.text, "pass");
        assert_eq!(pass.style, Some(Style::Keyword));
    }

    #[test]
    fn start_state_is_closed() {
        let mode = mode();
        let state = mode.start_state();
        assert!(!state.string_open);
        assert_eq!(state.quote, None);
    }

    #[test]
    fn keyword_inside_open_string_is_string_text() {
        let mode = mode();
        let mut state = mode.start_state();
        mode.tokenize_line(1, "\"block", &mut state);
        assert!(state.string_open);

        let tokens = mode.tokenize_line(2, "pass\"", &mut state);
        assert_eq!(
            styles(&tokens),
            vec![("pass\"".to_string(), Some(Style::String))]
        );
        assert!(!state.string_open);
    }
}
