/*
 * ==========================================================================
 * PFMODE - Packet Filter Syntax Highlighting
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the highlight styles and the token type produced
 *            while scanning pf.conf rule text.
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

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The **highlight style** assigned to one lexical chunk of a PF rule.
///
/// Each variant corresponds to a standard editor style class, so themes
/// written for any mode pick up PF rules without extra configuration.
/// The class name a renderer should emit is produced by [`Style::as_str`].
///
/// # Pipeline Role
/// ```text
/// pf.conf line → LineStream → PacketFilterMode::token → Style → theme CSS
/// ```
///
/// Unstyled text (separators, unknown words) is represented by the
/// scanner returning `Option::<Style>::None`, not by a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// Rule actions and translation keywords.
    ///
    /// Examples: `pass`, `block`, `nat`, `rdr-to`.
    #[serde(rename = "keyword")]
    Keyword,

    /// Constant-like words.
    ///
    /// Examples: `all`, `any`, `yes`, `no`, `drop`, `return`.
    #[serde(rename = "atom")]
    Atom,

    /// Protocol and address-family names.
    ///
    /// Examples: `proto`, `tcp`, `udp`, `inet6`, `carp`.
    #[serde(rename = "builtin")]
    Builtin,

    /// Option and definition words.
    ///
    /// Examples: `label`, `timeout`, `block-policy`, `static-port`.
    #[serde(rename = "def")]
    Def,

    /// Packet-tagging words: `tag`, `tagged`.
    #[serde(rename = "tag")]
    Tag,

    /// Rule qualifiers: `quick`, `persist`.
    #[serde(rename = "qualifier")]
    Qualifier,

    /// Rule attributes: `log`.
    #[serde(rename = "attribute")]
    Attribute,

    /// Quoted string text, including the quotes.
    #[serde(rename = "string")]
    String,

    /// String text distinguished from its surrounding string.
    ///
    /// Reserved for renderers that style string continuations
    /// differently; the scanner itself always reports [`Style::String`]
    /// for string text.
    #[serde(rename = "string-2")]
    String2,

    /// A macro reference outside any string.
    ///
    /// Example: `$ext_if` in `pass in on $ext_if`.
    #[serde(rename = "variable")]
    Variable,

    /// A macro reference interpolated inside a double-quoted string.
    ///
    /// Example: `$addr` in `"host $addr unreachable"`.
    #[serde(rename = "variable-2")]
    Variable2,

    /// A malformed macro reference: `$` not followed by a name.
    ///
    /// Rendered in the theme's invalid style. This is a classification
    /// outcome, never a scan failure.
    #[serde(rename = "error")]
    Error,

    /// A `#` comment running to end of line.
    #[serde(rename = "comment")]
    Comment,

    /// A list brace: `{` or `}`.
    #[serde(rename = "bracket")]
    Bracket,

    /// A table reference such as `<spammers>`.
    #[serde(rename = "special")]
    Special,

    /// A CIDR mask suffix such as `/24`.
    #[serde(rename = "property")]
    Property,

    /// A number, decimal, or dotted IPv4 address.
    #[serde(rename = "number")]
    Number,

    /// A single-character operator: `=`, `:`, `>`, `<`, `!`.
    #[serde(rename = "operator")]
    Operator,
}

impl Style {
    /// The editor style-class name for this variant.
    ///
    /// These are the conventional class names shared across editor
    /// themes (`keyword`, `string-2`, `variable-2`, ...), so the output
    /// can be fed straight into a theme's CSS lookup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Keyword => "keyword",
            Style::Atom => "atom",
            Style::Builtin => "builtin",
            Style::Def => "def",
            Style::Tag => "tag",
            Style::Qualifier => "qualifier",
            Style::Attribute => "attribute",
            Style::String => "string",
            Style::String2 => "string-2",
            Style::Variable => "variable",
            Style::Variable2 => "variable-2",
            Style::Error => "error",
            Style::Comment => "comment",
            Style::Bracket => "bracket",
            Style::Special => "special",
            Style::Property => "property",
            Style::Number => "number",
            Style::Operator => "operator",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A **single highlighted token** produced by the line driver.
///
/// A `Token` is a fully classified chunk of a pf.conf line consisting of:
/// - The exact source text consumed (`text`)
/// - The region it covers (`span`)
/// - Its highlight style, or `None` for unstyled text
///
/// # Example Tokens
/// ```text
/// pass      →  { text: "pass",    span: 1:0..4,   style: Some(Keyword)  }
/// $ext_if   →  { text: "$ext_if", span: 1:8..15,  style: Some(Variable) }
/// em0       →  { text: "em0",     span: 1:19..22, style: None           }
/// ```
///
/// Tokens on one line tile it exactly: every character belongs to one
/// token, including whitespace runs (which carry `style: None`).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The exact source text that produced this token.
    pub text: String,

    /// Where the token sits in the source.
    pub span: Span,

    /// The style a renderer should apply, or `None` for plain text.
    pub style: Option<Style>,
}

impl fmt::Display for Token {
    /// Prints only the token's source text.
    ///
    /// Diagnostic and log output cares about *what was written*, not
    /// the internal structure; `Debug` remains available for that.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_class_names_match_editor_conventions() {
        assert_eq!(Style::Keyword.as_str(), "keyword");
        assert_eq!(Style::String2.as_str(), "string-2");
        assert_eq!(Style::Variable2.as_str(), "variable-2");
        assert_eq!(Style::Special.as_str(), "special");
    }

    #[test]
    fn style_serializes_to_class_name() {
        let json = serde_json::to_string(&Style::Variable2).unwrap();
        assert_eq!(json, "\"variable-2\"");
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Style::Variable2);
    }

    #[test]
    fn token_displays_its_text() {
        let token = Token {
            text: "$ext_if".to_string(),
            span: Span::new(1, 8, 15),
            style: Some(Style::Variable),
        };
        assert_eq!(token.to_string(), "$ext_if");
    }
}
