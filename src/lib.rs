/*
 * ==========================================================================
 * PFMODE - Packet Filter Syntax Highlighting
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Github:   https://github.com/samwilcox/pfmode
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

//! Incremental tokenizer for PF (packet filter) firewall configuration,
//! built for editor syntax highlighting.
//!
//! The mode scans `pf.conf` rule text one line at a time, classifying
//! each chunk into editor style classes (keyword, builtin, string,
//! variable, ...). The only carried state is whether a quoted string is
//! still open, so an editor can re-enter the scanner at any line
//! boundary.
//!
//! ```
//! use pfmode::{PacketFilterMode, Style};
//!
//! let mode = PacketFilterMode::new();
//! let mut state = mode.start_state();
//! let tokens = mode.tokenize_line(1, "pass in quick on $ext_if", &mut state);
//!
//! assert_eq!(tokens[0].style, Some(Style::Keyword));      // pass
//! assert_eq!(tokens.last().unwrap().style, Some(Style::Variable)); // $ext_if
//! ```

pub mod language;
pub mod mode;
pub mod span;
pub mod stream;

pub use language::LanguageConfig;
pub use mode::{PacketFilterMode, ScanState, Style, Token, WordTable};
pub use span::Span;
pub use stream::LineStream;
