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

pub mod scanner;
pub mod token;
pub mod words;

pub use scanner::{PacketFilterMode, ScanState};
pub use token::{Style, Token};
pub use words::WordTable;
