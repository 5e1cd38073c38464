/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # r3bl_text_styler
//!
//! This crate wraps a string in an ANSI SGR (Select Graphic Rendition) escape pair so
//! that it renders bold, italic, or cyan-colored in a compatible terminal. Each effect
//! is bracketed by its own "set" and "reset" codes, so only the attribute that was
//! switched on gets switched off:
//!
//! | Effect   | Set        | Reset      |
//! | -------- | ---------- | ---------- |
//! | `bold`   | `ESC [1 m` | `ESC [22 m` |
//! | `italic` | `ESC [3 m` | `ESC [23 m` |
//! | `cyan`   | `ESC [36 m` | `ESC [39 m` |
//!
//! The styling operations are pure: they return a value that renders via [std::fmt::Display]
//! and write nothing to any stream. Printing is up to the caller, and the terminal
//! emulator that eventually displays the string is responsible for interpreting the
//! escape sequences.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_text_styler::{bold, cyan, italic};
//!
//! println!("{}", bold("This is bold text."));
//! println!("{}", italic("This is italic text."));
//! println!("{}", cyan("This is cyan text."));
//! ```

// Attach the following files to the library module.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod escape_pair;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use escape_pair::*;
