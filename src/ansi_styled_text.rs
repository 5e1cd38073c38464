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

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{Effect, EscapePair};

/// The main struct that we have to consider is `AnsiStyledText`. It has two fields:
/// - `text` - the text to wrap. Any payload is passed through unchanged, including an
///   empty string and text that already contains escape sequences.
/// - `effect` - the single [Effect] whose escape pair brackets the text.
///
/// Rendering happens via the [Display] trait: the output is the effect's start
/// sequence, then the payload, then the effect's end sequence. Nothing is written to
/// any stream until the caller prints the value.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_text_styler::*;
///
/// // Using the constructor functions.
/// let bold_text = bold("This is bold text.");
/// println!("{bold_text}");
/// bold_text.println();
///
/// // Each pair resets only its own attribute, so combining effects is done by
/// // nesting calls manually.
/// let inner = cyan("bold and cyan").to_string();
/// println!("{}", bold(&inner));
///
/// // Verbose struct construction.
/// AnsiStyledText {
///     text: "Wrap a string in an ANSI SGR escape pair.",
///     effect: Effect::Italic,
/// }
/// .println();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub effect: Effect,
}

pub mod sizing {
    // PERF: If you make this number too large, eg: more than 16, then it will slow down
    // callers that keep lots of these buffers around.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
}

mod ansi_styled_text_impl {
    use super::*;

    impl AnsiStyledText<'_> {
        pub fn println(&self) {
            println!("{}", self);
        }

        /// This is different than the [Display] trait implementation, because it doesn't
        /// allocate a new [String], but instead allocates an inline buffer on the stack.
        /// If this buffer gets larger than [sizing::DEFAULT_STRING_STORAGE_SIZE], it will
        /// spill to the heap.
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; super::sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            format!("{}", self).into()
        }
    }
}

pub fn bold(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        effect: Effect::Bold,
    }
}

pub fn italic(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        effect: Effect::Italic,
    }
}

/// More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
pub fn cyan(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        effect: Effect::Cyan,
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for AnsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let EscapePair { start, end } = self.effect.escape_pair();
            write!(f, "{}", start)?;
            write!(f, "{}", self.text)?;
            write!(f, "{}", end)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{bold, cyan, italic};
    use crate::{AnsiStyledText, Effect};

    #[test]
    fn test_constructor_functions() {
        let eg_1 = bold("Hello");
        assert_eq!(
            eg_1,
            AnsiStyledText {
                text: "Hello",
                effect: Effect::Bold,
            }
        );
        assert_eq!(
            format!("{:?}", eg_1),
            r#"AnsiStyledText { text: "Hello", effect: Bold }"#
        );
    }

    #[test_case(Effect::Bold,   "\x1b[1mhi\x1b[22m")]
    #[test_case(Effect::Italic, "\x1b[3mhi\x1b[23m")]
    #[test_case(Effect::Cyan,   "\x1b[36mhi\x1b[39m")]
    fn test_formatted_string_creation(effect: Effect, expected: &str) {
        let styled = AnsiStyledText { text: "hi", effect };
        assert_eq!(styled.to_string(), expected);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(cyan("").to_string(), "\x1b[36m\x1b[39m");
        assert_eq!(bold("").to_string(), "\x1b[1m\x1b[22m");
    }

    #[test]
    fn test_payload_passes_through_unchanged() {
        let payload = "tabs\tand \x1b[39m existing sequences and 🦀";
        assert_eq!(
            italic(payload).to_string(),
            format!("\x1b[3m{payload}\x1b[23m")
        );
    }

    #[test]
    fn test_nesting_does_not_deduplicate() {
        let inner = bold("x").to_string();
        assert_eq!(
            bold(&inner).to_string(),
            "\x1b[1m\x1b[1mx\x1b[22m\x1b[22m"
        );

        let inner = cyan("x").to_string();
        assert_eq!(
            bold(&inner).to_string(),
            "\x1b[1m\x1b[36mx\x1b[39m\x1b[22m"
        );
    }

    #[test]
    fn test_to_small_str_matches_display() {
        let styled = italic("hello");
        assert_eq!(styled.to_small_str().as_str(), styled.to_string());

        // Longer than the inline buffer, spills to the heap.
        let styled = cyan("a payload that is much longer than the inline buffer");
        assert_eq!(styled.to_small_str().as_str(), styled.to_string());
    }
}
