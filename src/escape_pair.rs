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

use strum_macros::EnumCount;

use crate::SgrCode;

/// A single terminal effect that the styler can apply to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum Effect {
    Bold,
    Italic,
    Cyan,
}

/// The start sequence switches an effect on; the end sequence switches that
/// specific effect off. This is not a full SGR reset (code 0): each pair only
/// undoes its own attribute, so surrounding attributes survive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapePair {
    pub start: SgrCode,
    pub end: SgrCode,
}

mod effect_impl {
    use super::*;

    impl Effect {
        #[rustfmt::skip]
        pub fn escape_pair(self) -> EscapePair {
            match self {
                Effect::Bold   => EscapePair { start: SgrCode::Bold,           end: SgrCode::ResetBoldDim },
                Effect::Italic => EscapePair { start: SgrCode::Italic,         end: SgrCode::ResetItalic },
                Effect::Cyan   => EscapePair { start: SgrCode::ForegroundCyan, end: SgrCode::ResetForeground },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount as _;
    use test_case::test_case;

    use super::Effect;

    #[test]
    fn effect_variant_count() {
        assert_eq!(Effect::COUNT, 3);
    }

    #[test_case(Effect::Bold,   "\x1b[1m",  "\x1b[22m")]
    #[test_case(Effect::Italic, "\x1b[3m",  "\x1b[23m")]
    #[test_case(Effect::Cyan,   "\x1b[36m", "\x1b[39m")]
    fn escape_pair_sequences(effect: Effect, start: &str, end: &str) {
        let pair = effect.escape_pair();
        assert_eq!(pair.start.to_string(), start);
        assert_eq!(pair.end.to_string(), end);
    }
}
