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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SgrCode {
    Bold,
    Italic,
    ForegroundCyan,
    /// SGR 22 switches off both bold and dim weight.
    ResetBoldDim,
    ResetItalic,
    /// SGR 39 restores the terminal's default foreground color.
    ResetForeground,
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://www.asciitable.com/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Bold            => write!(f, "{CSI}1{SGR}"),
                SgrCode::Italic          => write!(f, "{CSI}3{SGR}"),
                SgrCode::ForegroundCyan  => write!(f, "{CSI}36{SGR}"),
                SgrCode::ResetBoldDim    => write!(f, "{CSI}22{SGR}"),
                SgrCode::ResetItalic     => write!(f, "{CSI}23{SGR}"),
                SgrCode::ResetForeground => write!(f, "{CSI}39{SGR}"),
            }
        }
    }
}
