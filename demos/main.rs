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

use r3bl_text_styler::{AnsiStyledText, Effect, bold, cyan, italic};

fn main() {
    // Wrap a string in a single effect.
    {
        bold("Print a bold string w/ an ANSI SGR escape pair.").println();
        italic("Print an italic string w/ an ANSI SGR escape pair.").println();
        cyan("Print a cyan string w/ an ANSI SGR escape pair.").println();
    }

    // Verbose struct construction.
    {
        AnsiStyledText {
            text: "Construct the styled text directly.",
            effect: Effect::Italic,
        }
        .println();
    }

    // Each pair resets only its own attribute, so combining effects is done by
    // nesting calls manually.
    {
        let inner = cyan("bold and cyan").to_string();
        bold(&inner).println();
    }

    // Show the raw bytes that make up a rendering.
    {
        let msg = format!("raw rendering: {:?}", bold("hi").to_string());
        cyan(&msg).println();
    }
}
