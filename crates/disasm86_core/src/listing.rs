/*
    MartyPC
    https://github.com/dbalsom/martypc

    Copyright 2022-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    disasm86_core::listing.rs

    Listing output options, diagnostics and the text builder the decoder writes into.

*/

use std::{fmt, fmt::Display, str::FromStr};

use serde::Deserialize;

pub const LISTING_HEADER: &str = "bits 16";

/// Where unknown-opcode warnings are written.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticMode {
    /// Warning lines are interleaved with the listing in byte-offset order.
    #[default]
    Inline,
    /// Warnings are kept out of the listing text.
    Stderr,
}

impl FromStr for DiagnosticMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, String>
    where
        Self: Sized,
    {
        match s.to_lowercase().as_str() {
            "inline" => Ok(DiagnosticMode::Inline),
            "stderr" => Ok(DiagnosticMode::Stderr),
            _ => Err("Bad value for diagnostics mode".to_string()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListingOptions {
    pub header: bool,
    pub diagnostics: DiagnosticMode,
}

impl Default for ListingOptions {
    fn default() -> Self {
        ListingOptions {
            header: true,
            diagnostics: DiagnosticMode::Inline,
        }
    }
}

/// An unrecognized opcode byte and the offset it was found at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub opcode: u8,
    pub offset: usize,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[WARNING] Unknown opcode 0x{:02x} at position {}", self.opcode, self.offset)
    }
}

/// The result of a completed session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disassembly {
    pub text: String,
    /// Every diagnostic raised, regardless of [DiagnosticMode].
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Debug)]
pub struct Listing {
    options: ListingOptions,
    text: String,
    diagnostics: Vec<Diagnostic>,
}

impl Listing {
    pub fn new(options: ListingOptions) -> Self {
        let mut text = String::new();
        if options.header {
            text.push_str(LISTING_HEADER);
            text.push_str("\n\n");
        }
        Listing {
            options,
            text,
            diagnostics: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Append text with no line terminator.
    pub fn push_partial(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        if let DiagnosticMode::Inline = self.options.diagnostics {
            self.push_line(&diagnostic.to_string());
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn into_disassembly(self) -> Disassembly {
        Disassembly {
            text: self.text,
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let listing = Listing::new(ListingOptions::default());
        assert_eq!(listing.text(), "bits 16\n\n");

        let listing = Listing::new(ListingOptions {
            header: false,
            ..Default::default()
        });
        assert_eq!(listing.text(), "");
    }

    #[test]
    fn test_diagnostic_format() {
        let diag = Diagnostic {
            opcode: 0xF1,
            offset: 0,
        };
        assert_eq!(diag.to_string(), "[WARNING] Unknown opcode 0xf1 at position 0");
    }

    #[test]
    fn test_diagnostic_modes() {
        let diag = Diagnostic {
            opcode: 0x0a,
            offset: 12,
        };

        let mut inline = Listing::new(ListingOptions::default());
        inline.push_diagnostic(diag);
        assert!(inline.text().ends_with("[WARNING] Unknown opcode 0x0a at position 12\n"));

        let mut stderr = Listing::new(ListingOptions {
            header: true,
            diagnostics: DiagnosticMode::Stderr,
        });
        stderr.push_diagnostic(diag);
        assert_eq!(stderr.text(), "bits 16\n\n");

        let result = stderr.into_disassembly();
        assert_eq!(result.diagnostics, vec![diag]);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("INLINE".parse::<DiagnosticMode>(), Ok(DiagnosticMode::Inline));
        assert_eq!("stderr".parse::<DiagnosticMode>(), Ok(DiagnosticMode::Stderr));
        assert!("stdout".parse::<DiagnosticMode>().is_err());
    }
}
