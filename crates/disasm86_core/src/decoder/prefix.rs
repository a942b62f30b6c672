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

    disasm86_core::decoder::prefix.rs

    Prefix state carried from prefix bytes to the instruction they modify.

*/

use crate::{
    decoder::{Decoded, Decoder},
    mnemonic::Mnemonic,
    registers::{Segment, SREGISTER_LUT},
};

/// Transient state set by prefix bytes.
///
/// A segment override is consumed by the first memory operand rendered after it and by nothing
/// else. It prints no text of its own, so it never moves the start of the line. Line prefix text
/// (`lock `, `rep `, `repne `) accumulates until the next line is emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixContext {
    segment_override: Option<Segment>,
    line_prefix: String,
    line_start: Option<usize>,
}

impl PrefixContext {
    pub fn set_segment_override(&mut self, segment: Segment) {
        // Only the last override before an instruction is effective.
        self.segment_override = Some(segment);
    }

    /// Clear and return the pending segment override.
    pub fn take_segment_override(&mut self) -> Option<Segment> {
        self.segment_override.take()
    }

    pub fn push_line_prefix(&mut self, mnemonic: Mnemonic, offset: usize) {
        self.line_prefix.push_str(mnemonic.as_str());
        self.line_prefix.push(' ');
        self.line_start.get_or_insert(offset);
    }

    pub fn has_line_prefix(&self) -> bool {
        !self.line_prefix.is_empty()
    }

    pub fn take_line_prefix(&mut self) -> String {
        std::mem::take(&mut self.line_prefix)
    }

    /// Offset of the first line prefix byte of the line being built, if any was seen.
    pub fn line_start(&self) -> Option<usize> {
        self.line_start
    }

    pub fn is_empty(&self) -> bool {
        self.segment_override.is_none() && self.line_prefix.is_empty()
    }

    /// Finish the current line. Returns a segment override that was never consumed.
    pub fn end_line(&mut self) -> Option<Segment> {
        self.line_start = None;
        self.segment_override.take()
    }
}

impl Decoder<'_> {
    /// 0x26, 0x2E, 0x36, 0x3E: segment register is encoded in bits 3-4.
    pub(crate) fn decode_segment_override(&mut self, opcode: u8) -> Decoded {
        let segment = SREGISTER_LUT[((opcode >> 3) & 0x03) as usize];
        log::debug!("Segment override {} at offset {}", segment, self.op_offset);
        self.prefix.set_segment_override(segment);
        Decoded::Prefix
    }

    pub(crate) fn decode_line_prefix(&mut self, mnemonic: Mnemonic) -> Decoded {
        log::debug!("Prefix {} at offset {}", mnemonic, self.op_offset);
        self.prefix.push_line_prefix(mnemonic, self.op_offset);
        Decoded::Prefix
    }
}
