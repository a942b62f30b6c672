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

    disasm86_core::decoder::mod.rs

    The decode loop.

    A [Decoder] walks a byte slice from start to end. Each step reads one opcode byte, looks up
    its [OpcodeEntry] in the dispatch table and hands off to the strategy handler for that
    entry, which reads whatever bytes the encoding requires after the opcode. Handlers for
    each instruction family live in their own module as further impl blocks on [Decoder].

    Every step consumes at least the opcode byte, so decoding any finite buffer terminates.
    Unrecognized opcodes produce a [Diagnostic] and skip exactly one byte. A read past the end
    of the buffer aborts the session with [DasmError::BufferUnderrun].

*/

pub mod dispatch;
pub mod prefix;

mod alu;
mod bitwise;
mod io;
mod jump;
mod misc;
mod muldiv;
mod stack;
mod string;

use std::fmt::Write;

use crate::{
    addressing::AddressingMode,
    bytebuf::ByteCursor,
    error::DasmError,
    instruction::Instruction,
    listing::{Diagnostic, Disassembly, Listing, ListingOptions},
    modrm::ModRmByte,
    operand::{Operand, OperandSize},
};
use dispatch::{OpcodeEntry, Strategy};
use prefix::PrefixContext;

/// Outcome of decoding a single opcode byte.
#[derive(Debug)]
pub(crate) enum Decoded {
    Instruction(Instruction),
    Prefix,
    Unknown,
}

pub struct Decoder<'a> {
    pub(crate) bytes: ByteCursor<'a>,
    pub(crate) prefix: PrefixContext,
    // Offset of the opcode byte being decoded
    pub(crate) op_offset: usize,
    listing: Listing,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8], options: ListingOptions) -> Self {
        Decoder {
            bytes: ByteCursor::new(bytes),
            prefix: PrefixContext::default(),
            op_offset: 0,
            listing: Listing::new(options),
        }
    }

    /// Decode until the buffer is exhausted. On error the listing holds every line completed
    /// before the failing instruction.
    pub fn run(&mut self) -> Result<(), DasmError> {
        while !self.bytes.at_end() {
            self.step()?;
        }
        self.finish();
        Ok(())
    }

    /// Decode one opcode byte and whatever follows it.
    pub fn step(&mut self) -> Result<(), DasmError> {
        let offset = self.bytes.tell();
        let opcode = self.bytes.read_u8()?;
        self.op_offset = offset;

        let entry = dispatch::lookup(opcode);
        log::trace!(
            "{:05}: {:02X} {}",
            offset,
            opcode,
            <&'static str>::from(entry.strategy)
        );

        match self.decode(opcode, entry)? {
            Decoded::Instruction(instruction) => self.emit_instruction(&instruction),
            Decoded::Prefix => {}
            Decoded::Unknown => self.emit_unknown(opcode, offset),
        }
        Ok(())
    }

    pub fn offset(&self) -> usize {
        self.bytes.tell()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn into_disassembly(self) -> Disassembly {
        self.listing.into_disassembly()
    }

    #[rustfmt::skip]
    fn decode(&mut self, opcode: u8, entry: &OpcodeEntry) -> Result<Decoded, DasmError> {
        match (entry.strategy, entry.mnemonic) {
            (Strategy::SegmentOverride, _) => Ok(self.decode_segment_override(opcode)),
            (Strategy::LinePrefix, Some(m)) => Ok(self.decode_line_prefix(m)),
            (Strategy::RegRm, Some(m)) => self.decode_reg_rm(opcode, m),
            (Strategy::AccumulatorImmediate, Some(m)) => self.decode_accumulator_immediate(opcode, m),
            (Strategy::RegisterImmediate, Some(m)) => self.decode_register_immediate(opcode, m),
            (Strategy::Group1, _) => self.decode_group1(opcode),
            (Strategy::MovRmImmediate, Some(m)) => self.decode_mov_rm_immediate(opcode, m),
            (Strategy::MovAccumulatorMemory, Some(m)) => self.decode_mov_accumulator_memory(opcode, m),
            (Strategy::MovSegment, Some(m)) => self.decode_mov_segment(opcode, m),
            (Strategy::LoadAddress, Some(m)) => self.decode_load_address(m),
            (Strategy::XchgAccumulator, Some(m)) => Ok(self.decode_xchg_accumulator(opcode, m)),
            (Strategy::WordRegister, Some(m)) => Ok(self.decode_word_register(opcode, m)),
            (Strategy::PushPopSegment, Some(m)) => Ok(self.decode_push_pop_segment(opcode, m)),
            (Strategy::PopRm, Some(m)) => self.decode_pop_rm(m),
            (Strategy::Group3, _) => self.decode_group3(opcode),
            (Strategy::Group5, _) => self.decode_group5(opcode),
            (Strategy::Shift, _) => self.decode_shift(opcode),
            (Strategy::Relative8, Some(m)) => self.decode_relative8(m),
            (Strategy::Relative16, Some(m)) => self.decode_relative16(m),
            (Strategy::FarDirect, Some(m)) => self.decode_far_direct(m),
            (Strategy::Return, Some(m)) => self.decode_return(opcode, m),
            (Strategy::Interrupt, _) => self.decode_interrupt(opcode),
            (Strategy::InOut, _) => self.decode_in_out(opcode),
            (Strategy::StringOp, _) => Ok(self.decode_string_op(opcode)),
            (Strategy::Nullary, Some(m)) => Ok(Decoded::Instruction(Instruction::nullary(m))),
            (Strategy::AsciiAdjust, Some(m)) => self.decode_ascii_adjust(m),
            (Strategy::Escape, Some(m)) => self.decode_escape(opcode, m),
            _ => Ok(Decoded::Unknown),
        }
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        let mut line = self.prefix.take_line_prefix();
        // Writing to a String cannot fail.
        match self.prefix.end_line() {
            Some(segment) if instruction.mnemonic.has_implicit_memory() => {
                let _ = write!(line, "{} ", segment);
            }
            Some(segment) => {
                log::debug!(
                    "Discarding unused segment override {}: for '{}' at offset {}",
                    segment,
                    instruction,
                    self.op_offset
                );
            }
            None => {}
        }
        let _ = write!(line, "{}", instruction);
        self.listing.push_line(&line);
    }

    fn emit_unknown(&mut self, opcode: u8, offset: usize) {
        // Pending prefix text belongs to earlier bytes; keep it ahead of the warning.
        if self.prefix.has_line_prefix() {
            let pending = self.prefix.take_line_prefix();
            self.listing.push_line(pending.trim_end());
        }
        if let Some(segment) = self.prefix.end_line() {
            log::debug!("Discarding segment override {}: before unknown opcode", segment);
        }

        log::warn!("Unknown opcode {:02X} at offset {}", opcode, offset);
        self.listing.push_diagnostic(Diagnostic { opcode, offset });
    }

    fn finish(&mut self) {
        if self.prefix.has_line_prefix() {
            let pending = self.prefix.take_line_prefix();
            log::debug!("Buffer ended with pending prefix '{}'", pending.trim_end());
            self.listing.push_partial(&pending);
        }
        if let Some(segment) = self.prefix.end_line() {
            log::debug!("Buffer ended with pending segment override {}:", segment);
        }
    }

    /// Offset at which the line currently being decoded begins: its first prefix byte, or the
    /// opcode itself.
    pub(crate) fn line_start(&self) -> usize {
        self.prefix.line_start().unwrap_or(self.op_offset)
    }

    /// Inspect the ModR/M byte following the opcode without consuming it.
    pub(crate) fn peek_modrm(&self) -> Result<ModRmByte, DasmError> {
        match self.bytes.peek_u8(0) {
            Some(byte) => Ok(ModRmByte::from_byte(byte)),
            None => Err(DasmError::BufferUnderrun {
                offset:    self.bytes.tell(),
                wanted:    1,
                remaining: 0,
            }),
        }
    }

    /// Read a ModR/M byte and its displacement, resolving the r/m field into an operand.
    /// `annotate` requests a size annotation on a memory operand.
    pub(crate) fn read_rm(&mut self, wide: bool, annotate: bool) -> Result<(ModRmByte, Operand), DasmError> {
        let (modrm, disp) = ModRmByte::read(&mut self.bytes)?;
        let operand = if modrm.is_addressing_mode() {
            self.memory_operand(modrm.addressing_mode(disp), annotate.then_some(OperandSize::from_w(wide)))
        }
        else {
            Operand::Register(modrm.op1_reg(wide))
        };
        Ok((modrm, operand))
    }

    /// Build a memory operand, consuming any pending segment override.
    pub(crate) fn memory_operand(&mut self, mode: AddressingMode, size: Option<OperandSize>) -> Operand {
        Operand::Memory {
            mode,
            segment: self.prefix.take_segment_override(),
            size,
        }
    }

    /// Read a signed immediate of the given width.
    pub(crate) fn read_immediate(&mut self, wide: bool) -> Result<Operand, DasmError> {
        let value = if wide {
            self.bytes.read_i16_le()? as i32
        }
        else {
            self.bytes.read_i8()? as i32
        };
        Ok(Operand::immediate(value))
    }

    /// Resolve a displacement relative to the end of the instruction into a distance from the
    /// start of the current line.
    pub(crate) fn relative(&self, disp: i32) -> Operand {
        let target = self.bytes.tell() as i64 + disp as i64;
        Operand::Relative(target - self.line_start() as i64)
    }
}
