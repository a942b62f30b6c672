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

    disasm86_core::decoder::bitwise.rs

    Decoding of the shift and rotate group (0xD0-0xD3).

*/

use crate::{
    decoder::{Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
    operand::Operand,
    registers::{Register, Register8},
};

// Extension 6 is undefined.
const SHIFT_MNEMONICS: [Option<Mnemonic>; 8] = [
    Some(Mnemonic::ROL),
    Some(Mnemonic::ROR),
    Some(Mnemonic::RCL),
    Some(Mnemonic::RCR),
    Some(Mnemonic::SAL),
    Some(Mnemonic::SHR),
    None,
    Some(Mnemonic::SAR),
];

impl Decoder<'_> {
    /// Bit 1 of the opcode selects a count of `cl` rather than 1.
    pub(crate) fn decode_shift(&mut self, opcode: u8) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let Some(mnemonic) = SHIFT_MNEMONICS[self.peek_modrm()?.op_extension() as usize]
        else {
            return Ok(Decoded::Unknown);
        };

        let (_, rm) = self.read_rm(w, true)?;
        let count = if opcode & 0x02 != 0 {
            Operand::Register(Register::Byte(Register8::CL))
        }
        else {
            Operand::immediate(1)
        };
        Ok(Decoded::Instruction(Instruction::binary(mnemonic, rm, count)))
    }
}
