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

    disasm86_core::decoder::stack.rs

    Decoding of the register-embedded push/pop/inc/dec forms and the segment register stack ops.

*/

use crate::{
    decoder::{Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
    operand::Operand,
    registers::Register,
};

impl Decoder<'_> {
    /// 0x40-0x5F: inc, dec, push, pop with a word register in bits 0-2.
    pub(crate) fn decode_word_register(&mut self, opcode: u8, mnemonic: Mnemonic) -> Decoded {
        let reg = Register::from_index(opcode & 0x07, true);
        Decoded::Instruction(Instruction::unary(mnemonic, Operand::Register(reg)))
    }

    /// push/pop es, cs, ss, ds. The segment register is in bits 3-4.
    pub(crate) fn decode_push_pop_segment(&mut self, opcode: u8, mnemonic: Mnemonic) -> Decoded {
        let sreg = Register::from_segment_index(opcode >> 3);
        Decoded::Instruction(Instruction::unary(mnemonic, Operand::Register(sreg)))
    }

    /// 0x8F: pop r/m16
    pub(crate) fn decode_pop_rm(&mut self, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let (_, rm) = self.read_rm(true, true)?;
        Ok(Decoded::Instruction(Instruction::unary(mnemonic, rm)))
    }
}
