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

    disasm86_core::decoder::muldiv.rs

    Decoding of group 3 (0xF6, 0xF7): test, not, neg, mul, imul, div, idiv.

*/

use crate::{
    decoder::{Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
};

// Extension 1 is an undocumented alias of test.
const GROUP3_MNEMONICS: [Mnemonic; 8] = [
    Mnemonic::TEST,
    Mnemonic::TEST,
    Mnemonic::NOT,
    Mnemonic::NEG,
    Mnemonic::MUL,
    Mnemonic::IMUL,
    Mnemonic::DIV,
    Mnemonic::IDIV,
];

impl Decoder<'_> {
    pub(crate) fn decode_group3(&mut self, opcode: u8) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let (modrm, rm) = self.read_rm(w, true)?;

        let instruction = match GROUP3_MNEMONICS[modrm.op_extension() as usize] {
            Mnemonic::TEST => {
                // Only test carries an immediate, read after any displacement.
                let imm = self.read_immediate(w)?;
                Instruction::binary(Mnemonic::TEST, rm, imm)
            }
            mnemonic => Instruction::unary(mnemonic, rm),
        };
        Ok(Decoded::Instruction(instruction))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::decode_one;

    #[test]
    fn test_group3() {
        assert_eq!(decode_one(&[0xF6, 0xD8]), "neg al");
        assert_eq!(decode_one(&[0xF7, 0xD3]), "not bx");
        assert_eq!(decode_one(&[0xF7, 0x26, 0x00, 0x01]), "mul word [256]");
        assert_eq!(decode_one(&[0xF6, 0x7F, 0x10]), "idiv byte [bx + 16]");
        assert_eq!(decode_one(&[0xF7, 0xE9]), "imul cx");
        assert_eq!(decode_one(&[0xF6, 0xF3]), "div bl");
    }

    #[test]
    fn test_group3_test_immediate() {
        assert_eq!(decode_one(&[0xF6, 0x06, 0x10, 0x00, 0x80]), "test byte [16], -128");
        assert_eq!(decode_one(&[0xF7, 0xC1, 0x00, 0x01]), "test cx, 256");
        assert_eq!(decode_one(&[0xF6, 0xCB, 0x07]), "test bl, 7");
    }
}
