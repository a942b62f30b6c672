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

    disasm86_core::decoder::io.rs

    Decoding of in/out (0xE4-0xE7, 0xEC-0xEF).

*/

use crate::{
    decoder::{Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
    operand::Operand,
    registers::{Register, Register16},
};

impl Decoder<'_> {
    /// Bit 3 clear: the port is an immediate byte. Bit 3 set: the port is in dx.
    /// Bit 1 selects out, bit 0 the accumulator width.
    pub(crate) fn decode_in_out(&mut self, opcode: u8) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let port = if opcode & 0x08 == 0 {
            Operand::immediate(self.bytes.read_u8()? as i32)
        }
        else {
            Operand::Register(Register::Word(Register16::DX))
        };
        let acc = Operand::Register(Register::accumulator(w));

        let instruction = if opcode & 0x02 != 0 {
            Instruction::binary(Mnemonic::OUT, port, acc)
        }
        else {
            Instruction::binary(Mnemonic::IN, acc, port)
        };
        Ok(Decoded::Instruction(instruction))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::decode_one;

    #[test]
    fn test_fixed_port() {
        assert_eq!(decode_one(&[0xE4, 0x60]), "in al, 96");
        assert_eq!(decode_one(&[0xE5, 0xC8]), "in ax, 200");
        assert_eq!(decode_one(&[0xE6, 0x43]), "out 67, al");
        assert_eq!(decode_one(&[0xE7, 0x40]), "out 64, ax");
    }

    #[test]
    fn test_variable_port() {
        assert_eq!(decode_one(&[0xEC]), "in al, dx");
        assert_eq!(decode_one(&[0xED]), "in ax, dx");
        assert_eq!(decode_one(&[0xEE]), "out dx, al");
        assert_eq!(decode_one(&[0xEF]), "out dx, ax");
    }
}
