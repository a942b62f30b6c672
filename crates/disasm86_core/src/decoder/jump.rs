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

    disasm86_core::decoder::jump.rs

    Decoding of control transfer instructions: relative jumps and calls, far direct transfers,
    returns and interrupts.

    Relative targets are rendered as an offset from the start of the line ($+N), computed from
    the cursor position after the displacement has been read.

*/

use crate::{
    decoder::{Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
    operand::Operand,
};

impl Decoder<'_> {
    /// Conditional jumps, the loop family, jcxz and jmp short.
    pub(crate) fn decode_relative8(&mut self, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let disp = self.bytes.read_i8()? as i32;
        Ok(Decoded::Instruction(Instruction::unary(mnemonic, self.relative(disp))))
    }

    /// 0xE8 call near, 0xE9 jmp near.
    pub(crate) fn decode_relative16(&mut self, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let disp = self.bytes.read_i16_le()? as i32;
        Ok(Decoded::Instruction(Instruction::unary(mnemonic, self.relative(disp))))
    }

    /// 0x9A call far, 0xEA jmp far.
    pub(crate) fn decode_far_direct(&mut self, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let (segment, offset) = self.bytes.read_farptr16()?;
        Ok(Decoded::Instruction(Instruction::unary(
            mnemonic,
            Operand::FarPointer { segment, offset },
        )))
    }

    /// ret/retf. The even opcodes take a 16-bit count of bytes to release from the stack.
    pub(crate) fn decode_return(&mut self, opcode: u8, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        if opcode & 0x01 == 0 {
            let count = self.bytes.read_u16_le()?;
            Ok(Decoded::Instruction(Instruction::unary(
                mnemonic,
                Operand::immediate(count as i32),
            )))
        }
        else {
            Ok(Decoded::Instruction(Instruction::nullary(mnemonic)))
        }
    }

    /// 0xCC int3, 0xCD int imm8, 0xCE into, 0xCF iret.
    pub(crate) fn decode_interrupt(&mut self, opcode: u8) -> Result<Decoded, DasmError> {
        let instruction = match opcode & 0x03 {
            0 => Instruction::nullary(Mnemonic::INT3),
            1 => {
                let vector = self.bytes.read_u8()?;
                Instruction::unary(Mnemonic::INT, Operand::immediate(vector as i32))
            }
            2 => Instruction::nullary(Mnemonic::INTO),
            _ => Instruction::nullary(Mnemonic::IRET),
        };
        Ok(Decoded::Instruction(instruction))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{decode_one, decode_text};

    #[test]
    fn test_short_jumps() {
        assert_eq!(decode_one(&[0x75, 0xFC]), "jne $-2");
        assert_eq!(decode_one(&[0x74, 0x00]), "je $+2");
        assert_eq!(decode_one(&[0x7C, 0x10]), "jl $+18");
        assert_eq!(decode_one(&[0xE2, 0xFE]), "loop $+0");
        assert_eq!(decode_one(&[0xE3, 0x05]), "jcxz $+7");
        assert_eq!(decode_one(&[0xEB, 0x80]), "jmp $-126");
    }

    #[test]
    fn test_relative_mid_stream() {
        // The distance does not depend on where the line sits in the buffer.
        assert_eq!(decode_text(&[0x90, 0x90, 0x73, 0xFA]), "nop\nnop\njnb $-4\n");
    }

    #[test]
    fn test_near_transfers() {
        assert_eq!(decode_one(&[0xE8, 0x00, 0x00]), "call $+3");
        assert_eq!(decode_one(&[0xE9, 0xFD, 0xFF]), "jmp $+0");
        assert_eq!(decode_one(&[0xE9, 0x00, 0x10]), "jmp $+4099");
    }

    #[test]
    fn test_far_direct() {
        assert_eq!(decode_one(&[0xEA, 0x88, 0x77, 0x34, 0x12]), "jmp 4660:30600");
        assert_eq!(decode_one(&[0x9A, 0x00, 0x00, 0x00, 0xF0]), "call 61440:0");
    }

    #[test]
    fn test_returns() {
        assert_eq!(decode_one(&[0xC3]), "ret");
        assert_eq!(decode_one(&[0xC2, 0x08, 0x00]), "ret 8");
        assert_eq!(decode_one(&[0xCB]), "retf");
        assert_eq!(decode_one(&[0xCA, 0xFE, 0xFF]), "retf 65534");
    }

    #[test]
    fn test_interrupts() {
        assert_eq!(decode_one(&[0xCC]), "int3");
        assert_eq!(decode_one(&[0xCD, 0x21]), "int 33");
        assert_eq!(decode_one(&[0xCD, 0xFF]), "int 255");
        assert_eq!(decode_one(&[0xCE]), "into");
        assert_eq!(decode_one(&[0xCF]), "iret");
    }
}
