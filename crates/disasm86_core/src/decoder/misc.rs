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

    disasm86_core::decoder::misc.rs

    Decoding of group 4/5 (0xFE, 0xFF), ascii adjust with an operand byte, and coprocessor escapes.

*/

use crate::{
    decoder::{Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
    operand::Operand,
};

const GROUP5_MNEMONICS: [Option<Mnemonic>; 8] = [
    Some(Mnemonic::INC),
    Some(Mnemonic::DEC),
    Some(Mnemonic::CALL),
    Some(Mnemonic::CALLF),
    Some(Mnemonic::JMP),
    Some(Mnemonic::JMPF),
    Some(Mnemonic::PUSH),
    None,
];

impl Decoder<'_> {
    /// 0xFE only defines inc and dec of a byte operand. 0xFF defines all extensions but 7.
    /// Indirect transfers take their size from the mnemonic and are not annotated.
    pub(crate) fn decode_group5(&mut self, opcode: u8) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let ext = self.peek_modrm()?.op_extension();
        let mnemonic = match GROUP5_MNEMONICS[ext as usize] {
            Some(mnemonic) if w || ext < 2 => mnemonic,
            _ => return Ok(Decoded::Unknown),
        };

        let annotate = !(2..=5).contains(&ext);
        let (_, rm) = self.read_rm(w, annotate)?;
        Ok(Decoded::Instruction(Instruction::unary(mnemonic, rm)))
    }

    /// aam/aad carry a base byte, normally 10, which is not rendered.
    pub(crate) fn decode_ascii_adjust(&mut self, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let base = self.bytes.read_u8()?;
        if base != 0x0A {
            log::debug!("{} with base {} at offset {}", mnemonic, base, self.op_offset);
        }
        Ok(Decoded::Instruction(Instruction::nullary(mnemonic)))
    }

    /// 0xD8-0xDF: the low three opcode bits and the ModR/M reg field form a 6-bit code.
    pub(crate) fn decode_escape(&mut self, opcode: u8, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let (modrm, rm) = self.read_rm(true, false)?;
        let code = ((opcode & 0x07) << 3) | modrm.op_extension();
        Ok(Decoded::Instruction(Instruction::binary(
            mnemonic,
            Operand::immediate(code as i32),
            rm,
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{decode_one, decode_text};

    #[test]
    fn test_group5() {
        assert_eq!(decode_one(&[0xFF, 0x06, 0x00, 0x01]), "inc word [256]");
        assert_eq!(decode_one(&[0xFF, 0xC9]), "dec cx");
        assert_eq!(decode_one(&[0xFF, 0x17]), "call [bx]");
        assert_eq!(decode_one(&[0xFF, 0x1F]), "call far [bx]");
        assert_eq!(decode_one(&[0xFF, 0xE0]), "jmp ax");
        assert_eq!(decode_one(&[0x2E, 0xFF, 0x2E, 0x34, 0x12]), "jmp far cs:[4660]");
        assert_eq!(decode_one(&[0xFF, 0x76, 0x04]), "push word [bp + 4]");
    }

    #[test]
    fn test_group4() {
        assert_eq!(decode_one(&[0xFE, 0x07]), "inc byte [bx]");
        assert_eq!(decode_one(&[0xFE, 0xCC]), "dec ah");
    }

    #[test]
    fn test_undefined_extensions() {
        // FE /2 and FF /7 skip the opcode only; the ModR/M byte is decoded on its own.
        assert_eq!(
            decode_text(&[0xFE, 0x17]),
            "[WARNING] Unknown opcode 0xfe at position 0\npop ss\n"
        );
        assert_eq!(
            decode_text(&[0xFF, 0xFF, 0xC0]),
            "[WARNING] Unknown opcode 0xff at position 0\ninc ax\n"
        );
    }

    #[test]
    fn test_ascii_adjust() {
        assert_eq!(decode_one(&[0xD4, 0x0A]), "aam");
        assert_eq!(decode_one(&[0xD5, 0x0A]), "aad");
    }

    #[test]
    fn test_escape() {
        assert_eq!(decode_one(&[0xD9, 0x06, 0x00, 0x01]), "esc 8, [256]");
        assert_eq!(decode_one(&[0xDF, 0xF8]), "esc 63, ax");
        assert_eq!(decode_one(&[0xD8, 0x47, 0x02]), "esc 0, [bx + 2]");
    }
}
