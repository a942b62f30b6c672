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

    disasm86_core::decoder::string.rs

    Decoding of the string instructions.

*/

use crate::{
    decoder::{Decoded, Decoder},
    instruction::Instruction,
    mnemonic::Mnemonic,
};

// Indexed by bits 1-3 of the opcode: (byte form, word form). 0xA8/0xA9 are test, not string ops.
const STRING_MNEMONICS: [Option<(Mnemonic, Mnemonic)>; 8] = [
    None,
    None,
    Some((Mnemonic::MOVSB, Mnemonic::MOVSW)),
    Some((Mnemonic::CMPSB, Mnemonic::CMPSW)),
    None,
    Some((Mnemonic::STOSB, Mnemonic::STOSW)),
    Some((Mnemonic::LODSB, Mnemonic::LODSW)),
    Some((Mnemonic::SCASB, Mnemonic::SCASW)),
];

impl Decoder<'_> {
    pub(crate) fn decode_string_op(&mut self, opcode: u8) -> Decoded {
        match STRING_MNEMONICS[((opcode >> 1) & 0x07) as usize] {
            Some((byte_form, word_form)) => {
                let mnemonic = if opcode & 0x01 != 0 { word_form } else { byte_form };
                Decoded::Instruction(Instruction::nullary(mnemonic))
            }
            None => Decoded::Unknown,
        }
    }
}
