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

    disasm86_core::modrm.rs

    Routines for reading and interpreting the ModR/M addressing-mode byte.

*/

//! Every possible ModR/M byte is pre-decoded into a const table of [ModRmByte] at compile time.
//! Reading a ModR/M byte returns a copy of its table entry plus any displacement that followed
//! it in the instruction stream, which can then be passed to `ModRmByte::addressing_mode()`
//! for resolution.

use crate::{
    addressing::{AddressingMode, Displacement, BASE_EXPR_LUT},
    bytebuf::ByteCursor,
    error::DasmError,
    registers::Register,
};

const MODRM_ADDR_MASK: u8 = 0b11_000_111;

const MODRM_ADDR_DISP16: u8 = 0b00_000_110;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModRmByte {
    b_mod: u8,
    b_reg: u8,
    b_rm: u8,
    disp: Displacement,
    addressing_mode: AddressingMode,
}

const MODRM_TABLE: [ModRmByte; 256] = {
    let mut table: [ModRmByte; 256] = [ModRmByte {
        b_mod: 0,
        b_reg: 0,
        b_rm: 0,
        disp: Displacement::NoDisp,
        addressing_mode: AddressingMode::RegisterMode,
    }; 256];
    let mut byte: usize = 0;

    while byte < 256 {
        let b = byte as u8;
        let b_mod = (b >> 6) & 0x03;
        // 'REG' field specifies either a register operand or an opcode extension. There's no way
        // to know without knowing the opcode, which we don't.
        let b_reg = (b >> 3) & 0x07;
        let b_rm = b & 0x07;

        let (disp, addressing_mode) = match b_mod {
            0b00 => {
                // [disp16] replaces what would otherwise be [bp] with no displacement
                if b & MODRM_ADDR_MASK == MODRM_ADDR_DISP16 {
                    (Displacement::Pending16, AddressingMode::Direct(0))
                }
                else {
                    (
                        Displacement::NoDisp,
                        AddressingMode::Indirect(BASE_EXPR_LUT[b_rm as usize], Displacement::NoDisp),
                    )
                }
            }
            // 0b01 signifies an 8 bit displacement (sign-extended to 16)
            0b01 => (
                Displacement::Pending8,
                AddressingMode::Indirect(BASE_EXPR_LUT[b_rm as usize], Displacement::Pending8),
            ),
            // 0b10 signifies a 16 bit displacement
            0b10 => (
                Displacement::Pending16,
                AddressingMode::Indirect(BASE_EXPR_LUT[b_rm as usize], Displacement::Pending16),
            ),
            _ => (Displacement::NoDisp, AddressingMode::RegisterMode),
        };

        table[byte] = ModRmByte {
            b_mod,
            b_reg,
            b_rm,
            disp,
            addressing_mode,
        };
        byte += 1;
    }

    table
};

impl ModRmByte {
    /// Look up a ModR/M byte without reading from the instruction stream.
    #[inline(always)]
    pub fn from_byte(byte: u8) -> ModRmByte {
        MODRM_TABLE[byte as usize]
    }

    /// Read the modrm byte and look up the appropriate value from the modrm table.
    /// Load any displacement, then return the modrm and the displacement read.
    pub fn read(bytes: &mut ByteCursor<'_>) -> Result<(ModRmByte, Displacement), DasmError> {
        let byte = bytes.read_u8()?;
        let modrm = MODRM_TABLE[byte as usize];
        let disp = modrm.read_displacement(bytes)?;
        Ok((modrm, disp))
    }

    /// Read any displacement the modrm might have.
    pub fn read_displacement(&self, bytes: &mut ByteCursor<'_>) -> Result<Displacement, DasmError> {
        match self.disp {
            Displacement::Pending8 => Ok(Displacement::Disp8(bytes.read_i8()?)),
            Displacement::Pending16 => Ok(Displacement::Disp16(bytes.read_i16_le()?)),
            _ => Ok(Displacement::NoDisp),
        }
    }

    #[inline(always)]
    pub fn rm(&self) -> u8 {
        self.b_rm
    }
    // Interpret the 'R/M' field as a register selector
    #[inline(always)]
    pub fn op1_reg(&self, wide: bool) -> Register {
        Register::from_index(self.b_rm, wide)
    }
    // Interpret the 'REG' field as a register selector
    #[inline(always)]
    pub fn op2_reg(&self, wide: bool) -> Register {
        Register::from_index(self.b_reg, wide)
    }
    // Interpret the 'REG' field as a segment register selector
    #[inline(always)]
    pub fn op2_segment(&self) -> Register {
        Register::from_segment_index(self.b_reg)
    }
    // Interpret the 'REG' field as a 3 bit opcode extension
    #[inline(always)]
    pub fn op_extension(&self) -> u8 {
        self.b_reg
    }
    // Return whether the modrm byte specifies a memory addressing mode
    #[inline(always)]
    pub fn is_addressing_mode(&self) -> bool {
        self.b_mod != 0b11
    }
    /// Produce an [AddressingMode] with the provided [Displacement] inserted.
    #[inline(always)]
    pub fn addressing_mode(&self, displacement: Displacement) -> AddressingMode {
        match self.addressing_mode {
            AddressingMode::Direct(_) => AddressingMode::Direct(displacement.get_u16()),
            AddressingMode::Indirect(base, _) => AddressingMode::Indirect(base, displacement),
            AddressingMode::RegisterMode => AddressingMode::RegisterMode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        // mod=11 reg=011 rm=000
        let modrm = ModRmByte::from_byte(0xD8);
        assert_eq!(modrm.op_extension(), 0b011);
        assert_eq!(modrm.rm(), 0b000);
        assert!(!modrm.is_addressing_mode());
        assert_eq!(modrm.op1_reg(true).to_string(), "ax");
        assert_eq!(modrm.op2_reg(true).to_string(), "bx");
        assert_eq!(modrm.op2_reg(false).to_string(), "bl");
    }

    #[test]
    fn test_direct_address_ignores_width() {
        let bytes = [0x1E, 0x00, 0x01, 0x99];
        let mut cursor = ByteCursor::new(&bytes);
        let (modrm, disp) = ModRmByte::read(&mut cursor).unwrap();

        assert_eq!(cursor.tell(), 3);
        assert_eq!(modrm.addressing_mode(disp), AddressingMode::Direct(256));
    }

    #[test]
    fn test_displacement_lengths() {
        for byte in 0..=255u8 {
            let modrm = ModRmByte::from_byte(byte);
            let expected = match (byte >> 6, byte & 0x07) {
                (0b00, 0b110) => 2,
                (0b00, _) => 0,
                (0b01, _) => 1,
                (0b10, _) => 2,
                _ => 0,
            };
            let bytes = [byte, 0x00, 0x00];
            let mut cursor = ByteCursor::new(&bytes);
            ModRmByte::read(&mut cursor).unwrap();
            assert_eq!(cursor.tell() - 1, expected, "modrm {:02X}", byte);
        }
    }

    #[test]
    fn test_read_disp8() {
        // mod=01 reg=000 rm=110 -> [bp + disp8]
        let bytes = [0x46, 0xFE];
        let mut cursor = ByteCursor::new(&bytes);
        let (modrm, disp) = ModRmByte::read(&mut cursor).unwrap();
        assert_eq!(disp, Displacement::Disp8(-2));
        assert_eq!(modrm.addressing_mode(disp).to_string(), "[bp - 2]");
    }

    #[test]
    fn test_read_disp16() {
        // mod=10 reg=000 rm=000 -> [bx+si + disp16]
        let bytes = [0x80, 0x87, 0x13];
        let mut cursor = ByteCursor::new(&bytes);
        let (modrm, disp) = ModRmByte::read(&mut cursor).unwrap();
        assert_eq!(modrm.addressing_mode(disp).to_string(), "[bx+si + 4999]");
    }

    #[test]
    fn test_truncated_displacement() {
        let bytes = [0x80, 0x87];
        let mut cursor = ByteCursor::new(&bytes);
        assert!(ModRmByte::read(&mut cursor).is_err());
    }
}
