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

    disasm86_core::registers.rs

    Register and segment register naming tables.

*/

use std::fmt;

use strum_macros::IntoStaticStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "lowercase")]
pub enum Register8 {
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "lowercase")]
pub enum Register16 {
    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "lowercase")]
pub enum Segment {
    ES,
    CS,
    SS,
    DS,
}

pub const REGISTER8_LUT: [Register8; 8] = [
    Register8::AL,
    Register8::CL,
    Register8::DL,
    Register8::BL,
    Register8::AH,
    Register8::CH,
    Register8::DH,
    Register8::BH,
];

pub const REGISTER16_LUT: [Register16; 8] = [
    Register16::AX,
    Register16::CX,
    Register16::DX,
    Register16::BX,
    Register16::SP,
    Register16::BP,
    Register16::SI,
    Register16::DI,
];

pub const SREGISTER_LUT: [Segment; 4] = [Segment::ES, Segment::CS, Segment::SS, Segment::DS];

/// Any register that can appear as an operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    Byte(Register8),
    Word(Register16),
    Segment(Segment),
}

impl Register {
    /// Resolve a 3-bit register field. `wide` is the instruction's `w` bit.
    #[inline(always)]
    pub fn from_index(index: u8, wide: bool) -> Register {
        if wide {
            Register::Word(REGISTER16_LUT[(index & 0x07) as usize])
        }
        else {
            Register::Byte(REGISTER8_LUT[(index & 0x07) as usize])
        }
    }

    /// Resolve a 2-bit segment register field.
    #[inline(always)]
    pub fn from_segment_index(index: u8) -> Register {
        Register::Segment(SREGISTER_LUT[(index & 0x03) as usize])
    }

    /// The accumulator of the given width.
    pub fn accumulator(wide: bool) -> Register {
        Register::from_index(0, wide)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Register::Byte(r) => r.into(),
            Register::Word(r) => r.into(),
            Register::Segment(s) => s.into(),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}
