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

    disasm86_core::addressing.rs

    Addressing mode and displacement types, and their assembler rendering.

*/

use std::{fmt, fmt::Display};

use strum_macros::IntoStaticStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Displacement {
    NoDisp,
    Pending8,
    Pending16,
    Disp8(i8),
    Disp16(i16),
}

impl Displacement {
    pub fn get_i16(&self) -> i16 {
        match self {
            Displacement::Disp8(disp) => *disp as i16,
            Displacement::Disp16(disp) => *disp,
            _ => 0,
        }
    }
    pub fn get_u16(&self) -> u16 {
        self.get_i16() as u16
    }
}

/// Renders a displacement as a suffix to a base expression: nothing for zero,
/// ` + N` when positive and ` - N` when negative.
pub(crate) struct WithSign(pub Displacement);

impl Display for WithSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disp = self.0.get_i16() as i32;
        if disp > 0 {
            write!(f, " + {}", disp)
        }
        else if disp < 0 {
            write!(f, " - {}", disp.unsigned_abs())
        }
        else {
            Ok(())
        }
    }
}

/// The base register expression selected by the R/M field when mod != 0b11.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
pub enum BaseExpr {
    #[strum(serialize = "bx+si")]
    BxSi,
    #[strum(serialize = "bx+di")]
    BxDi,
    #[strum(serialize = "bp+si")]
    BpSi,
    #[strum(serialize = "bp+di")]
    BpDi,
    #[strum(serialize = "si")]
    Si,
    #[strum(serialize = "di")]
    Di,
    #[strum(serialize = "bp")]
    Bp,
    #[strum(serialize = "bx")]
    Bx,
}

pub const BASE_EXPR_LUT: [BaseExpr; 8] = [
    BaseExpr::BxSi,
    BaseExpr::BxDi,
    BaseExpr::BpSi,
    BaseExpr::BpDi,
    BaseExpr::Si,
    BaseExpr::Di,
    BaseExpr::Bp,
    BaseExpr::Bx,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// Base expression plus optional displacement.
    Indirect(BaseExpr, Displacement),
    /// Absolute 16-bit address (mod == 0b00, rm == 0b110).
    Direct(u16),
    RegisterMode,
}

impl Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressingMode::Indirect(base, disp) => {
                let base: &'static str = base.into();
                write!(f, "[{}{}]", base, WithSign(*disp))
            }
            AddressingMode::Direct(addr) => write!(f, "[{}]", addr),
            AddressingMode::RegisterMode => write!(f, "Invalid addressing mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_sign() {
        assert_eq!(WithSign(Displacement::NoDisp).to_string(), "");
        assert_eq!(WithSign(Displacement::Disp8(0)).to_string(), "");
        assert_eq!(WithSign(Displacement::Disp16(0)).to_string(), "");
        assert_eq!(WithSign(Displacement::Disp8(4)).to_string(), " + 4");
        assert_eq!(WithSign(Displacement::Disp8(-37)).to_string(), " - 37");
        assert_eq!(WithSign(Displacement::Disp8(i8::MIN)).to_string(), " - 128");
        assert_eq!(WithSign(Displacement::Disp16(4999)).to_string(), " + 4999");
        assert_eq!(WithSign(Displacement::Disp16(i16::MIN)).to_string(), " - 32768");
    }

    #[test]
    fn test_addressing_display() {
        assert_eq!(
            AddressingMode::Indirect(BaseExpr::BxSi, Displacement::NoDisp).to_string(),
            "[bx+si]"
        );
        assert_eq!(
            AddressingMode::Indirect(BaseExpr::Bp, Displacement::Disp8(0)).to_string(),
            "[bp]"
        );
        assert_eq!(
            AddressingMode::Indirect(BaseExpr::BpDi, Displacement::Disp16(-1000)).to_string(),
            "[bp+di - 1000]"
        );
        assert_eq!(AddressingMode::Direct(256).to_string(), "[256]");
        assert_eq!(AddressingMode::Direct(0xFFFF).to_string(), "[65535]");
    }

    #[test]
    fn test_displacement_values() {
        assert_eq!(Displacement::Disp8(-1).get_u16(), 0xFFFF);
        assert_eq!(Displacement::Disp16(0x100).get_i16(), 256);
        assert_eq!(Displacement::Pending16.get_i16(), 0);
    }
}
