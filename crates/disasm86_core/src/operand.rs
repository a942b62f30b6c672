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

    disasm86_core::operand.rs

    Operand types produced by the decoder and their assembler rendering.

*/

use std::{fmt, fmt::Display};

use crate::{
    addressing::AddressingMode,
    registers::{Register, Segment},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandSize {
    Operand8,
    Operand16,
}

impl OperandSize {
    /// Select the operand size from an instruction's `w` bit.
    #[inline(always)]
    pub fn from_w(wide: bool) -> OperandSize {
        if wide {
            OperandSize::Operand16
        }
        else {
            OperandSize::Operand8
        }
    }
}

impl Display for OperandSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSize::Operand8 => write!(f, "byte"),
            OperandSize::Operand16 => write!(f, "word"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    /// A memory reference. `segment` is an explicit override; `size` is present only when the
    /// width cannot be inferred from another operand.
    Memory {
        mode: AddressingMode,
        segment: Option<Segment>,
        size: Option<OperandSize>,
    },
    /// A literal value, already converted to the signedness it should be displayed with.
    Immediate { value: i32, size: Option<OperandSize> },
    FarPointer { segment: u16, offset: u16 },
    /// Branch target as a distance from the start of the current line.
    Relative(i64),
}

impl Operand {
    pub fn immediate(value: i32) -> Operand {
        Operand::Immediate { value, size: None }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, Operand::Memory { .. })
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Memory { mode, segment, size } => {
                if let Some(size) = size {
                    write!(f, "{} ", size)?;
                }
                if let Some(segment) = segment {
                    write!(f, "{}:", segment)?;
                }
                write!(f, "{}", mode)
            }
            Operand::Immediate { value, size } => match size {
                Some(size) => write!(f, "{} {}", size, value),
                None => write!(f, "{}", value),
            },
            Operand::FarPointer { segment, offset } => write!(f, "{}:{}", segment, offset),
            Operand::Relative(rel) => {
                if *rel < 0 {
                    write!(f, "$-{}", rel.unsigned_abs())
                }
                else {
                    write!(f, "$+{}", rel)
                }
            }
        }
    }
}
