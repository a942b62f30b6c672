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

    disasm86_core::instruction.rs

    A decoded instruction: a mnemonic and up to two operands.

*/

use std::{fmt, fmt::Display};

use crate::{mnemonic::Mnemonic, operand::Operand};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub operand1: Option<Operand>,
    pub operand2: Option<Operand>,
}

impl Instruction {
    pub fn nullary(mnemonic: Mnemonic) -> Instruction {
        Instruction {
            mnemonic,
            operand1: None,
            operand2: None,
        }
    }

    pub fn unary(mnemonic: Mnemonic, operand: Operand) -> Instruction {
        Instruction {
            mnemonic,
            operand1: Some(operand),
            operand2: None,
        }
    }

    pub fn binary(mnemonic: Mnemonic, operand1: Operand, operand2: Operand) -> Instruction {
        Instruction {
            mnemonic,
            operand1: Some(operand1),
            operand2: Some(operand2),
        }
    }

    /// Build a two-operand instruction from a register/memory operand and a register operand,
    /// ordered by the opcode's direction bit. With `d` set the register is the destination.
    pub fn directed(mnemonic: Mnemonic, d: bool, rm: Operand, reg: Operand) -> Instruction {
        if d {
            Instruction::binary(mnemonic, reg, rm)
        }
        else {
            Instruction::binary(mnemonic, rm, reg)
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        match (&self.operand1, &self.operand2) {
            (Some(op1), Some(op2)) => write!(f, " {}, {}", op1, op2),
            (Some(op1), None) => write!(f, " {}", op1),
            (None, Some(op2)) => write!(f, " {}", op2),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::Register;

    #[test]
    fn test_display() {
        let ax = Operand::Register(Register::from_index(0, true));
        let bx = Operand::Register(Register::from_index(3, true));

        assert_eq!(Instruction::nullary(Mnemonic::CLD).to_string(), "cld");
        assert_eq!(Instruction::unary(Mnemonic::PUSH, bx).to_string(), "push bx");
        assert_eq!(Instruction::binary(Mnemonic::MOV, ax, bx).to_string(), "mov ax, bx");
    }

    #[test]
    fn test_direction() {
        let ax = Operand::Register(Register::from_index(0, true));
        let bx = Operand::Register(Register::from_index(3, true));

        assert_eq!(Instruction::directed(Mnemonic::MOV, false, ax, bx).to_string(), "mov ax, bx");
        assert_eq!(Instruction::directed(Mnemonic::MOV, true, ax, bx).to_string(), "mov bx, ax");
    }
}
