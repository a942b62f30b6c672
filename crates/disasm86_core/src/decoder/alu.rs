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

    disasm86_core::decoder::alu.rs

    Decoding of the dyadic ALU and data movement encodings.

*/

use crate::{
    addressing::AddressingMode,
    decoder::{dispatch::ALU_MNEMONICS, Decoded, Decoder},
    error::DasmError,
    instruction::Instruction,
    mnemonic::Mnemonic,
    operand::{Operand, OperandSize},
    registers::Register,
};

impl Decoder<'_> {
    /// reg, r/m forms. Bit 1 of the opcode is the direction bit, bit 0 the width bit.
    pub(crate) fn decode_reg_rm(&mut self, opcode: u8, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let d = opcode & 0x02 != 0;
        let w = opcode & 0x01 != 0;
        let (modrm, rm) = self.read_rm(w, false)?;
        let reg = Operand::Register(modrm.op2_reg(w));
        Ok(Decoded::Instruction(Instruction::directed(mnemonic, d, rm, reg)))
    }

    pub(crate) fn decode_accumulator_immediate(
        &mut self,
        opcode: u8,
        mnemonic: Mnemonic,
    ) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let imm = self.read_immediate(w)?;
        Ok(Decoded::Instruction(Instruction::binary(
            mnemonic,
            Operand::Register(Register::accumulator(w)),
            imm,
        )))
    }

    /// 0xB0-0xBF: mov reg, imm. Width is bit 3 and the register bits 0-2.
    pub(crate) fn decode_register_immediate(&mut self, opcode: u8, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let w = opcode & 0x08 != 0;
        let reg = Register::from_index(opcode & 0x07, w);
        let imm = self.read_immediate(w)?;
        Ok(Decoded::Instruction(Instruction::binary(mnemonic, Operand::Register(reg), imm)))
    }

    /// 0x80-0x83: ALU operation r/m, imm. The operation is selected by the ModR/M reg field.
    /// Only 0x81 carries a word immediate; 0x83 carries a byte that is sign-extended to a word
    /// and 0x82 is an alias of 0x80.
    pub(crate) fn decode_group1(&mut self, opcode: u8) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let (modrm, rm) = self.read_rm(w, true)?;
        let mnemonic = ALU_MNEMONICS[modrm.op_extension() as usize];
        let imm = self.read_immediate(opcode == 0x81)?;
        Ok(Decoded::Instruction(Instruction::binary(mnemonic, rm, imm)))
    }

    /// 0xC6, 0xC7: mov r/m, imm. The size is annotated on the immediate.
    pub(crate) fn decode_mov_rm_immediate(&mut self, opcode: u8, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let (_, rm) = self.read_rm(w, false)?;
        let size = rm.is_memory().then_some(OperandSize::from_w(w));
        let imm = match self.read_immediate(w)? {
            Operand::Immediate { value, .. } => Operand::Immediate { value, size },
            other => other,
        };
        Ok(Decoded::Instruction(Instruction::binary(mnemonic, rm, imm)))
    }

    /// 0xA0-0xA3: mov between the accumulator and a direct address. Bit 1 set stores to memory.
    pub(crate) fn decode_mov_accumulator_memory(
        &mut self,
        opcode: u8,
        mnemonic: Mnemonic,
    ) -> Result<Decoded, DasmError> {
        let w = opcode & 0x01 != 0;
        let to_memory = opcode & 0x02 != 0;
        let addr = self.bytes.read_u16_le()?;
        let mem = self.memory_operand(AddressingMode::Direct(addr), None);
        let acc = Operand::Register(Register::accumulator(w));

        let instruction = if to_memory {
            Instruction::binary(mnemonic, mem, acc)
        }
        else {
            Instruction::binary(mnemonic, acc, mem)
        };
        Ok(Decoded::Instruction(instruction))
    }

    /// 0x8C: mov r/m16, sreg. 0x8E: mov sreg, r/m16.
    pub(crate) fn decode_mov_segment(&mut self, opcode: u8, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let d = opcode & 0x02 != 0;
        let (modrm, rm) = self.read_rm(true, false)?;
        let sreg = Operand::Register(modrm.op2_segment());
        Ok(Decoded::Instruction(Instruction::directed(mnemonic, d, rm, sreg)))
    }

    /// lea, lds, les: always a word register destination.
    pub(crate) fn decode_load_address(&mut self, mnemonic: Mnemonic) -> Result<Decoded, DasmError> {
        let (modrm, rm) = self.read_rm(true, false)?;
        let reg = Operand::Register(modrm.op2_reg(true));
        Ok(Decoded::Instruction(Instruction::binary(mnemonic, reg, rm)))
    }

    /// 0x91-0x97: xchg ax, reg16
    pub(crate) fn decode_xchg_accumulator(&mut self, opcode: u8, mnemonic: Mnemonic) -> Decoded {
        Decoded::Instruction(Instruction::binary(
            mnemonic,
            Operand::Register(Register::accumulator(true)),
            Operand::Register(Register::from_index(opcode & 0x07, true)),
        ))
    }
}
