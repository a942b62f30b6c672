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

    disasm86_core::decoder::dispatch.rs

    The 256 entry opcode dispatch table.

    Each first instruction byte maps to a decode strategy and, where the opcode alone fixes it,
    a mnemonic. Strategies that select their mnemonic from a sub-field of the opcode or of the
    ModR/M byte carry no mnemonic here. The table is built at compile time from contiguous
    opcode ranges, followed by single byte overrides for the irregular opcodes.

*/

use strum_macros::IntoStaticStr;

use crate::mnemonic::Mnemonic;

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
pub enum Strategy {
    Unknown,
    SegmentOverride,
    LinePrefix,
    // reg <-> r/m, ordered by the d bit
    RegRm,
    AccumulatorImmediate,
    RegisterImmediate,
    Group1,
    MovRmImmediate,
    MovAccumulatorMemory,
    MovSegment,
    LoadAddress,
    XchgAccumulator,
    WordRegister,
    PushPopSegment,
    PopRm,
    Group3,
    Group5,
    Shift,
    Relative8,
    Relative16,
    FarDirect,
    Return,
    Interrupt,
    InOut,
    StringOp,
    Nullary,
    AsciiAdjust,
    Escape,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub strategy: Strategy,
    pub mnemonic: Option<Mnemonic>,
}

const UNKNOWN: OpcodeEntry = OpcodeEntry {
    strategy: Strategy::Unknown,
    mnemonic: None,
};

// Mnemonics of the eight dyadic ALU operations, in the order they appear in the 0x00-0x3F block
// and in the group 1 extension field.
pub const ALU_MNEMONICS: [Mnemonic; 8] = [
    Mnemonic::ADD,
    Mnemonic::OR,
    Mnemonic::ADC,
    Mnemonic::SBB,
    Mnemonic::AND,
    Mnemonic::SUB,
    Mnemonic::XOR,
    Mnemonic::CMP,
];

pub const JCC_MNEMONICS: [Mnemonic; 16] = [
    Mnemonic::JO,
    Mnemonic::JNO,
    Mnemonic::JB,
    Mnemonic::JNB,
    Mnemonic::JE,
    Mnemonic::JNE,
    Mnemonic::JBE,
    Mnemonic::JA,
    Mnemonic::JS,
    Mnemonic::JNS,
    Mnemonic::JP,
    Mnemonic::JNP,
    Mnemonic::JL,
    Mnemonic::JNL,
    Mnemonic::JLE,
    Mnemonic::JG,
];

macro_rules! op {
    ($table:ident, $op:expr, $s:ident) => {
        $table[$op] = OpcodeEntry {
            strategy: Strategy::$s,
            mnemonic: None,
        };
    };
    ($table:ident, $op:expr, $s:ident, $m:ident) => {
        $table[$op] = OpcodeEntry {
            strategy: Strategy::$s,
            mnemonic: Some(Mnemonic::$m),
        };
    };
}

macro_rules! op_range {
    ($table:ident, $first:literal..=$last:literal, $s:ident) => {
        let mut i = $first;
        while i <= $last {
            op!($table, i, $s);
            i += 1;
        }
    };
    ($table:ident, $first:literal..=$last:literal, $s:ident, $m:ident) => {
        let mut i = $first;
        while i <= $last {
            op!($table, i, $s, $m);
            i += 1;
        }
    };
}

#[rustfmt::skip]
pub const DISPATCH: [OpcodeEntry; 256] = {
    let mut t = [UNKNOWN; 256];

    // The ALU block: for each of the eight operations, four reg/r-m forms followed by two
    // accumulator-immediate forms.
    let mut alu = 0;
    while alu < 8 {
        let base = alu * 8;
        let mnemonic = Some(ALU_MNEMONICS[alu]);
        let mut i = 0;
        while i < 4 {
            t[base + i] = OpcodeEntry { strategy: Strategy::RegRm, mnemonic };
            i += 1;
        }
        t[base + 4] = OpcodeEntry { strategy: Strategy::AccumulatorImmediate, mnemonic };
        t[base + 5] = OpcodeEntry { strategy: Strategy::AccumulatorImmediate, mnemonic };
        alu += 1;
    }

    let mut cc = 0;
    while cc < 16 {
        t[0x70 + cc] = OpcodeEntry { strategy: Strategy::Relative8, mnemonic: Some(JCC_MNEMONICS[cc]) };
        cc += 1;
    }

    op_range!(t, 0x40..=0x47, WordRegister, INC);
    op_range!(t, 0x48..=0x4F, WordRegister, DEC);
    op_range!(t, 0x50..=0x57, WordRegister, PUSH);
    op_range!(t, 0x58..=0x5F, WordRegister, POP);
    op_range!(t, 0x80..=0x83, Group1);
    op_range!(t, 0x88..=0x8B, RegRm, MOV);
    op_range!(t, 0x91..=0x97, XchgAccumulator, XCHG);
    op_range!(t, 0xA0..=0xA3, MovAccumulatorMemory, MOV);
    op_range!(t, 0xA4..=0xA7, StringOp);
    op_range!(t, 0xAA..=0xAF, StringOp);
    op_range!(t, 0xB0..=0xBF, RegisterImmediate, MOV);
    op_range!(t, 0xCC..=0xCF, Interrupt);
    op_range!(t, 0xD0..=0xD3, Shift);
    op_range!(t, 0xD8..=0xDF, Escape, ESC);
    op_range!(t, 0xE4..=0xE7, InOut);
    op_range!(t, 0xEC..=0xEF, InOut);

    op!(t, 0x06, PushPopSegment, PUSH);
    op!(t, 0x07, PushPopSegment, POP);
    op!(t, 0x0E, PushPopSegment, PUSH);
    op!(t, 0x0F, PushPopSegment, POP);
    op!(t, 0x16, PushPopSegment, PUSH);
    op!(t, 0x17, PushPopSegment, POP);
    op!(t, 0x1E, PushPopSegment, PUSH);
    op!(t, 0x1F, PushPopSegment, POP);
    op!(t, 0x26, SegmentOverride);
    op!(t, 0x27, Nullary, DAA);
    op!(t, 0x2E, SegmentOverride);
    op!(t, 0x2F, Nullary, DAS);
    op!(t, 0x36, SegmentOverride);
    op!(t, 0x37, Nullary, AAA);
    op!(t, 0x3E, SegmentOverride);
    op!(t, 0x3F, Nullary, AAS);
    op!(t, 0x84, RegRm, TEST);
    op!(t, 0x85, RegRm, TEST);
    op!(t, 0x86, RegRm, XCHG);
    op!(t, 0x87, RegRm, XCHG);
    op!(t, 0x8C, MovSegment, MOV);
    op!(t, 0x8D, LoadAddress, LEA);
    op!(t, 0x8E, MovSegment, MOV);
    op!(t, 0x8F, PopRm, POP);
    op!(t, 0x90, Nullary, NOP);
    op!(t, 0x98, Nullary, CBW);
    op!(t, 0x99, Nullary, CWD);
    op!(t, 0x9A, FarDirect, CALL);
    op!(t, 0x9B, Nullary, WAIT);
    op!(t, 0x9C, Nullary, PUSHF);
    op!(t, 0x9D, Nullary, POPF);
    op!(t, 0x9E, Nullary, SAHF);
    op!(t, 0x9F, Nullary, LAHF);
    op!(t, 0xA8, AccumulatorImmediate, TEST);
    op!(t, 0xA9, AccumulatorImmediate, TEST);
    op!(t, 0xC2, Return, RET);
    op!(t, 0xC3, Return, RET);
    op!(t, 0xC4, LoadAddress, LES);
    op!(t, 0xC5, LoadAddress, LDS);
    op!(t, 0xC6, MovRmImmediate, MOV);
    op!(t, 0xC7, MovRmImmediate, MOV);
    op!(t, 0xCA, Return, RETF);
    op!(t, 0xCB, Return, RETF);
    op!(t, 0xD4, AsciiAdjust, AAM);
    op!(t, 0xD5, AsciiAdjust, AAD);
    op!(t, 0xD7, Nullary, XLAT);
    op!(t, 0xE0, Relative8, LOOPNE);
    op!(t, 0xE1, Relative8, LOOPE);
    op!(t, 0xE2, Relative8, LOOP);
    op!(t, 0xE3, Relative8, JCXZ);
    op!(t, 0xE8, Relative16, CALL);
    op!(t, 0xE9, Relative16, JMP);
    op!(t, 0xEA, FarDirect, JMP);
    op!(t, 0xEB, Relative8, JMP);
    op!(t, 0xF0, LinePrefix, LOCK);
    op!(t, 0xF2, LinePrefix, REPNE);
    op!(t, 0xF3, LinePrefix, REP);
    op!(t, 0xF4, Nullary, HLT);
    op!(t, 0xF5, Nullary, CMC);
    op!(t, 0xF6, Group3);
    op!(t, 0xF7, Group3);
    op!(t, 0xF8, Nullary, CLC);
    op!(t, 0xF9, Nullary, STC);
    op!(t, 0xFA, Nullary, CLI);
    op!(t, 0xFB, Nullary, STI);
    op!(t, 0xFC, Nullary, CLD);
    op!(t, 0xFD, Nullary, STD);
    op!(t, 0xFE, Group5);
    op!(t, 0xFF, Group5);

    t
};

#[inline(always)]
pub fn lookup(opcode: u8) -> &'static OpcodeEntry {
    &DISPATCH[opcode as usize]
}
