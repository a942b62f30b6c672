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

    disasm86_core::mnemonic.rs

    Mnemonic enum and its assembler spelling.

*/

use std::fmt;

use strum_macros::IntoStaticStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "lowercase")]
pub enum Mnemonic {
    // Dyadic ALU and data movement
    ADD,
    OR,
    ADC,
    SBB,
    AND,
    SUB,
    XOR,
    CMP,
    TEST,
    XCHG,
    MOV,
    LEA,
    LDS,
    LES,
    // Unary
    INC,
    DEC,
    NOT,
    NEG,
    MUL,
    IMUL,
    DIV,
    IDIV,
    // Shifts and rotates
    ROL,
    ROR,
    RCL,
    RCR,
    SAL,
    SHR,
    SAR,
    // Stack
    PUSH,
    POP,
    PUSHF,
    POPF,
    // Conditional jumps
    JO,
    JNO,
    JB,
    JNB,
    JE,
    JNE,
    JBE,
    JA,
    JS,
    JNS,
    JP,
    JNP,
    JL,
    JNL,
    JLE,
    JG,
    LOOPNE,
    LOOPE,
    LOOP,
    JCXZ,
    // Control transfer
    CALL,
    #[strum(serialize = "call far")]
    CALLF,
    JMP,
    #[strum(serialize = "jmp far")]
    JMPF,
    RET,
    RETF,
    INT,
    INT3,
    INTO,
    IRET,
    // Port I/O
    IN,
    OUT,
    // String operations
    MOVSB,
    MOVSW,
    CMPSB,
    CMPSW,
    STOSB,
    STOSW,
    LODSB,
    LODSW,
    SCASB,
    SCASW,
    // Nullary
    NOP,
    DAA,
    DAS,
    AAA,
    AAS,
    AAM,
    AAD,
    CBW,
    CWD,
    WAIT,
    SAHF,
    LAHF,
    HLT,
    CMC,
    CLC,
    STC,
    CLI,
    STI,
    CLD,
    STD,
    XLAT,
    ESC,
    // Prefixes
    LOCK,
    REP,
    REPNE,
}

impl Mnemonic {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// String operations and `xlat` address memory without a ModR/M operand; a segment override
    /// applies to them as a bare prefix.
    pub fn has_implicit_memory(&self) -> bool {
        matches!(
            self,
            Mnemonic::MOVSB
                | Mnemonic::MOVSW
                | Mnemonic::CMPSB
                | Mnemonic::CMPSW
                | Mnemonic::STOSB
                | Mnemonic::STOSW
                | Mnemonic::LODSB
                | Mnemonic::LODSW
                | Mnemonic::SCASB
                | Mnemonic::SCASW
                | Mnemonic::XLAT
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_spelling() {
        assert_eq!(Mnemonic::MOV.to_string(), "mov");
        assert_eq!(Mnemonic::CALLF.to_string(), "call far");
        assert_eq!(Mnemonic::JMPF.to_string(), "jmp far");
        assert_eq!(Mnemonic::INT3.to_string(), "int3");
        assert_eq!(Mnemonic::LOOPNE.to_string(), "loopne");
    }

    #[test]
    fn test_implicit_memory() {
        assert!(Mnemonic::MOVSB.has_implicit_memory());
        assert!(Mnemonic::SCASW.has_implicit_memory());
        assert!(Mnemonic::XLAT.has_implicit_memory());
        assert!(!Mnemonic::MOV.has_implicit_memory());
        assert!(!Mnemonic::JE.has_implicit_memory());
    }

    #[test]
    fn test_all_lowercase() {
        for m in Mnemonic::iter() {
            let s = m.as_str();
            assert!(!s.is_empty());
            assert_eq!(s, s.to_lowercase(), "{:?} is not lowercase", m);
        }
    }
}
