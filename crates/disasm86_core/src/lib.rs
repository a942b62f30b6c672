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

    disasm86_core::lib.rs

    A table-driven disassembler for 16-bit 8086 machine code, producing an
    assembler-compatible listing.

*/

pub mod addressing;
pub mod bytebuf;
pub mod decoder;
pub mod error;
pub mod instruction;
pub mod listing;
pub mod mnemonic;
pub mod modrm;
pub mod operand;
pub mod registers;

pub use bytebuf::CodeBuffer;
pub use decoder::Decoder;
pub use error::DasmError;
pub use listing::{Diagnostic, DiagnosticMode, Disassembly, ListingOptions};

/// Disassemble a complete buffer.
pub fn disassemble(bytes: &[u8], options: ListingOptions) -> Result<Disassembly, DasmError> {
    let mut decoder = Decoder::new(bytes, options);
    decoder.run()?;
    Ok(decoder.into_disassembly())
}
