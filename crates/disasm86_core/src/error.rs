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

    disasm86_core::error.rs

    Error types for the decoding engine.

    A truncated instruction is fatal to a decode session. An unrecognized
    opcode is not an error at all; it is reported as a Diagnostic by the
    dispatch loop and decoding continues.

*/

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DasmError {
    #[error("Unexpected end of buffer at offset {offset}: wanted {wanted} byte(s), {remaining} remaining.")]
    BufferUnderrun {
        offset:    usize,
        wanted:    usize,
        remaining: usize,
    },
    #[error("Couldn't read input file '{}': {}", .path.display(), .source)]
    FileAccess {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DasmError {
    /// Return the buffer offset of a truncated instruction, if this is an underrun.
    pub fn underrun_offset(&self) -> Option<usize> {
        match self {
            DasmError::BufferUnderrun { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
