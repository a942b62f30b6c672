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

    disasm86_core::bytebuf.rs

    Implements the immutable code buffer and a forward-only, bounds-checked
    read cursor over it. Every read either succeeds and advances the cursor
    by exactly the number of bytes consumed, or fails without moving it.

*/

use std::{fs, path::Path};

use crate::error::DasmError;

/// The instruction bytes of a decoding session. Loaded once and never mutated.
#[derive(Clone, Debug, Default)]
pub struct CodeBuffer {
    vec: Vec<u8>,
}

impl CodeBuffer {
    /// Create a CodeBuffer from a supplied vector
    pub fn from_vec(vec: Vec<u8>) -> CodeBuffer {
        CodeBuffer { vec }
    }

    /// Read an entire file into a CodeBuffer.
    pub fn from_file(path: impl AsRef<Path>) -> Result<CodeBuffer, DasmError> {
        let path = path.as_ref();
        let vec = fs::read(path).map_err(|source| DasmError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", vec.len(), path.display());
        Ok(CodeBuffer::from_vec(vec))
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.vec
    }

    pub fn cursor(&self) -> ByteCursor<'_> {
        ByteCursor::new(&self.vec)
    }
}

/// A forward-only read position into a byte slice.
///
/// Invariant: `cursor <= bytes.len()`.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    bytes:  &'a [u8],
    cursor: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { bytes, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn tell(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    pub fn has_at_least(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    /// Look at the byte `ahead` positions past the cursor without consuming anything.
    pub fn peek_u8(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.cursor + ahead).copied()
    }

    /// Take `n` bytes as a slice, or fail without advancing.
    fn take(&mut self, n: usize) -> Result<&'a [u8], DasmError> {
        if !self.has_at_least(n) {
            return Err(DasmError::BufferUnderrun {
                offset:    self.cursor,
                wanted:    n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, DasmError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, DasmError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, DasmError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16_le(&mut self) -> Result<i16, DasmError> {
        Ok(self.read_u16_le()? as i16)
    }

    /// Read a far pointer as encoded in the instruction stream: offset first, then segment.
    /// Returns (segment, offset).
    pub fn read_farptr16(&mut self) -> Result<(u16, u16), DasmError> {
        let b = self.take(4)?;
        let offset = u16::from_le_bytes([b[0], b[1]]);
        let segment = u16::from_le_bytes([b[2], b[3]]);
        Ok((segment, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance() {
        let bytes = [0x05, 0xFE, 0x34, 0x12, 0xF4, 0xFF];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_u8().unwrap(), 0x05);
        assert_eq!(cursor.read_i8().unwrap(), -2);
        assert_eq!(cursor.tell(), 2);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.read_i16_le().unwrap(), -12);
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_underrun_does_not_advance() {
        let bytes = [0x8B, 0x1E, 0x00];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.read_u8().unwrap();
        cursor.read_u8().unwrap();

        match cursor.read_u16_le() {
            Err(DasmError::BufferUnderrun {
                offset,
                wanted,
                remaining,
            }) => {
                assert_eq!(offset, 2);
                assert_eq!(wanted, 2);
                assert_eq!(remaining, 1);
            }
            other => panic!("expected underrun, got {:?}", other),
        }
        assert_eq!(cursor.tell(), 2);
        assert_eq!(cursor.read_u8().unwrap(), 0x00);
        assert!(cursor.read_u8().is_err());
        assert_eq!(cursor.tell(), 3);
    }

    #[test]
    fn test_peek() {
        let bytes = [0xFF, 0x17];
        let cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.peek_u8(0), Some(0xFF));
        assert_eq!(cursor.peek_u8(1), Some(0x17));
        assert_eq!(cursor.peek_u8(2), None);
        assert_eq!(cursor.tell(), 0);
        assert!(cursor.has_at_least(2));
        assert!(!cursor.has_at_least(3));
    }

    #[test]
    fn test_farptr() {
        let bytes = [0x88, 0x77, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_farptr16().unwrap(), (0x1234, 0x7788));

        let mut short = ByteCursor::new(&bytes[..3]);
        assert!(short.read_farptr16().is_err());
        assert_eq!(short.tell(), 0);
    }

    #[test]
    fn test_code_buffer() {
        let buf = CodeBuffer::from_vec(vec![0x90, 0x90]);
        assert_eq!(buf.len(), 2);
        assert!(!buf.is_empty());
        assert_eq!(buf.cursor().remaining(), 2);
        assert!(CodeBuffer::from_vec(Vec::new()).is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = CodeBuffer::from_file("this/file/does/not/exist.bin").unwrap_err();
        assert!(matches!(err, DasmError::FileAccess { .. }));
    }
}
