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

    disasm86_core::tests::listing.rs

    End-to-end listing tests over complete buffers.

*/

use disasm86_core::{disassemble, DasmError, Decoder, Diagnostic, DiagnosticMode, ListingOptions};
use rand::{rngs::StdRng, Rng, SeedableRng};

const HEADER: &str = "bits 16\n\n";

fn listing(bytes: &[u8]) -> String {
    disassemble(bytes, ListingOptions::default()).unwrap().text
}

fn body(bytes: &[u8]) -> String {
    let text = listing(bytes);
    assert!(text.starts_with(HEADER));
    text[HEADER.len()..].to_string()
}

#[test]
fn test_empty_buffer() {
    assert_eq!(listing(&[]), HEADER);
}

#[test]
fn test_basic_scenarios() {
    assert_eq!(listing(&[0xB0, 0x05]), "bits 16\n\nmov al, 5\n");
    assert_eq!(body(&[0x89, 0xD8]), "mov ax, bx\n");
    assert_eq!(body(&[0x8B, 0x1E, 0x00, 0x01]), "mov bx, [256]\n");
    assert_eq!(body(&[0x2E, 0x8B, 0x1E, 0x00, 0x01]), "mov bx, cs:[256]\n");
    assert_eq!(body(&[0xC6, 0x06, 0x00, 0x01, 0x05]), "mov [256], byte 5\n");
}

#[test]
fn test_unknown_opcode() {
    let result = disassemble(&[0xF1], ListingOptions::default()).unwrap();
    assert_eq!(result.text, "bits 16\n\n[WARNING] Unknown opcode 0xf1 at position 0\n");
    assert_eq!(result.diagnostics, vec![Diagnostic { opcode: 0xF1, offset: 0 }]);
}

#[test]
fn test_unknown_opcodes_skip_one_byte() {
    assert_eq!(
        body(&[0x60, 0x90, 0xC8, 0xC9]),
        "[WARNING] Unknown opcode 0x60 at position 0\n\
         nop\n\
         [WARNING] Unknown opcode 0xc8 at position 2\n\
         [WARNING] Unknown opcode 0xc9 at position 3\n"
    );
}

#[test]
fn test_segment_override_single_use() {
    assert_eq!(
        body(&[0x2E, 0x8B, 0x1E, 0x00, 0x01, 0x8B, 0x1E, 0x00, 0x01]),
        "mov bx, cs:[256]\nmov bx, [256]\n"
    );
    // Only the first memory operand of a line can take the override; the last override wins.
    assert_eq!(body(&[0x26, 0x36, 0xFF, 0x37]), "push word ss:[bx]\n");
}

#[test]
fn test_displacement_rendering() {
    assert_eq!(body(&[0x8B, 0x41, 0xDB]), "mov ax, [bx+di - 37]\n");
    assert_eq!(body(&[0x89, 0x8C, 0xD4, 0xFE]), "mov [si - 300], cx\n");
    assert_eq!(body(&[0x8A, 0x60, 0x04]), "mov ah, [bx+si + 4]\n");
    assert_eq!(body(&[0x8A, 0x46, 0x00]), "mov al, [bp]\n");
}

#[test]
fn test_direct_address_ignores_width() {
    assert_eq!(body(&[0x8A, 0x0E, 0x34, 0x12]), "mov cl, [4660]\n");
    assert_eq!(body(&[0x8B, 0x0E, 0x34, 0x12]), "mov cx, [4660]\n");
}

#[test]
fn test_prefix_edge_cases() {
    // Pending lock text is flushed ahead of the warning.
    assert_eq!(
        body(&[0xF0, 0xF1]),
        "lock\n[WARNING] Unknown opcode 0xf1 at position 1\n"
    );
    // Prefix text at the end of the buffer has no line terminator.
    assert_eq!(body(&[0x90, 0xF3]), "nop\nrep ");
    // A dangling segment override emits nothing.
    assert_eq!(body(&[0x90, 0x3E]), "nop\n");
    assert_eq!(body(&[0xF0, 0x86, 0x07]), "lock xchg al, [bx]\n");
}

#[test]
fn test_program() {
    #[rustfmt::skip]
    let program = [
        0xB9, 0x0A, 0x00,       // mov cx, 10
        0x31, 0xC0,             // xor ax, ax
        0x01, 0xC8,             // add ax, cx
        0xE2, 0xFC,             // loop $-2
        0xA3, 0x00, 0x02,       // mov [512], ax
        0xE4, 0x60,             // in al, 96
        0x3C, 0x1B,             // cmp al, 27
        0x75, 0xFA,             // jne $-4
        0xFA,                   // cli
        0xF4,                   // hlt
        0xCD, 0x20,             // int 32
    ];
    assert_eq!(
        body(&program),
        "mov cx, 10\n\
         xor ax, ax\n\
         add ax, cx\n\
         loop $-2\n\
         mov [512], ax\n\
         in al, 96\n\
         cmp al, 27\n\
         jne $-4\n\
         cli\n\
         hlt\n\
         int 32\n"
    );
}

#[test]
fn test_truncated_instruction() {
    let err = disassemble(&[0x8B, 0x1E, 0x00], ListingOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DasmError::BufferUnderrun {
            offset: 2,
            wanted: 2,
            remaining: 1
        }
    ));
}

#[test]
fn test_truncated_instruction_keeps_partial_listing() {
    let bytes = [0x90, 0x40, 0xB8, 0x01];
    let mut decoder = Decoder::new(&bytes, ListingOptions::default());
    let err = decoder.run().unwrap_err();

    assert_eq!(err.underrun_offset(), Some(3));
    assert_eq!(decoder.listing().text(), "bits 16\n\nnop\ninc ax\n");
}

#[test]
fn test_stderr_diagnostics() {
    let options = ListingOptions {
        header: true,
        diagnostics: DiagnosticMode::Stderr,
    };
    let result = disassemble(&[0x90, 0xD6, 0x90], options).unwrap();
    assert_eq!(result.text, "bits 16\n\nnop\nnop\n");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].to_string(), "[WARNING] Unknown opcode 0xd6 at position 1");
}

#[test]
fn test_no_header() {
    let options = ListingOptions {
        header: false,
        ..Default::default()
    };
    assert_eq!(disassemble(&[0xC3], options).unwrap().text, "ret\n");
}

#[test]
fn test_random_input_terminates() {
    let mut rng = StdRng::seed_from_u64(0x8086);

    for _ in 0..200 {
        let len = rng.random_range(0..512usize);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();

        let mut decoder = Decoder::new(&bytes, ListingOptions::default());
        let mut steps = 0;
        let mut failed = false;
        while decoder.offset() < bytes.len() {
            let before = decoder.offset();
            if decoder.step().is_err() {
                failed = true;
                break;
            }
            assert!(decoder.offset() > before);
            steps += 1;
        }
        assert!(steps <= bytes.len());

        // A complete run agrees with stepping: it fails exactly when stepping hit a truncation.
        assert_eq!(disassemble(&bytes, ListingOptions::default()).is_err(), failed);
    }
}
