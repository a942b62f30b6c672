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

    disasm86_cli::lib.rs

    Command line front end.

*/

//! disasm86 command line front-end main library component.

#![forbid(unsafe_code)]

use std::io::{BufWriter, Write};

use bpaf::ParseFailure;

use disasm86_config::{cli_args, DEFAULT_CONFIG_FILE};
use disasm86_core::{CodeBuffer, Decoder, DiagnosticMode, ListingOptions};

pub const USAGE: &str = "Usage: disasm86 [--config_file PATH] [--no_header] [--diagnostics MODE] FILE";

/// Disassemble `bytes` and write the listing to `out`. When diagnostics are kept out of the
/// listing they are written to `diag`.
///
/// If decoding stops on a truncated instruction, the listing decoded up to that point is
/// still written before the error is returned.
pub fn write_listing<W, E>(
    bytes: &[u8],
    options: ListingOptions,
    out: &mut W,
    diag: &mut E,
) -> Result<(), anyhow::Error>
where
    W: Write,
    E: Write,
{
    let mut decoder = Decoder::new(bytes, options);
    let result = decoder.run();

    let listing = decoder.listing();
    out.write_all(listing.text().as_bytes())?;
    out.flush()?;

    if let DiagnosticMode::Stderr = options.diagnostics {
        for diagnostic in listing.diagnostics() {
            writeln!(diag, "{}", diagnostic)?;
        }
    }

    if let Some(offset) = result.as_ref().err().and_then(|e| e.underrun_offset()) {
        log::warn!("Listing truncated by an incomplete instruction at offset {}", offset);
    }
    result?;
    Ok(())
}

pub fn run() {
    env_logger::init();

    let shell_args = match cli_args().try_run() {
        Ok(args) => args,
        Err(ParseFailure::Stdout(msg)) => {
            // --help or --version
            print!("{}", msg);
            std::process::exit(0);
        }
        Err(ParseFailure::Stderr(msg)) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let config = match disasm86_config::read_config_file(DEFAULT_CONFIG_FILE, shell_args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to resolve configuration: {:#}", e);
            eprintln!(
                "Failed to read configuration file. There may be a typo or otherwise invalid toml:\n{:#}",
                e
            );
            std::process::exit(1);
        }
    };
    log::debug!("Listing options: {:?}", config.listing_options());

    let Some(input) = config.input.as_ref()
    else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    let buffer = CodeBuffer::from_file(input).unwrap_or_else(|e| {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    });
    log::debug!("Read {} bytes from {}", buffer.len(), input.display());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = std::io::stderr();
    let mut diag = stderr.lock();

    if let Err(e) = write_listing(buffer.as_slice(), config.listing_options(), &mut out, &mut diag) {
        log::error!("Disassembly of {} failed: {}", input.display(), e);
        eprintln!("\n{}", e);
        std::process::exit(1);
    }
}
