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

    disasm86_config::bpaf_config::mod.rs

    Command line arguments, parsed with bpaf.

*/

use std::path::PathBuf;

use bpaf::Bpaf;

use disasm86_core::DiagnosticMode;

#[derive(Bpaf, Clone, Debug)]
#[bpaf(options, version, generate(cli_args))]
pub struct CmdLineArgs {
    /// Configuration file to read in place of ./disasm86.toml
    #[bpaf(long("config_file"), long("configfile"))]
    pub config_file: Option<PathBuf>,

    /// Omit the 'bits 16' header
    #[bpaf(long("no_header"), long("noheader"), switch)]
    pub no_header: bool,

    /// Where unknown opcode warnings go: inline or stderr
    #[bpaf(long)]
    pub diagnostics: Option<DiagnosticMode>,

    /// Binary file containing 8086 machine code
    #[bpaf(positional("FILE"))]
    pub input: PathBuf,
}
