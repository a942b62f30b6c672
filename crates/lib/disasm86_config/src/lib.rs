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

    disasm86_config::lib.rs

    Configuration file parsing and command line overlay.

*/

//! The `disasm86_config` crate parses the optional `disasm86.toml` configuration file and
//! overlays command line arguments on top of it. Command line arguments always take priority
//! over the configuration file.

mod bpaf_config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_derive::Deserialize;

use disasm86_core::{DiagnosticMode, ListingOptions};

pub use bpaf_config::{cli_args, CmdLineArgs};

pub const DEFAULT_CONFIG_FILE: &str = "./disasm86.toml";

const fn _default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Listing {
    #[serde(default = "_default_true")]
    pub header: bool,
    #[serde(default)]
    pub diagnostics: DiagnosticMode,
}

impl Default for Listing {
    fn default() -> Self {
        Listing {
            header: true,
            diagnostics: DiagnosticMode::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFileParams {
    #[serde(default)]
    pub listing: Listing,
    /// The binary to disassemble. Only ever set from the command line.
    #[serde(skip)]
    pub input: Option<PathBuf>,
}

impl ConfigFileParams {
    pub fn overlay(&mut self, shell_args: CmdLineArgs) {
        self.listing.header &= !shell_args.no_header;

        if let Some(diagnostics) = shell_args.diagnostics {
            self.listing.diagnostics = diagnostics;
        }

        self.input = Some(shell_args.input);
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            header: self.listing.header,
            diagnostics: self.listing.diagnostics,
        }
    }
}

pub fn read_config(toml_string: impl AsRef<str>, shell_args: CmdLineArgs) -> Result<ConfigFileParams, anyhow::Error> {
    let mut toml_args: ConfigFileParams = toml::from_str(toml_string.as_ref())?;
    log::debug!("toml_config: {:?}", toml_args);

    // Command line arguments override config file arguments
    toml_args.overlay(shell_args);
    Ok(toml_args)
}

/// Read the TOML configuration from a file path, parse it and overlay the command line arguments.
///
/// A `--config_file` given on the command line must exist. The default path is optional; when
/// it does not exist the built-in defaults are used.
pub fn read_config_file<P>(default_path: P, shell_args: CmdLineArgs) -> Result<ConfigFileParams, anyhow::Error>
where
    P: AsRef<Path>,
{
    // Allow configuration file path to be overridden by command line argument 'config_file'
    let toml_string = if let Some(configfile_path) = shell_args.config_file.as_ref() {
        log::debug!("Reading configuration file {}", configfile_path.display());
        std::fs::read_to_string(configfile_path)
            .with_context(|| format!("Couldn't read configuration file '{}'", configfile_path.display()))?
    }
    else if default_path.as_ref().exists() {
        log::debug!("Reading configuration file {}", default_path.as_ref().display());
        std::fs::read_to_string(default_path.as_ref())
            .with_context(|| format!("Couldn't read configuration file '{}'", default_path.as_ref().display()))?
    }
    else {
        log::debug!(
            "No configuration file at {}, using defaults",
            default_path.as_ref().display()
        );
        String::new()
    };

    read_config(toml_string, shell_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> CmdLineArgs {
        CmdLineArgs {
            config_file: None,
            no_header: false,
            diagnostics: None,
            input: PathBuf::from(input),
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = read_config("", args("a.bin")).unwrap();
        assert_eq!(config.listing, Listing::default());
        assert_eq!(config.listing_options(), ListingOptions::default());
        assert_eq!(config.input, Some(PathBuf::from("a.bin")));
    }

    #[test]
    fn test_config_values() {
        let toml = r#"
            [listing]
            header = false
            diagnostics = "stderr"
        "#;
        let config = read_config(toml, args("a.bin")).unwrap();
        assert!(!config.listing.header);
        assert_eq!(config.listing.diagnostics, DiagnosticMode::Stderr);
    }

    #[test]
    fn test_partial_section() {
        let toml = r#"
            [listing]
            diagnostics = "inline"
        "#;
        let config = read_config(toml, args("a.bin")).unwrap();
        assert!(config.listing.header);
    }

    #[test]
    fn test_command_line_overrides() {
        let toml = r#"
            [listing]
            header = true
            diagnostics = "stderr"
        "#;
        let mut shell_args = args("b.bin");
        shell_args.no_header = true;
        shell_args.diagnostics = Some(DiagnosticMode::Inline);

        let config = read_config(toml, shell_args).unwrap();
        assert!(!config.listing.header);
        assert_eq!(config.listing.diagnostics, DiagnosticMode::Inline);
    }

    #[test]
    fn test_bad_values() {
        assert!(read_config("[listing]\ndiagnostics = \"stdout\"\n", args("a.bin")).is_err());
        assert!(read_config("[listing\n", args("a.bin")).is_err());
    }

    #[test]
    fn test_missing_default_file() {
        let config = read_config_file("./no/such/disasm86.toml", args("a.bin")).unwrap();
        assert_eq!(config.listing, Listing::default());
    }

    #[test]
    fn test_missing_explicit_file() {
        let mut shell_args = args("a.bin");
        shell_args.config_file = Some(PathBuf::from("./no/such/config.toml"));
        let err = read_config_file(DEFAULT_CONFIG_FILE, shell_args).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
