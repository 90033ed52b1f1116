//! CLI argument parsing
//!
//! Every codec operation is exposed as a subcommand. Byte inputs come
//! either inline or from a file, as raw text or as hex pairs with `--hex`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use sgudr_core::ByteOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sgudr")]
#[command(version, about = "Checksum, address and hex conversion utilities", long_about = None)]
pub struct Cli {
    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Separator between hex pairs and MAC address octets
    #[arg(short = 's', long, default_value_t = ':', global = true)]
    pub separator: char,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the bytes of an operation come from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Inline input
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the input from a file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Treat the input (inline or file contents) as hex pairs using the
    /// global separator
    #[arg(short = 'x', long)]
    pub hex: bool,
}

/// Byte order selector for the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderArg {
    /// Most significant byte first (network order)
    Big,
    /// Least significant byte first
    Little,
    /// Order of this machine
    Native,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Big => ByteOrder::Big,
            ByteOrderArg::Little => ByteOrder::Little,
            ByteOrderArg::Native => ByteOrder::native(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the Internet checksum (RFC 1071) of the input
    Checksum {
        #[command(flatten)]
        input: InputArgs,

        /// Byte order used to read 16-bit words
        #[arg(short = 'o', long, value_enum, default_value_t = ByteOrderArg::Big)]
        byte_order: ByteOrderArg,
    },

    /// Render the input as separator-delimited hex pairs
    Hex {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Parse hex pairs and show the decoded bytes as a hex dump
    Unhex {
        /// Hex text, pairs separated by the global separator
        text: String,

        /// The hex digits are contiguous, without separators
        #[arg(short, long)]
        contiguous: bool,
    },

    /// Print an offset/hex/ASCII dump of the input
    Dump {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Convert a dotted-decimal IPv4 address to network-order bytes
    Ip {
        /// Address text, e.g. 192.168.1.10
        address: String,

        /// Never fail: fall back to 0.0.0.0 and tolerate junk components
        #[arg(short, long)]
        lenient: bool,
    },

    /// Convert a MAC address to its six bytes
    Mac {
        /// Address text, e.g. aa:bb:cc:dd:ee:ff
        address: String,
    },

    /// Split text on a delimiter, one segment per output line
    Split {
        /// Text to split
        text: String,

        /// Delimiter character
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,

        /// Discard the text after the last delimiter
        #[arg(long)]
        drop_last: bool,
    },

    /// Compute the 16-byte MD5 digest of the input
    Digest {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checksum_defaults() {
        let cli = Cli::try_parse_from(["sgudr", "checksum", "--hex", "00:01:f2:03"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.separator, ':');
        match cli.command {
            Commands::Checksum { input, byte_order } => {
                assert_eq!(input.text.as_deref(), Some("00:01:f2:03"));
                assert!(input.hex);
                assert!(input.file.is_none());
                assert_eq!(byte_order, ByteOrderArg::Big);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["sgudr", "mac", "aa-bb-cc-dd-ee-ff", "--separator=-", "-vv"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.separator, '-');
        assert!(matches!(cli.command, Commands::Mac { .. }));
    }

    #[test]
    fn test_parse_byte_order() {
        let cli =
            Cli::try_parse_from(["sgudr", "checksum", "abc", "--byte-order", "little"]).unwrap();
        match cli.command {
            Commands::Checksum { byte_order, .. } => {
                assert_eq!(ByteOrder::from(byte_order), ByteOrder::Little)
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_text_conflicts_with_file() {
        assert!(Cli::try_parse_from(["sgudr", "digest", "abc", "--file", "x.bin"]).is_err());
    }

    #[test]
    fn test_hex_applies_to_file() {
        let cli = Cli::try_parse_from(["sgudr", "dump", "--hex", "--file", "x.hex"]).unwrap();
        match cli.command {
            Commands::Dump { input } => {
                assert!(input.hex);
                assert!(input.text.is_none());
                assert_eq!(input.file.as_deref(), Some(std::path::Path::new("x.hex")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from(["sgudr", "split", "a;b;c", "-d", ";", "--drop-last"])
            .unwrap();
        match cli.command {
            Commands::Split {
                text,
                delimiter,
                drop_last,
            } => {
                assert_eq!(text, "a;b;c");
                assert_eq!(delimiter, ';');
                assert!(drop_last);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_multi_char_separator_rejected() {
        assert!(Cli::try_parse_from(["sgudr", "-s", "::", "hex", "abc"]).is_err());
    }

    #[test]
    fn test_native_byte_order_arg() {
        assert_eq!(ByteOrder::from(ByteOrderArg::Native), ByteOrder::native());
    }
}
