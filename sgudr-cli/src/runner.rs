//! Command runner
//!
//! Executes a parsed [`Cli`] against the codec crate and returns the lines
//! to print. Printing and exit codes are left to the binary.

use crate::args::{Cli, Commands, InputArgs};
use sgudr_codec::{
    digest16, dump, format_hex, internet_checksum, ipv4_to_bytes, ipv4_to_bytes_or_zero,
    parse_hex, split, to_bytes, MacFormat,
};
use sgudr_core::{ByteOrder, Error, Result};
use tracing::{debug, info, Level};

/// Map the `-v` count to a tracing level
pub fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global tracing subscriber, writing to stderr
pub fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(verbosity_level(verbose))
        .with_writer(std::io::stderr)
        .init();
}

/// Run the selected subcommand and collect its output lines
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let separator = cli.separator;

    match &cli.command {
        Commands::Checksum { input, byte_order } => {
            let data = read_input(input, separator)?;
            let order = ByteOrder::from(*byte_order);
            let checksum = internet_checksum(&data, order);
            info!(bytes = data.len(), %order, checksum, "computed checksum");
            Ok(vec![
                format!("0x{:04x}", checksum),
                format_hex(&order.write_u16(checksum), separator),
            ])
        }
        Commands::Hex { input } => {
            let data = read_input(input, separator)?;
            Ok(vec![format_hex(&data, separator)])
        }
        Commands::Unhex { text, contiguous } => {
            let sep = if *contiguous { None } else { Some(separator) };
            let data = parse_hex(text, sep)?;
            debug!(bytes = data.len(), "decoded hex input");
            Ok(dump(&data))
        }
        Commands::Dump { input } => {
            let data = read_input(input, separator)?;
            Ok(dump(&data))
        }
        Commands::Ip { address, lenient } => {
            let octets = if *lenient {
                ipv4_to_bytes_or_zero(address)
            } else {
                ipv4_to_bytes(address)?
            };
            Ok(vec![format_hex(&octets, separator)])
        }
        Commands::Mac { address } => {
            let mac = MacFormat::new(separator).parse(address)?;
            Ok(vec![format_hex(mac.as_bytes(), ' ')])
        }
        Commands::Split {
            text,
            delimiter,
            drop_last,
        } => Ok(split(text, *delimiter, !*drop_last)),
        Commands::Digest { input } => {
            let data = read_input(input, separator)?;
            Ok(vec![format_hex(&digest16(&data), separator)])
        }
    }
}

/// Resolve the input bytes of a command
fn read_input(input: &InputArgs, separator: char) -> Result<Vec<u8>> {
    match (&input.text, &input.file) {
        (Some(text), _) if input.hex => parse_hex(text, Some(separator)),
        (Some(text), _) => Ok(to_bytes(text)),
        (None, Some(path)) if input.hex => {
            let text = std::fs::read_to_string(path)?;
            let data = parse_hex(text.trim_end(), Some(separator))?;
            debug!(path = %path.display(), bytes = data.len(), "decoded hex input file");
            Ok(data)
        }
        (None, Some(path)) => {
            let data = std::fs::read(path)?;
            debug!(path = %path.display(), bytes = data.len(), "read input file");
            Ok(data)
        }
        (None, None) => Err(Error::invalid_parameter(
            "input",
            "provide inline TEXT or --file PATH",
        )),
    }
}
