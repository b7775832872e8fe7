//! Interactive prompt loop around the validators and the calculator.
//!
//! Reads answers line by line from any [`BufRead`] and writes prompts and
//! reports to any [`Write`], so a whole session can be scripted in tests.

use crate::config::OutputFormat;
use crate::error::ShellError;
use crate::models::{Ipv4Address, Ipv4Mask, NetworkDefinition};
use crate::output::{
    format_host_list, format_network_definition, host_list_json, network_definition_json,
};
use crate::processing::{check_host_count, derive, enumerate_hosts};
use crate::validation::{validate_address, validate_mask};
use colored::Colorize;
use std::io::{BufRead, Write};

const ADDRESS_PROMPT: &str =
    "Enter a unicast IPv4 address excluding 127.0.0.0/24, 0.0.0.0/8, 169.254.0.0/26: ";
const MASK_PROMPT: &str = "Enter subnet mask: ";
const GENERATE_PROMPT: &str = "Do you want to generate valid IP host addresses: [Y/N]";

/// Printed when the user interrupts (Ctrl-C) or input ends (Ctrl-D).
pub const ABORT_MESSAGE: &str = "Program aborted by the user. Exiting...";

/// Write [`ABORT_MESSAGE`] on its own line.
pub fn write_abort_message<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{ABORT_MESSAGE}")?;
    output.flush()
}

/// Parse a host count the way a user types it.
///
/// An integer too large for `i64` saturates, so it is refused as out of
/// range rather than reported as non-numeric. `None` for non-integers.
pub fn parse_host_count(raw: &str) -> Option<i64> {
    if let Ok(count) = raw.parse::<i64>() {
        return Some(count);
    }
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.starts_with('-') {
        Some(i64::MIN)
    } else {
        Some(i64::MAX)
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    /// Input ended before the session finished.
    Aborted,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Shell {
            input,
            output,
            format,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one session: address, mask, report, then optional host list.
    pub fn run(&mut self) -> Result<SessionOutcome, ShellError> {
        log::info!("#Start session");
        match self.session()? {
            Some(()) => Ok(SessionOutcome::Completed),
            None => {
                log::warn!("Input ended, session aborted");
                write_abort_message(&mut self.output)?;
                Ok(SessionOutcome::Aborted)
            }
        }
    }

    /// `Ok(None)` when input ends at any prompt.
    fn session(&mut self) -> Result<Option<()>, ShellError> {
        let Some(address) = self.read_address()? else {
            return Ok(None);
        };
        let Some(mask) = self.read_mask()? else {
            return Ok(None);
        };

        let def = derive(address, mask);
        self.print_definition(mask, &def)?;

        let Some(usable_hosts) = def.usable_hosts() else {
            writeln!(self.output, "This is a 32 bit network host")?;
            return Ok(Some(()));
        };

        loop {
            let Some(answer) = self.prompt(GENERATE_PROMPT)? else {
                return Ok(None);
            };
            match answer.to_ascii_uppercase().as_str() {
                "Y" => {}
                "N" => return Ok(Some(())),
                _ => {
                    writeln!(self.output, "{}", "Answer must be [Y/N]".yellow())?;
                    continue;
                }
            }

            let Some(raw_count) = self.prompt(&format!("Enter number of hosts Max {usable_hosts}: "))?
            else {
                return Ok(None);
            };
            let count = match parse_host_count(&raw_count) {
                Some(count) => count,
                None => {
                    log::info!("Non integer host count {raw_count:?}");
                    writeln!(self.output, "{}", "you have entered a non integer value:".red())?;
                    continue;
                }
            };

            match check_host_count(&def, count).and_then(|n| enumerate_hosts(&def, n)) {
                Ok(hosts) => self.print_hosts(hosts)?,
                Err(e) => {
                    log::info!("Host request refused: {e}");
                    writeln!(
                        self.output,
                        "{}",
                        format!(
                            "Number of hosts must be > 1 and cannot exceed {usable_hosts:3} in this subnet"
                        )
                        .red()
                    )?;
                }
            }
            return Ok(Some(()));
        }
    }

    fn read_address(&mut self) -> Result<Option<Ipv4Address>, ShellError> {
        loop {
            let Some(line) = self.prompt(ADDRESS_PROMPT)? else {
                return Ok(None);
            };
            match validate_address(&line) {
                Ok(address) => return Ok(Some(address)),
                Err(e) => {
                    log::info!("Rejected address {line:?}: {e}");
                    writeln!(self.output, "{}", " Not a valid IP address Try again!".red())?;
                }
            }
        }
    }

    fn read_mask(&mut self) -> Result<Option<Ipv4Mask>, ShellError> {
        loop {
            let Some(line) = self.prompt(MASK_PROMPT)? else {
                return Ok(None);
            };
            match validate_mask(&line) {
                Ok(mask) => return Ok(Some(mask)),
                Err(e) => {
                    log::info!("Rejected mask {line:?}: {e}");
                    writeln!(self.output, "{}", " Not a valid subnet mask, Try again!".red())?;
                }
            }
        }
    }

    fn print_definition(&mut self, mask: Ipv4Mask, def: &NetworkDefinition) -> Result<(), ShellError> {
        let report = match self.format {
            OutputFormat::Table => format_network_definition(mask, def),
            OutputFormat::Json => network_definition_json(def)?,
        };
        writeln!(self.output, "{report}")?;
        Ok(())
    }

    fn print_hosts<I>(&mut self, hosts: I) -> Result<(), ShellError>
    where
        I: IntoIterator<Item = std::net::Ipv4Addr>,
    {
        let list = match self.format {
            OutputFormat::Table => format_host_list(hosts),
            OutputFormat::Json => host_list_json(hosts)?,
        };
        writeln!(self.output, "{list}")?;
        Ok(())
    }

    /// Write `text` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
