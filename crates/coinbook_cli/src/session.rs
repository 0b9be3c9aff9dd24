//! Interactive read-eval-print loop over the coin store.
//!
//! # Responsibility
//! - Read selections and field values line by line from any `BufRead`.
//! - Report outcomes and recoverable input errors on any `Write`.
//!
//! # Invariants
//! - Bad integers and empty labels are reported and never end the loop.
//! - End of input (or an unreadable input stream) ends the loop like Exit.
//! - The input source is owned by the session and dropped exactly once.

use crate::menu::{write_menu, Selection};
use coinbook_core::{Coin, CoinId, CoinService, CoinValidationError, InMemoryCoinRepository};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Recoverable errors caused by user input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid {field} `{value}`: expected an integer")]
    Parse { field: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] CoinValidationError),
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    ExitSelected,
    EndOfInput,
}

enum Flow {
    Continue,
    Stop(ExitReason),
}

/// Runs the menu loop until Exit is chosen or input ends.
///
/// Takes ownership of `input`; it is released when this function returns.
///
/// # Errors
/// - Only failures writing to `output` are returned.
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<ExitReason> {
    let mut session = Session {
        input,
        output,
        service: CoinService::in_memory(),
    };
    let reason = session.run()?;
    info!(
        "event=session_end module=cli status=ok reason={:?} coins={}",
        reason,
        session.service.coin_count()
    );
    Ok(reason)
}

struct Session<'out, R, W> {
    input: R,
    output: &'out mut W,
    service: CoinService<InMemoryCoinRepository>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> io::Result<ExitReason> {
        loop {
            write_menu(&mut *self.output)?;
            let Some(line) = self.read_line() else {
                writeln!(self.output)?;
                return Ok(ExitReason::EndOfInput);
            };

            let flow = match Selection::parse(&line) {
                Some(selection) => {
                    debug!("event=selection module=cli status=ok selection={selection:?}");
                    self.dispatch(selection)?
                }
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop(reason) = flow {
                return Ok(reason);
            }
        }
    }

    fn dispatch(&mut self, selection: Selection) -> io::Result<Flow> {
        match selection {
            Selection::Add => self.handle_add(),
            Selection::List => self.handle_list().map(|()| Flow::Continue),
            Selection::Delete => self.handle_delete(),
            Selection::Exit => {
                writeln!(self.output, "Exiting the program.")?;
                Ok(Flow::Stop(ExitReason::ExitSelected))
            }
        }
    }

    fn handle_add(&mut self) -> io::Result<Flow> {
        let Some(country) = self.prompt("Enter the coin's country: ")? else {
            return Ok(Flow::Stop(ExitReason::EndOfInput));
        };
        let Some(denomination) = self.prompt("Enter the coin's denomination: ")? else {
            return Ok(Flow::Stop(ExitReason::EndOfInput));
        };
        let Some(year) = self.prompt("Enter the coin's issue year: ")? else {
            return Ok(Flow::Stop(ExitReason::EndOfInput));
        };

        match self.add_coin(&country, &denomination, &year) {
            Ok(coin) => writeln!(self.output, "Coin added: {coin}")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn add_coin(
        &mut self,
        country: &str,
        denomination: &str,
        year: &str,
    ) -> Result<Coin, InputError> {
        let issue_year = parse_integer::<i32>("year", year)?;
        Ok(self.service.add_coin(country, denomination, issue_year)?)
    }

    fn handle_list(&mut self) -> io::Result<()> {
        let coins = self.service.list_coins();
        if coins.is_empty() {
            return writeln!(self.output, "The coin list is empty.");
        }

        writeln!(self.output, "Coin list:")?;
        for coin in &coins {
            writeln!(self.output, "{coin}")?;
        }
        Ok(())
    }

    fn handle_delete(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Enter the ID of the coin to delete: ")? else {
            return Ok(Flow::Stop(ExitReason::EndOfInput));
        };

        let id = match parse_integer::<i64>("ID", &raw_id) {
            Ok(id) => id,
            Err(err) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        };

        // Negative IDs are never assigned.
        let removed = CoinId::try_from(id)
            .ok()
            .and_then(|id| self.service.remove_coin(id));
        match removed {
            Some(coin) => writeln!(self.output, "Coin removed: {coin}")?,
            None => writeln!(self.output, "Coin not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &InputError) -> io::Result<()> {
        warn!("event=input_rejected module=cli status=error error={err}");
        writeln!(self.output, "Error: {err}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let line = self.read_line();
        if line.is_none() {
            writeln!(self.output)?;
        }
        Ok(line)
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                Some(line)
            }
            Err(err) => {
                warn!("event=input_read module=cli status=error error={err}");
                None
            }
        }
    }
}

fn parse_integer<T: FromStr>(field: &'static str, raw: &str) -> Result<T, InputError> {
    let value = raw.trim();
    value.parse::<T>().map_err(|_| InputError::Parse {
        field,
        value: value.to_string(),
    })
}
