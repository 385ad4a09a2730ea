//! Interactive console on top of the rate store.

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, error, warn};

use crate::converter::Converter;
use crate::error::RateError;
use crate::exchange_rate::{format_number, normalize_code, parse_number};
use crate::rate_file;
use crate::rate_store::RateStore;

const MENU_PROMPT: &str = "Do you want to convert, update a rate, or exit? (convert/update/exit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Convert,
    Update,
    Exit,
}

impl Command {
    /// Case-insensitive; `None` for anything that is not a known choice.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("convert") {
            Some(Command::Convert)
        } else if input.eq_ignore_ascii_case("update") {
            Some(Command::Update)
        } else if input.eq_ignore_ascii_case("exit") {
            Some(Command::Exit)
        } else {
            None
        }
    }
}

/// How an interactive session ended.
#[derive(Debug)]
pub enum SessionEnd {
    Finished(RateStore),
    Interrupted,
}

/// Prompt loop reading choices from `input` and writing dialogue to `output`.
///
/// Updates are saved to `rates_file` right after they are applied in memory.
pub struct Shell<R, W> {
    input: R,
    output: W,
    store: RateStore,
    rates_file: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, store: RateStore, rates_file: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            store,
            rates_file: rates_file.into(),
        }
    }

    /// Runs until `exit` or end of input, returning the final store.
    pub fn run(mut self) -> io::Result<RateStore> {
        writeln!(self.output, "Welcome to the Currency Converter!")?;
        self.print_rates()?;

        loop {
            write!(self.output, "\n{MENU_PROMPT}")?;
            let Some(choice) = self.prompt_line()? else {
                debug!("End of input, leaving the shell");
                break;
            };

            match Command::parse(&choice) {
                Some(Command::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Some(Command::Convert) => self.convert()?,
                Some(Command::Update) => self.update()?,
                None => writeln!(
                    self.output,
                    "Invalid choice. Please type 'convert', 'update', or 'exit'."
                )?,
            }
        }

        Ok(self.store)
    }

    fn print_rates(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available exchange rates:")?;
        for entry in self.store.iter() {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    fn convert(&mut self) -> io::Result<()> {
        let from = self.ask("Enter the currency code to convert from: ")?;
        let to = self.ask("Enter the currency code to convert to: ")?;
        let amount = self.ask("Enter the amount to convert: ")?;

        let result = parse_number(&amount)
            .and_then(|amount| Converter::new(&self.store).convert(&from, &to, amount));

        match result {
            Ok(converted) => writeln!(
                self.output,
                "Converted amount: {} {}",
                format_number(converted),
                to.trim()
            ),
            Err(RateError::InvalidNumberFormat { .. }) => writeln!(
                self.output,
                "Invalid amount entered. Please enter a number."
            ),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let code = normalize_code(&self.ask("Enter the currency code to update: ")?);
        let rate = self.ask("Enter the new exchange rate: ")?;

        let rate = match parse_number(&rate) {
            Ok(rate) => rate,
            Err(_) => {
                return writeln!(
                    self.output,
                    "Invalid rate entered. Please enter a numeric value."
                );
            }
        };

        self.store.upsert(&code, rate);
        match rate_file::save(&self.rates_file, &self.store) {
            Ok(()) => writeln!(
                self.output,
                "Exchange rate for {} updated to {} and saved to file.",
                code,
                format_number(rate)
            ),
            Err(e) => {
                error!("{e}");
                writeln!(self.output, "Error saving updated rates to file.")
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        Ok(self.prompt_line()?.unwrap_or_default())
    }

    fn prompt_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R, W> Shell<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Runs the prompt loop on the blocking pool until it ends by itself or
    /// `interrupt` resolves. An interrupted session leaves its blocked read
    /// behind; the caller is expected to exit.
    pub async fn run_until<F>(self, interrupt: F) -> io::Result<SessionEnd>
    where
        F: Future<Output = ()>,
    {
        let session = tokio::task::spawn_blocking(move || self.run());

        tokio::select! {
            biased;
            _ = interrupt => {
                warn!("Interrupted, leaving the shell");
                Ok(SessionEnd::Interrupted)
            }
            joined = session => match joined {
                Ok(result) => result.map(SessionEnd::Finished),
                Err(e) => Err(io::Error::other(e)),
            },
        }
    }
}
