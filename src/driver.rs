//! Count-prefixed command script runner.
//!
//! A script is the number of operations followed by that many commands,
//! separated by any whitespace. Every `get` and `delete` produces exactly one
//! output line: the value, or `None` when the key is absent.

use std::{
    collections::VecDeque,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    command::{parse_command, Command, CommandExecute, Reply},
    engine::Storage,
    error::{DriverError, DriverResult},
};

/// Counters collected while running a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub puts: usize,
    pub gets: usize,
    pub deletes: usize,
    /// `get`/`delete` calls that hit an absent key.
    pub misses: usize,
}

impl RunSummary {
    fn record(
        &mut self,
        cmd: &Command,
        reply: Reply,
    ) {
        self.executed += 1;
        match cmd {
            Command::Put(_) => self.puts += 1,
            Command::Get(_) => self.gets += 1,
            Command::Delete(_) => self.deletes += 1,
        }
        if reply == Reply::Absent {
            self.misses += 1;
        }
    }
}

/// Whitespace-separated tokens read from `input` one line at a time.
///
/// A read failure ends the iteration; the error is kept until
/// [`Tokens::check`] takes it.
struct Tokens<R> {
    input: R,
    line: String,
    pending: VecDeque<String>,
    error: Option<io::Error>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pending: VecDeque::new(),
            error: None,
        }
    }

    fn check(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Tokens already read from the current line but not consumed.
    fn buffered(&self) -> usize {
        self.pending.len()
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.error.is_some() {
                return None;
            }

            self.line.clear();
            match self.input.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(self.line.split_whitespace().map(str::to_owned)),
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

/// Opens a script source: a file, or stdin for `None` and `-`.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(p) if p != Path::new("-") => Ok(Box::new(BufReader::new(File::open(p)?))),
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Executes the script read from `input` against `store`, writing replies to
/// `output`.
///
/// The input is read line by line and only as far as the announced number of
/// commands; anything after them is left unread.
pub fn run<R, W>(
    input: R,
    output: &mut W,
    store: &mut dyn Storage,
) -> DriverResult<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(input);

    let first = tokens.next();
    tokens.check()?;
    let expected = match first {
        None => return Err(DriverError::MissingCount),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| DriverError::InvalidCount(raw))?,
    };

    let mut summary = RunSummary::default();

    for index in 1..=expected {
        let parsed = parse_command(&mut tokens);
        tokens.check()?;

        let cmd = parsed
            .map_err(|source| DriverError::Command { index, source })?
            .ok_or(DriverError::Truncated {
                expected,
                executed: summary.executed,
            })?;

        let reply = cmd.execute(store);
        debug!(
            index,
            command = cmd.command_name(),
            key = cmd.command_key(),
            reply = ?reply,
            "Command executed"
        );

        if !reply.is_silent() {
            writeln!(output, "{reply}")?;
        }
        summary.record(&cmd, reply);
    }

    let trailing = tokens.buffered();
    if trailing > 0 {
        debug!(trailing, "Ignoring tokens after the last announced command");
    }

    output.flush()?;

    info!(
        executed = summary.executed,
        puts = summary.puts,
        gets = summary.gets,
        deletes = summary.deletes,
        misses = summary.misses,
        entries = store.len(),
        "Script finished"
    );

    Ok(summary)
}
