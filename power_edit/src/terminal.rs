use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use log::debug;
use word_align::{Action, Command, Discrepancy, Operator};

const RESOLUTION_OPTIONS: &str = "\tHow to resolve?\n\
    \t<xy|x> - enter two numbers to advance cursors: x for file under edit, y for source file\n\
    \t\ta single digit entry will advance cursor for file under edit by x\n\
    \ts - keep both words as they are and move on\n\
    \ta - to add missing token to file under edit\n\
    \te - edit typo, sets current word of file under edit to current word of source file\n\
    \tex - edit typo in source, sets current word of source file to current word of file under edit\n\
    \tme - manually enter a custom word and set the current token of both files to it\n\
    \td - delete token from file under edit\n\
    \tx - delete current token from source file\n\
    \tv - save changes and quit\n\
    \tq - quit without saving any changes made\n\n\
    \tenter selection: ";

/// Asks a person at a terminal how to resolve each discrepancy.
///
/// Input is read as whitespace separated tokens, so several commands can be
/// typed ahead on a single line.
pub struct TerminalOperator<R, W> {
    input: R,
    output: W,
    edit_name: String,
    source_name: String,
    clear_screen: bool,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> TerminalOperator<R, W> {
    pub fn new(input: R, output: W, edit_name: String, source_name: String) -> Self {
        Self {
            input,
            output,
            edit_name,
            source_name,
            clear_screen: true,
            pending: VecDeque::new(),
        }
    }

    /// Keep previous output on screen instead of redrawing for every
    /// discrepancy.
    #[must_use]
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_output(self) -> W { self.output }

    fn show_discrepancy(&mut self, discrepancy: &Discrepancy) -> io::Result<()> {
        if self.clear_screen {
            clear_screen(&mut self.output)?;
        }

        write!(
            self.output,
            "\n\tediting {}  by  {}\n\n\n\tDISCREPANCY:\n\n\tfile under edit: {}\n\tsource file:     {}\n\n\n",
            self.edit_name, self.source_name, discrepancy.edit_context, discrepancy.source_context
        )
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.next_token()
    }

    fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the discrepancy was resolved",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(ToOwned::to_owned));
        }
    }

    /// Asks for a word until the operator confirms it.
    fn prompt_manual_word(&mut self, discrepancy: &Discrepancy) -> io::Result<String> {
        loop {
            let word = self.prompt("enter word to edit both by: ")?;
            let confirmation = self.prompt(&format!("save '{word}' to both indexes? (y/n): "))?;

            if confirmation.eq_ignore_ascii_case("y") {
                return Ok(word);
            }
            self.show_discrepancy(discrepancy)?;
        }
    }
}

impl<R: BufRead, W: Write> Operator for TerminalOperator<R, W> {
    fn resolve(&mut self, discrepancy: &Discrepancy) -> io::Result<Action> {
        self.show_discrepancy(discrepancy)?;

        loop {
            let token = self.prompt(RESOLUTION_OPTIONS)?;

            match token.parse::<Command>() {
                Ok(Command::Apply(action)) => return Ok(action),
                Ok(Command::ManualWord) => {
                    return self.prompt_manual_word(discrepancy).map(Action::ManualWord);
                }
                Err(error) => {
                    debug!("Rejected operator input {token:?}");
                    write!(self.output, "\n\t{error}\n\n")?;
                }
            }
        }
    }
}

pub fn clear_screen(output: &mut impl Write) -> io::Result<()> {
    execute!(output, Clear(ClearType::All), cursor::MoveTo(0, 0))
}
