//! Interactive numbered menu over a contact store.
//!
//! Input is consumed as whitespace-separated tokens, so one line may carry
//! a choice and its arguments (`1 Alice 5551234567`) or they may arrive on
//! separate lines. Names therefore cannot contain spaces.
//!
//! A choice must be a whole token: `1abc` is an invalid choice, not choice
//! `1` followed by the name `abc`.

use crate::directory::ContactStore;
use crate::error::DirectoryError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::debug;

const BANNER: &str = "\nContact Management System\n\
                      1. Add Contact\n\
                      2. Search Contact\n\
                      3. Display Contacts\n\
                      4. Delete Contact\n\
                      5. Exit\n\
                      Enter your choice: ";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    Search,
    Display,
    Delete,
    Exit,
}

impl Choice {
    /// Parse a menu token; anything but `1`-`5` is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.parse::<u32>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Search),
            3 => Some(Self::Display),
            4 => Some(Self::Delete),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whitespace tokenizer over a line-oriented reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// The menu loop bound to its input and output streams.
pub struct Menu<R, W> {
    tokens: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            tokens: Tokens::new(input),
            out: output,
        }
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// Directory errors are printed and the loop continues; only I/O
    /// errors on the streams end it early.
    pub fn run<S: ContactStore + ?Sized>(&mut self, store: &mut S) -> io::Result<()> {
        loop {
            write!(self.out, "{}", BANNER)?;
            self.out.flush()?;

            let Some(token) = self.tokens.next_token()? else {
                debug!("Menu input closed");
                return Ok(());
            };

            let keep_going = match Choice::parse(&token) {
                Some(choice) => {
                    debug!(?choice, "Menu choice");
                    self.dispatch(choice, store)?
                }
                None => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Handle one choice; `false` means the loop should stop.
    fn dispatch<S: ContactStore + ?Sized>(
        &mut self,
        choice: Choice,
        store: &mut S,
    ) -> io::Result<bool> {
        match choice {
            Choice::Add => {
                let Some(name) = self.prompt("Enter Name: ")? else {
                    return Ok(false);
                };
                let Some(phone) = self.prompt("Enter Phone: ")? else {
                    return Ok(false);
                };
                match store.insert(&name, &phone) {
                    Ok(contact) => writeln!(self.out, "Contact added: {}", contact)?,
                    Err(DirectoryError::InvalidPhone(_)) => {
                        writeln!(self.out, "Invalid phone number. Must be 10 digits.")?
                    }
                    Err(DirectoryError::DuplicateName(_)) => {
                        writeln!(self.out, "Contact name already exists.")?
                    }
                    Err(err) => writeln!(self.out, "{}", err)?,
                }
            }
            Choice::Search => {
                let Some(name) = self.prompt("Enter Name to Search: ")? else {
                    return Ok(false);
                };
                match store.search(&name) {
                    Ok(contact) => writeln!(self.out, "Contact Found: {}", contact)?,
                    Err(DirectoryError::NotFound(_)) => {
                        writeln!(self.out, "Contact not found.")?
                    }
                    Err(err) => writeln!(self.out, "{}", err)?,
                }
            }
            Choice::Display => {
                writeln!(self.out, "\nContacts List:")?;
                for contact in store.list() {
                    writeln!(self.out, "{}", contact)?;
                }
            }
            Choice::Delete => {
                let Some(name) = self.prompt("Enter Name to Delete: ")? else {
                    return Ok(false);
                };
                match store.delete(&name) {
                    Ok(contact) => writeln!(self.out, "Contact deleted: {}", contact.name())?,
                    Err(err) => writeln!(self.out, "{}", err)?,
                }
            }
            Choice::Exit => {
                writeln!(self.out, "Exiting...")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.tokens.next_token()
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Run the menu over `store` until Exit or end of input.
pub fn run_menu<S, R, W>(store: &mut S, input: R, output: W) -> io::Result<()>
where
    S: ContactStore + ?Sized,
    R: BufRead,
    W: Write,
{
    Menu::new(input, output).run(store)
}
