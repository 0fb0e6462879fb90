pub mod command;
pub mod run;

pub use run::{run_app, run_menu};

use std::io::{BufRead, Write};

use crate::domain::Contact;
use crate::errors::AppError;
use command::Command;

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "\nWelcome to the Contact Management System!")?;
    writeln!(output, "Menu:")?;
    for (i, command) in Command::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, command.label())?;
    }
    write!(output, "Select an option (1-{}): ", Command::ALL.len())?;
    output.flush()?;
    Ok(())
}

pub fn display_contact(phone: &str, contact: &Contact) -> String {
    format!("Phone: {phone}\n{contact}")
}

// INPUT FUNCTIONS

/// Reads one trimmed line. `None` once the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;
    get_input(input)
}
