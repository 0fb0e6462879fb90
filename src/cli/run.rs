use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info};

use super::{display_contact, get_input, prompt, show_menu};
use crate::cli::command::{Cli, Command, parse_command};
use crate::errors::AppError;
use crate::store::ContactStore;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut store = ContactStore::new();

    if cli.import_on_start && cli.file.exists() {
        match store.import_from_text(&cli.file) {
            Ok(total) => info!(total, path = %cli.file.display(), "contacts loaded on start"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    run_menu(&mut store, &mut stdin.lock(), &mut stdout.lock(), &cli.file)
}

/// Drives the menu until the user quits or the input runs out.
///
/// Operation errors are printed and the loop carries on. Only a failure to
/// write to `output` ends it early.
pub fn run_menu<R, W>(
    store: &mut ContactStore,
    input: &mut R,
    output: &mut W,
    file: &Path,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(output)?;

        let Some(action) = get_input(input)? else {
            writeln!(output)?;
            break;
        };

        let command = match parse_command(&action) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "Error: {e}")?;
                continue;
            }
        };

        match dispatch(command, store, input, output, file) {
            Ok(ControlFlow::Break(())) => break,
            Ok(ControlFlow::Continue(())) => {}
            Err(e) => {
                debug!(?command, error = %e, "menu operation failed");
                writeln!(output, "Error: {e}")?;
            }
        }

        writeln!(output, "{} operation completed.", command.operation())?;
    }

    Ok(())
}

fn dispatch<R, W>(
    command: Command,
    store: &mut ContactStore,
    input: &mut R,
    output: &mut W,
    file: &Path,
) -> Result<ControlFlow<()>, AppError>
where
    R: BufRead,
    W: Write,
{
    match command {
        Command::AddContact => {
            let name = prompt(input, output, "Enter the name: ")?.unwrap_or_default();
            let phone = prompt(input, output, "Enter the phone number: ")?.unwrap_or_default();
            let email = prompt(input, output, "Enter the email address: ")?.unwrap_or_default();

            store.insert(&phone, &name, &email)?;

            writeln!(output, "Contact added successfully!")?;
        }

        Command::EditContact => {
            let phone = prompt(
                input,
                output,
                "Enter the phone number of the contact you want to edit: ",
            )?
            .unwrap_or_default();

            let current = store.find(&phone)?.clone();

            // Empty answers keep the current value
            let name = prompt(
                input,
                output,
                &format!("Enter the new name ({}): ", current.name),
            )?
            .filter(|s| !s.is_empty());
            let email = prompt(
                input,
                output,
                &format!("Enter the new email ({}): ", current.email),
            )?
            .filter(|s| !s.is_empty());

            store.update(&phone, name.as_deref(), email.as_deref())?;

            writeln!(output, "Contact updated successfully!")?;
        }

        Command::DeleteContact => {
            let phone = prompt(
                input,
                output,
                "Enter the phone number of the contact you want to delete: ",
            )?
            .unwrap_or_default();

            store.delete(&phone)?;

            writeln!(output, "Contact deleted successfully!")?;
        }

        Command::SearchContact => {
            let phone = prompt(
                input,
                output,
                "Enter the phone number of the contact you want to search for: ",
            )?
            .unwrap_or_default();

            let contact = store.find(&phone)?;

            writeln!(output, "\nContact Details for {phone}:\n{contact}")?;
        }

        Command::ListContacts => {
            let contacts = store.list_all()?;

            writeln!(output, "\nAll Contacts:")?;
            for (phone, contact) in contacts {
                writeln!(output, "\n{}", display_contact(phone, contact))?;
            }
        }

        Command::ExportContacts => {
            let total = store.export_to_text(file)?;

            writeln!(
                output,
                "Successfully exported {} contacts to '{}'.",
                total,
                file.display()
            )?;
        }

        Command::ImportContacts => {
            let total = store.import_from_text(file)?;

            writeln!(
                output,
                "Successfully imported {} contacts from '{}'.",
                total,
                file.display()
            )?;
        }

        Command::Exit => {
            writeln!(
                output,
                "Thank you for using the Contact Management System. Goodbye!"
            )?;
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(ControlFlow::Continue(()))
}
