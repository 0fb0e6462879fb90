use std::path::PathBuf;

use clap::Parser;

use crate::errors::AppError;
use crate::store::DEFAULT_FILE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact Management System")]
pub struct Cli {
    /// Text file used by the export and import menu options
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_FILE_PATH)]
    pub file: PathBuf,

    /// Import the contacts file before showing the menu
    #[arg(long, env = "CONTACTS_IMPORT_ON_START")]
    pub import_on_start: bool,
}

/// Menu options, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    EditContact,
    DeleteContact,
    SearchContact,
    ListContacts,
    ExportContacts,
    ImportContacts,
    Exit,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::AddContact,
        Command::EditContact,
        Command::DeleteContact,
        Command::SearchContact,
        Command::ListContacts,
        Command::ExportContacts,
        Command::ImportContacts,
        Command::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::AddContact => "Add a new contact",
            Command::EditContact => "Edit an existing contact",
            Command::DeleteContact => "Delete a contact",
            Command::SearchContact => "Search for a contact",
            Command::ListContacts => "Display all contacts",
            Command::ExportContacts => "Export contacts to a text file",
            Command::ImportContacts => "Import contacts from a text file",
            Command::Exit => "Quit",
        }
    }

    /// Name used in the line printed once an option has finished.
    pub fn operation(&self) -> &'static str {
        match self {
            Command::AddContact => "Add contact",
            Command::EditContact => "Edit contact",
            Command::DeleteContact => "Delete contact",
            Command::SearchContact => "Search contact",
            Command::ListContacts => "Display all contacts",
            Command::ExportContacts => "Export contacts",
            Command::ImportContacts => "Import contacts",
            Command::Exit => "Quit",
        }
    }
}

pub fn parse_command(action: &str) -> Result<Command, AppError> {
    match action.trim() {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::EditContact),
        "3" => Ok(Command::DeleteContact),
        "4" => Ok(Command::SearchContact),
        "5" => Ok(Command::ListContacts),
        "6" => Ok(Command::ExportContacts),
        "7" => Ok(Command::ImportContacts),
        "8" => Ok(Command::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}
