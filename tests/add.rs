use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn contact_book(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir)
        .env_remove("CONTACTS_FILE")
        .env_remove("CONTACTS_IMPORT_ON_START");
    cmd
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // Add a contact, then look it up
    contact_book(dir.path())
        .write_stdin(
            "1\n\
            Ada\n\
            5551234567\n\
            ada@example.com\n\
            4\n\
            5551234567\n\
            8\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact added successfully!\nAdd contact operation completed.",
        ))
        .stdout(predicate::str::contains(
            "Contact Details for 5551234567:\nName: Ada\nEmail: ada@example.com",
        ))
        .stdout(predicate::str::contains("Goodbye!"));

    Ok(())
}

#[test]
fn duplicate_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    contact_book(dir.path())
        .write_stdin(
            "1\nAda\n5551234567\nada@example.com\n\
            1\nEve\n5551234567\neve@example.com\n\
            4\n5551234567\n8\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: A contact with phone number 5551234567 already exists",
        ))
        // First record left untouched
        .stdout(predicate::str::contains("Name: Ada\nEmail: ada@example.com"))
        .stdout(predicate::str::contains("Name: Eve").not());

    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // INVALID PHONE NUMBER
    contact_book(dir.path())
        .write_stdin("1\nAlice\n08031234\nalice@example.com\n5\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Invalid format: Phone number must be 10 digits.",
        ))
        .stdout(predicate::str::contains("No contacts available to display"));

    // INVALID EMAIL
    contact_book(dir.path())
        .write_stdin("1\nAlice\n0803123456\nfoo@bar\n5\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid format: Email must look like"))
        .stdout(predicate::str::contains("No contacts available to display"));

    // INVALID MENU OPTION
    contact_book(dir.path())
        .write_stdin("add\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Unrecognized command: 'add'"));

    Ok(())
}
