use std::fs;
use std::path::Path;

use crate::domain::Contact;
use crate::errors::AppError;
use crate::validation::{ValidationReq, validate_email, validate_name, validate_number};

pub const FIELD_DELIMITER: char = ',';

/// Encodes one record as `phone,name,email`.
///
/// Fields are written as-is. A comma or newline inside a name or email is not
/// escaped and will not survive an import.
pub fn serialize_contact(phone: &str, contact: &Contact) -> String {
    format!(
        "{phone}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}\n",
        contact.name, contact.email
    )
}

pub fn serialize_contacts<'a, I>(contacts: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Contact)>,
{
    let mut data = String::new();

    for (phone, contact) in contacts {
        data.push_str(&serialize_contact(phone, contact));
    }
    data
}

/// Decodes a single line of a contacts file.
///
/// Returns `Ok(None)` for a blank line. `line_no` is 1-based and only used to
/// point at the offending line in errors.
pub fn deserialize_contact_line(
    line_no: usize,
    line: &str,
) -> Result<Option<(String, Contact)>, AppError> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let [phone, name, email] = fields.as_slice() else {
        return Err(AppError::MalformedLine {
            line_no,
            line: line.to_string(),
        });
    };

    if !validate_number(phone) {
        return Err(invalid_line(line_no, line, ValidationReq::phone_req()));
    }

    if !validate_name(name) {
        return Err(invalid_line(line_no, line, ValidationReq::name_req()));
    }

    if !validate_email(email) {
        return Err(invalid_line(line_no, line, ValidationReq::email_req()));
    }

    Ok(Some((phone.to_string(), Contact::new(*name, *email))))
}

fn invalid_line(line_no: usize, line: &str, req: String) -> AppError {
    AppError::InvalidFormat(format!("{req} (line {line_no}: {line})"))
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
