use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::Contact;
use crate::errors::AppError;
use crate::helper;
use crate::validation::{ValidationReq, check_contact_fields, validate_email, validate_name};

pub const DEFAULT_FILE_PATH: &str = "contacts.txt";

/// Contacts keyed by phone number, enumerated in insertion order.
///
/// Overwriting an existing phone (import) keeps its original position.
#[derive(Debug, Default)]
pub struct ContactStore {
    mem: HashMap<String, Contact>,
    order: Vec<String>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn contains(&self, phone: &str) -> bool {
        self.mem.contains_key(phone)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.order
            .iter()
            .filter_map(|phone| self.mem.get(phone).map(|c| (phone.as_str(), c)))
    }

    pub fn insert(&mut self, phone: &str, name: &str, email: &str) -> Result<(), AppError> {
        check_contact_fields(phone, name, email)?;

        if self.contains(phone) {
            return Err(AppError::DuplicateKey(phone.to_string()));
        }

        self.upsert(phone.to_string(), Contact::new(name, email));
        debug!(phone, "contact added");
        Ok(())
    }

    /// Updates the fields that are supplied. The phone key never changes.
    pub fn update(
        &mut self,
        phone: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), AppError> {
        let contact = self
            .mem
            .get_mut(phone)
            .ok_or_else(|| AppError::NotFound(phone.to_string()))?;

        if let Some(name) = name
            && !validate_name(name)
        {
            return Err(AppError::InvalidFormat(ValidationReq::name_req()));
        }

        if let Some(email) = email
            && !validate_email(email)
        {
            return Err(AppError::InvalidFormat(ValidationReq::email_req()));
        }

        if let Some(name) = name {
            contact.name = name.to_string();
        }
        if let Some(email) = email {
            contact.email = email.to_string();
        }

        debug!(phone, "contact updated");
        Ok(())
    }

    pub fn delete(&mut self, phone: &str) -> Result<Contact, AppError> {
        let contact = self
            .mem
            .remove(phone)
            .ok_or_else(|| AppError::NotFound(phone.to_string()))?;

        self.order.retain(|p| p != phone);

        debug!(phone, "contact deleted");
        Ok(contact)
    }

    pub fn find(&self, phone: &str) -> Result<&Contact, AppError> {
        self.mem
            .get(phone)
            .ok_or_else(|| AppError::NotFound(phone.to_string()))
    }

    pub fn list_all(&self) -> Result<Vec<(&str, &Contact)>, AppError> {
        if self.is_empty() {
            return Err(AppError::EmptyStore);
        }
        Ok(self.iter().collect())
    }

    /// Writes every record as a `phone,name,email` line, replacing the file.
    /// Returns the number of records written.
    pub fn export_to_text(&self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();
        helper::create_file_parent(path)?;

        let mut file = OpenOptions::new()
            .write(true) // WRITE to file on export
            .truncate(true)
            .create(true)
            .open(path)?;

        let data = helper::serialize_contacts(self.iter());
        file.write_all(data.as_bytes())?;
        file.flush()?;

        info!(path = %path.display(), total = self.len(), "contacts exported");
        Ok(self.len())
    }

    /// Upserts every record of a contacts file into the store.
    ///
    /// Stops at the first malformed or invalid line. Records upserted before
    /// that line stay in the store. Returns the number of records upserted.
    pub fn import_from_text(&mut self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AppError::NotFoundFile(path.to_path_buf()));
        }

        let reader = BufReader::new(File::open(path)?);
        let mut total = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            let record = match helper::deserialize_contact_line(idx + 1, &line) {
                Ok(record) => record,
                Err(e) => {
                    warn!(path = %path.display(), applied = total, error = %e, "import aborted");
                    return Err(e);
                }
            };

            if let Some((phone, contact)) = record {
                self.upsert(phone, contact);
                total += 1;
            }
        }

        info!(path = %path.display(), total, "contacts imported");
        Ok(total)
    }

    fn upsert(&mut self, phone: String, contact: Contact) {
        if self.mem.insert(phone.clone(), contact).is_none() {
            self.order.push(phone);
        }
    }
}
