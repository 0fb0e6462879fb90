use std::fmt;

/// A contact record. The phone number is the key it is stored under and is
/// not repeated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nEmail: {}", self.name, self.email)
    }
}
