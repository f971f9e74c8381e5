use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{BookError, Result};

/// One entry in the contact book. The name is the key and is compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: String::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Case-insensitive comparison against the contact's name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert("phone".into(), Value::String(self.phone.clone()));
        map.insert("email".into(), Value::String(self.email.clone()));
        map.insert("address".into(), Value::String(self.address.clone()));
        map
    }

    /// Rebuild a contact from its stored map form.
    /// `name`, `phone` and `email` are required; `address` defaults to empty.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let name = required(map, "name")?;
        let phone = required(map, "phone")?;
        let email = required(map, "email")?;
        let address = match map.get("address") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(BookError::MalformedRecord { field: "address" }),
        };

        Ok(Self {
            name,
            phone,
            email,
            address,
        })
    }
}

fn required(map: &Map<String, Value>, field: &'static str) -> Result<String> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(BookError::MalformedRecord { field }),
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}, Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}

/// Replacement values for an update. Blank or absent fields keep the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactUpdate {
    pub fn new(phone: Option<String>, email: Option<String>, address: Option<String>) -> Self {
        Self { phone, email, address }
    }

    pub fn is_empty(&self) -> bool {
        [&self.phone, &self.email, &self.address]
            .iter()
            .all(|f| supplied(f).is_none())
    }

    /// Apply to a contact, returning the names of the fields that changed.
    pub fn apply(&self, contact: &mut Contact) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if let Some(phone) = supplied(&self.phone) {
            contact.phone = phone.to_string();
            changed.push("phone");
        }
        if let Some(email) = supplied(&self.email) {
            contact.email = email.to_string();
            changed.push("email");
        }
        if let Some(address) = supplied(&self.address) {
            contact.address = address.to_string();
            changed.push("address");
        }
        changed
    }
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}
