//! Couples of a parish community and the birthdays of each spouse, loaded
//! from a TOML file:
//!
//! ```toml
//! [[couple]]
//! registration = 12
//! parish = "São José"
//! community = "Vila Nova"
//! husband = { name = "João Silva", birthday = "1980-03-14" }
//! wife = { name = "Maria Silva", birthday = "07-02" }
//! ```
use crate::occurrence::Person;
use crate::recurring::RecurringDate;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Roster {
    #[serde(default, rename = "couple")]
    pub couples: Vec<Couple>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Roster, RosterError> {
        let content = fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_owned(),
            source,
        })?;
        debug!("Parsing roster file {}", path.display());
        Roster::from_toml(&content)
    }

    /// Parse a roster document.  Invalid birthdays and repeated registration
    /// numbers reject the whole roster.
    pub fn from_toml(s: &str) -> Result<Roster, RosterError> {
        let roster = toml::from_str::<Roster>(s)?;
        let mut seen = HashSet::new();
        for couple in &roster.couples {
            if !seen.insert(couple.registration) {
                return Err(RosterError::DuplicateRegistration(couple.registration));
            }
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.couples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.couples.is_empty()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Couple {
    pub registration: u32,
    #[serde(default)]
    pub parish: String,
    #[serde(default)]
    pub community: String,
    pub husband: Spouse,
    pub wife: Spouse,
}

impl Couple {
    pub fn spouse(&self, role: Role) -> &Spouse {
        match role {
            Role::Husband => &self.husband,
            Role::Wife => &self.wife,
        }
    }

    pub fn name(&self, role: Role) -> &str {
        &self.spouse(role).name
    }
}

impl Person for Couple {
    fn recurring_dates(&self) -> Vec<(&str, RecurringDate)> {
        [Role::Husband, Role::Wife]
            .into_iter()
            .filter_map(|role| {
                self.spouse(role)
                    .birthday
                    .map(|birthday| (role.label(), birthday))
            })
            .collect()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Spouse {
    pub name: String,
    #[serde(default)]
    pub birthday: Option<RecurringDate>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Role {
    Husband,
    Wife,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Husband => "husband",
            Role::Wife => "wife",
        }
    }

    pub fn from_label(label: &str) -> Option<Role> {
        match label {
            "husband" => Some(Role::Husband),
            "wife" => Some(Role::Wife),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse roster")]
    Parse(#[from] toml::de::Error),
    #[error("registration number {0} is used by more than one couple")]
    DuplicateRegistration(u32),
}
