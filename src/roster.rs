//! People registered on the board and their current status.
//!
//! The roster is positional: person `i` is drawn in layout slot `i`, so
//! the index `find` returns is also the slot to refresh.

use heapless::{String, Vec};

use crate::config::{MAX_PEOPLE, NAME_LEN, ROLE_LEN, STATUS_LEN};
use crate::display::LayoutType;
use crate::error::{Error, Result};
use crate::rfid::Uid;

/// One person as shown on the panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Person {
    pub name: String<NAME_LEN>,
    pub role: String<ROLE_LEN>,
    pub status: String<STATUS_LEN>,
    /// Card UID in the reader's hex format.
    pub uid: Uid,
}

fn bounded<const N: usize>(text: &str) -> Result<String<N>> {
    String::try_from(text).map_err(|_| Error::BufferOverflow)
}

impl Person {
    pub fn new(name: &str, role: &str, status: &str, uid: &str) -> Result<Self> {
        Ok(Self {
            name: bounded(name)?,
            role: bounded(role)?,
            status: bounded(status)?,
            uid: bounded(uid)?,
        })
    }

    pub fn set_status(&mut self, status: &str) -> Result<()> {
        self.status = bounded(status)?;
        Ok(())
    }
}

/// Static roster entry, for boards configured at compile time.
#[derive(Clone, Copy, Debug)]
pub struct RosterEntry {
    pub uid: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

impl TryFrom<&RosterEntry> for Person {
    type Error = Error;

    fn try_from(entry: &RosterEntry) -> Result<Self> {
        Person::new(entry.name, entry.role, entry.status, entry.uid)
    }
}

/// Status after `current` in `cycle`, wrapping around.
///
/// A status not in the cycle restarts at the first entry.
pub fn next_status<'c>(current: &str, cycle: &[&'c str]) -> Option<&'c str> {
    let first = *cycle.first()?;
    let next = cycle
        .iter()
        .position(|s| *s == current)
        .map(|i| cycle[(i + 1) % cycle.len()])
        .unwrap_or(first);
    Some(next)
}

/// Up to [`MAX_PEOPLE`] people in display order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    people: Vec<Person, MAX_PEOPLE>,
}

impl Roster {
    pub const fn new() -> Self {
        Self { people: Vec::new() }
    }

    pub fn from_entries(entries: &[RosterEntry]) -> Result<Self> {
        let mut roster = Self::new();
        for entry in entries {
            roster.add(Person::try_from(entry)?)?;
        }
        Ok(roster)
    }

    /// Append a person; returns their slot.
    pub fn add(&mut self, person: Person) -> Result<usize> {
        self.people.push(person).map_err(|_| Error::RosterFull)?;
        Ok(self.people.len() - 1)
    }

    pub fn replace(&mut self, slot: usize, person: Person) -> Result<()> {
        let current = self.people.get_mut(slot).ok_or(Error::InvalidSlot)?;
        *current = person;
        Ok(())
    }

    /// Remove a person; later people move up one slot.
    pub fn remove(&mut self, slot: usize) -> Result<Person> {
        if slot >= self.people.len() {
            return Err(Error::InvalidSlot);
        }
        Ok(self.people.remove(slot))
    }

    pub fn get(&self, slot: usize) -> Option<&Person> {
        self.people.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Person> {
        self.people.get_mut(slot)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Slot of the person carrying `uid` (hex digits compared case-insensitively).
    pub fn find(&self, uid: &str) -> Option<usize> {
        self.people
            .iter()
            .position(|p| p.uid.eq_ignore_ascii_case(uid))
    }

    /// Move the person in `slot` to their next status in `cycle`.
    ///
    /// With an empty cycle the status is left as is.
    pub fn advance_status(&mut self, slot: usize, cycle: &[&str]) -> Result<&str> {
        let person = self.people.get_mut(slot).ok_or(Error::InvalidSlot)?;
        if let Some(next) = next_status(&person.status, cycle) {
            person.set_status(next)?;
        }
        Ok(person.status.as_str())
    }

    /// Layout that shows everyone on the roster.
    pub fn layout(&self) -> LayoutType {
        LayoutType::for_people(self.len())
    }
}
