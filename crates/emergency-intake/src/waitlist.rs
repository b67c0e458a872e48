//! Insertion-ordered waiting list keyed by patient identifier.

use std::collections::HashSet;

use crate::records::{Identifier, WaitlistEntry};

/// Outcome of offering an entry to the waiting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The entry was appended to the end of the list.
    Admitted,
    /// An entry with the same identifier was already waiting; the offered
    /// entry was dropped.
    Duplicate,
}

/// Patients awaiting emergency care, in arrival order.
///
/// No two entries share an identifier. Offering an identifier that is already
/// waiting leaves the list unchanged, so the first arrival's details win.
///
/// # Examples
///
/// ```
/// use emergency_intake::{Admission, WaitingList, WaitlistEntry};
///
/// let mut list = WaitingList::new();
/// assert_eq!(list.admit(WaitlistEntry::new("20-1-1")), Admission::Admitted);
/// assert_eq!(list.admit(WaitlistEntry::new("20-2-2")), Admission::Admitted);
/// assert_eq!(list.admit(WaitlistEntry::new("20-1-1")), Admission::Duplicate);
/// assert_eq!(list.identifiers(), ["20-1-1", "20-2-2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitingList {
    entries: Vec<WaitlistEntry>,
    waiting: HashSet<Identifier>,
}

impl WaitingList {
    /// Creates an empty waiting list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` unless its identifier is already waiting.
    pub fn admit(&mut self, entry: WaitlistEntry) -> Admission {
        if self.waiting.contains(&entry.identifier) {
            return Admission::Duplicate;
        }
        self.waiting.insert(entry.identifier.clone());
        self.entries.push(entry);
        Admission::Admitted
    }

    /// Returns `true` when a patient with `identifier` is waiting.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.waiting.contains(identifier)
    }

    /// Returns the entry for `identifier`, if waiting.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&WaitlistEntry> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
    }

    /// Returns the waiting identifiers in list order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.identifier.as_str())
            .collect()
    }

    /// Returns the entries in list order.
    #[must_use]
    pub fn entries(&self) -> &[WaitlistEntry] {
        &self.entries
    }

    /// Iterates over the entries in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, WaitlistEntry> {
        self.entries.iter()
    }

    /// Returns the number of waiting patients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds the list keeping only the first occurrence of each
    /// identifier, in order.
    ///
    /// [`admit`](Self::admit) already keeps identifiers unique, so the result
    /// equals `self`; the ordering assertion still normalises through this
    /// scan before comparing.
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        self.entries
            .iter()
            .cloned()
            .fold(Self::new(), |mut list, entry| {
                list.admit(entry);
                list
            })
    }
}

impl<'a> IntoIterator for &'a WaitingList {
    type Item = &'a WaitlistEntry;
    type IntoIter = std::slice::Iter<'a, WaitlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
