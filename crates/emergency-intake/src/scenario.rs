//! Per-scenario state shared by the emergency intake steps.
//!
//! A [`ScenarioContext`] is created fresh for each scenario and handed to
//! every step. It owns the registered nurses and patients and the waiting
//! list built up by intake steps.

use std::collections::HashSet;

use crate::columns::Column;
use crate::config::{DuplicatePolicy, IntakeConfig};
use crate::error::WaitlistError;
use crate::records::{Identifier, Nurse, Patient, WaitlistEntry, WaitlistExpectation};
use crate::waitlist::{Admission, WaitingList};

/// Name columns compared by [`ScenarioContext::assert_waiting_list_order`].
const CHECKED_NAMES: [Column; 2] = [Column::LastName, Column::FirstName];

/// Identifiers admitted and skipped by one intake step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeSummary {
    /// Identifiers appended to the waiting list, in order.
    pub admitted: Vec<Identifier>,
    /// Identifiers dropped because the patient was already waiting.
    pub skipped: Vec<Identifier>,
}

/// State owned by a single scenario.
///
/// # Examples
///
/// ```
/// use emergency_intake::{ScenarioContext, WaitlistEntry, WaitlistExpectation};
/// use rstest_bdd::datatable::Rows;
///
/// let table = |cells: &[&str]| -> Vec<Vec<String>> {
///     cells.iter().map(|c| vec![(*c).to_string()]).collect()
/// };
/// let mut ctx = ScenarioContext::new();
/// let arrivals = Rows::<WaitlistEntry>::try_from(table(&["Identifier", "20-2-2", "20-1-1"]))?;
/// ctx.admit_emergencies(arrivals)?;
///
/// let expected =
///     Rows::<WaitlistExpectation>::try_from(table(&["Identifier", "20-2-2", "20-1-1"]))?;
/// ctx.assert_waiting_list_order(&expected)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    config: IntakeConfig,
    nurses: Vec<Nurse>,
    patients: Vec<Patient>,
    waiting_list: Option<WaitingList>,
}

impl ScenarioContext {
    /// Creates an empty context with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context using `config`.
    #[must_use]
    pub fn with_config(config: IntakeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the registered nurses. Earlier registrations are discarded.
    pub fn register_nurses(&mut self, nurses: impl IntoIterator<Item = Nurse>) -> &[Nurse] {
        self.nurses = nurses.into_iter().collect();
        log::debug!("registered {} nurse(s)", self.nurses.len());
        &self.nurses
    }

    /// Replaces the registered patients. Earlier registrations are discarded.
    pub fn register_patients(
        &mut self,
        patients: impl IntoIterator<Item = Patient>,
    ) -> &[Patient] {
        self.patients = patients.into_iter().collect();
        log::debug!("registered {} patient(s)", self.patients.len());
        &self.patients
    }

    /// Admits each arrival to the waiting list, in order.
    ///
    /// The waiting list is created on first use and appended to afterwards.
    /// An arrival whose identifier is already waiting, including one admitted
    /// earlier in the same batch, is skipped under [`DuplicatePolicy::Skip`].
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::DuplicateIdentifier`] for a repeat arrival
    /// under [`DuplicatePolicy::Reject`]. The waiting list is then left
    /// unchanged.
    pub fn admit_emergencies(
        &mut self,
        arrivals: impl IntoIterator<Item = WaitlistEntry>,
    ) -> Result<IntakeSummary, WaitlistError> {
        let arrivals: Vec<WaitlistEntry> = arrivals.into_iter().collect();
        let list = self.waiting_list.get_or_insert_with(WaitingList::new);

        if self.config.duplicate_policy == DuplicatePolicy::Reject {
            reject_repeat_arrivals(list, &arrivals)?;
        }

        let mut summary = IntakeSummary::default();
        for (index, entry) in arrivals.into_iter().enumerate() {
            let identifier = entry.identifier.clone();
            match list.admit(entry) {
                Admission::Admitted => summary.admitted.push(identifier),
                Admission::Duplicate => {
                    log::debug!(
                        "row {}: {identifier} is already waiting; skipped",
                        table_row_number(index)
                    );
                    summary.skipped.push(identifier);
                }
            }
        }
        log::info!(
            "intake admitted {} patient(s), skipped {} duplicate(s); {} waiting",
            summary.admitted.len(),
            summary.skipped.len(),
            list.len()
        );
        Ok(summary)
    }

    /// Checks the waiting list against the expected rows.
    ///
    /// The stored list is first normalised to the first occurrence of each
    /// identifier. Its identifiers must then match the expected identifiers
    /// exactly, in order. Where an expectation carries a last or first name,
    /// the waiting entry's value must match it.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::OrderMismatch`] naming both sequences or
    /// [`WaitlistError::FieldMismatch`] naming the offending patient.
    pub fn assert_waiting_list_order(
        &mut self,
        expected: &[WaitlistExpectation],
    ) -> Result<(), WaitlistError> {
        let normalised = self
            .waiting_list
            .as_ref()
            .map(WaitingList::deduplicated)
            .unwrap_or_default();
        let list = self.waiting_list.insert(normalised);

        let expected_ids: Vec<String> = expected
            .iter()
            .map(|row| row.identifier.to_string())
            .collect();
        let actual_ids: Vec<String> = list
            .identifiers()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect();
        if actual_ids != expected_ids {
            return Err(WaitlistError::OrderMismatch {
                expected: expected_ids,
                actual: actual_ids,
            });
        }

        for (row, entry) in expected.iter().zip(list.iter()) {
            for column in CHECKED_NAMES {
                let Some(want) = row.name_field(column) else {
                    continue;
                };
                let found = entry.name_field(column);
                if found != Some(want) {
                    return Err(WaitlistError::FieldMismatch {
                        identifier: entry.identifier.clone(),
                        column,
                        expected: want.to_owned(),
                        actual: found.map(ToOwned::to_owned),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the registered nurses.
    #[must_use]
    pub fn nurses(&self) -> &[Nurse] {
        &self.nurses
    }

    /// Returns the registered patients.
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Looks up a registered patient by identifier.
    #[must_use]
    pub fn patient(&self, identifier: &str) -> Option<&Patient> {
        self.patients
            .iter()
            .find(|patient| patient.identifier == identifier)
    }

    /// Returns the waiting list, or `None` before the first intake.
    #[must_use]
    pub fn waiting_list(&self) -> Option<&WaitingList> {
        self.waiting_list.as_ref()
    }
}

/// Row number of the `index`th arrival in its step table, counting the header.
const fn table_row_number(index: usize) -> usize {
    index + 2
}

fn reject_repeat_arrivals(
    list: &WaitingList,
    arrivals: &[WaitlistEntry],
) -> Result<(), WaitlistError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(arrivals.len());
    for (index, entry) in arrivals.iter().enumerate() {
        let id = entry.identifier.as_str();
        if list.contains(id) || !seen.insert(id) {
            return Err(WaitlistError::DuplicateIdentifier {
                identifier: entry.identifier.clone(),
                row_number: table_row_number(index),
            });
        }
    }
    Ok(())
}
