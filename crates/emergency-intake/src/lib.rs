//! Emergency ward intake model exercised by behaviour-driven scenarios.
//!
//! Scenarios register the nurses and patients on hand, admit arriving
//! patients to a waiting list keyed by CUIL, and finally assert the order in
//! which patients are waiting. All state lives in a [`ScenarioContext`]
//! created fresh for each scenario. Step definitions receive their Gherkin
//! tables as `rstest_bdd::datatable::Rows` of the record types in
//! [`records`], resolved by English or Spanish column headings, and call the
//! matching context operation.
//!
//! The waiting list keeps arrival order and drops repeat arrivals, so the
//! first intake of a patient determines the recorded details.

pub mod columns;
pub mod config;
pub mod error;
pub mod records;
pub mod scenario;
pub mod waitlist;

pub use columns::Column;
pub use config::{DUPLICATE_POLICY_ENV, DuplicatePolicy, IntakeConfig, UnknownPolicy};
pub use error::WaitlistError;
pub use records::{
    Identifier, Nurse, Patient, VitalSigns, WaitlistEntry, WaitlistExpectation,
};
pub use scenario::{IntakeSummary, ScenarioContext};
pub use waitlist::{Admission, WaitingList};
