//! Typed records parsed from scenario table rows.
//!
//! Each record implements [`DataTableRow`] so step definitions can take
//! `Rows<T>` directly. Required columns surface
//! [`DataTableError::MissingColumn`]; optional columns become `None` when the
//! table does not declare them.

use std::borrow::Borrow;

use derive_more::{Deref, Display, From};
use rstest_bdd::datatable::{DataTableError, DataTableRow, RowSpec};

use crate::columns::Column;

/// National identification number (CUIL) keying patients and waiting-list
/// entries. Stored verbatim; no checksum validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref, From)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps a raw identifier string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A nurse on duty for the scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nurse {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl DataTableRow for Nurse {
    const REQUIRES_HEADER: bool = true;

    fn parse_row(row: RowSpec<'_>) -> Result<Self, DataTableError> {
        Ok(Self {
            first_name: Column::NurseFirstName.require(&row)?,
            last_name: Column::NurseLastName.require(&row)?,
        })
    }
}

/// A patient already known to the hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Patient CUIL.
    pub identifier: Identifier,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Insurance provider.
    pub insurance_provider: String,
}

impl DataTableRow for Patient {
    const REQUIRES_HEADER: bool = true;

    /// Every column is required.
    fn parse_row(row: RowSpec<'_>) -> Result<Self, DataTableError> {
        Ok(Self {
            identifier: Column::Identifier.require(&row)?.into(),
            last_name: Column::LastName.require(&row)?,
            first_name: Column::FirstName.require(&row)?,
            insurance_provider: Column::InsuranceProvider.require(&row)?,
        })
    }
}

/// Vital signs recorded at intake, kept as written by the triage nurse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VitalSigns {
    /// Body temperature.
    pub temperature: Option<String>,
    /// Heart rate.
    pub heart_rate: Option<String>,
    /// Respiratory rate.
    pub respiratory_rate: Option<String>,
    /// Blood pressure.
    pub blood_pressure: Option<String>,
}

impl VitalSigns {
    /// Returns `true` when no vital sign was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.heart_rate.is_none()
            && self.respiratory_rate.is_none()
            && self.blood_pressure.is_none()
    }
}

/// A patient waiting for emergency care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    /// Patient CUIL; unique within a waiting list.
    pub identifier: Identifier,
    /// Family name.
    pub last_name: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Insurance provider.
    pub insurance_provider: Option<String>,
    /// Free-text intake report.
    pub report: Option<String>,
    /// Triage emergency level.
    pub emergency_level: Option<String>,
    /// Vital signs captured at intake.
    pub vitals: VitalSigns,
}

impl WaitlistEntry {
    /// Creates an entry carrying only an identifier.
    #[must_use]
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
            last_name: None,
            first_name: None,
            insurance_provider: None,
            report: None,
            emergency_level: None,
            vitals: VitalSigns::default(),
        }
    }

    /// Returns the value of a name column, if recorded.
    ///
    /// Only [`Column::LastName`] and [`Column::FirstName`] are answered;
    /// other columns yield `None`.
    #[must_use]
    pub fn name_field(&self, column: Column) -> Option<&str> {
        match column {
            Column::LastName => self.last_name.as_deref(),
            Column::FirstName => self.first_name.as_deref(),
            _ => None,
        }
    }
}

impl DataTableRow for WaitlistEntry {
    const REQUIRES_HEADER: bool = true;

    /// Only the identifier is required.
    fn parse_row(row: RowSpec<'_>) -> Result<Self, DataTableError> {
        Ok(Self {
            identifier: Column::Identifier.require(&row)?.into(),
            last_name: Column::LastName.lookup_owned(&row),
            first_name: Column::FirstName.lookup_owned(&row),
            insurance_provider: Column::InsuranceProvider.lookup_owned(&row),
            report: Column::Report.lookup_owned(&row),
            emergency_level: Column::EmergencyLevel.lookup_owned(&row),
            vitals: VitalSigns {
                temperature: Column::Temperature.lookup_owned(&row),
                heart_rate: Column::HeartRate.lookup_owned(&row),
                respiratory_rate: Column::RespiratoryRate.lookup_owned(&row),
                blood_pressure: Column::BloodPressure.lookup_owned(&row),
            },
        })
    }
}

/// One row of an expected waiting-list order.
///
/// Name fields are `None` when the expected table omits the column, in which
/// case they are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistExpectation {
    /// Identifier expected at this position.
    pub identifier: Identifier,
    /// Expected family name, if the table declares the column.
    pub last_name: Option<String>,
    /// Expected given name, if the table declares the column.
    pub first_name: Option<String>,
}

impl WaitlistExpectation {
    /// Creates an expectation that checks only the identifier.
    #[must_use]
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
            last_name: None,
            first_name: None,
        }
    }

    /// Returns the expected value for a name column, if the table declares it.
    #[must_use]
    pub fn name_field(&self, column: Column) -> Option<&str> {
        match column {
            Column::LastName => self.last_name.as_deref(),
            Column::FirstName => self.first_name.as_deref(),
            _ => None,
        }
    }
}

impl DataTableRow for WaitlistExpectation {
    const REQUIRES_HEADER: bool = true;

    fn parse_row(row: RowSpec<'_>) -> Result<Self, DataTableError> {
        Ok(Self {
            identifier: Column::Identifier.require(&row)?.into(),
            last_name: Column::LastName.lookup_owned(&row),
            first_name: Column::FirstName.lookup_owned(&row),
        })
    }
}
