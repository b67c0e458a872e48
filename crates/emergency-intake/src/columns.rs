//! Column names recognised in scenario tables.
//!
//! Every column has a canonical English heading plus the Spanish heading used
//! by the ward's original scenarios. Lookups accept either spelling, so a
//! feature file may be written in whichever language the ward uses.

use std::fmt;

use rstest_bdd::datatable::{DataTableError, RowSpec};

/// A recognised scenario table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Column {
    /// First name of a registered nurse.
    NurseFirstName,
    /// Last name of a registered nurse.
    NurseLastName,
    /// National identification number (CUIL).
    Identifier,
    /// Patient last name.
    LastName,
    /// Patient first name.
    FirstName,
    /// Insurance provider (obra social).
    InsuranceProvider,
    /// Free-text intake report.
    Report,
    /// Triage emergency level.
    EmergencyLevel,
    /// Body temperature.
    Temperature,
    /// Heart rate.
    HeartRate,
    /// Respiratory rate.
    RespiratoryRate,
    /// Blood pressure.
    BloodPressure,
}

impl Column {
    /// Returns the canonical English heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::NurseFirstName => "Nurse First Name",
            Self::NurseLastName => "Nurse Last Name",
            Self::Identifier => "Identifier",
            Self::LastName => "Last Name",
            Self::FirstName => "First Name",
            Self::InsuranceProvider => "Insurance Provider",
            Self::Report => "Report",
            Self::EmergencyLevel => "Emergency Level",
            Self::Temperature => "Temperature",
            Self::HeartRate => "Heart Rate",
            Self::RespiratoryRate => "Respiratory Rate",
            Self::BloodPressure => "Blood Pressure",
        }
    }

    /// Returns the Spanish heading used by the original ward scenarios.
    #[must_use]
    pub const fn spanish_heading(self) -> &'static str {
        match self {
            Self::NurseFirstName => "Nombre Enfermera",
            Self::NurseLastName => "Apellido Enfermera",
            Self::Identifier => "CUIL",
            Self::LastName => "Apellido",
            Self::FirstName => "Nombre",
            Self::InsuranceProvider => "Obra Social",
            Self::Report => "Informe",
            Self::EmergencyLevel => "Nivel de Emergencia",
            Self::Temperature => "Temperatura",
            Self::HeartRate => "Frecuencia Cardíaca",
            Self::RespiratoryRate => "Frecuencia Respiratoria",
            Self::BloodPressure => "Tensión Arterial",
        }
    }

    /// Returns every heading this column answers to, canonical first.
    #[must_use]
    pub const fn headings(self) -> [&'static str; 2] {
        [self.heading(), self.spanish_heading()]
    }

    /// Returns the cell under this column, trying each heading in turn, or
    /// `None` when the table declares none of them.
    #[must_use]
    pub fn lookup<'r>(self, row: &'r RowSpec<'_>) -> Option<&'r str> {
        self.headings()
            .into_iter()
            .find_map(|heading| row.column(heading).ok())
    }

    /// Returns the cell under this column as an owned string, if declared.
    #[must_use]
    pub fn lookup_owned(self, row: &RowSpec<'_>) -> Option<String> {
        self.lookup(row).map(ToOwned::to_owned)
    }

    /// Returns the cell under a column the row's record requires.
    ///
    /// # Errors
    ///
    /// Returns [`DataTableError::MissingColumn`] naming the canonical heading
    /// when the table declares the column under neither heading.
    pub fn require(self, row: &RowSpec<'_>) -> Result<String, DataTableError> {
        self.lookup_owned(row)
            .ok_or_else(|| DataTableError::MissingColumn {
                row_number: row.row_number(),
                column: self.heading().to_owned(),
            })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

#[cfg(test)]
mod tests {
    use super::Column;
    use rstest::rstest;
    use rstest_bdd::datatable::{DataTableError, DataTableRow, RowSpec, Rows};

    /// Captures the row's identifier under whichever heading the table uses.
    #[derive(Debug)]
    struct IdentifierCell(Result<String, DataTableError>);

    impl DataTableRow for IdentifierCell {
        const REQUIRES_HEADER: bool = true;

        fn parse_row(row: RowSpec<'_>) -> Result<Self, DataTableError> {
            Ok(Self(Column::Identifier.require(&row)))
        }
    }

    fn identifier_cells(rows: &[&[&str]]) -> Vec<Result<String, String>> {
        let raw: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect();
        Rows::<IdentifierCell>::try_from(raw)
            .unwrap_or_else(|e| panic!("table should parse: {e}"))
            .into_iter()
            .map(|cell| cell.0.map_err(|e| e.to_string()))
            .collect()
    }

    #[rstest]
    #[case::identifier(Column::Identifier, ["Identifier", "CUIL"])]
    #[case::accented(Column::HeartRate, ["Heart Rate", "Frecuencia Cardíaca"])]
    #[case::nurse(Column::NurseFirstName, ["Nurse First Name", "Nombre Enfermera"])]
    fn lists_canonical_heading_first(#[case] column: Column, #[case] expected: [&str; 2]) {
        assert_eq!(column.headings(), expected);
    }

    #[rstest]
    #[case::canonical(&["Identifier", "Last Name"])]
    #[case::spanish(&["CUIL", "Apellido"])]
    fn looks_up_either_heading(#[case] header: &[&str]) {
        let cells = identifier_cells(&[header, &["20-11111111-1", "Perez"]]);
        assert_eq!(cells, [Ok("20-11111111-1".to_owned())]);
    }

    #[test]
    fn missing_column_names_canonical_heading() {
        let cells = identifier_cells(&[&["Apellido"], &["Perez"]]);
        assert_eq!(
            cells,
            [Err("data table row 2 is missing column 'Identifier'".to_owned())]
        );
    }

    #[test]
    fn headings_are_case_sensitive() {
        let cells = identifier_cells(&[&["identifier"], &["20-11111111-1"]]);
        assert_eq!(
            cells,
            [Err("data table row 2 is missing column 'Identifier'".to_owned())]
        );
    }

    #[test]
    fn displays_canonical_heading() {
        assert_eq!(Column::InsuranceProvider.to_string(), "Insurance Provider");
    }
}
