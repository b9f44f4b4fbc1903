//! Row types for the clinical records table.

use crate::dataset::schema::Column;
use serde::Deserialize;

/// Clinical outcome at the end of the follow-up period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Survived,
    Died,
}

impl Outcome {
    /// Both outcome groups, in the order charts draw them.
    pub const ALL: [Outcome; 2] = [Outcome::Survived, Outcome::Died];

    /// Maps the dataset's 0/1 flag; any nonzero value counts as a death event.
    pub fn from_flag(flag: u8) -> Self {
        if flag == 0 {
            Outcome::Survived
        } else {
            Outcome::Died
        }
    }

    /// Label including the raw flag value, as shown in chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Survived => "Survived (0)",
            Outcome::Died => "Died (1)",
        }
    }
}

/// One patient record, projected onto the fixed column set.
///
/// Deserialized by header name, so extra columns in the source CSV are
/// dropped for free. A row with a missing or non-numeric value fails
/// deserialization and is excluded from the table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClinicalRecord {
    pub age: f64,
    pub creatinine_phosphokinase: f64,
    pub ejection_fraction: f64,
    pub platelets: f64,
    pub serum_creatinine: f64,
    pub serum_sodium: f64,
    pub time: f64,
    #[serde(rename = "DEATH_EVENT")]
    pub death_event: u8,
}

impl ClinicalRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_flag(self.death_event)
    }

    /// Value of the given column; the outcome flag is exposed as 0.0/1.0 so
    /// it can participate in numeric computations such as the correlation
    /// matrix.
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Age => self.age,
            Column::CreatininePhosphokinase => self.creatinine_phosphokinase,
            Column::EjectionFraction => self.ejection_fraction,
            Column::Platelets => self.platelets,
            Column::SerumCreatinine => self.serum_creatinine,
            Column::SerumSodium => self.serum_sodium,
            Column::Time => self.time,
            Column::DeathEvent => f64::from(self.death_event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(death_event: u8) -> ClinicalRecord {
        ClinicalRecord {
            age: 60.0,
            creatinine_phosphokinase: 250.0,
            ejection_fraction: 38.0,
            platelets: 262_000.0,
            serum_creatinine: 1.1,
            serum_sodium: 137.0,
            time: 115.0,
            death_event,
        }
    }

    #[test]
    fn outcome_maps_zero_and_nonzero_flags() {
        assert_eq!(sample_record(0).outcome(), Outcome::Survived);
        assert_eq!(sample_record(1).outcome(), Outcome::Died);
        assert_eq!(Outcome::from_flag(2), Outcome::Died);
    }

    #[test]
    fn value_covers_every_column() {
        let record = sample_record(1);
        assert_eq!(record.value(Column::Age), 60.0);
        assert_eq!(record.value(Column::Platelets), 262_000.0);
        assert_eq!(record.value(Column::DeathEvent), 1.0);
    }
}
