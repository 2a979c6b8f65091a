//! Clinic - Patients and the prescriptions issued to them
//!
//! A prescription points at its patient through `patient_id`. Grouping
//! prescriptions by patient is done by callers with
//! [`GroupIndex`](crate::service::grouping::GroupIndex).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::identity::{Identified, PatientId, PrescriptionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    gender: String,
}

impl Patient {
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }
}

impl Identified for Patient {
    type Key = PatientId;

    fn key(&self) -> &PatientId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    id: PrescriptionId,
    patient_id: PatientId,
    medication_name: String,
    date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: PrescriptionId,
        patient_id: PatientId,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }

    pub fn id(&self) -> PrescriptionId {
        self.id
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn medication_name(&self) -> &str {
        &self.medication_name
    }

    pub fn date_issued(&self) -> NaiveDate {
        self.date_issued
    }
}

impl Identified for Prescription {
    type Key = PrescriptionId;

    fn key(&self) -> &PrescriptionId {
        &self.id
    }
}
