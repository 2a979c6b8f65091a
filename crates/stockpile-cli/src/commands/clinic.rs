//! stockpile clinic command

use chrono::{Days, NaiveDate, Utc};
use clap::Args;
use stockpile_adapter::InMemoryRepository;
use stockpile_domain::{
    EntityRepository, GroupIndex, Patient, PatientId, Prescription, PrescriptionId,
    RepositoryError,
};

#[derive(Debug, Args)]
pub struct ClinicCommand {
    /// Patient whose prescriptions are listed (all patients when omitted)
    #[arg(short, long)]
    pub patient: Option<u32>,
}

/// Patients, prescriptions, and the patient → prescriptions index
pub struct ClinicRecords {
    patients: InMemoryRepository<Patient>,
    prescriptions: InMemoryRepository<Prescription>,
    by_patient: GroupIndex<PatientId, Prescription>,
}

impl ClinicRecords {
    pub fn new() -> Self {
        Self {
            patients: InMemoryRepository::new(),
            prescriptions: InMemoryRepository::new(),
            by_patient: GroupIndex::build(Vec::new(), |p: &Prescription| p.patient_id()),
        }
    }

    pub fn seed_data(&mut self, today: NaiveDate) -> Result<(), RepositoryError> {
        self.patients
            .add(Patient::new(PatientId::new(1), "Kwame Nkrumah", 28, "Male"))?;
        self.patients
            .add(Patient::new(PatientId::new(2), "Kofi Baboni", 23, "Male"))?;
        self.patients
            .add(Patient::new(PatientId::new(3), "Ella Akosuah", 80, "Female"))?;

        let days_ago = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN);
        for (id, patient, medication, issued) in [
            (1, 1, "Amoxicillin", days_ago(10)),
            (2, 1, "Ibuprofen", days_ago(5)),
            (3, 2, "Paracetamol", days_ago(7)),
            (4, 3, "Metformin", days_ago(3)),
        ] {
            self.add_prescription(Prescription::new(
                PrescriptionId::new(id),
                PatientId::new(patient),
                medication,
                issued,
            ))?;
        }
        Ok(())
    }

    /// Store a prescription and rebuild the per-patient index
    pub fn add_prescription(&mut self, prescription: Prescription) -> Result<(), RepositoryError> {
        self.prescriptions.add(prescription)?;
        self.rebuild_index();
        Ok(())
    }

    pub fn remove_prescription(
        &mut self,
        id: PrescriptionId,
    ) -> Result<Prescription, RepositoryError> {
        let removed = self.prescriptions.remove(&id)?;
        self.rebuild_index();
        Ok(removed)
    }

    fn rebuild_index(&mut self) {
        self.by_patient = GroupIndex::build(self.prescriptions.get_all(), |p| p.patient_id());
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.get_all()
    }

    pub fn find_patient(&self, id: PatientId) -> Option<Patient> {
        self.patients.find_by(|p| p.id() == id)
    }

    pub fn prescriptions_for(&self, patient: PatientId) -> &[Prescription] {
        self.by_patient.get(&patient)
    }
}

impl Default for ClinicRecords {
    fn default() -> Self {
        Self::new()
    }
}

fn print_prescriptions(records: &ClinicRecords, patient: PatientId) {
    let prescriptions = records.prescriptions_for(patient);
    if prescriptions.is_empty() {
        println!("No prescriptions found for patient {}.", patient);
        return;
    }

    println!("=== Prescriptions for Patient {} ===", patient);
    for p in prescriptions {
        println!(
            "Prescription ID: {}, Medication: {}, Date: {}",
            p.id(),
            p.medication_name(),
            p.date_issued()
        );
    }
    println!();
}

impl ClinicCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut records = ClinicRecords::new();
        records.seed_data(Utc::now().date_naive())?;

        println!("=== Patient List ===");
        for patient in records.patients() {
            println!(
                "ID: {}, Name: {}, Age: {}, Gender: {}",
                patient.id(),
                patient.name(),
                patient.age(),
                patient.gender()
            );
        }
        println!();

        match self.patient {
            Some(id) => {
                let id = PatientId::new(id);
                if records.find_patient(id).is_none() {
                    println!("Patient {} is not registered.", id);
                }
                print_prescriptions(&records, id);
            }
            None => {
                for patient in records.patients() {
                    print_prescriptions(&records, patient.id());
                }
            }
        }

        Ok(())
    }
}
