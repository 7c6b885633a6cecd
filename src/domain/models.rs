use serde::{Deserialize, Serialize};

/// Well-known values of the open-ended `status` field. Records may carry
/// any other string; these are the values the stats summary buckets on.
pub mod status {
    pub const NOT_APPLIED: &str = "Not Applied";
    pub const APPLIED: &str = "Applied";
    pub const SCREENING: &str = "Screening";
    pub const INTERVIEW_SCHEDULED: &str = "Interview Scheduled";
    pub const OFFER: &str = "Offer";
}

/// One tracked job application. Every field is free-form text; the wire
/// names match the persisted camelCase layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub application_date: String,
    pub status: String,
    pub priority: String,
    pub salary: String,
    pub source: String,
    pub contact: String,
    pub interview_date: String,
    pub followup_date: String,
    pub notes: String,
}

/// An application as submitted by a caller, before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub company: String,
    pub position: String,
    pub location: String,
    #[serde(default)]
    pub application_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub interview_date: String,
    #[serde(default)]
    pub followup_date: String,
    #[serde(default)]
    pub notes: String,
}

impl ApplicationDraft {
    pub fn into_record(self, id: String) -> ApplicationRecord {
        ApplicationRecord {
            id,
            company: self.company,
            position: self.position,
            location: self.location,
            application_date: self.application_date,
            status: self.status,
            priority: self.priority,
            salary: self.salary,
            source: self.source,
            contact: self.contact,
            interview_date: self.interview_date,
            followup_date: self.followup_date,
            notes: self.notes,
        }
    }
}

/// A partial overwrite for an existing record. `Some` fields win,
/// `None` fields keep their prior value; `id` is never patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub application_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub salary: Option<String>,
    pub source: Option<String>,
    pub contact: Option<String>,
    pub interview_date: Option<String>,
    pub followup_date: Option<String>,
    pub notes: Option<String>,
}

impl ApplicationPatch {
    pub fn apply_to(&self, record: &mut ApplicationRecord) {
        let fields = [
            (&self.company, &mut record.company),
            (&self.position, &mut record.position),
            (&self.location, &mut record.location),
            (&self.application_date, &mut record.application_date),
            (&self.status, &mut record.status),
            (&self.priority, &mut record.priority),
            (&self.salary, &mut record.salary),
            (&self.source, &mut record.source),
            (&self.contact, &mut record.contact),
            (&self.interview_date, &mut record.interview_date),
            (&self.followup_date, &mut record.followup_date),
            (&self.notes, &mut record.notes),
        ];
        for (patch, field) in fields {
            if let Some(value) = patch {
                *field = value.clone();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The three sample postings installed on first run, before anything has
/// been persisted. Ids are fixed so the seed is stable across runs.
pub fn seed_applications() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord {
            id: "1".to_string(),
            company: "DigiPlus Interactive Corp.".to_string(),
            position: "Junior Frontend Developer".to_string(),
            location: "Makati City".to_string(),
            application_date: "2025-06-01".to_string(),
            status: status::APPLIED.to_string(),
            priority: "High".to_string(),
            salary: "₱25,000 - ₱35,000".to_string(),
            source: "https://careers.digiplus.com.ph/jobs/frontend-developer".to_string(),
            contact: "HR Department".to_string(),
            interview_date: String::new(),
            followup_date: "2025-06-08".to_string(),
            notes: "Current internship company - good fit for my Vue.js skills".to_string(),
        },
        ApplicationRecord {
            id: "2".to_string(),
            company: "Accenture".to_string(),
            position: "Associate Software Engineer".to_string(),
            location: "BGC, Taguig".to_string(),
            application_date: "2025-06-01".to_string(),
            status: status::SCREENING.to_string(),
            priority: "Medium".to_string(),
            salary: "₱30,000 - ₱40,000".to_string(),
            source: "https://www.jobstreet.com.ph/job/associate-software-engineer-67890".to_string(),
            contact: "Jane Santos".to_string(),
            interview_date: String::new(),
            followup_date: "2025-06-05".to_string(),
            notes: "Large consulting firm - good training programs".to_string(),
        },
        ApplicationRecord {
            id: "3".to_string(),
            company: "Globe Telecom".to_string(),
            position: "React Developer".to_string(),
            location: "Ortigas Center".to_string(),
            application_date: "2025-05-30".to_string(),
            status: status::INTERVIEW_SCHEDULED.to_string(),
            priority: "High".to_string(),
            salary: "₱35,000 - ₱50,000".to_string(),
            source: "https://www.linkedin.com/jobs/view/12345678".to_string(),
            contact: "Mark Rodriguez".to_string(),
            interview_date: "2025-06-10".to_string(),
            followup_date: String::new(),
            notes: "Perfect match for React skills - technical interview on June 10".to_string(),
        },
    ]
}
