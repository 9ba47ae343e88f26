//! Visa applications assigned to a visa desk employee
//!
//! Applications come straight from the visa backend (`_id`, ISO timestamps,
//! nested passport and status-history arrays). Three fields are derived:
//!
//! - `applicantName`: given name and surname from the first passport
//! - `passportNumber`: number of the first passport
//! - `status`: label of the most recent status-history entry
//!
//! Each is missing when its source array is empty.

use super::Entity;
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

/// Passport details captured for one traveller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassportData {
    pub traveller_index: Option<u32>,
    pub passport_number: String,
    pub surname: String,
    pub given_name: String,
    pub nationality: String,
    pub dob: String,
    pub place_of_birth: String,
    pub sex: String,
    pub date_of_issue: String,
    pub date_of_expiry: String,
    pub place_of_issue: String,
    pub file_number: String,
}

impl PassportData {
    /// "Given Surname", trimmed
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname).trim().to_string()
    }
}

/// One step in an application's processing history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub label: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaApplication {
    #[serde(rename = "_id")]
    pub id: String,
    pub visa_id: String,
    #[serde(default)]
    pub payment_id: Option<String>,
    pub travellers: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    #[serde(default)]
    pub passport_data: Vec<PassportData>,
    #[serde(default)]
    pub status_history: Vec<StatusEntry>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl VisaApplication {
    /// Name of the lead applicant, if any passport was captured
    #[must_use]
    pub fn applicant_name(&self) -> Option<String> {
        self.passport_data.first().map(PassportData::full_name)
    }

    /// Most recent status label
    #[must_use]
    pub fn latest_status(&self) -> Option<&str> {
        self.status_history.last().map(|entry| entry.label.as_str())
    }
}

impl Record for VisaApplication {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" => FieldValue::text(&self.id),
            "visaId" => FieldValue::text(&self.visa_id),
            "paymentId" => FieldValue::text(self.payment_id.as_deref()?),
            "travellers" => FieldValue::text(&self.travellers),
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "country" => FieldValue::text(&self.country),
            "createdAt" => FieldValue::text(&self.created_at),
            "updatedAt" => FieldValue::text(&self.updated_at),
            "applicantName" => FieldValue::owned(self.applicant_name()?),
            "passportNumber" => FieldValue::text(&self.passport_data.first()?.passport_number),
            "status" => FieldValue::text(self.latest_status()?),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for VisaApplication {
    const NAME: &'static str = "visa-applications";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "visaId",
        "paymentId",
        "travellers",
        "email",
        "phone",
        "country",
        "createdAt",
        "updatedAt",
        "applicantName",
        "passportNumber",
        "status",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(10)
            .search(["applicantName", "passportNumber", "email", "paymentId"])
            .open_filter("status")
            .open_filter("country")
            .sort_labeled("applicantName", FieldKind::Text, "Applicant")
            .sort("country", FieldKind::Text)
            .sort("status", FieldKind::Text)
            .sort_labeled("createdAt", FieldKind::Date, "Applied")
            .sort_labeled("updatedAt", FieldKind::Date, "Updated")
            .build()
    }
}
