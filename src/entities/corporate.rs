//! Corporate client accounts

use super::Entity;
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Verification state shared by corporate and agent accounts
    AccountStatus {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
        Verified => "verified",
    }
}

/// A company registered for corporate travel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateUser {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub contact_number: String,
    pub industry: String,
    pub registration_date: String,
    pub status: AccountStatus,
    pub employees_count: u32,
}

impl Record for CorporateUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" => FieldValue::text(&self.id),
            "companyName" => FieldValue::text(&self.company_name),
            "contactPerson" => FieldValue::text(&self.contact_person),
            "email" => FieldValue::text(&self.email),
            "contactNumber" => FieldValue::text(&self.contact_number),
            "industry" => FieldValue::text(&self.industry),
            "registrationDate" => FieldValue::text(&self.registration_date),
            "status" => FieldValue::text(self.status.as_str()),
            "employeesCount" => FieldValue::from(self.employees_count),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for CorporateUser {
    const NAME: &'static str = "corporate-users";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "companyName",
        "contactPerson",
        "email",
        "contactNumber",
        "industry",
        "registrationDate",
        "status",
        "employeesCount",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(5)
            .search(["companyName", "contactPerson", "email", "contactNumber", "industry"])
            .filter("status", AccountStatus::VALUES.iter().copied())
            .open_filter("industry")
            .sort_labeled("companyName", FieldKind::Text, "Company")
            .sort("email", FieldKind::Text)
            .sort("industry", FieldKind::Text)
            .sort_labeled("registrationDate", FieldKind::Date, "Registered")
            .sort_labeled("employeesCount", FieldKind::Number, "Employees")
            .sort("status", FieldKind::Text)
            .build()
    }
}
