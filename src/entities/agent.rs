//! Sales agents

use super::{AccountStatus, Entity};
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

/// A partner agent selling travel packages on commission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub contact_number: String,
    pub category: String,
    pub registration_date: String,
    pub status: AccountStatus,
    pub total_earnings: f64,
}

impl Record for Agent {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" => FieldValue::text(&self.id),
            "name" => FieldValue::text(&self.name),
            "contactPerson" => FieldValue::text(&self.contact_person),
            "email" => FieldValue::text(&self.email),
            "contactNumber" => FieldValue::text(&self.contact_number),
            "category" => FieldValue::text(&self.category),
            "registrationDate" => FieldValue::text(&self.registration_date),
            "status" => FieldValue::text(self.status.as_str()),
            "totalEarnings" => FieldValue::Number(self.total_earnings),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for Agent {
    const NAME: &'static str = "agents";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "contactPerson",
        "email",
        "contactNumber",
        "category",
        "registrationDate",
        "status",
        "totalEarnings",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(5)
            .search(["name", "contactPerson", "email", "contactNumber", "category"])
            .filter("status", AccountStatus::VALUES.iter().copied())
            .open_filter("category")
            .sort("name", FieldKind::Text)
            .sort("contactPerson", FieldKind::Text)
            .sort("email", FieldKind::Text)
            .sort("category", FieldKind::Text)
            .sort_labeled("registrationDate", FieldKind::Date, "Registered")
            .sort_labeled("totalEarnings", FieldKind::Number, "Earnings")
            .sort("status", FieldKind::Text)
            .build()
    }
}
