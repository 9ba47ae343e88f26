//! Refunds for cancelled corporate bookings
//!
//! Refund records nest the requesting employee. The record view flattens
//! that object into `employeeName`, `employeeId` and `department` so the
//! employee can be searched like any other field.

use super::Entity;
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

string_enum! {
    BookingType {
        Flight => "flight",
        Hotel => "hotel",
        Car => "car",
        Package => "package",
    }
}

string_enum! {
    RefundStatus {
        Processed => "processed",
        Pending => "pending",
        Rejected => "rejected",
        PartiallyRefunded => "partially_refunded",
    }
}

string_enum! {
    RefundMethod {
        OriginalPayment => "original_payment",
        CorporateCredit => "corporate_credit",
        BankTransfer => "bank_transfer",
    }
}

/// Employee who travelled on the cancelled booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub employee_id: String,
}

/// A refund request raised when a corporate booking is cancelled
///
/// Identified by its booking id; refund date, processor and notes are only
/// present once the refund has been handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub booking_id: String,
    pub booking_type: BookingType,
    pub employee: Employee,
    pub original_amount: f64,
    pub cancellation_date: String,
    pub cancellation_reason: String,
    pub refund_status: RefundStatus,
    pub refund_amount: f64,
    pub refund_method: RefundMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for RefundRequest {
    fn id(&self) -> &str {
        &self.booking_id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" | "bookingId" => FieldValue::text(&self.booking_id),
            "bookingType" => FieldValue::text(self.booking_type.as_str()),
            "employeeName" => FieldValue::text(&self.employee.name),
            "employeeId" => FieldValue::text(&self.employee.employee_id),
            "department" => FieldValue::text(&self.employee.department),
            "originalAmount" => FieldValue::Number(self.original_amount),
            "cancellationDate" => FieldValue::text(&self.cancellation_date),
            "cancellationReason" => FieldValue::text(&self.cancellation_reason),
            "refundStatus" => FieldValue::text(self.refund_status.as_str()),
            "refundAmount" => FieldValue::Number(self.refund_amount),
            "refundMethod" => FieldValue::text(self.refund_method.as_str()),
            "refundDate" => FieldValue::text(self.refund_date.as_deref()?),
            "processedBy" => FieldValue::text(self.processed_by.as_deref()?),
            "notes" => FieldValue::text(self.notes.as_deref()?),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for RefundRequest {
    const NAME: &'static str = "refunds";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "bookingId",
        "bookingType",
        "employeeName",
        "employeeId",
        "department",
        "originalAmount",
        "cancellationDate",
        "cancellationReason",
        "refundStatus",
        "refundAmount",
        "refundMethod",
        "refundDate",
        "processedBy",
        "notes",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(5)
            .search(["employeeName", "employeeId", "bookingId"])
            .filter_on("status", "refundStatus", RefundStatus::VALUES.iter().copied())
            .filter_on("type", "bookingType", BookingType::VALUES.iter().copied())
            .sort_labeled("bookingId", FieldKind::Text, "Booking")
            .sort_labeled("employeeName", FieldKind::Text, "Employee")
            .sort_labeled("originalAmount", FieldKind::Number, "Amount")
            .sort_labeled("cancellationDate", FieldKind::Date, "Cancelled")
            .sort_labeled("refundAmount", FieldKind::Number, "Refund")
            .sort_labeled("refundDate", FieldKind::Date, "Refunded")
            .build()
    }
}
