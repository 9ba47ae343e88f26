//! Customer hotel bookings

use super::{Entity, PaymentMethod, PaymentStatus};
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Stay state, from reservation to check-out
    StayStatus {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
        CheckedIn => "checked-in",
        CheckedOut => "checked-out",
    }
}

string_enum! {
    /// Reservation state as reported by the property
    ReservationStatus {
        Booked => "booked",
        Cancelled => "cancelled",
        Modified => "modified",
    }
}

/// A hotel stay booked by an individual customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBooking {
    pub id: String,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub hotel_name: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: u32,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    pub total_amount: f64,
    pub status: StayStatus,
    pub booking_status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub billing_date: String,
    pub invoice_number: String,
}

impl Record for HotelBooking {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" => FieldValue::text(&self.id),
            "guestName" => FieldValue::text(&self.guest_name),
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "hotelName" => FieldValue::text(&self.hotel_name),
            "roomType" => FieldValue::text(&self.room_type),
            "checkIn" => FieldValue::text(&self.check_in),
            "checkOut" => FieldValue::text(&self.check_out),
            "nights" => self.nights.into(),
            "adults" => self.adults.into(),
            "children" => self.children.into(),
            "totalAmount" => FieldValue::Number(self.total_amount),
            "status" => FieldValue::text(self.status.as_str()),
            "bookingStatus" => FieldValue::text(self.booking_status.as_str()),
            "paymentStatus" => FieldValue::text(self.payment_status.as_str()),
            "paymentMethod" => FieldValue::text(self.payment_method.as_str()),
            "billingDate" => FieldValue::text(&self.billing_date),
            "invoiceNumber" => FieldValue::text(&self.invoice_number),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for HotelBooking {
    const NAME: &'static str = "hotel-bookings";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "guestName",
        "email",
        "phone",
        "hotelName",
        "roomType",
        "checkIn",
        "checkOut",
        "nights",
        "adults",
        "children",
        "totalAmount",
        "status",
        "bookingStatus",
        "paymentStatus",
        "paymentMethod",
        "billingDate",
        "invoiceNumber",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(5)
            .search([
                "guestName",
                "email",
                "phone",
                "hotelName",
                "roomType",
                "invoiceNumber",
            ])
            .filter("status", StayStatus::VALUES.iter().copied())
            .filter_on("payment", "paymentStatus", PaymentStatus::VALUES.iter().copied())
            .sort_labeled("guestName", FieldKind::Text, "Guest")
            .sort_labeled("checkIn", FieldKind::Date, "Check-in")
            .sort("status", FieldKind::Text)
            .sort_labeled("totalAmount", FieldKind::Number, "Amount")
            .build()
    }
}
