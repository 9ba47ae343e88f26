//! Customer flight bookings

use super::Entity;
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Overall booking state
    BookingStatus {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
    }
}

string_enum! {
    /// Ticket lifecycle as reported by the airline
    TicketStatus {
        Booked => "booked",
        Cancelled => "cancelled",
        Rescheduled => "rescheduled",
    }
}

string_enum! {
    PaymentStatus {
        Paid => "paid",
        Pending => "pending",
        Refunded => "refunded",
        Failed => "failed",
    }
}

string_enum! {
    PaymentMethod {
        CreditCard => "credit_card",
        DebitCard => "debit_card",
        Upi => "upi",
        NetBanking => "net_banking",
        Wallet => "wallet",
    }
}

/// A flight booked by an individual customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightBooking {
    pub id: String,
    pub passenger_name: String,
    pub email: String,
    pub flight_number: String,
    pub departure: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub status: BookingStatus,
    pub booking_status: TicketStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub price: f64,
    pub billing_date: String,
    pub invoice_number: String,
}

impl Record for FlightBooking {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" => FieldValue::text(&self.id),
            "passengerName" => FieldValue::text(&self.passenger_name),
            "email" => FieldValue::text(&self.email),
            "flightNumber" => FieldValue::text(&self.flight_number),
            "departure" => FieldValue::text(&self.departure),
            "destination" => FieldValue::text(&self.destination),
            "departureDate" => FieldValue::text(&self.departure_date),
            "returnDate" => FieldValue::text(&self.return_date),
            "status" => FieldValue::text(self.status.as_str()),
            "bookingStatus" => FieldValue::text(self.booking_status.as_str()),
            "paymentStatus" => FieldValue::text(self.payment_status.as_str()),
            "paymentMethod" => FieldValue::text(self.payment_method.as_str()),
            "price" => FieldValue::Number(self.price),
            "billingDate" => FieldValue::text(&self.billing_date),
            "invoiceNumber" => FieldValue::text(&self.invoice_number),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for FlightBooking {
    const NAME: &'static str = "flight-bookings";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "passengerName",
        "email",
        "flightNumber",
        "departure",
        "destination",
        "departureDate",
        "returnDate",
        "status",
        "bookingStatus",
        "paymentStatus",
        "paymentMethod",
        "price",
        "billingDate",
        "invoiceNumber",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(5)
            .search([
                "passengerName",
                "email",
                "flightNumber",
                "departure",
                "destination",
                "invoiceNumber",
            ])
            .filter("status", BookingStatus::VALUES.iter().copied())
            .filter_on("payment", "paymentStatus", PaymentStatus::VALUES.iter().copied())
            .sort_labeled("passengerName", FieldKind::Text, "Passenger")
            .sort_labeled("departureDate", FieldKind::Date, "Departure")
            .sort("status", FieldKind::Text)
            .sort("price", FieldKind::Number)
            .build()
    }
}
