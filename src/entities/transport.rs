//! Corporate ground transport bookings (bus and taxi)

use super::Entity;
use crate::record::{FieldValue, Record};
use crate::schema::{self, EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};

string_enum! {
    VehicleType {
        Bus => "bus",
        Taxi => "taxi",
    }
}

string_enum! {
    /// Who pays for the trip
    Billing {
        Company => "company",
        Personal => "personal",
        Split => "split",
    }
}

string_enum! {
    TransportPaymentMethod {
        CompanyAccount => "company-account",
        CreditCard => "credit-card",
        DebitCard => "debit-card",
        Upi => "upi",
        Wallet => "wallet",
        Cash => "cash",
    }
}

string_enum! {
    /// Approval and trip state
    TransportStatus {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
        Completed => "completed",
        Approved => "approved",
        Rejected => "rejected",
    }
}

/// A bus or taxi trip booked for an employee of a corporate client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportBooking {
    pub id: String,
    pub booking_type: VehicleType,
    pub passenger_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub employee_id: String,
    pub department: String,
    pub cost_center: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub booking_date: String,
    pub travel_date: String,
    pub vehicle_details: String,
    pub seats: u32,
    pub fare: f64,
    pub corporate_rate: bool,
    #[serde(default)]
    pub discount_applied: f64,
    pub billing: Billing,
    pub payment_method: TransportPaymentMethod,
    pub status: TransportStatus,
    #[serde(default)]
    pub approver: String,
    #[serde(default)]
    pub purpose: String,
}

impl Record for TransportBooking {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            "id" => FieldValue::text(&self.id),
            "bookingType" => FieldValue::text(self.booking_type.as_str()),
            "passengerName" => FieldValue::text(&self.passenger_name),
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "company" => FieldValue::text(&self.company),
            "employeeId" => FieldValue::text(&self.employee_id),
            "department" => FieldValue::text(&self.department),
            "costCenter" => FieldValue::text(&self.cost_center),
            "pickupLocation" => FieldValue::text(&self.pickup_location),
            "dropLocation" => FieldValue::text(&self.drop_location),
            "bookingDate" => FieldValue::text(&self.booking_date),
            "travelDate" => FieldValue::text(&self.travel_date),
            "vehicleDetails" => FieldValue::text(&self.vehicle_details),
            "seats" => self.seats.into(),
            "fare" => FieldValue::Number(self.fare),
            "corporateRate" => FieldValue::text(if self.corporate_rate { "yes" } else { "no" }),
            "discountApplied" => FieldValue::Number(self.discount_applied),
            "billing" => FieldValue::text(self.billing.as_str()),
            "paymentMethod" => FieldValue::text(self.payment_method.as_str()),
            "status" => FieldValue::text(self.status.as_str()),
            "approver" => FieldValue::text(&self.approver),
            "purpose" => FieldValue::text(&self.purpose),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for TransportBooking {
    const NAME: &'static str = "transport-bookings";

    const FIELDS: &'static [&'static str] = &[
        "id",
        "bookingType",
        "passengerName",
        "email",
        "phone",
        "company",
        "employeeId",
        "department",
        "costCenter",
        "pickupLocation",
        "dropLocation",
        "bookingDate",
        "travelDate",
        "vehicleDetails",
        "seats",
        "fare",
        "corporateRate",
        "discountApplied",
        "billing",
        "paymentMethod",
        "status",
        "approver",
        "purpose",
    ];

    fn schema() -> schema::Result<EntitySchema> {
        EntitySchema::builder(Self::NAME)
            .page_size(5)
            .search([
                "passengerName",
                "email",
                "phone",
                "pickupLocation",
                "dropLocation",
                "vehicleDetails",
                "company",
                "employeeId",
                "costCenter",
            ])
            .filter_on("type", "bookingType", VehicleType::VALUES.iter().copied())
            .filter("status", TransportStatus::VALUES.iter().copied())
            .open_filter("company")
            .open_filter("department")
            .filter("billing", Billing::VALUES.iter().copied())
            .filter("corporateRate", ["yes", "no"])
            .sort_labeled("bookingType", FieldKind::Text, "Type")
            .sort_labeled("passengerName", FieldKind::Text, "Passenger")
            .sort("company", FieldKind::Text)
            .sort_labeled("travelDate", FieldKind::Date, "Travel Date")
            .sort("fare", FieldKind::Number)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowseError, CollectionBrowser};

    fn bookings() -> Vec<TransportBooking> {
        let json = r#"[
            {"id":"CTB001","bookingType":"bus","passengerName":"Rahul Sharma",
             "email":"rahul.sharma@example.com","phone":"+91 9876543210",
             "company":"Tech Solutions Inc.","employeeId":"TSI-EMP-1024","department":"Sales",
             "costCenter":"SALES-APAC","pickupLocation":"Delhi, ISBT Kashmere Gate",
             "dropLocation":"Manali, Bus Stand","bookingDate":"2023-05-10",
             "travelDate":"2023-06-15","vehicleDetails":"Volvo AC Sleeper (HR-45-AB-1234)",
             "seats":2,"fare":3500,"corporateRate":true,"discountApplied":15,
             "billing":"company","paymentMethod":"company-account","status":"approved",
             "approver":"Priya Patel (Manager)","purpose":"Client meeting and sales pitch"},
            {"id":"CTB002","bookingType":"taxi","passengerName":"Priya Patel",
             "email":"priya.patel@example.com","phone":"+91 8765432109",
             "company":"Global Finance Corp","employeeId":"GFC-EMP-2048","department":"Finance",
             "costCenter":"FIN-GLOBAL","pickupLocation":"Mumbai Airport (T2)",
             "dropLocation":"Juhu, Hotel Grand","bookingDate":"2023-06-01",
             "travelDate":"2023-07-10","vehicleDetails":"Toyota Innova (MH-01-AB-5678)",
             "seats":4,"fare":1200,"corporateRate":true,"discountApplied":10,
             "billing":"company","paymentMethod":"company-account","status":"completed",
             "approver":"Amit Singh (Director)","purpose":"Airport transfer for visiting executives"},
            {"id":"CTB003","bookingType":"bus","passengerName":"Amit Singh",
             "email":"amit.singh@example.com","phone":"+91 7654321098",
             "company":"Innovatech Solutions","employeeId":"ITS-EMP-3072",
             "department":"Engineering","costCenter":"ENG-PRODUCT",
             "pickupLocation":"Bangalore, Majestic Bus Stand","dropLocation":"Chennai, CMBT",
             "bookingDate":"2023-07-20","travelDate":"2023-08-05",
             "vehicleDetails":"Non-AC Seater (KA-05-AB-9012)","seats":1,"fare":850,
             "corporateRate":false,"discountApplied":0,"billing":"personal",
             "paymentMethod":"wallet","status":"pending","approver":"Pending approval",
             "purpose":"Tech conference attendance"}
        ]"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_type_and_rate_filters() {
        let mut browser = CollectionBrowser::for_entity(bookings()).unwrap();
        browser.set_filter("type", "bus").unwrap();
        browser.set_filter("corporateRate", "yes").unwrap();

        let view = browser.derived_view();
        assert_eq!(view.total_matched, 1);
        assert_eq!(view.visible_items[0].id, "CTB001");

        assert!(matches!(
            browser.set_filter("corporateRate", "true"),
            Err(BrowseError::InvalidFilterValue { .. })
        ));
    }

    #[test]
    fn test_search_cost_center_and_locations() {
        let mut browser = CollectionBrowser::for_entity(bookings()).unwrap();
        browser.set_search_query("fin-global");
        assert_eq!(browser.derived_view().visible_items[0].id, "CTB002");

        browser.set_search_query("chennai");
        assert_eq!(browser.derived_view().visible_items[0].id, "CTB003");
    }

    #[test]
    fn test_sort_by_fare() {
        let mut browser = CollectionBrowser::for_entity(bookings()).unwrap();
        browser.set_sort("fare").unwrap();
        let order: Vec<_> = browser
            .derived_view()
            .visible_items
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(order, vec!["CTB003", "CTB002", "CTB001"]);
    }

    #[test]
    fn test_department_options_from_data() {
        let browser = CollectionBrowser::for_entity(bookings()).unwrap();
        assert_eq!(
            browser.filter_options("department").unwrap(),
            vec!["Engineering", "Finance", "Sales"]
        );
    }
}
