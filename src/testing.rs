//! Testing utilities for tripdesk
//!
//! Sample data sets matching the admin dashboards' seed data, plus small
//! helpers for writing record files.
//!
//! Only available when compiled with `cfg(test)`.

use crate::entities::{
    AccountStatus, BookingStatus, CorporateUser, FlightBooking, PaymentMethod, PaymentStatus,
    TicketStatus,
};
use std::fs;
use std::path::{Path, PathBuf};

#[allow(clippy::too_many_arguments)]
fn corporate_user(
    id: &str,
    company_name: &str,
    contact_person: &str,
    email: &str,
    contact_number: &str,
    industry: &str,
    registration_date: &str,
    status: AccountStatus,
    employees_count: u32,
) -> CorporateUser {
    CorporateUser {
        id: id.into(),
        company_name: company_name.into(),
        contact_person: contact_person.into(),
        email: email.into(),
        contact_number: contact_number.into(),
        industry: industry.into(),
        registration_date: registration_date.into(),
        status,
        employees_count,
    }
}

/// The eight corporate accounts: 3 verified, 2 active, 2 pending, 1 inactive
#[must_use]
pub fn sample_corporate_users() -> Vec<CorporateUser> {
    use AccountStatus::{Active, Inactive, Pending, Verified};

    vec![
        corporate_user("CU001", "Tech Solutions Inc.", "Rahul Sharma", "rahul@techsolutions.com", "+91 9876543210", "Information Technology", "2023-01-15", Verified, 150),
        corporate_user("CU002", "Green Energy Ltd.", "Priya Patel", "priya@greenenergy.com", "+91 8765432109", "Renewable Energy", "2023-02-20", Active, 85),
        corporate_user("CU003", "Global Logistics", "Amit Singh", "amit@globallogistics.com", "+91 7654321098", "Transportation", "2023-03-10", Pending, 200),
        corporate_user("CU004", "MediCare Hospitals", "Neha Gupta", "neha@medicare.com", "+91 6543210987", "Healthcare", "2023-04-05", Verified, 300),
        corporate_user("CU005", "FinEdge Capital", "Vikram Joshi", "vikram@finedge.com", "+91 9432109876", "Financial Services", "2023-05-12", Active, 50),
        corporate_user("CU006", "EduSmart Academy", "Ananya Reddy", "ananya@edusmart.com", "+91 8321098765", "Education", "2023-06-18", Inactive, 30),
        corporate_user("CU007", "BuildRight Constructions", "Karthik Malhotra", "karthik@buildright.com", "+91 7210987654", "Construction", "2023-07-22", Verified, 120),
        corporate_user("CU008", "FoodEssentials", "Divya Iyer", "divya@foodessentials.com", "+91 6109876543", "Food & Beverage", "2023-08-30", Pending, 75),
    ]
}

struct Flight<'a> {
    id: &'a str,
    passenger: &'a str,
    email: &'a str,
    flight: &'a str,
    route: (&'a str, &'a str),
    dates: (&'a str, &'a str, &'a str),
    status: BookingStatus,
    ticket: TicketStatus,
    payment: (PaymentStatus, PaymentMethod),
    price: f64,
    invoice: &'a str,
}

impl From<Flight<'_>> for FlightBooking {
    fn from(f: Flight<'_>) -> Self {
        Self {
            id: f.id.into(),
            passenger_name: f.passenger.into(),
            email: f.email.into(),
            flight_number: f.flight.into(),
            departure: f.route.0.into(),
            destination: f.route.1.into(),
            departure_date: f.dates.0.into(),
            return_date: f.dates.1.into(),
            status: f.status,
            booking_status: f.ticket,
            payment_status: f.payment.0,
            payment_method: f.payment.1,
            price: f.price,
            billing_date: f.dates.2.into(),
            invoice_number: f.invoice.into(),
        }
    }
}

/// The seven customer flight bookings (FB001 to FB007)
///
/// Prices: 7500, 22500, 48500, 18700, 16500, 6500, 4200. Only FB002 flies
/// to Dubai.
#[must_use]
pub fn sample_flight_bookings() -> Vec<FlightBooking> {
    use BookingStatus as B;
    use PaymentMethod as M;
    use PaymentStatus as P;
    use TicketStatus as T;

    [
        Flight { id: "FB001", passenger: "Rahul Sharma", email: "rahul.sharma@example.com", flight: "AI-202", route: ("Delhi (DEL)", "Mumbai (BOM)"), dates: ("2023-06-15", "2023-06-20", "2023-06-10"), status: B::Confirmed, ticket: T::Booked, payment: (P::Paid, M::CreditCard), price: 7500.0, invoice: "INV-2023-001" },
        Flight { id: "FB002", passenger: "Priya Patel", email: "priya.patel@example.com", flight: "SG-456", route: ("Bangalore (BLR)", "Dubai (DXB)"), dates: ("2023-07-10", "2023-07-25", "2023-07-05"), status: B::Confirmed, ticket: T::Booked, payment: (P::Paid, M::Upi), price: 22500.0, invoice: "INV-2023-002" },
        Flight { id: "FB003", passenger: "Amit Singh", email: "amit.singh@example.com", flight: "UK-789", route: ("Mumbai (BOM)", "London (LHR)"), dates: ("2023-08-05", "2023-09-05", "2023-08-01"), status: B::Pending, ticket: T::Booked, payment: (P::Pending, M::NetBanking), price: 48500.0, invoice: "INV-2023-003" },
        Flight { id: "FB004", passenger: "Neha Gupta", email: "neha.gupta@example.com", flight: "EM-321", route: ("Chennai (MAA)", "Singapore (SIN)"), dates: ("2023-06-22", "2023-06-30", "2023-06-18"), status: B::Confirmed, ticket: T::Booked, payment: (P::Paid, M::DebitCard), price: 18700.0, invoice: "INV-2023-004" },
        Flight { id: "FB005", passenger: "Vikram Joshi", email: "vikram.joshi@example.com", flight: "QA-112", route: ("Hyderabad (HYD)", "Doha (DOH)"), dates: ("2023-07-18", "2023-07-25", "2023-07-15"), status: B::Cancelled, ticket: T::Cancelled, payment: (P::Refunded, M::Wallet), price: 16500.0, invoice: "INV-2023-005" },
        Flight { id: "FB006", passenger: "Ananya Reddy", email: "ananya.reddy@example.com", flight: "AI-304", route: ("Kolkata (CCU)", "Delhi (DEL)"), dates: ("2023-08-12", "2023-08-15", "2023-08-10"), status: B::Confirmed, ticket: T::Booked, payment: (P::Paid, M::CreditCard), price: 6500.0, invoice: "INV-2023-006" },
        Flight { id: "FB007", passenger: "Karthik Malhotra", email: "karthik.m@example.com", flight: "SG-890", route: ("Goa (GOI)", "Bangalore (BLR)"), dates: ("2023-09-01", "2023-09-03", "2023-08-28"), status: B::Pending, ticket: T::Booked, payment: (P::Failed, M::DebitCard), price: 4200.0, invoice: "INV-2023-007" },
    ]
    .into_iter()
    .map(FlightBooking::from)
    .collect()
}

/// Write `content` to `dir/name` and return the path
///
/// # Errors
/// Returns an `io::Error` if the file cannot be written.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_corporate_users().len(), 8);
        assert_eq!(sample_flight_bookings().len(), 7);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let users = sample_corporate_users();
        let mut ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_write_fixture() {
        let temp = TempDir::new().unwrap();
        let path = write_fixture(temp.path(), "rows.csv", "id\n1\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "id\n1\n");
    }
}
