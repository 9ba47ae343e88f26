//! Built-in travel-desk entities
//!
//! Each entity is a plain serde struct (camelCase, as exported by the admin
//! backends) that implements [`Record`] and supplies its own
//! [`EntitySchema`]. The browser needs nothing else to list it.
//!
//! | Entity              | Schema name          | Page size |
//! |---------------------|----------------------|-----------|
//! | `CorporateUser`     | `corporate-users`    | 5         |
//! | `FlightBooking`     | `flight-bookings`    | 5         |
//! | `HotelBooking`      | `hotel-bookings`     | 5         |
//! | `TransportBooking`  | `transport-bookings` | 5         |
//! | `Agent`             | `agents`             | 5         |
//! | `RefundRequest`     | `refunds`            | 5         |
//! | `VisaApplication`   | `visa-applications`  | 10        |

/// Declare a closed set of string values backed by a fieldless enum
///
/// Generates serde renames, `as_str()`, a `VALUES` list in declaration
/// order, and `Display`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every legal value, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($text),+];

            /// Wire representation
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod agent;
pub mod corporate;
pub mod flight;
pub mod hotel;
pub mod refund;
pub mod transport;
pub mod visa;

pub use agent::Agent;
pub use corporate::{AccountStatus, CorporateUser};
pub use flight::{BookingStatus, FlightBooking, PaymentMethod, PaymentStatus, TicketStatus};
pub use hotel::{HotelBooking, ReservationStatus, StayStatus};
pub use refund::{BookingType, Employee, RefundMethod, RefundRequest, RefundStatus};
pub use transport::{Billing, TransportBooking, TransportPaymentMethod, TransportStatus, VehicleType};
pub use visa::{PassportData, StatusEntry, VisaApplication};

use crate::record::Record;
use crate::schema::{self, EntitySchema, SchemaError};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// A browsable entity with a built-in schema
pub trait Entity: Record + DeserializeOwned {
    /// Schema name, also used on the command line
    const NAME: &'static str;

    /// Every field key `Record::field` answers for
    const FIELDS: &'static [&'static str];

    /// The entity's search, filter and sort configuration
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the declared schema is inconsistent.
    fn schema() -> schema::Result<EntitySchema>;
}

/// The built-in entities, selectable by schema name
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EntityKind {
    CorporateUsers,
    FlightBookings,
    HotelBookings,
    TransportBookings,
    Agents,
    Refunds,
    VisaApplications,
}

impl EntityKind {
    /// All built-in entities in catalogue order
    pub const ALL: [Self; 7] = [
        Self::CorporateUsers,
        Self::FlightBookings,
        Self::HotelBookings,
        Self::TransportBookings,
        Self::Agents,
        Self::Refunds,
        Self::VisaApplications,
    ];

    /// Schema name of this entity
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CorporateUsers => CorporateUser::NAME,
            Self::FlightBookings => FlightBooking::NAME,
            Self::HotelBookings => HotelBooking::NAME,
            Self::TransportBookings => TransportBooking::NAME,
            Self::Agents => Agent::NAME,
            Self::Refunds => RefundRequest::NAME,
            Self::VisaApplications => VisaApplication::NAME,
        }
    }

    /// Built-in schema of this entity
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the declared schema is inconsistent.
    pub fn schema(self) -> schema::Result<EntitySchema> {
        match self {
            Self::CorporateUsers => CorporateUser::schema(),
            Self::FlightBookings => FlightBooking::schema(),
            Self::HotelBookings => HotelBooking::schema(),
            Self::TransportBookings => TransportBooking::schema(),
            Self::Agents => Agent::schema(),
            Self::Refunds => RefundRequest::schema(),
            Self::VisaApplications => VisaApplication::schema(),
        }
    }

    /// Field keys the entity exposes
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::CorporateUsers => CorporateUser::FIELDS,
            Self::FlightBookings => FlightBooking::FIELDS,
            Self::HotelBookings => HotelBooking::FIELDS,
            Self::TransportBookings => TransportBooking::FIELDS,
            Self::Agents => Agent::FIELDS,
            Self::Refunds => RefundRequest::FIELDS,
            Self::VisaApplications => VisaApplication::FIELDS,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SchemaError::UnknownEntity(s.to_string()))
    }
}

/// Look up a built-in schema by name
///
/// # Errors
///
/// Returns `SchemaError::UnknownEntity` if no built-in entity has that name.
pub fn builtin_schema(name: &str) -> schema::Result<EntitySchema> {
    name.parse::<EntityKind>()?.schema()
}

/// Every built-in schema, in catalogue order
///
/// # Errors
///
/// Returns `SchemaError` if any built-in schema is inconsistent.
pub fn catalogue() -> schema::Result<Vec<EntitySchema>> {
    EntityKind::ALL.into_iter().map(EntityKind::schema).collect()
}
