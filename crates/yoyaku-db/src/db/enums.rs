//! Database enum types with Diesel serialization.
//!
//! Type-safe wrapper for the `booking.status` CHECK constraint, with `ToSql`
//! and `FromSql` for automatic conversion between Rust and `PostgreSQL`.
//! Conversions to and from the dependency-free core enum live here so the
//! core crate stays clear of Diesel.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;

/// Booking lifecycle status.
///
/// Maps to the `booking.status` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ToSql<Text, Pg> for BookingStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for BookingStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(Self::Pending),
            b"confirmed" => Ok(Self::Confirmed),
            b"cancelled" => Ok(Self::Cancelled),
            b"completed" => Ok(Self::Completed),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl BookingStatus {
    /// Returns the database string representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<yoyaku_core::status::BookingStatus> for BookingStatus {
    fn from(status: yoyaku_core::status::BookingStatus) -> Self {
        use yoyaku_core::status::BookingStatus as Core;
        match status {
            Core::Pending => Self::Pending,
            Core::Confirmed => Self::Confirmed,
            Core::Cancelled => Self::Cancelled,
            Core::Completed => Self::Completed,
        }
    }
}

impl From<BookingStatus> for yoyaku_core::status::BookingStatus {
    fn from(status: BookingStatus) -> Self {
        use yoyaku_core::status::BookingStatus as Core;
        match status {
            BookingStatus::Pending => Core::Pending,
            BookingStatus::Confirmed => Core::Confirmed,
            BookingStatus::Cancelled => Core::Cancelled,
            BookingStatus::Completed => Core::Completed,
        }
    }
}
