use std::str::FromStr;

use crate::error::CoreError;

/// Booking lifecycle status without database dependencies.
///
/// New bookings start as `Pending` and block slots immediately; only
/// `Cancelled` bookings stop blocking. `Cancelled` and `Completed` are
/// terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Whether this status still occupies its time interval for the
    /// purposes of slot generation and admission.
    #[must_use]
    pub const fn blocks_slot(self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// ## Summary
    /// Whether the status may move to `next`. Any non-terminal status may
    /// move to `cancelled` or `completed`; no transition leaves a terminal
    /// status, and a status never transitions to itself.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match self {
            Self::Pending => matches!(next, Self::Confirmed | Self::Cancelled | Self::Completed),
            Self::Confirmed => matches!(next, Self::Cancelled | Self::Completed),
            Self::Cancelled | Self::Completed => false,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown booking status: {other}"
            ))),
        }
    }
}
