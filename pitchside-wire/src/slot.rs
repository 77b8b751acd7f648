//! Bookable time slot types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable interval at a ground.
///
/// Served by `GET /api/time-slots/{groundId}?date=YYYY-MM-DD`; timestamps
/// are RFC 3339 in UTC and clients localize them for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    /// Unique slot identifier
    pub id: String,

    /// Start of the interval
    pub start_time: DateTime<Utc>,

    /// End of the interval
    pub end_time: DateTime<Utc>,
}
