//! Highlight video types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A highlight clip captured during a time slot.
///
/// Served by `GET /api/videos/time-slot/{timeSlotId}`. The wire field for
/// the playable URL is `cloudinary_url` (a storage detail of the backend);
/// plain `url` is accepted too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// Unique video identifier
    pub id: String,

    /// Playable (and thumbnail-able) URL for the clip
    #[serde(rename = "cloudinary_url", alias = "url")]
    pub url: String,

    /// When the clip was captured
    pub captured_at: DateTime<Utc>,

    /// Clip length in seconds
    #[serde(default)]
    pub duration: f64,
}
