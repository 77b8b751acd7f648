//! Shared wire types for the Pitchside booking API.
//!
//! This crate defines the types that cross the boundary between:
//! - the Pitchside client apps - envelope consumers
//! - the booking service - envelope producer
//!
//! # Modules
//! - [`envelope`] - The `{success, data, error}` response wrapper
//! - [`slot`] - Bookable time slot types
//! - [`video`] - Highlight video types

pub mod envelope;
pub mod slot;
pub mod video;

// Re-export commonly used types at crate root
pub use envelope::Envelope;
pub use slot::TimeSlot;
pub use video::Video;
