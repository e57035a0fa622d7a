//! Page controllers, one per page, constructed at page initialization.

pub mod search;
pub mod volunteer;

pub use search::SearchPage;
pub use volunteer::{EntryState, OtherEntry, VolunteerForm};
