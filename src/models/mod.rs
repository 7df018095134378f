pub mod notification;
pub mod redis;
pub mod season;

pub use notification::NotificationPreference;
pub use season::{Hemisphere, Season, SeasonDescriptor};
