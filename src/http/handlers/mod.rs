pub mod health;
pub mod notification;
pub mod season;

pub use health::health_handler;
pub use notification::{get_preference_handler, save_preference_handler};
pub use season::{get_affirmation_handler, get_all_seasons_handler, get_season_handler};
