pub mod affirmations;
pub mod calendar;
pub mod resolver;

pub use affirmations::{AffirmationChooser, AffirmationPicker, RandomChooser};
pub use resolver::SeasonResolver;
