use rand::seq::IndexedRandom;
use std::sync::Arc;

use crate::{errors::AppError, models::season::Season};

pub const FALLBACK_AFFIRMATION: &str = "Every moment is a fresh beginning.";

const SPRING: [&str; 7] = [
    "New beginnings are blooming all around you.",
    "Like the flowers, you are growing into something beautiful.",
    "Let the warmth of spring renew your spirit.",
    "Every seed of effort you plant will blossom.",
    "The world is waking up, and so are your dreams.",
    "Fresh air, fresh starts, fresh possibilities.",
    "You are as resilient as the first spring bud.",
];

const SUMMER: [&str; 7] = [
    "You are radiating warmth and light.",
    "This is your season to shine boldly.",
    "Long days, endless possibilities.",
    "Let the sun fuel your brightest ambitions.",
    "You carry the energy of the longest days.",
    "Embrace the abundance this season brings.",
    "Your spirit is as vast as the summer sky.",
];

const AUTUMN: [&str; 7] = [
    "Like the leaves, gracefully let go of what no longer serves you.",
    "You are harvesting the rewards of your patience.",
    "Change is beautiful \u{2014} just look around you.",
    "There is wisdom in slowing down.",
    "Every ending carries the seed of a new beginning.",
    "You are as rich and layered as this season.",
    "Let the crisp air sharpen your clarity.",
];

const WINTER: [&str; 7] = [
    "In stillness, you find your deepest strength.",
    "Rest is not a pause \u{2014} it is preparation.",
    "You are gathering energy for the next bloom.",
    "The quiet is where your best ideas are born.",
    "Even in the darkest days, your light shines.",
    "Embrace the cozy warmth within you.",
    "Like the earth, you are renewing beneath the surface.",
];

pub fn affirmations_for(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &SPRING,
        Season::Summer => &SUMMER,
        Season::Autumn => &AUTUMN,
        Season::Winter => &WINTER,
    }
}

/// Picks one entry out of an affirmation list.
pub trait AffirmationChooser: Send + Sync {
    fn choose(&self, options: &[&'static str]) -> Option<&'static str>;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl AffirmationChooser for RandomChooser {
    fn choose(&self, options: &[&'static str]) -> Option<&'static str> {
        options.choose(&mut rand::rng()).copied()
    }
}

#[derive(Clone)]
pub struct AffirmationPicker {
    chooser: Arc<dyn AffirmationChooser>,
}

impl AffirmationPicker {
    pub fn new(chooser: Arc<dyn AffirmationChooser>) -> Self {
        Self { chooser }
    }

    pub fn random() -> Self {
        Self::new(Arc::new(RandomChooser))
    }

    /// Parses `season` case-insensitively and picks from its list.
    pub fn pick(&self, season: &str) -> Result<&'static str, AppError> {
        let season: Season = season.parse()?;
        Ok(self.pick_for(season))
    }

    pub fn pick_for(&self, season: Season) -> &'static str {
        self.chooser
            .choose(affirmations_for(season))
            .unwrap_or(FALLBACK_AFFIRMATION)
    }
}

impl Default for AffirmationPicker {
    fn default() -> Self {
        Self::random()
    }
}
