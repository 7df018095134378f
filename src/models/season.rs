use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// The season occupying the same calendar dates in the other hemisphere.
    pub fn opposite(self) -> Season {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }

    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(AppError::InvalidSeason(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "north",
            Hemisphere::South => "south",
        }
    }

    /// Maps a northern-hemisphere season label onto this hemisphere.
    pub fn localize(&self, season: Season) -> Season {
        match self {
            Hemisphere::North => season,
            Hemisphere::South => season.opposite(),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "north" => Ok(Hemisphere::North),
            "south" => Ok(Hemisphere::South),
            _ => Err(AppError::InvalidHemisphere(s.to_string())),
        }
    }
}

/// Where a date sits inside its season, with an affirmation for that season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDescriptor {
    pub season: Season,
    pub hemisphere: Hemisphere,
    pub percentage_complete: f64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub total_days: i64,
    pub start_date: String,
    pub end_date: String,
    pub affirmation: String,
    pub next_season: Season,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub start_date: String,
    pub end_date: String,
    pub total_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationResponse {
    pub affirmation: String,
    pub season: Season,
}
