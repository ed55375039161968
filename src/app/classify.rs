//! Weather classification: an ordered rule table, first match wins.
//!
//! Each rule is a plain `fn` predicate plus the class it yields. The table
//! is evaluated top to bottom; when nothing matches the result is a storm.
//!
//! ```text
//!  1. T > 35                            ──▶ SEVERE (extreme heat)
//!  2. H < 60 ∧ 24 ≤ T ≤ 32 ∧ wind < 30  ──▶ CLEAR
//!  3. H < 80 ∧ wind < 40                ──▶ CLOUDY
//!  4. H ≥ 80 ∧ wind < 60                ──▶ RAIN
//!  *  otherwise                         ──▶ SEVERE (storm)
//! ```

use super::reading::Reading;

// ═══════════════════════════════════════════════════════════════════════════
//  Types
// ═══════════════════════════════════════════════════════════════════════════

/// Why a SEVERE classification fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SevereCause {
    /// Temperature above the heat limit; overrides every other rule.
    ExtremeHeat,
    /// Fallback when no calmer class matched.
    Storm,
}

/// The discrete weather label derived from one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Clear,
    Cloudy,
    Rain,
    Severe(SevereCause),
}

impl Weather {
    /// Text shown on the label line of the status screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "CERAH",
            Self::Cloudy => "BERAWAN",
            Self::Rain => "HUJAN",
            Self::Severe(SevereCause::Storm) => "BADAI",
            Self::Severe(SevereCause::ExtremeHeat) => "SUHU TINGGI",
        }
    }

    /// The single indicator LED that represents this class.
    pub fn indicator(self) -> Indicator {
        match self {
            Self::Clear => Indicator::Clear,
            Self::Cloudy => Indicator::Cloudy,
            Self::Rain => Indicator::Rain,
            Self::Severe(_) => Indicator::Severe,
        }
    }
}

/// One of the four mutually exclusive class LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Clear,
    Cloudy,
    Rain,
    Severe,
}

impl Indicator {
    pub const COUNT: usize = 4;
    pub const ALL: [Indicator; Self::COUNT] =
        [Self::Clear, Self::Cloudy, Self::Rain, Self::Severe];

    /// Stable index into per-indicator arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Inputs the rules look at: the reading with wind already in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub wind_pct: u8,
}

impl From<&Reading> for Conditions {
    fn from(r: &Reading) -> Self {
        Self {
            temperature_c: r.temperature_c(),
            humidity_pct: r.humidity_pct(),
            wind_pct: r.wind_pct(),
        }
    }
}

/// A single entry in the priority chain.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Conditions) -> bool,
    pub weather: Weather,
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("weather", &self.weather)
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Thresholds
// ═══════════════════════════════════════════════════════════════════════════

pub const HEAT_LIMIT_C: f32 = 35.0;

pub const CLEAR_MAX_HUMIDITY: f32 = 60.0;
pub const CLEAR_MIN_TEMP_C: f32 = 24.0;
pub const CLEAR_MAX_TEMP_C: f32 = 32.0;
pub const CLEAR_MAX_WIND: u8 = 30;

pub const CLOUDY_MAX_HUMIDITY: f32 = 80.0;
pub const CLOUDY_MAX_WIND: u8 = 40;

pub const RAIN_MIN_HUMIDITY: f32 = 80.0;
pub const RAIN_MAX_WIND: u8 = 60;

// ═══════════════════════════════════════════════════════════════════════════
//  Rule table
// ═══════════════════════════════════════════════════════════════════════════

/// Priority-ordered rules. Index 0 is checked first.
pub const RULES: [Rule; 4] = [
    Rule {
        name: "extreme-heat",
        applies: extreme_heat,
        weather: Weather::Severe(SevereCause::ExtremeHeat),
    },
    Rule {
        name: "clear",
        applies: clear,
        weather: Weather::Clear,
    },
    Rule {
        name: "cloudy",
        applies: cloudy,
        weather: Weather::Cloudy,
    },
    Rule {
        name: "rain",
        applies: rain,
        weather: Weather::Rain,
    },
];

/// Result when no rule in [`RULES`] matches.
pub const FALLBACK: Weather = Weather::Severe(SevereCause::Storm);

fn extreme_heat(c: &Conditions) -> bool {
    c.temperature_c > HEAT_LIMIT_C
}

fn clear(c: &Conditions) -> bool {
    c.humidity_pct < CLEAR_MAX_HUMIDITY
        && (CLEAR_MIN_TEMP_C..=CLEAR_MAX_TEMP_C).contains(&c.temperature_c)
        && c.wind_pct < CLEAR_MAX_WIND
}

fn cloudy(c: &Conditions) -> bool {
    c.humidity_pct < CLOUDY_MAX_HUMIDITY && c.wind_pct < CLOUDY_MAX_WIND
}

fn rain(c: &Conditions) -> bool {
    c.humidity_pct >= RAIN_MIN_HUMIDITY && c.wind_pct < RAIN_MAX_WIND
}

// ═══════════════════════════════════════════════════════════════════════════
//  Evaluation
// ═══════════════════════════════════════════════════════════════════════════

/// Evaluate `rules` in order and return the first match, or `fallback`.
pub fn evaluate(rules: &[Rule], fallback: Weather, c: &Conditions) -> Weather {
    rules
        .iter()
        .find(|rule| (rule.applies)(c))
        .map_or(fallback, |rule| rule.weather)
}

/// Classify conditions with the production rule table.
pub fn classify(c: &Conditions) -> Weather {
    evaluate(&RULES, FALLBACK, c)
}
