//! Chart placeholder — birth-data validation and an illustrative sample chart.
//!
//! Nothing here is an astronomical calculation. [`generate_sample_chart`]
//! returns fixed planet positions and aspects plus randomised house cusps so a
//! front end has something to display. Randomness comes from the caller's RNG.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use phf::phf_map;
use rand::Rng;
use serde::Serialize;

pub const ZODIAC_SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

static PLANET_GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    "Sun" => "☉",
    "Moon" => "☽",
    "Mercury" => "☿",
    "Venus" => "♀",
    "Mars" => "♂",
    "Jupiter" => "♃",
    "Saturn" => "♄",
    "Uranus" => "♅",
    "Neptune" => "♆",
    "Pluto" => "♇",
};

/// Default coordinates (New York) used until place lookup exists.
const DEFAULT_LATITUDE: f64 = 40.7128;
const DEFAULT_LONGITUDE: f64 = -74.0060;

// ---------------------------------------------------------------------------
// Input + validation
// ---------------------------------------------------------------------------

/// Raw birth-data form fields, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthData {
    pub name: String,
    /// Usually `YYYY-MM-DD`; see [`parse_birth_date`] for what else is read.
    pub birth_date: String,
    pub birth_time: String,
    /// `"city, state, country"`; state and country are optional.
    pub birth_place: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    /// One human-readable message per missing field, in form order.
    pub errors: Vec<String>,
}

/// Check that every required field is present.
///
/// All five checks always run. Name and place must be non-blank after
/// trimming; the other fields only need to be non-empty.
pub fn validate_birth_data(data: &BirthData) -> Validation {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if data.birth_date.is_empty() {
        errors.push("Birth date is required".to_string());
    }
    if data.birth_time.is_empty() {
        errors.push("Birth time is required".to_string());
    }
    if data.birth_place.trim().is_empty() {
        errors.push("Birth place is required".to_string());
    }
    if data.timezone.is_empty() {
        errors.push("Timezone is required".to_string());
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Chart types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub name: String,
    /// The date exactly as entered.
    pub birth_date: String,
    /// `birth_date` as a calendar date, when it could be read as one.
    pub birth_day: Option<NaiveDate>,
    pub birth_time: String,
    pub birth_place: BirthPlace,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HousePosition>,
    pub aspects: Vec<Aspect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthPlace {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl BirthPlace {
    /// Split `"city, state, country"`. Missing parts become empty (or `None`
    /// for the state); extra parts are ignored.
    pub fn parse(place: &str, timezone: &str) -> Self {
        let parts: Vec<&str> = place.split(',').map(str::trim).collect();
        Self {
            city: parts.first().copied().unwrap_or_default().to_string(),
            state: parts.get(1).map(|s| s.to_string()),
            country: parts.get(2).copied().unwrap_or_default().to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            timezone: timezone.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub planet: &'static str,
    pub sign: &'static str,
    pub degree: f64,
    pub house: u8,
    pub is_retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousePosition {
    pub house: u8,
    pub sign: &'static str,
    pub degree: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AspectKind::Conjunction => write!(f, "Conjunction"),
            AspectKind::Sextile => write!(f, "Sextile"),
            AspectKind::Square => write!(f, "Square"),
            AspectKind::Trine => write!(f, "Trine"),
            AspectKind::Opposition => write!(f, "Opposition"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    pub planet1: &'static str,
    pub planet2: &'static str,
    pub kind: AspectKind,
    pub orb: f64,
    pub is_exact: bool,
}

/// Result of [`calculate_aspect`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Distance from the exact aspect angle, in degrees.
    pub orb: f64,
    pub is_exact: bool,
}

// ---------------------------------------------------------------------------
// Sample chart
// ---------------------------------------------------------------------------

/// Fabricate an illustrative chart for `data`.
///
/// Planet positions and aspects are fixed; house cusps are drawn from `rng`.
/// Any form that passes [`validate_birth_data`] yields a chart; a date that
/// cannot be read is kept as text with `birth_day` left `None`.
pub fn generate_sample_chart<R>(data: &BirthData, rng: &mut R) -> ChartData
where
    R: Rng + ?Sized,
{
    let houses = (0..12u8)
        .map(|i| {
            let cusp = (f64::from(i) * 30.0 + rng.gen::<f64>() * 30.0) % 360.0;
            HousePosition {
                house: i + 1,
                sign: zodiac_sign(cusp),
                degree: rng.gen::<f64>() * 30.0,
            }
        })
        .collect();

    ChartData {
        id: format!("chart-{}", Utc::now().timestamp_millis()),
        name: data.name.clone(),
        birth_date: data.birth_date.clone(),
        birth_day: parse_birth_date(&data.birth_date),
        birth_time: data.birth_time.clone(),
        birth_place: BirthPlace::parse(&data.birth_place, &data.timezone),
        planets: sample_planets(),
        houses,
        aspects: sample_aspects(),
    }
}

/// Read a birth date leniently.
///
/// Accepts `YYYY-MM-DD`, an ISO datetime (`1990-06-14T10:00`, RFC 3339),
/// `MM/DD/YYYY`, and month-name forms such as `June 14, 1990` or
/// `14 Jun 1990`. Anything else is `None`.
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    let input = input.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(input) {
        return Some(stamp.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
                .map(|stamp| stamp.date())
        })
}

fn sample_planets() -> Vec<PlanetPosition> {
    const PLANETS: [(&str, &str, f64, u8, bool); 10] = [
        ("Sun", "Gemini", 23.45, 10, false),
        ("Moon", "Cancer", 15.23, 11, false),
        ("Mercury", "Gemini", 18.67, 10, false),
        ("Venus", "Taurus", 7.89, 9, false),
        ("Mars", "Leo", 12.34, 12, false),
        ("Jupiter", "Sagittarius", 28.91, 4, true),
        ("Saturn", "Capricorn", 5.67, 5, false),
        ("Uranus", "Aquarius", 14.23, 6, false),
        ("Neptune", "Pisces", 21.45, 7, true),
        ("Pluto", "Scorpio", 9.87, 3, false),
    ];
    PLANETS
        .iter()
        .map(|&(planet, sign, degree, house, is_retrograde)| PlanetPosition {
            planet,
            sign,
            degree,
            house,
            is_retrograde,
        })
        .collect()
}

fn sample_aspects() -> Vec<Aspect> {
    vec![
        Aspect {
            planet1: "Sun",
            planet2: "Moon",
            kind: AspectKind::Trine,
            orb: 3.2,
            is_exact: false,
        },
        Aspect {
            planet1: "Venus",
            planet2: "Mars",
            kind: AspectKind::Conjunction,
            orb: 0.8,
            is_exact: true,
        },
        Aspect {
            planet1: "Mercury",
            planet2: "Jupiter",
            kind: AspectKind::Square,
            orb: 2.1,
            is_exact: false,
        },
    ]
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Format decimal degrees as `D°MM'SS"`, truncating minutes and seconds.
pub fn degrees_to_dms(degrees: f64) -> String {
    let d = degrees.floor();
    let minutes = (degrees - d) * 60.0;
    let m = minutes.floor();
    let s = ((minutes - m) * 60.0).floor();
    format!("{}°{:02}'{:02}\"", d as i64, m as i64, s as i64)
}

/// The sign covering an ecliptic longitude, or `"Unknown"` outside `[0, 360)`.
pub fn zodiac_sign(degree: f64) -> &'static str {
    if !(0.0..360.0).contains(&degree) {
        return "Unknown";
    }
    ZODIAC_SIGNS[(degree / 30.0).floor() as usize]
}

/// The first major aspect within orb of the angle between two longitudes.
pub fn calculate_aspect(degree1: f64, degree2: f64) -> Option<AspectMatch> {
    const ASPECTS: [(AspectKind, f64, f64); 5] = [
        (AspectKind::Conjunction, 0.0, 8.0),
        (AspectKind::Sextile, 60.0, 6.0),
        (AspectKind::Square, 90.0, 8.0),
        (AspectKind::Trine, 120.0, 8.0),
        (AspectKind::Opposition, 180.0, 8.0),
    ];

    let diff = (degree1 - degree2).abs();
    let angle = if diff > 180.0 { 360.0 - diff } else { diff };

    ASPECTS.iter().find_map(|&(kind, exact, allowed)| {
        let orb = (angle - exact).abs();
        (orb <= allowed).then_some(AspectMatch {
            kind,
            orb,
            is_exact: orb <= 1.0,
        })
    })
}

/// Prefix a planet name with its glyph, e.g. `"☉ Sun"`. Unknown planets get
/// an empty glyph but keep the separating space.
pub fn format_planet_name(planet: &str) -> String {
    let glyph = PLANET_GLYPHS.get(planet).copied().unwrap_or_default();
    format!("{glyph} {planet}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
