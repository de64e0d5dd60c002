//! Airport record with optional radio frequencies.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::document::{finite, StructuredDocument};

/// Default transition altitude in feet.
pub const DEFAULT_TRANSITION_ALTITUDE: i32 = 18000;

/// Default transition level.
pub const DEFAULT_TRANSITION_LEVEL: &str = "FL180";

/// A radio frequency in megahertz.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_mhz(mhz: f64) -> Self {
        Self(mhz)
    }

    pub fn mhz(self) -> f64 {
        self.0
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        finite(&self.0, serializer)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} MHz", self.0)
    }
}

/// The seven frequency slots an airport may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyKind {
    Ctaf,
    Atis,
    Tower,
    Ground,
    Approach,
    Departure,
    Clearance,
}

impl FrequencyKind {
    /// All kinds in wire order.
    pub const ALL: [FrequencyKind; 7] = [
        FrequencyKind::Ctaf,
        FrequencyKind::Atis,
        FrequencyKind::Tower,
        FrequencyKind::Ground,
        FrequencyKind::Approach,
        FrequencyKind::Departure,
        FrequencyKind::Clearance,
    ];

    /// Key used in the project file.
    pub fn wire_name(self) -> &'static str {
        match self {
            FrequencyKind::Ctaf => "CTAF",
            FrequencyKind::Atis => "ATIS",
            FrequencyKind::Tower => "Tower",
            FrequencyKind::Ground => "Ground",
            FrequencyKind::Approach => "Approach",
            FrequencyKind::Departure => "Departure",
            FrequencyKind::Clearance => "Clearance",
        }
    }
}

impl fmt::Display for FrequencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Airport identity, location, and communications.
///
/// Each frequency is independently present or absent; absence means the
/// service does not exist at this airport, not that it is tuned to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportInfo {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "ICAO", alias = "icao")]
    pub icao: String,

    #[serde(rename = "IATA", alias = "iata")]
    pub iata: String,

    #[serde(rename = "FAA", alias = "faa")]
    pub faa: String,

    #[serde(rename = "City", alias = "city")]
    pub city: String,

    #[serde(rename = "State", alias = "state")]
    pub state: String,

    #[serde(rename = "Country", alias = "country")]
    pub country: String,

    #[serde(rename = "RegionCode", alias = "regionCode")]
    pub region_code: String,

    /// Datum latitude in degrees, WGS84.
    #[serde(rename = "DatumLat", alias = "datumLat", serialize_with = "finite")]
    pub datum_lat: f64,

    /// Datum longitude in degrees, WGS84.
    #[serde(rename = "DatumLon", alias = "datumLon", serialize_with = "finite")]
    pub datum_lon: f64,

    /// Field elevation in feet.
    #[serde(rename = "Elevation", alias = "elevation")]
    pub elevation: i32,

    /// Magnetic variation in degrees; east positive.
    #[serde(
        rename = "MagVar",
        alias = "magneticVariation",
        serialize_with = "finite"
    )]
    pub magnetic_variation: f64,

    /// Transition altitude in feet.
    #[serde(rename = "TransitionAlt", alias = "transitionAltitude")]
    pub transition_altitude: i32,

    #[serde(rename = "TransitionLevel", alias = "transitionLevel")]
    pub transition_level: String,

    #[serde(rename = "CTAF", alias = "ctaf", skip_serializing_if = "Option::is_none")]
    pub ctaf: Option<Frequency>,

    #[serde(rename = "ATIS", alias = "atis", skip_serializing_if = "Option::is_none")]
    pub atis: Option<Frequency>,

    #[serde(rename = "Tower", alias = "tower", skip_serializing_if = "Option::is_none")]
    pub tower: Option<Frequency>,

    #[serde(rename = "Ground", alias = "ground", skip_serializing_if = "Option::is_none")]
    pub ground: Option<Frequency>,

    #[serde(
        rename = "Approach",
        alias = "approach",
        skip_serializing_if = "Option::is_none"
    )]
    pub approach: Option<Frequency>,

    #[serde(
        rename = "Departure",
        alias = "departure",
        skip_serializing_if = "Option::is_none"
    )]
    pub departure: Option<Frequency>,

    #[serde(
        rename = "Clearance",
        alias = "clearance",
        skip_serializing_if = "Option::is_none"
    )]
    pub clearance: Option<Frequency>,
}

impl Default for AirportInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            icao: String::new(),
            iata: String::new(),
            faa: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            region_code: String::new(),
            datum_lat: 0.0,
            datum_lon: 0.0,
            elevation: 0,
            magnetic_variation: 0.0,
            transition_altitude: DEFAULT_TRANSITION_ALTITUDE,
            transition_level: DEFAULT_TRANSITION_LEVEL.to_string(),
            ctaf: None,
            atis: None,
            tower: None,
            ground: None,
            approach: None,
            departure: None,
            clearance: None,
        }
    }
}

impl AirportInfo {
    /// Create an airport with the given ICAO code and defaults elsewhere.
    pub fn with_icao(icao: impl Into<String>) -> Self {
        Self {
            icao: icao.into(),
            ..Default::default()
        }
    }

    /// Get the frequency for `kind`, if published.
    pub fn frequency(&self, kind: FrequencyKind) -> Option<Frequency> {
        match kind {
            FrequencyKind::Ctaf => self.ctaf,
            FrequencyKind::Atis => self.atis,
            FrequencyKind::Tower => self.tower,
            FrequencyKind::Ground => self.ground,
            FrequencyKind::Approach => self.approach,
            FrequencyKind::Departure => self.departure,
            FrequencyKind::Clearance => self.clearance,
        }
    }

    /// Set or clear the frequency for `kind`.
    pub fn set_frequency(&mut self, kind: FrequencyKind, frequency: Option<Frequency>) {
        let slot = match kind {
            FrequencyKind::Ctaf => &mut self.ctaf,
            FrequencyKind::Atis => &mut self.atis,
            FrequencyKind::Tower => &mut self.tower,
            FrequencyKind::Ground => &mut self.ground,
            FrequencyKind::Approach => &mut self.approach,
            FrequencyKind::Departure => &mut self.departure,
            FrequencyKind::Clearance => &mut self.clearance,
        };
        *slot = frequency;
    }

    /// Published frequencies in wire order.
    pub fn frequencies(&self) -> impl Iterator<Item = (FrequencyKind, Frequency)> + '_ {
        FrequencyKind::ALL
            .into_iter()
            .filter_map(|kind| self.frequency(kind).map(|f| (kind, f)))
    }
}

impl StructuredDocument for AirportInfo {}
