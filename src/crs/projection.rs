//! Projection identities for the supported Swedish CRS set
//!
//! The set of supported systems is fixed by design: WGS84, the SWEREF99
//! family and the RT90 family. All grid constants live in the registry;
//! this module only carries the identities and their classification.

use std::fmt;

/// Identifier for the supported coordinate reference systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrsProjection {
    /// WGS 84 (EPSG:4326), the geodetic lat/lon system
    Wgs84,
    /// SWEREF 99 TM (EPSG:3006), the national projection
    Sweref99Tm,
    /// SWEREF 99 12 00 (EPSG:3007)
    Sweref991200,
    /// SWEREF 99 13 30 (EPSG:3008)
    Sweref991330,
    /// SWEREF 99 15 00 (EPSG:3009)
    Sweref991500,
    /// SWEREF 99 16 30 (EPSG:3010)
    Sweref991630,
    /// SWEREF 99 18 00 (EPSG:3011)
    Sweref991800,
    /// SWEREF 99 14 15 (EPSG:3012)
    Sweref991415,
    /// SWEREF 99 15 45 (EPSG:3013)
    Sweref991545,
    /// SWEREF 99 17 15 (EPSG:3014)
    Sweref991715,
    /// SWEREF 99 18 45 (EPSG:3015)
    Sweref991845,
    /// SWEREF 99 20 15 (EPSG:3016)
    Sweref992015,
    /// SWEREF 99 21 45 (EPSG:3017)
    Sweref992145,
    /// SWEREF 99 23 15 (EPSG:3018)
    Sweref992315,
    /// RT90 7.5 gon V (EPSG:3019)
    Rt9075GonV,
    /// RT90 5.0 gon V (EPSG:3020)
    Rt9050GonV,
    /// RT90 2.5 gon V (EPSG:3021)
    Rt9025GonV,
    /// RT90 0.0 gon V (EPSG:3022)
    Rt9000GonV,
    /// RT90 2.5 gon O (EPSG:3023)
    Rt9025GonO,
    /// RT90 5.0 gon O (EPSG:3024)
    Rt9050GonO,
}

impl CrsProjection {
    /// Get the EPSG code for this projection
    pub fn epsg_number(&self) -> u32 {
        match self {
            CrsProjection::Wgs84 => 4326,
            CrsProjection::Sweref99Tm => 3006,
            CrsProjection::Sweref991200 => 3007,
            CrsProjection::Sweref991330 => 3008,
            CrsProjection::Sweref991500 => 3009,
            CrsProjection::Sweref991630 => 3010,
            CrsProjection::Sweref991800 => 3011,
            CrsProjection::Sweref991415 => 3012,
            CrsProjection::Sweref991545 => 3013,
            CrsProjection::Sweref991715 => 3014,
            CrsProjection::Sweref991845 => 3015,
            CrsProjection::Sweref992015 => 3016,
            CrsProjection::Sweref992145 => 3017,
            CrsProjection::Sweref992315 => 3018,
            CrsProjection::Rt9075GonV => 3019,
            CrsProjection::Rt9050GonV => 3020,
            CrsProjection::Rt9025GonV => 3021,
            CrsProjection::Rt9000GonV => 3022,
            CrsProjection::Rt9025GonO => 3023,
            CrsProjection::Rt9050GonO => 3024,
        }
    }

    /// Get the canonical name of this projection
    ///
    /// This is the uppercase form used in coordinate formatting,
    /// e.g. "SWEREF_99_18_00" or "WGS84".
    pub fn name(&self) -> &'static str {
        match self {
            CrsProjection::Wgs84 => "WGS84",
            CrsProjection::Sweref99Tm => "SWEREF_99_TM",
            CrsProjection::Sweref991200 => "SWEREF_99_12_00",
            CrsProjection::Sweref991330 => "SWEREF_99_13_30",
            CrsProjection::Sweref991500 => "SWEREF_99_15_00",
            CrsProjection::Sweref991630 => "SWEREF_99_16_30",
            CrsProjection::Sweref991800 => "SWEREF_99_18_00",
            CrsProjection::Sweref991415 => "SWEREF_99_14_15",
            CrsProjection::Sweref991545 => "SWEREF_99_15_45",
            CrsProjection::Sweref991715 => "SWEREF_99_17_15",
            CrsProjection::Sweref991845 => "SWEREF_99_18_45",
            CrsProjection::Sweref992015 => "SWEREF_99_20_15",
            CrsProjection::Sweref992145 => "SWEREF_99_21_45",
            CrsProjection::Sweref992315 => "SWEREF_99_23_15",
            CrsProjection::Rt9075GonV => "RT90_7_5_GON_V",
            CrsProjection::Rt9050GonV => "RT90_5_0_GON_V",
            CrsProjection::Rt9025GonV => "RT90_2_5_GON_V",
            CrsProjection::Rt9000GonV => "RT90_0_0_GON_V",
            CrsProjection::Rt9025GonO => "RT90_2_5_GON_O",
            CrsProjection::Rt9050GonO => "RT90_5_0_GON_O",
        }
    }

    /// Look up a projection by its canonical name
    pub fn from_name(name: &str) -> Option<CrsProjection> {
        match name {
            "WGS84" => Some(CrsProjection::Wgs84),
            "SWEREF_99_TM" => Some(CrsProjection::Sweref99Tm),
            "SWEREF_99_12_00" => Some(CrsProjection::Sweref991200),
            "SWEREF_99_13_30" => Some(CrsProjection::Sweref991330),
            "SWEREF_99_15_00" => Some(CrsProjection::Sweref991500),
            "SWEREF_99_16_30" => Some(CrsProjection::Sweref991630),
            "SWEREF_99_18_00" => Some(CrsProjection::Sweref991800),
            "SWEREF_99_14_15" => Some(CrsProjection::Sweref991415),
            "SWEREF_99_15_45" => Some(CrsProjection::Sweref991545),
            "SWEREF_99_17_15" => Some(CrsProjection::Sweref991715),
            "SWEREF_99_18_45" => Some(CrsProjection::Sweref991845),
            "SWEREF_99_20_15" => Some(CrsProjection::Sweref992015),
            "SWEREF_99_21_45" => Some(CrsProjection::Sweref992145),
            "SWEREF_99_23_15" => Some(CrsProjection::Sweref992315),
            "RT90_7_5_GON_V" => Some(CrsProjection::Rt9075GonV),
            "RT90_5_0_GON_V" => Some(CrsProjection::Rt9050GonV),
            "RT90_2_5_GON_V" => Some(CrsProjection::Rt9025GonV),
            "RT90_0_0_GON_V" => Some(CrsProjection::Rt9000GonV),
            "RT90_2_5_GON_O" => Some(CrsProjection::Rt9025GonO),
            "RT90_5_0_GON_O" => Some(CrsProjection::Rt9050GonO),
            _ => None,
        }
    }

    /// Whether this is the geodetic lat/lon system
    pub fn is_wgs84(&self) -> bool {
        matches!(self, CrsProjection::Wgs84)
    }

    /// Whether this is one of the SWEREF99 grid systems
    pub fn is_sweref99(&self) -> bool {
        let epsg = self.epsg_number();
        (3006..=3018).contains(&epsg)
    }

    /// Whether this is one of the RT90 grid systems
    pub fn is_rt90(&self) -> bool {
        let epsg = self.epsg_number();
        (3019..=3024).contains(&epsg)
    }

    /// Get a description of this projection
    pub fn description(&self) -> String {
        format!("{} (EPSG:{})", self.name(), self.epsg_number())
    }
}

impl fmt::Display for CrsProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
