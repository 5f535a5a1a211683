use serde::{Deserialize, Serialize};

/// Scale a benchmark value is reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Percentage of issues resolved (SWE-bench), 0-100.
    Coding,
    /// Pairwise ELO rating, practically 1200-1500.
    Elo,
    /// Composite capability index, 0-100.
    Intelligence,
    #[default]
    Other,
}

const ELO_FLOOR: f64 = 1200.0;
const ELO_DIVISOR: f64 = 3.0;

/// Bring a raw benchmark value onto a roughly 0-100 band.
///
/// ELO ratings are shifted and compressed linearly; every other scale is
/// already a percentage and passes through.
pub fn normalize(raw: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Elo => (raw - ELO_FLOOR) / ELO_DIVISOR,
        Scale::Coding | Scale::Intelligence | Scale::Other => raw,
    }
}
