use serde::{Deserialize, Serialize};

/// Severity band for a wind speed or gust value, used for visual emphasis.
///
/// Bands partition the non-negative axis with no gaps: values at or below
/// 3 kn are Calm, above 3 kn Chill, from 7 kn Ideal sailing wind, from
/// 15 kn Strong and from 22 kn Gale territory.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Band {
    Calm,
    Chill,
    Ideal,
    Strong,
    Gale,
}

/// Classify a speed value in knots into its severity band.
/// Thresholds are evaluated in descending order, first match wins.
pub fn severity_band(value: f64) -> Band {
    if value >= 22.0 {
        Band::Gale
    } else if value >= 15.0 {
        Band::Strong
    } else if value >= 7.0 {
        Band::Ideal
    } else if value > 3.0 {
        Band::Chill
    } else {
        Band::Calm
    }
}

#[cfg(test)]
mod tests {
    use super::{severity_band, Band};

    #[test]
    fn test_band_boundaries() {
        assert_eq!(severity_band(0.0), Band::Calm);
        assert_eq!(severity_band(3.0), Band::Calm);
        assert_eq!(severity_band(3.0001), Band::Chill);
        assert_eq!(severity_band(6.9), Band::Chill);
        assert_eq!(severity_band(7.0), Band::Ideal);
        assert_eq!(severity_band(14.9), Band::Ideal);
        assert_eq!(severity_band(15.0), Band::Strong);
        assert_eq!(severity_band(21.9), Band::Strong);
        assert_eq!(severity_band(22.0), Band::Gale);
        assert_eq!(severity_band(60.0), Band::Gale);
    }

    #[test]
    fn test_bands_monotonic_in_speed() {
        fn rank(band: Band) -> u8 {
            match band {
                Band::Calm => 0,
                Band::Chill => 1,
                Band::Ideal => 2,
                Band::Strong => 3,
                Band::Gale => 4,
            }
        }
        // sweep a fine grid: the band may only escalate as speed rises
        let mut previous = rank(severity_band(0.0));
        let mut value = 0.05;
        while value < 30.0 {
            let current = rank(severity_band(value));
            assert!(current >= previous, "band dropped at {value} kn");
            previous = current;
            value += 0.05;
        }
        assert_eq!(previous, rank(Band::Gale));
    }
}
