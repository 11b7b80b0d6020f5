//! Color assignments for the logical categories the analysis crate emits.

use ssp_analysis::pressure::Tier;
use ssp_analysis::severity::Band;

/// Cell background for a severity band.
pub fn band_color(band: Band) -> &'static str {
    match band {
        Band::Gale => "#ff4b4b",
        Band::Strong => "#ffa500",
        Band::Ideal => "#78E94C",
        Band::Chill => "#56dbec",
        Band::Calm => "#CECECE",
    }
}

/// Banner background for a pressure trend tier.
pub fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Alarm => "#ff4b4b",
        Tier::Watch => "#ffa500",
        Tier::Stable => "#78E94C",
    }
}

#[cfg(test)]
mod tests {
    use super::{band_color, tier_color};
    use ssp_analysis::pressure::Tier;
    use ssp_analysis::severity::{severity_band, Band};

    #[test]
    fn test_band_palette_matches_classification() {
        assert_eq!(band_color(severity_band(25.0)), "#ff4b4b");
        assert_eq!(band_color(severity_band(10.0)), "#78E94C");
        assert_eq!(band_color(Band::Calm), "#CECECE");
        assert_eq!(tier_color(Tier::Watch), "#ffa500");
    }
}
