use ssp_meteo::forecast::normalize_degrees;

/// Arrow glyphs for the eight compass sectors, indexed by [`compass_sector`].
/// The arrows point where the wind goes: a wind *from* the north (0 deg)
/// gets the downward arrow.
pub const SECTOR_ARROWS: [&str; 8] = ["⬇️", "↙️", "⬅️", "↖️", "⬆️", "↗️", "➡️", "↘️"];

/// Index of the 45-degree compass sector containing a heading, with
/// sector 0 centered on north (offset by half a sector).
pub fn compass_sector(deg: f64) -> usize {
    (normalize_degrees(deg + 22.5) / 45.0) as usize % 8
}

/// Table glyph for a "coming from" direction.
pub fn direction_arrow(deg: f64) -> &'static str {
    SECTOR_ARROWS[compass_sector(deg)]
}

#[cfg(test)]
mod tests {
    use super::{compass_sector, direction_arrow};

    #[test]
    fn test_sector_centers() {
        assert_eq!(compass_sector(0.0), 0); // N
        assert_eq!(compass_sector(45.0), 1); // NE
        assert_eq!(compass_sector(90.0), 2); // E
        assert_eq!(compass_sector(180.0), 4); // S
        assert_eq!(compass_sector(270.0), 6); // W
        assert_eq!(compass_sector(315.0), 7); // NW
    }

    #[test]
    fn test_sector_edges() {
        // sector boundaries sit half a sector off the cardinal headings
        assert_eq!(compass_sector(22.4), 0);
        assert_eq!(compass_sector(22.5), 1);
        assert_eq!(compass_sector(337.4), 7);
        assert_eq!(compass_sector(337.5), 0);
        assert_eq!(compass_sector(359.9), 0);
    }

    #[test]
    fn test_northerly_wind_points_down() {
        assert_eq!(direction_arrow(0.0), "⬇️");
        assert_eq!(direction_arrow(180.0), "⬆️");
    }
}
