/// Exclusive upper bounds in knots for Beaufort forces 0 through 11;
/// anything at or above the last bound is force 12.
const UPPER_BOUNDS_KN: [f64; 12] = [
    1.0, 3.0, 6.0, 10.0, 15.0, 21.0, 27.0, 33.0, 40.0, 47.0, 55.0, 63.0,
];

/// Map a wind speed in knots to its Beaufort force (0-12).
///
/// Boundary speeds belong to the higher band. Negative input clamps to 0.
pub fn beaufort(speed_kn: f64) -> u8 {
    let speed = speed_kn.max(0.0);
    for (force, bound) in UPPER_BOUNDS_KN.iter().enumerate() {
        if speed < *bound {
            return force as u8;
        }
    }
    12
}

#[cfg(test)]
mod tests {
    use super::beaufort;

    #[test]
    fn test_boundaries_belong_to_higher_band() {
        let bounds = [
            1.0, 3.0, 6.0, 10.0, 15.0, 21.0, 27.0, 33.0, 40.0, 47.0, 55.0, 63.0,
        ];
        for (i, bound) in bounds.iter().enumerate() {
            assert_eq!(beaufort(*bound), (i + 1) as u8, "at {} kn", bound);
            assert_eq!(beaufort(bound - 0.01), i as u8, "just below {} kn", bound);
        }
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let mut previous = 0;
        let mut speed = 0.0;
        while speed < 80.0 {
            let force = beaufort(speed);
            assert!(force >= previous, "decreased at {} kn", speed);
            previous = force;
            speed += 0.25;
        }
        assert_eq!(previous, 12);
    }

    #[test]
    fn test_calm_and_negative() {
        assert_eq!(beaufort(0.0), 0);
        assert_eq!(beaufort(0.9), 0);
        assert_eq!(beaufort(-5.0), 0);
    }
}
