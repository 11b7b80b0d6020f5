use crate::forecast::ForecastSample;

/// Owns the most recently loaded forecast snapshot and the cursor selecting
/// the "current" hour for the hazard readout and the nautical chart.
///
/// One load replaces all prior state wholesale; the cursor is always
/// clamped to the loaded sample range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSession {
    samples: Vec<ForecastSample>,
    cursor: usize,
}

impl ForecastSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session contents with a fresh snapshot, cursor reset to 0.
    pub fn load(&mut self, samples: Vec<ForecastSample>) {
        self.samples = samples;
        self.cursor = 0;
    }

    pub fn samples(&self) -> &[ForecastSample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The sample under the cursor, None while nothing is loaded.
    pub fn current(&self) -> Option<&ForecastSample> {
        self.samples.get(self.cursor)
    }

    /// Move the cursor, clamping to [0, len - 1].
    pub fn set_cursor(&mut self, index: usize) {
        if self.samples.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = index.min(self.samples.len() - 1);
        }
    }

    pub fn step_earlier(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn step_later(&mut self) {
        self.set_cursor(self.cursor + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::ForecastSession;
    use crate::forecast::ForecastSample;
    use chrono::NaiveDate;

    fn sample(hour: u32) -> ForecastSample {
        ForecastSample {
            time: NaiveDate::from_ymd_opt(2026, 8, 23)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            wind_speed_kn: 10.0,
            wind_dir_deg: 300.0,
            wind_gust_kn: 14.0,
            wave_height_m: 0.6,
            wave_dir_deg: 290.0,
            current_speed_kn: 0.4,
            current_dir_deg: 120.0,
            precipitation_mm: 0.0,
            pressure_hpa: 1015.0,
        }
    }

    #[test]
    fn test_cursor_clamps() {
        let mut session = ForecastSession::new();
        session.load(vec![sample(0), sample(1), sample(2)]);

        session.set_cursor(99);
        assert_eq!(session.cursor(), 2);

        session.step_later();
        assert_eq!(session.cursor(), 2);

        session.step_earlier();
        session.step_earlier();
        session.step_earlier();
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_load_resets_wholesale() {
        let mut session = ForecastSession::new();
        session.load(vec![sample(0), sample(1), sample(2)]);
        session.set_cursor(2);

        session.load(vec![sample(5)]);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.len(), 1);
        assert_eq!(session.current().unwrap().time.format("%H").to_string(), "05");
    }

    #[test]
    fn test_empty_session() {
        let mut session = ForecastSession::new();
        assert!(session.current().is_none());
        session.step_later();
        assert_eq!(session.cursor(), 0);
    }
}
