use serde::{Deserialize, Serialize};

const QUARTER_SECONDS: u32 = 15 * 60;
const GAME_SECONDS: u32 = 4 * QUARTER_SECONDS;

/// Upper bound (exclusive) of a scoring marker, in elapsed game minutes.
pub const MARKER_MAX_MINUTES: f64 = 59.9;

/// Quarter and countdown clock of a scoring play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub quarter: u32,
    pub clock: String,
}

impl GameClock {
    /// Maps an elapsed-minutes marker to a quarter in `1..=4` and the time
    /// remaining in that quarter as `MM:SS`.
    pub fn from_marker(marker: f64) -> Self {
        let elapsed = ((marker * 60.0).trunc().max(0.0) as u32).min(GAME_SECONDS - 1);

        let quarter_index = (elapsed / QUARTER_SECONDS).min(3);
        let remaining = QUARTER_SECONDS - (elapsed - quarter_index * QUARTER_SECONDS);

        GameClock {
            quarter: quarter_index + 1,
            clock: format!("{:02}:{:02}", remaining / 60, remaining % 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_at_kickoff() {
        let clock = GameClock::from_marker(0.0);

        assert_eq!(clock.quarter, 1);
        assert_eq!(clock.clock, "15:00");
    }

    #[test]
    fn test_clock_quarter_boundaries() {
        assert_eq!(GameClock::from_marker(14.99).quarter, 1);
        assert_eq!(GameClock::from_marker(15.0), GameClock { quarter: 2, clock: "15:00".to_string() });
        assert_eq!(GameClock::from_marker(37.5), GameClock { quarter: 3, clock: "07:30".to_string() });
    }

    #[test]
    fn test_clock_clamps_out_of_range_markers() {
        assert_eq!(GameClock::from_marker(-4.0).clock, "15:00");
        assert_eq!(GameClock::from_marker(75.0), GameClock { quarter: 4, clock: "00:01".to_string() });
        assert_eq!(GameClock::from_marker(MARKER_MAX_MINUTES).quarter, 4);
    }
}
