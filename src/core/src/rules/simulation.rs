use crate::rules::KeyValues;
use crate::{LeagueError, LeagueResult};

/// Scalar knobs driving score, stat and injury generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRules {
    pub base_points: f64,
    pub rating_factor: f64,
    pub home_field_advantage: f64,
    pub random_variance: f64,
    pub min_score: i32,
    pub max_score: i32,
    pub passing_yards_per_rating: f64,
    pub rushing_yards_per_rating: f64,
    pub receiving_yards_per_rating: f64,
    pub defense_big_play_factor: f64,
    pub injury_probability: f64,
    pub injury_min_duration_weeks: u32,
    pub injury_max_duration_weeks: u32,
}

impl Default for SimulationRules {
    fn default() -> Self {
        SimulationRules {
            base_points: 24.0,
            rating_factor: 0.35,
            home_field_advantage: 3.0,
            random_variance: 7.5,
            min_score: 10,
            max_score: 48,
            passing_yards_per_rating: 7.0,
            rushing_yards_per_rating: 4.5,
            receiving_yards_per_rating: 5.5,
            defense_big_play_factor: 0.05,
            injury_probability: 0.07,
            injury_min_duration_weeks: 1,
            injury_max_duration_weeks: 6,
        }
    }
}

impl SimulationRules {
    pub fn from_key_values(values: &KeyValues) -> LeagueResult<Self> {
        let defaults = SimulationRules::default();

        let rules = SimulationRules {
            base_points: values.get_or("base_points", defaults.base_points)?,
            rating_factor: values.get_or("rating_factor", defaults.rating_factor)?,
            home_field_advantage: values.get_or("home_field_advantage", defaults.home_field_advantage)?,
            random_variance: values.get_or("random_variance", defaults.random_variance)?,
            min_score: values.get_or("min_score", defaults.min_score)?,
            max_score: values.get_or("max_score", defaults.max_score)?,
            passing_yards_per_rating: values
                .get_or("passing_yards_per_rating", defaults.passing_yards_per_rating)?,
            rushing_yards_per_rating: values
                .get_or("rushing_yards_per_rating", defaults.rushing_yards_per_rating)?,
            receiving_yards_per_rating: values
                .get_or("receiving_yards_per_rating", defaults.receiving_yards_per_rating)?,
            defense_big_play_factor: values
                .get_or("defense_big_play_factor", defaults.defense_big_play_factor)?,
            injury_probability: values.get_or("injury_probability", defaults.injury_probability)?,
            injury_min_duration_weeks: values
                .get_or("injury_min_duration_weeks", defaults.injury_min_duration_weeks)?,
            injury_max_duration_weeks: values
                .get_or("injury_max_duration_weeks", defaults.injury_max_duration_weeks)?,
        };

        rules.validate()?;

        Ok(rules)
    }

    /// A tie can only be broken when at least two scores are reachable,
    /// so the score window must be non-degenerate.
    pub fn validate(&self) -> LeagueResult<()> {
        if self.min_score < 0 || self.min_score >= self.max_score {
            return Err(LeagueError::Config(format!(
                "score window [{}, {}] must be non-negative and wider than a single score",
                self.min_score, self.max_score
            )));
        }

        let factors = [
            ("passing_yards_per_rating", self.passing_yards_per_rating),
            ("rushing_yards_per_rating", self.rushing_yards_per_rating),
            ("receiving_yards_per_rating", self.receiving_yards_per_rating),
            ("random_variance", self.random_variance),
            ("defense_big_play_factor", self.defense_big_play_factor),
        ];

        if let Some((name, value)) = factors.iter().find(|(_, value)| !(*value >= 0.0)) {
            return Err(LeagueError::Config(format!("{} must be non-negative, got {}", name, value)));
        }

        if !(0.0..=1.0).contains(&self.injury_probability) {
            return Err(LeagueError::Config(format!(
                "injury_probability must be within [0, 1], got {}",
                self.injury_probability
            )));
        }

        if self.injury_min_duration_weeks < 1 || self.injury_min_duration_weeks > self.injury_max_duration_weeks {
            return Err(LeagueError::Config(format!(
                "injury duration window [{}, {}] is invalid",
                self.injury_min_duration_weeks, self.injury_max_duration_weeks
            )));
        }

        Ok(())
    }

    pub fn clamp_score(&self, value: f64) -> i32 {
        (value.round() as i32).clamp(self.min_score, self.max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_empty() {
        let rules = SimulationRules::from_key_values(&KeyValues::parse("")).unwrap();
        assert_eq!(rules, SimulationRules::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let values = KeyValues::parse("base_points = 21.5\nmax_score = 60\ninjury_probability = 0");
        let rules = SimulationRules::from_key_values(&values).unwrap();

        assert_eq!(rules.base_points, 21.5);
        assert_eq!(rules.max_score, 60);
        assert_eq!(rules.injury_probability, 0.0);
        assert_eq!(rules.rating_factor, 0.35);
    }

    #[test]
    fn test_invalid_windows_rejected() {
        assert!(SimulationRules::from_key_values(&KeyValues::parse("min_score = 30\nmax_score = 30")).is_err());
        assert!(SimulationRules::from_key_values(&KeyValues::parse("injury_probability = 1.5")).is_err());
        assert!(SimulationRules::from_key_values(&KeyValues::parse("rushing_yards_per_rating = -1")).is_err());
    }

    #[test]
    fn test_clamp_score() {
        let rules = SimulationRules::default();

        assert_eq!(rules.clamp_score(3.2), 10);
        assert_eq!(rules.clamp_score(24.6), 25);
        assert_eq!(rules.clamp_score(99.0), 48);
    }
}
