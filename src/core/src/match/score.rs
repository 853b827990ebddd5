use crate::r#match::{gauss, unit};
use crate::rules::SimulationRules;
use rand::Rng;

const TIE_BREAK_POINTS: i32 = 3;

pub struct ScoreGenerator;

impl ScoreGenerator {
    /// Final `(home, away)` score from the two team ratings.
    ///
    /// Draw order: home noise, away noise, then one coin flip only when the
    /// clamped scores tie.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        home_rating: f64,
        away_rating: f64,
        rules: &SimulationRules,
    ) -> (i32, i32) {
        let diff = (home_rating - away_rating) * rules.rating_factor + rules.home_field_advantage;

        let home_points = rules.base_points + diff + gauss(rng, 0.0, rules.random_variance);
        let away_points = rules.base_points - diff + gauss(rng, 0.0, rules.random_variance);

        let mut home_score = rules.clamp_score(home_points);
        let away_score = rules.clamp_score(away_points);

        if home_score == away_score {
            let shift = if unit(rng) > 0.5 { TIE_BREAK_POINTS } else { -TIE_BREAK_POINTS };

            // a shift into a clamped bound can land back on the tie
            let shifted = rules.clamp_score((home_score + shift) as f64);
            home_score = if shifted != away_score {
                shifted
            } else {
                rules.clamp_score((home_score - shift) as f64)
            };
        }

        (home_score, away_score)
    }
}
