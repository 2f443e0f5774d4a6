use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::rating::ScreeningScoreSummary;
use crate::error::Result;
use crate::repository::rating::RatingRepository;

/// Arithmetic mean of jury scores, rounded to two decimal places.
/// None when no scores exist; no weighting, no outlier trimming.
pub fn mean_score(scores: &[Decimal]) -> Option<Decimal> {
    if scores.is_empty() {
        return None;
    }

    let sum: Decimal = scores.iter().copied().sum();
    Some((sum / Decimal::from(scores.len() as u64)).round_dp(2))
}

pub fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}

pub async fn score_summary(pool: &PgPool, screening_id: Uuid) -> Result<ScreeningScoreSummary> {
    let repo = RatingRepository::new(pool);
    let scores = repo.scores_for_screening(screening_id).await?;

    Ok(ScreeningScoreSummary {
        screening_id,
        average_score: mean_score(&scores).map(decimal_to_f64),
        rating_count: scores.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|v| Decimal::from(*v)).collect()
    }

    #[test]
    fn mean_of_three_scores() {
        assert_eq!(
            mean_score(&scores(&[80, 90, 100])),
            Some(Decimal::from(90))
        );
    }

    #[test]
    fn mean_of_no_scores_is_undefined() {
        assert_eq!(mean_score(&[]), None);
    }

    #[test]
    fn mean_is_rounded_to_two_decimal_places() {
        // 70 + 75 + 81 = 226, / 3 = 75.333...
        let mean = mean_score(&scores(&[70, 75, 81])).unwrap();
        assert_eq!(mean.to_string(), "75.33");
    }

    #[test]
    fn single_score_is_its_own_mean() {
        assert_eq!(mean_score(&scores(&[42])), Some(Decimal::from(42)));
    }

    #[test]
    fn decimal_converts_to_f64_for_the_wire() {
        assert_eq!(decimal_to_f64(Decimal::new(9050, 2)), 90.5);
    }
}
