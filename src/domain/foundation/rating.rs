//! Running average rating value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Mean of all ratings received so far, with the number of samples.
///
/// A rating with zero samples has no meaningful value, so [`value`] returns
/// `None` until the first score arrives.
///
/// [`value`]: AverageRating::value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "AverageRatingRepr", try_from = "AverageRatingRepr")]
pub struct AverageRating {
    value: f64,
    count: u32,
}

impl AverageRating {
    /// Creates an unrated average.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new average that includes `score`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `score` is NaN or infinite
    /// - `InvalidFormat` if the rating count is already at its maximum
    pub fn with_rating(&self, score: f64) -> Result<Self, ValidationError> {
        if !score.is_finite() {
            return Err(ValidationError::invalid_format(
                "rating",
                "score must be a finite number",
            ));
        }
        let count = self.count.checked_add(1).ok_or_else(|| {
            ValidationError::invalid_format("rating", "rating count limit reached")
        })?;
        let value = (self.value * f64::from(self.count) + score) / f64::from(count);
        Ok(Self { value, count })
    }

    /// Returns the mean, or `None` when nothing has been rated yet.
    pub fn value(&self) -> Option<f64> {
        if self.is_rated() {
            Some(self.value)
        } else {
            None
        }
    }

    /// Returns the number of ratings.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns true once at least one rating has been recorded.
    pub fn is_rated(&self) -> bool {
        self.count > 0
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{:.1} ({} ratings)", value, self.count),
            None => write!(f, "unrated"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct AverageRatingRepr {
    value: Option<f64>,
    count: u32,
}

impl From<AverageRating> for AverageRatingRepr {
    fn from(rating: AverageRating) -> Self {
        Self {
            value: rating.value(),
            count: rating.count,
        }
    }
}

impl TryFrom<AverageRatingRepr> for AverageRating {
    type Error = ValidationError;

    fn try_from(repr: AverageRatingRepr) -> Result<Self, Self::Error> {
        match (repr.value, repr.count) {
            (None, 0) => Ok(Self::new()),
            (Some(value), count) if count > 0 && value.is_finite() => Ok(Self { value, count }),
            _ => Err(ValidationError::invalid_format(
                "average_rating",
                "value must be present exactly when count is positive",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rating_is_unrated() {
        let rating = AverageRating::new();
        assert_eq!(rating.count(), 0);
        assert_eq!(rating.value(), None);
        assert!(!rating.is_rated());
        assert_eq!(format!("{}", rating), "unrated");
    }

    #[test]
    fn single_rating_becomes_the_average() {
        let rating = AverageRating::new().with_rating(5.0).unwrap();
        assert_eq!(rating.value(), Some(5.0));
        assert_eq!(rating.count(), 1);
    }

    #[test]
    fn two_ratings_average_out() {
        let rating = AverageRating::new()
            .with_rating(5.0)
            .unwrap()
            .with_rating(3.0)
            .unwrap();
        assert_eq!(rating.value(), Some(4.0));
        assert_eq!(rating.count(), 2);
    }

    #[test]
    fn with_rating_leaves_original_untouched() {
        let original = AverageRating::new();
        let _ = original.with_rating(4.0).unwrap();
        assert_eq!(original.count(), 0);
    }

    #[test]
    fn rejects_non_finite_score() {
        assert!(AverageRating::new().with_rating(f64::NAN).is_err());
        assert!(AverageRating::new().with_rating(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_rating_past_count_limit() {
        let saturated = AverageRating {
            value: 3.0,
            count: u32::MAX,
        };
        let err = saturated.with_rating(5.0).unwrap_err();
        assert_eq!(err.field(), "rating");
        assert_eq!(saturated.count(), u32::MAX);
    }

    #[test]
    fn displays_value_and_count() {
        let rating = AverageRating::new().with_rating(4.5).unwrap();
        assert_eq!(format!("{}", rating), "4.5 (1 ratings)");
    }

    #[test]
    fn unrated_serializes_null_value() {
        let json = serde_json::to_value(AverageRating::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "value": null, "count": 0 }));
    }

    #[test]
    fn rated_serializes_value() {
        let rating = AverageRating::new().with_rating(3.0).unwrap();
        let json = serde_json::to_value(rating).unwrap();
        assert_eq!(json, serde_json::json!({ "value": 3.0, "count": 1 }));
    }

    #[test]
    fn deserialize_rejects_value_without_samples() {
        let result: Result<AverageRating, _> =
            serde_json::from_str(r#"{ "value": 4.0, "count": 0 }"#);
        assert!(result.is_err());
    }
}
