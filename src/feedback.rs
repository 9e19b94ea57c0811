//! Feedback submission
//!
//! Validates the rating and acknowledges with a generated submission id.
//! Nothing is stored; the receipt exists so the client can show a
//! confirmation.

use crate::error::ServiceError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A validated feedback submission
#[derive(Debug)]
pub struct Submission {
    pub rating: u8,
    pub category: String,
    pub comments: Option<String>,
    pub user_id: Option<String>,
}

/// Receipt returned to the client
#[derive(Debug)]
pub struct Receipt {
    pub feedback_id: String,
}

pub fn submit(
    rating: u8,
    category: &str,
    comments: Option<String>,
    user_id: Option<String>,
) -> Result<Receipt, ServiceError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ServiceError::invalid(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    if category.trim().is_empty() {
        return Err(ServiceError::invalid("category must not be empty"));
    }

    let submission = Submission {
        rating,
        category: category.trim().to_string(),
        comments,
        user_id,
    };

    let feedback_id = format!("fb_{}", uuid::Uuid::new_v4());
    tracing::info!(
        feedback_id,
        rating = submission.rating,
        category = %submission.category,
        has_comments = submission.comments.is_some(),
        user_id = submission.user_id.as_deref(),
        "feedback received"
    );

    Ok(Receipt { feedback_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let receipt = submit(5, "service", Some("very helpful".to_string()), None).unwrap();
        assert!(receipt.feedback_id.starts_with("fb_"));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(submit(0, "service", None, None).is_err());
        assert!(submit(6, "service", None, None).is_err());
        assert!(submit(1, "service", None, None).is_ok());
        assert!(submit(5, "service", None, None).is_ok());
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = submit(4, "  ", None, None).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
    }
}
