//! Plain-text rendering of a recommendations result (`?output=text`).

use std::fmt::Write;

use crate::models::recommendation::RecommendationsResponse;

/// One paragraph per recommendation, in result order.
pub fn render_text(response: &RecommendationsResponse) -> String {
    let mut text = format!(
        "Personalised Recommendations for Member {}:\n\n",
        response.member_id
    );
    for rec in &response.recommendations {
        // Writing into a String cannot fail.
        let _ = write!(
            text,
            "Experience Title: {}\nCategory: {}\nWhy it's recommended: {}\n\n",
            rec.title, rec.category, rec.explanation
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::Recommendation;

    fn rec(title: &str, category: &str, explanation: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            category: category.to_string(),
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn test_render_text_lists_each_field_on_its_own_line_in_order() {
        let response = RecommendationsResponse {
            member_id: "M001".to_string(),
            recommendations: vec![
                rec("Cooking Class", "Food", "You eat out often."),
                rec("Wine Tasting", "Food", "You like Cafe X."),
            ],
        };

        let text = render_text(&response);

        assert_eq!(
            text,
            "Personalised Recommendations for Member M001:\n\n\
             Experience Title: Cooking Class\n\
             Category: Food\n\
             Why it's recommended: You eat out often.\n\n\
             Experience Title: Wine Tasting\n\
             Category: Food\n\
             Why it's recommended: You like Cafe X.\n\n"
        );
    }

    #[test]
    fn test_render_text_with_no_recommendations_is_header_only() {
        let response = RecommendationsResponse {
            member_id: "M003".to_string(),
            recommendations: vec![],
        };
        assert_eq!(
            render_text(&response),
            "Personalised Recommendations for Member M003:\n\n"
        );
    }
}
