//! Prompt Builder: turns a member's dataset record into the user prompt.
//!
//! Steps:
//! 1. Resolve the member (absent → `None`, which callers surface as not-found)
//! 2. Resolve past redemptions against the catalog; unknown references are dropped
//! 3. Collect every catalog experience the member has not redeemed, in catalog order
//! 4. Summarise card transactions in input order with a currency-prefixed amount
//! 5. Render `MEMBER_PROMPT_TEMPLATE`

use std::collections::HashSet;

use serde_json::Number;

use crate::dataset::DatasetIndex;
use crate::models::dataset::Experience;
use crate::recommendation::prompts::{EMPTY_SECTION, MEMBER_PROMPT_TEMPLATE};

pub const CURRENCY_SYMBOL: &str = "£";

/// Title and category of a catalog experience, as shown to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceSummary<'a> {
    pub experience_id: &'a str,
    pub title: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary<'a> {
    pub merchant: &'a str,
    pub category: &'a str,
    pub amount: String,
}

/// Everything the member prompt is rendered from.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub name: &'a str,
    pub location: &'a str,
    /// One entry per distinct redeemed experience, in redemption order.
    pub past_experiences: Vec<ExperienceSummary<'a>>,
    pub available_experiences: Vec<ExperienceSummary<'a>>,
    pub transactions: Vec<TransactionSummary<'a>>,
}

/// Prepares the prompt inputs for `member_id`, or `None` if the member is unknown.
pub fn prepare_context<'a>(index: &'a DatasetIndex, member_id: &str) -> Option<PromptContext<'a>> {
    let member = index.find_member(member_id)?;

    let mut redeemed_ids: HashSet<&str> = HashSet::new();
    let mut past_experiences = Vec::new();
    for offer in &member.past_redeemed_offers {
        let Some(experience) = index.find_experience(&offer.experience_id) else {
            continue;
        };
        if redeemed_ids.insert(&experience.experience_id) {
            past_experiences.push(summarize(experience));
        }
    }

    let available_experiences = index
        .experiences()
        .filter(|experience| !redeemed_ids.contains(experience.experience_id.as_str()))
        .map(summarize)
        .collect();

    let transactions = member
        .card_transactions
        .iter()
        .map(|t| TransactionSummary {
            merchant: &t.merchant_name,
            category: &t.category,
            amount: format_amount(&t.amount),
        })
        .collect();

    Some(PromptContext {
        name: &member.name,
        location: &member.location,
        past_experiences,
        available_experiences,
        transactions,
    })
}

/// Builds the user prompt for `member_id`, or `None` if the member is unknown.
pub fn build_prompt(index: &DatasetIndex, member_id: &str) -> Option<String> {
    prepare_context(index, member_id).map(|context| render_prompt(&context))
}

pub fn render_prompt(context: &PromptContext<'_>) -> String {
    let past_experiences = render_lines(context.past_experiences.iter().map(experience_line));
    let available_experiences =
        render_lines(context.available_experiences.iter().map(experience_line));
    let transactions = render_lines(context.transactions.iter().map(|t| {
        format!("- {}, {}, {}", t.merchant, t.category, t.amount)
    }));

    fill_template(
        MEMBER_PROMPT_TEMPLATE,
        &[
            ("name", context.name),
            ("location", context.location),
            ("past_experiences", past_experiences.as_str()),
            ("available_experiences", available_experiences.as_str()),
            ("transactions", transactions.as_str()),
        ],
    )
}

/// Substitutes `{key}` placeholders in one pass over `template`. Inserted
/// values are never rescanned, so dataset text containing braces is kept as-is.
/// Unknown `{...}` sequences are copied through.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let value = tail.find('}').and_then(|close| {
            let key = &tail[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                rendered.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = tail;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Renders the stored amount verbatim behind the currency symbol.
pub fn format_amount(amount: &Number) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

fn summarize(experience: &Experience) -> ExperienceSummary<'_> {
    ExperienceSummary {
        experience_id: &experience.experience_id,
        title: &experience.title,
        category: experience.category_or_unknown(),
    }
}

fn experience_line(experience: &ExperienceSummary<'_>) -> String {
    format!("- {} ({})", experience.title, experience.category)
}

fn render_lines(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines.collect();
    if lines.is_empty() {
        EMPTY_SECTION.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_index;

    /// Returns the lines under `header` up to the next blank line.
    fn section<'p>(prompt: &'p str, header: &str) -> Vec<&'p str> {
        prompt
            .lines()
            .skip_while(|line| !line.starts_with(header))
            .skip(1)
            .take_while(|line| !line.trim().is_empty())
            .collect()
    }

    #[test]
    fn test_unknown_member_has_no_prompt() {
        let index = fixture_index();
        assert!(build_prompt(&index, "M999").is_none());
        assert!(prepare_context(&index, "M999").is_none());
    }

    #[test]
    fn test_prompt_for_ava() {
        let index = fixture_index();
        let prompt = build_prompt(&index, "M001").unwrap();

        assert!(prompt.contains("Name: Ava"));
        assert!(prompt.contains("Location: London"));
        assert_eq!(
            section(&prompt, "PAST EXPERIENCES"),
            vec!["- Spa Day (Wellness)"]
        );
        assert_eq!(
            section(&prompt, "AVAILABLE EXPERIENCES"),
            vec!["- Cooking Class (Food)"]
        );
        assert_eq!(
            section(&prompt, "RECENT CARD TRANSACTIONS"),
            vec!["- Cafe X, Food, £12.5"]
        );
    }

    #[test]
    fn test_available_and_past_partition_the_catalog() {
        let index = fixture_index();
        for member_id in ["M001", "M002", "M003"] {
            let context = prepare_context(&index, member_id).unwrap();
            let past: HashSet<&str> = context
                .past_experiences
                .iter()
                .map(|e| e.experience_id)
                .collect();
            let available: HashSet<&str> = context
                .available_experiences
                .iter()
                .map(|e| e.experience_id)
                .collect();
            let catalog: HashSet<&str> = index
                .experiences()
                .map(|e| e.experience_id.as_str())
                .collect();

            assert!(past.is_disjoint(&available), "{member_id}");
            let union: HashSet<&str> = past.union(&available).copied().collect();
            assert_eq!(union, catalog, "{member_id}");
        }
    }

    #[test]
    fn test_unresolvable_redemption_is_silently_dropped() {
        let index = fixture_index();
        let context = prepare_context(&index, "M002").unwrap();

        let past: Vec<&str> = context
            .past_experiences
            .iter()
            .map(|e| e.experience_id)
            .collect();
        // E404 is not in the catalog; E2 is redeemed twice but listed once.
        assert_eq!(past, vec!["E2"]);
    }

    #[test]
    fn test_member_without_history_sees_whole_catalog() {
        let index = fixture_index();
        let context = prepare_context(&index, "M003").unwrap();
        assert!(context.past_experiences.is_empty());
        assert!(context.transactions.is_empty());

        let titles: Vec<&str> = context
            .available_experiences
            .iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Spa Day", "Cooking Class"]);

        let prompt = render_prompt(&context);
        assert_eq!(section(&prompt, "PAST EXPERIENCES"), vec![EMPTY_SECTION]);
        assert_eq!(
            section(&prompt, "RECENT CARD TRANSACTIONS"),
            vec![EMPTY_SECTION]
        );
    }

    #[test]
    fn test_transactions_keep_input_order_and_raw_amounts() {
        let index = fixture_index();
        let context = prepare_context(&index, "M002").unwrap();
        let rendered: Vec<String> = context
            .transactions
            .iter()
            .map(|t| format!("{}, {}, {}", t.merchant, t.category, t.amount))
            .collect();
        assert_eq!(
            rendered,
            vec!["Gym Co, Fitness, £40", "Book Nook, Books, £9.99"]
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let index = fixture_index();
        assert_eq!(build_prompt(&index, "M002"), build_prompt(&index, "M002"));
    }

    #[test]
    fn test_format_amount_uses_stored_value() {
        let float: Number = serde_json::from_str("12.5").unwrap();
        let whole_float: Number = serde_json::from_str("12.0").unwrap();
        let integer: Number = serde_json::from_str("12").unwrap();
        assert_eq!(format_amount(&float), "£12.5");
        assert_eq!(format_amount(&whole_float), "£12.0");
        assert_eq!(format_amount(&integer), "£12");
    }

    #[test]
    fn test_dataset_text_with_placeholder_tokens_is_kept_verbatim() {
        let index = DatasetIndex::from_json_str(
            r#"{
                "members": [{
                    "member_id": "M1",
                    "name": "Ava {transactions}",
                    "location": "London",
                    "past_redeemed_offers": [{"experience_id": "E1"}],
                    "card_transactions": [
                        {"merchant_name": "Shop {name}", "category": "Food", "amount": 1}
                    ]
                }],
                "experiences": [
                    {"experience_id": "E1", "title": "Night in {available_experiences}", "category": "X"},
                    {"experience_id": "E2", "title": "Tour of {location}", "category": "X"}
                ]
            }"#,
        )
        .unwrap();

        let prompt = build_prompt(&index, "M1").unwrap();

        assert!(prompt.contains("Name: Ava {transactions}\n"));
        assert_eq!(
            section(&prompt, "PAST EXPERIENCES"),
            vec!["- Night in {available_experiences} (X)"]
        );
        assert_eq!(
            section(&prompt, "AVAILABLE EXPERIENCES"),
            vec!["- Tour of {location} (X)"]
        );
        assert_eq!(
            section(&prompt, "RECENT CARD TRANSACTIONS"),
            vec!["- Shop {name}, Food, £1"]
        );
    }

    #[test]
    fn test_fill_template_copies_unknown_and_unclosed_braces() {
        let filled = fill_template("{a} {b} {a", &[("a", "1")]);
        assert_eq!(filled, "1 {b} {a");
    }

    #[test]
    fn test_unknown_category_is_rendered() {
        let index = DatasetIndex::from_json_str(
            r#"{
                "members": [{"member_id": "M1", "name": "Di", "location": "Hull"}],
                "experiences": [{"experience_id": "E9", "title": "Mystery Tour"}]
            }"#,
        )
        .unwrap();
        let prompt = build_prompt(&index, "M1").unwrap();
        assert!(prompt.contains("- Mystery Tour (Unknown)"));
    }
}
