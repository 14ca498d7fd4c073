// All model prompt constants for the recommendation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System message template. Replace `{structured_output_instruction}` before sending.
pub const RECOMMENDATION_SYSTEM_TEMPLATE: &str = "\
You are a helpful assistant for a member rewards programme. \
You recommend experiences to a member based on their profile, the experiences \
they have already redeemed, and their recent card spending. \
Only recommend experiences from the list of available experiences you are given, \
using their exact titles and categories. \
For each recommendation return an object with `title`, `category`, and a short, \
personal `explanation` of why it suits the member, and return them under a \
`recommendations` array ordered from best to weakest match. \
{structured_output_instruction}";

/// Member prompt template.
/// Replace: {name}, {location}, {past_experiences}, {available_experiences}, {transactions}
pub const MEMBER_PROMPT_TEMPLATE: &str = r#"Recommend experiences for the following member.

MEMBER
Name: {name}
Location: {location}

PAST EXPERIENCES (already redeemed, do NOT recommend again):
{past_experiences}

AVAILABLE EXPERIENCES (title, category):
{available_experiences}

RECENT CARD TRANSACTIONS (merchant, category, amount):
{transactions}

Use the member's past experiences and spending patterns to pick the available
experiences they are most likely to enjoy. Explain each choice with reference to
their history."#;

/// Rendered in place of a list section that has no entries.
pub const EMPTY_SECTION: &str = "- None";
