// Experience recommendations: prompt construction from the dataset,
// a single structured model call, and the HTTP surface over it.
// All model calls go through llm_client, never to the provider directly.

pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod recommender;
pub mod text;
