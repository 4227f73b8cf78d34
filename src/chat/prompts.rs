/// Prompt for questions the knowledge base could not answer.
pub fn fallback_prompt(query: &str) -> String {
    format!(
        r#"You are a helpful customer support AI.
The user asked: "{query}".
We do not have a specific FAQ for this in our local database.
Please provide a helpful, polite, and concise general answer.
If the question is completely unrelated to technology or business, politely decline to answer."#
    )
}

/// Prompt for rephrasing a matched FAQ answer.
pub fn enhance_prompt(answer: &str, query: &str) -> String {
    format!(
        r#"The user asked: "{query}".
Our official FAQ answer is: "{answer}".
Rephrase the FAQ answer to be more conversational and directly address the user's specific phrasing, but do not change the factual meaning."#
    )
}
