mod ask;
mod browse;
mod config;
mod manage;

use crate::state::Context;

/// FAQ Desk - knowledge base support assistant
#[poise::command(
    slash_command,
    subcommands(
        "ask::ask",
        "browse::search",
        "browse::list",
        "browse::show",
        "manage::add",
        "manage::delete",
        "config::config"
    )
)]
pub async fn faq(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}

/// Whether the invoking user may change the knowledge base or settings.
pub(crate) fn is_admin(ctx: &Context<'_>) -> bool {
    ctx.data().is_admin(ctx.author().id.get())
}

/// Send a message in Discord-safe chunks (max 1990 chars).
pub(crate) async fn send_chunked(ctx: &Context<'_>, text: &str) -> Result<(), anyhow::Error> {
    for chunk in split_chunks(text, 1990) {
        ctx.say(chunk).await?;
    }
    Ok(())
}

/// Split on the last newline, then the last space, before `max` bytes.
fn split_chunks(text: &str, max: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut remaining = text;
    while !remaining.is_empty() {
        let mut chunk_len = remaining.len().min(max);
        while !remaining.is_char_boundary(chunk_len) {
            chunk_len -= 1;
        }
        let split_at = if chunk_len < remaining.len() {
            remaining[..chunk_len]
                .rfind('\n')
                .or_else(|| remaining[..chunk_len].rfind(' '))
                .map(|i| i + 1)
                .unwrap_or(chunk_len)
        } else {
            chunk_len
        };
        chunks.push(&remaining[..split_at]);
        remaining = &remaining[split_at..];
    }
    chunks
}

/// Score as a whole percentage, e.g. `0.4567` -> `46%`.
pub(crate) fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_chunks("hello", 1990), vec!["hello"]);
        assert!(split_chunks("", 1990).is_empty());
    }

    #[test]
    fn test_splits_on_newline_then_space() {
        assert_eq!(split_chunks("aaaa\nbbbb", 6), vec!["aaaa\n", "bbbb"]);
        assert_eq!(split_chunks("aa bb cc", 6), vec!["aa bb ", "cc"]);
        assert_eq!(split_chunks("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_never_splits_inside_a_char() {
        let chunks = split_chunks("ééé", 3);
        assert_eq!(chunks, vec!["é", "é", "é"]);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.4567), "46%");
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(0.0), "0%");
    }
}
