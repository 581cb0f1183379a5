//! Rewriting of Slack's inline markup.
//!
//! Three passes run in a fixed order, each over the output of the previous:
//!
//! 1. [`rewrite_mentions`]: `<@U123>` becomes `@DisplayName`
//! 2. [`strip_subteams`]: `<!subteam^S1|@team>` becomes `@team`
//! 3. [`rewrite_channels`]: `<#C123|general>` becomes `#general`
//!
//! The order matters. Mention substitution introduces `@` characters that the
//! subteam pattern keys on, and inputs with overlapping token shapes only come
//! out identical when the passes run exactly like this. Use [`rewrite`] to get
//! all three.
//!
//! # Example
//!
//! ```rust
//! use slackpack::core::markup::rewrite;
//! use slackpack::message::{User, UserTable};
//!
//! let users: UserTable = [User::new("U1", "Alice")].into_iter().collect();
//! let text = rewrite("<@U1> see <#C9|random>", &users, 999);
//! assert_eq!(text, "@Alice see #random");
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::message::UserTable;

fn mention_re() -> &'static Regex {
    static MENTION_RE: OnceLock<Regex> = OnceLock::new();
    MENTION_RE.get_or_init(|| Regex::new(r"<@([^<>@]*)>").expect("valid mention regex"))
}

fn subteam_re() -> &'static Regex {
    static SUBTEAM_RE: OnceLock<Regex> = OnceLock::new();
    SUBTEAM_RE.get_or_init(|| Regex::new(r"<!subteam[^@]*([^>]*)>").expect("valid subteam regex"))
}

fn channel_re() -> &'static Regex {
    static CHANNEL_RE: OnceLock<Regex> = OnceLock::new();
    CHANNEL_RE.get_or_init(|| Regex::new(r"<#.*\|(.*)>").expect("valid channel regex"))
}

/// Collects `(whole token, capture)` pairs, at most `limit` of them.
fn scan(re: &Regex, text: &str, limit: usize) -> Vec<(String, String)> {
    re.captures_iter(text)
        .take(limit)
        .map(|caps| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let inner = caps.get(1).map_or("", |m| m.as_str());
            (whole.to_string(), inner.to_string())
        })
        .collect()
}

/// Replaces every `<@ID>` token with `@` followed by the user's resolved name.
///
/// Tokens are found in one scan of the input. Each found token then replaces
/// *all* of its occurrences in the progressively rewritten string. Unknown ids
/// resolve to an empty name, leaving a bare `@`.
pub fn rewrite_mentions(text: &str, users: &UserTable, limit: usize) -> String {
    let mut out = text.to_string();
    for (token, id) in scan(mention_re(), text, limit) {
        let replacement = format!("@{}", users.name_of(&id));
        out = out.replace(&token, &replacement);
    }
    out
}

/// Drops the `<!subteam...` wrapper, keeping the trailing `@label`.
///
/// Only the first occurrence of each matched token is replaced.
pub fn strip_subteams(text: &str, limit: usize) -> String {
    let mut out = text.to_string();
    for (token, label) in scan(subteam_re(), text, limit) {
        out = out.replacen(&token, &label, 1);
    }
    out
}

/// Turns `<#CHANNEL|label>` into `#label`.
///
/// The part before `|` is matched greedily. Only the first occurrence of each
/// matched token is replaced.
pub fn rewrite_channels(text: &str, limit: usize) -> String {
    let mut out = text.to_string();
    for (token, label) in scan(channel_re(), text, limit) {
        out = out.replacen(&token, &format!("#{label}"), 1);
    }
    out
}

/// Runs all three passes: mentions, then subteams, then channels.
pub fn rewrite(text: &str, users: &UserTable, limit: usize) -> String {
    let text = rewrite_mentions(text, users, limit);
    let text = strip_subteams(&text, limit);
    rewrite_channels(&text, limit)
}
