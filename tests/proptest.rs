//! Property-based tests for slackpack using proptest.
//!
//! These tests verify invariants of markup rewriting and record filtering.

use proptest::prelude::*;

use slackpack::config::Zone;
use slackpack::core::markup::{rewrite, rewrite_channels, rewrite_mentions, strip_subteams};
use slackpack::core::normalize::{Exclusion, Normalizer, exclusion, parse_epoch_seconds};
use slackpack::message::{User, UserTable};
use slackpack::parsing::RawMessage;

/// Strategy for user ids like `U0A1B2C`.
fn arb_user_id() -> impl Strategy<Value = String> {
    "U[0-9A-Z]{3,8}"
}

/// Strategy for display names without markup characters.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z .]{0,15}"
}

/// Strategy for free text that never opens a markup token.
fn arb_plain_text() -> impl Strategy<Value = String> {
    "[^<]{0,80}"
}

fn raw(kind: Option<&str>, subtype: Option<&str>, parent: Option<&str>) -> RawMessage {
    let mut obj = serde_json::Map::new();
    if let Some(k) = kind {
        obj.insert("type".into(), k.into());
    }
    if let Some(s) = subtype {
        obj.insert("subtype".into(), s.into());
    }
    if let Some(p) = parent {
        obj.insert("parent_user_id".into(), p.into());
    }
    obj.insert("user".into(), "U1".into());
    obj.insert("ts".into(), "1609459200.000100".into());
    obj.insert("text".into(), "hello".into());
    serde_json::from_value(serde_json::Value::Object(obj)).unwrap()
}

// =========================================================================
// Markup properties
// =========================================================================

proptest! {
    #[test]
    fn text_without_markup_is_unchanged(text in arb_plain_text()) {
        let users = UserTable::new();
        prop_assert_eq!(rewrite(&text, &users, 999), text);
    }

    #[test]
    fn known_mention_resolves(id in arb_user_id(), name in arb_name(), prefix in arb_plain_text()) {
        let users: UserTable = [User::new(id.clone(), name.clone())].into_iter().collect();
        let text = format!("{prefix}<@{id}>");
        prop_assert_eq!(rewrite_mentions(&text, &users, 999), format!("{prefix}@{name}"));
    }

    #[test]
    fn repeated_mention_all_occurrences_rewritten(id in arb_user_id(), name in arb_name(), n in 1usize..6) {
        let users: UserTable = [User::new(id.clone(), name.clone())].into_iter().collect();
        let text = vec![format!("<@{id}>"); n].join(" ");
        let expected = vec![format!("@{name}"); n].join(" ");
        prop_assert_eq!(rewrite_mentions(&text, &users, 999), expected);
    }

    #[test]
    fn unknown_mention_becomes_bare_at(id in arb_user_id()) {
        let users = UserTable::new();
        prop_assert_eq!(rewrite_mentions(&format!("<@{id}>"), &users, 999), "@");
    }

    #[test]
    fn zero_limit_rewrites_nothing(id in arb_user_id(), name in arb_name()) {
        let users: UserTable = [User::new(id.clone(), name)].into_iter().collect();
        let text = format!("<@{id}> <!subteam^S1|@team> <#C1|general>");
        prop_assert_eq!(rewrite(&text, &users, 0), text);
    }

    #[test]
    fn single_subteam_unwrapped(label in "[a-z][a-z-]{0,12}", before in arb_plain_text()) {
        let text = format!("{before}<!subteam^S01|@{label}>");
        prop_assert_eq!(strip_subteams(&text, 999), format!("{before}@{label}"));
    }

    #[test]
    fn single_channel_tag_unwrapped(label in "[a-z][a-z0-9_-]{0,20}", before in "[^<|>]{0,40}") {
        let text = format!("{before}<#C0123|{label}>");
        prop_assert_eq!(rewrite_channels(&text, 999), format!("{before}#{label}"));
    }

    #[test]
    fn rewrite_never_panics(text in ".{0,200}") {
        let users: UserTable = [User::new("U1", "Alice")].into_iter().collect();
        let _ = rewrite(&text, &users, 999);
    }
}

// =========================================================================
// Filtering and timestamps
// =========================================================================

proptest! {
    #[test]
    fn non_message_types_excluded(kind in "[a-z_]{1,12}") {
        prop_assume!(kind != "message");
        let record = raw(Some(kind.as_str()), None, None);
        prop_assert_eq!(exclusion(&record), Some(Exclusion::NotMessage));
    }

    #[test]
    fn any_parent_marks_thread_reply(parent in "[A-Z0-9]{1,10}") {
        let record = raw(Some("message"), None, Some(parent.as_str()));
        prop_assert_eq!(exclusion(&record), Some(Exclusion::ThreadReply));
    }

    #[test]
    fn other_subtypes_kept(subtype in "[a-z_]{1,16}") {
        prop_assume!(subtype != "channel_join");
        let record = raw(Some("message"), Some(subtype.as_str()), None);
        prop_assert_eq!(exclusion(&record), None);
    }

    #[test]
    fn epoch_fraction_is_truncated(secs in 0i64..4_000_000_000, micros in 0u32..1_000_000) {
        let ts = format!("{secs}.{micros:06}");
        prop_assert_eq!(parse_epoch_seconds(&ts).unwrap(), secs);
    }

    #[test]
    fn normalized_time_matches_epoch(secs in 0i64..4_000_000_000) {
        let users = UserTable::new();
        let normalizer = Normalizer::with_zone(&users, Zone::utc());
        let record: RawMessage = serde_json::from_value(serde_json::json!({
            "type": "message", "user": "U1", "ts": format!("{secs}.5"), "text": "x"
        })).unwrap();

        let msg = normalizer.normalize(&record).unwrap().unwrap();
        prop_assert_eq!(msg.time.timestamp(), secs);
        prop_assert_eq!(msg.user.as_str(), "");
    }
}
