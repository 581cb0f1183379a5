//! Slack export record structures.

use serde::Deserialize;

/// One entry of `users.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub profile: Option<RawProfile>,
}

/// The `profile` object of a roster entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
}

impl RawUser {
    /// Identifier, empty when absent.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Display name if non-empty, otherwise real name (possibly empty).
    pub fn resolved_name(&self) -> &str {
        let Some(profile) = &self.profile else {
            return "";
        };
        match profile.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => profile.real_name.as_deref().unwrap_or(""),
        }
    }
}

/// One record of a daily batch file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMessage {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub parent_user_id: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawMessage {
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn subtype(&self) -> &str {
        self.subtype.as_deref().unwrap_or("")
    }

    pub fn parent_user_id(&self) -> &str {
        self.parent_user_id.as_deref().unwrap_or("")
    }

    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or("")
    }

    pub fn ts(&self) -> &str {
        self.ts.as_deref().unwrap_or("")
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
