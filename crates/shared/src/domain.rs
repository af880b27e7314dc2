use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(PostId);
id_newtype!(UserId);

/// A post as the mock service returns it. Ids are server-assigned and not
/// guaranteed stable between calls (the backing service does not persist).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: UserId,
    pub id: PostId,
    pub title: String,
    pub body: String,
}

/// User-supplied payload for a create request, built fresh per submission.
///
/// `user_id` is `None` when the raw form value did not parse as an integer;
/// it still serializes (as JSON `null`) so the request body always carries a
/// `userId` field, matching what the form would have sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub user_id: Option<i64>,
    pub title: String,
    pub body: String,
}

impl PostDraft {
    /// Builds a draft from raw form field values. The user id is read
    /// leniently: the leading integer of the field if there is one,
    /// otherwise `None`, passed through to the service uncorrected.
    pub fn from_form(user_id: &str, title: &str, body: &str) -> Self {
        Self {
            user_id: leading_integer(user_id),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Optional sign followed by the leading run of decimal digits; trailing
/// text is ignored. No digits at all yields `None`.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (rest, negative) = match trimmed.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (trimmed.strip_prefix('+').unwrap_or(trimmed), false),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
