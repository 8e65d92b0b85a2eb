use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// Identifier of a remote user. The API may send it as a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One entry of the remote user list. Fields other than these are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    /// Record with a numeric id, the shape the reference API returns.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::Number(id),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Decode a response body as a JSON array of users.
pub fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_ignores_extra_fields() {
        let body = br#"[{"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","address":{"city":"Gwenborough"}}]"#;
        let users = parse_users(body).unwrap();
        assert_eq!(users, vec![UserRecord::new(1, "Leanne Graham", "Sincere@april.biz")]);
    }

    #[test]
    fn accepts_string_ids() {
        let body = br#"[{"id":"u-7","name":"Ervin Howell","email":"Shanna@melissa.tv"}]"#;
        let users = parse_users(body).unwrap();
        assert_eq!(users[0].id, UserId::Text("u-7".into()));
        assert_eq!(users[0].id.to_string(), "u-7");
    }

    #[test]
    fn rejects_missing_fields_and_non_arrays() {
        assert!(parse_users(br#"[{"id":1,"name":"No Email"}]"#).is_err());
        assert!(parse_users(br#"{"id":1,"name":"a","email":"b"}"#).is_err());
        assert!(parse_users(b"<html>").is_err());
    }
}
