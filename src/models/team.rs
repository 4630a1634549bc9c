use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub code: String,
    pub name: String,
    pub color1: String,
    pub color2: String,
}

impl Team {
    pub fn new(code: &str, name: &str, color1: &str, color2: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            color1: color1.to_string(),
            color2: color2.to_string(),
        }
    }
}

/// A team together with the value that put it on a stats leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamValue {
    pub code: String,
    pub name: String,
    pub value: i64,
}
