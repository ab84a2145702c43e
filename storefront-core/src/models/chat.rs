use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("unknown sender '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Timestamps are kept at microsecond precision, the resolution of a
    /// Postgres `timestamptz`, so ordering is the same in every store.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }

    /// Bot reply stamped strictly after `question`, by at least one microsecond.
    pub fn reply_to(question: &ChatMessage, text: impl Into<String>) -> Self {
        let mut reply = Self::bot(text);
        if reply.timestamp <= question.timestamp {
            reply.timestamp = question.timestamp.trunc_subsecs(6) + Duration::microseconds(1);
        }
        reply
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}
