//! The closed set of lesson topics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A lesson topic. The set is fixed at build time; the snake_case string
/// form is used both in persisted records and in callback payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    #[default]
    Basics,
    Syntax,
    Oop,
    Files,
    Frameworks,
    Tools,
    DataScience,
    Async,
    Install,
}

impl Topic {
    /// All topics, in menu order.
    pub const ALL: [Topic; 9] = [
        Topic::Basics,
        Topic::Syntax,
        Topic::Oop,
        Topic::Files,
        Topic::Frameworks,
        Topic::Tools,
        Topic::DataScience,
        Topic::Async,
        Topic::Install,
    ];

    /// The stable string form used in callbacks and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Basics => "basics",
            Topic::Syntax => "syntax",
            Topic::Oop => "oop",
            Topic::Files => "files",
            Topic::Frameworks => "frameworks",
            Topic::Tools => "tools",
            Topic::DataScience => "data_science",
            Topic::Async => "async",
            Topic::Install => "install",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopic(pub String);

impl fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topic: {}", self.0)
    }
}

impl std::error::Error for UnknownTopic {}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_form_roundtrips_for_all_topics() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
        }
    }

    #[test]
    fn unknown_string_is_rejected() {
        assert!("quantum".parse::<Topic>().is_err());
    }

    #[test]
    fn serde_form_matches_as_str() {
        let json = serde_json::to_string(&Topic::DataScience).unwrap();
        assert_eq!(json, "\"data_science\"");
    }
}
