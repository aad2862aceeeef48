use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Counter {
    Concentration,
    Difficulty,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::Concentration, Counter::Difficulty];

    pub fn as_str(self) -> &'static str {
        match self {
            Counter::Concentration => "concentration",
            Counter::Difficulty => "difficulty",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCounter(pub String);

impl fmt::Display for UnknownCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown counter '{}', expected 'concentration' or 'difficulty'",
            self.0
        )
    }
}

impl std::error::Error for UnknownCounter {}

impl FromStr for Counter {
    type Err = UnknownCounter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "concentration" => Ok(Counter::Concentration),
            "difficulty" => Ok(Counter::Difficulty),
            other => Err(UnknownCounter(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub date: String,
    pub concentration: u64,
    pub difficulty: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffers {
    pub concentration: String,
    pub difficulty: String,
}

impl InputBuffers {
    pub fn get(&self, counter: Counter) -> &str {
        match counter {
            Counter::Concentration => &self.concentration,
            Counter::Difficulty => &self.difficulty,
        }
    }

    pub fn get_mut(&mut self, counter: Counter) -> &mut String {
        match counter {
            Counter::Concentration => &mut self.concentration,
            Counter::Difficulty => &mut self.difficulty,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub value: String,
}
