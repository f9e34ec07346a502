//! Heuristic password strength.
//!
//! A password earns one point for each character class it uses and one point
//! each for reaching 8 and 16 bytes, for a score between 0 and 6.

use std::fmt;

pub const MAX_SCORE: u8 = 6;
pub const LONG_PASSWORD: usize = 8;
pub const VERY_LONG_PASSWORD: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    /// Symbols, whitespace, control bytes and every byte of a non-ASCII character.
    Other,
}

pub fn classify(byte: u8) -> CharClass {
    match byte {
        b'A'..=b'Z' => CharClass::Upper,
        b'a'..=b'z' => CharClass::Lower,
        b'0'..=b'9' => CharClass::Digit,
        _ => CharClass::Other,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassPresence {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub other: bool,
}

impl ClassPresence {
    pub fn scan(password: impl AsRef<[u8]>) -> Self {
        password
            .as_ref()
            .iter()
            .fold(Self::default(), |mut presence, &byte| {
                match classify(byte) {
                    CharClass::Upper => presence.upper = true,
                    CharClass::Lower => presence.lower = true,
                    CharClass::Digit => presence.digit = true,
                    CharClass::Other => presence.other = true,
                }
                presence
            })
    }

    pub fn count(&self) -> u8 {
        [self.upper, self.lower, self.digit, self.other]
            .into_iter()
            .filter(|present| *present)
            .count() as u8
    }
}

/// Scores raw bytes; input does not have to be valid UTF-8.
pub fn score(password: impl AsRef<[u8]>) -> u8 {
    let password = password.as_ref();
    let mut score = ClassPresence::scan(password).count();

    if password.len() >= LONG_PASSWORD {
        score += 1;
    }
    if password.len() >= VERY_LONG_PASSWORD {
        score += 1;
    }

    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Weak,
    Medium,
    Good,
    VeryGood,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            MAX_SCORE => Verdict::VeryGood,
            s if s >= 4 => Verdict::Good,
            s if s >= 3 => Verdict::Medium,
            _ => Verdict::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::VeryGood => "very good",
            Verdict::Good => "good, but can do better",
            Verdict::Medium => "medium, try to improve",
            Verdict::Weak => "weak, generate a new one",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn verdict(score: u8) -> &'static str {
    Verdict::from_score(score).as_str()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub verdict: Verdict,
}

pub fn assess(password: impl AsRef<[u8]>) -> Strength {
    let score = score(password);
    Strength {
        score,
        verdict: Verdict::from_score(score),
    }
}
