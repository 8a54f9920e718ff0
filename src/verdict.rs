//! Verdict types returned by the password validator.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Strength score {0} is out of range (0-4)")]
    OutOfRange(u8),
}

/// Entropy score on the 0 to 4 scale used by password estimators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const ZERO: StrengthScore = StrengthScore(0);
    pub const MAX: StrengthScore = StrengthScore(4);

    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX.0 {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Builds a score, clamping anything above 4.
    pub const fn saturating(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character classes every accepted password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Digit,
    Symbol,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "an uppercase letter",
            CharClass::Digit => "a number",
            CharClass::Symbol => "a symbol",
        };
        f.write_str(name)
    }
}

/// Why a password was rejected. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    TooShort { min_length: usize },
    MissingCharacterClasses(Vec<CharClass>),
    TooWeak {
        score: StrengthScore,
        required: StrengthScore,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::TooShort { min_length } => {
                write!(f, "Password must be at least {} characters", min_length)
            }
            RejectionReason::MissingCharacterClasses(missing) => {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                write!(f, "Password must contain {}", names.join(", "))
            }
            RejectionReason::TooWeak { score, required } => write!(
                f,
                "Password is too easy to guess (strength {} of 4, at least {} required)",
                score, required
            ),
        }
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordVerdict {
    reason: Option<RejectionReason>,
    score: StrengthScore,
}

impl PasswordVerdict {
    pub fn accepted(score: StrengthScore) -> Self {
        Self { reason: None, score }
    }

    pub fn rejected(reason: RejectionReason, score: StrengthScore) -> Self {
        Self {
            reason: Some(reason),
            score,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.reason.is_none()
    }

    pub fn reason(&self) -> Option<&RejectionReason> {
        self.reason.as_ref()
    }

    pub fn score(&self) -> StrengthScore {
        self.score
    }

    /// User-facing error message; empty when the password was accepted.
    pub fn error(&self) -> String {
        self.reason
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
