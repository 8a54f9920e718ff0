//! Entropy scorers - pluggable password-guessability estimators.

use crate::blacklist::Blacklist;
use crate::verdict::StrengthScore;

/// Estimates how hard a password is to guess, on a 0 to 4 scale.
///
/// Implemented for any `Fn(&str) -> StrengthScore`.
pub trait EntropyScorer {
    fn score(&self, password: &str) -> StrengthScore;
}

impl<F> EntropyScorer for F
where
    F: Fn(&str) -> StrengthScore,
{
    fn score(&self, password: &str) -> StrengthScore {
        self(password)
    }
}

/// Dictionary and pattern based estimator backed by `zxcvbn`.
#[cfg(feature = "zxcvbn")]
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnScorer {
    user_inputs: Vec<String>,
}

#[cfg(feature = "zxcvbn")]
impl ZxcvbnScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Penalizes passwords built from the account's email address.
    pub fn with_email(email: &str) -> Self {
        let user_inputs = email
            .split(['@', '.'])
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Self { user_inputs }
    }
}

#[cfg(feature = "zxcvbn")]
impl EntropyScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> StrengthScore {
        use zxcvbn::Score;

        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let estimate = zxcvbn::zxcvbn(password, &inputs).score();
        let value = [Score::One, Score::Two, Score::Three, Score::Four]
            .into_iter()
            .filter(|step| &estimate >= step)
            .count();
        StrengthScore::saturating(value as u8)
    }
}

/// Scores blacklisted passwords 0 and delegates everything else.
#[derive(Debug, Clone)]
pub struct BlacklistScorer<S> {
    blacklist: Blacklist,
    inner: S,
}

impl<S: EntropyScorer> BlacklistScorer<S> {
    pub fn new(blacklist: Blacklist, inner: S) -> Self {
        Self { blacklist, inner }
    }
}

impl<S: EntropyScorer> EntropyScorer for BlacklistScorer<S> {
    fn score(&self, password: &str) -> StrengthScore {
        if self.blacklist.contains(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected by blacklist");
            return StrengthScore::ZERO;
        }
        self.inner.score(password)
    }
}
