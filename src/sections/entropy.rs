//! Entropy section - asks the external estimator how guessable the password is.

use secrecy::{ExposeSecret, SecretString};
use crate::scorer::EntropyScorer;
use crate::verdict::{RejectionReason, StrengthScore};

/// Lowest estimator score an accepted password may have.
pub const MIN_ENTROPY_SCORE: StrengthScore = StrengthScore::saturating(3);

/// Scores the password and rejects it below [`MIN_ENTROPY_SCORE`].
///
/// The score is returned in both cases so the verdict can echo it.
pub fn entropy_section<S>(password: &SecretString, scorer: &S) -> (StrengthScore, Option<RejectionReason>)
where
    S: EntropyScorer + ?Sized,
{
    let score = scorer.score(password.expose_secret());
    if score < MIN_ENTROPY_SCORE {
        return (
            score,
            Some(RejectionReason::TooWeak {
                score,
                required: MIN_ENTROPY_SCORE,
            }),
        );
    }
    (score, None)
}
