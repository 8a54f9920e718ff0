//! Password validator - runs the policy sections in order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::scorer::EntropyScorer;
use crate::sections::{character_class_section, entropy_section, length_section};
use crate::verdict::{PasswordVerdict, StrengthScore};

/// Validates a password against the account password policy.
///
/// Rules run in this order and the first failure wins:
/// 1. at least [`MIN_LENGTH`](crate::MIN_LENGTH) characters
/// 2. an uppercase letter, a digit and a symbol
/// 3. an estimator score of at least [`MIN_ENTROPY_SCORE`](crate::MIN_ENTROPY_SCORE)
///
/// Structural failures carry a score of 0 and never reach the scorer.
/// An entropy failure echoes the estimator's score.
pub fn validate_password<S>(password: &SecretString, scorer: &S) -> PasswordVerdict
where
    S: EntropyScorer + ?Sized,
{
    let structural: [(&str, fn(&SecretString) -> crate::sections::SectionResult); 2] = [
        ("length", length_section),
        ("character_class", character_class_section),
    ];

    for (_section_name, section_fn) in structural {
        if let Some(reason) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected by section: {}", _section_name);
            return PasswordVerdict::rejected(reason, StrengthScore::ZERO);
        }
    }

    match entropy_section(password, scorer) {
        (score, Some(reason)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected by section: entropy (score {})", score);
            PasswordVerdict::rejected(reason, score)
        }
        (score, None) => PasswordVerdict::accepted(score),
    }
}

/// Password policy bound to an explicitly constructed scorer.
///
/// Build one at startup and share it between the registration and the
/// password reset handlers so both apply the same rules.
#[derive(Debug, Clone)]
pub struct PasswordValidator<S> {
    scorer: S,
}

impl<S: EntropyScorer> PasswordValidator<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn validate(&self, password: &SecretString) -> PasswordVerdict {
        validate_password(password, &self.scorer)
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

#[cfg(feature = "zxcvbn")]
impl Default for PasswordValidator<crate::scorer::ZxcvbnScorer> {
    fn default() -> Self {
        Self::new(crate::scorer::ZxcvbnScorer::new())
    }
}

/// Async version that validates on the blocking pool and sends the
/// verdict via channel.
///
/// Nothing is sent if `token` is cancelled before the verdict is ready.
#[cfg(feature = "async")]
pub async fn validate_password_tx<S>(
    password: SecretString,
    scorer: S,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordVerdict>,
) where
    S: EntropyScorer + Send + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let task = tokio::task::spawn_blocking(move || validate_password(&password, &scorer));

    let verdict = tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("Password validation cancelled");
            return;
        }
        joined = task => match joined {
            Ok(verdict) => verdict,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password validation task failed: {}", _e);
                return;
            }
        },
    };

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn fixed(value: u8) -> impl Fn(&str) -> StrengthScore + Send + 'static {
        move |_| StrengthScore::saturating(value)
    }

    #[tokio::test]
    async fn test_validate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        validate_password_tx(secret("Abcdefg1!"), fixed(4), token, tx).await;

        let verdict = rx.recv().await.expect("Should receive verdict");
        assert!(verdict.is_accepted());
        assert_eq!(verdict.score().value(), 4);
    }

    #[tokio::test]
    async fn test_validate_password_tx_rejection() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        validate_password_tx(secret("Ab1!"), fixed(4), token, tx).await;

        let verdict = rx.recv().await.expect("Should receive verdict");
        assert!(!verdict.is_accepted());
        assert_eq!(verdict.score(), StrengthScore::ZERO);
    }

    #[tokio::test]
    async fn test_validate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        validate_password_tx(secret("Abcdefg1!"), fixed(4), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
