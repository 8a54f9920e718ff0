//! Core text and policy utilities for an AI picture book service
//!
//! This library provides the two pieces of book-service logic that are more
//! than plumbing:
//!
//! - page reconstruction: turns generated story lines into exactly as many
//!   page bodies as the book declares
//! - password policy: length and character class rules followed by an
//!   entropy estimate from a pluggable scorer
//!
//! # Features
//!
//! - `async` (default): Enables the channel-based validator with cancellation support
//! - `zxcvbn` (default): Enables [`ZxcvbnScorer`], the default entropy estimator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `STORYBOOK_BLACKLIST_PATH`: Custom path to the common-password list
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use storybook_core::{parse_pages, validate_password, StrengthScore};
//! use secrecy::SecretString;
//!
//! let lines = ["Title: The Moon", "1ページ目:", "Hello", "", "2ページ目:", "World"];
//! let pages = parse_pages(&lines, 3);
//! assert_eq!(pages, vec!["1ページ目:\nHello", "2ページ目:\nWorld", ""]);
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//! let verdict = validate_password(&password, &|_: &str| StrengthScore::MAX);
//! assert!(verdict.is_accepted());
//! assert_eq!(verdict.error(), "");
//! ```

// Internal modules
mod blacklist;
mod pages;
mod scorer;
mod sections;
mod validator;
mod verdict;

// Public API
pub use blacklist::{blacklist_path, Blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use pages::{is_page_label, parse_generated_text, parse_pages, PAGE_LABEL_SUFFIX, TITLE_PREFIX};
pub use scorer::{BlacklistScorer, EntropyScorer};
pub use sections::{MIN_ENTROPY_SCORE, MIN_LENGTH};
pub use validator::{validate_password, PasswordValidator};
pub use verdict::{CharClass, PasswordVerdict, RejectionReason, ScoreError, StrengthScore};

#[cfg(feature = "zxcvbn")]
pub use scorer::ZxcvbnScorer;

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
