//! Declarative password policies
//!
//! A [`RuleSet`] is assembled with chained builder calls, then used to
//! validate candidate passwords or to generate passwords that satisfy it.
//!
//! Validation reports one outcome per configured rule in insertion order,
//! plus an outcome for each heuristic check (common password, obvious
//! sequence, repeated characters) that flags the password. Heuristics lower
//! the score but never make [`ValidationReport::all_passed`] false.
//!
//! # Features
//!
//! - `async` (default): Enables [`validate_tx`], sending reports over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` on report types
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_DENYLIST_PATH`: Custom common-password list read by
//!   [`Denylist::from_env`] (default: the built-in list of 20 passwords)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{RuleSet, DEFAULT_GENERATED_LENGTH};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let rules = RuleSet::new()
//!     .min_length(8)
//!     .has_uppercase()
//!     .has_digits()
//!     .no_spaces();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = rules.validate(&password);
//! println!("Score: {} ({})", report.score, report.strength());
//!
//! let generated = RuleSet::default_generation().generate(DEFAULT_GENERATED_LENGTH);
//! assert_eq!(generated.expose_secret().len(), 12);
//! ```

// Internal modules
mod charset;
mod denylist;
mod evaluator;
mod generator;
mod report;
mod rules;
mod sections;

// Public API
pub use charset::CharClass;
pub use denylist::{DENYLIST_PATH_VAR, Denylist, DenylistError};
pub use report::{OutcomeSource, RuleOutcome, Strength, ValidationReport, strength_label};
pub use rules::{DEFAULT_GENERATED_LENGTH, RuleSet, RuleSpec};

#[cfg(feature = "async")]
pub use evaluator::validate_tx;
