//! ArnLike: IAM-style ARN pattern matching
//!
//! Matches an ARN such as `arn:aws:iam::000000000000:role/some-role`
//! against a pattern such as `arn:aws:iam::*:role/*`:
//! - both strings are split into six `:`-delimited sections
//! - each section is matched on its own, so wildcards stay inside it
//! - `*` matches any sequence (including none), `?` exactly one character
//! - every other character, including `[`, `{` and `\`, matches itself
//!
//! ```
//! use arnlike::arn_like;
//!
//! assert!(arn_like(
//!     "arn:aws:iam::000000000000:role/some-role",
//!     "arn:aws:iam::000000000000:role/*",
//! )
//! .unwrap());
//! ```

pub mod arn;
pub mod error;
pub mod matcher;
pub mod sanitize;

pub use arn::{parse, Arn, Section};
pub use error::{ArnLikeError, ParseError, Result};
pub use matcher::{arn_like, arn_like_any, arn_like_with, ArnPattern, MatchOptions};
