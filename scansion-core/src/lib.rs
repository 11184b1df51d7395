//! Syllable pattern matching for verse detection
//!
//! Given a block of text and a pattern such as the haiku's 5-7-5, this crate
//! decides whether the text's words can be split into consecutive groups
//! whose syllable counts add up to each pattern element in turn, and
//! produces one such split when they can.
//!
//! Words may have several plausible syllable counts (one per pronunciation).
//! The search tries each reading, smallest first, and memoizes dead ends, so
//! the first partition found is deterministic but not necessarily unique.
//!
//! # Architecture
//!
//! - [`SyllableCounter`]: the capability the matcher consumes, mapping a word
//!   to a [`CountSet`]
//! - [`counters`]: dictionary, estimating and composite counters
//! - [`search`]: the memoized backtracking search over count sets
//! - [`PatternMatcher`]: tokenization, fast rejection and partition
//!   reconstruction around the search
//! - [`forms`]: named patterns (haiku, tanka, cinquain, ...)
//!
//! # Example
//!
//! ```rust
//! use scansion_core::counters::{CompositeCounter, DictionaryCounter, EstimatingCounter};
//! use scansion_core::PatternMatcher;
//!
//! let dictionary = DictionaryCounter::parse("\
//! an AE1 N
//! old OW1 L D
//! silent S AY1 L AH0 N T
//! pond P AA1 N D
//! ").unwrap();
//! let counter = CompositeCounter::new()
//!     .with(dictionary)
//!     .with(EstimatingCounter::new());
//!
//! let matcher = PatternMatcher::haiku(counter);
//! let text = "an old silent pond a frog jumps into the pond splash silence again";
//! let partition = matcher.match_text(text).unwrap();
//!
//! assert_eq!(partition.len(), 3);
//! assert_eq!(partition.lines()[0].join(" "), "an old silent pond");
//! ```

#![warn(missing_docs)]

pub mod counter;
pub mod counters;
pub mod error;
pub mod forms;
pub mod matcher;
pub mod partition;
pub mod pattern;
pub mod search;

pub use counter::{CountSet, SyllableCounter};
pub use error::{Error, PatternError, Result};
pub use forms::VerseForm;
pub use matcher::{LengthBound, Mismatch, PatternMatcher};
pub use partition::Partition;
pub use pattern::{Pattern, HAIKU};
