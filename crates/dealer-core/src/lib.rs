//! Anti-repetition random selection over caller-supplied candidate pools.
//!
//! This crate picks one item at a time from a pool while steering away from
//! recent repeats, tracked in two scopes at once: a bounded window of what
//! was dealt to *anyone* recently, and an unbounded set of what each
//! individual consumer has already received. When the two scopes jointly
//! exclude the whole pool, the consumer's personal history resets so a deal
//! always succeeds for a non-empty pool.
//!
//! # Key properties
//!
//! - **Deterministic**: same generator seed, same deal sequence
//! - **Bounded shared window**: oldest entries evicted first (FIFO)
//! - **Never starves**: exhaustion clears only the affected consumer
//! - **No I/O**: candidates come from the caller; the crate only selects
//!
//! # Quick Start
//!
//! ```rust
//! use dealer_core::{Dealer, Lcg32};
//!
//! let pool = ["cats/1.jpg", "cats/2.jpg", "cats/3.jpg"];
//!
//! // Clock-seeded in production; fixed seed for reproducible output.
//! let mut dealer = Dealer::with_source(5, Lcg32::new(42));
//!
//! let first = dealer.deal(&pool, "user-1").unwrap();
//! let second = dealer.deal(&pool, "user-1").unwrap();
//! assert_ne!(first, second);
//! ```
//!
//! The randomness is NOT cryptographic. The default [`Lcg32`] is a plain
//! linear congruential generator, which is all repeat-avoidance needs; swap
//! in [`StdRandom`] behind the same [`RandomSource`] trait if a deployment
//! ever needs unpredictable picks.

pub mod dealer;
pub mod history;
pub mod rng;

// Re-export main types for convenience
pub use dealer::{Dealer, DEFAULT_HISTORY_CAPACITY};
pub use history::RecentQueue;
pub use rng::{Lcg32, RandomSource, StdRandom};
