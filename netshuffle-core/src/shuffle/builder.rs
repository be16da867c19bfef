//! Builder utilities for configuring the degree-preserving shuffler.
//!
//! Validates the swap multiplier and attempt budget before constructing
//! [`Shuffler`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::ShuffleError};

use super::Shuffler;

/// Swap multiplier applied when none is configured: one successful swap per
/// edge.
pub const DEFAULT_SWAP_MULTIPLIER: f64 = 1.0;

/// Largest accepted swap multiplier. Larger values would saturate the swap
/// target and attempt budget, leaving the attempt cap unable to stop a run.
pub const MAX_SWAP_MULTIPLIER: f64 = 10_000.0;

/// Attempts allowed per requested swap before the shuffler gives up.
pub const DEFAULT_MAX_ATTEMPTS_PER_SWAP: usize = 10;

/// Configures and constructs [`Shuffler`] instances.
///
/// # Examples
/// ```
/// use netshuffle_core::ShufflerBuilder;
///
/// let shuffler = ShufflerBuilder::new()
///     .with_swap_multiplier(2.5)
///     .with_max_attempts_per_swap(20)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(shuffler.swap_multiplier(), 2.5);
/// assert_eq!(shuffler.max_attempts_per_swap().get(), 20);
/// assert_eq!(shuffler.seed(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct ShufflerBuilder {
    swap_multiplier: f64,
    max_attempts_per_swap: usize,
    seed: Option<u64>,
}

impl Default for ShufflerBuilder {
    fn default() -> Self {
        Self {
            swap_multiplier: DEFAULT_SWAP_MULTIPLIER,
            max_attempts_per_swap: DEFAULT_MAX_ATTEMPTS_PER_SWAP,
            seed: None,
        }
    }
}

impl ShufflerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use netshuffle_core::ShufflerBuilder;
    ///
    /// let builder = ShufflerBuilder::new();
    /// assert_eq!(builder.swap_multiplier(), 1.0);
    /// assert_eq!(builder.max_attempts_per_swap(), 10);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of successful swaps requested per edge.
    #[must_use]
    pub fn with_swap_multiplier(mut self, multiplier: f64) -> Self {
        self.swap_multiplier = multiplier;
        self
    }

    /// Returns the configured swap multiplier.
    #[must_use]
    pub fn swap_multiplier(&self) -> f64 {
        self.swap_multiplier
    }

    /// Overrides the number of attempts allowed per requested swap.
    #[must_use]
    pub fn with_max_attempts_per_swap(mut self, attempts: usize) -> Self {
        self.max_attempts_per_swap = attempts;
        self
    }

    /// Returns the configured attempt budget per swap.
    #[must_use]
    pub fn max_attempts_per_swap(&self) -> usize {
        self.max_attempts_per_swap
    }

    /// Fixes the random seed so repeated runs produce identical output.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the random seed.
    #[must_use]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Shuffler`].
    ///
    /// # Errors
    /// Returns [`ShuffleError::InvalidSwapMultiplier`] when the multiplier is
    /// negative, NaN, infinite or above [`MAX_SWAP_MULTIPLIER`], and
    /// [`ShuffleError::InvalidAttemptBudget`] when zero attempts per swap are
    /// allowed.
    ///
    /// # Examples
    /// ```
    /// use netshuffle_core::{ShuffleError, ShufflerBuilder};
    ///
    /// let err = ShufflerBuilder::new()
    ///     .with_swap_multiplier(-1.0)
    ///     .build()
    ///     .expect_err("negative multipliers are rejected");
    /// assert!(matches!(err, ShuffleError::InvalidSwapMultiplier { .. }));
    /// ```
    pub fn build(self) -> Result<Shuffler> {
        if !(0.0..=MAX_SWAP_MULTIPLIER).contains(&self.swap_multiplier) {
            return Err(ShuffleError::InvalidSwapMultiplier {
                got: self.swap_multiplier,
            });
        }
        let max_attempts_per_swap = NonZeroUsize::new(self.max_attempts_per_swap).ok_or(
            ShuffleError::InvalidAttemptBudget {
                got: self.max_attempts_per_swap,
            },
        )?;
        Ok(Shuffler::new(
            self.swap_multiplier,
            max_attempts_per_swap,
            self.seed,
        ))
    }
}
