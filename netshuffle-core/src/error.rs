//! Error types for the netshuffle core library.
//!
//! Defines the error enum exposed by the shuffler configuration surface, the
//! stable error codes logged by the CLI, and a convenient result alias.

use thiserror::Error;

/// Generates a `Copy` error-code enum mirroring the variants of an error type,
/// together with `as_str` and a `code()` accessor on the error itself.
///
/// Downstream crates reuse the macro so every error surfaced by the binary
/// carries a stable machine-readable identifier.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring a [`crate::Shuffler`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ShuffleError {
    /// The swap multiplier must be a finite number between zero and
    /// [`crate::MAX_SWAP_MULTIPLIER`].
    #[error("swap multiplier must be between 0 and {max} (got {got})", max = crate::MAX_SWAP_MULTIPLIER)]
    InvalidSwapMultiplier {
        /// The rejected multiplier supplied by the caller.
        got: f64,
    },
    /// At least one attempt must be allowed per requested swap.
    #[error("max_attempts_per_swap must be at least 1 (got {got})")]
    InvalidAttemptBudget {
        /// The rejected attempt budget supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ShuffleError`] variants.
    enum ShuffleErrorCode for ShuffleError {
        /// The swap multiplier was not finite or fell outside its bounds.
        InvalidSwapMultiplier => InvalidSwapMultiplier { .. } => "SHUFFLE_INVALID_SWAP_MULTIPLIER",
        /// At least one attempt must be allowed per requested swap.
        InvalidAttemptBudget => InvalidAttemptBudget { .. } => "SHUFFLE_INVALID_ATTEMPT_BUDGET",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ShuffleError>;
