//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every recorded
//! move. They are testable independently and serve as documentation of
//! the history's guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_mark;
pub mod cursor_in_bounds;
pub mod empty_origin;
pub mod no_play_past_win;
pub mod single_cell_delta;

pub use alternating_mark::AlternatingMarkInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use no_play_past_win::NoPlayPastWinInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type TimelineInvariants = (
    EmptyOriginInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
    CursorInBoundsInvariant,
    NoPlayPastWinInvariant,
);
