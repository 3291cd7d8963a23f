//! Wishlist membership states and toggle results.
//!
//! Every destination card carries its own membership cache:
//! `Unknown → {In, NotIn}` after the status check, flipping only after a
//! toggle request succeeds. The control is disabled while a toggle is in
//! flight, which is the sole guard against rapid double-activation.

/// Per-card membership cache state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Membership {
    /// Not checked yet (or the check failed); rendered as not saved.
    #[default]
    Unknown,
    In,
    NotIn,
}

impl Membership {
    pub fn is_in(&self) -> bool {
        matches!(self, Membership::In)
    }
}

/// What a completed toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Result of a successful toggle, carrying enough to invert it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WishlistToggle {
    pub destination_id: i64,
    pub action: ToggleAction,
}

impl WishlistToggle {
    /// Membership after this toggle. Feeding it to another toggle call
    /// performs the inverse operation; this is the undo contract.
    pub fn undo_state(&self) -> Membership {
        match self.action {
            ToggleAction::Added => Membership::In,
            ToggleAction::Removed => Membership::NotIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_state_inverts() {
        let added = WishlistToggle {
            destination_id: 7,
            action: ToggleAction::Added,
        };
        assert_eq!(added.undo_state(), Membership::In);

        let removed = WishlistToggle {
            destination_id: 7,
            action: ToggleAction::Removed,
        };
        assert_eq!(removed.undo_state(), Membership::NotIn);
    }
}
