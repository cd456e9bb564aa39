//! Fixed resolution order for queued night actions.

use serde::{Deserialize, Serialize};

use crate::core::ActionType;

/// Slot an action resolves in. Lower slots resolve first.
///
/// Heal and poison share the Witch slot after the Werewolf slot so the
/// Witch can react to the kill. Within a slot, actions resolve in
/// submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResolutionSlot {
    Cupid = 0,
    Seer = 1,
    Werewolf = 2,
    LittleGirl = 3,
    Witch = 4,
    FollowUp = 5,
}

impl ResolutionSlot {
    /// The slot an action type resolves in.
    #[must_use]
    pub const fn of(action: ActionType) -> Self {
        match action {
            ActionType::Link => ResolutionSlot::Cupid,
            ActionType::Investigate => ResolutionSlot::Seer,
            ActionType::Kill => ResolutionSlot::Werewolf,
            ActionType::Spy => ResolutionSlot::LittleGirl,
            ActionType::Heal | ActionType::Poison | ActionType::Pass => ResolutionSlot::Witch,
            ActionType::HunterShot => ResolutionSlot::FollowUp,
        }
    }

    /// Numeric priority (0 resolves first).
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        let mut actions = vec![
            ActionType::Poison,
            ActionType::Kill,
            ActionType::Spy,
            ActionType::Investigate,
            ActionType::Heal,
            ActionType::Link,
        ];
        actions.sort_by_key(|a| ResolutionSlot::of(*a));

        assert_eq!(actions[0], ActionType::Link);
        assert_eq!(actions[1], ActionType::Investigate);
        assert_eq!(actions[2], ActionType::Kill);
        assert_eq!(actions[3], ActionType::Spy);
        // Stable sort keeps submission order inside the Witch slot
        assert_eq!(&actions[4..], &[ActionType::Poison, ActionType::Heal]);
    }

    #[test]
    fn test_witch_actions_share_slot() {
        assert_eq!(ResolutionSlot::of(ActionType::Heal), ResolutionSlot::of(ActionType::Poison));
        assert_eq!(ResolutionSlot::of(ActionType::Pass).priority(), 4);
        assert!(ResolutionSlot::of(ActionType::Kill) < ResolutionSlot::of(ActionType::Heal));
    }
}
