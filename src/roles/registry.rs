//! Role registry for behavior lookup.
//!
//! The `RoleRegistry` maps a role tag to its behavior record. The night
//! engine dispatches every action through it, so a caller (or a test) can
//! swap one role's behavior without touching the others.

use rustc_hash::FxHashMap;

use crate::core::{ActionType, PhaseState, Player};

use super::info::{role_info, RoleInfo};
use super::{Role, RoleCapability};

/// Registry of role behaviors.
///
/// ## Example
///
/// ```
/// use werewolf_engine::core::{ActionType, PhaseState, Player, PlayerId};
/// use werewolf_engine::roles::{Role, RoleRegistry};
///
/// let registry = RoleRegistry::standard();
/// let seer = Player::new(PlayerId::new(0), Role::Seer);
///
/// assert_eq!(
///     registry.available_actions(&seer, &PhaseState::night(1)),
///     vec![ActionType::Investigate]
/// );
/// ```
#[derive(Default)]
pub struct RoleRegistry {
    behaviors: FxHashMap<Role, Box<dyn RoleCapability>>,
}

impl RoleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard behavior for every role.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::Villager));
        registry.register(Box::new(super::Werewolf));
        registry.register(Box::new(super::Seer));
        registry.register(Box::new(super::Witch));
        registry.register(Box::new(super::Hunter));
        registry.register(Box::new(super::Cupid));
        registry.register(Box::new(super::LittleGirl));
        registry
    }

    /// Register a role behavior.
    ///
    /// Panics if the role already has a behavior; use `replace` to override.
    pub fn register(&mut self, behavior: Box<dyn RoleCapability>) {
        let role = behavior.role();
        if self.behaviors.contains_key(&role) {
            panic!("Role {:?} already registered", role);
        }
        self.behaviors.insert(role, behavior);
    }

    /// Replace a role's behavior, returning the previous one.
    pub fn replace(
        &mut self,
        behavior: Box<dyn RoleCapability>,
    ) -> Option<Box<dyn RoleCapability>> {
        self.behaviors.insert(behavior.role(), behavior)
    }

    /// Get a registered behavior.
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&dyn RoleCapability> {
        self.behaviors.get(&role).map(|b| b.as_ref())
    }

    /// Behavior for a role, falling back to the standard one.
    #[must_use]
    pub fn capability(&self, role: Role) -> &dyn RoleCapability {
        self.get(role).unwrap_or_else(|| role.capability())
    }

    /// Check if a role is registered.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.behaviors.contains_key(&role)
    }

    /// Get the number of registered roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Actions the player may take right now.
    #[must_use]
    pub fn available_actions(&self, player: &Player, phase: &PhaseState) -> Vec<ActionType> {
        self.capability(player.role).available_actions(player, phase)
    }

    /// The action this player must submit before the night can resolve.
    #[must_use]
    pub fn required_action(&self, player: &Player, phase: &PhaseState) -> Option<ActionType> {
        self.capability(player.role).required_action(player, phase)
    }

    /// Metadata for every registered role, in dealing order.
    #[must_use]
    pub fn all_info(&self) -> Vec<RoleInfo> {
        Role::ALL
            .iter()
            .filter(|role| self.contains(**role))
            .map(|role| role_info(*role))
            .collect()
    }
}

impl std::fmt::Debug for RoleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut roles: Vec<_> = self.behaviors.keys().collect();
        roles.sort();
        f.debug_struct("RoleRegistry").field("roles", &roles).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActionError, ActionResult, NightAction, PlayerId, Roster};
    use crate::roles::ActionContext;

    /// A seer that sees nothing, for override tests.
    struct BlindSeer;

    impl RoleCapability for BlindSeer {
        fn role(&self) -> Role {
            Role::Seer
        }

        fn available_actions(&self, _player: &Player, _phase: &PhaseState) -> Vec<ActionType> {
            Vec::new()
        }

        fn validate_action(
            &self,
            _player: &Player,
            action: &NightAction,
            _roster: &Roster,
            _phase: &PhaseState,
        ) -> Result<(), ActionError> {
            Err(ActionError::NotAllowed { role: Role::Seer, action: action.action_type })
        }

        fn execute_action(
            &self,
            _player: &mut Player,
            action: &NightAction,
            _ctx: &mut ActionContext<'_>,
        ) -> ActionResult {
            ActionError::NotAllowed { role: Role::Seer, action: action.action_type }.into()
        }
    }

    #[test]
    fn test_standard_has_every_role() {
        let registry = RoleRegistry::standard();
        assert_eq!(registry.len(), Role::ALL.len());
        for role in Role::ALL {
            assert!(registry.contains(role));
            assert_eq!(registry.get(role).unwrap().role(), role);
        }
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_role_panics() {
        let mut registry = RoleRegistry::standard();
        registry.register(Box::new(BlindSeer));
    }

    #[test]
    fn test_replace_overrides_behavior() {
        let mut registry = RoleRegistry::standard();
        let previous = registry.replace(Box::new(BlindSeer));
        assert!(previous.is_some());

        let seer = Player::new(PlayerId::new(0), Role::Seer);
        assert!(registry.available_actions(&seer, &PhaseState::night(1)).is_empty());
    }

    #[test]
    fn test_capability_falls_back_to_standard() {
        let registry = RoleRegistry::new();
        assert!(registry.is_empty());
        let wolf = Player::new(PlayerId::new(0), Role::Werewolf);
        assert_eq!(
            registry.available_actions(&wolf, &PhaseState::night(1)),
            vec![ActionType::Kill]
        );
    }

    #[test]
    fn test_all_info_in_dealing_order() {
        let info = RoleRegistry::standard().all_info();
        let roles: Vec<_> = info.iter().map(|i| i.role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_debug_lists_roles() {
        let mut registry = RoleRegistry::new();
        registry.register(Box::new(BlindSeer));
        assert_eq!(format!("{:?}", registry), "RoleRegistry { roles: [Seer] }");
    }
}
