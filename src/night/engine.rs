//! The night engine: per-game pending queues, resolution, and history.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::core::{
    ActionError, ActionRecord, ActionResult, ActionType, EngineConfig, GameId, GameRng, NightAction,
    PhaseState, PlayerId, Roster,
};
use crate::roles::{ActionContext, RoleRegistry};

use super::outcome::{
    lover_cascade, Casualty, DeathCause, DeathLedger, FollowUp, FollowUpOutcome, NightSummary,
    PlayerSubmission, RoundOutcome,
};
use super::priority::ResolutionSlot;
use super::snapshot::{EngineSnapshot, LedgerSnapshot};

/// Per-game state owned by the engine.
#[derive(Clone, Debug)]
pub(crate) struct GameLedger {
    pub(crate) pending: Vec<NightAction>,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) rng: GameRng,
    /// Players owed a follow-up by the latest resolution or reported death.
    pub(crate) awaiting: Vec<PlayerId>,
}

impl GameLedger {
    fn new(seed: u64, game: GameId) -> Self {
        Self {
            pending: Vec::new(),
            history: Vector::new(),
            rng: GameRng::new(seed).for_context(&format!("night:{}", game.0)),
            awaiting: Vec::new(),
        }
    }

    /// Nothing queued, resolved, or owed. The RNG is still unused.
    fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.history.is_empty() && self.awaiting.is_empty()
    }
}

/// Night action queue and resolution engine.
///
/// One instance owns the pending queues of every game it is handed; the
/// caller owns its lifecycle and must serialize calls per game.
///
/// ## Example
///
/// ```
/// use werewolf_engine::core::{
///     ActionType, GameId, NightAction, PhaseState, Player, PlayerId, Roster,
/// };
/// use werewolf_engine::night::NightEngine;
/// use werewolf_engine::roles::Role;
///
/// let roster = Roster::from_players(vec![
///     Player::new(PlayerId::new(0), Role::Werewolf),
///     Player::new(PlayerId::new(1), Role::Villager),
///     Player::new(PlayerId::new(2), Role::Villager),
///     Player::new(PlayerId::new(3), Role::Villager),
/// ]).unwrap();
///
/// let mut engine = NightEngine::default();
/// let game = GameId::new(1);
/// let night = PhaseState::night(1);
///
/// let kill = NightAction::targeted(PlayerId::new(0), ActionType::Kill, PlayerId::new(2));
/// assert!(engine.submit_night_action(game, kill, &roster, &night).success);
/// assert!(engine.are_all_night_actions_submitted(game, &roster, &night));
///
/// let outcome = engine.resolve_night_actions(game, &roster, &night);
/// assert_eq!(outcome.deaths, vec![PlayerId::new(2)]);
/// assert!(!outcome.updated_players.is_alive(PlayerId::new(2)));
/// ```
#[derive(Debug)]
pub struct NightEngine {
    registry: RoleRegistry,
    config: EngineConfig,
    games: FxHashMap<GameId, GameLedger>,
}

impl Default for NightEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl NightEngine {
    /// Create an engine with the standard role registry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(RoleRegistry::standard(), config)
    }

    /// Create an engine with a custom role registry.
    #[must_use]
    pub fn with_registry(registry: RoleRegistry, config: EngineConfig) -> Self {
        Self {
            registry,
            config,
            games: FxHashMap::default(),
        }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the role registry.
    #[must_use]
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Queue a night action.
    ///
    /// Rejects unknown actors, corrupted rosters, follow-up actions, and
    /// anything the actor's role forbids right now. A prior pending action
    /// from the same actor with the same type is replaced and the new one
    /// moves to the back of the queue.
    pub fn submit_night_action(
        &mut self,
        game: GameId,
        mut action: NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> ActionResult {
        if let Err(err) = self.check_submission(&action, roster, phase) {
            warn!(
                game = %game,
                actor = %action.actor_id,
                action = ?action.action_type,
                round = phase.round,
                error = %err,
                "Night action rejected"
            );
            return err.into();
        }

        action.resolved = false;
        let actor = action.actor_id;
        let action_type = action.action_type;

        let ledger = self.ledger_mut(game);
        let replaced = match ledger.pending.iter().position(|p| p.same_slot(&action)) {
            Some(pos) => {
                ledger.pending.remove(pos);
                true
            }
            None => false,
        };
        ledger.pending.push(action);

        debug!(
            game = %game,
            actor = %actor,
            action = ?action_type,
            round = phase.round,
            replaced,
            "Night action queued"
        );

        if replaced {
            ActionResult::ok(format!("{:?} by {} replaced", action_type, actor))
        } else {
            ActionResult::ok(format!("{:?} by {} queued", action_type, actor))
        }
    }

    fn check_submission(
        &self,
        action: &NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> Result<(), ActionError> {
        roster.check_integrity()?;
        let actor = roster
            .get(action.actor_id)
            .ok_or(ActionError::UnknownActor(action.actor_id))?;
        if action.action_type.is_follow_up() {
            return Err(ActionError::FollowUpOnly(action.action_type));
        }
        if action.action_type.needs_target() && action.target_id.is_none() {
            return Err(ActionError::MissingTarget(action.action_type));
        }
        self.registry
            .capability(actor.role)
            .validate_action(actor, action, roster, phase)
    }

    /// Resolve every pending action of a game.
    ///
    /// Actions run in slot order against an in-memory snapshot of the
    /// roster. Deaths are applied only once the pass is complete, so every
    /// action sees the roster as it stood at nightfall (plus the lover
    /// link and each actor's own spent resources). The queue is empty
    /// afterward; resolving again without new submissions changes nothing.
    pub fn resolve_night_actions(
        &mut self,
        game: GameId,
        roster: &Roster,
        phase: &PhaseState,
    ) -> RoundOutcome {
        let mut ledger = self.take_ledger(game);

        if let Err(err) = roster.check_integrity() {
            let err = ActionError::from(err);
            warn!(game = %game, round = phase.round, error = %err, "Resolution refused");
            let mut outcome = RoundOutcome::empty(phase.round, roster.clone());
            outcome.results = ledger
                .pending
                .iter()
                .enumerate()
                .map(|(i, a)| {
                    ActionRecord::new(a.clone(), phase.round, i as u32, err.clone().into())
                })
                .collect();
            self.store_ledger(game, ledger);
            return outcome;
        }

        let mut queue = std::mem::take(&mut ledger.pending);
        queue.sort_by_key(|a| ResolutionSlot::of(a.action_type).priority());

        let mut working = roster.clone();
        let pack_kill = self.pack_kill(&queue, &working, phase);
        let mut night = phase.clone();
        let mut deaths = DeathLedger::default();
        let mut results = Vec::with_capacity(queue.len());
        let resolved_any = !queue.is_empty();

        for (index, mut action) in queue.into_iter().enumerate() {
            let is_pack_kill = Some(index) == pack_kill;
            let result = if action.action_type == ActionType::Kill && !is_pack_kill {
                ActionResult::ok(format!(
                    "Kill by {} superseded by another werewolf vote",
                    action.actor_id
                ))
            } else {
                self.run_action(&mut working, &night, &action, &mut ledger.rng)
            };

            if result.success {
                self.absorb_effects(&mut working, &mut deaths, &action, &result);
                if is_pack_kill {
                    night.werewolf_victim = action.target_id;
                }
            }

            debug!(
                game = %game,
                actor = %action.actor_id,
                action = ?action.action_type,
                round = phase.round,
                success = result.success,
                "Night action resolved"
            );

            action.resolved = true;
            let record = ActionRecord::new(action, phase.round, index as u32, result);
            ledger.history.push_back(record.clone());
            results.push(record);
        }

        let protections = deaths.protections().to_vec();
        let casualties = self.settle_deaths(&mut working, deaths);

        for id in working.ids().collect::<Vec<_>>() {
            if let Some(player) = working.get_mut(id) {
                player.special_states.is_protected_this_round = protections.contains(&id);
            }
        }

        let follow_ups = self.follow_ups_for(&working, &casualties, &night);
        if resolved_any {
            ledger.awaiting = follow_ups.iter().map(|f| f.player).collect();
        }

        info!(
            game = %game,
            round = phase.round,
            actions = results.len(),
            deaths = casualties.len(),
            protections = protections.len(),
            follow_ups = follow_ups.len(),
            "Night resolved"
        );

        self.store_ledger(game, ledger);

        RoundOutcome {
            round: phase.round,
            results,
            updated_players: working,
            deaths: casualties.iter().map(|c| c.player).collect(),
            casualties,
            protections,
            follow_ups,
        }
    }

    /// Run a follow-up action (the Hunter's shot) outside the queue.
    ///
    /// Only players owed a follow-up by the latest resolution, an earlier
    /// follow-up, or [`report_deaths`](Self::report_deaths) may act; the
    /// claim expires when the next night with actions resolves. Deaths
    /// apply immediately, with the lover cascade; deaths caused here can
    /// trigger further follow-ups.
    pub fn execute_follow_up(
        &mut self,
        game: GameId,
        mut action: NightAction,
        roster: &Roster,
        phase: &PhaseState,
    ) -> FollowUpOutcome {
        let unchanged = |result: ActionResult| FollowUpOutcome {
            result,
            updated_players: roster.clone(),
            deaths: Vec::new(),
            casualties: Vec::new(),
            follow_ups: Vec::new(),
        };

        let checked = roster
            .check_integrity()
            .map_err(ActionError::from)
            .and_then(|()| {
                if roster.contains(action.actor_id) {
                    Ok(())
                } else {
                    Err(ActionError::UnknownActor(action.actor_id))
                }
            })
            .and_then(|()| {
                if action.action_type.is_follow_up() {
                    Ok(())
                } else {
                    Err(ActionError::NotAFollowUp(action.action_type))
                }
            });
        if let Err(err) = checked {
            warn!(
                game = %game,
                actor = %action.actor_id,
                action = ?action.action_type,
                error = %err,
                "Follow-up rejected"
            );
            return unchanged(err.into());
        }

        let mut ledger = self.take_ledger(game);
        let mut working = roster.clone();
        let result = if ledger.awaiting.contains(&action.actor_id) {
            self.run_action(&mut working, phase, &action, &mut ledger.rng)
        } else {
            ActionError::NoFollowUpOwed(action.actor_id).into()
        };

        if !result.success {
            warn!(
                game = %game,
                actor = %action.actor_id,
                action = ?action.action_type,
                message = %result.message,
                "Follow-up rejected"
            );
            self.store_ledger(game, ledger);
            return unchanged(result);
        }

        let mut deaths = DeathLedger::default();
        self.absorb_effects(&mut working, &mut deaths, &action, &result);
        let casualties = self.settle_deaths(&mut working, deaths);
        let follow_ups = self.follow_ups_for(&working, &casualties, phase);
        ledger.awaiting.retain(|&id| id != action.actor_id);
        ledger.awaiting.extend(follow_ups.iter().map(|f| f.player));

        info!(
            game = %game,
            actor = %action.actor_id,
            action = ?action.action_type,
            round = phase.round,
            deaths = casualties.len(),
            "Follow-up resolved"
        );

        action.resolved = true;
        let sequence = ledger
            .history
            .iter()
            .filter(|r| r.round == phase.round)
            .count() as u32;
        ledger
            .history
            .push_back(ActionRecord::new(action, phase.round, sequence, result.clone()));
        self.store_ledger(game, ledger);

        FollowUpOutcome {
            result,
            updated_players: working,
            deaths: casualties.iter().map(|c| c.player).collect(),
            casualties,
            follow_ups,
        }
    }

    /// Report deaths that happened outside the engine (the day vote).
    ///
    /// `roster` must already show the players as dead. Returns their
    /// on-death reactions and owes each one a follow-up.
    pub fn report_deaths(
        &mut self,
        game: GameId,
        dead: &[PlayerId],
        roster: &Roster,
        phase: &PhaseState,
    ) -> Vec<FollowUp> {
        let casualties: Vec<Casualty> = dead
            .iter()
            .filter(|&&id| roster.get(id).is_some_and(|p| !p.is_alive))
            .map(|&player| Casualty {
                player,
                cause: DeathCause::Ability,
            })
            .collect();
        let follow_ups = self.follow_ups_for(roster, &casualties, phase);

        if !follow_ups.is_empty() {
            let ledger = self.ledger_mut(game);
            for follow_up in &follow_ups {
                if !ledger.awaiting.contains(&follow_up.player) {
                    ledger.awaiting.push(follow_up.player);
                }
            }
            debug!(game = %game, follow_ups = follow_ups.len(), "Outside deaths reported");
        }
        follow_ups
    }

    /// Players currently owed a follow-up.
    #[must_use]
    pub fn awaiting_follow_ups(&self, game: GameId) -> &[PlayerId] {
        self.games
            .get(&game)
            .map(|l| l.awaiting.as_slice())
            .unwrap_or(&[])
    }

    /// Has every living player with a required action submitted it?
    ///
    /// Optional roles (Witch, Hunter, Little Girl, Villager) never block.
    #[must_use]
    pub fn are_all_night_actions_submitted(
        &self,
        game: GameId,
        roster: &Roster,
        phase: &PhaseState,
    ) -> bool {
        self.night_actions_summary(game, roster, phase).is_complete()
    }

    /// Submitted vs. missing required actions, per living player.
    #[must_use]
    pub fn night_actions_summary(
        &self,
        game: GameId,
        roster: &Roster,
        phase: &PhaseState,
    ) -> NightSummary {
        let pending = self.pending(game);
        let players = roster
            .living()
            .map(|player| PlayerSubmission {
                player: player.id,
                role: player.role,
                required: self.registry.required_action(player, phase),
                submitted: pending
                    .iter()
                    .filter(|a| a.actor_id == player.id)
                    .map(|a| a.action_type)
                    .collect(),
            })
            .collect();

        NightSummary {
            round: phase.round,
            pending: pending.len(),
            players,
        }
    }

    /// Pending actions of a game, in submission order.
    #[must_use]
    pub fn pending(&self, game: GameId) -> &[NightAction] {
        self.games
            .get(&game)
            .map(|l| l.pending.as_slice())
            .unwrap_or(&[])
    }

    /// Every resolved action of a game.
    #[must_use]
    pub fn history(&self, game: GameId) -> Vector<ActionRecord> {
        self.games
            .get(&game)
            .map(|l| l.history.clone())
            .unwrap_or_default()
    }

    /// Resolved actions of one actor.
    #[must_use]
    pub fn history_for(&self, game: GameId, actor: PlayerId) -> Vec<ActionRecord> {
        self.games.get(&game).map_or_else(Vec::new, |l| {
            l.history
                .iter()
                .filter(|r| r.action.actor_id == actor)
                .cloned()
                .collect()
        })
    }

    /// Drop all state for a finished game. Returns `false` if none existed.
    pub fn clear_game(&mut self, game: GameId) -> bool {
        let existed = self.games.remove(&game).is_some();
        if existed {
            debug!(game = %game, remaining = self.game_count(), "Game cleared");
        }
        existed
    }

    /// Number of games with state in this engine.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Capture pending queues, history, and RNG positions.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let mut games: Vec<LedgerSnapshot> = self
            .games
            .iter()
            .map(|(game, ledger)| LedgerSnapshot {
                game: *game,
                pending: ledger.pending.clone(),
                history: ledger.history.iter().cloned().collect(),
                rng: ledger.rng.state(),
                awaiting: ledger.awaiting.clone(),
            })
            .collect();
        games.sort_by_key(|g| g.game);

        EngineSnapshot {
            config: self.config.clone(),
            games,
        }
    }

    /// Rebuild an engine from a snapshot.
    #[must_use]
    pub fn restore(snapshot: EngineSnapshot, registry: RoleRegistry) -> Self {
        let games = snapshot
            .games
            .into_iter()
            .map(|g| {
                let ledger = GameLedger {
                    pending: g.pending,
                    history: g.history.into_iter().collect(),
                    rng: GameRng::from_state(&g.rng),
                    awaiting: g.awaiting,
                };
                (g.game, ledger)
            })
            .collect();

        Self {
            registry,
            config: snapshot.config,
            games,
        }
    }

    fn ledger_mut(&mut self, game: GameId) -> &mut GameLedger {
        let seed = self.config.seed;
        self.games
            .entry(game)
            .or_insert_with(|| GameLedger::new(seed, game))
    }

    fn take_ledger(&mut self, game: GameId) -> GameLedger {
        self.games
            .remove(&game)
            .unwrap_or_else(|| GameLedger::new(self.config.seed, game))
    }

    /// Put a taken ledger back, unless it holds nothing worth keeping.
    fn store_ledger(&mut self, game: GameId, ledger: GameLedger) {
        if !ledger.is_idle() {
            self.games.insert(game, ledger);
        }
    }

    /// Index of the kill the pack commits to: the last queued `Kill` that
    /// is still legal. Falls back to the last `Kill` so its rejection is
    /// reported.
    fn pack_kill(
        &self,
        queue: &[NightAction],
        roster: &Roster,
        phase: &PhaseState,
    ) -> Option<usize> {
        let mut kills = queue
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, a)| a.action_type == ActionType::Kill);
        let last = kills.clone().next().map(|(i, _)| i);
        kills
            .find(|(_, a)| {
                roster.get(a.actor_id).is_some_and(|actor| {
                    self.registry
                        .capability(actor.role)
                        .validate_action(actor, a, roster, phase)
                        .is_ok()
                })
            })
            .map(|(i, _)| i)
            .or(last)
    }

    /// Execute one action and write the actor's spent resources back.
    fn run_action(
        &self,
        working: &mut Roster,
        phase: &PhaseState,
        action: &NightAction,
        rng: &mut GameRng,
    ) -> ActionResult {
        let Some(mut actor) = working.get(action.actor_id).cloned() else {
            return ActionError::UnknownActor(action.actor_id).into();
        };
        let capability = self.registry.capability(actor.role);
        let result = {
            let mut ctx = ActionContext::new(working, phase, &self.config, rng);
            capability.execute_action(&mut actor, action, &mut ctx)
        };
        working.upsert(actor);
        result
    }

    /// Record deaths and protections, and apply a lover link at once.
    fn absorb_effects(
        &self,
        working: &mut Roster,
        deaths: &mut DeathLedger,
        action: &NightAction,
        result: &ActionResult,
    ) {
        let cause = DeathCause::for_action(action.action_type);
        for &id in &result.effects.deaths {
            deaths.kill(id, cause);
        }
        for &id in &result.effects.protections {
            deaths.protect(id);
        }
        if let [a, b] = result.effects.lovers.as_slice() {
            if let Err(err) = working.link_lovers(*a, *b) {
                warn!(actor = %action.actor_id, error = %err, "Lover link not applied");
            }
        }
    }

    /// Cancel protected attacks, add heartbroken lovers, mark the dead.
    fn settle_deaths(&self, working: &mut Roster, deaths: DeathLedger) -> Vec<Casualty> {
        let mut casualties = deaths.settle();
        casualties.retain(|c| working.is_alive(c.player));
        lover_cascade(working, &mut casualties);
        for casualty in &casualties {
            working.mark_dead(casualty.player);
        }
        casualties
    }

    fn follow_ups_for(
        &self,
        roster: &Roster,
        casualties: &[Casualty],
        phase: &PhaseState,
    ) -> Vec<FollowUp> {
        casualties
            .iter()
            .filter_map(|c| roster.get(c.player))
            .filter_map(|player| {
                self.registry
                    .capability(player.role)
                    .on_death(player, roster, phase)
                    .map(|result| FollowUp {
                        player: player.id,
                        role: player.role,
                        result,
                    })
            })
            .collect()
    }
}
