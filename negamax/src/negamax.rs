use std::fmt::Debug;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use log::debug;
use rand::prelude::StdRng;
use rand::Rng;

use common::transposition::TranspositionKey;
use engine::engine::GameEngine;
use engine::game_state::GameState;
use engine::value::Value;

use super::evaluator::Evaluator;
use super::options::NegamaxOptions;
use super::search_details::SearchDetails;
use super::transposition::TranspositionTable;

/// Score held by actions the search did not score: illegal actions, and
/// actions cut off by an exhausted budget. Strictly below every reachable
/// score so it never wins an argmax.
pub const UNSCORED: f32 = -999.0;

/// Terminal rewards are in [-1.0, 1.0]; scaling puts them outside the
/// range of any static evaluation so a proven result always dominates.
pub const TERMINAL_SCORE_SCALE: f32 = 500.0;

/// One score per action index. Entries for unscored actions hold
/// [`UNSCORED`].
pub type ScoreVector = Vec<f32>;

/// Depth-limited negamax with a bounded per-instance transposition table.
///
/// Searches run on a private clone of the caller's state, backtracking
/// with the engine's undo tokens; the caller's state is never mutated.
pub struct Negamax<'a, E, M>
where
    E: GameEngine,
    E::State: TranspositionKey,
    M: Evaluator<State = E::State>,
{
    options: NegamaxOptions,
    game_engine: &'a E,
    evaluator: &'a M,
    cache: TranspositionTable<<E::State as TranspositionKey>::Key, ScoreVector>,
    rng: StdRng,
    visits: usize,
    elapsed: Duration,
    root_scores: Option<ScoreVector>,
    details: Option<SearchDetails<E::Action>>,
    deadline: Option<Instant>,
    interrupted: bool,
}

impl<'a, E, M> Negamax<'a, E, M>
where
    E: GameEngine,
    E::State: GameState + TranspositionKey,
    E::Action: Clone + Debug,
    M: Evaluator<State = E::State>,
{
    pub fn new(game_engine: &'a E, evaluator: &'a M, options: NegamaxOptions, rng: StdRng) -> Self {
        let cache = TranspositionTable::new(options.cache_capacity);

        Self {
            options,
            game_engine,
            evaluator,
            cache,
            rng,
            visits: 0,
            elapsed: Duration::ZERO,
            root_scores: None,
            details: None,
            deadline: None,
            interrupted: false,
        }
    }

    /// Searches from `game_state` and returns an action for the player to
    /// move, chosen uniformly at random among the actions attaining the
    /// best score. Errors if that player has no legal action.
    pub fn choose_action(&mut self, game_state: &E::State) -> Result<E::Action> {
        let started = Instant::now();
        self.visits = 0;
        self.interrupted = false;
        self.deadline = self.options.time_budget.map(|budget| started + budget);

        let mut simulation = game_state.clone();
        let scores = self.search(&mut simulation, 0);

        let player = self.game_engine.player_to_move(game_state);
        let legal_actions = self.game_engine.legal_actions(game_state, player);

        let children: Vec<(E::Action, f32)> = legal_actions
            .into_iter()
            .map(|action| {
                let score = scores[self.game_engine.action_index(&action)];
                (action, score)
            })
            .collect();

        let best_score = children
            .iter()
            .map(|(_, score)| *score)
            .fold(f32::MIN, f32::max);

        let mut candidates: Vec<E::Action> = children
            .iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| action.clone())
            .collect();

        self.elapsed = started.elapsed();
        self.root_scores = Some(scores);
        self.details = Some(SearchDetails {
            visits: self.visits,
            elapsed: self.elapsed,
            children,
        });

        if candidates.is_empty() {
            return Err(anyhow!("No legal actions to choose from"));
        }

        let chosen = candidates.swap_remove(self.rng.gen_range(0..candidates.len()));

        debug!(
            "search visited {} nodes in {:?}, chose {:?} scored {:.1}",
            self.visits, self.elapsed, chosen, best_score
        );

        Ok(chosen)
    }

    /// Nodes expanded by the most recent search.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Wall time taken by the most recent search.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Root score vector of the most recent search, indexed by action.
    pub fn root_scores(&self) -> Option<&[f32]> {
        self.root_scores.as_deref()
    }

    pub fn search_details(&self) -> Option<&SearchDetails<E::Action>> {
        self.details.as_ref()
    }

    /// Scores every action at `game_state`, one recursion level per move
    /// taken, memoizing completed vectors by position key.
    ///
    /// The sign convention follows the mover captured at entry to each
    /// node: heuristic leaves are negated when that mover is player 1,
    /// and a child's best score is negated only when the mover actually
    /// alternated across the step (a pass keeps the sign).
    fn search(&mut self, game_state: &mut E::State, depth: usize) -> ScoreVector {
        let key = game_state.transposition_key();
        if let Some(scores) = self.cache.get(&key) {
            return scores.clone();
        }

        let mut scores = vec![UNSCORED; self.game_engine.action_space(game_state)];

        if self.out_of_budget() {
            return scores;
        }

        self.visits += 1;
        let mover = self.game_engine.player_to_move(game_state);

        for action in self.game_engine.legal_actions(game_state, mover) {
            if self.out_of_budget() {
                break;
            }

            let index = self.game_engine.action_index(&action);
            let (step, undo) = self.game_engine.apply(game_state, &action);

            if step.terminal {
                scores[index] = step.value.get_value_for_player(mover) * TERMINAL_SCORE_SCALE;
            } else if depth >= self.options.max_depth {
                let evaluation = self.evaluator.evaluate(game_state);
                scores[index] = if mover == 0 { evaluation } else { -evaluation };
            } else {
                let alternated = self.game_engine.player_to_move(game_state) != mover;
                let child_scores = self.search(game_state, depth + 1);

                // A branch cut off mid-search contributes no entry, so a
                // truncated subtree can never outscore a completed one.
                if !self.interrupted {
                    let best = child_scores.iter().cloned().fold(f32::MIN, f32::max);
                    scores[index] = if alternated { -best } else { best };
                }
            }

            self.game_engine.undo(game_state, undo);
        }

        if !self.interrupted {
            self.cache.store(key, scores.clone());
        }

        scores
    }

    fn out_of_budget(&mut self) -> bool {
        if self.interrupted {
            return true;
        }

        let nodes_exhausted = self
            .options
            .max_nodes
            .map_or(false, |limit| self.visits >= limit);
        let deadline_passed = self
            .deadline
            .map_or(false, |deadline| Instant::now() >= deadline);

        if nodes_exhausted || deadline_passed {
            self.interrupted = true;
        }

        self.interrupted
    }
}
