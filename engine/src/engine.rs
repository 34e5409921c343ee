use super::value::Value;

/// Outcome of applying a single action. `info` is populated only when the
/// game ends by its own rules (not on a forfeit).
#[derive(Clone, Debug, PartialEq)]
pub struct Step<V, I> {
    pub value: V,
    pub terminal: bool,
    pub info: Option<I>,
}

pub trait GameEngine {
    type Action;
    type State;
    type Value: Value;
    type Info;
    type Undo;

    fn initial_state(&self) -> Self::State;

    /// Number of distinct action indices a state admits.
    fn action_space(&self, game_state: &Self::State) -> usize;

    /// Stable index of `action` within the action space.
    fn action_index(&self, action: &Self::Action) -> usize;

    /// Applies `action` for the player to move, mutating the state in
    /// place. Returns the step outcome and a token that reverses the
    /// mutation. Tokens must be consumed in reverse order of issue.
    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> (Step<Self::Value, Self::Info>, Self::Undo);

    fn undo(&self, game_state: &mut Self::State, undo: Self::Undo);

    fn player_to_move(&self, game_state: &Self::State) -> usize;

    fn legal_actions(&self, game_state: &Self::State, player: usize) -> Vec<Self::Action>;
}
