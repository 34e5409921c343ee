/// Static evaluation of a position from the first player's perspective:
/// positive favors player 0, negative favors player 1.
pub trait Evaluator {
    type State;

    fn evaluate(&self, game_state: &Self::State) -> f32;
}
