/// Estimates the game-theoretic value of a possibly non-terminal state from the perspective of
/// player zero.
///
/// Implementations must be deterministic and free of side effects. Estimates are conventionally
/// within `[-1.0, 1.0]` and should agree with `GameState::terminal_value` on terminal states.
pub trait Heuristic<S> {
    fn evaluate(&self, state: &S) -> f32;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f32,
{
    fn evaluate(&self, state: &S) -> f32 {
        self(state)
    }
}
