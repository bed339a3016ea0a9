use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("trying to compute the value of a non-terminal state")]
    NonTerminalState,
    #[error("illegal move: {0}")]
    IllegalMove(String),
}
