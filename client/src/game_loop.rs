use std::io::{BufRead, Write};
use std::time::Instant;

use alphabeta::{choose_successor, ValueSearch};
use anyhow::{anyhow, Result};
use engine::{GameState, Player};
use log::info;

/// Plays a game on the console between a human and the search.
pub struct GameLoop<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plays from `start` until the game is over and returns the final position. When `human` is
    /// `None` the human is asked which player to control.
    pub fn play<S>(
        &mut self,
        start: S,
        search: &dyn ValueSearch<S>,
        human: Option<Player>,
    ) -> Result<S>
    where
        S: GameState,
    {
        let human = match human {
            Some(human) => human,
            None => self.ask_for_player()?,
        };

        let mut state = start;
        while !state.is_terminal() {
            writeln!(self.output, "BOARD")?;
            writeln!(self.output, "{}", state)?;

            state = if state.player_to_move() == human {
                writeln!(self.output, "Human's Turn")?;
                self.human_turn(&state)?
            } else {
                writeln!(self.output, "AI's Turn.  AI is thinking....")?;
                self.output.flush()?;
                Self::ai_turn(&state, search)?
            };
        }

        self.report(&state, human)?;

        Ok(state)
    }

    fn ask_for_player(&mut self) -> Result<Player> {
        writeln!(self.output, "Player 0 or 1?")?;

        loop {
            let line = self.read_line()?;
            let answer = line.trim();

            if let Some(player) = answer.parse().ok().and_then(Player::from_index) {
                return Ok(player);
            }

            writeln!(self.output, "{} is invalid response. Player 0 or 1?", answer)?;
        }
    }

    fn human_turn<S: GameState>(&mut self, state: &S) -> Result<S> {
        loop {
            writeln!(self.output, "{}", state.turn_instructions())?;

            let line = self.read_line()?;
            let action = match line.trim().parse::<S::Action>() {
                Ok(action) => action,
                Err(_) => {
                    writeln!(self.output, "Invalid move format.")?;
                    continue;
                }
            };

            if !state.is_legal_move(&action) {
                writeln!(self.output, "Invalid move given current board.")?;
                continue;
            }

            return Ok(state.take_action(&action)?);
        }
    }

    fn ai_turn<S: GameState>(state: &S, search: &dyn ValueSearch<S>) -> Result<S> {
        let search_start = Instant::now();

        let choice = choose_successor(state, search)?
            .ok_or_else(|| anyhow!("No successor to choose from:\n{}", state))?;

        info!(
            "Player {} chose successor {} with value {:.3} in {:.3}s",
            state.player_to_move(),
            choice.index,
            choice.value,
            search_start.elapsed().as_secs_f32()
        );

        Ok(choice.state)
    }

    fn report<S: GameState>(&mut self, state: &S, human: Player) -> Result<()> {
        let value = state.terminal_value()?;

        writeln!(self.output, "GAME OVER")?;
        writeln!(self.output, "{}", state)?;

        let human_value = if human.is_maximizing() { value } else { -value };
        let outcome = if human_value > 0.0 {
            "Human won."
        } else if human_value < 0.0 {
            "AI won."
        } else {
            "Game is a draw."
        };

        writeln!(self.output, "{}  Game value = {:.1}", outcome, value)?;
        self.output.flush()?;

        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow!("Input closed before the game was over"));
        }

        Ok(line)
    }
}
