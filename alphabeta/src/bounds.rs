use engine::Player;

/// The alpha-beta window. `alpha` is the value the maximizer can already guarantee and `beta` the
/// value the minimizer can already guarantee. Both only ever move towards each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub alpha: f32,
    pub beta: f32,
}

impl Bounds {
    pub fn new(alpha: f32, beta: f32) -> Self {
        Self { alpha, beta }
    }

    pub fn full() -> Self {
        Self::new(f32::NEG_INFINITY, f32::INFINITY)
    }

    /// Folds a value available to the maximizer into `alpha`. Returns `Some(beta)` once the window
    /// has closed, meaning the minimizer will never let play reach this node.
    pub fn raise_alpha(&mut self, value: f32) -> Option<f32> {
        self.alpha = self.alpha.max(value);

        if self.alpha >= self.beta {
            Some(self.beta)
        } else {
            None
        }
    }

    /// Folds a value available to the minimizer into `beta`. Returns `Some(alpha)` once the window
    /// has closed, meaning the maximizer will never let play reach this node.
    pub fn lower_beta(&mut self, value: f32) -> Option<f32> {
        self.beta = self.beta.min(value);

        if self.beta <= self.alpha {
            Some(self.alpha)
        } else {
            None
        }
    }

    /// Tightens the bound owned by `player` if `value` is a strict improvement for them.
    ///
    /// Equal values are not improvements, so the first of several equally good choices is kept.
    pub fn improve(&mut self, player: Player, value: f32) -> bool {
        match player {
            Player::Zero if value > self.alpha => {
                self.alpha = value;
                true
            }
            Player::One if value < self.beta => {
                self.beta = value;
                true
            }
            _ => false,
        }
    }
}
