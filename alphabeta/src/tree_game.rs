use std::cell::Cell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use engine::{GameError, GameState, Player};
use rand::rngs::StdRng;
use rand::Rng;

/// An explicit game tree. Each node records the player to move in it, so a tree may give the same
/// player several moves in a row.
#[derive(Debug)]
pub struct Node {
    player: Player,
    outcome: Outcome,
}

#[derive(Debug)]
enum Outcome {
    Value(f32),
    Children(Vec<Rc<Node>>),
    // A finished game whose result cannot be computed.
    Unscored,
}

impl Node {
    pub fn leaf(value: f32) -> Node {
        Node {
            player: Player::Zero,
            outcome: Outcome::Value(value),
        }
    }

    pub fn unscored() -> Node {
        Node {
            player: Player::Zero,
            outcome: Outcome::Unscored,
        }
    }

    pub fn max(children: Vec<Node>) -> Node {
        Self::branch(Player::Zero, children)
    }

    pub fn min(children: Vec<Node>) -> Node {
        Self::branch(Player::One, children)
    }

    pub fn branch(player: Player, children: Vec<Node>) -> Node {
        assert!(!children.is_empty(), "a branch needs at least one child");

        Node {
            player,
            outcome: Outcome::Children(children.into_iter().map(Rc::new).collect()),
        }
    }

    /// Swaps the players of every node and negates every leaf.
    pub fn mirror(&self) -> Node {
        let outcome = match &self.outcome {
            Outcome::Value(value) => Outcome::Value(-value),
            Outcome::Children(children) => {
                Outcome::Children(children.iter().map(|c| Rc::new(c.mirror())).collect())
            }
            Outcome::Unscored => Outcome::Unscored,
        };

        Node {
            player: self.player.opponent(),
            outcome,
        }
    }

    /// The longest path from this node to a leaf, in plies.
    pub fn height(&self) -> usize {
        match &self.outcome {
            Outcome::Children(children) => {
                1 + children.iter().map(|c| c.height()).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// A random tree with small integer leaves, so ties are common. The player to move at each
    /// branch is random, so turns do not alternate.
    pub fn random(rng: &mut StdRng, max_height: usize) -> Node {
        let children = (0..rng.gen_range(1..=4))
            .map(|_| {
                if max_height <= 1 || rng.gen_bool(0.25) {
                    Node::leaf(rng.gen_range(-4i32..=4) as f32)
                } else {
                    Node::random(rng, max_height - 1)
                }
            })
            .collect();

        let player = if rng.gen_bool(0.5) { Player::Zero } else { Player::One };

        Node::branch(player, children)
    }
}

/// A position in a `Node` tree. Clones share a counter of the positions visited by a search.
#[derive(Clone, Debug)]
pub struct TreeGameState {
    node: Rc<Node>,
    visits: Rc<Cell<usize>>,
}

impl TreeGameState {
    pub fn new(node: Node) -> Self {
        Self {
            node: Rc::new(node),
            visits: Rc::new(Cell::new(0)),
        }
    }

    pub fn visits(&self) -> usize {
        self.visits.get()
    }

    fn children(&self) -> &[Rc<Node>] {
        match &self.node.outcome {
            Outcome::Children(children) => children,
            _ => &[],
        }
    }

    fn child(&self, node: &Rc<Node>) -> Self {
        Self {
            node: node.clone(),
            visits: self.visits.clone(),
        }
    }
}

impl GameState for TreeGameState {
    type Action = usize;

    /// The three ply example tree of Russell and Norvig, with a value of 3.
    fn initial() -> Self {
        Self::new(Node::max(vec![
            Node::min(vec![Node::leaf(3.0), Node::leaf(12.0), Node::leaf(8.0)]),
            Node::min(vec![Node::leaf(2.0), Node::leaf(4.0), Node::leaf(6.0)]),
            Node::min(vec![Node::leaf(14.0), Node::leaf(5.0), Node::leaf(2.0)]),
        ]))
    }

    fn is_terminal(&self) -> bool {
        self.visits.set(self.visits.get() + 1);
        self.children().is_empty()
    }

    fn terminal_value(&self) -> Result<f32, GameError> {
        match self.node.outcome {
            Outcome::Value(value) => Ok(value),
            _ => Err(GameError::NonTerminalState),
        }
    }

    fn player_to_move(&self) -> Player {
        self.node.player
    }

    fn successors(&self) -> Vec<Self> {
        self.children().iter().map(|c| self.child(c)).collect()
    }

    fn is_legal_move(&self, action: &Self::Action) -> bool {
        *action < self.children().len()
    }

    fn take_action(&self, action: &Self::Action) -> Result<Self, GameError> {
        self.children()
            .get(*action)
            .map(|c| self.child(c))
            .ok_or_else(|| GameError::IllegalMove(action.to_string()))
    }

    fn turn_instructions(&self) -> &'static str {
        "Enter the index of a child:"
    }
}

impl Display for TreeGameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.node.outcome {
            Outcome::Value(value) => write!(f, "Leaf({})", value),
            Outcome::Children(children) => write!(
                f,
                "Branch(player {}, {} children)",
                self.node.player,
                children.len()
            ),
            Outcome::Unscored => write!(f, "Unscored"),
        }
    }
}

/// Plain minimax without pruning.
pub fn minimax(state: &TreeGameState) -> f32 {
    if state.is_terminal() {
        return state.terminal_value().unwrap();
    }

    let values = state.successors().iter().map(minimax).collect::<Vec<_>>();

    match state.player_to_move() {
        Player::Zero => values.into_iter().fold(f32::NEG_INFINITY, f32::max),
        Player::One => values.into_iter().fold(f32::INFINITY, f32::min),
    }
}

/// Plain minimax without pruning, scoring states at `depth` or terminal states with `heuristic`.
pub fn depth_limited_minimax<S, H>(state: &S, depth: usize, heuristic: &H) -> f32
where
    S: GameState,
    H: Fn(&S) -> f32,
{
    if depth == 0 || state.is_terminal() {
        return heuristic(state);
    }

    let values = state
        .successors()
        .iter()
        .map(|s| depth_limited_minimax(s, depth - 1, heuristic))
        .collect::<Vec<_>>();

    match state.player_to_move() {
        Player::Zero => values.into_iter().fold(f32::NEG_INFINITY, f32::max),
        Player::One => values.into_iter().fold(f32::INFINITY, f32::min),
    }
}
