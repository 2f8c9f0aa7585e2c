use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

use super::Mark;

/// A participant of the game. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player holding [`Mark::X`] if `marks_first` is set, [`Mark::O`] otherwise.
    pub fn new(name: impl Into<String>, marks_first: bool) -> Self {
        let mark = if marks_first { Mark::X } else { Mark::O };
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Rotating queue of the players assigned to a game.
/// Players are stored in move order, the one holding [`Mark::X`] first.
#[derive(Clone, Debug)]
pub struct PlayerQueue {
    players: SmallVec<[Player; 2]>,
    cursor: usize,
}

impl PlayerQueue {
    /// Orders `a` and `b` by mark. Callers guarantee the marks are distinct.
    pub(crate) fn new(a: Player, b: Player) -> Self {
        let players = if a.mark() == Mark::X {
            SmallVec::from_buf([a, b])
        } else {
            SmallVec::from_buf([b, a])
        };
        Self { players, cursor: 0 }
    }

    pub fn as_slice(&self) -> &[Player] {
        self.players.as_slice()
    }

    /// Get the player whose move is next without advancing the queue.
    pub fn current(&self) -> &Player {
        &self.players[self.cursor]
    }

    /// Advance the queue by one and return the player whose move is next.
    pub fn advance(&mut self) -> &Player {
        self.cursor = (self.cursor + 1) % self.players.len();
        self.current()
    }

    /// Move the queue back to the first player.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn find_by_mark(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|player| player.mark() == mark)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mark_assignment() {
        assert_eq!(Player::new("alice", true).mark(), Mark::X);
        assert_eq!(Player::new("bob", false).mark(), Mark::O);
        assert_eq!(Player::new("bob", false).name(), "bob");
    }

    #[test]
    fn test_x_goes_first() {
        let queue = PlayerQueue::new(Player::new("bob", false), Player::new("alice", true));
        assert_eq!(queue.current().name(), "alice");
        itertools::assert_equal(
            queue.as_slice().iter().map(Player::mark),
            [Mark::X, Mark::O],
        );
    }

    #[test]
    fn test_cyclic_iteration() {
        let mut queue = PlayerQueue::new(Player::new("alice", true), Player::new("bob", false));
        // check that we are starting with the first player
        assert_eq!(queue.current().name(), "alice");
        // calling multiple times doesn't change anything
        assert_eq!(queue.current().name(), "alice");
        itertools::assert_equal(
            std::iter::from_fn(|| Some(queue.advance().name().to_string())).take(5),
            ["bob", "alice", "bob", "alice", "bob"],
        );
    }

    #[test]
    fn test_rewind() {
        let mut queue = PlayerQueue::new(Player::new("alice", true), Player::new("bob", false));
        queue.advance();
        assert_eq!(queue.current().mark(), Mark::O);
        queue.rewind();
        assert_eq!(queue.current().mark(), Mark::X);
        // rewinding the first player is a no-op
        queue.rewind();
        assert_eq!(queue.current().mark(), Mark::X);
    }

    #[test]
    fn test_find_by_mark() {
        let queue = PlayerQueue::new(Player::new("bob", false), Player::new("alice", true));
        assert_eq!(queue.find_by_mark(Mark::O).map(Player::name), Some("bob"));
        assert_eq!(queue.find_by_mark(Mark::X).map(Player::name), Some("alice"));
    }
}
