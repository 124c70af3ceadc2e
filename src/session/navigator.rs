//! Navigation hook fired once per solved puzzle.

use crate::core::GameId;

/// Receives the one-shot "puzzle solved" signal.
///
/// Implemented for any `FnMut(GameId)` closure.
pub trait Navigator {
    /// Called once, after the win delay, for each game that is won.
    fn puzzle_solved(&mut self, game: GameId);
}

impl<F> Navigator for F
where
    F: FnMut(GameId),
{
    fn puzzle_solved(&mut self, game: GameId) {
        self(game);
    }
}

/// Navigator that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn puzzle_solved(&mut self, _game: GameId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_navigator() {
        let mut seen = Vec::new();
        {
            let mut nav = |game: GameId| seen.push(game);
            nav.puzzle_solved(GameId(3));
            nav.puzzle_solved(GameId(4));
        }
        assert_eq!(seen, vec![GameId(3), GameId(4)]);
    }
}
