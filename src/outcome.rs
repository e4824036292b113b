//! Game results and the running score.

use derive_getters::Getters;
use std::fmt;

/// How a finished game ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Outcome {
    /// The player completed a line.
    #[strum(to_string = "You win!")]
    PlayerWin,
    /// The opponent completed a line.
    #[strum(to_string = "You lose!")]
    AiWin,
    /// The board filled with no line.
    #[strum(to_string = "It's a stalemate!")]
    Stalemate,
}

/// Results of every game finished in this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games the player won.
    wins: u32,
    /// Games the opponent won.
    losses: u32,
    /// Games that filled the board.
    stalemates: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::PlayerWin => &mut self.wins,
            Outcome::AiWin => &mut self.losses,
            Outcome::Stalemate => &mut self.stalemates,
        };
        *counter = counter.saturating_add(1);
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.stalemates)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} won, {} lost, {} stalemate(s)",
            self.wins, self.losses, self.stalemates
        )
    }
}
