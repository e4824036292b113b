//! Game session: the screen state machine and the play loop.

use crate::console::{InputReader, Renderer, Reply, View};
use crate::error::SessionError;
use crate::menu::{GameOverChoice, MainMenuChoice, MenuChoice, PauseChoice};
use crate::outcome::{Outcome, Tally};
use derive_getters::Getters;
use std::ops::RangeInclusive;
use tictactoe_core::{Board, Mark, Opponent, PlaceError, Position, rules};
use tracing::{debug, info, instrument, warn};

/// Board side length used by the console game.
pub const DEFAULT_DIMENSION: usize = 3;

/// Answer to the move prompt that opens the pause menu.
const PAUSE: u32 = 0;

/// Screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// Main menu.
    Menu,
    /// Settings placeholder.
    Settings,
    /// A game is running.
    Play,
    /// The pause menu is open during a game.
    Paused,
    /// The current game was abandoned for a fresh one.
    Restart,
    /// The player completed a line.
    PlayerWin,
    /// The opponent completed a line.
    AiWin,
    /// The board filled with no line.
    Stalemate,
    /// The session is over.
    Exit,
}

impl ScreenState {
    /// The finished game's outcome, for game-over states.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            ScreenState::PlayerWin => Some(Outcome::PlayerWin),
            ScreenState::AiWin => Some(Outcome::AiWin),
            ScreenState::Stalemate => Some(Outcome::Stalemate),
            _ => None,
        }
    }
}

impl From<Outcome> for ScreenState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWin => ScreenState::PlayerWin,
            Outcome::AiWin => ScreenState::AiWin,
            Outcome::Stalemate => ScreenState::Stalemate,
        }
    }
}

/// Side due to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The player at the console.
    Player,
    /// The computer opponent.
    Ai,
}

impl Turn {
    /// The other side.
    pub fn flip(self) -> Self {
        match self {
            Turn::Player => Turn::Ai,
            Turn::Ai => Turn::Player,
        }
    }

    /// Mark this side places.
    pub fn mark(self) -> Mark {
        match self {
            Turn::Player => Mark::Player,
            Turn::Ai => Mark::Ai,
        }
    }

    /// Outcome if this side completes a line.
    pub fn win(self) -> Outcome {
        match self {
            Turn::Player => Outcome::PlayerWin,
            Turn::Ai => Outcome::AiWin,
        }
    }
}

/// How the player's move prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerMove {
    /// A mark was placed.
    Placed(Position),
    /// The game was abandoned (restart, menu or end of input).
    Aborted,
}

/// A console session: menus, games and the running score.
///
/// The session exclusively owns its board for its whole lifetime. The
/// board is cleared for every new game and released when the session is
/// dropped or [closed](GameSession::close).
///
/// Drive it by calling [`update`](GameSession::update) until
/// [`is_running`](GameSession::is_running) returns `false`.
#[derive(Debug, Getters)]
pub struct GameSession<I, R, O> {
    /// Current screen.
    state: ScreenState,
    /// Side that moves next.
    next_move: Turn,
    /// The board.
    board: Board,
    /// Empty cells left in the current game.
    moves_remaining: usize,
    /// Answers from the player.
    #[getter(skip)]
    input: I,
    /// Output sink.
    renderer: R,
    /// Chooses the computer's cells.
    #[getter(skip)]
    opponent: O,
    /// Results of finished games.
    tally: Tally,
    /// Moves of the current game in order.
    history: Vec<(Mark, Position)>,
}

impl<I, R, O> GameSession<I, R, O>
where
    I: InputReader,
    R: Renderer,
    O: Opponent,
{
    /// Creates a session on the main menu with an empty board.
    ///
    /// # Errors
    ///
    /// Fails if the board cannot be created for `dimension`.
    #[instrument(skip(input, renderer, opponent))]
    pub fn new(dimension: usize, input: I, renderer: R, opponent: O) -> Result<Self, SessionError> {
        let board = Board::new(dimension)?;
        let moves_remaining = board.cell_count();
        info!(dimension, "Created game session");

        Ok(Self {
            state: ScreenState::Menu,
            next_move: Turn::Player,
            board,
            moves_remaining,
            input,
            renderer,
            opponent,
            tally: Tally::default(),
            history: Vec::new(),
        })
    }

    /// `false` once the session has reached [`ScreenState::Exit`].
    pub fn is_running(&self) -> bool {
        self.state != ScreenState::Exit
    }

    /// Runs the handler for the current screen.
    ///
    /// A game runs to completion within one call; its result screen is
    /// shown by the next call.
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned. Bad answers re-prompt and
    /// end of input moves the session to [`ScreenState::Exit`].
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn update(&mut self) -> Result<(), SessionError> {
        match self.state {
            ScreenState::Menu => self.main_menu(),
            ScreenState::Settings => self.settings(),
            ScreenState::Play | ScreenState::Restart => self.play_game(),
            ScreenState::Paused => {
                if self.pause()? {
                    self.run_turns()?;
                }
                Ok(())
            }
            ScreenState::PlayerWin | ScreenState::AiWin | ScreenState::Stalemate => {
                self.game_over()
            }
            ScreenState::Exit => Ok(()),
        }
    }

    /// Ends the session, releasing the board, and returns the final score.
    #[instrument(skip(self))]
    pub fn close(self) -> Tally {
        info!(games = self.tally.games(), "Closing game session");
        self.tally
    }

    /// Clears the board and counters and shows the empty board.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> Result<(), SessionError> {
        self.board.clear();
        self.moves_remaining = self.board.cell_count();
        self.next_move = Turn::Player;
        self.history.clear();
        self.state = ScreenState::Play;
        info!("Game started");

        self.renderer.render(&View::GameStart)?;
        self.renderer.render(&View::Board(&self.board))?;
        Ok(())
    }

    /// Plays one turn for the side due to move.
    ///
    /// The turn flips before the move is resolved. After the move the
    /// session checks for a completed line, then for a full board, and
    /// shows the board only if the game goes on. If the player abandons
    /// the game from the pause menu nothing is placed and the state
    /// names where to go next.
    #[instrument(skip(self), fields(turn = ?self.next_move, remaining = self.moves_remaining))]
    pub fn play_turn(&mut self) -> Result<(), SessionError> {
        let mover = self.next_move;
        self.next_move = mover.flip();

        let position = match mover {
            Turn::Player => match self.player_move()? {
                PlayerMove::Placed(position) => position,
                PlayerMove::Aborted => return Ok(()),
            },
            Turn::Ai => match self.ai_move()? {
                Some(position) => position,
                None => {
                    warn!("Opponent found no empty cell");
                    self.finish(Outcome::Stalemate);
                    return Ok(());
                }
            },
        };

        self.history.push((mover.mark(), position));
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        debug!(?mover, %position, remaining = self.moves_remaining, "Move applied");

        if rules::detected_line(&self.board) {
            self.finish(mover.win());
        } else if self.moves_remaining == 0 {
            self.finish(Outcome::Stalemate);
        } else {
            self.renderer.render(&View::Board(&self.board))?;
        }
        Ok(())
    }

    fn main_menu(&mut self) -> Result<(), SessionError> {
        self.renderer.render(&View::MainMenu)?;
        let Some(choice) = self.choose::<MainMenuChoice>()? else {
            return Ok(());
        };

        self.state = match choice {
            MainMenuChoice::Play => ScreenState::Play,
            MainMenuChoice::Settings => ScreenState::Settings,
            MainMenuChoice::Exit => ScreenState::Exit,
        };
        debug!(?choice, next = ?self.state, "Main menu choice");
        Ok(())
    }

    fn settings(&mut self) -> Result<(), SessionError> {
        self.renderer.render(&View::SettingsNotice)?;
        self.state = ScreenState::Menu;
        Ok(())
    }

    fn play_game(&mut self) -> Result<(), SessionError> {
        self.start_game()?;
        self.run_turns()
    }

    fn run_turns(&mut self) -> Result<(), SessionError> {
        while self.state == ScreenState::Play {
            self.play_turn()?;
        }
        Ok(())
    }

    fn player_move(&mut self) -> Result<PlayerMove, SessionError> {
        let cells = u32::try_from(self.board.cell_count()).unwrap_or(u32::MAX);
        self.renderer.render(&View::YourTurn { cells })?;

        loop {
            let Some(choice) = self.prompt(PAUSE..=cells)? else {
                return Ok(PlayerMove::Aborted);
            };

            if choice == PAUSE {
                if !self.pause()? {
                    return Ok(PlayerMove::Aborted);
                }
                self.renderer.render(&View::YourTurn { cells })?;
                continue;
            }

            let Some(position) = Position::from_cell_number(choice, self.board.dimension()) else {
                self.renderer.render(&View::InvalidOption {
                    range: PAUSE..=cells,
                })?;
                continue;
            };

            match self.board.place(position, Mark::Player) {
                Ok(()) => return Ok(PlayerMove::Placed(position)),
                Err(PlaceError::Occupied { .. }) => {
                    debug!(%position, "Player picked an occupied cell");
                    self.renderer.render(&View::OccupiedCell)?;
                }
                Err(PlaceError::OutOfBounds { .. }) => {
                    self.renderer.render(&View::InvalidOption {
                        range: PAUSE..=cells,
                    })?;
                }
            }
        }
    }

    fn ai_move(&mut self) -> Result<Option<Position>, SessionError> {
        let Some(position) = self.opponent.choose(&self.board) else {
            return Ok(None);
        };
        self.board.place(position, Mark::Ai)?;
        Ok(Some(position))
    }

    /// Shows the pause menu. Returns `true` if play continues.
    fn pause(&mut self) -> Result<bool, SessionError> {
        self.state = ScreenState::Paused;
        info!("Game paused");
        self.renderer.render(&View::PauseMenu)?;

        let Some(choice) = self.choose::<PauseChoice>()? else {
            return Ok(false);
        };

        match choice {
            PauseChoice::Continue => {
                self.state = ScreenState::Play;
                self.renderer.render(&View::Resumed)?;
                self.renderer.render(&View::Board(&self.board))?;
                Ok(true)
            }
            PauseChoice::Restart => {
                info!("Game abandoned for a restart");
                self.state = ScreenState::Restart;
                Ok(false)
            }
            PauseChoice::Menu => {
                info!("Game abandoned for the main menu");
                self.state = ScreenState::Menu;
                Ok(false)
            }
        }
    }

    fn game_over(&mut self) -> Result<(), SessionError> {
        let Some(outcome) = self.state.outcome() else {
            return Ok(());
        };
        self.renderer.render(&View::GameOver {
            board: &self.board,
            outcome,
            tally: &self.tally,
        })?;

        let Some(choice) = self.choose::<GameOverChoice>()? else {
            return Ok(());
        };
        self.state = match choice {
            GameOverChoice::PlayAgain => ScreenState::Play,
            GameOverChoice::Menu => ScreenState::Menu,
        };
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.tally.record(outcome);
        self.state = outcome.into();
        info!(?outcome, moves = self.history.len(), "Game over");
    }

    fn choose<M: MenuChoice>(&mut self) -> Result<Option<M>, SessionError> {
        Ok(self.prompt(M::range())?.and_then(M::from_number))
    }

    /// Reads answers until one lies in `range`.
    ///
    /// Returns `None` on end of input, after moving to
    /// [`ScreenState::Exit`].
    fn prompt(&mut self, range: RangeInclusive<u32>) -> Result<Option<u32>, SessionError> {
        loop {
            match self.input.read_choice(range.clone())? {
                Reply::Choice(choice) => return Ok(Some(choice)),
                Reply::Invalid => {
                    self.renderer.render(&View::InvalidOption {
                        range: range.clone(),
                    })?;
                }
                Reply::EndOfInput => {
                    info!("End of input, shutting down");
                    self.state = ScreenState::Exit;
                    return Ok(None);
                }
            }
        }
    }
}
