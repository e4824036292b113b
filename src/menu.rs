//! Numbered menu options shown at the console.

use std::ops::RangeInclusive;
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};

/// A menu whose options are picked by typing their number.
///
/// Options are numbered from 1 in declaration order, and the enum
/// discriminant is the number the player types.
pub trait MenuChoice: Copy + std::fmt::Display + IntoEnumIterator + EnumCount {
    /// Looks up the option for a typed number.
    fn from_number(number: u32) -> Option<Self>;

    /// Number shown next to this option.
    fn number(self) -> u32;

    /// Inclusive range of accepted numbers.
    fn range() -> RangeInclusive<u32> {
        1..=Self::COUNT as u32
    }

    /// Menu lines in the form `1) Label`.
    fn lines() -> Vec<String> {
        Self::iter()
            .map(|choice| format!("{}) {}", choice.number(), choice))
            .collect()
    }
}

/// Options on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, FromRepr, strum::Display)]
#[repr(u32)]
pub enum MainMenuChoice {
    /// Start a new game.
    Play = 1,
    /// Open the settings screen.
    Settings = 2,
    /// Leave the program.
    Exit = 3,
}

/// Options while a game is paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, FromRepr, strum::Display)]
#[repr(u32)]
pub enum PauseChoice {
    /// Resume the current game untouched.
    Continue = 1,
    /// Abandon the current game and start a fresh one.
    Restart = 2,
    /// Abandon the current game and return to the main menu.
    Menu = 3,
}

/// Options after a game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, FromRepr, strum::Display)]
#[repr(u32)]
pub enum GameOverChoice {
    /// Start another game.
    #[strum(to_string = "Play again")]
    PlayAgain = 1,
    /// Return to the main menu.
    Menu = 2,
}

macro_rules! impl_menu_choice {
    ($($menu:ty),+ $(,)?) => {
        $(
            impl MenuChoice for $menu {
                fn from_number(number: u32) -> Option<Self> {
                    Self::from_repr(number)
                }

                fn number(self) -> u32 {
                    self as u32
                }
            }
        )+
    };
}

impl_menu_choice!(MainMenuChoice, PauseChoice, GameOverChoice);
