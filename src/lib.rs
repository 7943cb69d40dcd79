pub mod game;
pub mod logging;
pub mod tui;
pub mod wordle;
pub mod words;
