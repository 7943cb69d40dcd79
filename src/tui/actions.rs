use crate::words::WordsError;

pub enum Action {
    Exit,
    Tick,
    Letter(char),
    Backspace,
    Submit,
    Restart,
    /// Dictionary verdict for an in-flight guess.
    Validated {
        guess: String,
        valid: bool,
    },
    /// A freshly fetched target for a new game.
    SessionReady(Result<String, WordsError>),
}
