pub mod keyboard;

pub use keyboard::Keyboard;

use thiserror::Error;

use crate::wordle::{match_guess, Status, Word, WORD_LEN};
use crate::words::Dictionary;

pub const MAX_ATTEMPTS: usize = 6;

/// Where the session currently is in the input/evaluation cycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// The current row still has room for letters.
    AwaitingInput,
    /// Five letters entered, waiting for a submit.
    RowComplete,
    /// A submit is in flight at the dictionary.
    Evaluating,
    Won,
    Lost,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// A submit that never reached evaluation. All of these are recoverable:
/// the entered letters stay in place and no attempt is consumed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("the guess does not have five letters yet")]
    Incomplete,
    #[error("the assembled guess is not five letters")]
    WrongLength,
    #[error("a guess is already being evaluated")]
    Evaluating,
    #[error("the game is already over")]
    Finished,
}

/// Result of evaluating a submitted row.
#[derive(Debug, PartialEq, Eq)]
pub enum Submitted {
    /// The dictionary did not recognize the word. The row is kept for
    /// correction and the attempt is not consumed.
    NotAWord,
    /// The guess was graded and the row advanced.
    Scored {
        feedback: [Status; WORD_LEN],
        outcome: Outcome,
    },
}

/// One play-through: the hidden target, the attempt grid, the cursor and
/// the per-key feedback. Restarting a game replaces the whole session, so
/// stale feedback or cursor values can never leak into the next one.
pub struct Session {
    target: String,
    rows: [Word; MAX_ATTEMPTS],
    row: usize,
    col: usize,
    phase: Phase,
    keyboard: Keyboard,
}

impl Session {
    /// `target` must be a lowercase five-letter word; the word source
    /// guarantees this.
    pub fn new(target: String) -> Self {
        debug_assert_eq!(target.len(), WORD_LEN);
        debug_assert!(target.chars().all(|c| c.is_ascii_lowercase()));
        Session {
            target,
            rows: [Word::new(); MAX_ATTEMPTS],
            row: 0,
            col: 0,
            phase: Phase::AwaitingInput,
            keyboard: Keyboard::new(),
        }
    }

    /// Append a letter to the current row. Ignored while a submit is being
    /// evaluated and once the game is over.
    pub fn push_letter(&mut self, letter: char) {
        if self.phase != Phase::AwaitingInput {
            return;
        }
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return;
        }
        if self.col < WORD_LEN {
            self.rows[self.row].set_letter(Some(letter), self.col);
            self.col += 1;
            if self.col == WORD_LEN {
                self.phase = Phase::RowComplete;
            }
        }
    }

    /// Clear the slot before the cursor. Ignored while evaluating and in
    /// terminal states.
    pub fn backspace(&mut self) {
        if !matches!(self.phase, Phase::AwaitingInput | Phase::RowComplete) {
            return;
        }
        if self.col > 0 {
            self.col -= 1;
            self.rows[self.row].set_letter(None, self.col);
            self.phase = Phase::AwaitingInput;
        }
    }

    /// Accept a submit and hand back the assembled guess for validation.
    /// The session stays in `Evaluating` until [`Session::resolve_submit`]
    /// is called; further submits are rejected in the meantime.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        match self.phase {
            Phase::AwaitingInput => Err(SubmitError::Incomplete),
            Phase::Evaluating => Err(SubmitError::Evaluating),
            Phase::Won | Phase::Lost => Err(SubmitError::Finished),
            Phase::RowComplete => {
                let guess = self.rows[self.row].text();
                // Should not happen given the phase guard
                if guess.len() != WORD_LEN {
                    return Err(SubmitError::WrongLength);
                }
                self.phase = Phase::Evaluating;
                Ok(guess)
            }
        }
    }

    /// Apply the dictionary verdict for the guess returned by
    /// [`Session::begin_submit`]. An unrecognized word reverts to
    /// `RowComplete` with the letters preserved; a recognized one is graded,
    /// reflected onto the grid and keyboard, and advances the row.
    pub fn resolve_submit(&mut self, valid: bool) -> Submitted {
        debug_assert_eq!(self.phase, Phase::Evaluating);
        if !valid {
            self.phase = Phase::RowComplete;
            return Submitted::NotAWord;
        }

        let guess = self.rows[self.row].text();
        let feedback = match_guess(&guess, &self.target);
        for (i, status) in feedback.iter().enumerate() {
            self.rows[self.row].letters[i].status = *status;
            if let Some(letter) = self.rows[self.row].letters[i].letter {
                self.keyboard.observe(letter, *status);
            }
        }

        self.row += 1;
        self.col = 0;
        let outcome = if guess == self.target {
            self.phase = Phase::Won;
            Outcome::Won
        } else if self.row == MAX_ATTEMPTS {
            self.phase = Phase::Lost;
            Outcome::Lost
        } else {
            self.phase = Phase::AwaitingInput;
            Outcome::InProgress
        };
        tracing::debug!(guess = %guess, row = self.row, ?outcome, "guess scored");

        Submitted::Scored { feedback, outcome }
    }

    /// Submit the current row against a dictionary: validate, then grade.
    pub async fn submit<D: Dictionary>(&mut self, dictionary: &D) -> Result<Submitted, SubmitError> {
        let guess = self.begin_submit()?;
        let valid = dictionary.is_valid_word(&guess).await;
        Ok(self.resolve_submit(valid))
    }

    pub fn rows(&self) -> &[Word; MAX_ATTEMPTS] {
        &self.rows
    }

    /// (row, col) of the cursor; col == 5 means the row is full.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn current_guess(&self) -> String {
        if self.row < MAX_ATTEMPTS {
            self.rows[self.row].text()
        } else {
            String::new()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
            _ => Outcome::InProgress,
        }
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The answer, revealed only once the game is lost.
    pub fn revealed_target(&self) -> Option<&str> {
        (self.phase == Phase::Lost).then_some(self.target.as_str())
    }
}
