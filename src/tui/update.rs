use super::actions::Action;
use super::{App, StatusMessage};
use crate::game::{Outcome, Phase, Session, SubmitError, Submitted};
use crate::words::{Dictionary, WordsError};

impl App {
    pub fn update(&mut self, msg: Option<Action>) {
        let Some(msg) = msg else { return };
        match msg {
            Action::Exit => {
                self.token.cancel();
                self.exit = true;
            }
            Action::Tick => self.tick_message(),
            Action::Letter(letter) => self.session.push_letter(letter),
            Action::Backspace => self.session.backspace(),
            Action::Submit => self.submit(),
            Action::Validated { guess, valid } => self.apply_validation(&guess, valid),
            Action::Restart => self.restart(),
            Action::SessionReady(result) => self.install_session(result),
        }
    }

    fn tick_message(&mut self) {
        if let Some(message) = &mut self.message {
            if message.tick() {
                self.message = None;
            }
        }
    }

    fn submit(&mut self) {
        match self.session.begin_submit() {
            Ok(guess) => self.spawn_validation(guess),
            Err(SubmitError::Incomplete) => self.show_transient("Complete Your Guess!"),
            Err(SubmitError::WrongLength) => self.show_transient("Guess must be 5 letters!"),
            // An in-flight submit resolves on its own; drop the repeat
            Err(SubmitError::Evaluating) => {}
            Err(SubmitError::Finished) => {
                self.show_transient("The game is over. Press Ctrl-n to play again.")
            }
        }
    }

    /// Run the dictionary lookup in the background and post the verdict
    /// back as an action. The child token is cancelled when a new session
    /// is installed, so a stale verdict can never land in it.
    fn spawn_validation(&mut self, guess: String) {
        let dictionary = self.dictionary.clone();
        let tx = self.action_tx.clone();

        if let Some(token) = self.child_token.take() {
            token.cancel();
        }
        let child = self.token.child_token();
        self.child_token = Some(child.clone());

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = child.cancelled() => {}
                valid = dictionary.is_valid_word(&guess) => {
                    let _ = tx.send(Some(Action::Validated { guess, valid }));
                }
            }
        });
    }

    fn apply_validation(&mut self, guess: &str, valid: bool) {
        // Drop verdicts for anything but the guess currently in flight
        if self.session.phase() != Phase::Evaluating || self.session.current_guess() != guess {
            return;
        }
        match self.session.resolve_submit(valid) {
            Submitted::NotAWord => self.show_transient("Not in word list!"),
            Submitted::Scored { outcome, .. } => match outcome {
                Outcome::Won => {
                    self.show_persistent("Great! You guessed the word!".to_string())
                }
                Outcome::Lost => self.show_persistent(format!(
                    "Game Over! The word was: {}",
                    self.session.target()
                )),
                Outcome::InProgress => self.message = None,
            },
        }
    }

    fn restart(&mut self) {
        let source = self.source.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = source.select_target().await;
            let _ = tx.send(Some(Action::SessionReady(result)));
        });
    }

    fn install_session(&mut self, result: Result<String, WordsError>) {
        match result {
            Ok(target) => {
                // A lookup still in flight belongs to the old session and
                // is dropped with it; until now it must keep running so a
                // failed refetch cannot strand the old session in
                // `Evaluating` with no verdict ever arriving
                if let Some(token) = self.child_token.take() {
                    token.cancel();
                }
                self.session = Session::new(target);
                self.message = None;
            }
            Err(err) => {
                // The current session stays playable
                tracing::warn!(%err, "could not start a new game");
                self.show_persistent("Failed to fetch the word list.".to_string());
            }
        }
    }

    fn show_transient(&mut self, text: &str) {
        self.message = Some(StatusMessage::transient(text));
    }

    fn show_persistent(&mut self, text: String) {
        self.message = Some(StatusMessage::persistent(text));
    }
}
