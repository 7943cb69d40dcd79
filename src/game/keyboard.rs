use crate::wordle::Status;

const N_KEYS: usize = 26;

/// Strongest feedback observed per letter across all submitted guesses.
///
/// Once a key is marked `Correct` it stays `Correct` even if a later guess
/// grades the same letter `Present` or `Absent` (strongest-status-wins).
#[derive(Clone, Debug)]
pub struct Keyboard {
    status: [Status; N_KEYS],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard {
            status: [Status::Unknown; N_KEYS],
        }
    }

    pub fn observe(&mut self, letter: char, status: Status) {
        if let Some(i) = index(letter) {
            if status > self.status[i] {
                self.status[i] = status;
            }
        }
    }

    pub fn status(&self, letter: char) -> Status {
        match index(letter) {
            Some(i) => self.status[i],
            None => Status::Unknown,
        }
    }
}

fn index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}
