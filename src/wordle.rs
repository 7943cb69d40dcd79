use std::fmt;

pub const WORD_LEN: usize = 5;

/// Feedback for a single letter. `Unknown` means the letter has not been
/// graded yet; the matcher itself only ever produces the other three.
///
/// The variants are ordered from weakest to strongest so that keyboard
/// coloring can keep the strongest status seen so far.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Status {
    Unknown,
    Absent,
    Present,
    Correct,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Letter {
    pub letter: Option<char>,
    pub status: Status,
}

impl Default for Letter {
    fn default() -> Self {
        Self::new()
    }
}

impl Letter {
    pub fn new() -> Self {
        Letter {
            letter: None,
            status: Status::Unknown,
        }
    }

    /// Set or clear the letter. Only lowercase ascii letters are stored.
    pub fn set(&mut self, letter: Option<char>) {
        match letter {
            Some(letter) => {
                if letter.is_ascii_lowercase() {
                    self.letter = Some(letter);
                }
            }
            None => self.letter = None,
        }
    }
}

/// One row of the attempt grid: five slots, each empty or holding a letter
/// with its grading status.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Word {
    pub letters: [Letter; WORD_LEN],
}

impl Default for Word {
    fn default() -> Self {
        Self::new()
    }
}

impl Word {
    pub fn new() -> Self {
        Word {
            letters: [Letter::new(); WORD_LEN],
        }
    }

    /// Set the letter at a position of the word
    ///
    /// # Example
    ///
    /// ```
    /// use wordle_tui::wordle::Word;
    /// let mut word = Word::new();
    /// word.set_letter(Some('e'), 0);
    /// assert_eq!(word.letters[0].letter, Some('e'));
    /// ```
    pub fn set_letter(&mut self, letter: Option<char>, position: usize) {
        self.letters[position].set(letter);
    }

    /// The filled letters, in order, as a lowercase string.
    pub fn text(&self) -> String {
        self.letters.iter().filter_map(|l| l.letter).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters.iter() {
            match letter.letter {
                Some(c) => write!(f, "{}", c.to_uppercase())?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// Grade a guess against the target word.
///
/// Two passes so that duplicate letters are handled correctly: the first
/// pass consumes exact matches, the second marks leftover guess letters
/// `Present` by consuming the leftmost remaining occurrence in the target.
/// A target letter is consumed at most once, so the number of `Correct`
/// plus `Present` labels for a letter never exceeds its count in the target.
///
/// # Example
///
/// ```
/// use wordle_tui::wordle::{match_guess, Status::*};
/// assert_eq!(
///     match_guess("pappy", "happy"),
///     [Present, Correct, Correct, Correct, Correct]
/// );
/// ```
pub fn match_guess(guess: &str, target: &str) -> [Status; WORD_LEN] {
    debug_assert_eq!(guess.len(), WORD_LEN);
    debug_assert_eq!(target.len(), WORD_LEN);

    let mut result = [Status::Absent; WORD_LEN];
    let mut remaining: [Option<char>; WORD_LEN] = [None; WORD_LEN];

    // Find all correct letters; everything else stays available for pass two
    for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = Status::Correct;
        } else {
            remaining[i] = Some(t);
        }
    }

    // Misplaced letters consume the leftmost remaining target slot
    for (i, g) in guess.chars().enumerate() {
        if result[i] != Status::Absent {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
            result[i] = Status::Present;
            *slot = None;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use Status::*;

    #[test]
    fn identical_guess_is_all_correct() {
        assert_eq!(
            match_guess("happy", "happy"),
            [Correct, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn compare_words() {
        let expected = [Absent, Absent, Present, Present, Present];
        assert_eq!(match_guess("slate", "water"), expected);

        let expected = [Present, Absent, Present, Absent, Absent];
        assert_eq!(match_guess("eerie", "water"), expected);

        let expected = [Absent, Correct, Correct, Correct, Correct];
        assert_eq!(match_guess("eater", "water"), expected);

        let expected = [Absent, Absent, Present, Absent, Present];
        assert_eq!(match_guess("speed", "abide"), expected);

        let expected = [Present, Absent, Present, Present, Absent];
        assert_eq!(match_guess("speed", "erase"), expected);

        let expected = [Correct, Absent, Correct, Absent, Absent];
        assert_eq!(match_guess("speed", "steal"), expected);

        let expected = [Absent, Present, Correct, Present, Absent];
        assert_eq!(match_guess("speed", "crepe"), expected);
    }

    #[test]
    fn duplicate_letter_consumed_once() {
        // The target has a single 'p' worth of leftover after the exact
        // matches, so only the first misplaced 'p' may be marked present.
        let expected = [Present, Correct, Correct, Correct, Correct];
        assert_eq!(match_guess("pappy", "happy"), expected);
    }

    #[test]
    fn duplicate_letters_never_overcount() {
        let expected = [Correct, Present, Absent, Absent, Correct];
        assert_eq!(match_guess("allee", "apple"), expected);
    }

    #[test]
    fn correct_and_present_bounded_by_target_count() {
        let targets = ["happy", "apple", "goose", "eerie", "water"];
        let guesses = ["pappy", "allee", "geese", "steel", "otter"];
        for target in targets {
            for guess in guesses {
                let labels = match_guess(guess, target);
                for letter in 'a'..='z' {
                    let matched = guess
                        .chars()
                        .zip(labels.iter())
                        .filter(|(g, s)| *g == letter && **s != Absent)
                        .count();
                    let available = target.chars().filter(|t| *t == letter).count();
                    assert!(
                        matched <= available,
                        "{guess} vs {target}: {letter} matched {matched} > {available}"
                    );
                }
            }
        }
    }

    #[test]
    fn word_text_skips_empty_slots() {
        let mut word = Word::new();
        word.set_letter(Some('a'), 0);
        word.set_letter(Some('b'), 1);
        assert_eq!(word.text(), "ab");
        assert_eq!(format!("{word}"), "AB___");
    }

    #[test]
    fn letter_rejects_non_lowercase() {
        let mut letter = Letter::new();
        letter.set(Some('A'));
        assert_eq!(letter.letter, None);
        letter.set(Some('a'));
        assert_eq!(letter.letter, Some('a'));
        letter.set(None);
        assert_eq!(letter.letter, None);
    }
}
