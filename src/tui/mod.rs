use std::io::{self, stdout, Stdout};

use crossterm::{execute, terminal::*};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::game::Session;
use crate::words::{DictionaryApi, WordSource};

use actions::Action;

mod actions;
mod events;
mod ui;
mod update;

const TICK_MS: u64 = 250;
/// Transient messages disappear after 1.5 seconds, i.e. six ticks.
const MESSAGE_TICKS: u8 = 6;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore().unwrap();
        original_hook(panic_info);
    }));
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// A status line message, either pinned or aging out tick by tick.
pub struct StatusMessage {
    pub text: String,
    pub persistent: bool,
    ticks_left: u8,
}

impl StatusMessage {
    fn transient(text: &str) -> Self {
        StatusMessage {
            text: text.to_string(),
            persistent: false,
            ticks_left: MESSAGE_TICKS,
        }
    }

    fn persistent(text: String) -> Self {
        StatusMessage {
            text,
            persistent: true,
            ticks_left: 0,
        }
    }

    /// Age the message by one tick; returns true once it should be dropped.
    fn tick(&mut self) -> bool {
        if self.persistent {
            return false;
        }
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}

pub struct App {
    exit: bool,
    session: Session,
    source: WordSource,
    dictionary: DictionaryApi,
    message: Option<StatusMessage>,
    action_tx: mpsc::UnboundedSender<Option<Action>>,
    action_rx: mpsc::UnboundedReceiver<Option<Action>>,
    token: CancellationToken,
    child_token: Option<CancellationToken>,
}

impl App {
    pub fn init(target: String, source: WordSource, dictionary: DictionaryApi) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        App {
            exit: false,
            session: Session::new(target),
            source,
            dictionary,
            message: None,
            action_tx,
            action_rx,
            token: CancellationToken::new(),
            child_token: None,
        }
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let task = self.handle_events(self.action_tx.clone());

        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;

            if let Some(action) = self.action_rx.recv().await {
                self.update(action);
            }
        }
        task.abort();
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}
