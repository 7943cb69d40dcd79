use super::App;
use crate::game::{Phase, MAX_ATTEMPTS};
use crate::wordle::{Letter, Status, WORD_LEN};
use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{block::*, *},
};

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];
const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(MAX_ATTEMPTS as u16 * TILE_HEIGHT + 1),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Fill(1),
            ])
            .split(border.inner(area));

        self.render_grid(rows[0], buf);
        self.render_message(rows[1], buf);
        self.render_keyboard(rows[2], buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Wordle ".bold());
        let instructions = Title::from(Line::from(vec![
            " Submit ".into(),
            "<Enter> ".blue().bold(),
            " New game ".into(),
            "<Ctrl-n> ".blue().bold(),
            " Quit ".into(),
            "<Esc> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(TILE_HEIGHT); MAX_ATTEMPTS])
            .split(area);

        let (cursor_row, cursor_col) = self.session.cursor();
        let typing = self.session.phase() == Phase::AwaitingInput;

        for (i, row_area) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(TILE_WIDTH); WORD_LEN])
                .flex(layout::Flex::Center)
                .split(*row_area);
            let word = &self.session.rows()[i];
            for (j, cell) in cells.iter().enumerate() {
                let selected = typing && i == cursor_row && j == cursor_col;
                render_tile(word.letters[j], *cell, buf, selected);
            }
        }
    }

    fn render_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(message) = &self.message {
            let style = match message.persistent {
                true => Style::new().bold(),
                false => Style::new(),
            };
            Paragraph::new(message.text.as_str())
                .centered()
                .style(style)
                .render(area, buf);
        }
    }

    fn render_keyboard(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); KEY_ROWS.len()])
            .split(area);

        for (i, keys) in KEY_ROWS.iter().enumerate() {
            let mut spans: Vec<Span> = vec![];
            for key in keys.chars() {
                let style = status_style(self.session.keyboard().status(key));
                spans.push(Span::styled(
                    format!(" {} ", key.to_uppercase()),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            spans.pop();
            Paragraph::new(Line::from(spans))
                .centered()
                .render(rows[i], buf);
        }
    }
}

fn render_tile(letter: Letter, area: Rect, buf: &mut Buffer, selected: bool) {
    let block = match selected {
        true => Block::new()
            .borders(Borders::ALL)
            .border_set(border::DOUBLE),
        false => Block::new().borders(Borders::ALL),
    };

    let text = match letter.letter {
        Some(l) => l.to_uppercase().to_string(),
        None => " ".to_string(),
    };

    Paragraph::new(text)
        .bold()
        .centered()
        .block(block)
        .style(status_style(letter.status))
        .render(area, buf);
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Unknown => Style::default().bg(Color::Black),
        Status::Absent => Style::default().bg(Color::Red),
        Status::Present => Style::default().bg(Color::LightYellow).fg(Color::Black),
        Status::Correct => Style::default()
            .bg(Color::LightGreen)
            .fg(Color::Black)
            .bold(),
    }
}
