use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use serde::Serialize;

use crate::event_source::EventSource;
use crate::geometry::{SelectionRect, Word};
use crate::page::Page;
use crate::selector::{PointerEvent, Selector};
use crate::settings::Settings;
use crate::theme::Base16Palette;
use crate::viewport::Viewport;
use crate::widget::{HelpBar, PageView, SelectionPanel};

/// Upper bound of events handled between two redraws
const MAX_EVENTS_PER_FRAME: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
}

/// What `--emit` prints after the UI exits
#[derive(Debug, Serialize)]
pub struct SelectionReport<'a> {
    pub page: usize,
    pub rect: Option<SelectionRect>,
    pub words: Vec<&'a Word>,
}

pub struct App {
    pub page_num: usize,
    pub page_width: f64,
    pub page_height: f64,
    pub selector: Selector,
    pub show_word_text: bool,
    palette: &'static Base16Palette,
    /// Overlay geometry from the last draw; mouse input is mapped through it
    viewport: Option<Viewport>,
}

impl App {
    pub fn new(page: Page, settings: &Settings) -> Self {
        let palette = settings.theme_id().palette();
        Self {
            page_num: page.page_num,
            page_width: page.width,
            page_height: page.height,
            selector: Selector::new(page.visible_words()),
            show_word_text: settings.show_word_text,
            palette,
            viewport: None,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        let (text_color, border_color, bg) = self.palette.panel_colors();
        let page_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Page {} ", self.page_num))
            .title_style(Style::default().fg(text_color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg));
        let overlay = page_block.inner(chunks[0]);
        f.render_widget(page_block, chunks[0]);

        let viewport = Viewport::new(overlay, self.page_width, self.page_height);
        if self.viewport != Some(viewport) {
            debug!("Overlay viewport is now {overlay:?}");
        }
        self.viewport = Some(viewport);

        f.render_widget(
            PageView::new(&self.selector, viewport, self.palette)
                .show_word_text(self.show_word_text),
            overlay,
        );
        f.render_widget(
            SelectionPanel::new(
                self.selector.last_completed(),
                self.selector.selected_count(),
                self.palette,
            )
            .dragging(self.selector.is_dragging()),
            chunks[1],
        );
        f.render_widget(HelpBar::new(self.palette), chunks[2]);
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<AppAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Some(AppAction::Quit),
                KeyCode::Char('t') => {
                    self.show_word_text = !self.show_word_text;
                }
                _ => {}
            },
            Event::Mouse(mouse_event) => self.handle_mouse_event(*mouse_event),
            Event::Resize(cols, rows) => {
                debug!("Terminal resized to {cols}x{rows}");
            }
            _ => {}
        }
        None
    }

    /// Translate left-button mouse input into pointer events for the
    /// selector. Presses outside the overlay are ignored; drags are clamped
    /// onto it.
    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let Some(viewport) = self.viewport else {
            return;
        };

        let pointer = match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => viewport
                .cell_to_point(mouse_event.column, mouse_event.row)
                .map(PointerEvent::Press),
            MouseEventKind::Drag(MouseButton::Left) if self.selector.is_dragging() => {
                Some(PointerEvent::Move(viewport.clamped_cell_to_point(
                    mouse_event.column,
                    mouse_event.row,
                )))
            }
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release),
            _ => None,
        };

        if let Some(pointer) = pointer {
            if let Some(rect) = self.selector.handle_event(pointer) {
                info!(
                    "Selected {} words in {rect:?}",
                    self.selector.selected_count()
                );
            }
        }
    }

    pub fn selection_report(&self) -> SelectionReport<'_> {
        SelectionReport {
            page: self.page_num,
            rect: self.selector.last_completed(),
            words: self.selector.selected_words().collect(),
        }
    }
}

pub fn run_app_with_event_source<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_source: &mut dyn EventSource,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let tick_rate = Duration::from_millis(50);
    // Render once up front so mouse input has a viewport to map through
    terminal.draw(|f| app.draw(f))?;
    loop {
        let mut events_processed = 0;
        let mut should_quit = false;
        while events_processed < MAX_EVENTS_PER_FRAME
            && event_source.poll(Duration::from_millis(0))?
        {
            let event = event_source.read()?;
            events_processed += 1;
            if app.handle_event(&event) == Some(AppAction::Quit) {
                should_quit = true;
                break;
            }
        }

        if events_processed > 0 {
            terminal.draw(|f| app.draw(f))?;
        }

        if should_quit {
            return Ok(());
        }

        // If no events were processed, wait a bit to avoid busy-waiting
        if events_processed == 0 {
            let _ = event_source.poll(tick_rate)?;
        }
    }
}
