//! TUI application state and logic

use crate::commands::{AnalysisResult, analyze_pair};
use crate::core::Classification;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input accepted in either field
const MAX_INPUT: usize = 32;

/// Application state
pub struct App {
    pub scrambled_input: String,
    pub word_input: String,
    pub focus: Field,
    pub current: Option<AnalysisResult>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Scrambled,
    Word,
}

impl Field {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Scrambled => Self::Word,
            Self::Word => Self::Scrambled,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub scrambled: String,
    pub word: String,
    pub classification: Classification,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total: usize,
    /// Indexed by `Classification::index`
    pub counts: [usize; 4],
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scrambled_input: String::new(),
            word_input: String::new(),
            focus: Field::Scrambled,
            current: None,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Type a scramble, TAB to the word, ENTER to score.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "ESC clears the inputs, Ctrl-C or Ctrl-Q quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// The input buffer that currently has focus
    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Scrambled => &mut self.scrambled_input,
            Field::Word => &mut self.word_input,
        }
    }

    /// Score the current inputs
    pub fn evaluate(&mut self) {
        if self.scrambled_input.is_empty() || self.word_input.is_empty() {
            self.add_message("Enter both a scramble and a word", MessageStyle::Error);
            return;
        }

        match analyze_pair(&self.scrambled_input, &self.word_input) {
            Ok(result) => {
                let classification = result.assessment.classification;
                self.stats.total += 1;
                self.stats.counts[classification.index()] += 1;
                self.history.push(HistoryEntry {
                    scrambled: result.pair.scrambled().to_string(),
                    word: result.pair.word().to_string(),
                    classification,
                });

                let style = if classification == Classification::Not {
                    MessageStyle::Info
                } else {
                    MessageStyle::Success
                };
                self.add_message(&result.message, style);
                self.current = Some(result);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Clear both inputs and return focus to the scramble
    pub fn clear_inputs(&mut self) {
        self.scrambled_input.clear();
        self.word_input.clear();
        self.focus = Field::Scrambled;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('l') if ctrl => {
                self.history.clear();
                self.stats = Statistics::default();
                self.current = None;
                self.add_message("History cleared", MessageStyle::Info);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.other();
            }
            KeyCode::Esc => {
                self.clear_inputs();
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
            }
            KeyCode::Enter => {
                if self.focus == Field::Scrambled && self.word_input.is_empty() {
                    self.focus = Field::Word;
                } else {
                    self.evaluate();
                }
            }
            KeyCode::Char(' ') => {
                self.focus = self.focus.other();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let input = self.focused_input();
                if input.len() < MAX_INPUT {
                    input.push(c.to_ascii_uppercase());
                }
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
