//! TUI application state and logic

use crate::config::InputPolicy;
use crate::game::{Game, Submission};
use crate::validator::Dictionary;
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

/// Application state
pub struct App<D: Dictionary> {
    pub game: Game<D>,
    pub start_words: Vec<String>,
    /// Text being typed, not yet submitted
    pub input: String,
    pub on_reject: InputPolicy,
    pub messages: Vec<Message>,
    pub rounds_played: usize,
    pub best_score: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(game: Game<D>, start_words: Vec<String>, on_reject: InputPolicy) -> Self {
        Self {
            game,
            start_words,
            input: String::new(),
            on_reject,
            messages: vec![Message {
                text: "Welcome! Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            rounds_played: 0,
            best_score: 0,
            should_quit: false,
        }
    }

    /// Pick a fresh root word and reset the round
    pub fn new_round(&mut self) {
        self.game.start_round(&self.start_words, &mut rand::rng());
        self.rounds_played += 1;
        self.input.clear();

        if self.game.used_fallback() {
            let text = format!(
                "No word list, using default root word '{}'",
                self.game.root()
            );
            self.add_message(&text, MessageStyle::Error);
        }

        let text = format!("New round: {}", self.game.root().to_uppercase());
        self.add_message(&text, MessageStyle::Info);
    }

    /// Submit the current input to the game
    pub fn submit_input(&mut self) {
        match self.game.submit(&self.input) {
            Submission::Accepted { word, points } => {
                self.input.clear();
                self.best_score = self.best_score.max(self.game.score());
                self.add_message(&format!("{word} +{points}"), MessageStyle::Success);
            }
            Submission::Rejected { alert, .. } => {
                if self.on_reject == InputPolicy::Clear {
                    self.input.clear();
                }
                self.add_message(&alert.title, MessageStyle::Error);
            }
            Submission::Ignored => {}
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.game.acknowledge();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_round();
                return;
            }
            _ => {}
        }

        if self.game.alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
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
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(score) => println!("Final score: {score}"),
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B, D>(terminal: &mut Terminal<B>, mut app: App<D>) -> Result<usize>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
{
    app.new_round();

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

    Ok(app.game.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleSet;
    use crate::validator::WordSet;

    fn app(on_reject: InputPolicy) -> App<WordSet> {
        let game = Game::new(RuleSet::default(), WordSet::new("en", ["fist", "wits"]));
        let mut app = App::new(game, vec!["swift".to_string()], on_reject);
        app.new_round();
        app
    }

    fn press(app: &mut App<WordSet>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<WordSet>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn new_round_uses_start_words() {
        let app = app(InputPolicy::Keep);
        assert_eq!(app.game.root(), "swift");
        assert_eq!(app.rounds_played, 1);
    }

    #[test]
    fn accepted_word_clears_input() {
        let mut app = app(InputPolicy::Keep);
        type_word(&mut app, "fist");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert_eq!(app.game.score(), 4);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejection_keeps_input_by_default() {
        let mut app = app(InputPolicy::Keep);
        type_word(&mut app, "tin");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input, "tin");
        assert!(app.game.alert().is_some());
    }

    #[test]
    fn rejection_clears_input_when_configured() {
        let mut app = app(InputPolicy::Clear);
        type_word(&mut app, "tin");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert!(app.game.alert().is_some());
    }

    #[test]
    fn alert_swallows_typing_until_dismissed() {
        let mut app = app(InputPolicy::Keep);
        type_word(&mut app, "tin");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input, "tin");

        press(&mut app, KeyCode::Esc);
        assert!(app.game.alert().is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "ti");
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let mut app = app(InputPolicy::Keep);
        type_word(&mut app, "fist");
        press(&mut app, KeyCode::Enter);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.game.score(), 0);
        assert!(app.game.used_words().is_empty());
        assert_eq!(app.best_score, 4);
        assert_eq!(app.rounds_played, 2);
    }

    #[test]
    fn best_score_tracks_current_round() {
        let mut app = app(InputPolicy::Keep);
        type_word(&mut app, "fist");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.best_score, 4);

        type_word(&mut app, "wits");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.best_score, 8);

        app.new_round();
        assert_eq!(app.game.score(), 0);
        assert_eq!(app.best_score, 8);
    }

    #[test]
    fn empty_word_list_warns_about_default_root() {
        let game = Game::new(RuleSet::default(), WordSet::new("en", ["some"]));
        let mut app = App::new(game, Vec::new(), InputPolicy::Keep);
        app.new_round();

        assert_eq!(app.game.root(), "some");
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error
            && m.text == "No word list, using default root word 'some'"));
    }

    #[test]
    fn word_list_rounds_do_not_warn() {
        let app = app(InputPolicy::Keep);
        assert!(app.messages.iter().all(|m| m.style != MessageStyle::Error));
    }

    #[test]
    fn esc_quits_when_no_alert() {
        let mut app = app(InputPolicy::Keep);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(InputPolicy::Keep);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
