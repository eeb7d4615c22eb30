//! Main application logic and TUI event loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use tracing::{error, info};

use crate::cli::{AppConfig, BackendConfig};
use crate::data::aggregate::calories_on;
use crate::data::backend::{EntryBackend, HttpBackend, MemoryBackend, SqliteBackend};
use crate::data::index::{distinct_dates, entries_on, group_by_date};
use crate::data::series::{exercise_series, exercises};
use crate::data::{date_key, RecordStore, StoreError};
use crate::ui::{
    calendar::LiftCalendar,
    chart::ProgressChart,
    exercise_selector::ExerciseSelector,
    form::FormWidget,
    widgets::{format_weight, DayLifts, FoodTable, LiftTable, ScreenTabs, StatusBar},
    HelpOverlay, Theme,
};
use crate::view::{
    form::FormAction, Effect, HomeAction, HomePane, HomeView, LoadState, NutritionAction,
    NutritionView, ProgressAction, ProgressView,
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Progress,
    Nutrition,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Progress, Screen::Nutrition];

    fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Progress,
            Screen::Progress => Screen::Nutrition,
            Screen::Nutrition => Screen::Home,
        }
    }

    fn prev(self) -> Self {
        match self {
            Screen::Home => Screen::Nutrition,
            Screen::Progress => Screen::Home,
            Screen::Nutrition => Screen::Progress,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Progress => "Progress",
            Screen::Nutrition => "Nutrition",
        }
    }
}

/// One-line feedback shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Keys understood by every form
enum FormKey {
    Edit(FormAction),
    Submit,
    Leave,
}

fn form_key(key: KeyCode) -> Option<FormKey> {
    match key {
        KeyCode::Esc => Some(FormKey::Leave),
        KeyCode::Enter => Some(FormKey::Submit),
        KeyCode::Tab | KeyCode::Down => Some(FormKey::Edit(FormAction::NextField)),
        KeyCode::BackTab | KeyCode::Up => Some(FormKey::Edit(FormAction::PrevField)),
        KeyCode::Backspace => Some(FormKey::Edit(FormAction::Backspace)),
        KeyCode::Char(c) => Some(FormKey::Edit(FormAction::Input(c))),
        _ => None,
    }
}

/// Application state
pub struct App {
    theme: Theme,
    store: RecordStore,
    today: NaiveDate,
    load: LoadState,

    // Screens
    screen: Screen,
    home: HomeView,
    progress: ProgressView,
    nutrition: NutritionView,

    // UI State
    status: Option<StatusMessage>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Create an App around a store that has not been loaded yet
    pub fn new(store: RecordStore, today: NaiveDate) -> Self {
        App {
            theme: Theme::default(),
            store,
            today,
            load: LoadState::Loading,
            screen: Screen::Home,
            home: HomeView::new(today),
            progress: ProgressView::new(),
            nutrition: NutritionView::new(today),
            status: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Load entries from the backend, recording failure in the view state
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(()) => self.load = LoadState::Ready,
            Err(e) => {
                error!(error = %e, "failed to load entries");
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Whether the current screen has a form taking keystrokes
    fn is_editing(&self) -> bool {
        match self.screen {
            Screen::Home => self.home.pane != HomePane::Calendar,
            Screen::Nutrition => self.nutrition.editing,
            Screen::Progress => false,
        }
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.is_editing() {
            self.handle_form_input(key);
            return;
        }

        // Global shortcuts
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
                return;
            }
            _ => {}
        }

        // If help is shown, don't process other keys
        if self.show_help {
            return;
        }

        match key {
            KeyCode::Char('r') => {
                self.reload();
                if self.load == LoadState::Ready {
                    self.status = Some(StatusMessage::Info("Reloaded entries".to_string()));
                }
                return;
            }
            KeyCode::Tab => {
                self.screen = self.screen.next();
                return;
            }
            KeyCode::BackTab => {
                self.screen = self.screen.prev();
                return;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                self.screen = Screen::ALL[idx];
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Home => self.handle_home_navigation(key),
            Screen::Progress => self.handle_progress_navigation(key),
            Screen::Nutrition => self.handle_nutrition_navigation(key),
        }
    }

    fn handle_form_input(&mut self, key: KeyCode) {
        let Some(form_key) = form_key(key) else {
            return;
        };
        let effect = match self.screen {
            Screen::Home => self.home.update(match form_key {
                FormKey::Edit(action) => HomeAction::Form(action),
                FormKey::Submit => HomeAction::Submit,
                FormKey::Leave => HomeAction::Blur,
            }),
            Screen::Nutrition => self.nutrition.update(match form_key {
                FormKey::Edit(action) => NutritionAction::Form(action),
                FormKey::Submit => NutritionAction::Submit,
                FormKey::Leave => NutritionAction::Blur,
            }),
            Screen::Progress => Effect::None,
        };
        self.run_effect(effect);
    }

    fn handle_home_navigation(&mut self, key: KeyCode) {
        let action = match key {
            KeyCode::Left | KeyCode::Char('h') => HomeAction::MoveCursor(-1),
            KeyCode::Right | KeyCode::Char('l') => HomeAction::MoveCursor(1),
            KeyCode::Up | KeyCode::Char('k') => HomeAction::MoveCursor(-7),
            KeyCode::Down | KeyCode::Char('j') => HomeAction::MoveCursor(7),
            KeyCode::PageUp => HomeAction::ShiftMonth(-1),
            KeyCode::PageDown => HomeAction::ShiftMonth(1),
            KeyCode::Char('t') => HomeAction::JumpTo(self.today),
            KeyCode::Enter => HomeAction::SelectCursorDay,
            KeyCode::Esc => HomeAction::ClearSelection,
            KeyCode::Char('a') => HomeAction::OpenModal,
            KeyCode::Char('i') => HomeAction::FocusForm,
            _ => return,
        };
        let effect = self.home.update(action);
        self.run_effect(effect);
    }

    fn handle_progress_navigation(&mut self, key: KeyCode) {
        let action = match key {
            KeyCode::Left | KeyCode::Char('h') => ProgressAction::Prev,
            KeyCode::Right | KeyCode::Char('l') => ProgressAction::Next,
            _ => return,
        };
        self.progress.update(action, self.store.lifts());
    }

    fn handle_nutrition_navigation(&mut self, key: KeyCode) {
        let action = match key {
            KeyCode::Char('[') | KeyCode::Left => NutritionAction::ShiftDay(-1),
            KeyCode::Char(']') | KeyCode::Right => NutritionAction::ShiftDay(1),
            KeyCode::Char('t') => NutritionAction::JumpTo(self.today),
            KeyCode::Char('i') => NutritionAction::FocusForm,
            _ => return,
        };
        let effect = self.nutrition.update(action);
        self.run_effect(effect);
    }

    /// Run a view's request against the store and report the outcome
    fn run_effect(&mut self, effect: Effect) {
        let outcome = match effect {
            Effect::None => return,
            Effect::SubmitLift(draft) => {
                let saved = self
                    .store
                    .add_lift(&draft.exercise, &draft.weight, &draft.date)
                    .map(|lift| {
                        format!(
                            "Added {} - {}kg on {}",
                            lift.exercise,
                            format_weight(lift.weight),
                            lift.date
                        )
                    });
                if saved.is_ok() {
                    self.home.update(HomeAction::Saved);
                }
                saved
            }
            Effect::SubmitFood(draft) => {
                let saved = self
                    .store
                    .add_food(
                        &draft.name,
                        &draft.amount,
                        &draft.calories_per_100g,
                        &draft.date,
                    )
                    .map(|food| {
                        format!("Added {} ({} kcal) on {}", food.name, food.calories, food.date)
                    });
                if saved.is_ok() {
                    self.nutrition.update(NutritionAction::Saved);
                }
                saved
            }
        };

        // The backend answered, so show the logs again even if the last load failed
        if outcome.is_ok() && matches!(self.load, LoadState::Failed(_)) {
            self.load = LoadState::Ready;
        }

        self.status = Some(match outcome {
            Ok(message) => StatusMessage::Info(message),
            Err(StoreError::Validation(e)) => StatusMessage::Error(e.to_string()),
            Err(e @ StoreError::Communication(_)) => {
                StatusMessage::Error(format!("{e}. Your input was kept, press Enter to retry"))
            }
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        // Main layout: tabs, body, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tabs
                Constraint::Min(10),   // Body
                Constraint::Length(2), // Status bar
            ])
            .split(size);

        ScreenTabs::new(self.screen, &self.theme).render(frame, main_chunks[0]);

        match self.screen {
            Screen::Home => self.render_home(frame, main_chunks[1]),
            Screen::Progress => self.render_progress(frame, main_chunks[1]),
            Screen::Nutrition => self.render_nutrition(frame, main_chunks[1]),
        }

        let backend = self.store.backend_name();
        StatusBar::new(&backend, self.status.as_ref(), &self.theme).render(frame, main_chunks[2]);

        // Render help overlay if active
        if self.show_help {
            HelpOverlay::new(&self.theme).render(frame, size);
        }
    }

    fn render_home(&self, frame: &mut ratatui::Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Form
                Constraint::Min(12),   // Calendar
            ])
            .split(columns[0]);

        FormWidget::new(&self.home.form, "Add Lift", &self.theme).render(
            frame,
            left[0],
            self.home.pane == HomePane::Form,
        );

        let days = group_by_date(self.store.lifts());
        LiftCalendar::new(
            self.home.cursor,
            self.home.selected,
            self.today,
            &days,
            &self.theme,
        )
        .render(frame, left[1], self.home.pane == HomePane::Calendar);

        match self.home.selected {
            Some(selected) => {
                let right = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(8), Constraint::Min(5)])
                    .split(columns[1]);
                let key = date_key(selected);
                let lifts = entries_on(self.store.lifts(), &key);
                DayLifts::new(&key, &lifts, &self.theme).render(frame, right[0]);
                LiftTable::new(self.store.lifts(), &self.load, &self.theme).render(frame, right[1]);
            }
            None => {
                LiftTable::new(self.store.lifts(), &self.load, &self.theme)
                    .render(frame, columns[1]);
            }
        }

        if let Some(modal) = &self.home.modal {
            FormWidget::new(modal, "Add Lift", &self.theme).render_modal(frame, area);
        }
    }

    fn render_progress(&self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Exercise selector
                Constraint::Min(8),    // Chart
            ])
            .split(area);

        let lifts = self.store.lifts();
        let names = exercises(lifts);
        let current = self.progress.current(lifts);
        ExerciseSelector::new(&names, current, &self.theme).render(frame, chunks[0]);

        let series = current
            .map(|name| exercise_series(lifts, name))
            .unwrap_or_default();
        let title = current.unwrap_or("Weight");
        ProgressChart::new(&series, title, &self.theme).render(frame, chunks[1]);
    }

    fn render_nutrition(&self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Form
                Constraint::Length(1), // Selected day
                Constraint::Min(5),    // Foods
            ])
            .split(area);

        FormWidget::new(&self.nutrition.form, "Add Food", &self.theme).render(
            frame,
            chunks[0],
            self.nutrition.editing,
        );

        let key = self.nutrition.selected_key();
        let logged_days = distinct_dates(self.store.foods()).len();
        let day_line = Line::from(vec![
            Span::styled("Select date: ", self.theme.title_style()),
            Span::styled(key.clone(), self.theme.accent_style()),
            Span::styled(
                format!("  ([ / ] to change, t for today)  {logged_days} day(s) logged"),
                self.theme.dimmed_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(day_line), chunks[1]);

        let foods = entries_on(self.store.foods(), &key);
        let total = calories_on(self.store.foods(), &key);
        FoodTable::new(&key, &foods, total, &self.load, &self.theme).render(frame, chunks[2]);
    }
}

fn build_backend(config: &BackendConfig) -> Result<Box<dyn EntryBackend>> {
    let backend: Box<dyn EntryBackend> = match config {
        BackendConfig::Http { base_url } => {
            Box::new(HttpBackend::new(base_url).context("Failed to create HTTP client")?)
        }
        BackendConfig::Sqlite { path } => Box::new(
            SqliteBackend::open(path)
                .with_context(|| format!("Failed to open database: {path:?}"))?,
        ),
        BackendConfig::Memory => Box::new(MemoryBackend::new()),
    };
    Ok(backend)
}

/// Restore terminal to normal state
fn restore_terminal() {
    // Best effort cleanup - ignore errors since we may be in a panic
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<()> {
    let backend = build_backend(&config.backend)?;
    let store = RecordStore::new(backend);
    info!(backend = %store.backend_name(), today = %config.today, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e).context("Failed to setup terminal");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to create terminal");
        }
    };

    let mut app = App::new(store, config.today);
    let result = run_main_loop(&mut terminal, &mut app);

    // Always restore terminal, regardless of result
    restore_terminal();
    terminal.show_cursor().ok();

    result
}

/// Main application loop
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Show the loading state before the first (blocking) fetch
    terminal.draw(|f| app.render(f))?;
    app.reload();

    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_input(key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            info!("exiting");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::backend::EntryBackend;
    use crate::data::error::BackendError;
    use crate::data::models::{FoodEntry, LiftEntry, NewFood, NewLift};
    use crate::data::DownBackend;
    use crate::ui::test_support::render_to_string;

    /// Accepts new entries but cannot list them
    struct WriteOnlyBackend(MemoryBackend);

    impl EntryBackend for WriteOnlyBackend {
        fn describe(&self) -> String {
            "write only".to_string()
        }

        fn list_lifts(&self) -> Result<Vec<LiftEntry>, BackendError> {
            Err(BackendError::Status {
                method: "GET",
                url: "http://flaky/lifts".to_string(),
                status: 502,
            })
        }

        fn create_lift(&self, lift: &NewLift) -> Result<LiftEntry, BackendError> {
            self.0.create_lift(lift)
        }

        fn list_foods(&self) -> Result<Vec<FoodEntry>, BackendError> {
            self.0.list_foods()
        }

        fn create_food(&self, food: &NewFood) -> Result<FoodEntry, BackendError> {
            self.0.create_food(food)
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn memory_app() -> App {
        let mut app = App::new(RecordStore::new(Box::new(MemoryBackend::new())), day(2024, 1, 8));
        app.reload();
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        app.handle_input(key, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen_text(app: &App) -> String {
        render_to_string(120, 40, |frame| app.render(frame))
    }

    #[test]
    fn test_screen_cycle() {
        let mut app = memory_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Progress);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Nutrition);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, Screen::Progress);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_add_lift_from_home_form() {
        let mut app = memory_app();
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "Squat");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2024-01-01");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.lifts().len(), 1);
        assert_eq!(app.store.lifts()[0].date, "2024-01-01");
        assert_eq!(app.home.form.value(0), "");
        assert!(matches!(app.status, Some(StatusMessage::Info(_))));

        // 'q' is text while the form is focused
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_validation_error_keeps_input() {
        let mut app = memory_app();
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "Squat");
        press(&mut app, KeyCode::Enter);

        assert!(app.store.lifts().is_empty());
        assert_eq!(
            app.status,
            Some(StatusMessage::Error("weight is required".to_string()))
        );
        assert_eq!(app.home.form.value(0), "Squat");
    }

    #[test]
    fn test_backend_failure_keeps_modal_open() {
        let mut app = App::new(RecordStore::new(Box::new(DownBackend)), day(2024, 1, 8));
        app.reload();
        assert!(matches!(app.load, LoadState::Failed(_)));

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Bench");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "70");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.status, Some(StatusMessage::Error(_))));
        let modal = app.home.modal.as_ref().expect("modal stays open");
        assert_eq!(modal.value(0), "Bench");
        assert_eq!(modal.value(2), "2024-01-08");
    }

    #[test]
    fn test_calendar_modal_adds_on_cursor_day() {
        let mut app = memory_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Deadlift");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "140");
        press(&mut app, KeyCode::Enter);

        assert!(app.home.modal.is_none());
        assert_eq!(app.store.lifts()[0].date, "2024-01-09");

        press(&mut app, KeyCode::Enter);
        let text = screen_text(&app);
        assert!(text.contains("Lifts on 2024-01-09"));
        assert!(text.contains("Deadlift - 140 kg"));
    }

    #[test]
    fn test_add_food_and_daily_total() {
        let mut app = memory_app();
        press(&mut app, KeyCode::Char('3'));
        for (name, amount, per_100g) in [("Rice", "200", "50"), ("Chicken", "100", "80")] {
            press(&mut app, KeyCode::Char('i'));
            type_str(&mut app, name);
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, amount);
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, per_100g);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Esc);
        }

        assert_eq!(app.store.foods().len(), 2);
        let text = screen_text(&app);
        assert!(text.contains("Foods for 2024-01-08"));
        assert!(text.contains("Total Calories: 180"));

        press(&mut app, KeyCode::Char(']'));
        let text = screen_text(&app);
        assert!(text.contains("Total Calories: 0"));
        assert!(text.contains("No foods logged."));
    }

    #[test]
    fn test_progress_defaults_to_first_exercise() {
        let mut app = memory_app();
        app.store.add_lift("Squat", "100", "2024-01-01").unwrap();
        app.store.add_lift("Bench", "60", "2024-01-02").unwrap();
        app.store.add_lift("Squat", "105", "2024-01-08").unwrap();
        press(&mut app, KeyCode::Char('2'));

        assert_eq!(app.progress.current(app.store.lifts()), Some("Squat"));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.progress.current(app.store.lifts()), Some("Bench"));
    }

    #[test]
    fn test_empty_states_render_after_load() {
        let app = memory_app();
        let text = screen_text(&app);
        assert!(text.contains("No lifts recorded."));
        assert!(text.contains("January 2024"));
    }

    #[test]
    fn test_successful_save_clears_failed_load() {
        let backend = WriteOnlyBackend(MemoryBackend::new());
        let mut app = App::new(RecordStore::new(Box::new(backend)), day(2024, 1, 8));
        app.reload();
        assert!(matches!(app.load, LoadState::Failed(_)));
        assert!(screen_text(&app).contains("Could not load entries"));

        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "Squat");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2024-01-08");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.load, LoadState::Ready);
        let text = screen_text(&app);
        assert!(!text.contains("Could not load entries"));
        assert!(text.contains("Squat"));
    }

    #[test]
    fn test_help_toggle() {
        let mut app = memory_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // Navigation is blocked while help is open
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Home);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
