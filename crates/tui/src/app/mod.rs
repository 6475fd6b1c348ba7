use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use api_types::Category;
use ledger::{
    CategoryFilter, Client, ClientError, Expense, ExpenseDraft, ExpenseStore, PendingOps,
    Submission, reconcile,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Entry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Amount,
    Category,
}

#[derive(Debug)]
pub struct EntryState {
    pub draft: ExpenseDraft,
    /// `Some(id)` when the form was opened over an existing record.
    /// This is the edit-vs-create decision, made once, right here.
    pub editing: Option<String>,
    pub focus: EntryField,
    pub message: Option<String>,
}

impl EntryState {
    fn create() -> Self {
        Self {
            draft: ExpenseDraft::default(),
            editing: None,
            focus: EntryField::Name,
            message: None,
        }
    }

    fn edit(record: &Expense) -> Self {
        Self {
            draft: ExpenseDraft::from_record(record),
            editing: Some(record.id.clone()),
            focus: EntryField::Name,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub expenses: ExpenseStore,
    pub filter: CategoryFilter,
    pub selected: usize,
    pub entry: EntryState,
    pub toast: Option<ToastState>,
    /// Sticky banner for a failed load; cleared by a successful reload.
    pub list_error: Option<String>,
    pub timezone: chrono_tz::Tz,
    pub currency: String,
}

impl AppState {
    /// The records the list view shows: the live filter projection.
    pub fn visible(&self) -> Vec<&Expense> {
        self.expenses.filtered(self.filter)
    }

    pub fn selected_id(&self) -> Option<String> {
        self.visible().get(self.selected).map(|r| r.id.clone())
    }
}

pub struct App {
    client: Client,
    pending: PendingOps,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let timezone = config
            .timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|err| AppError::Terminal(format!("invalid timezone: {err}")))?;

        let state = AppState {
            screen: Screen::List,
            expenses: ExpenseStore::new(),
            filter: CategoryFilter::All,
            selected: 0,
            entry: EntryState::create(),
            toast: None,
            list_error: None,
            timezone,
            currency: config.currency.clone(),
        };

        Ok(Self {
            client,
            pending: PendingOps::new(),
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.load_expenses(false).await;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            self.expire_toast();
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::Cancel => {
                if self.state.screen == Screen::Entry {
                    self.close_entry();
                }
            }
            ui::keymap::AppAction::NextField => {
                if self.state.screen == Screen::Entry {
                    self.advance_focus();
                }
            }
            ui::keymap::AppAction::Submit => {
                if self.state.screen == Screen::Entry {
                    self.submit_entry().await?;
                }
            }
            ui::keymap::AppAction::Backspace => {
                if self.state.screen == Screen::Entry {
                    self.pop_entry_char();
                }
            }
            ui::keymap::AppAction::Up => match self.state.screen {
                Screen::List => self.select_prev(),
                Screen::Entry => {
                    if self.state.entry.focus == EntryField::Category {
                        self.cycle_category(-1);
                    }
                }
            },
            ui::keymap::AppAction::Down => match self.state.screen {
                Screen::List => self.select_next(),
                Screen::Entry => {
                    if self.state.entry.focus == EntryField::Category {
                        self.cycle_category(1);
                    }
                }
            },
            ui::keymap::AppAction::Input(ch) => match self.state.screen {
                Screen::List => self.handle_list_key(ch).await?,
                Screen::Entry => self.push_entry_char(ch),
            },
            ui::keymap::AppAction::None => {}
        }

        Ok(())
    }

    async fn handle_list_key(&mut self, ch: char) -> Result<()> {
        match ch {
            'q' | 'Q' => self.should_quit = true,
            'a' | 'A' => {
                self.state.entry = EntryState::create();
                self.state.screen = Screen::Entry;
            }
            'e' | 'E' => self.open_edit(),
            'd' | 'D' => self.delete_selected().await?,
            'r' | 'R' => self.load_expenses(true).await,
            'f' | 'F' => self.cycle_filter(),
            'j' | 'J' => self.select_next(),
            'k' | 'K' => self.select_prev(),
            _ => {}
        }
        Ok(())
    }

    fn open_edit(&mut self) {
        let Some(id) = self.state.selected_id() else {
            return;
        };
        if let Some(record) = self.state.expenses.get(&id) {
            self.state.entry = EntryState::edit(record);
            self.state.screen = Screen::Entry;
        }
    }

    fn close_entry(&mut self) {
        self.state.entry = EntryState::create();
        self.state.screen = Screen::List;
    }

    fn advance_focus(&mut self) {
        self.state.entry.focus = match self.state.entry.focus {
            EntryField::Name => EntryField::Amount,
            EntryField::Amount => EntryField::Category,
            EntryField::Category => EntryField::Name,
        };
    }

    fn push_entry_char(&mut self, ch: char) {
        self.state.entry.message = None;
        match self.state.entry.focus {
            EntryField::Name => self.state.entry.draft.name.push(ch),
            EntryField::Amount => self.state.entry.draft.amount.push(ch),
            // Categories are picked with Up/Down, not typed.
            EntryField::Category => {}
        }
    }

    fn pop_entry_char(&mut self) {
        match self.state.entry.focus {
            EntryField::Name => {
                self.state.entry.draft.name.pop();
            }
            EntryField::Amount => {
                self.state.entry.draft.amount.pop();
            }
            EntryField::Category => {
                self.state.entry.draft.category = None;
            }
        }
    }

    fn cycle_category(&mut self, step: isize) {
        let all = Category::ALL;
        let len = all.len() as isize;
        let next = match self.state.entry.draft.category {
            None => {
                if step > 0 {
                    all[0]
                } else {
                    all[all.len() - 1]
                }
            }
            Some(current) => {
                let index = all.iter().position(|c| *c == current).unwrap_or(0) as isize;
                all[(((index + step) % len + len) % len) as usize]
            }
        };
        self.state.entry.draft.category = Some(next);
    }

    fn cycle_filter(&mut self) {
        let all = Category::ALL;
        self.state.filter = match self.state.filter {
            CategoryFilter::All => CategoryFilter::Only(all[0]),
            CategoryFilter::Only(current) => match all.iter().position(|c| *c == current) {
                Some(index) if index + 1 < all.len() => CategoryFilter::Only(all[index + 1]),
                _ => CategoryFilter::All,
            },
        };
        self.state.selected = 0;
    }

    fn select_next(&mut self) {
        let len = self.state.visible().len();
        if len == 0 {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.state.visible().len();
        self.state.selected = self.state.selected.min(len.saturating_sub(1));
    }

    /// Fetches the full collection and replaces the store wholesale.
    ///
    /// On failure the store is left exactly as it was; the error shows up
    /// as a sticky banner until a reload succeeds.
    async fn load_expenses(&mut self, announce: bool) {
        match self.client.list().await {
            Ok(records) => {
                self.state.expenses.load(records);
                self.state.list_error = None;
                self.clamp_selection();
                if announce {
                    self.set_toast("Expenses reloaded", ToastLevel::Info);
                }
            }
            Err(err) => {
                self.state.list_error = Some(service_message(&err));
            }
        }
    }

    async fn submit_entry(&mut self) -> Result<()> {
        let valid = match self.state.entry.draft.validate() {
            Ok(valid) => valid,
            Err(err) => {
                // Local validation failure: no network call, no mutation.
                self.state.entry.message = Some(err.to_string());
                return Ok(());
            }
        };

        match self.state.entry.editing.clone() {
            Some(id) => {
                if self.pending.begin(&id).is_err() {
                    self.state.entry.message =
                        Some("Still working on that expense, hold on.".to_string());
                    return Ok(());
                }
                let result = self.client.update(&id, &valid).await;
                self.pending.finish(&id);
                match result {
                    Ok(record) => self.apply_submission(record, Submission::Edit),
                    Err(err) => self.state.entry.message = Some(service_message(&err)),
                }
            }
            None => match self.client.create(&valid).await {
                Ok(record) => self.apply_submission(record, Submission::Create),
                Err(err) => self.state.entry.message = Some(service_message(&err)),
            },
        }

        Ok(())
    }

    /// Hands the normalized service response to the reconciler and turns
    /// the outcome into user feedback.
    fn apply_submission(&mut self, record: Expense, submission: Submission) {
        match reconcile(&mut self.state.expenses, record, submission) {
            Ok(()) => {
                let message = match submission {
                    Submission::Create => "Expense added successfully",
                    Submission::Edit => "Expense updated successfully",
                };
                self.close_entry();
                self.set_toast(message, ToastLevel::Success);
            }
            Err(err) => {
                // Divergence, not a network hiccup: retrying the form will
                // not fix it, a reload will.
                tracing::error!("reconciliation failed: {err}");
                self.close_entry();
                self.set_toast(
                    "Local list is out of sync with the service. Press r to reload.",
                    ToastLevel::Error,
                );
            }
        }
        self.clamp_selection();
    }

    async fn delete_selected(&mut self) -> Result<()> {
        let Some(id) = self.state.selected_id() else {
            return Ok(());
        };

        if self.pending.begin(&id).is_err() {
            self.set_toast("Still working on that expense, hold on.", ToastLevel::Info);
            return Ok(());
        }
        let result = self.client.delete(&id).await;
        self.pending.finish(&id);

        match result {
            Ok(()) => {
                // Only now, with the remote delete confirmed, drop it locally.
                self.state.expenses.remove(&id);
                self.clamp_selection();
                self.set_toast("Expense deleted successfully", ToastLevel::Success);
            }
            Err(err) => {
                self.set_toast(service_message(&err), ToastLevel::Error);
            }
        }

        Ok(())
    }

    fn set_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    fn expire_toast(&mut self) {
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() > TOAST_TTL)
        {
            self.state.toast = None;
        }
    }
}

fn service_message(err: &ClientError) -> String {
    match err {
        ClientError::BaseUrl(message) => format!("Invalid base url: {message}"),
        ClientError::NotFound => {
            "The service no longer has that expense. Press r to reload.".to_string()
        }
        ClientError::Rejected(message) => format!("The service rejected the request: {message}"),
        ClientError::Server(message) => format!("Service error: {message}. Please try again."),
        ClientError::Transport(_) => "Could not reach the service. Please try again.".to_string(),
    }
}
