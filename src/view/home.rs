//! Home screen: lift form, calendar, and add-lift modal.

use chrono::{Days, Months, NaiveDate};

use super::form::{Field, FieldKind, FormAction, FormState};
use super::{Effect, LiftDraft};
use crate::data::date_key;

const EXERCISE: usize = 0;
const WEIGHT: usize = 1;
const DATE: usize = 2;

/// Which part of the home screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePane {
    Calendar,
    Form,
    Modal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    /// Move the calendar cursor by a number of days
    MoveCursor(i64),
    /// Move the calendar cursor by whole months
    ShiftMonth(i32),
    JumpTo(NaiveDate),
    SelectCursorDay,
    ClearSelection,
    FocusForm,
    Blur,
    OpenModal,
    Form(FormAction),
    Submit,
    /// The submitted lift was stored
    Saved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub form: FormState,
    pub modal: Option<FormState>,
    pub cursor: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub pane: HomePane,
}

fn lift_form(date: Option<NaiveDate>) -> FormState {
    let date_field = match date {
        Some(d) => Field::new("Date", FieldKind::Date)
            .with_value(date_key(d))
            .read_only(),
        None => Field::new("Date (YYYY-MM-DD)", FieldKind::Date),
    };
    FormState::new(vec![
        Field::new("Exercise", FieldKind::Text),
        Field::new("Weight (kg)", FieldKind::Number),
        date_field,
    ])
}

impl HomeView {
    pub fn new(today: NaiveDate) -> Self {
        HomeView {
            form: lift_form(None),
            modal: None,
            cursor: today,
            selected: None,
            pane: HomePane::Calendar,
        }
    }

    /// The form currently receiving input, if any
    pub fn active_form(&self) -> Option<&FormState> {
        match self.pane {
            HomePane::Calendar => None,
            HomePane::Form => Some(&self.form),
            HomePane::Modal => self.modal.as_ref(),
        }
    }

    fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.pane {
            HomePane::Calendar => None,
            HomePane::Form => Some(&mut self.form),
            HomePane::Modal => self.modal.as_mut(),
        }
    }

    pub fn update(&mut self, action: HomeAction) -> Effect {
        match action {
            HomeAction::MoveCursor(days) => {
                let moved = if days >= 0 {
                    self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
                } else {
                    self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
                };
                if let Some(date) = moved {
                    self.cursor = date;
                }
            }
            HomeAction::ShiftMonth(months) => {
                let moved = if months >= 0 {
                    self.cursor.checked_add_months(Months::new(months.unsigned_abs()))
                } else {
                    self.cursor.checked_sub_months(Months::new(months.unsigned_abs()))
                };
                if let Some(date) = moved {
                    self.cursor = date;
                }
            }
            HomeAction::JumpTo(date) => self.cursor = date,
            HomeAction::SelectCursorDay => self.selected = Some(self.cursor),
            HomeAction::ClearSelection => self.selected = None,
            HomeAction::FocusForm => self.pane = HomePane::Form,
            HomeAction::Blur => {
                if self.pane == HomePane::Modal {
                    self.modal = None;
                }
                self.pane = HomePane::Calendar;
            }
            HomeAction::OpenModal => {
                self.modal = Some(lift_form(Some(self.cursor)));
                self.pane = HomePane::Modal;
            }
            HomeAction::Form(form_action) => {
                if let Some(form) = self.active_form_mut() {
                    form.apply(form_action);
                }
            }
            HomeAction::Submit => {
                if let Some(form) = self.active_form() {
                    return Effect::SubmitLift(LiftDraft {
                        exercise: form.value(EXERCISE).to_string(),
                        weight: form.value(WEIGHT).to_string(),
                        date: form.value(DATE).to_string(),
                    });
                }
            }
            HomeAction::Saved => match self.pane {
                HomePane::Modal => {
                    self.modal = None;
                    self.pane = HomePane::Calendar;
                }
                HomePane::Form => self.form.clear(),
                HomePane::Calendar => {}
            },
        }
        Effect::None
    }
}
