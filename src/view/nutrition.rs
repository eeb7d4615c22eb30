//! Nutrition screen: food form and the day being reviewed.

use chrono::{Days, NaiveDate};

use super::form::{Field, FieldKind, FormAction, FormState};
use super::{Effect, FoodDraft};
use crate::data::date_key;

const NAME: usize = 0;
const AMOUNT: usize = 1;
const CALORIES_PER_100G: usize = 2;
const DATE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionAction {
    ShiftDay(i64),
    JumpTo(NaiveDate),
    FocusForm,
    Blur,
    Form(FormAction),
    Submit,
    /// The submitted food was stored
    Saved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionView {
    pub form: FormState,
    /// Day whose foods and total are shown
    pub selected: NaiveDate,
    pub editing: bool,
}

impl NutritionView {
    pub fn new(today: NaiveDate) -> Self {
        NutritionView {
            form: FormState::new(vec![
                Field::new("Food name", FieldKind::Text),
                Field::new("Amount (g)", FieldKind::Number),
                Field::new("Calories per 100g", FieldKind::Number),
                Field::new("Date (YYYY-MM-DD)", FieldKind::Date).with_value(date_key(today)),
            ]),
            selected: today,
            editing: false,
        }
    }

    pub fn selected_key(&self) -> String {
        date_key(self.selected)
    }

    pub fn update(&mut self, action: NutritionAction) -> Effect {
        match action {
            NutritionAction::ShiftDay(days) => {
                let moved = if days >= 0 {
                    self.selected.checked_add_days(Days::new(days.unsigned_abs()))
                } else {
                    self.selected.checked_sub_days(Days::new(days.unsigned_abs()))
                };
                if let Some(date) = moved {
                    self.selected = date;
                }
            }
            NutritionAction::JumpTo(date) => self.selected = date,
            NutritionAction::FocusForm => self.editing = true,
            NutritionAction::Blur => self.editing = false,
            NutritionAction::Form(form_action) => {
                if self.editing {
                    self.form.apply(form_action);
                }
            }
            NutritionAction::Submit => {
                if self.editing {
                    return Effect::SubmitFood(FoodDraft {
                        name: self.form.value(NAME).to_string(),
                        amount: self.form.value(AMOUNT).to_string(),
                        calories_per_100g: self.form.value(CALORIES_PER_100G).to_string(),
                        date: self.form.value(DATE).to_string(),
                    });
                }
            }
            NutritionAction::Saved => {
                self.form.clear();
                self.form.set_value(DATE, self.selected_key());
            }
        }
        Effect::None
    }
}
