//! Progress screen: exercise choice for the weight chart.

use crate::data::series::{default_exercise, exercises};
use crate::data::LiftEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressView {
    /// Explicit choice; `None` falls back to the first exercise logged
    pub chosen: Option<String>,
}

impl ProgressView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The exercise to chart
    pub fn current<'a>(&'a self, lifts: &'a [LiftEntry]) -> Option<&'a str> {
        self.chosen.as_deref().or_else(|| default_exercise(lifts))
    }

    pub fn update(&mut self, action: ProgressAction, lifts: &[LiftEntry]) {
        let names = exercises(lifts);
        if names.is_empty() {
            return;
        }
        let position = self
            .current(lifts)
            .and_then(|name| names.iter().position(|n| n == name));
        let next = match action {
            ProgressAction::Next => match position {
                Some(i) => (i + 1) % names.len(),
                None => 0,
            },
            ProgressAction::Prev => match position {
                Some(i) => i.checked_sub(1).unwrap_or(names.len() - 1),
                None => names.len() - 1,
            },
        };
        self.chosen = Some(names[next].clone());
    }
}
