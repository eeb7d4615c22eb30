//! Text entry form state.

/// What a field accepts while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
}

impl FieldKind {
    fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Number => c.is_ascii_digit() || c == '.',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub read_only: bool,
}

impl Field {
    pub fn new(label: &'static str, kind: FieldKind) -> Self {
        Field {
            label,
            value: String::new(),
            kind,
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Input(char),
    Backspace,
    NextField,
    PrevField,
}

/// A vertical list of labelled inputs with one focused field
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        let mut form = FormState { fields, focus: 0 };
        form.skip_read_only(true);
        form
    }

    pub fn apply(&mut self, action: FormAction) {
        if self.fields.is_empty() {
            return;
        }
        match action {
            FormAction::Input(c) => {
                let field = &mut self.fields[self.focus];
                if !field.read_only && field.kind.accepts(c) {
                    field.value.push(c);
                }
            }
            FormAction::Backspace => {
                let field = &mut self.fields[self.focus];
                if !field.read_only {
                    field.value.pop();
                }
            }
            FormAction::NextField => {
                self.focus = (self.focus + 1) % self.fields.len();
                self.skip_read_only(true);
            }
            FormAction::PrevField => {
                self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
                self.skip_read_only(false);
            }
        }
    }

    /// Move focus off read-only fields, in the given direction
    fn skip_read_only(&mut self, forward: bool) {
        let len = self.fields.len();
        for _ in 0..len {
            if !self.fields[self.focus].read_only {
                return;
            }
            self.focus = if forward {
                (self.focus + 1) % len
            } else {
                self.focus.checked_sub(1).unwrap_or(len - 1)
            };
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Empty every editable field and focus the first one
    pub fn clear(&mut self) {
        for field in self.fields.iter_mut().filter(|f| !f.read_only) {
            field.value.clear();
        }
        self.focus = 0;
        self.skip_read_only(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lift_form() -> FormState {
        FormState::new(vec![
            Field::new("Exercise", FieldKind::Text),
            Field::new("Weight (kg)", FieldKind::Number),
            Field::new("Date", FieldKind::Date).with_value("2024-01-01").read_only(),
        ])
    }

    fn type_str(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.apply(FormAction::Input(c));
        }
    }

    #[test]
    fn test_typing_respects_field_kind() {
        let mut form = lift_form();
        type_str(&mut form, "Front squat");
        form.apply(FormAction::NextField);
        type_str(&mut form, "8x0.5kg");
        assert_eq!(form.value(0), "Front squat");
        assert_eq!(form.value(1), "80.5");
    }

    #[test]
    fn test_backspace() {
        let mut form = lift_form();
        type_str(&mut form, "Row");
        form.apply(FormAction::Backspace);
        assert_eq!(form.value(0), "Ro");
    }

    #[test]
    fn test_focus_skips_read_only() {
        let mut form = lift_form();
        form.apply(FormAction::NextField);
        assert_eq!(form.focus, 1);
        form.apply(FormAction::NextField);
        assert_eq!(form.focus, 0); // wraps past the read-only date
        form.apply(FormAction::PrevField);
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn test_clear_keeps_read_only_values() {
        let mut form = lift_form();
        type_str(&mut form, "Bench");
        form.apply(FormAction::NextField);
        type_str(&mut form, "70");
        form.clear();
        assert_eq!(form.value(0), "");
        assert_eq!(form.value(1), "");
        assert_eq!(form.value(2), "2024-01-01");
        assert_eq!(form.focus, 0);
    }
}
