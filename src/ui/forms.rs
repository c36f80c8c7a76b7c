use chrono::NaiveDate;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::RosterError;
use crate::seed::DATE_FORMAT;

/// Input state of the "new person" form above the table.
#[derive(Default, Clone, Debug)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    /// Raw text of the birth date field; parsed only when adding.
    pub birth_date: String,
    pub(crate) active: PersonField,
}

/// Fields available within the person form, in tab order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PersonField {
    #[default]
    FirstName,
    LastName,
    BirthDate,
}

impl PersonField {
    pub(crate) const ALL: [PersonField; 3] = [
        PersonField::FirstName,
        PersonField::LastName,
        PersonField::BirthDate,
    ];

    /// Label drawn in front of the input.
    pub(crate) fn label(self) -> &'static str {
        match self {
            PersonField::FirstName => "First Name:",
            PersonField::LastName => "Last Name:",
            PersonField::BirthDate => "Birth Date:",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            PersonField::BirthDate => "YYYY-MM-DD",
            _ => "<required>",
        }
    }
}

impl PersonForm {
    pub(crate) fn focus(&mut self, field: PersonField) {
        self.active = field;
    }

    pub(crate) fn value(&self, field: PersonField) -> &str {
        match field {
            PersonField::FirstName => &self.first_name,
            PersonField::LastName => &self.last_name,
            PersonField::BirthDate => &self.birth_date,
        }
    }

    fn value_mut(&mut self, field: PersonField) -> &mut String {
        match field {
            PersonField::FirstName => &mut self.first_name,
            PersonField::LastName => &mut self.last_name,
            PersonField::BirthDate => &mut self.birth_date,
        }
    }

    /// Append a character to the active field. The date field only takes
    /// digits and dashes.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let accepted = match self.active {
            PersonField::BirthDate => ch.is_ascii_digit() || ch == '-',
            _ => !ch.is_control(),
        };
        if accepted {
            self.value_mut(self.active).push(ch);
        }
        accepted
    }

    pub(crate) fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    /// Both names must be non-empty. No trimming: a single space counts.
    pub(crate) fn check_names(&self) -> Result<(), RosterError> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            Err(RosterError::EmptyRequiredField)
        } else {
            Ok(())
        }
    }

    /// An empty date field means "no birth date".
    pub(crate) fn parse_birth_date(&self) -> Result<Option<NaiveDate>, RosterError> {
        if self.birth_date.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&self.birth_date, DATE_FORMAT)
            .map(Some)
            .map_err(|_| RosterError::InvalidBirthDate(self.birth_date.clone()))
    }

    /// Reset every input. Focus stays where it is.
    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.birth_date.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty() && self.birth_date.is_empty()
    }

    /// Render a single form row. `focused` is false while the table has focus
    /// so no field looks active.
    pub(crate) fn build_line(&self, field: PersonField, focused: bool) -> Line<'static> {
        let value = self.value(field);
        let is_active = focused && self.active == field;

        let display = if value.is_empty() {
            field.placeholder().to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{:<12}", field.label())),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: PersonField) -> usize {
        self.value(field).chars().count()
    }
}
