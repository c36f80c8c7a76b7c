//! Domain model for the roster. A `Person` is a light-weight data holder that
//! the table renders row by row; ids come from an explicit `IdSequence` that
//! whoever constructs records owns and passes in.

use std::fmt;

use chrono::NaiveDate;

/// Hands out record ids. The counter starts at zero and is bumped before each
/// allocation, so the first id issued is 1 and ids never repeat within the
/// lifetime of one sequence.
#[derive(Debug, Default, Clone)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> u32 {
        self.last += 1;
        self.last
    }

    /// The most recently issued id, or 0 when nothing was allocated yet.
    pub fn last_issued(&self) -> u32 {
        self.last
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the roster table.
pub struct Person {
    id: u32,
    first_name: String,
    last_name: String,
    /// Optional because the add form accepts an empty date.
    birth_date: Option<NaiveDate>,
}

impl Person {
    /// Build a record with a freshly allocated id. Nothing is validated here;
    /// the add flow checks the names before calling in.
    pub fn new(
        ids: &mut IdSequence,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Overwrite the id. Only meant for correcting a record by hand; the normal
    /// flow never reassigns ids.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.birth_date = birth_date;
    }

    /// Compare the data fields and ignore the id. Restored rows match the seed
    /// by content only since they get new ids.
    pub fn same_content(&self, other: &Person) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.birth_date == other.birth_date
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.last_issued(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.last_issued(), 2);
    }

    #[test]
    fn new_person_takes_next_id_and_accepts_empty_values() {
        let mut ids = IdSequence::new();
        let first = Person::new(&mut ids, "Ada", "Lovelace", None);
        let blank = Person::new(&mut ids, "", "", None);

        assert_eq!(first.id(), 1);
        assert_eq!(blank.id(), 2);
        assert_eq!(blank.first_name(), "");
        assert!(blank.birth_date().is_none());
    }

    #[test]
    fn setters_overwrite_fields() {
        let mut ids = IdSequence::new();
        let mut person = Person::new(&mut ids, "Ada", "Lovelace", None);
        let date = NaiveDate::from_ymd_opt(1815, 12, 10);

        person.set_id(42);
        person.set_first_name("Augusta");
        person.set_last_name("King");
        person.set_birth_date(date);

        assert_eq!(person.id(), 42);
        assert_eq!(person.to_string(), "Augusta King");
        assert_eq!(person.birth_date(), date);
    }

    #[test]
    fn same_content_ignores_id() {
        let mut ids = IdSequence::new();
        let a = Person::new(&mut ids, "Lee", "Kim", None);
        let b = Person::new(&mut ids, "Lee", "Kim", None);

        assert_ne!(a, b);
        assert!(a.same_content(&b));
    }
}
