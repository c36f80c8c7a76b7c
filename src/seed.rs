//! Sample data and the column layout used to render it.

use chrono::NaiveDate;

use crate::models::{IdSequence, Person};

/// Display format for birth dates in the table and the add form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the five sample people. Every call allocates new records from `ids`,
/// so restoring the table gives the same content under fresh ids.
pub fn initial_people(ids: &mut IdSequence) -> Vec<Person> {
    vec![
        Person::new(ids, "Ashwin", "Sharan", NaiveDate::from_ymd_opt(2012, 10, 11)),
        Person::new(ids, "Advik", "Sharan", NaiveDate::from_ymd_opt(2012, 10, 11)),
        Person::new(ids, "Layne", "Estes", NaiveDate::from_ymd_opt(2011, 12, 16)),
        Person::new(ids, "Mason", "Boyd", NaiveDate::from_ymd_opt(2003, 4, 20)),
        Person::new(ids, "Babalu", "Sharan", NaiveDate::from_ymd_opt(1980, 1, 10)),
    ]
}

/// A table column: header label, preferred width in cells, and the accessor
/// that pulls the displayed value out of a record.
#[derive(Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub width: u16,
    pub value: fn(&Person) -> String,
}

pub static COLUMNS: [Column; 4] = [
    Column {
        label: "Id",
        width: 6,
        value: id_cell,
    },
    Column {
        label: "First Name",
        width: 16,
        value: first_name_cell,
    },
    Column {
        label: "Last Name",
        width: 16,
        value: last_name_cell,
    },
    Column {
        label: "Birth Date",
        width: 12,
        value: birth_date_cell,
    },
];

fn id_cell(person: &Person) -> String {
    person.id().to_string()
}

fn first_name_cell(person: &Person) -> String {
    person.first_name().to_string()
}

fn last_name_cell(person: &Person) -> String {
    person.last_name().to_string()
}

/// Missing dates render as an empty cell.
fn birth_date_cell(person: &Person) -> String {
    person
        .birth_date()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_people_in_fixed_order() {
        let mut ids = IdSequence::new();
        let people = initial_people(&mut ids);

        let names: Vec<String> = people.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            [
                "Ashwin Sharan",
                "Advik Sharan",
                "Layne Estes",
                "Mason Boyd",
                "Babalu Sharan"
            ]
        );
        assert_eq!(
            people[4].birth_date(),
            NaiveDate::from_ymd_opt(1980, 1, 10)
        );
    }

    #[test]
    fn each_call_allocates_new_ids() {
        let mut ids = IdSequence::new();
        let first = initial_people(&mut ids);
        let second = initial_people(&mut ids);

        let first_ids: Vec<u32> = first.iter().map(Person::id).collect();
        let second_ids: Vec<u32> = second.iter().map(Person::id).collect();
        assert_eq!(first_ids, [1, 2, 3, 4, 5]);
        assert_eq!(second_ids, [6, 7, 8, 9, 10]);
        assert!(first.iter().zip(&second).all(|(a, b)| a.same_content(b)));
    }

    #[test]
    fn columns_extract_display_values() {
        let mut ids = IdSequence::new();
        let people = initial_people(&mut ids);
        let mason = &people[3];
        let undated = Person::new(&mut ids, "Lee", "Kim", None);

        let labels: Vec<&str> = COLUMNS.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Id", "First Name", "Last Name", "Birth Date"]);

        let cells: Vec<String> = COLUMNS.iter().map(|c| (c.value)(mason)).collect();
        assert_eq!(cells, ["4", "Mason", "Boyd", "2003-04-20"]);
        assert_eq!((COLUMNS[3].value)(&undated), "");
    }
}
