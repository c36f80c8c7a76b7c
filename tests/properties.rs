mod common;

use proptest::prelude::*;

use person_roster::App;

use common::fill_form;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}"
}

proptest! {
    #[test]
    fn each_add_grows_rows_by_one_with_increasing_ids(
        names in prop::collection::vec((name(), name()), 1..10)
    ) {
        let mut app = App::new();
        for (first, last) in &names {
            let before = app.rows().len();
            let highest = app.ids().last_issued();

            fill_form(&mut app, first, last, "");
            let person = app.add_person().unwrap();

            prop_assert_eq!(app.rows().len(), before + 1);
            prop_assert!(person.id() > highest);
        }
    }

    #[test]
    fn delete_removes_exactly_the_selected_rows(
        mask in prop::collection::vec(any::<bool>(), 5)
    ) {
        let mut app = App::new();
        let before = app.rows().to_vec();
        for (pos, &picked) in mask.iter().enumerate() {
            if picked {
                app.select(pos);
            }
        }

        let result = app.delete_selected_rows();
        let expected: Vec<_> = before
            .iter()
            .zip(&mask)
            .filter(|(_, picked)| !**picked)
            .map(|(person, _)| person.clone())
            .collect();

        if mask.iter().any(|&picked| picked) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
        prop_assert_eq!(app.rows(), expected.as_slice());
    }

    #[test]
    fn restore_always_returns_seed_content(
        adds in 0usize..4,
        deletes in prop::collection::vec(0usize..8, 0..4)
    ) {
        let mut app = App::new();
        let seed = app.rows().to_vec();
        for i in 0..adds {
            fill_form(&mut app, "Extra", &i.to_string(), "");
            app.add_person().unwrap();
        }
        for pos in deletes {
            app.select(pos);
        }
        let _ = app.delete_selected_rows();
        let highest = app.ids().last_issued();

        app.restore_rows();

        prop_assert_eq!(app.rows().len(), 5);
        for (row, original) in app.rows().iter().zip(&seed) {
            prop_assert!(row.same_content(original));
            prop_assert!(row.id() > highest);
        }
    }
}
