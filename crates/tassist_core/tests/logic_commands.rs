mod common;

use common::{alice, benson, carl, daniel, typical_persons};
use std::path::Path;
use tassist_core::command::{DELETE_USAGE, FIND_USAGE};
use tassist_core::{
    AddressBook, AddressBookStorage, AttendanceStatus, CommandError, JsonAddressBookStorage,
    LabScore, Logic, LogicError, Model, ParseError,
};

fn logic_with_typical_persons(dir: &Path) -> Logic<JsonAddressBookStorage> {
    let storage = JsonAddressBookStorage::new(dir.join("addressbook.json"));
    let book = AddressBook::from_persons(typical_persons()).expect("typical persons are distinct");
    Logic::new(Model::new(book), storage)
}

fn saved_book(logic: &Logic<JsonAddressBookStorage>) -> AddressBook {
    logic
        .storage()
        .read_address_book()
        .expect("data file should be readable")
        .expect("data file should exist after a mutating command")
}

#[test]
fn add_persists_new_person() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let result = logic
        .execute("add n/Elle Meyer m/a0000005e p/9482224 h/@elle_meyer e/werner@example.com t/t03 tag/friends")
        .expect("command should succeed");
    assert!(result.feedback.starts_with("New person added: Elle Meyer"));
    assert!(!result.exit);

    let saved = saved_book(&logic);
    assert_eq!(saved.len(), 5);
    let added = &saved.persons()[4];
    assert_eq!(added.mat_num.as_str(), "A0000005E");
    assert_eq!(added.tut_group.as_str(), "T03");
    assert_eq!(added.attendance.to_string(), "3300000000000");
    assert_eq!(added.lab_scores.to_string(), "-/25 -/25 -/25 -/25");
}

#[test]
fn add_duplicate_mat_num_is_rejected_without_saving() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let err = logic
        .execute("add n/Alice Clone m/A0000001A")
        .expect_err("command should be rejected");
    assert!(matches!(
        err,
        LogicError::Command(CommandError::DuplicatePerson)
    ));
    assert_eq!(
        err.to_string(),
        "This person already exists in the address book"
    );
    assert!(logic.storage().read_address_book().unwrap().is_none());
}

#[test]
fn add_with_invalid_field_reports_constraint() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let err = logic
        .execute("add n/Elle m/A0000005E e/example.com")
        .expect_err("command should be rejected");
    assert!(matches!(err, LogicError::Parse(ParseError::InvalidValue(_))));
    assert_eq!(logic.model().address_book().len(), 4);
}

#[test]
fn edit_updates_displayed_person() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let result = logic.execute("edit 2 p/91234567 tag/").expect("command should succeed");
    assert!(result.feedback.starts_with("Edited Person: Benson Meier"));

    let saved = saved_book(&logic);
    let edited = &saved.persons()[1];
    assert_eq!(edited.phone.as_str(), "91234567");
    assert!(edited.tags.is_empty());
    assert_eq!(edited.email, benson().email);
}

#[test]
fn edit_onto_existing_mat_num_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let err = logic.execute("edit 1 m/A0000002B").expect_err("command should be rejected");
    assert!(matches!(
        err,
        LogicError::Command(CommandError::DuplicatePerson)
    ));
    assert_eq!(logic.model().address_book().persons()[0], alice());
}

#[test]
fn delete_removes_person_by_displayed_index() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    logic.execute("find Meier").expect("command should succeed");
    let result = logic.execute("delete 2").expect("command should succeed");
    assert!(result.feedback.starts_with("Deleted Person: Daniel Meier"));

    let saved = saved_book(&logic);
    assert_eq!(saved.persons(), &[alice(), benson(), carl()]);
}

#[test]
fn delete_out_of_range_index_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let err = logic.execute("delete 5").expect_err("command should be rejected");
    assert!(matches!(
        err,
        LogicError::Command(CommandError::InvalidPersonIndex(_))
    ));
    assert_eq!(err.to_string(), "The person index provided is invalid");

    for input in ["delete 0", "delete", "delete -1", "delete one"] {
        let err = logic.execute(input).unwrap_err();
        assert!(matches!(
            err,
            LogicError::Parse(ParseError::InvalidCommandFormat(usage)) if usage == DELETE_USAGE
        ));
    }
    assert_eq!(logic.model().address_book().len(), 4);
}

#[test]
fn find_filters_and_list_restores() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let result = logic.execute("find   meier  KURZ ").expect("command should succeed");
    assert_eq!(result.feedback, "3 persons listed!");
    let names: Vec<&str> = logic
        .filtered_persons()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Benson Meier", "Carl Kurz", "Daniel Meier"]);

    let result = logic.execute("find Mei").expect("command should succeed");
    assert_eq!(result.feedback, "0 persons listed!");

    let result = logic.execute("list").expect("command should succeed");
    assert_eq!(result.feedback, "Listed all persons");
    assert_eq!(logic.filtered_persons().len(), 4);

    // Read-only commands never touch storage.
    assert!(logic.storage().read_address_book().unwrap().is_none());
}

#[test]
fn find_without_keywords_reports_usage() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let err = logic.execute("find    ").expect_err("command should be rejected");
    assert!(matches!(
        err,
        LogicError::Parse(ParseError::InvalidCommandFormat(usage)) if usage == FIND_USAGE
    ));
    assert!(err.to_string().starts_with("Invalid command format! \n"));
}

#[test]
fn att_marks_week_status() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    logic.execute("att 3 w/3 s/1").expect("command should succeed");
    let saved = saved_book(&logic);
    let updated = &saved.persons()[2];
    assert_eq!(updated.attendance.get(3), Some(AttendanceStatus::Attended));
    assert_eq!(updated.attendance.to_string(), "3310000000000");

    let err = logic.execute("att 3 w/14 s/1").expect_err("command should be rejected");
    assert!(matches!(err, LogicError::Parse(ParseError::InvalidWeek)));
    let err = logic.execute("att 3 w/2 s/7").expect_err("command should be rejected");
    assert!(matches!(
        err,
        LogicError::Parse(ParseError::InvalidAttendanceStatus)
    ));
}

#[test]
fn lab_records_score_within_max() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    logic.execute("lab 4 l/2 s/18").expect("command should succeed");
    let saved = saved_book(&logic);
    let updated = &saved.persons()[3];
    assert_eq!(
        updated.lab_scores.get(2),
        Some(LabScore {
            score: Some(18),
            max: 25
        })
    );

    let err = logic.execute("lab 4 l/2 s/26").expect_err("command should be rejected");
    assert!(matches!(
        err,
        LogicError::Command(CommandError::LabScore(_))
    ));
    assert_eq!(
        logic.model().address_book().persons()[3].lab_scores.to_string(),
        "-/25 18/25 -/25 -/25"
    );
}

#[test]
fn clear_empties_and_saves() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let result = logic.execute("clear").expect("command should succeed");
    assert_eq!(result.feedback, "Address book has been cleared!");
    assert!(saved_book(&logic).is_empty());
}

#[test]
fn help_and_exit_set_flags() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    assert!(logic.execute("help").expect("command should succeed").show_help);
    let result = logic.execute("exit").expect("command should succeed");
    assert!(result.exit);
    assert_eq!(result.feedback, "Exiting TAssist as requested ...");
}

#[test]
fn unknown_command_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    let err = logic.execute("frobnicate 1").expect_err("command should be rejected");
    assert_eq!(err.to_string(), "Unknown command");
}

#[test]
fn daniel_round_trips_after_edit_and_reload() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut logic = logic_with_typical_persons(dir.path());

    logic
        .execute("edit 4 y/3 f/Arts & Social Sciences r/Joins late")
        .expect("command should succeed");
    let reloaded = saved_book(&logic);
    let edited = &reloaded.persons()[3];
    assert_eq!(edited.mat_num, daniel().mat_num);
    assert_eq!(edited.year.as_str(), "3");
    assert_eq!(edited.faculty.as_str(), "Arts & Social Sciences");
    assert_eq!(edited.remark.as_str(), "Joins late");
}

#[test]
fn failed_save_is_reported_and_change_kept_in_memory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let data_path = dir.path().join("addressbook.json");
    std::fs::create_dir(&data_path).expect("occupy data path with a directory");
    let storage = JsonAddressBookStorage::new(&data_path);
    let mut logic = Logic::new(Model::new(AddressBook::new()), storage);

    let err = logic
        .execute("add n/Amy Bee m/A1234567X")
        .expect_err("saving onto a directory must fail");
    assert!(matches!(err, LogicError::Storage(_)));
    assert!(err.to_string().starts_with("Could not save data to file: "));

    let persons = logic.model().address_book().persons();
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].mat_num.as_str(), "A1234567X");
    assert!(!dir.path().join("addressbook.json.tmp").exists());
}
