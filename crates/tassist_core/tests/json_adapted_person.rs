mod common;

use common::{benson, typical_persons};
use tassist_core::{Field, JsonAdaptedPerson, RecordError};

const INVALID_NAME: &str = "R@chel";
const INVALID_PHONE: &str = "-651234";
const INVALID_EMAIL: &str = "example.com";
const INVALID_ATTENDANCE: &str = "1010500210112";
const INVALID_TAG: &str = "#friend";

fn valid_record() -> JsonAdaptedPerson {
    JsonAdaptedPerson::from_model_type(&benson())
}

fn assert_missing(mut clear: impl FnMut(&mut JsonAdaptedPerson), field: Field) {
    let mut record = valid_record();
    clear(&mut record);
    let err = record.to_model_type().expect_err("record should be rejected");
    assert_eq!(err, RecordError::MissingField(field));
    assert_eq!(
        err.to_string(),
        format!("Person's {} field is missing!", field.type_name())
    );
}

fn assert_invalid(mut corrupt: impl FnMut(&mut JsonAdaptedPerson), field: Field) {
    let mut record = valid_record();
    corrupt(&mut record);
    let err = record.to_model_type().expect_err("record should be rejected");
    assert!(
        matches!(&err, RecordError::InvalidValue(inner) if inner.field == field),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.to_string(), field.constraints());
}

#[test]
fn to_model_type_valid_person_details_returns_person() {
    let record = valid_record();
    assert_eq!(record.to_model_type().expect("record should convert"), benson());
}

#[test]
fn valid_record_exposes_exact_values() {
    let record = valid_record();
    assert_eq!(record.name.as_deref(), Some("Benson Meier"));
    assert_eq!(record.phone.as_deref(), Some("98765432"));
    assert_eq!(record.email.as_deref(), Some("johnd@example.com"));

    let person = record.to_model_type().expect("record should convert");
    assert_eq!(person.name.as_str(), "Benson Meier");
    assert_eq!(person.phone.as_str(), "98765432");
    assert_eq!(person.email.as_str(), "johnd@example.com");
    assert_eq!(person.mat_num.as_str(), "A0000002B");
    assert_eq!(person.attendance.to_string(), "3311121000000");
    assert_eq!(person.lab_scores.to_string(), "20/25 25/25 -/25 -/25");
    assert_eq!(JsonAdaptedPerson::from_model_type(&person), record);
}

#[test]
fn every_typical_person_round_trips() {
    for person in typical_persons() {
        let record = JsonAdaptedPerson::from_model_type(&person);
        assert_eq!(record.to_model_type().expect("record should convert"), person);
    }
}

#[test]
fn round_trip_ignores_tag_order() {
    let mut record = valid_record();
    record.tags.reverse();
    assert_eq!(record.to_model_type().expect("record should convert"), benson());
}

#[test]
fn json_wire_shape_uses_camel_case_keys() {
    let json = serde_json::to_value(valid_record()).unwrap();
    assert_eq!(json["teleHandle"], "@benson_meier");
    assert_eq!(json["matNum"], "A0000002B");
    assert_eq!(json["tutGroup"], "T01");
    assert_eq!(json["labGroup"], "B02");
    assert_eq!(json["attendanceList"], "3311121000000");
    assert_eq!(json["labScoreList"], "20/25 25/25 -/25 -/25");
    assert_eq!(json["tags"], serde_json::json!(["friends", "owesMoney"]));

    let decoded: JsonAdaptedPerson = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, valid_record());
}

#[test]
fn to_model_type_invalid_name_fails_with_name_constraints() {
    assert_invalid(|r| r.name = Some(INVALID_NAME.to_string()), Field::Name);
}

#[test]
fn to_model_type_invalid_phone_fails_with_phone_constraints() {
    assert_invalid(|r| r.phone = Some(INVALID_PHONE.to_string()), Field::Phone);
}

#[test]
fn to_model_type_invalid_email_fails_with_email_constraints() {
    assert_invalid(|r| r.email = Some(INVALID_EMAIL.to_string()), Field::Email);
}

#[test]
fn to_model_type_invalid_attendance_fails_with_attendance_constraints() {
    assert_invalid(
        |r| r.attendance_list = Some(INVALID_ATTENDANCE.to_string()),
        Field::AttendanceList,
    );
}

#[test]
fn to_model_type_invalid_other_fields_fail_with_their_constraints() {
    assert_invalid(|r| r.tele_handle = Some("benson".to_string()), Field::TeleHandle);
    assert_invalid(|r| r.mat_num = Some("B0000002B".to_string()), Field::MatNum);
    assert_invalid(|r| r.tut_group = Some("T1".to_string()), Field::TutGroup);
    assert_invalid(|r| r.lab_group = Some("L01".to_string()), Field::LabGroup);
    assert_invalid(|r| r.faculty = Some("SoC!".to_string()), Field::Faculty);
    assert_invalid(|r| r.year = Some("0".to_string()), Field::Year);
    assert_invalid(|r| r.remark = Some("x".repeat(201)), Field::Remark);
    assert_invalid(
        |r| r.lab_score_list = Some("30/25 -/25 -/25 -/25".to_string()),
        Field::LabScoreList,
    );
}

#[test]
fn to_model_type_null_fields_fail_with_missing_field() {
    assert_missing(|r| r.name = None, Field::Name);
    assert_missing(|r| r.phone = None, Field::Phone);
    assert_missing(|r| r.tele_handle = None, Field::TeleHandle);
    assert_missing(|r| r.email = None, Field::Email);
    assert_missing(|r| r.mat_num = None, Field::MatNum);
    assert_missing(|r| r.tut_group = None, Field::TutGroup);
    assert_missing(|r| r.lab_group = None, Field::LabGroup);
    assert_missing(|r| r.faculty = None, Field::Faculty);
    assert_missing(|r| r.year = None, Field::Year);
    assert_missing(|r| r.remark = None, Field::Remark);
    assert_missing(|r| r.attendance_list = None, Field::AttendanceList);
    assert_missing(|r| r.lab_score_list = None, Field::LabScoreList);
}

#[test]
fn to_model_type_invalid_tag_fails() {
    let mut record = valid_record();
    record.tags.push(INVALID_TAG.to_string());
    let err = record.to_model_type().expect_err("record should be rejected");
    assert!(matches!(
        err,
        RecordError::InvalidValue(ref inner) if inner.field == Field::Tag && inner.value == INVALID_TAG
    ));
}

#[test]
fn first_failure_in_field_order_wins() {
    let mut record = valid_record();
    record.tags.push(INVALID_TAG.to_string());
    record.attendance_list = Some(INVALID_ATTENDANCE.to_string());
    record.email = Some(INVALID_EMAIL.to_string());
    record.phone = None;
    record.name = Some(INVALID_NAME.to_string());

    let expected = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::AttendanceList,
        Field::Tag,
    ];
    for field in expected {
        let err = record.to_model_type().expect_err("record should be rejected");
        let reported = match &err {
            RecordError::MissingField(field) => *field,
            RecordError::InvalidValue(inner) => inner.field,
            RecordError::DuplicatePerson => panic!("unexpected duplicate error"),
        };
        assert_eq!(reported, field);

        match field {
            Field::Name => record.name = Some("Benson Meier".to_string()),
            Field::Phone => record.phone = Some("98765432".to_string()),
            Field::Email => record.email = Some("johnd@example.com".to_string()),
            Field::AttendanceList => record.attendance_list = Some("3311121000000".to_string()),
            _ => {
                record.tags.pop();
            }
        }
    }
    assert_eq!(record.to_model_type().expect("record should convert"), benson());
}
