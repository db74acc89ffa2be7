//! Sample address book for first launch.

use crate::model::address_book::AddressBook;
use crate::storage::json_address_book::JsonSerializableAddressBook;
use crate::storage::json_person::{JsonAdaptedPerson, RecordError};

struct SampleRow {
    name: &'static str,
    phone: &'static str,
    tele_handle: &'static str,
    email: &'static str,
    mat_num: &'static str,
    tut_group: &'static str,
    lab_group: &'static str,
    faculty: &'static str,
    year: &'static str,
    remark: &'static str,
    attendance: &'static str,
    lab_scores: &'static str,
    tags: &'static [&'static str],
}

const SAMPLE_ROWS: &[SampleRow] = &[
    SampleRow {
        name: "Alex Yeoh",
        phone: "87438807",
        tele_handle: "@alexyeoh",
        email: "alexyeoh@example.com",
        mat_num: "A0123456J",
        tut_group: "T01",
        lab_group: "B01",
        faculty: "Computing",
        year: "2",
        remark: "",
        attendance: "3311101000000",
        lab_scores: "20/25 -/25 -/25 -/25",
        tags: &["friends"],
    },
    SampleRow {
        name: "Bernice Yu",
        phone: "99272758",
        tele_handle: "@berniceyu",
        email: "berniceyu@example.com",
        mat_num: "A0234567L",
        tut_group: "T01",
        lab_group: "B02",
        faculty: "Computing",
        year: "1",
        remark: "Prefers email",
        attendance: "3311111000000",
        lab_scores: "25/25 18/25 -/25 -/25",
        tags: &["colleagues", "friends"],
    },
    SampleRow {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        tele_handle: "",
        email: "charlotte@example.com",
        mat_num: "A0345678N",
        tut_group: "T02",
        lab_group: "",
        faculty: "Science",
        year: "3",
        remark: "",
        attendance: "3312011000000",
        lab_scores: "-/25 -/25 -/25 -/25",
        tags: &["neighbours"],
    },
    SampleRow {
        name: "David Li",
        phone: "",
        tele_handle: "@davidli_42",
        email: "lidavid@example.com",
        mat_num: "A0456789R",
        tut_group: "T02",
        lab_group: "B03",
        faculty: "Engineering",
        year: "2",
        remark: "",
        attendance: "3300000000000",
        lab_scores: "-/25 -/25 -/25 -/25",
        tags: &["family"],
    },
];

/// Builds the sample address book through the regular record converter.
pub fn sample_address_book() -> Result<AddressBook, RecordError> {
    let document = JsonSerializableAddressBook {
        persons: SAMPLE_ROWS.iter().map(to_record).collect(),
    };
    document.to_model_type()
}

fn to_record(row: &SampleRow) -> JsonAdaptedPerson {
    JsonAdaptedPerson {
        name: Some(row.name.to_string()),
        phone: Some(row.phone.to_string()),
        tele_handle: Some(row.tele_handle.to_string()),
        email: Some(row.email.to_string()),
        mat_num: Some(row.mat_num.to_string()),
        tut_group: Some(row.tut_group.to_string()),
        lab_group: Some(row.lab_group.to_string()),
        faculty: Some(row.faculty.to_string()),
        year: Some(row.year.to_string()),
        remark: Some(row.remark.to_string()),
        attendance_list: Some(row.attendance.to_string()),
        lab_score_list: Some(row.lab_scores.to_string()),
        tags: row.tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
