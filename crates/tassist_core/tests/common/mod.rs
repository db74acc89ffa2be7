#![allow(dead_code)]

use std::collections::BTreeSet;
use tassist_core::{
    AttendanceList, Email, Faculty, LabGroup, LabScoreList, MatNum, Name, Person, Phone, Remark,
    Tag, TeleHandle, TutGroup, Year,
};

/// Builds test persons field by field, starting from a valid default.
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            person: Person::new(
                Name::new("Amy Bee").expect("valid Name fixture"),
                MatNum::new("A0000000A").expect("valid MatNum fixture"),
            ),
        }
    }

    pub fn name(mut self, value: &str) -> Self {
        self.person.name = Name::new(value).expect("valid Name fixture");
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.person.phone = Phone::new(value).expect("valid Phone fixture");
        self
    }

    pub fn tele_handle(mut self, value: &str) -> Self {
        self.person.tele_handle = TeleHandle::new(value).expect("valid TeleHandle fixture");
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.person.email = Email::new(value).expect("valid Email fixture");
        self
    }

    pub fn mat_num(mut self, value: &str) -> Self {
        self.person.mat_num = MatNum::new(value).expect("valid MatNum fixture");
        self
    }

    pub fn tut_group(mut self, value: &str) -> Self {
        self.person.tut_group = TutGroup::new(value).expect("valid TutGroup fixture");
        self
    }

    pub fn lab_group(mut self, value: &str) -> Self {
        self.person.lab_group = LabGroup::new(value).expect("valid LabGroup fixture");
        self
    }

    pub fn faculty(mut self, value: &str) -> Self {
        self.person.faculty = Faculty::new(value).expect("valid Faculty fixture");
        self
    }

    pub fn year(mut self, value: &str) -> Self {
        self.person.year = Year::new(value).expect("valid Year fixture");
        self
    }

    pub fn remark(mut self, value: &str) -> Self {
        self.person.remark = Remark::new(value).expect("valid Remark fixture");
        self
    }

    pub fn attendance(mut self, value: &str) -> Self {
        self.person.attendance = AttendanceList::new(value).expect("valid AttendanceList fixture");
        self
    }

    pub fn lab_scores(mut self, value: &str) -> Self {
        self.person.lab_scores = LabScoreList::new(value).expect("valid LabScoreList fixture");
        self
    }

    pub fn tags(mut self, values: &[&str]) -> Self {
        self.person.tags = values
            .iter()
            .map(|tag| Tag::new(*tag).expect("valid Tag fixture"))
            .collect::<BTreeSet<_>>();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

pub fn alice() -> Person {
    PersonBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .tele_handle("@alice_p")
        .email("alice@example.com")
        .mat_num("A0000001A")
        .tut_group("T01")
        .lab_group("B01")
        .faculty("Computing")
        .year("1")
        .attendance("3311000000000")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .tele_handle("@benson_meier")
        .email("johnd@example.com")
        .mat_num("A0000002B")
        .tut_group("T01")
        .lab_group("B02")
        .faculty("Science")
        .year("2")
        .remark("Asks good questions")
        .attendance("3311121000000")
        .lab_scores("20/25 25/25 -/25 -/25")
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .mat_num("A0000003C")
        .tut_group("T02")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .name("Daniel Meier")
        .email("cornelia@example.com")
        .mat_num("A0000004D")
        .tut_group("T02")
        .tags(&["friends"])
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel()]
}
