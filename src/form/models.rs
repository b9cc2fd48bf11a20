use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Staff ranks a pass slip can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "Teacher I")]
    TeacherI,
    #[serde(rename = "Teacher II")]
    TeacherII,
    #[serde(rename = "Teacher III")]
    TeacherIII,
    #[serde(rename = "Master Teacher I")]
    MasterTeacherI,
    #[serde(rename = "School Head")]
    SchoolHead,
    #[serde(rename = "Principal")]
    Principal,
    #[serde(rename = "ADAS")]
    Adas,
    #[serde(rename = "ADA")]
    Ada,
}

impl Rank {
    /// Every rank, in the order the selector lists them.
    pub const ALL: [Rank; 8] = [
        Rank::TeacherI,
        Rank::TeacherII,
        Rank::TeacherIII,
        Rank::MasterTeacherI,
        Rank::SchoolHead,
        Rank::Principal,
        Rank::Adas,
        Rank::Ada,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Rank::TeacherI => "Teacher I",
            Rank::TeacherII => "Teacher II",
            Rank::TeacherIII => "Teacher III",
            Rank::MasterTeacherI => "Master Teacher I",
            Rank::SchoolHead => "School Head",
            Rank::Principal => "Principal",
            Rank::Adas => "ADAS",
            Rank::Ada => "ADA",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not one of the listed ranks")]
pub struct UnknownRank(pub String);

impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.title() == wanted)
            .ok_or_else(|| UnknownRank(s.to_string()))
    }
}

/// Hour and minute of the day, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid time, expected HH:MM")]
pub struct InvalidTime(pub String);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn as_naive_time(self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// The six inputs of the pass slip form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Rank,
    TimeOut,
    TimeReturn,
    PlacesToVisit,
    ReasonForVisit,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Rank,
        Field::TimeOut,
        Field::TimeReturn,
        Field::PlacesToVisit,
        Field::ReasonForVisit,
    ];

    /// Label used on the form and in the generated document.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Rank => "Rank",
            Field::TimeOut => "Time to be Out",
            Field::TimeReturn => "Time to Return",
            Field::PlacesToVisit => "Place(s) to be Visited",
            Field::ReasonForVisit => "Reason(s) for Visit",
        }
    }

    /// Key of the field in serialized requests.
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Rank => "rank",
            Field::TimeOut => "timeOut",
            Field::TimeReturn => "timeReturn",
            Field::PlacesToVisit => "placesToVisit",
            Field::ReasonForVisit => "reasonForVisit",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::ReasonForVisit)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A staff member's request to leave the school temporarily.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRequest {
    pub full_name: String,
    pub rank: Option<Rank>,
    pub time_out: Option<TimeOfDay>,
    pub time_return: Option<TimeOfDay>,
    pub places_to_visit: String,
    pub reason_for_visit: String,
}

impl ApplicationRequest {
    /// Replace the value of the field targeted by `edit`.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::FullName(value) => self.full_name = value,
            FieldEdit::Rank(value) => self.rank = value,
            FieldEdit::TimeOut(value) => self.time_out = value,
            FieldEdit::TimeReturn(value) => self.time_return = value,
            FieldEdit::PlacesToVisit(value) => self.places_to_visit = value,
            FieldEdit::ReasonForVisit(value) => self.reason_for_visit = value,
        }
    }

    /// True when no field holds a value.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// A new value for exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    FullName(String),
    Rank(Option<Rank>),
    TimeOut(Option<TimeOfDay>),
    TimeReturn(Option<TimeOfDay>),
    PlacesToVisit(String),
    ReasonForVisit(String),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::FullName(_) => Field::FullName,
            FieldEdit::Rank(_) => Field::Rank,
            FieldEdit::TimeOut(_) => Field::TimeOut,
            FieldEdit::TimeReturn(_) => Field::TimeReturn,
            FieldEdit::PlacesToVisit(_) => Field::PlacesToVisit,
            FieldEdit::ReasonForVisit(_) => Field::ReasonForVisit,
        }
    }
}
