//! Employee attributes collected by the input form.
//!
//! [`FormState`] mirrors the on-screen controls; [`InputRecord`] is the
//! single-row feature record handed to the classifier. Column names and order
//! match the schema the bundled model was trained on.

use std::fmt;
use std::ops::RangeInclusive;

use crate::table::Table;

pub const AGE_COLUMN: &str = "age";
pub const EDUCATION_COLUMN: &str = "education";
pub const OCCUPATION_COLUMN: &str = "occupation";
pub const HOURS_PER_WEEK_COLUMN: &str = "hours-per-week";
pub const EXPERIENCE_COLUMN: &str = "experience";

/// Record columns in model order.
pub const RECORD_COLUMNS: [&str; 5] = [
    AGE_COLUMN,
    EDUCATION_COLUMN,
    OCCUPATION_COLUMN,
    HOURS_PER_WEEK_COLUMN,
    EXPERIENCE_COLUMN,
];

pub const AGE_RANGE: RangeInclusive<u32> = 18..=65;
pub const HOURS_PER_WEEK_RANGE: RangeInclusive<u32> = 1..=80;
pub const EXPERIENCE_RANGE: RangeInclusive<u32> = 0..=40;

const DEFAULT_AGE: u32 = 30;
const DEFAULT_HOURS_PER_WEEK: u32 = 40;
const DEFAULT_EXPERIENCE: u32 = 5;

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Education {
    #[default]
    Bachelors,
    Masters,
    PhD,
    HsGrad,
    Assoc,
    SomeCollege,
}

impl Education {
    pub const ALL: [Education; 6] = [
        Education::Bachelors,
        Education::Masters,
        Education::PhD,
        Education::HsGrad,
        Education::Assoc,
        Education::SomeCollege,
    ];

    /// Category string as it appears in training data.
    pub fn label(self) -> &'static str {
        match self {
            Education::Bachelors => "Bachelors",
            Education::Masters => "Masters",
            Education::PhD => "PhD",
            Education::HsGrad => "HS-grad",
            Education::Assoc => "Assoc",
            Education::SomeCollege => "Some-college",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occupation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupation {
    #[default]
    TechSupport,
    CraftRepair,
    OtherService,
    Sales,
    ExecManagerial,
    ProfSpecialty,
    HandlersCleaners,
    MachineOpInspct,
    AdmClerical,
    FarmingFishing,
    TransportMoving,
    PrivHouseServ,
    ProtectiveServ,
    ArmedForces,
}

impl Occupation {
    pub const ALL: [Occupation; 14] = [
        Occupation::TechSupport,
        Occupation::CraftRepair,
        Occupation::OtherService,
        Occupation::Sales,
        Occupation::ExecManagerial,
        Occupation::ProfSpecialty,
        Occupation::HandlersCleaners,
        Occupation::MachineOpInspct,
        Occupation::AdmClerical,
        Occupation::FarmingFishing,
        Occupation::TransportMoving,
        Occupation::PrivHouseServ,
        Occupation::ProtectiveServ,
        Occupation::ArmedForces,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Occupation::TechSupport => "Tech-support",
            Occupation::CraftRepair => "Craft-repair",
            Occupation::OtherService => "Other-service",
            Occupation::Sales => "Sales",
            Occupation::ExecManagerial => "Exec-managerial",
            Occupation::ProfSpecialty => "Prof-specialty",
            Occupation::HandlersCleaners => "Handlers-cleaners",
            Occupation::MachineOpInspct => "Machine-op-inspct",
            Occupation::AdmClerical => "Adm-clerical",
            Occupation::FarmingFishing => "Farming-fishing",
            Occupation::TransportMoving => "Transport-moving",
            Occupation::PrivHouseServ => "Priv-house-serv",
            Occupation::ProtectiveServ => "Protective-serv",
            Occupation::ArmedForces => "Armed-Forces",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current values of the form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    pub age: u32,
    pub education: Education,
    pub occupation: Occupation,
    pub hours_per_week: u32,
    pub experience: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            education: Education::default(),
            occupation: Occupation::default(),
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
            experience: DEFAULT_EXPERIENCE,
        }
    }
}

impl FormState {
    /// Build a form state, clamping numeric values into the slider ranges.
    pub fn new(
        age: u32,
        education: Education,
        occupation: Occupation,
        hours_per_week: u32,
        experience: u32,
    ) -> Self {
        Self {
            age: clamp_to(age, &AGE_RANGE),
            education,
            occupation,
            hours_per_week: clamp_to(hours_per_week, &HOURS_PER_WEEK_RANGE),
            experience: clamp_to(experience, &EXPERIENCE_RANGE),
        }
    }

    /// Snapshot the controls as a model input record.
    pub fn record(&self) -> InputRecord {
        InputRecord {
            age: self.age,
            education: self.education,
            occupation: self.occupation,
            hours_per_week: self.hours_per_week,
            experience: self.experience,
        }
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// One row of model input built from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRecord {
    pub age: u32,
    pub education: Education,
    pub occupation: Occupation,
    pub hours_per_week: u32,
    pub experience: u32,
}

impl InputRecord {
    /// Column/value pairs in model order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            (AGE_COLUMN, self.age.to_string()),
            (EDUCATION_COLUMN, self.education.label().to_string()),
            (OCCUPATION_COLUMN, self.occupation.label().to_string()),
            (HOURS_PER_WEEK_COLUMN, self.hours_per_week.to_string()),
            (EXPERIENCE_COLUMN, self.experience.to_string()),
        ]
    }

    /// One-row table with exactly the record columns.
    pub fn to_table(&self) -> Table {
        Table::from_row(self.fields())
    }
}
