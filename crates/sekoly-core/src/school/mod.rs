//! School record models.
//!
//! Each domain entity is a flat document keyed by an opaque
//! store-assigned identifier; these are the payload types the generic
//! collection sync machinery is instantiated with. No schema is
//! mandated beyond what the invariants elsewhere require.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::payroll::SalaryComponents;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub class_name: String,

    #[serde(default)]
    pub guardian_phone: Option<String>,

    #[serde(default)]
    pub enrolled_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub full_name: String,
    pub role: String,
    pub salary: SalaryComponents,

    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub name: String,
    pub level: String,

    #[serde(default)]
    pub head_teacher: Option<String>,
}

/// What an écolage payment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    Monthly,
    Registration,
    Exam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePayment {
    /// Identifier of the paying student's document.
    pub student_id: String,

    /// School month covered, as "YYYY-MM".
    pub month: String,

    pub amount: i64,
    pub kind: FeeKind,

    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
}
