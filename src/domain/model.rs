use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A person's name, age and two account balances.
///
/// Fields are unvalidated: negative ages and balances are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    first_name: String,
    last_name: String,
    age: i32,
    checking: f64,
    savings: f64,
}

impl PersonInfo {
    /// Empty names, zero age and balances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Given names; age and balances default to zero.
    pub fn with_names(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::with_values(first_name, last_name, 0, 0.0, 0.0)
    }

    pub fn with_values(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        checking: f64,
        savings: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            checking,
            savings,
        }
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn set_checking(&mut self, checking: f64) {
        self.checking = checking;
    }

    pub fn set_savings(&mut self, savings: f64) {
        self.savings = savings;
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn checking(&self) -> f64 {
        self.checking
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    /// Compares ages only. Names and balances are ignored, so two records
    /// that differ elsewhere can be neither greater nor less than each other.
    pub fn is_greater_than(&self, other: &PersonInfo) -> bool {
        self.age > other.age
    }

    /// Age-only counterpart of [`PersonInfo::is_greater_than`].
    pub fn is_less_than(&self, other: &PersonInfo) -> bool {
        self.age < other.age
    }

    /// Total order on age, for sorting rosters.
    ///
    /// There is intentionally no `PartialOrd` impl: an age-only ordering
    /// would report `Equal` for records that `==` says differ.
    pub fn cmp_by_age(&self, other: &PersonInfo) -> Ordering {
        self.age.cmp(&other.age)
    }
}

impl fmt::Display for PersonInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nFirst Name: {}\nLast Name: {}\nAge: {}\nChecking: {}\nSavings: {}",
            self.first_name, self.last_name, self.age, self.checking, self.savings
        )
    }
}
