//! Grade planner: graded modules, ECTS credits and the credit-weighted average.

use crate::constants::{DEFAULT_SEMESTER, KEY_GRADES};
use crate::database::store::{KeyValueStore, read_json, write_json};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BEST_GRADE: f64 = 1.0;
pub const WORST_GRADE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: u32,
    pub subject: String,
    pub grade: f64,
    pub credits: u32,
    pub semester: String,
}

/// User input for a new or edited grade, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewGrade {
    pub subject: String,
    pub grade: f64,
    pub credits: u32,
    pub semester: Option<String>,
}

impl NewGrade {
    fn validate(self) -> Result<(String, f64, u32, String), Error> {
        let subject = self.subject.trim().to_string();
        if subject.is_empty() {
            return Err(Error::InvalidGrade("subject is required".into()));
        }
        if !self.grade.is_finite() || !(BEST_GRADE..=WORST_GRADE).contains(&self.grade) {
            return Err(Error::InvalidGrade(format!(
                "grade {} is outside {BEST_GRADE:.1}..={WORST_GRADE:.1}",
                self.grade
            )));
        }
        if self.credits == 0 {
            return Err(Error::InvalidGrade("credits must be positive".into()));
        }
        let semester = self
            .semester
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SEMESTER.to_string());
        Ok((subject, self.grade, self.credits, semester))
    }
}

/// Credit-weighted mean grade. `None` when there is nothing to average.
pub fn weighted_average(grades: &[Grade]) -> Option<f64> {
    let credits = total_credits(grades);
    if credits == 0 {
        return None;
    }
    let weighted: f64 = grades.iter().map(|g| g.grade * f64::from(g.credits)).sum();
    Some(weighted / f64::from(credits))
}

pub fn total_credits(grades: &[Grade]) -> u32 {
    grades.iter().map(|g| g.credits).sum()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeBook {
    grades: Vec<Grade>,
}

impl GradeBook {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        read_json(store, KEY_GRADES)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        write_json(store, KEY_GRADES, self);
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Validate and append a grade, returning the stored entry.
    pub fn add(&mut self, input: NewGrade) -> Result<&Grade, Error> {
        let (subject, grade, credits, semester) = input.validate()?;
        let id = match self.grades.iter().map(|g| g.id).max() {
            None => 1,
            Some(m) => m
                .checked_add(1)
                .ok_or_else(|| Error::InvalidGrade("no grade id left".into()))?,
        };
        self.grades.push(Grade {
            id,
            subject,
            grade,
            credits,
            semester,
        });
        Ok(&self.grades[self.grades.len() - 1])
    }

    /// Replace the fields of an existing grade. Returns false if `id` is unknown.
    pub fn update(&mut self, id: u32, input: NewGrade) -> Result<bool, Error> {
        let (subject, grade, credits, semester) = input.validate()?;
        let Some(existing) = self.grades.iter_mut().find(|g| g.id == id) else {
            return Ok(false);
        };
        existing.subject = subject;
        existing.grade = grade;
        existing.credits = credits;
        existing.semester = semester;
        Ok(true)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.grades.len();
        self.grades.retain(|g| g.id != id);
        self.grades.len() != before
    }

    pub fn average(&self) -> Option<f64> {
        weighted_average(&self.grades)
    }

    pub fn total_credits(&self) -> u32 {
        total_credits(&self.grades)
    }

    /// Grades grouped by semester label (sorted by label).
    pub fn by_semester(&self) -> BTreeMap<&str, Vec<Grade>> {
        let mut groups: BTreeMap<&str, Vec<Grade>> = BTreeMap::new();
        for g in &self.grades {
            groups.entry(g.semester.as_str()).or_default().push(g.clone());
        }
        groups
    }
}
