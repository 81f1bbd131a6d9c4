// src/record.rs
use serde::{Deserialize, Serialize};

use crate::error::{JobError, Result};

/// One job posting. Every field is always present; fields missing from the
/// listing markup carry a placeholder from `config::consts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub company: String,
    pub title: String,
    pub description: String,
    /// Usually "N vacantes"
    pub vacancies: String,
    /// Free-form Spanish date, e.g. "lunes, 3 de junio de 2024"
    pub published_date: String,
    /// Comma-joined
    pub locations: String,
}

impl JobRecord {
    /// Leading integer of `vacancies` ("3 vacantes" → 3).
    pub fn vacancy_count(&self) -> Result<i64> {
        self.vacancies
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse().ok())
            .ok_or_else(|| JobError::InvalidVacancies { value: self.vacancies.clone() })
    }

    /// Report columns: title, company, locations, vacancies, published date.
    pub fn table_row(&self) -> [&str; 5] {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.locations.as_str(),
            self.vacancies.as_str(),
            self.published_date.as_str(),
        ]
    }
}
