// src/filter.rs
//
// Subset selection over a loaded record collection.
//
// Every supplied criterion must hold (AND). Criteria are checked per record in
// a fixed order with short-circuit, so a record rejected by the text filters
// never has its vacancies parsed. A vacancies value that does not start with an
// integer aborts the whole pass once a vacancy bound is active.

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::record::JobRecord;

/// Patterns use `regex` syntax, which has no look-around or backreferences.
/// Vacancy bounds compare against an `i64`; a leading count beyond its range
/// fails like any other non-integer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive regex over `title`
    pub position: Option<String>,
    /// Case-insensitive regex over `locations`
    pub location: Option<String>,
    /// Case-insensitive substring of `published_date`
    pub published_date: Option<String>,
    pub min_vacancies: Option<i64>,
    pub max_vacancies: Option<i64>,
}

#[derive(Debug)]
pub enum Predicate {
    Title(Regex),
    Location(Regex),
    PublishedDate(String),
    MinVacancies(i64),
    MaxVacancies(i64),
}

impl Predicate {
    pub fn matches(&self, r: &JobRecord) -> Result<bool> {
        Ok(match self {
            Predicate::Title(re) => re.is_match(&r.title),
            Predicate::Location(re) => re.is_match(&r.locations),
            Predicate::PublishedDate(needle) => r.published_date.to_lowercase().contains(needle),
            Predicate::MinVacancies(min) => r.vacancy_count()? >= *min,
            Predicate::MaxVacancies(max) => r.vacancy_count()? <= *max,
        })
    }
}

fn ci_regex(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.location.is_none()
            && self.published_date.is_none()
            && self.min_vacancies.is_none()
            && self.max_vacancies.is_none()
    }

    /// Turn the supplied criteria into predicates. Fails on a bad regex.
    pub fn compile(&self) -> Result<Vec<Predicate>> {
        let mut preds = Vec::new();
        if let Some(p) = &self.position {
            preds.push(Predicate::Title(ci_regex(p)?));
        }
        if let Some(l) = &self.location {
            preds.push(Predicate::Location(ci_regex(l)?));
        }
        if let Some(d) = &self.published_date {
            preds.push(Predicate::PublishedDate(d.to_lowercase()));
        }
        if let Some(n) = self.min_vacancies {
            preds.push(Predicate::MinVacancies(n));
        }
        if let Some(n) = self.max_vacancies {
            preds.push(Predicate::MaxVacancies(n));
        }
        Ok(preds)
    }
}

/// Records satisfying every supplied criterion, in their original order.
pub fn apply(records: &[JobRecord], criteria: &Criteria) -> Result<Vec<JobRecord>> {
    let preds = criteria.compile()?;
    let kept = filter_with(records, &preds)?;
    logd!("Filter kept {} of {} records", kept.len(), records.len());
    Ok(kept)
}

pub fn filter_with(records: &[JobRecord], preds: &[Predicate]) -> Result<Vec<JobRecord>> {
    let mut out = Vec::with_capacity(records.len());
    'records: for r in records {
        for p in preds {
            if !p.matches(r)? {
                continue 'records;
            }
        }
        out.push(r.clone());
    }
    Ok(out)
}
