// src/specs/listings.rs

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::core::PageSource;
use crate::core::html::{all_text, first_text, sel, text_of};
use crate::error::Result;
use crate::record::JobRecord;

static LISTING: LazyLock<Selector> = LazyLock::new(|| sel("div.job-listing"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| sel("h4.job-listing-company"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("h3.job-listing-title"));
static DESCRIPTIONS: LazyLock<Selector> = LazyLock::new(|| sel("h4.job-listing-description"));
static PUBLISHED: LazyLock<Selector> = LazyLock::new(|| sel("small.job-listing-description"));
static LOCATION_LIST: LazyLock<Selector> = LazyLock::new(|| sel("ul"));
static LOCATION_ITEM: LazyLock<Selector> = LazyLock::new(|| sel("li"));

/// Positions inside the `h4.job-listing-description` run.
const DESCRIPTION_IX: usize = 0;
const VACANCIES_IX: usize = 1;

/// Fetch one page and extract its listings.
pub fn fetch_and_extract<S: PageSource + ?Sized>(source: &S, page: u32) -> Result<Vec<JobRecord>> {
    let html_doc = source.fetch_page(page)?;
    Ok(extract_listings(&html_doc))
}

/// Every `div.job-listing` in document order. A page without any yields an empty Vec.
pub fn extract_listings(html_doc: &str) -> Vec<JobRecord> {
    let doc = Html::parse_document(html_doc);
    doc.select(&LISTING).map(extract_one).collect()
}

fn extract_one(listing: ElementRef<'_>) -> JobRecord {
    let descriptions = all_text(listing, &DESCRIPTIONS);

    JobRecord {
        company: first_text(listing, &COMPANY).unwrap_or_else(|| s!(NO_COMPANY)),
        title: first_text(listing, &TITLE).unwrap_or_else(|| s!(NO_TITLE)),
        description: nth_or(&descriptions, DESCRIPTION_IX, NO_DESCRIPTION),
        vacancies: nth_or(&descriptions, VACANCIES_IX, NO_VACANCIES),
        published_date: first_text(listing, &PUBLISHED).unwrap_or_else(|| s!(NO_DATE)),
        locations: locations(listing),
    }
}

fn nth_or(items: &[String], ix: usize, missing: &str) -> String {
    match items.get(ix) {
        Some(v) => v.clone(),
        None => s!(missing),
    }
}

/// Items of the first `<ul>` only; an empty list joins to "".
fn locations(listing: ElementRef<'_>) -> String {
    match listing.select(&LOCATION_LIST).next() {
        Some(ul) => ul
            .select(&LOCATION_ITEM)
            .map(text_of)
            .collect::<Vec<_>>()
            .join(LOCATION_SEP),
        None => s!(NO_LOCATION),
    }
}
