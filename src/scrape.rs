// src/scrape.rs
use crate::{
    config::options::ScrapeOptions,
    core::PageSource,
    error::Result,
    progress::Progress,
    record::JobRecord,
    specs::fetch_and_extract,
    store,
};

/// Why pagination ended. Not persisted: the written file looks the same either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Every requested page had listings.
    Completed,
    /// This page had no listings.
    EmptyPage(u32),
    FetchError { page: u32, message: String },
}

#[derive(Clone, Debug)]
pub struct ScrapeOutcome {
    pub records: Vec<JobRecord>,
    pub stop: StopReason,
}

/// Fetch pages `1..=pages` one at a time, appending listings in page order.
/// Stops early on the first empty page or fetch error, keeping what was collected.
pub fn collect_listings<S: PageSource + ?Sized>(
    source: &S,
    pages: u32,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeOutcome {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages);
    }

    let mut records: Vec<JobRecord> = Vec::new();
    let mut stop = StopReason::Completed;

    for page in 1..=pages {
        if let Some(p) = progress.as_deref_mut() {
            p.page_started(page);
        }

        match fetch_and_extract(source, page) {
            Ok(batch) if batch.is_empty() => {
                logf!("Page {page}: no listings, stopping");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_empty(page);
                }
                stop = StopReason::EmptyPage(page);
                break;
            }
            Ok(mut batch) => {
                logf!("Page {page}: {} listings", batch.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(page, batch.len());
                }
                records.append(&mut batch);
            }
            Err(e) => {
                let message = e.to_string();
                logd!("Page {page}: {message}");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page, &message);
                }
                stop = StopReason::FetchError { page, message };
                break;
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(records.len());
    }

    ScrapeOutcome { records, stop }
}

/// Collect listings and write them to `options.output`, however the loop ended.
pub fn run_scrape<S: PageSource + ?Sized>(
    source: &S,
    options: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome> {
    let outcome = collect_listings(source, options.pages, progress);
    store::save_records(&options.output, &outcome.records)?;
    logf!("Wrote {} records to {}", outcome.records.len(), options.output.display());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobError;
    use std::cell::RefCell;

    /// Serves canned pages; anything past the end is an empty page.
    struct Canned {
        pages: Vec<std::result::Result<String, String>>,
        calls: RefCell<Vec<u32>>,
    }

    impl PageSource for Canned {
        fn fetch_page(&self, page: u32) -> Result<String> {
            self.calls.borrow_mut().push(page);
            match self.pages.get(page as usize - 1) {
                Some(Ok(html)) => Ok(html.clone()),
                Some(Err(msg)) => Err(JobError::Io(std::io::Error::other(msg.clone()))),
                None => Ok(s!("<html></html>")),
            }
        }
    }

    fn page_with(titles: &[&str]) -> String {
        let mut html = s!("<html><body>");
        for t in titles {
            html.push_str(&format!(
                r#"<div class="job-listing"><h3 class="job-listing-title">{t}</h3></div>"#
            ));
        }
        html.push_str("</body></html>");
        html
    }

    fn titles(recs: &[JobRecord]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[derive(Default)]
    struct Recorder { events: Vec<String> }
    impl Progress for Recorder {
        fn page_started(&mut self, page: u32) { self.events.push(format!("start {page}")); }
        fn page_done(&mut self, page: u32, n: usize) { self.events.push(format!("done {page} {n}")); }
        fn page_empty(&mut self, page: u32) { self.events.push(format!("empty {page}")); }
        fn page_failed(&mut self, page: u32, _: &str) { self.events.push(format!("fail {page}")); }
        fn finish(&mut self, n: usize) { self.events.push(format!("finish {n}")); }
    }

    #[test]
    fn completes_all_pages_in_order() {
        let src = Canned {
            pages: vec![Ok(page_with(&["a", "b"])), Ok(page_with(&["c"]))],
            calls: RefCell::new(Vec::new()),
        };
        let out = collect_listings(&src, 2, None);
        assert_eq!(out.stop, StopReason::Completed);
        assert_eq!(titles(&out.records), vec!["a", "b", "c"]);
        assert_eq!(*src.calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn stops_on_empty_page() {
        let src = Canned {
            pages: vec![Ok(page_with(&["a"])), Ok(page_with(&[])), Ok(page_with(&["z"]))],
            calls: RefCell::new(Vec::new()),
        };
        let mut rec = Recorder::default();
        let out = collect_listings(&src, 5, Some(&mut rec));
        assert_eq!(out.stop, StopReason::EmptyPage(2));
        assert_eq!(titles(&out.records), vec!["a"]);
        assert_eq!(*src.calls.borrow(), vec![1, 2]);
        assert_eq!(rec.events, vec!["start 1", "done 1 1", "start 2", "empty 2", "finish 1"]);
    }

    #[test]
    fn stops_on_fetch_error_keeping_earlier_pages() {
        let src = Canned {
            pages: vec![Ok(page_with(&["a", "b"])), Err(s!("boom")), Ok(page_with(&["z"]))],
            calls: RefCell::new(Vec::new()),
        };
        let out = collect_listings(&src, 3, None);
        assert!(matches!(out.stop, StopReason::FetchError { page: 2, .. }));
        assert_eq!(titles(&out.records), vec!["a", "b"]);
        assert_eq!(*src.calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn zero_pages_fetches_nothing() {
        let src = Canned { pages: vec![], calls: RefCell::new(Vec::new()) };
        let out = collect_listings(&src, 0, None);
        assert!(out.records.is_empty());
        assert_eq!(out.stop, StopReason::Completed);
        assert!(src.calls.borrow().is_empty());
    }
}
