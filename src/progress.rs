// src/progress.rs
/// Progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the page limit.
    fn begin(&mut self, _pages: u32) {}

    /// About to fetch `page`.
    fn page_started(&mut self, _page: u32) {}

    /// `page` yielded `count` listings.
    fn page_done(&mut self, _page: u32, _count: usize) {}

    /// `page` had no listings; pagination stops here.
    fn page_empty(&mut self, _page: u32) {}

    /// Fetching `page` failed; pagination stops here.
    fn page_failed(&mut self, _page: u32, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _total_records: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
