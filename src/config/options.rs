// src/config/options.rs
use std::path::PathBuf;

use clap::ValueEnum;

use super::consts::*;
use crate::filter::Criteria;

/// HTTP settings handed to `Fetcher::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub page_param: String,
    /// The listing site's certificate chain does not verify; on by default.
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            page_param: s!(PAGE_PARAM),
            accept_invalid_certs: true,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub fetch: FetchOptions,
    /// Upper bound; pagination stops earlier on an empty page or a fetch error.
    pub pages: u32,
    pub output: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            pages: DEFAULT_PAGES,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Json => "json", ExportFormat::Csv => "csv" }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub file: PathBuf,
    pub criteria: Criteria,
    pub save: Option<PathBuf>,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_defaults_disable_verification() {
        let f = FetchOptions::default();
        assert!(f.accept_invalid_certs);
        assert_eq!(f.base_url, BASE_URL);
        assert_eq!(f.page_param, "Pagina");
    }

    #[test]
    fn scrape_defaults() {
        let o = ScrapeOptions::default();
        assert_eq!(o.pages, 1);
        assert_eq!(o.output, PathBuf::from("ofertas_trabajo.json"));
    }

    #[test]
    fn format_ext() {
        assert_eq!(ExportFormat::default(), ExportFormat::Json);
        assert_eq!(ExportFormat::Csv.ext(), "csv");
    }
}
