// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{
        consts::{BASE_URL, DEFAULT_OUTPUT, DEFAULT_PAGES},
        options::{ExportFormat, FetchOptions, ScrapeOptions, SearchOptions},
    },
    core::Fetcher,
    error::JobError,
    file, filter,
    filter::Criteria,
    progress::Progress,
    report, scrape, store,
};

#[derive(Parser, Debug)]
#[command(name = "ane_scrape")]
#[command(about = "Scrape ane.cr job listings and search the saved results", version)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape listing pages and save them as a JSON file
    Scrape(ScrapeArgs),

    /// Filter a previously scraped JSON file
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Number of listing pages to fetch
    #[arg(long, default_value_t = DEFAULT_PAGES)]
    pub pages: u32,

    /// Output JSON file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Listing endpoint; the page number is sent as ?Pagina=N
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// JSON file produced by `scrape`
    pub file: PathBuf,

    /// Filter by position/title (case-insensitive regex; no look-around or backreferences)
    #[arg(long)]
    pub position: Option<String>,

    /// Filter by location (case-insensitive regex; no look-around or backreferences)
    #[arg(long)]
    pub location: Option<String>,

    /// Filter by publication date (free-form substring)
    #[arg(long)]
    pub published_date: Option<String>,

    /// Minimum number of vacancies
    #[arg(long)]
    pub min_vacancies: Option<i64>,

    /// Maximum number of vacancies
    #[arg(long)]
    pub max_vacancies: Option<i64>,

    /// Save the filtered results to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Format used with --save
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub output_format: ExportFormat,
}

impl From<ScrapeArgs> for ScrapeOptions {
    fn from(a: ScrapeArgs) -> Self {
        Self {
            fetch: FetchOptions { base_url: a.base_url, ..FetchOptions::default() },
            pages: a.pages,
            output: a.output,
        }
    }
}

impl From<SearchArgs> for SearchOptions {
    fn from(a: SearchArgs) -> Self {
        Self {
            file: a.file,
            criteria: Criteria {
                position: a.position,
                location: a.location,
                published_date: a.published_date,
                min_vacancies: a.min_vacancies,
                max_vacancies: a.max_vacancies,
            },
            save: a.save,
            format: a.output_format,
        }
    }
}

/// Prints page-by-page status lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn page_started(&mut self, page: u32) {
        println!("Scrapeando página {page}...");
    }
    fn page_empty(&mut self, page: u32) {
        println!("No se encontraron más ofertas en la página {page}.");
    }
    fn page_failed(&mut self, page: u32, msg: &str) {
        println!("Error en la página {page}: {msg}");
    }
}

/// Dispatch a parsed command. Failures are printed, never returned:
/// the process exit status does not reflect them.
pub fn run(cli: Cli) {
    match cli.command {
        Command::Scrape(args) => {
            let opts = ScrapeOptions::from(args);
            if let Err(e) = scrape_cmd(&opts) {
                logd!("scrape: {e}");
                println!("{}", describe_scrape_error(&opts, &e));
            }
        }
        Command::Search(args) => {
            let opts = SearchOptions::from(args);
            if let Err(e) = search_cmd(&opts) {
                logd!("search: {e}");
                println!("{}", describe_search_error(&opts, &e));
            }
        }
    }
}

pub fn scrape_cmd(opts: &ScrapeOptions) -> Result<(), JobError> {
    let fetcher = Fetcher::new(&opts.fetch)?;
    let mut progress = ConsoleProgress;
    let outcome = scrape::run_scrape(&fetcher, opts, Some(&mut progress))?;
    println!(
        "Se han guardado {} ofertas de trabajo en '{}'.",
        outcome.records.len(),
        opts.output.display()
    );
    Ok(())
}

/// Load, filter, print, and optionally save.
pub fn search_cmd(opts: &SearchOptions) -> Result<(), JobError> {
    let records = store::load_records(&opts.file)?;
    if records.is_empty() {
        println!("{}", report::NO_RECORDS);
        return Ok(());
    }

    let matches = filter::apply(&records, &opts.criteria)?;
    println!("{}", report::render(&matches));

    if let Some(path) = &opts.save {
        let written = file::export_records(&matches, path, opts.format)?;
        println!("Resultados guardados en '{}'.", written.display());
    }
    Ok(())
}

fn describe_scrape_error(opts: &ScrapeOptions, e: &JobError) -> String {
    match e {
        JobError::Io(_) => format!("No se pudo escribir '{}': {e}", opts.output.display()),
        other => format!("Error inesperado: {other}"),
    }
}

pub fn describe_search_error(opts: &SearchOptions, e: &JobError) -> String {
    match e {
        JobError::FileNotFound { .. } => {
            format!("El archivo '{}' no existe.", opts.file.display())
        }
        JobError::Parse(_) => {
            s!("Error al leer el archivo JSON. Asegúrate de que tenga un formato válido.")
        }
        other => format!("Error inesperado: {other}"),
    }
}
