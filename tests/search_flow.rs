// tests/search_flow.rs
//
// load → filter → export, the way `search` drives it.
//
use std::fs;
use std::path::PathBuf;

use ane_scrape::cli::{describe_search_error, search_cmd};
use ane_scrape::config::options::{ExportFormat, SearchOptions};
use ane_scrape::file::export_records;
use ane_scrape::filter::{self, Criteria};
use ane_scrape::{store, JobError, JobRecord};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ane_search_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rec(title: &str, vacancies: &str, locations: &str) -> JobRecord {
    JobRecord {
        company: "Grupo Ñandú, S.A.".into(),
        title: title.into(),
        description: "Descripción".into(),
        vacancies: vacancies.into(),
        published_date: "viernes, 7 de junio de 2024".into(),
        locations: locations.into(),
    }
}

fn sample() -> Vec<JobRecord> {
    vec![
        rec("Cajero", "2 vacantes", "San José"),
        rec("Chofer", "5 vacantes", "Heredia, Alajuela"),
        rec("Misceláneo", "1 vacante", "Cartago"),
    ]
}

#[test]
fn json_round_trip_without_filters() {
    let dir = tmp_dir("round_trip");
    let scraped = dir.join("scraped.json");
    let saved = dir.join("saved.json");

    store::save_records(&scraped, &sample()).unwrap();
    let loaded = store::load_records(&scraped).unwrap();
    let kept = filter::apply(&loaded, &Criteria::default()).unwrap();
    export_records(&kept, &saved, ExportFormat::Json).unwrap();

    assert_eq!(store::load_records(&saved).unwrap(), sample());
    assert_eq!(fs::read_to_string(&scraped).unwrap(), fs::read_to_string(&saved).unwrap());
}

#[test]
fn csv_has_header_plus_one_line_per_record() {
    let dir = tmp_dir("csv_lines");
    let out = dir.join("filtered.csv");
    let c = Criteria { max_vacancies: Some(4), ..Default::default() };
    let kept = filter::apply(&sample(), &c).unwrap();
    assert_eq!(kept.len(), 2);

    export_records(&kept, &out, ExportFormat::Csv).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), kept.len() + 1);
    assert_eq!(lines[0], "Título,Empresa,Ubicación,Vacantes,Fecha de Publicación");
    // company contains a comma, so it is quoted
    assert_eq!(
        lines[1],
        "Cajero,\"Grupo Ñandú, S.A.\",San José,2 vacantes,\"viernes, 7 de junio de 2024\""
    );
}

#[test]
fn min_vacancies_keeps_only_larger_posting() {
    let dir = tmp_dir("min_vac");
    let file = dir.join("jobs.json");
    fs::write(
        &file,
        r#"[
            {"company":"A","title":"Uno","description":"d","vacancies":"2 vacantes","published_date":"p","locations":"l"},
            {"company":"B","title":"Dos","description":"d","vacancies":"5 vacantes","published_date":"p","locations":"l"}
        ]"#,
    )
    .unwrap();

    let loaded = store::load_records(&file).unwrap();
    let c = Criteria { min_vacancies: Some(3), ..Default::default() };
    let kept = filter::apply(&loaded, &c).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Dos");
}

#[test]
fn search_on_missing_file_reports_not_found() {
    let dir = tmp_dir("missing");
    let save = dir.join("never.json");
    let opts = SearchOptions {
        file: dir.join("no_such_file.json"),
        save: Some(save.clone()),
        ..Default::default()
    };

    let err = search_cmd(&opts).unwrap_err();
    assert!(matches!(err, JobError::FileNotFound { .. }));
    assert!(describe_search_error(&opts, &err).ends_with("no existe."));
    assert!(!save.exists());
}

#[test]
fn search_on_malformed_file_reports_parse_error() {
    let dir = tmp_dir("malformed");
    let file = dir.join("bad.json");
    fs::write(&file, "not json").unwrap();
    let opts = SearchOptions { file, ..Default::default() };

    let err = search_cmd(&opts).unwrap_err();
    assert!(matches!(err, JobError::Parse(_)));
}

#[test]
fn search_on_empty_array_skips_save() {
    let dir = tmp_dir("empty");
    let file = dir.join("empty.json");
    fs::write(&file, "[]").unwrap();
    let save = dir.join("out.csv");
    let opts = SearchOptions {
        file,
        save: Some(save.clone()),
        format: ExportFormat::Csv,
        ..Default::default()
    };

    search_cmd(&opts).unwrap();
    assert!(!save.exists());
}

#[test]
fn search_saves_even_when_nothing_matches() {
    let dir = tmp_dir("no_match");
    let file = dir.join("jobs.json");
    store::save_records(&file, &sample()).unwrap();
    let save = dir.join("out.csv");
    let opts = SearchOptions {
        file,
        criteria: Criteria { position: Some("astronauta".into()), ..Default::default() },
        save: Some(save.clone()),
        format: ExportFormat::Csv,
    };

    search_cmd(&opts).unwrap();
    assert_eq!(fs::read_to_string(&save).unwrap().lines().count(), 1);
}

#[test]
fn vacancy_filter_on_placeholder_is_fatal() {
    let dir = tmp_dir("placeholder");
    let file = dir.join("jobs.json");
    let mut recs = sample();
    recs.push(rec("Guarda", "Vacantes no especificadas", "Limón"));
    store::save_records(&file, &recs).unwrap();
    let opts = SearchOptions {
        file,
        criteria: Criteria { min_vacancies: Some(1), ..Default::default() },
        ..Default::default()
    };

    assert!(matches!(search_cmd(&opts), Err(JobError::InvalidVacancies { .. })));
}
