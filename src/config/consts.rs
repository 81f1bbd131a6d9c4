// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.ane.cr/Puesto";
pub const PAGE_PARAM: &str = "Pagina";
pub const USER_AGENT: &str = concat!("ane_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const DEFAULT_PAGES: u32 = 1;
pub const DEFAULT_OUTPUT: &str = "ofertas_trabajo.json";

// Placeholders for fields missing from a listing
pub const NO_COMPANY: &str = "Empresa no especificada";
pub const NO_TITLE: &str = "Título no disponible";
pub const NO_DESCRIPTION: &str = "Descripción no disponible";
pub const NO_VACANCIES: &str = "Vacantes no especificadas";
pub const NO_DATE: &str = "Fecha no disponible";
pub const NO_LOCATION: &str = "Ubicación no especificada";

pub const LOCATION_SEP: &str = ", ";

// Export
pub const JSON_INDENT: &[u8] = b"    ";
