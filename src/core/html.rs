// src/core/html.rs

// Small helpers over `scraper` element refs.

use scraper::{ElementRef, Selector};

/// All descendant text of `el`, trimmed at both ends.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `sel`, if any.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(text_of)
}

/// Trimmed text of every descendant matching `sel`, in document order.
pub fn all_text(scope: ElementRef<'_>, sel: &Selector) -> Vec<String> {
    scope.select(sel).map(text_of).collect()
}

/// Build a selector from a static string. Panics on a malformed literal.
pub fn sel(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(s) => s,
        Err(e) => panic!("bad selector {css:?}: {e}"),
    }
}
