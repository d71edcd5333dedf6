//! Selector lookup helpers over parsed HTML.
//!
//! Thin wrappers over the `scraper` crate giving the extractors the two
//! primitives they are written against: "trimmed text of the first element
//! matching a selector" (empty when absent) and "attribute of the first
//! element matching a selector" (`None` when absent).

use scraper::{ElementRef, Selector};

use crate::error::{Error, Result};

pub(crate) fn selector(s: &str) -> Result<Selector> {
  Selector::parse(s).map_err(|e| Error::Selector {
    selector: s.to_string(),
    message:  e.to_string(),
  })
}

/// Trimmed text of the first element under `root` matching `sel`, or the
/// empty string if no element matches.
pub(crate) fn find_text(root: ElementRef<'_>, sel: &Selector) -> String {
  root
    .select(sel)
    .next()
    .map(element_text)
    .unwrap_or_default()
}

/// `attr` of the first element under `root` matching `sel`.
pub(crate) fn find_attr(
  root: ElementRef<'_>,
  sel: &Selector,
  attr: &str,
) -> Option<String> {
  root
    .select(sel)
    .next()
    .and_then(|el| el.value().attr(attr))
    .map(str::to_owned)
}

/// All descendant text of `el`, concatenated and trimmed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
  el.text().collect::<String>().trim().to_string()
}
