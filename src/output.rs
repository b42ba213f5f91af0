//! CLI output formatting.
//!
//! Output is **information-centric**: the primary line for every entity is
//! its identity (route, id, namespace), with file paths and counts shown as
//! indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Site
//!     Name: KITES Kuwait
//!     URL: https://www.kites-kw.com
//!     Title template: %s | KITES Kuwait
//!     Default language: en (English)
//!
//! Content
//!     common: en ar
//!     home: en ar
//!
//! SEO
//!     pages: 7
//!     services: 4
//!     partners: 6
//!
//! Records
//!     services: 4 (4 with details)
//!     partners: 6
//!     events: 5 (3 upcoming, 2 past)
//!
//! Parity
//!     ok
//! ```
//!
//! ## Build
//!
//! ```text
//! en (ltr)
//!     001 /en/ → en/index.html
//!     002 /en/services/ → en/services/index.html
//!     …
//!     404 → en/404.html
//! ar (rtl)
//!     …
//!
//! Generated 34 pages in 2 languages, copied 13 assets
//! ```
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::i18n::Language;
use crate::site::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
}

// ============================================================================
// Check
// ============================================================================

/// Format the inventory of a loaded site.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();
    let defaults = &site.config.site;

    section(&mut lines, "Site");
    lines.push(format!("{}Name: {}", indent(1), defaults.site_name));
    lines.push(format!("{}URL: {}", indent(1), defaults.site_url));
    lines.push(format!("{}Title template: {}", indent(1), defaults.title_template));
    lines.push(format!(
        "{}Default language: {} ({})",
        indent(1),
        site.config.default_language,
        site.config.default_language.name()
    ));

    section(&mut lines, "Content");
    for namespace in &site.config.namespaces {
        let present: Vec<&str> = Language::ALL
            .iter()
            .filter(|&&l| site.content.contains(namespace, l))
            .map(|l| l.code())
            .collect();
        let shown = if present.is_empty() {
            "(missing)".to_string()
        } else {
            present.join(" ")
        };
        lines.push(format!("{}{}: {}", indent(1), namespace, shown));
    }

    section(&mut lines, "SEO");
    lines.push(format!("{}pages: {}", indent(1), site.seo.pages.len()));
    lines.push(format!("{}services: {}", indent(1), site.seo.services.len()));
    lines.push(format!("{}partners: {}", indent(1), site.seo.partners.len()));

    let registries = &site.registries;
    let with_details = registries
        .services
        .filter(|s| registries.get_service_detail(&s.id).is_some())
        .len();
    section(&mut lines, "Records");
    lines.push(format!(
        "{}services: {} ({} with details)",
        indent(1),
        registries.services.len(),
        with_details
    ));
    lines.push(format!("{}partners: {}", indent(1), registries.partners.len()));
    lines.push(format!("{}clients: {}", indent(1), registries.clients.len()));
    lines.push(format!(
        "{}events: {} ({} upcoming, {} past)",
        indent(1),
        registries.events.len(),
        registries.get_upcoming_events().len(),
        registries.get_past_events().len()
    ));
    lines.push(format!("{}articles: {}", indent(1), registries.articles.len()));

    section(&mut lines, "Parity");
    let gaps = site.content.parity_report(&site.config.namespaces);
    if gaps.is_empty() {
        lines.push(format!("{}ok", indent(1)));
    } else {
        for gap in gaps {
            lines.push(format!("{}{}", indent(1), gap));
        }
    }

    lines
}

/// Print the site inventory to stdout.
pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the generate report, grouped by language in render order.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for &language in &report.languages {
        lines.push(format!("{} ({})", language, language.direction()));
        let mut position = 0;
        for page in report.pages_for(language) {
            let file = page.file.display();
            let no_meta = if page.has_meta { "" } else { " (no metadata)" };
            match &page.route {
                Some(route) => {
                    position += 1;
                    lines.push(format!(
                        "{}{} {} → {}{}",
                        indent(1),
                        format_index(position),
                        route.path(language),
                        file,
                        no_meta
                    ));
                }
                None => lines.push(format!("{}404 → {}{}", indent(1), file, no_meta)),
            }
        }
    }

    lines.push(String::new());
    let missing = report.missing_meta().count();
    let mut summary = format!(
        "Generated {} pages in {} languages, copied {} assets",
        report.pages.len(),
        report.languages.len(),
        report.assets_copied
    );
    if missing > 0 {
        summary.push_str(&format!(" ({missing} without metadata)"));
    }
    lines.push(summary);

    lines
}

/// Print the generate report to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
