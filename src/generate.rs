//! HTML site generation.
//!
//! Takes a loaded [`Site`] and writes one static HTML tree per language.
//!
//! ## Generated Pages
//!
//! - **Listing pages**: home, services, training, partners, events, contact
//! - **Service pages** (`/{lang}/services/{id}/`): one per service record
//! - **Partner pages** (`/{lang}/partners/{id}/`): one per partner record
//! - **Not found** (`/{lang}/404.html`)
//! - **Root** (`/index.html`): redirects to the default language
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                  # → /en/
//! ├── style.css
//! ├── assets/…                    # copied from content/assets
//! ├── en/
//! │   ├── index.html
//! │   ├── 404.html
//! │   ├── services/index.html
//! │   ├── services/consultation/index.html
//! │   └── …
//! └── ar/
//!     └── …                       # same tree, dir="rtl"
//! ```
//!
//! ## Degradation
//!
//! Rendering never fails on missing data:
//! - a missing content bundle renders blank strings
//! - a missing SEO record drops the metadata block from `<head>`
//! - an unknown service or partner id renders the not-found view with a link
//!   back to its listing
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text is escaped; only rendered markdown is inserted raw.

use crate::contact;
use crate::content::ContentBundle;
use crate::entities::{self, Event, IconKind, PartnerCategory, Service, ServiceCategory};
use crate::i18n::{Language, LanguageState};
use crate::routes::Route;
use crate::seo::{self, ResolvedMeta};
use crate::site::Site;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Page key (and content namespace) of the not-found view.
pub const NOT_FOUND_KEY: &str = "notFound";

/// One written HTML file.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub language: Language,
    /// `None` for the not-found page.
    pub route: Option<Route>,
    /// Path relative to the output directory.
    pub file: PathBuf,
    pub title: String,
    /// Whether SEO metadata was emitted.
    pub has_meta: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Languages in the order they were rendered.
    pub languages: Vec<Language>,
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: usize,
}

impl GenerateReport {
    pub fn pages_for(&self, language: Language) -> impl Iterator<Item = &GeneratedPage> {
        self.pages.iter().filter(move |p| p.language == language)
    }

    pub fn missing_meta(&self) -> impl Iterator<Item = &GeneratedPage> {
        self.pages.iter().filter(|p| !p.has_meta)
    }
}

pub fn generate(site: &Site, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("style.css"), CSS)?;
    fs::write(
        output_dir.join("index.html"),
        render_root_redirect(site.config.default_language).into_string(),
    )?;

    let mut report = GenerateReport {
        assets_copied: copy_dir(&site.root.join("assets"), &output_dir.join("assets"))?,
        ..GenerateReport::default()
    };

    // Default language first, then the rest.
    let default = site.config.default_language;
    let mut order = vec![default];
    order.extend(Language::ALL.iter().copied().filter(|&l| l != default));

    // Start on the last language so every switch in `order` notifies.
    let mut state = LanguageState::new(order[order.len() - 1]);
    let rendered = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&rendered);
    let subscription = state.subscribe(move |snap| {
        tracing::info!(language = %snap.language, dir = %snap.direction, "rendering language");
        recorder.borrow_mut().push(snap.language);
    });

    let routes = site.routes();
    for language in order {
        state.set_language(language);
        let current = state.current();

        for route in &routes {
            let (markup, meta) = render_page(site, current, Some(route));
            let file = PathBuf::from(route.path(current).trim_start_matches('/')).join("index.html");
            write_page(output_dir, &file, markup)?;
            report.pages.push(GeneratedPage {
                language: current,
                route: Some(route.clone()),
                file,
                title: page_title(meta.as_ref(), site),
                has_meta: meta.is_some(),
            });
        }

        let (markup, meta) = render_page(site, current, None);
        let file = PathBuf::from(current.code()).join("404.html");
        write_page(output_dir, &file, markup)?;
        report.pages.push(GeneratedPage {
            language: current,
            route: None,
            file,
            title: page_title(meta.as_ref(), site),
            has_meta: meta.is_some(),
        });
    }

    state.unsubscribe(subscription);
    report.languages = rendered.take();
    Ok(report)
}

fn page_title(meta: Option<&ResolvedMeta>, site: &Site) -> String {
    meta.map(|m| m.full_title.clone())
        .unwrap_or_else(|| site.config.site.default_title.clone())
}

fn write_page(output_dir: &Path, file: &Path, markup: Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(file = %file.display(), "page written");
    Ok(())
}

/// Copy `src` into `dst` recursively. Returns the number of files copied.
/// Mirror the tree under `src` into `dst`, returning the number of files
/// copied. A missing `src` copies nothing.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render one page. `None` renders the not-found view.
pub fn render_route(site: &Site, language: Language, route: Option<&Route>) -> Markup {
    render_page(site, language, route).0
}

fn render_page(
    site: &Site,
    language: Language,
    route: Option<&Route>,
) -> (Markup, Option<ResolvedMeta>) {
    let ctx = PageContext::new(site, language, route);
    let body = match route {
        Some(Route::Home) => Some(render_home(&ctx)),
        Some(Route::Services) => Some(render_services(&ctx)),
        Some(Route::Service(id)) => site
            .registries
            .get_service_by_id(id)
            .map(|service| render_service(&ctx, service)),
        Some(Route::Training) => Some(render_training(&ctx)),
        Some(Route::Partners) => Some(render_partners(&ctx)),
        Some(Route::Partner(id)) => site
            .registries
            .get_partner_by_id(id)
            .map(|partner| render_partner(&ctx, partner)),
        Some(Route::Events) => Some(render_events(&ctx)),
        Some(Route::Contact) => Some(render_contact(&ctx)),
        None => None,
    };

    match body {
        Some(body) => {
            let meta = route.and_then(|r| site.meta_for(r, language).ok());
            let doc = base_document(&ctx, meta.as_ref(), route.map(Route::page_key), body);
            (doc, meta)
        }
        None => {
            if let Some(route) = route {
                tracing::warn!(path = %route.path(language), "entity not found, rendering not-found view");
            }
            let meta = seo::resolve_seo(
                &site.seo,
                &site.config.site,
                NOT_FOUND_KEY,
                language,
                &Default::default(),
            )
            .ok();
            let body = render_not_found(&ctx, route.and_then(Route::parent));
            let doc = base_document(&ctx, meta.as_ref(), Some(NOT_FOUND_KEY), body);
            (doc, meta)
        }
    }
}

/// Everything a page renderer reads.
struct PageContext<'a> {
    site: &'a Site,
    language: Language,
    route: Option<&'a Route>,
    common: ContentBundle,
}

impl<'a> PageContext<'a> {
    fn new(site: &'a Site, language: Language, route: Option<&'a Route>) -> Self {
        Self {
            site,
            language,
            route,
            common: site.bundle("common", language),
        }
    }

    fn bundle(&self, namespace: &str) -> ContentBundle {
        self.site.bundle(namespace, self.language)
    }

    fn path(&self, route: &Route) -> String {
        route.path(self.language)
    }

    /// Site-relative path of this document.
    fn own_path(&self, language: Language) -> String {
        match self.route {
            Some(route) => route.path(language),
            None => format!("/{}/404.html", language.code()),
        }
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    ctx: &PageContext,
    meta: Option<&ResolvedMeta>,
    page_key: Option<&str>,
    content: Markup,
) -> Markup {
    let language = ctx.language;
    let alternates: Vec<(Language, String)> = Language::ALL
        .iter()
        .map(|&l| (l, ctx.own_path(l)))
        .collect();
    let body_class = page_key.map(|k| format!("page-{k}"));

    html! {
        (DOCTYPE)
        html lang=(language.code()) dir=(language.direction().as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(meta) = meta {
                    (seo::render_head(meta, &ctx.own_path(language), &alternates))
                }
                link rel="stylesheet" href="/style.css";
            }
            body class=[body_class] {
                (site_header(ctx))
                main { (content) }
                (site_footer(ctx))
            }
        }
    }
}

/// Renders the site header: brand, navigation and language toggle
fn site_header(ctx: &PageContext) -> Markup {
    let current_section = ctx.route.map(Route::section);
    let other = ctx.language.other();

    html! {
        header.site-header {
            a.brand href=(ctx.path(&Route::Home)) { (ctx.common.text("brand")) }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" aria-label=(ctx.common.text("nav.menu")) {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            nav.site-nav {
                ul {
                    @for route in Route::NAV.iter() {
                        @let is_current = current_section.as_ref() == Some(route);
                        li class=[is_current.then_some("current")] {
                            a href=(ctx.path(route)) { (ctx.common.text(&format!("nav.{}", route.page_key()))) }
                        }
                    }
                }
            }
            a.lang-toggle href=(ctx.own_path(other)) hreflang=(other.code()) lang=(other.code()) {
                (other.native_name())
            }
        }
    }
}

fn site_footer(ctx: &PageContext) -> Markup {
    let common = &ctx.common;
    html! {
        footer.site-footer {
            div.footer-brand {
                strong { (common.text("brand")) }
                p { (common.text("footer.tagline")) }
            }
            address.footer-contact {
                span { (common.text("footer.address")) }
                a href={ "tel:" (common.text("footer.phone").replace(' ', "")) } { (common.text("footer.phone")) }
                a href={ "mailto:" (common.text("footer.email")) } { (common.text("footer.email")) }
            }
            p.footer-rights { (common.text("footer.rights")) }
        }
    }
}

fn icon(kind: IconKind) -> Markup {
    html! {
        svg class={ "icon " (kind.css_class()) } viewBox="0 0 24 24" width="32" height="32"
            fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true" {
            path d=(kind.svg_path()) {}
        }
    }
}

fn intro(bundle: &ContentBundle) -> Markup {
    html! {
        header.page-intro {
            h1 { (bundle.text("intro.title")) }
            @let subtitle = bundle.text("intro.subtitle");
            @if !subtitle.is_empty() {
                p.lead { (subtitle) }
            }
        }
    }
}

fn bullet_list(class: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            ul class=(class) {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

fn service_card(ctx: &PageContext, service: &Service, learn_more: &str) -> Markup {
    let lang = ctx.language;
    html! {
        article.service-card {
            (icon(service.icon))
            span.badge { (service.category.label(lang)) }
            h3 { (service.title.get(lang)) }
            p { (service.summary.get(lang)) }
            a.more href=(ctx.path(&Route::Service(service.id.clone()))) { (learn_more) }
        }
    }
}

fn event_card(ctx: &PageContext, event: &Event, register_label: &str) -> Markup {
    let lang = ctx.language;
    html! {
        article.event-card {
            span.badge { (event.kind.label(lang)) }
            h3 { (event.title.get(lang)) }
            p.event-meta {
                time datetime=(event.date.to_string()) { (entities::format_date(event.date, lang)) }
                " · "
                (event.location.get(lang))
            }
            p { (event.description.get(lang)) }
            @if let (true, Some(url)) = (event.upcoming, &event.registration_url) {
                a.button href=(url) rel="noopener" target="_blank" { (register_label) }
            }
        }
    }
}

fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_home(ctx: &PageContext) -> Markup {
    let home = ctx.bundle("home");
    let lang = ctx.language;
    let registries = &ctx.site.registries;
    let learn_more = ctx.common.text("actions.learnMore");

    html! {
        section.hero {
            h1 { (home.text("hero.title")) }
            p.lead { (home.text("hero.subtitle")) }
            div.hero-actions {
                a.button href=(ctx.path(&Route::Services)) { (home.text("hero.primaryCta")) }
                a.button.secondary href=(ctx.path(&Route::Contact)) { (home.text("hero.secondaryCta")) }
            }
        }
        section.stats {
            @for stat in home.items("stats") {
                div.stat {
                    strong { (stat.text("value")) }
                    span { (stat.text("label")) }
                }
            }
        }
        section.services-preview {
            h2 { (home.text("services.title")) }
            p { (home.text("services.subtitle")) }
            div.card-grid {
                @for service in registries.services.list() {
                    (service_card(ctx, service, learn_more))
                }
            }
        }
        @let upcoming = registries.get_upcoming_events();
        @if !upcoming.is_empty() {
            section.events-preview {
                h2 { (home.text("events.title")) }
                div.card-grid {
                    @for event in upcoming.iter().take(3) {
                        (event_card(ctx, event, ctx.common.text("actions.register")))
                    }
                }
                a.more href=(ctx.path(&Route::Events)) { (home.text("events.viewAll")) }
            }
        }
        @if !registries.articles.is_empty() {
            section.articles {
                h2 { (home.text("articles.title")) }
                div.card-grid {
                    @for article in registries.articles.list() {
                        article.article-card {
                            span.badge { (article.category.label(lang)) }
                            h3 { (article.title.get(lang)) }
                            p.article-meta {
                                time datetime=(article.date.to_string()) { (entities::format_date(article.date, lang)) }
                                " · "
                                (article.author.get(lang))
                            }
                            p { (article.excerpt.get(lang)) }
                        }
                    }
                }
            }
        }
        section.partner-strip {
            h2 { (home.text("partners.title")) }
            ul.logo-row {
                @for partner in registries.partners.list() {
                    li {
                        a href=(ctx.path(&Route::Partner(partner.id.clone()))) {
                            img src=(partner.logo) alt=(partner.name) loading="lazy";
                        }
                    }
                }
            }
        }
        section.client-strip {
            h2 { (home.text("clients.title")) }
            ul.logo-row {
                @for client in registries.clients.list() {
                    li {
                        img src=(client.logo) alt=(client.name.get(lang)) loading="lazy";
                        span.client-sector { (client.sector.label(lang)) }
                    }
                }
            }
        }
        section.cta {
            h2 { (home.text("cta.title")) }
            p { (home.text("cta.subtitle")) }
            a.button href=(ctx.path(&Route::Contact)) { (home.text("cta.button")) }
        }
    }
}

fn render_services(ctx: &PageContext) -> Markup {
    let services = ctx.bundle("services");
    let learn_more = ctx.common.text("actions.learnMore");
    let lang = ctx.language;

    html! {
        (intro(&services))
        div.card-grid {
            @for service in ctx.site.registries.services.list() {
                article.service-card {
                    (icon(service.icon))
                    span.badge { (service.category.label(lang)) }
                    h2 { (service.title.get(lang)) }
                    p { (service.summary.get(lang)) }
                    (bullet_list("features", service.features.get(lang)))
                    a.more href=(ctx.path(&Route::Service(service.id.clone()))) { (learn_more) }
                }
            }
        }
    }
}

fn render_service(ctx: &PageContext, service: &Service) -> Markup {
    let services = ctx.bundle("services");
    let lang = ctx.language;
    let detail = ctx.site.registries.get_service_detail(&service.id);

    html! {
        nav.breadcrumb {
            a href=(ctx.path(&Route::Services)) { (ctx.common.text("nav.services")) }
            " › "
            (service.title.get(lang))
        }
        article.service-detail {
            header.page-intro {
                (icon(service.icon))
                span.badge { (service.category.label(lang)) }
                h1 { (service.title.get(lang)) }
                p.lead { (service.summary.get(lang)) }
            }
            @match detail {
                Some(detail) => {
                    section.overview { (markdown(detail.overview.get(lang))) }
                    @if !detail.highlights.get(lang).is_empty() {
                        section {
                            h2 { (services.text("detail.highlights")) }
                            (bullet_list("highlights", detail.highlights.get(lang)))
                        }
                    }
                    @if !detail.deliverables.get(lang).is_empty() {
                        section {
                            h2 { (services.text("detail.deliverables")) }
                            (bullet_list("deliverables", detail.deliverables.get(lang)))
                        }
                    }
                }
                None => {
                    section {
                        h2 { (services.text("detail.features")) }
                        (bullet_list("features", service.features.get(lang)))
                    }
                }
            }
            section.cta {
                p { (services.text("detail.ctaText")) }
                a.button href=(ctx.path(&Route::Contact)) { (services.text("detail.ctaButton")) }
            }
            a.back href=(ctx.path(&Route::Services)) { (services.text("detail.back")) }
        }
    }
}

fn render_training(ctx: &PageContext) -> Markup {
    let training = ctx.bundle("training");
    let learn_more = ctx.common.text("actions.learnMore");
    let training_services = ctx
        .site
        .registries
        .services
        .filter(|s| s.category == ServiceCategory::Training);

    html! {
        (intro(&training))
        section.programs {
            h2 { (training.text("programs.title")) }
            div.card-grid {
                @for program in training.items("programs.items") {
                    article.program-card {
                        h3 { (program.text("title")) }
                        p { (program.text("description")) }
                        p.program-meta {
                            span { (program.text("duration")) }
                            " · "
                            span { (program.text("level")) }
                        }
                    }
                }
            }
        }
        section.approach {
            h2 { (training.text("approach.title")) }
            ol {
                @for step in training.list("approach.steps") {
                    li { (step) }
                }
            }
        }
        @if !training_services.is_empty() {
            section.related {
                h2 { (training.text("related.title")) }
                div.card-grid {
                    @for service in training_services {
                        (service_card(ctx, service, learn_more))
                    }
                }
            }
        }
    }
}

fn render_partners(ctx: &PageContext) -> Markup {
    let partners = ctx.bundle("partners");
    let lang = ctx.language;
    let registries = &ctx.site.registries;

    html! {
        (intro(&partners))
        @for category in PartnerCategory::ALL {
            @let members = registries.get_partners_by_category(category);
            @if !members.is_empty() {
                section.partner-group {
                    h2 { (category.label(lang)) }
                    div.card-grid {
                        @for partner in members {
                            a.partner-card href=(ctx.path(&Route::Partner(partner.id.clone()))) {
                                img src=(partner.logo) alt=(partner.name) loading="lazy";
                                h3 { (partner.name) }
                                p { (partner.description.get(lang)) }
                            }
                        }
                    }
                }
            }
        }
        section.become-partner {
            h2 { (partners.text("become.title")) }
            p { (partners.text("become.text")) }
            a.button href=(ctx.path(&Route::Contact)) { (partners.text("become.button")) }
        }
    }
}

fn render_partner(ctx: &PageContext, partner: &entities::Partner) -> Markup {
    let partners = ctx.bundle("partners");
    let lang = ctx.language;

    html! {
        nav.breadcrumb {
            a href=(ctx.path(&Route::Partners)) { (ctx.common.text("nav.partners")) }
            " › "
            (partner.name)
        }
        article.partner-detail {
            header.page-intro {
                img.partner-logo src=(partner.logo) alt=(partner.name);
                span.badge { (partner.category.label(lang)) }
                h1 { (partner.name) }
            }
            p.lead { (partner.description.get(lang)) }
            a.button href=(partner.website) rel="noopener" target="_blank" { (partners.text("detail.visit")) }
            a.back href=(ctx.path(&Route::Partners)) { (partners.text("detail.back")) }
        }
    }
}

fn render_events(ctx: &PageContext) -> Markup {
    let events = ctx.bundle("events");
    let registries = &ctx.site.registries;
    let upcoming = registries.get_upcoming_events();
    let past = registries.get_past_events();
    let register = ctx.common.text("actions.register");

    html! {
        (intro(&events))
        section.upcoming {
            h2 { (events.text("upcoming.title")) }
            @if upcoming.is_empty() {
                p.empty { (events.text("upcoming.empty")) }
            } @else {
                div.card-grid {
                    @for event in upcoming {
                        (event_card(ctx, event, register))
                    }
                }
            }
        }
        @if !past.is_empty() {
            section.past {
                h2 { (events.text("past.title")) }
                div.card-grid {
                    @for event in past {
                        (event_card(ctx, event, register))
                    }
                }
            }
        }
    }
}

fn render_contact(ctx: &PageContext) -> Markup {
    let page = ctx.bundle("contact");

    html! {
        (intro(&page))
        div.contact-layout {
            form.contact-form method="post" action="#" novalidate {
                label {
                    span { (page.text("form.name")) " *" }
                    input type="text" name="name" required
                        minlength=(contact::NAME_MIN) maxlength=(contact::NAME_MAX)
                        placeholder=(page.text("form.namePlaceholder"));
                }
                label {
                    span { (page.text("form.email")) " *" }
                    input type="email" name="email" required
                        placeholder=(page.text("form.emailPlaceholder"));
                }
                label {
                    span { (page.text("form.phone")) }
                    input type="tel" name="phone" dir="ltr"
                        placeholder=(page.text("form.phonePlaceholder"));
                }
                label {
                    span { (page.text("form.company")) }
                    input type="text" name="company" maxlength=(contact::COMPANY_MAX)
                        placeholder=(page.text("form.companyPlaceholder"));
                }
                label {
                    span { (page.text("form.message")) " *" }
                    textarea name="message" rows="6" required
                        minlength=(contact::MESSAGE_MIN) maxlength=(contact::MESSAGE_MAX)
                        placeholder=(page.text("form.messagePlaceholder")) {}
                }
                button.button type="submit" { (page.text("form.submit")) }
            }
            aside.contact-info {
                h2 { (page.text("info.title")) }
                dl {
                    dt { (page.text("info.addressLabel")) }
                    dd { (ctx.common.text("footer.address")) }
                    dt { (page.text("info.phoneLabel")) }
                    dd dir="ltr" { (ctx.common.text("footer.phone")) }
                    dt { (page.text("info.emailLabel")) }
                    dd { (ctx.common.text("footer.email")) }
                    dt { (page.text("info.hoursLabel")) }
                    dd { (page.text("info.hours")) }
                }
            }
        }
    }
}

/// Not-found view. `parent` is the listing to link back to, if any.
fn render_not_found(ctx: &PageContext, parent: Option<Route>) -> Markup {
    let page = ctx.bundle(NOT_FOUND_KEY);
    let (title, message, back_label, back) = match &parent {
        Some(Route::Services) => (
            page.text("service.title"),
            page.text("service.message"),
            page.text("backToServices"),
            Route::Services,
        ),
        Some(Route::Partners) => (
            page.text("partner.title"),
            page.text("partner.message"),
            page.text("backToPartners"),
            Route::Partners,
        ),
        _ => (
            page.text("page.title"),
            page.text("page.message"),
            page.text("backHome"),
            Route::Home,
        ),
    };

    html! {
        section.not-found {
            h1 { (title) }
            p { (message) }
            a.button href=(ctx.path(&back)) { (back_label) }
        }
    }
}

/// Root `index.html`: sends visitors to the default language.
fn render_root_redirect(default: Language) -> Markup {
    let target = Route::Home.path(default);
    html! {
        (DOCTYPE)
        html lang=(default.code()) dir=(default.direction().as_str()) {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
                title { "KITES" }
            }
            body {
                a href=(target) { (target) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
