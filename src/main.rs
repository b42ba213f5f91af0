use clap::{Parser, Subcommand};
use kites_site::contact::ContactForm;
use kites_site::generate::{self, NOT_FOUND_KEY};
use kites_site::i18n::Language;
use kites_site::routes;
use kites_site::seo::{self, SeoOverrides};
use kites_site::site::Site;
use kites_site::{config, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "kites-site")]
#[command(about = "Bilingual site generator for KITES Kuwait")]
#[command(long_about = "\
Bilingual site generator for KITES Kuwait

Renders every page in English and Arabic (right-to-left) from translated
content bundles, per-page SEO records and domain fixtures.

Content structure:

  content/
  ├── config.toml                  # Site defaults (optional)
  ├── locales/
  │   ├── en/common.json           # One bundle per namespace and language
  │   └── ar/common.json
  ├── seo/
  │   ├── pages.json               # Per-page metadata, keyed by page then language
  │   ├── services.json            # Replaces page metadata on service pages
  │   └── partners.json            # Replaces page metadata on partner pages
  ├── data/
  │   ├── services.json            # Services, partners, clients, events, articles
  │   └── …
  └── assets/                      # Copied verbatim to the output

SEO resolution (later wins):
  page record → service record → partner record → custom fields

Run 'kites-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page in every language
    Build,
    /// Load and validate content without writing anything
    Check,
    /// Print the HTML of one page, e.g. `render /ar/services/consultation/`
    Render {
        path: String,
        /// Language for paths without a language prefix
        #[arg(long)]
        lang: Option<String>,
    },
    /// Print the resolved SEO metadata of one page as JSON
    Meta {
        path: String,
        /// Language for paths without a language prefix
        #[arg(long)]
        lang: Option<String>,
    },
    /// Validate a contact submission and print the acknowledgement
    Contact {
        #[arg(long, default_value = "en")]
        lang: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        message: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so `render` and `meta` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kites_site=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&site, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::Render { path, lang } => {
            let site = Site::load(&cli.source)?;
            let (language, route) = routes::parse_path(&path);
            let language = pick_language(language, lang.as_deref(), &site)?;
            print!(
                "{}",
                generate::render_route(&site, language, route.as_ref()).into_string()
            );
        }
        Command::Meta { path, lang } => {
            let site = Site::load(&cli.source)?;
            let (language, route) = routes::parse_path(&path);
            let language = pick_language(language, lang.as_deref(), &site)?;
            let meta = match &route {
                Some(route) => site.meta_for(route, language)?,
                None => seo::resolve_seo(
                    &site.seo,
                    &site.config.site,
                    NOT_FOUND_KEY,
                    language,
                    &SeoOverrides::default(),
                )?,
            };
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        Command::Contact {
            lang,
            name,
            email,
            phone,
            company,
            message,
        } => {
            let site = Site::load(&cli.source)?;
            let language = Language::from_code(&lang)?;
            let form = ContactForm {
                name,
                email,
                phone,
                company,
                message,
            };
            let ack = form.submit(language, &site.config.contact)?;
            std::thread::sleep(ack.simulated_delay);
            println!("{}", ack.message);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Language from the path prefix, else `--lang`, else the site default.
fn pick_language(
    from_path: Option<Language>,
    flag: Option<&str>,
    site: &Site,
) -> Result<Language, Box<dyn std::error::Error>> {
    match (from_path, flag) {
        (Some(language), _) => Ok(language),
        (None, Some(code)) => Ok(Language::from_code(code)?),
        (None, None) => Ok(site.config.default_language),
    }
}
