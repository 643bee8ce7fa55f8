// SPDX-License-Identifier: PMPL-1.0-or-later

//! kisan-mitra: multilingual farmer assistant
//!
//! Opens the interactive terminal interface by default. The desktop window,
//! single-screen printing/export, one-shot questions and pest diagnosis are
//! available as subcommands.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use kisan_mitra::app::App;
use kisan_mitra::catalog::Catalog;
use kisan_mitra::config::{AppConfig, CONFIG_ENV};
use kisan_mitra::diagnostics;
use kisan_mitra::i18n::{coverage, t, Lang, Msg};
use kisan_mitra::matcher::CropFilter;
use kisan_mitra::screens;
use kisan_mitra::session::Screen;
use kisan_mitra::ui::{FarmGui, Tui, ViewFormat, ViewFormatter};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kisan-mitra")]
#[command(version)]
#[command(about = "Multilingual farmer assistant: crop advice, pest diagnosis, market prices and weather")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (.json, .yaml or .yml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Interface language: en, hi, ta or te
    #[arg(long, global = true, value_name = "CODE")]
    lang: Option<String>,

    /// Seed for the simulated diagnosis and listening
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal interface (default)
    Tui,

    /// Desktop window
    Gui,

    /// Print one screen for a farmer described on the command line
    Show {
        /// registration, dashboard, pests, market, weather or voice
        #[arg(value_name = "SCREEN")]
        screen: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ViewFormat::Text)]
        format: ViewFormat,

        /// Market screen crop filter
        #[arg(long, value_name = "CROP")]
        crop: Option<String>,

        #[command(flatten)]
        farmer: FarmerArgs,
    },

    /// Ask the voice assistant a question
    Ask {
        #[arg(value_name = "QUESTION", required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Run the simulated pest diagnosis on an image file
    Diagnose {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        #[command(flatten)]
        farmer: FarmerArgs,
    },

    /// List supported languages and their translation coverage
    Languages,

    /// Check configuration, catalog and translations
    Doctor,
}

/// Registration details used by the non-interactive commands.
#[derive(Args)]
struct FarmerArgs {
    #[arg(long, default_value = "Farmer")]
    name: String,

    #[arg(long, default_value = "0000000000")]
    phone: String,

    #[arg(long, default_value = "Maharashtra")]
    state: String,

    /// Comma-separated main crops
    #[arg(long, value_delimiter = ',')]
    crops: Vec<String>,

    #[arg(long, default_value = "")]
    district: String,

    #[arg(long, default_value = "")]
    village: String,

    /// Land size in acres
    #[arg(long, default_value = "")]
    land_size: String,

    #[arg(long, default_value = "")]
    soil: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let working_dir = std::env::current_dir().context("reading working directory")?;
    let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let (mut config, source) = AppConfig::discover(cli.config.as_deref(), env_path, &working_dir)?;
    if let Some(code) = &cli.lang {
        config.language = Lang::parse(code)?;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    tracing::debug!(source = %source, "configuration loaded");

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => Tui::run(build_app(config)?)?,
        Commands::Gui => FarmGui::run(build_app(config)?)?,
        Commands::Show {
            screen,
            format,
            crop,
            farmer,
        } => {
            let target = Screen::parse(&screen).ok_or_else(|| {
                anyhow!("unknown screen '{screen}' (expected registration, dashboard, pests, market, weather or voice)")
            })?;
            let mut app = build_app(config)?;
            if target != Screen::Registration {
                register(&mut app, farmer)?;
                app.navigate(target);
            }
            if let Some(crop) = crop {
                app.set_market_filter(CropFilter::parse(&crop));
            }
            let view = screens::render(&app, Instant::now());
            print!("{}", format.serialize(&view)?);
        }
        Commands::Ask { question } => {
            let mut app = build_app(config)?;
            let turn = app.ask(&question.join(" "));
            let lang = app.lang();
            tracing::debug!(intent = ?turn.intent, "question classified");
            println!("{} {}", format!("{}:", t(lang, Msg::VoiceYou)).bold(), turn.question);
            println!(
                "{} {}",
                format!("{}:", t(lang, Msg::VoiceAssistant)).bold().green(),
                turn.answer
            );
        }
        Commands::Diagnose { image, farmer } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("reading image {}", image.display()))?;
            let mut app = build_app(config)?;
            register(&mut app, farmer)?;
            app.navigate(Screen::PestDetection);
            app.submit_image(image.display().to_string(), bytes, Instant::now());
            eprintln!("{}", t(app.lang(), Msg::PestAnalyzing).dimmed());
            std::thread::sleep(app.config().analysis_delay());
            app.tick(Instant::now());

            let mut view = screens::render(&app, Instant::now());
            // upload and diagnosis only, not the common pests list
            view.sections.truncate(2);
            ViewFormatter::new().print(&view);
        }
        Commands::Languages => print_languages(config.language),
        Commands::Doctor => {
            let catalog = Catalog::load_or_sample(config.catalog.as_deref());
            diagnostics::run_self_diagnostics(&config, &source, &catalog)?;
        }
    }

    Ok(())
}

fn build_app(config: AppConfig) -> Result<App> {
    let catalog = Catalog::load_or_sample(config.catalog.as_deref())?;
    Ok(App::new(config, catalog))
}

fn init_tracing(verbose: bool) -> Result<()> {
    let mut filter = match std::env::var("KISAN_MITRA_LOG").or_else(|_| std::env::var("RUST_LOG")) {
        Ok(directives) => EnvFilter::try_new(directives).context("parsing log filter")?,
        Err(_) => EnvFilter::new("kisan_mitra=warn"),
    };
    if verbose {
        filter = filter.add_directive("kisan_mitra=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn register(app: &mut App, farmer: FarmerArgs) -> Result<()> {
    let form = app.form_mut();
    form.name = farmer.name;
    form.phone = farmer.phone;
    form.state = farmer.state;
    form.district = farmer.district;
    form.village = farmer.village;
    form.land_size = farmer.land_size;
    form.soil_type = farmer.soil;
    for crop in farmer.crops.iter().filter(|c| !c.trim().is_empty()) {
        form.toggle_crop(crop.trim());
    }
    if app.submit_registration() {
        return Ok(());
    }
    let lang = app.lang();
    let problems: Vec<String> = app
        .session()
        .registration_errors()
        .iter()
        .map(|e| format!("{}: {}", t(lang, e.field.label()), t(lang, e.problem.message())))
        .collect();
    Err(anyhow!("registration rejected: {}", problems.join("; ")))
}

fn print_languages(active: Lang) {
    for lang in Lang::all() {
        let (own, total) = coverage(*lang);
        let marker = if *lang == active { "*".green().bold() } else { " ".normal() };
        println!(
            "{} {}  {:10} {}/{} messages",
            marker,
            lang.code(),
            lang.native_name(),
            own,
            total
        );
    }
}
