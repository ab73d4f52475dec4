use super::render::{CandidateDir, ProbeFile, Renderer};
use super::setup::{parse_cli, Cli, Commands, OutputFormat};
use anvilapp::error::AnvilError;
use anvilapp::init::{initialize, AnvilContext};
use anvilapp::menu::Power;
use anvilapp::view::probe::{probe_paths, FileProbe, FsProbe};
use anvilapp::view::ViewIdentifier;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ANVIL_LOG";

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let mut ctx = create_context(&cli)?;
    let renderer = Renderer::detect().context("failed to load output templates")?;

    match cli.command {
        Commands::Resolve { view, locations } => {
            handle_resolve(&mut ctx, &renderer, &view, locations)
        }
        Commands::Candidates { view, output } => handle_candidates(&ctx, &renderer, &view, output),
        Commands::Menu {
            name,
            power,
            output,
        } => handle_menu(&ctx, &renderer, &name, power, output),
        Commands::Menus => handle_menus(&ctx, &renderer),
        Commands::Config => handle_config(&ctx, &renderer),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn create_context(cli: &Cli) -> Result<AnvilContext> {
    let site_root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    debug!(site = %site_root.display(), "using site root");

    initialize(&site_root, cli.theme.clone())
        .with_context(|| format!("failed to initialize site at {}", site_root.display()))
}

fn handle_resolve(
    ctx: &mut AnvilContext,
    renderer: &Renderer,
    view: &str,
    locations: Vec<PathBuf>,
) -> Result<()> {
    for location in locations {
        ctx.api.add_location(location);
    }

    match ctx.api.resolve_view(view) {
        Ok(path) => {
            print!("{}", renderer.resolved(&path)?);
            Ok(())
        }
        Err(err) => {
            if let AnvilError::ViewNotFound {
                identifier,
                attempted,
            } = &err
            {
                eprint!("{}", renderer.not_found(identifier, attempted)?);
            }
            Err(err.into())
        }
    }
}

fn handle_candidates(
    ctx: &AnvilContext,
    renderer: &Renderer,
    view: &str,
    output: OutputFormat,
) -> Result<()> {
    let identifier = ViewIdentifier::parse(view);
    let extensions = ctx.api.views().state().extensions();

    let dirs: Vec<CandidateDir> = ctx
        .api
        .view_candidates(view)
        .iter()
        .enumerate()
        .map(|(i, dir)| CandidateDir {
            rank: i + 1,
            path: dir.display().to_string(),
            files: probe_paths(dir, &identifier, extensions)
                .into_iter()
                .map(|path| ProbeFile {
                    exists: FsProbe.exists(&path),
                    path: path.display().to_string(),
                })
                .collect(),
        })
        .collect();

    match output {
        OutputFormat::Json => {
            let paths: Vec<&str> = dirs.iter().map(|d| d.path.as_str()).collect();
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }
        OutputFormat::Text => {
            print!("{}", renderer.candidates(view, &ctx.config.theme, &dirs)?);
        }
    }
    Ok(())
}

fn handle_menu(
    ctx: &AnvilContext,
    renderer: &Renderer,
    name: &str,
    power: Option<Power>,
    output: OutputFormat,
) -> Result<()> {
    let build = ctx.api.get_menu_report(name, power)?;

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&build.root)?),
        OutputFormat::Text => print!("{}", renderer.menu(name, power, &build)?),
    }
    Ok(())
}

fn handle_menus(ctx: &AnvilContext, renderer: &Renderer) -> Result<()> {
    let names = ctx.api.menu_names()?;
    print!("{}", renderer.list(&names, "No menus found.")?);
    Ok(())
}

fn handle_config(ctx: &AnvilContext, renderer: &Renderer) -> Result<()> {
    print!("{}", renderer.config(&ctx.config)?);
    Ok(())
}
