use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use crate::cli::{Cli, Commands};
use crate::codec::{decode, encode};
use crate::error::AppError;
use crate::fetch::{Fetcher, FileStore, HttpStore, SharedStore};
use crate::page::{Loaded, Page};
use crate::render::{RenderOptions, format_view, render};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) render: RenderOptions,
}

fn open_store(cli: &Cli) -> Result<SharedStore, AppError> {
    if let Some(path) = &cli.file {
        return Ok(Arc::new(FileStore::new(path)));
    }
    if let Some(url) = &cli.url {
        return Ok(Arc::new(HttpStore::new(url.as_str(), cli.timeout())));
    }
    Err(AppError::MissingStore)
}

fn print_loaded(loaded: &Loaded, ctx: &CommandContext<'_>) {
    if let Some(e) = &loaded.failure
        && !ctx.cli.quiet
    {
        eprintln!("Warning: {e}");
    }
    print!("{}", format_view(&loaded.view, loaded.skipped, ctx.render));
}

fn handle_show(page: &Page, ctx: &CommandContext<'_>) {
    print_loaded(&page.load(), ctx);
}

fn handle_sign(
    page: &mut Page,
    name: &str,
    message: &str,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let submitted = page.submit(name, message)?;
    if submitted.truncated {
        eprintln!("Warning: text after '~' in your message will not be shown");
    }
    print_loaded(&submitted.loaded, ctx);
    Ok(())
}

fn handle_encode(name: &str, message: &str) -> Result<(), AppError> {
    let fragment = encode(name, message)?;
    if fragment.truncates_on_decode() {
        eprintln!("Warning: text after '~' in your message will not be shown");
    }
    println!("{fragment}");
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(AppError::Input),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .map_err(AppError::Input)?;
            Ok(raw)
        }
    }
}

fn handle_decode(path: Option<&Path>, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let raw = read_input(path)?;
    let decoded = decode(&raw);
    print!(
        "{}",
        format_view(&render(decoded.entries), decoded.skipped, ctx.render)
    );
    Ok(())
}

/// Dispatch the parsed command
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let ctx = CommandContext {
        cli,
        render: cli.render_options(),
    };

    match &cli.command {
        Some(Commands::Encode { name, message }) => return handle_encode(name, message),
        Some(Commands::Decode { path }) => return handle_decode(path.as_deref(), &ctx),
        _ => {}
    }

    let store = open_store(cli)?;
    if !cli.quiet {
        eprintln!("Guestbook: {}", store.describe());
    }
    let mut page = Page::new(Fetcher::new(store), cli.reload_policy());

    match &cli.command {
        Some(Commands::Sign { name, message }) => handle_sign(&mut page, name, message, &ctx),
        Some(Commands::Browse) => {
            let stdin = io::stdin();
            crate::browse::run(&mut page, stdin.lock(), &mut io::stdout(), ctx.render)
        }
        _ => {
            handle_show(&page, &ctx);
            Ok(())
        }
    }
}
