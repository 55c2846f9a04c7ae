//! Interactive page driven from a line-oriented terminal
//!
//! `+` flips the sign form (and prompts when it opens), `s` prompts again
//! while the form is open, `r` reloads, `q` quits.

use std::io::{self, BufRead, Write};

use crate::error::AppError;
use crate::page::{Loaded, Page};
use crate::render::{RenderOptions, format_view};

fn show(out: &mut impl Write, loaded: &Loaded, opts: RenderOptions) -> io::Result<()> {
    if let Some(e) = &loaded.failure {
        writeln!(out, "Warning: {e}")?;
    }
    write!(out, "{}", format_view(&loaded.view, loaded.skipped, opts))
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for the form fields and submit. Returns false on end of input.
fn sign(
    page: &mut Page,
    input: &mut impl BufRead,
    out: &mut impl Write,
    opts: RenderOptions,
) -> Result<bool, AppError> {
    let Some(author) = prompt(input, out, "Name").map_err(AppError::Input)? else {
        return Ok(false);
    };
    let Some(message) = prompt(input, out, "Message").map_err(AppError::Input)? else {
        return Ok(false);
    };

    match page.submit(&author, &message) {
        Ok(submitted) => {
            if submitted.truncated {
                writeln!(out, "Note: text after '~' in your message will not be shown")
                    .map_err(AppError::Input)?;
            }
            show(out, &submitted.loaded, opts).map_err(AppError::Input)?;
        }
        // The form stays open so the visitor can correct the entry
        Err(AppError::Validation(e)) => writeln!(out, "! {e}").map_err(AppError::Input)?,
        Err(e) => return Err(e),
    }
    Ok(true)
}

pub(crate) fn run(
    page: &mut Page,
    mut input: impl BufRead,
    out: &mut impl Write,
    opts: RenderOptions,
) -> Result<(), AppError> {
    show(out, &page.load(), opts).map_err(AppError::Input)?;

    loop {
        let icon = page.form().icon().paint(opts.use_color);
        let Some(command) =
            prompt(&mut input, out, &format!("{icon} sign  [r] reload  [q] quit"))
                .map_err(AppError::Input)?
        else {
            return Ok(());
        };

        match command.trim() {
            "+" => {
                page.toggle_form();
                if page.form().is_visible() && !sign(page, &mut input, out, opts)? {
                    return Ok(());
                }
            }
            "s" if page.form().is_visible() => {
                if !sign(page, &mut input, out, opts)? {
                    return Ok(());
                }
            }
            "r" => show(out, &page.load(), opts).map_err(AppError::Input)?,
            "q" => return Ok(()),
            "" => {}
            other => writeln!(out, "Unknown command {other:?}").map_err(AppError::Input)?,
        }
    }
}
