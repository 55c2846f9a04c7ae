//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Show the guestbook (default)
    Show,
    /// Sign the guestbook and show it again
    Sign {
        /// Your name
        #[arg(short, long)]
        name: String,
        /// Your message
        #[arg(short, long)]
        message: String,
    },
    /// Open the guestbook interactively: (+) to sign, r to reload, q to quit
    Browse,
    /// Print the store fragment for an entry without sending it
    Encode {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        message: String,
    },
    /// Decode store text from a file (or stdin) and show it
    Decode {
        /// Store file; reads stdin when omitted
        path: Option<PathBuf>,
    },
}
