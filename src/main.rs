use std::io;

use anyhow::Result;
use clap::Parser;

use draft_anchor::anchor::AnchorError;
use draft_anchor::cli::{run_once, CliArgs, CliCommand};
use draft_anchor::config::DraftConfig;
use draft_anchor::output::Printer;
use draft_anchor::session::Session;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    draft_anchor::tracing::init();

    let config = DraftConfig::load();
    let format = args.format.unwrap_or(config.format);
    tracing::debug!(?args, ?config, "starting");

    if args.command == CliCommand::InitConfig {
        let config = DraftConfig { format, ..config };
        let path = config.save().map_err(anyhow::Error::msg)?;
        let mut printer = Printer::new(io::stdout().lock(), format);
        printer.text(&path.display().to_string())?;
        return Ok(());
    }

    if args.command == CliCommand::Session {
        let mut session = Session::new(&config, format, io::stdout().lock());
        return session.run(io::stdin().lock());
    }

    let text = args.read_text()?;
    let mut printer = Printer::new(io::stdout().lock(), format);
    if let Err(e) = run_once(&args.command, &text, &mut printer) {
        // Anchor failures are expected user errors; report them in the chosen format
        if let Some(anchor_error) = e.downcast_ref::<AnchorError>() {
            printer.error(&anchor_error.user_message())?;
            std::process::exit(1);
        }
        return Err(e);
    }
    Ok(())
}
