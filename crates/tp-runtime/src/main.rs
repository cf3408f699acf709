//! # Runtime Binary
//!
//! `tp-runtime suggest` runs one lookup against the suggestion service.
//! `tp-runtime form` drives the cascading address form from stdin.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use shared_types::validate_address;
use tp_01_address_suggest::{DaDataClient, DetailLevel, SuggestQuery, SuggestionApi};
use tp_02_address_resolver::{AddressFormApi, CascadingResolver};
use tp_runtime::cli::{resolver_config, Cli, Command};
use tp_runtime::commands::{FormCommand, HELP};
use tp_runtime::{logging, TerminalSurface};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let cli = Cli::parse();
    let client = DaDataClient::new(&cli.suggest_config()).context("building suggestion client")?;
    info!("[tp-runtime] Suggestion endpoint: {}", client.endpoint());

    match cli.command {
        Command::Suggest {
            level,
            count,
            json,
            query,
        } => run_suggest(&client, level.into(), count, json, &query).await,
        Command::Form {
            min_chars,
            max_candidates,
        } => run_form(client, min_chars, max_candidates).await,
    }
}

async fn run_suggest(
    client: &DaDataClient,
    level: DetailLevel,
    count: Option<usize>,
    json: bool,
    text: &str,
) -> Result<()> {
    let mut query = SuggestQuery::new(text.trim()).with_level(level);
    if let Some(count) = count {
        query = query.with_count(count);
    }

    let candidates = client.suggest(query).await.context("suggestion request failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else if candidates.is_empty() {
        println!("no {} candidates for '{}'", level, text);
    } else {
        for (i, candidate) in candidates.iter().enumerate() {
            println!("{:>2}. {}", i + 1, candidate.value);
        }
    }
    Ok(())
}

async fn run_form(
    client: DaDataClient,
    min_chars: Option<usize>,
    max_candidates: Option<usize>,
) -> Result<()> {
    let config = resolver_config(min_chars, max_candidates);
    let mut form = CascadingResolver::new(Arc::new(client), TerminalSurface::stdout(), config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match line.parse::<FormCommand>() {
                    Ok(FormCommand::Quit) => break,
                    Ok(command) => execute(&mut form, command),
                    Err(e) => println!("{}", e),
                }
            }
            outcome = form.recv_outcome(), if form.pending_fetches() > 0 => {
                if let Some(outcome) = outcome {
                    form.apply_outcome(outcome);
                }
            }
        }
    }

    Ok(())
}

fn execute<F: AddressFormApi>(form: &mut F, command: FormCommand) {
    match command {
        FormCommand::Edit { field, text } => {
            form.text_changed(field, &text);
        }
        FormCommand::Pick { field, index } => {
            if let Err(e) = form.candidate_chosen(field, index) {
                println!("{}", e);
            } else {
                println!("{}", form.full_address_label());
            }
        }
        FormCommand::Building(text) => form.set_building(&text),
        FormCommand::Apartment(text) => form.set_apartment(&text),
        FormCommand::Show => println!("{}", form.full_address_label()),
        FormCommand::Finalize => finalize(form),
        FormCommand::Fields => match serde_json::to_string_pretty(&form.address_fields().to_map()) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("[tp-runtime] Cannot encode fields: {}", e),
        },
        FormCommand::Reset => form.reset(),
        FormCommand::Help => println!("{}", HELP),
        FormCommand::Quit | FormCommand::Nothing => {}
    }
}

fn finalize<F: AddressFormApi>(form: &F) {
    let full_address = form.compose_full_address();
    let address = form.address_fields().into_address();
    let result = validate_address(&address);

    println!("{}", if full_address.is_empty() { "-" } else { full_address.as_str() });
    for err in &result.errors {
        println!("error: {}", err);
    }
    for warning in &result.warnings {
        println!("warning: {}", warning);
    }
}
