//! Case Analysis: a line-driven front end for the deduction engine
//!
//! Usage: `case-analysis <catalogue.toml>`, then type commands on stdin.

use anyhow::{bail, Context};
use case_analysis::game::{FlagLedger, ToggleOutcome, TierResolution};
use case_analysis::{CaseCatalog, CaseSession, Severity};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  focus <id>            focus a suspect (clears the clue pool)
  lineup <id> [id...]   set today's lineup
  add <link> <label>    add a clue, link is `clue_id|true` or `clue_id|false`
  remove <clue_id>      remove a clue
  clear                 empty the clue pool
  suspects              list today's lineup
  analyze               score the pool
  pick <key> / drop <key>
  finalize              commit the chosen questions
  status | save | help | quit";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("case_analysis=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        bail!("usage: case-analysis <catalogue.toml>");
    };
    let catalog = CaseCatalog::load(&path)
        .with_context(|| format!("loading catalogue {}", path.display()))?;

    let mut session = CaseSession::from_catalog(catalog, FlagLedger::new());
    session.subscribe_focus(|suspect| {
        println!("▶ {}: {}", suspect.display_name(), suspect.profile.profile_text);
    });
    // The lineup was focused before anyone subscribed
    if let Some(id) = session.lineup().focused_id().map(String::from) {
        session.set_focused(&id);
    }

    println!("Case Analysis v{}", case_analysis::VERSION);
    let stdin = io::stdin();
    let mut out = io::stdout();
    write!(out, "> ")?;
    out.flush()?;
    let mut shown = session.messages().len();

    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        };
        let rest: Vec<&str> = words.collect();

        match (cmd, rest.as_slice()) {
            ("focus", [id]) => {
                if !session.set_focused(id) {
                    println!("No suspect {}", id);
                }
            }
            ("lineup", ids) if !ids.is_empty() => session.setup_lineup(ids),
            ("add", [link, label @ ..]) => {
                let label = if label.is_empty() {
                    link.to_string()
                } else {
                    label.join(" ")
                };
                if !session.add_clue_from_link(link, &label) {
                    println!("Already in the pool.");
                }
            }
            ("remove", [id]) => {
                session.remove_clue(id);
            }
            ("clear", []) => session.clear_clues(),
            ("suspects", []) => {
                let focused = session.lineup().focused_id();
                for suspect in session.lineup().daily_active_suspects(session.registry()) {
                    let marker = if Some(suspect.id()) == focused { "*" } else { " " };
                    println!("{} {} ({})", marker, suspect.display_name(), suspect.id());
                }
            }
            ("analyze", []) => match session.analyze() {
                None => println!("Nothing to analyse."),
                Some(outcome) => {
                    println!(
                        "{}/{} {}",
                        outcome.score,
                        outcome.total,
                        outcome.classification.description()
                    );
                    match &outcome.resolution {
                        TierResolution::Matched { tier, .. } => {
                            for q in &tier.questions {
                                println!("  [{}] {}", q.variable_key, q.display_text);
                            }
                        }
                        TierResolution::Mismatch(reason) => {
                            println!("No questions come to mind ({:?}).", reason)
                        }
                    }
                }
            },
            ("pick", [key]) | ("drop", [key]) => {
                match session.toggle(key, cmd == "pick") {
                    ToggleOutcome::CapExceeded => {
                        println!("Selection full ({} max).", case_analysis::MAX_SELECTION)
                    }
                    ToggleOutcome::NotOpen => println!("No questions to pick from."),
                    ToggleOutcome::UnknownQuestion => println!("No such question."),
                    _ => {}
                }
            }
            ("finalize", []) => match session.finalize() {
                Some(keys) => println!("Questions set: {}", keys.join(", ")),
                None => println!("No questions to commit."),
            },
            ("status", []) => println!("{}", session.check_status()),
            ("save", []) => {
                for record in session.export_state() {
                    println!(
                        "{} discovered={} interrogated={}",
                        record.id, record.is_discovered, record.is_interrogated
                    );
                }
            }
            ("help", _) => println!("{}", HELP),
            ("quit", _) | ("exit", _) => break,
            _ => println!("Unknown command. Type `help`."),
        }

        for message in &session.messages()[shown..] {
            if message.severity != Severity::Info {
                println!("{} {}", message.severity.symbol(), message.message);
            }
        }
        shown = session.messages().len();

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}
