//! Interactive conversation loop
//!
//! A thin host-application stand-in over the library: reads lines, sends
//! them through the session, prints the companion's reply, and exposes a
//! few slash commands for inspecting engine state.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::session::ConversationSession;

const HELP: &str = "Commands:
  /pattern      show the 30-day emotional pattern
  /dates        show upcoming significant dates
  /people       show who we've talked about
  /save <path>  save the transcript as JSON
  /help         show this help
  /quit         leave";

pub fn run(session: &mut ConversationSession) -> Result<()> {
    let companion = session.profile().companion_name.clone();
    println!(
        "{} {}",
        companion.cyan().bold(),
        "is here. Type /help for commands.".dimmed()
    );

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(&line)?;

                if let Some(command) = line.strip_prefix('/') {
                    if !handle_command(session, command) {
                        break;
                    }
                    continue;
                }

                let reply = session.send(&line);
                println!(
                    "\n{}: {}\n",
                    companion.cyan().bold(),
                    reply.text.white()
                );
                println!(
                    "{}",
                    format!(
                        "[{} @ {}/10]",
                        reply.reading.primary, reply.reading.intensity
                    )
                    .dimmed()
                );
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {}", "error:".red(), err);
                break;
            }
        }
    }

    println!("{}", "Take care of yourself.".dimmed());
    Ok(())
}

/// Returns false when the loop should exit
fn handle_command(session: &mut ConversationSession, command: &str) -> bool {
    let mut parts = command.splitn(2, ' ');
    match (parts.next().unwrap_or(""), parts.next()) {
        ("quit", _) | ("exit", _) => return false,
        ("help", _) => println!("{HELP}"),
        ("pattern", _) => {
            let pattern = session.engine().store().emotional_pattern();
            if pattern.is_empty() {
                println!("{}", "No emotional history in the last 30 days.".dimmed());
            }
            for (tag, stat) in pattern {
                println!(
                    "  {:<12} {} times, average intensity {:.1}",
                    tag.to_string(),
                    stat.count,
                    stat.average_intensity
                );
            }
        }
        ("dates", _) => {
            let upcoming = session.engine().store().upcoming_dates(30);
            if upcoming.is_empty() {
                println!("{}", "No significant dates in the next 30 days.".dimmed());
            }
            for entry in upcoming {
                println!("  {} - {} for {}", entry.date, entry.occasion, entry.person_name);
            }
        }
        ("people", _) => {
            for person in session.engine().store().people() {
                let relationship = person.relationship.as_deref().unwrap_or("unknown");
                println!(
                    "  {} ({relationship}), {} qualities, {} stories",
                    person.name,
                    person.qualities.len(),
                    person.anecdotes.len()
                );
            }
        }
        ("save", Some(path)) => match session.save_transcript(path.trim()) {
            Ok(()) => println!("Transcript saved to {path}"),
            Err(err) => eprintln!("{} {}", "error:".red(), err),
        },
        ("save", None) => eprintln!("{}", "usage: /save <path>".dimmed()),
        (other, _) => eprintln!("unknown command: /{other}"),
    }
    true
}
