//! Handle the `chat` command: a line-oriented conversation loop.
//!
//! Conversation history is owned entirely by this loop; the QA service
//! underneath sees one independent (text, domain) pair per turn.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use console::style;

use crate::cli::{is_greeting, service};
use crate::domain::models::Domain;

/// One transcript entry.
struct Turn {
    role: &'static str,
    content: String,
}

/// Run an interactive chat session on stdin/stdout.
pub async fn execute(domain: Domain, config_path: Option<&Path>, _json: bool) -> Result<()> {
    let config = service::load_config(config_path)?;
    let qa = service::build_qa_service(&config)?;

    let mut domain = domain;
    let mut transcript: Vec<Turn> = Vec::new();

    println!(
        "{} (domain: {domain}, /help for commands)",
        style("Agri-Med chat").bold()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "{} ", style(format!("[{domain}]>")).cyan())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            match handle_command(command, &mut domain, &transcript)? {
                LoopAction::Continue => continue,
                LoopAction::Quit => break,
            }
        }

        let response = if is_greeting(input, &qa.responses().greetings) {
            qa.responses().greeting_reply.clone()
        } else {
            match qa.answer_query(input, domain).await {
                Ok(response) => response,
                Err(err) => {
                    // Per-query failure: tell the user, keep serving.
                    tracing::error!(%err, "query failed");
                    eprintln!("{}", style(format!("Error: {err}")).red());
                    continue;
                }
            }
        };

        println!("{response}\n");
        transcript.push(Turn {
            role: "USER",
            content: input.to_string(),
        });
        transcript.push(Turn {
            role: "AI",
            content: response,
        });
    }

    println!("Goodbye.");
    Ok(())
}

enum LoopAction {
    Continue,
    Quit,
}

fn handle_command(
    command: &str,
    domain: &mut Domain,
    transcript: &[Turn],
) -> Result<LoopAction> {
    let mut parts = command.splitn(2, ' ');
    match (parts.next().unwrap_or(""), parts.next()) {
        ("quit" | "exit", _) => Ok(LoopAction::Quit),
        ("help", _) => {
            println!("/domain <medical|agricultural>  switch domain");
            println!("/save <path>                    export transcript");
            println!("/quit                           leave the chat");
            Ok(LoopAction::Continue)
        }
        ("domain", Some(name)) => {
            match name.trim().parse::<Domain>() {
                Ok(parsed) => {
                    *domain = parsed;
                    println!("Switched to {domain}.");
                }
                Err(err) => println!("{err}"),
            }
            Ok(LoopAction::Continue)
        }
        ("save", Some(path)) => {
            let path = path.trim();
            match std::fs::write(path, render_transcript(transcript)) {
                Ok(()) => println!("Transcript saved to {path}."),
                Err(err) => println!("Could not save transcript to {path}: {err}"),
            }
            Ok(LoopAction::Continue)
        }
        (other, _) => {
            println!("Unknown command: /{other} (try /help)");
            Ok(LoopAction::Continue)
        }
    }
}

fn render_transcript(transcript: &[Turn]) -> String {
    let mut text = String::from("Agri-Med Chatbot - Conversation Log\n");
    text.push_str(&format!(
        "Date: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    text.push_str(&"=".repeat(40));
    text.push_str("\n\n");

    for turn in transcript {
        text.push_str(&format!("{}: {}\n\n", turn.role, turn.content));
    }

    text
}
