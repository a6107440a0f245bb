//! Coach command handler
//!
//! Interactive chat with the career coach. Conversation history is kept for
//! the session and replayed with every request so the coach keeps context.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use careerpilot_client::CopilotClient;
use careerpilot_core::dto::request::{ChatTurn, CoachRequest};
use clap::Args;
use colored::*;

use crate::config::Config;

/// Arguments for the coach command
#[derive(Args)]
pub struct CoachArgs {
    /// Resume text file to ground the coach's answers in
    #[arg(long)]
    resume_text: Option<PathBuf>,

    /// Ask a single question instead of starting a session
    #[arg(long)]
    message: Option<String>,
}

/// Handle the coach command
pub async fn handle_coach(args: CoachArgs, config: &Config) -> Result<()> {
    let client = CopilotClient::with_timeout(&config.api_url, config.timeout)?;

    let resume_context = match &args.resume_text {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume text from {}", path.display()))?,
        None => String::new(),
    };

    if let Some(message) = &args.message {
        let reply = client
            .coach(CoachRequest::new(message, Vec::new(), &resume_context))
            .await?;
        println!("{}", reply.message());
        return Ok(());
    }

    println!("{}", "Career coach session. Type 'exit' to leave.".bold());
    let mut history: Vec<ChatTurn> = Vec::new();
    let stdin = io::stdin();

    loop {
        print!("{} ", "You:".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF ends the session.
            break;
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let request = CoachRequest::new(message, history.clone(), &resume_context);
        match client.coach(request).await {
            Ok(reply) => {
                println!("{} {}", "Coach:".cyan().bold(), reply.message());
                history.push(ChatTurn::user(message));
                history.push(ChatTurn::assistant(reply.message()));
            }
            Err(e) => println!("{} {}", "✗".red(), e.to_string().red()),
        }
    }

    Ok(())
}
