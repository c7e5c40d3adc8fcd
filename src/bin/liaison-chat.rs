//! Interactive chat application for talking to a support backend.
//!
//! This binary provides a REPL interface over the chat-session protocol:
//! messages are submitted to the backend, replies are appended to the
//! transcript, and agent replies can be rated with `/up` and `/down`.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage against http://localhost:5000/
//! liaison-chat
//!
//! # Point at a different backend
//! liaison-chat --base-url https://support.example.com/
//!
//! # Disable colors (useful for piping output)
//! liaison-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/up`, `/down` - Rate the most recent agent reply
//! - `/clear` - Clear the transcript
//! - `/theme [light|dark]` - Switch or toggle the theme
//! - `/stats` - Show backend status and session counters
//! - `/dashboard` - Fetch and render the analytics report
//! - `/quit` - Exit the application

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use liaison::chat::{ChatArgs, ChatCommand, ChatConfig, DEFAULT_GREETING, help_text, parse_command};
use liaison::{
    FeedbackOutcome, PlainTextRenderer, Rating, Renderer, Session, StatsPoller, SupportClient,
    ThemeStore, Transport, render_dashboard,
};

/// Main entry point for the liaison-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("liaison-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let theme_store = ThemeStore::new(ChatConfig::theme_path());
    let mut theme = config
        .theme
        .unwrap_or_else(|| theme_store.load_or_default());

    let client = Arc::new(SupportClient::new(&config.base_url)?);
    let poller = StatsPoller::spawn(Arc::clone(&client), config.stats_interval);
    let mut session = Session::new(Arc::clone(&client));
    let mut renderer = PlainTextRenderer::with_color(use_color).with_theme(theme);
    let mut rl = DefaultEditor::new()?;

    // Flag for interrupt handling; rustyline surfaces Ctrl+C at the prompt
    // itself, this covers Ctrl+C while a request is in flight.
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    println!("Liaison Chat ({})", client.base_url());
    println!("Type /help for commands, /quit to exit\n");

    if config.greeting {
        session.push_greeting(DEFAULT_GREETING);
        if let Some(greeting) = session.transcript().last() {
            renderer.print_message(greeting, None);
        }
    }

    loop {
        // Reset interrupt flag before each input
        interrupted.store(false, Ordering::Relaxed);

        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Feedback(rating) => {
                            rate_last_reply(&mut session, &mut renderer, rating).await;
                        }
                        ChatCommand::Theme(choice) => {
                            theme = choice.unwrap_or_else(|| theme.toggled());
                            if let Err(err) = theme_store.save(theme) {
                                renderer
                                    .print_error(&format!("Failed to persist theme: {}", err));
                            }
                            renderer = PlainTextRenderer::with_color(use_color).with_theme(theme);
                            renderer.print_info(&format!("Theme set to {}", theme));
                        }
                        ChatCommand::SaveTranscript(path) => {
                            match session.save_transcript(&path) {
                                Ok(_) => {
                                    renderer.print_info(&format!("Transcript saved to {}", path))
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to save transcript: {}", err)),
                            }
                        }
                        ChatCommand::LoadTranscript(path) => {
                            match session.load_transcript(&path) {
                                Ok(_) => {
                                    renderer.print_info(&format!(
                                        "Transcript loaded from {} ({} messages)",
                                        path,
                                        session.message_count()
                                    ));
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to load transcript: {}", err)),
                            }
                        }
                        ChatCommand::Stats => {
                            renderer.print_stats(&poller.latest());
                            print_session_counters(&session);
                        }
                        ChatCommand::Dashboard => match client.dashboard().await {
                            Ok(report) => print!("{}", render_dashboard(&report, use_color)),
                            Err(err) => renderer
                                .print_error(&format!("Failed to fetch dashboard: {}", err)),
                        },
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - submit to the backend
                renderer.print_typing();
                session.submit_message(line).await;
                if interrupted.swap(false, Ordering::Relaxed) {
                    renderer.print_info("Interrupt received; the reply below still completed.");
                }
                if let Some(reply) = session.transcript().last() {
                    let feedback = reply
                        .conversation_id
                        .and_then(|id| session.feedback_for(id));
                    renderer.print_message(reply, feedback);
                }
                if let Some(path) = config.transcript_path.as_deref() {
                    if let Err(err) = session.save_transcript(path) {
                        renderer.print_error(&format!("Failed to save transcript: {}", err));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    poller.shutdown().await;
    Ok(())
}

async fn rate_last_reply<T: Transport>(
    session: &mut Session<T>,
    renderer: &mut PlainTextRenderer,
    rating: Rating,
) {
    let Some(conversation_id) = session.last_conversation_id() else {
        renderer.print_error("No agent reply to rate yet.");
        return;
    };
    match session.submit_feedback(conversation_id, rating).await {
        FeedbackOutcome::Sent => {
            renderer.print_info(&format!("Feedback recorded: {}", rating));
        }
        FeedbackOutcome::Ignored => {
            renderer.print_info("This reply has already been rated.");
        }
        FeedbackOutcome::Failed => {
            renderer.print_error("Failed to send feedback; it was kept locally.");
        }
    }
}

fn print_session_counters<T: Transport>(session: &Session<T>) {
    println!("    Session:");
    println!("      Messages: {}", session.message_count());
    match session.last_conversation_id() {
        Some(id) => println!("      Last conversation: #{}", id),
        None => println!("      Last conversation: (none)"),
    }
}
