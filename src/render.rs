//! Output rendering for the chat and dashboard binaries.
//!
//! Rendering is deliberately dumb: it consumes the transcript, the stats
//! snapshot, and the feedback records, and produces text. Nothing here
//! feeds data back into the session controller.

use std::io::{self, Stdout, Write};

use crate::types::{
    DashboardReport, FeedbackState, Message, MessageOrigin, Rating, StatsSnapshot, Theme,
};

/// ANSI escape code for cyan text (user messages in the dark theme).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for magenta text (agent messages in the dark theme).
const ANSI_MAGENTA: &str = "\x1b[35m";

/// ANSI escape code for blue text (user messages in the light theme).
const ANSI_BLUE: &str = "\x1b[34m";

/// ANSI escape code for green text (status lines, thumbs-up markers).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (errors, offline status, thumbs-down).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for dim text (timestamps, secondary detail).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Width of the bars in the dashboard's text charts.
const BAR_WIDTH: usize = 40;

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies: plain text
/// with ANSI styling, unstyled text for piping, or a TUI.
pub trait Renderer: Send {
    /// Print one transcript message.
    fn print_message(&mut self, message: &Message, feedback: Option<&FeedbackState>);

    /// Print the typing indicator shown while a submission is pending.
    fn print_typing(&mut self);

    /// Print the stats header line.
    fn print_stats(&mut self, stats: &StatsSnapshot);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    theme: Theme,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with the specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            theme: Theme::default(),
        }
    }

    /// Sets the theme the renderer styles for.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn origin_color(&self, origin: MessageOrigin) -> &'static str {
        match (self.theme, origin) {
            (Theme::Dark, MessageOrigin::User) => ANSI_CYAN,
            (Theme::Dark, MessageOrigin::Agent) => ANSI_MAGENTA,
            (Theme::Light, MessageOrigin::User) => ANSI_BLUE,
            (Theme::Light, MessageOrigin::Agent) => ANSI_MAGENTA,
        }
    }

    fn feedback_marker(feedback: Option<&FeedbackState>) -> &'static str {
        match feedback {
            Some(FeedbackState {
                rating: Some(Rating::Up),
                sent: true,
                ..
            }) => " [+1]",
            Some(FeedbackState {
                rating: Some(Rating::Down),
                sent: true,
                ..
            }) => " [-1]",
            Some(FeedbackState {
                rating: Some(_),
                sent: false,
                ..
            }) => " [rating not yet sent]",
            _ => "",
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_message(&mut self, message: &Message, feedback: Option<&FeedbackState>) {
        let label = match message.origin {
            MessageOrigin::User => "You",
            MessageOrigin::Agent => "Agent",
        };
        let marker = Self::feedback_marker(feedback);
        if self.use_color {
            let color = self.origin_color(message.origin);
            println!(
                "{ANSI_DIM}{}{ANSI_RESET} {color}{label}:{ANSI_RESET} {}{ANSI_DIM}{marker}{ANSI_RESET}",
                message.clock_time(),
                message.text,
            );
        } else {
            println!("{} {label}: {}{marker}", message.clock_time(), message.text);
        }
        self.flush();
    }

    fn print_typing(&mut self) {
        if self.use_color {
            println!("{ANSI_DIM}Agent is typing...{ANSI_RESET}");
        } else {
            println!("Agent is typing...");
        }
        self.flush();
    }

    fn print_stats(&mut self, stats: &StatsSnapshot) {
        let status = if stats.online { "ONLINE" } else { "OFFLINE" };
        let line = format!(
            "[{status}] queries today: {} | avg response: {:.1}s",
            stats.queries_today,
            stats.avg_response_time_ms / 1000.0,
        );
        if self.use_color {
            let color = if stats.online { ANSI_GREEN } else { ANSI_RED };
            println!("{color}{line}{ANSI_RESET}");
        } else {
            println!("{line}");
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}error: {error}{ANSI_RESET}");
        } else {
            eprintln!("error: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
        self.flush();
    }
}

/// Formats a dashboard report as an aligned text document.
///
/// The browser dashboard draws these sections as charts; the terminal
/// renders the same numbers as bars and tables.
pub fn render_dashboard(report: &DashboardReport, use_color: bool) -> String {
    let mut out = String::new();
    let dim = if use_color { ANSI_DIM } else { "" };
    let reset = if use_color { ANSI_RESET } else { "" };

    out.push_str("SUPPORT AGENT ANALYTICS\n");
    out.push_str("=======================\n\n");

    out.push_str(&format!("Total queries:     {}\n", report.total_queries));
    out.push_str(&format!(
        "Avg response time: {:.1} ms (min {:.0}, max {:.0})\n",
        report.response_time.average_ms, report.response_time.min_ms, report.response_time.max_ms,
    ));
    let fb = &report.feedback_stats;
    out.push_str(&format!(
        "Feedback:          +{} / -{} ({:.1}% positive, {:.1}% of conversations rated)\n\n",
        fb.thumbs_up, fb.thumbs_down, fb.thumbs_up_percent, fb.feedback_rate,
    ));

    out.push_str("Queries per day\n---------------\n");
    render_series(&mut out, &report.queries_by_date);
    out.push('\n');

    out.push_str("Top intents\n-----------\n");
    render_series(&mut out, &report.top_intents);
    out.push('\n');

    if !report.top_questions.is_empty() {
        out.push_str("Most asked questions\n--------------------\n");
        for q in &report.top_questions {
            out.push_str(&format!("{:>5}  {}\n", q.count, q.question));
        }
        out.push('\n');
    }

    if !report.recent_conversations.is_empty() {
        out.push_str("Recent conversations\n--------------------\n");
        for record in &report.recent_conversations {
            let rating = match record.rating {
                Some(Rating::Up) => " [+1]",
                Some(Rating::Down) => " [-1]",
                None => "",
            };
            out.push_str(&format!(
                "{dim}{}{reset} #{} {}{rating}\n",
                record.created_at, record.id, record.user_message,
            ));
        }
    }

    out
}

fn render_series(out: &mut String, series: &crate::types::ChartSeries) {
    if series.data.is_empty() {
        out.push_str("(no data)\n");
        return;
    }
    let max = series.max_value().max(1.0);
    for (label, value) in series.points() {
        let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
        let bar = "#".repeat(filled);
        out.push_str(&format!("{label:>12}  {bar:<width$}  {value:.0}\n", width = BAR_WIDTH));
    }
}
