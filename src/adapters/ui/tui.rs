//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> symptom check (category filter, multi-select, spinner,
//! report) or chat (prompt loop with live streamed replies).

use crate::adapters::ui::report;
use crate::domain::{catalog, DomainError, Role, Symptom, SymptomSeverity};
use crate::ports::InputPort;
use crate::usecases::{ChatService, TriageService};
use async_trait::async_trait;
use indicatif::ProgressBar;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, MultiSelect, Select, Text};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const MENU_CHECK: &str = "Check my symptoms";
const MENU_CHAT: &str = "Chat with MediHelp AI";
const MENU_QUIT: &str = "Quit";

const RESULT_AGAIN: &str = "Check different symptoms";
const RESULT_MENU: &str = "Back to menu";

const ALL_CATEGORIES: &str = "All categories";

fn severity_indicator(severity: SymptomSeverity) -> &'static str {
    match severity {
        SymptomSeverity::Mild => "mild",
        SymptomSeverity::Moderate => "moderate",
        SymptomSeverity::Severe => "severe",
    }
}

fn symptom_option(symptom: &Symptom) -> String {
    format!(
        "{} {} [{}]",
        symptom.icon,
        symptom.name,
        severity_indicator(symptom.severity)
    )
}

/// True when the user backed out of a prompt (Esc / Ctrl-C).
fn cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Applies the teal theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let mut render_config = RenderConfig::default_colored();
    render_config.prompt_prefix = Styled::new("✚").with_fg(Color::LightGreen);
    render_config.highlighted_option_prefix = Styled::new("›").with_fg(Color::LightGreen);
    render_config.selected_checkbox = Styled::new("[x]").with_fg(Color::LightGreen);
    inquire::set_global_render_config(render_config);
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    triage: Arc<TriageService>,
    chat: Arc<ChatService>,
    /// Pause shown behind the analysis spinner before results appear.
    analysis_delay: Duration,
}

impl TuiInputPort {
    pub fn new(
        triage: Arc<TriageService>,
        chat: Arc<ChatService>,
        analysis_delay: Duration,
    ) -> Self {
        Self {
            triage,
            chat,
            analysis_delay,
        }
    }

    async fn run_symptom_check(&self) -> Result<(), DomainError> {
        loop {
            let mut category_options = vec![ALL_CATEGORIES];
            category_options.extend_from_slice(catalog::CATEGORIES);
            let category = match Select::new("Filter by category:", category_options).prompt() {
                Ok(c) => c,
                Err(e) if cancelled(&e) => return Ok(()),
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            let pool: Vec<&'static Symptom> = if category == ALL_CATEGORIES {
                catalog::SYMPTOMS.iter().collect()
            } else {
                catalog::by_category(category)
            };

            let options: Vec<String> = pool.iter().map(|s| symptom_option(s)).collect();
            let selected = match MultiSelect::new("Select your symptoms:", options).prompt() {
                Ok(s) => s,
                Err(e) if cancelled(&e) => return Ok(()),
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            if selected.is_empty() {
                println!("Select at least one symptom to get an assessment.");
                continue;
            }

            // Map selected display strings back to symptom ids (match full option string)
            let ids: Vec<&str> = pool
                .iter()
                .filter(|s| selected.contains(&symptom_option(s)))
                .map(|s| s.id)
                .collect();

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing your symptoms...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            tokio::time::sleep(self.analysis_delay).await;
            let assessment = self.triage.analyze(&ids);
            spinner.finish_and_clear();

            report::render(&assessment);

            let next = match Select::new("Next:", vec![RESULT_AGAIN, RESULT_MENU]).prompt() {
                Ok(n) => n,
                Err(e) if cancelled(&e) => return Ok(()),
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };
            if next == RESULT_MENU {
                return Ok(());
            }
        }
    }

    async fn run_chat(&self) -> Result<(), DomainError> {
        // Replay the transcript so far (the greeting on first entry).
        for message in self.chat.transcript().await {
            match message.role {
                Role::User => println!("You: {}\n", message.content),
                Role::Assistant => println!("MediHelp AI: {}\n", message.content),
            }
        }
        println!("(Esc returns to the menu. Not a substitute for professional medical advice.)\n");

        loop {
            let line = match Text::new("You:").prompt() {
                Ok(l) => l,
                Err(e) if cancelled(&e) => return Ok(()),
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };
            if line.trim().is_empty() {
                continue;
            }

            print!("MediHelp AI: ");
            let _ = std::io::stdout().flush();

            let mut streamed = String::new();
            let reply = self
                .chat
                .send(&line, &mut |delta| {
                    streamed.push_str(delta);
                    print!("{}", delta);
                    let _ = std::io::stdout().flush();
                })
                .await;
            println!();

            if let Some(message) = reply {
                // Anything not already shown live (the apology after a
                // failed stream) is printed as its own turn.
                if message.content != streamed {
                    println!("MediHelp AI: {}", message.content);
                }
            }
            println!();
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice =
                match Select::new("What would you like to do?", vec![MENU_CHECK, MENU_CHAT, MENU_QUIT])
                    .prompt()
                {
                    Ok(c) => c,
                    Err(e) if cancelled(&e) => return Ok(()),
                    Err(e) => return Err(DomainError::Input(e.to_string())),
                };

            match choice {
                MENU_CHECK => self.run_symptom_check().await?,
                MENU_CHAT => self.run_chat().await?,
                _ => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_option_round_trip() {
        // The multi-select maps display strings back to ids by exact match,
        // so every option string must be unique.
        let mut options: Vec<String> = catalog::SYMPTOMS.iter().map(symptom_option).collect();
        options.sort();
        options.dedup();
        assert_eq!(options.len(), catalog::SYMPTOMS.len());
    }
}
