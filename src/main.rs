//! AI Roadmap - Entry Point
//!
//! Sets up logging and configuration, builds the curriculum registry,
//! and runs the terminal UI. Generation requests from the commit tool
//! run on a tokio runtime via block_on; everything else is synchronous.

use ai_roadmap::core::config::AppConfig;
use ai_roadmap::core::error::{Result, RoadmapError};
use ai_roadmap::curriculum::CurriculumRegistry;
use ai_roadmap::llm::{generate_commit_message, LlmClient};
use ai_roadmap::selection::SelectionController;
use ai_roadmap::ui::terminal::Tui;
use ai_roadmap::ui::{display, input, terminal, Action, App, Focus};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "ai-roadmap", about = "Interactive AI engineering learning roadmap")]
struct Args {
    /// Step to open at startup (1-10). Values that don't name a
    /// configured step land on step 1.
    #[arg(long)]
    step: Option<String>,

    /// Path to the configuration file
    #[arg(long, default_value = "roadmap.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ai_roadmap=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;

    // Async runtime for generation API calls
    let rt = Runtime::new()?;

    let llm_client = LlmClient::from_config(&config.llm).ok();
    if llm_client.is_none() {
        tracing::warn!("no API key configured - commit message generation disabled");
    }

    let registry = CurriculumRegistry::builtin();
    let controller = initial_controller(registry, args.step.as_deref(), config.start_step)?;

    let mut app = App::new(controller);
    terminal::install_panic_hook();
    let mut tui = terminal::setup()?;
    let result = run(&mut tui, &mut app, &rt, llm_client.as_ref());
    terminal::restore(&mut tui)?;
    result
}

/// Build the starting selection. A `--step` value that is not a number
/// or names no configured step is not fatal; it lands on step 1 with a
/// debug log. Without the flag, the config's `start_step` applies.
fn initial_controller(
    registry: CurriculumRegistry,
    step_arg: Option<&str>,
    config_step: Option<u32>,
) -> Result<SelectionController> {
    let requested = match step_arg {
        Some(raw) => match raw.parse::<u32>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::debug!("step '{}' is not a number; falling back to step 1", raw);
                return SelectionController::new(registry);
            }
        },
        None => config_step,
    };
    match requested {
        Some(id) => match SelectionController::starting_at(registry, id) {
            Ok(controller) => Ok(controller),
            Err(e) => {
                tracing::debug!("{}; falling back to step 1", e);
                SelectionController::new(registry)
            }
        },
        None => SelectionController::new(registry),
    }
}

fn run(tui: &mut Tui, app: &mut App, rt: &Runtime, client: Option<&LlmClient>) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| display::draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = input::map_key(key, app.focus) {
                apply(tui, app, rt, client, action)?;
            }
        }
    }
    Ok(())
}

fn apply(
    tui: &mut Tui,
    app: &mut App,
    rt: &Runtime,
    client: Option<&LlmClient>,
    action: Action,
) -> Result<()> {
    match action {
        Action::Quit => app.should_quit = true,
        Action::NextStep => {
            app.controller.next_step();
            app.clear_commit_results();
        }
        Action::PrevStep => {
            app.controller.prev_step();
            app.clear_commit_results();
        }
        Action::NextSkill => {
            app.controller.next_skill();
            app.clear_commit_results();
        }
        Action::PrevSkill => {
            app.controller.prev_skill();
            app.clear_commit_results();
        }
        Action::GotoStep(id) => match app.controller.select_step(id) {
            Ok(()) => app.clear_commit_results(),
            Err(e) => tracing::debug!("{}", e),
        },
        Action::CycleFocus => {
            app.focus = match app.focus {
                Focus::Steps => Focus::Skills,
                Focus::Skills if app.interactive_tool().is_some() => Focus::CommitInput,
                Focus::Skills => Focus::Steps,
                Focus::CommitInput => Focus::Steps,
            };
        }
        Action::Input(c) => app.commit_input.push(c),
        Action::Backspace => {
            app.commit_input.pop();
        }
        Action::LeaveInput => app.focus = Focus::Skills,
        Action::Submit => {
            if let Some(description) = app.begin_generation() {
                match client {
                    Some(client) => {
                        // Show the busy state before blocking on the call.
                        tui.draw(|frame| display::draw(frame, app))?;
                        let outcome = rt
                            .block_on(generate_commit_message(client, &description))
                            .map_err(|e| match e {
                                RoadmapError::Generation(msg) => msg,
                                other => other.to_string(),
                            });
                        app.finish_generation(outcome);
                    }
                    None => app.finish_generation(Err(
                        "No API key configured; set LLM_API_KEY to enable generation.".into(),
                    )),
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_step_flag_is_honored() {
        let c = initial_controller(CurriculumRegistry::builtin(), Some("9"), None).unwrap();
        assert_eq!(c.current(), (9, "Guardrails"));
    }

    #[test]
    fn test_unparseable_step_flag_lands_on_step_one() {
        // The flag overrides the config even when it is garbage.
        let c = initial_controller(CurriculumRegistry::builtin(), Some("abc"), Some(5)).unwrap();
        assert_eq!(c.current().0, 1);
    }

    #[test]
    fn test_out_of_range_step_flag_lands_on_step_one() {
        let c = initial_controller(CurriculumRegistry::builtin(), Some("99"), None).unwrap();
        assert_eq!(c.current().0, 1);
    }

    #[test]
    fn test_config_start_step_applies_without_flag() {
        let c = initial_controller(CurriculumRegistry::builtin(), None, Some(3)).unwrap();
        assert_eq!(c.current().0, 3);
    }
}
