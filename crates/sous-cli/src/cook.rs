//! Interactive cooking loop on the terminal.
//!
//! One-second clock ticks and heard commands are multiplexed with
//! `tokio::select!`, so the timer keeps counting while the cook reads.
//! Commands come from a [`Recognizer`] polled on its own thread; on the
//! terminal that recognizer is standard input, one line per utterance.

use std::{
    io::{BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::Result;
use log::debug;
use sous_core::{
    display::Countdown,
    error::Result as CoreResult,
    narration::Speaker,
    voice::{parse_command, Recognizer},
    CookingGuide, GuideCommand, GuideSettings, Recipe, SessionEvent, SousError,
};
use tokio::{
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
- `n` next step, `p` previous step, `g N` go to step N
- `t [seconds]` start timer, `x` pause or resume, `r [seconds]` reset timer
- `a` read the step again, `s` status
- `c [1-5]` finish cooking with an optional rating, `q` quit
- anything else is understood as a voice command (다음, 이전, 타이머 시작, 완료 ...)
";

/// How a cooking run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookOutcome {
    Completed { rating: Option<u8> },
    Stopped,
}

/// Prints spoken lines to standard output.
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn speak(&mut self, text: &str) -> CoreResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "🔊 {text}")
            .and_then(|()| stdout.flush())
            .map_err(|e| SousError::Voice {
                message: e.to_string(),
            })
    }
}

/// Hears typed lines on standard input. End of input is reported as an
/// error so the listener stops.
pub struct StdinRecognizer;

impl Recognizer for StdinRecognizer {
    fn recognize(&mut self) -> CoreResult<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SousError::Voice {
                message: e.to_string(),
            })?;
        if read == 0 {
            return Err(SousError::Voice {
                message: "input closed".to_string(),
            });
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Polls `recognizer` on a detached thread and forwards every utterance.
///
/// The channel closes once the recognizer fails. The thread is not owned by
/// the runtime, so a blocked read cannot hold up shutdown.
fn listen<R>(mut recognizer: R) -> mpsc::Receiver<String>
where
    R: Recognizer + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(16);
    thread::spawn(move || loop {
        match recognizer.recognize() {
            Ok(Some(utterance)) => {
                if sender.blocking_send(utterance).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                debug!("listener stopped: {e}");
                break;
            }
        }
    });
    receiver
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Command(GuideCommand),
    Finish(Option<u8>),
    Status,
    Help,
    Quit,
    Unknown,
}

fn parse_seconds(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|value| value.parse().ok())
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    let arg = words.next();

    match head {
        "" | "s" => Input::Status,
        "h" | "?" | "help" => Input::Help,
        "q" | "quit" => Input::Quit,
        "n" => Input::Command(GuideCommand::Next),
        "p" => Input::Command(GuideCommand::Previous),
        "g" => match arg.and_then(|n| n.parse::<i64>().ok()) {
            Some(number) => Input::Command(GuideCommand::GoTo(number.saturating_sub(1))),
            None => Input::Unknown,
        },
        "t" => Input::Command(GuideCommand::StartTimer(parse_seconds(arg))),
        "x" => Input::Command(GuideCommand::ToggleTimer),
        "r" => Input::Command(GuideCommand::ResetTimer(parse_seconds(arg))),
        "a" => Input::Command(GuideCommand::Repeat),
        "c" => Input::Finish(arg.and_then(|rating| rating.parse().ok())),
        _ => match parse_command(line) {
            Some(GuideCommand::Complete) => Input::Finish(None),
            Some(command) => Input::Command(command),
            None => Input::Unknown,
        },
    }
}

/// Guides `recipe` on the terminal until it is completed or the cook quits.
///
/// # Errors
///
/// Returns `SousError::InvalidRecipe` (wrapped) when the recipe has no
/// steps.
pub async fn run<S, R>(
    recipe: Recipe,
    settings: GuideSettings,
    speaker: S,
    recognizer: R,
    renderer: &TerminalRenderer,
) -> Result<CookOutcome>
where
    S: Speaker,
    R: Recognizer + Send + 'static,
{
    let mut guide = CookingGuide::new(recipe, settings, speaker)?;
    show_status(&guide, renderer)?;

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    let mut heard = listen(recognizer);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = guide.tick() {
                    debug!("tick event: {event:?}");
                    show_status(&guide, renderer)?;
                }
            }
            line = heard.recv() => {
                let Some(line) = line else {
                    debug!("input closed, leaving the guide");
                    return Ok(CookOutcome::Stopped);
                };
                match parse_input(&line) {
                    Input::Command(command) => {
                        guide.handle(command);
                        show_status(&guide, renderer)?;
                    }
                    Input::Finish(rating) => {
                        if let Some(SessionEvent::Completed { recipe_id, .. }) =
                            guide.handle(GuideCommand::Complete)
                        {
                            debug!("completed recipe {recipe_id}");
                        }
                        return Ok(CookOutcome::Completed { rating });
                    }
                    Input::Status => show_status(&guide, renderer)?,
                    Input::Help => renderer.render(HELP)?,
                    Input::Quit => return Ok(CookOutcome::Stopped),
                    Input::Unknown => renderer.render("Unknown command. Type `h` for help.\n")?,
                }
            }
        }
    }
}

fn show_status<S: Speaker>(guide: &CookingGuide<S>, renderer: &TerminalRenderer) -> Result<()> {
    let session = guide.session();
    let step = session.current_step();
    let snapshot = session.snapshot();
    debug!(
        "step {} of {}, timer {} {}",
        snapshot.step_number,
        snapshot.step_count,
        snapshot.timer_state,
        Countdown(snapshot.time_left_seconds)
    );
    renderer.render(&format!("{snapshot}{step}"))
}

#[cfg(test)]
mod tests {
    use sous_core::{narration::Silent, Step};

    use super::*;

    #[test]
    fn test_single_letter_commands() {
        assert_eq!(parse_input("n"), Input::Command(GuideCommand::Next));
        assert_eq!(parse_input("g 3"), Input::Command(GuideCommand::GoTo(2)));
        assert_eq!(
            parse_input("t 90"),
            Input::Command(GuideCommand::StartTimer(Some(90)))
        );
        assert_eq!(
            parse_input("t"),
            Input::Command(GuideCommand::StartTimer(None))
        );
        assert_eq!(parse_input("c 4"), Input::Finish(Some(4)));
        assert_eq!(parse_input("  "), Input::Status);
        assert_eq!(parse_input("g"), Input::Unknown);
    }

    #[test]
    fn test_go_to_extreme_numbers_do_not_overflow() {
        assert_eq!(
            parse_input("g -9223372036854775808"),
            Input::Command(GuideCommand::GoTo(i64::MIN))
        );
        assert_eq!(
            parse_input("g 0"),
            Input::Command(GuideCommand::GoTo(-1))
        );
        assert_eq!(parse_input("g 99999999999999999999"), Input::Unknown);
    }

    struct Script(Vec<&'static str>);

    impl Recognizer for Script {
        fn recognize(&mut self) -> CoreResult<Option<String>> {
            if self.0.is_empty() {
                return Err(SousError::Voice {
                    message: "script finished".to_string(),
                });
            }
            Ok(Some(self.0.remove(0).to_string()))
        }
    }

    #[tokio::test]
    async fn test_listener_forwards_utterances_then_closes() {
        let mut heard = listen(Script(vec!["다음", "완료"]));
        assert_eq!(heard.recv().await.as_deref(), Some("다음"));
        assert_eq!(heard.recv().await.as_deref(), Some("완료"));
        assert_eq!(heard.recv().await, None);
    }

    #[tokio::test]
    async fn test_run_completes_from_recognized_speech() {
        let recipe = Recipe::new(
            "라면",
            vec![],
            vec![Step::new(1, "물을 끓인다 3분", 3), Step::new(2, "면을 넣는다", 4)],
        );
        let renderer = TerminalRenderer::new(false);
        let outcome = run(
            recipe,
            GuideSettings::default(),
            Silent,
            Script(vec!["다음 단계", "다 했어요"]),
            &renderer,
        )
        .await
        .expect("run");
        assert_eq!(outcome, CookOutcome::Completed { rating: None });
    }

    #[tokio::test]
    async fn test_run_stops_when_input_closes() {
        let recipe = Recipe::new("라면", vec![], vec![Step::new(1, "면을 넣는다", 4)]);
        let renderer = TerminalRenderer::new(false);
        let outcome = run(recipe, GuideSettings::default(), Silent, Script(vec![]), &renderer)
            .await
            .expect("run");
        assert_eq!(outcome, CookOutcome::Stopped);
    }

    #[test]
    fn test_free_text_goes_through_voice_parser() {
        assert_eq!(parse_input("다음 단계"), Input::Command(GuideCommand::Next));
        assert_eq!(parse_input("다 했어요"), Input::Finish(None));
        assert_eq!(parse_input("배고파"), Input::Unknown);
    }
}
