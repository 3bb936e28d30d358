//! Terminal host for a quiz definition.
//!
//! Usage: `quizzly [definition.yaml|definition.json]`. Without an argument
//! the bundled coolness quiz is played. Answers are read from stdin as
//! 1-based choice numbers.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use quizzly::{Quiz, QuizDefinition, QuizEvent, QuizzlyConfig, Stage, WidgetId};

const BUNDLED_QUIZ: &str = include_str!("../demos/coolness.yaml");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        debug!(error = %e, "no .env loaded");
    }

    let config = QuizzlyConfig::from_env()?;
    let definition = match std::env::args().nth(1) {
        Some(path) => QuizDefinition::from_path(path)?,
        None => QuizDefinition::from_yaml_str(BUNDLED_QUIZ)?,
    };
    definition.validate()?;

    let mut quiz = definition
        .build()
        .with_submitter(config.submitter()?)
        .with_display_mode(config.display_mode);
    let logger = tokio::spawn(log_events(quiz.subscribe()));
    quiz.attach();

    if !definition.title.is_empty() {
        println!("{}\n", definition.title);
    }
    if let Some(intro) = &definition.intro {
        println!("{intro}\n");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let prompts: Vec<(String, Vec<(WidgetId, String)>)> = quiz
        .content()
        .questions()
        .map(|q| (q.text.clone(), q.choices().iter().map(|c| (c.id(), c.text.clone())).collect()))
        .collect();

    for (text, choices) in &prompts {
        println!("{text}");
        for (n, (_, label)) in choices.iter().enumerate() {
            println!("  {}) {label}", n + 1);
        }
        let Some(choice) = read_choice(&mut lines, choices).await? else {
            println!("\nno more input; leaving the quiz unfinished");
            return Ok(());
        };
        quiz.activate(choice)?;
        quiz.next();
    }

    match quiz.submit().await {
        Ok(tabulation) => {
            info!(result = tabulation.result_label(), "tabulated");
            reveal(&quiz);
        }
        Err(e) => println!("\nsomething went wrong: {e}"),
    }

    drop(quiz);
    logger.await?;
    Ok(())
}

/// Read lines until one names a valid choice; `None` at end of input.
async fn read_choice<R>(
    lines: &mut tokio::io::Lines<R>,
    choices: &[(WidgetId, String)],
) -> std::io::Result<Option<WidgetId>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    while let Some(line) = lines.next_line().await? {
        let picked = line.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| choices.get(i));
        match picked {
            Some((id, _)) => return Ok(Some(*id)),
            None => println!("pick a number from 1 to {}", choices.len()),
        }
    }
    Ok(None)
}

fn reveal(quiz: &Quiz) {
    if quiz.stage() != Stage::Done {
        return;
    }
    let view = quiz.view();
    let mut shown = quiz.content().results().filter(|r| view.visible_results.contains(&r.id())).peekable();
    if shown.peek().is_none() {
        println!("\nresult: {}", quiz.result_label());
    }
    for result in shown {
        println!("\n{}", result.text);
    }
}

async fn log_events(mut rx: tokio::sync::broadcast::Receiver<QuizEvent>) {
    loop {
        match rx.recv().await {
            Ok(QuizEvent::Error { error }) => warn!(event = "quiz-error", %error, "quiz event"),
            Ok(event) => debug!(event = event.name(), "quiz event"),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "event log lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}
