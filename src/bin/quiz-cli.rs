use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use clap::{Parser, Subcommand};

use quiz_assistant_server::{
    config::Config,
    constants::PromptTemplate,
    errors::{AppResult, QuizError},
    models::domain::{FeedbackTier, QuestionBank, QuestionRecord, QuizResults, Screen},
    services::{AssistantSession, FileStore, PresentationAdapter, QuizMachine},
};

#[derive(Debug, Parser)]
#[command(name = "quiz-cli", version, about = "Play the quiz or ask the assistant from a terminal")]
struct Cli {
    /// JSON file holding the assistant's API key slot
    #[arg(long, default_value = ".quiz-assistant.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play the five-question quiz
    Play {
        /// Pause after each answer, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Run a canned prompt: ask-anything, summarize, idea-spark or definition
    Assistant {
        template: PromptTemplate,
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },
    /// Save the Gemini API key used by the assistant
    SetKey { key: String },
    /// Remove the saved API key
    ClearKey,
    /// Show whether an API key is saved
    Status,
}

/// Renders quiz signals as plain text on stdout.
#[derive(Default)]
struct ConsoleAdapter {
    total: usize,
    labels: Vec<String>,
}

impl PresentationAdapter for ConsoleAdapter {
    fn on_show_question(&mut self, index: usize, record: &QuestionRecord) {
        self.labels = record.choices.iter().map(|c| c.label.clone()).collect();
        println!();
        println!("Question {} of {}", index + 1, self.total);
        println!("{}", record.prompt);
        for (i, label) in self.labels.iter().enumerate() {
            println!("  {}) {}", i + 1, label);
        }
    }

    fn on_reveal_answer(&mut self, chosen_index: usize, correct_index: usize) {
        let correct = self.labels.get(correct_index).map(String::as_str).unwrap_or("?");
        if chosen_index == correct_index {
            println!("Correct! {}", correct);
        } else {
            println!("Incorrect. The answer was {}", correct);
        }
    }

    fn on_show_results(&mut self, score: usize, total: usize, tier: FeedbackTier) {
        println!();
        println!("{}", QuizResults::compute(score, total).summary());
        println!("{}", tier.message());
    }

    fn on_show_start(&mut self) {
        println!("Ready for another round.");
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

async fn play(delay: Duration) -> AppResult<()> {
    let bank = QuestionBank::default_bank();
    let adapter = ConsoleAdapter {
        total: bank.size(),
        ..ConsoleAdapter::default()
    };
    let mut quiz = QuizMachine::new(bank, adapter).with_reveal_delay(delay);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        quiz.start()?;

        while quiz.session().screen() == Screen::InProgress {
            print!("Your answer: ");
            io::stdout().flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            let choice = match line.parse::<usize>() {
                Ok(n) if n > 0 => n - 1,
                _ => {
                    println!("Enter the number of your answer.");
                    continue;
                }
            };

            match quiz.submit_answer(choice) {
                Ok(_) => {}
                Err(QuizError::IndexOutOfRange { len, .. }) => {
                    println!("Pick a number between 1 and {}.", len);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            tokio::time::sleep(quiz.reveal_delay()).await;
            quiz.tick(quiz.reveal_delay())?;
        }

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => quiz.restart(),
            _ => return Ok(()),
        }
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<()> {
    let store = FileStore::new(&cli.store);

    match cli.command {
        Command::Play { delay_ms } => {
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or(config.quiz_reveal_delay);
            play(delay).await
        }
        Command::Assistant { template, input } => {
            let session = AssistantSession::load(store, config.gemini)?;
            let answer = session.ask(template, &input.join(" ")).await?;
            println!("{}", answer);
            Ok(())
        }
        Command::SetKey { key } => {
            let mut session = AssistantSession::load(store, config.gemini)?;
            session.save_key(&key)?;
            println!("{}", session.status().message());
            Ok(())
        }
        Command::ClearKey => {
            let mut session = AssistantSession::load(store, config.gemini)?;
            session.clear_key()?;
            println!("{}", session.status().message());
            Ok(())
        }
        Command::Status => {
            let session = AssistantSession::load(store, config.gemini)?;
            println!("{}", session.status().message());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli, Config::from_env()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
