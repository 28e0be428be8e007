mod report;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use persona_scale::config::AppConfig;
use persona_scale::error::AppError;
use persona_scale::quiz::export::{write_export, ExportFormat};
use persona_scale::quiz::presets::{find_preset, standard_presets, TestPreset};
use persona_scale::quiz::share::{answers_from_url, build_share_url, decode_answers};
use persona_scale::quiz::storage::{FileStore, QuizStateRepository, Screen, StoredState};
use persona_scale::quiz::{
    sanity_check, AnswerSet, ContentCatalog, ItemId, QuizResult, ScoringEngine,
};
use persona_scale::telemetry;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "persona-scale",
    about = "Answer, score, share and export the 48-item personality questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List questionnaire items with the saved answer for each
    Questions {
        /// Only show items that have no answer yet
        #[arg(long)]
        unanswered: bool,
    },
    /// Record a 1-7 answer for one item
    Answer {
        item: ItemId,
        score: u8,
    },
    /// Show how many items are answered
    Progress,
    /// Score the saved answers and show the report
    Submit,
    /// Score an answers JSON file ({"1": 5, ...}) and print the result as JSON
    Score(ScoreArgs),
    /// Fill the questionnaire from a developer preset
    Preset(PresetArgs),
    /// Print a share link for the saved answers
    Share,
    /// Restore answers from a share code or link
    LoadShare {
        /// Bare share code or a full link carrying `?results=`
        input: String,
    },
    /// Write the latest result to a JSON or CSV file
    Export(ExportArgs),
    /// Report result keys that have no descriptive copy
    Sanity,
    /// Discard saved answers and results
    Reset,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[arg(long)]
    answers: PathBuf,
    /// Include the per-axis decision trace
    #[arg(long)]
    trace: bool,
    /// Score even when some items are unanswered
    #[arg(long)]
    partial: bool,
}

#[derive(Args, Debug)]
struct PresetArgs {
    /// Preset key such as `ntp_a`
    #[arg(required_unless_present = "list")]
    key: Option<String>,
    /// List available presets
    #[arg(long)]
    list: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long, value_parser = parse_format)]
    format: ExportFormat,
    /// Output directory (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse()
}

struct Context {
    config: AppConfig,
    engine: ScoringEngine,
    content: ContentCatalog,
    repository: QuizStateRepository<FileStore>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut context = bootstrap()?;

    match cli.command {
        None => run_status(&mut context),
        Some(Command::Questions { unanswered }) => run_questions(&mut context, unanswered),
        Some(Command::Answer { item, score }) => run_answer(&mut context, item, score),
        Some(Command::Progress) => run_progress(&mut context),
        Some(Command::Submit) => run_submit(&mut context),
        Some(Command::Score(args)) => run_score(&context, args),
        Some(Command::Preset(args)) => run_preset(&mut context, args),
        Some(Command::Share) => run_share(&mut context),
        Some(Command::LoadShare { input }) => run_load_share(&mut context, &input),
        Some(Command::Export(args)) => run_export(&mut context, args),
        Some(Command::Sanity) => {
            print!("{}", report::gap_listing(&sanity_check(&context.content)));
            Ok(())
        }
        Some(Command::Reset) => {
            context.repository.clear()?;
            println!("Saved answers and results cleared.");
            Ok(())
        }
    }
}

fn bootstrap() -> Result<Context, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let content = match &config.content.path {
        Some(path) => ContentCatalog::from_path(path)?,
        None => ContentCatalog::standard(),
    };
    let gaps = sanity_check(&content);
    if !gaps.is_empty() {
        warn!(missing = gaps.len(), "content catalog is incomplete");
    }

    let repository = QuizStateRepository::new(FileStore::new(config.storage.state_path.clone()));
    info!(
        ?config.environment,
        state = %repository.store().path().display(),
        "questionnaire ready"
    );

    Ok(Context {
        config,
        engine: ScoringEngine::standard(),
        content,
        repository,
    })
}

fn load_state(context: &mut Context) -> Result<StoredState, AppError> {
    Ok(context.repository.load()?.unwrap_or_default())
}

fn require_complete(engine: &ScoringEngine, answers: &AnswerSet) -> Result<(), AppError> {
    if engine.is_complete(answers) {
        return Ok(());
    }
    Err(AppError::Incomplete {
        answered: engine.catalog().answered_count(answers),
        total: engine.catalog().len(),
    })
}

/// Scores `answers`, saves them with the result, and prints the report.
fn finish(context: &mut Context, answers: AnswerSet) -> Result<QuizResult, AppError> {
    let result = context.engine.classify(&answers);
    let state = StoredState {
        answers,
        results: Some(result.clone()),
        current_screen: Screen::Results,
    };
    context.repository.save(&state)?;
    info!(result = %result.full_type_with_variant(), "questionnaire scored");
    print!("{}", report::result_report(&result, &context.content));
    Ok(result)
}

fn run_status(context: &mut Context) -> Result<(), AppError> {
    let state = load_state(context)?;
    print!("{}", report::status_message(&state, context.engine.catalog()));
    Ok(())
}

fn run_questions(context: &mut Context, unanswered: bool) -> Result<(), AppError> {
    let state = load_state(context)?;
    print!(
        "{}",
        report::question_listing(context.engine.catalog(), &state.answers, unanswered)
    );
    Ok(())
}

fn run_answer(context: &mut Context, item: ItemId, score: u8) -> Result<(), AppError> {
    if context.engine.catalog().item(item).is_none() {
        return Err(AppError::UnknownItem { item });
    }

    let mut state = load_state(context)?;
    state.answers.record(item, score)?;
    state.results = None;
    state.current_screen = Screen::Quiz;
    context.repository.save(&state)?;

    println!(
        "{}",
        report::progress_line(state.answers.len(), context.engine.catalog().len())
    );
    Ok(())
}

fn run_progress(context: &mut Context) -> Result<(), AppError> {
    let state = load_state(context)?;
    let catalog = context.engine.catalog();
    println!(
        "{}",
        report::progress_line(catalog.answered_count(&state.answers), catalog.len())
    );
    Ok(())
}

fn run_submit(context: &mut Context) -> Result<(), AppError> {
    let state = load_state(context)?;
    require_complete(&context.engine, &state.answers)?;
    finish(context, state.answers)?;
    Ok(())
}

fn run_score(context: &Context, args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.answers)?;
    let answers: AnswerSet = serde_json::from_str(&raw)?;

    if !args.partial {
        require_complete(&context.engine, &answers)?;
    }

    let rendered = if args.trace {
        serde_json::to_string_pretty(&context.engine.classify_traced(&answers))
    } else {
        serde_json::to_string_pretty(&context.engine.classify(&answers))
    }?;

    println!("{rendered}");
    Ok(())
}

fn run_preset(context: &mut Context, args: PresetArgs) -> Result<(), AppError> {
    let Some(key) = args.key.filter(|_| !args.list) else {
        print!("{}", report::preset_listing(standard_presets()));
        return Ok(());
    };

    let preset = resolve_preset(&key)?;
    info!(preset = preset.key, "applying test preset");
    let answers = preset.answers(context.engine.catalog());
    finish(context, answers)?;
    Ok(())
}

fn resolve_preset(key: &str) -> Result<&'static TestPreset, AppError> {
    find_preset(key).ok_or_else(|| {
        warn!(preset = %key, "unknown preset");
        AppError::UnknownPreset {
            key: key.to_string(),
        }
    })
}

fn run_share(context: &mut Context) -> Result<(), AppError> {
    let state = load_state(context)?;
    require_complete(&context.engine, &state.answers)?;
    let url = build_share_url(&context.config.share.base_url, &state.answers)?;
    println!("{url}");
    Ok(())
}

fn run_load_share(context: &mut Context, input: &str) -> Result<(), AppError> {
    let answers = if input.contains('?') {
        answers_from_url(input)?.unwrap_or_default()
    } else {
        decode_answers(input)?
    };

    if answers.is_empty() {
        println!("No shared answers found.");
        return Ok(());
    }

    if context.engine.is_complete(&answers) {
        finish(context, answers)?;
        return Ok(());
    }

    let total = context.engine.catalog().len();
    let state = StoredState {
        answers,
        results: None,
        current_screen: Screen::Quiz,
    };
    context.repository.save(&state)?;
    println!(
        "Shared answers restored: {}",
        report::progress_line(state.answers.len(), total)
    );
    Ok(())
}

fn run_export(context: &mut Context, args: ExportArgs) -> Result<(), AppError> {
    let state = load_state(context)?;
    let result = state.results.ok_or(AppError::NoResults)?;
    let dir = args
        .output
        .unwrap_or_else(|| context.config.storage.export_dir.clone());

    let path = write_export(
        &dir,
        args.format,
        &state.answers,
        &result,
        context.engine.catalog(),
        Utc::now(),
    )?;
    println!("{}", path.display());
    Ok(())
}
