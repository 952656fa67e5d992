use answer_core::config::AppConfig;
use answer_core::core::dictionary::TopicDictionary;
use answer_core::core::lemmatizer::{FormLemmatizer, LowercaseLemmatizer};
use answer_core::core::normalizer::Normalizer;
use answer_core::core::resolver::Matcher;
use answer_core::report::{write_answers, LabelStyle};
use answer_core::seed::{self, DEMO_QUERIES, DEMO_SERVICE_WORDS};
use answer_core::store::{provision, AnswerStore, FileAnswerStore, MemoryAnswerStore, SqliteAnswerStore};
use answer_core::{AnswerError, MatchMode, QueryPipeline};
use clap::Parser;
use std::io::{stdout, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "answer_engine", about = "Answers free-form queries from a fixed set of topics")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Topic dictionary (senses.xml)
    #[arg(long)]
    senses: Option<PathBuf>,
    /// SQLite answer database
    #[arg(long)]
    database: Option<PathBuf>,
    /// JSON-lines word-form lexicon
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// Keep answers in memory instead of the database
    #[arg(long, conflicts_with = "snapshot")]
    memory: bool,
    /// Serve answers from a bincode snapshot file instead of the database
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Skip clearing and reseeding the answer database or snapshot
    #[arg(long)]
    no_seed: bool,
    #[arg(long, value_enum)]
    match_mode: Option<MatchMode>,
    #[arg(long, value_enum)]
    matcher: Option<Matcher>,
    /// Queries to answer; the demo queries when omitted
    queries: Vec<String>,
}

fn main() -> Result<(), AnswerError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = cli.senses.clone() {
        config.senses_path = path;
    }
    if let Some(path) = cli.database.clone() {
        config.database_path = path;
    }
    if let Some(path) = cli.lexicon.clone() {
        config.lexicon_path = Some(path);
    }
    if let Some(mode) = cli.match_mode {
        config.match_mode = mode;
    }
    if let Some(matcher) = cli.matcher {
        config.matcher = matcher;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let queries: Vec<String> = if cli.queries.is_empty() {
        DEMO_QUERIES.iter().map(|q| q.to_string()).collect()
    } else {
        cli.queries.clone()
    };

    let dictionary = TopicDictionary::load(&config.senses_path)?;

    if cli.memory {
        let mut store = MemoryAnswerStore::new();
        provision(&mut store, &seed::demo_answers())?;
        let service_words = DEMO_SERVICE_WORDS.iter().map(|w| w.to_string()).collect();
        run(&config, dictionary, store, service_words, &queries)
    } else if let Some(path) = &cli.snapshot {
        let mut store = FileAnswerStore::open(path)?;
        if !cli.no_seed {
            provision(&mut store, &seed::demo_answers())?;
            store.flush()?;
        }
        tracing::info!(path = %path.display(), answers = store.len(), "serving answer snapshot");
        let service_words = DEMO_SERVICE_WORDS.iter().map(|w| w.to_string()).collect();
        run(&config, dictionary, store, service_words, &queries)
    } else {
        let mut store = SqliteAnswerStore::open(&config.database_path)?;
        if !cli.no_seed {
            seed::reseed(&mut store)?;
        }
        let service_words = store.service_words()?;
        run(&config, dictionary, store, service_words, &queries)
    }
}

fn run<S: AnswerStore>(
    config: &AppConfig,
    dictionary: TopicDictionary,
    store: S,
    mut service_words: Vec<String>,
    queries: &[String],
) -> Result<(), AnswerError> {
    service_words.extend(config.service_words.iter().cloned());
    let normalizer = match &config.lexicon_path {
        Some(path) => Normalizer::new(FormLemmatizer::load(path)?),
        None => Normalizer::new(LowercaseLemmatizer),
    }
    .with_service_words(service_words);

    let pipeline = QueryPipeline::new(dictionary, store, normalizer)
        .with_resolver(config.matcher.build())
        .with_match_mode(config.match_mode);

    let style = LabelStyle::for_terminal(stdout().is_terminal());
    let mut out = stdout().lock();
    write_answers(&mut out, &pipeline, queries, &config.no_answer_message, style)
}
