use answer_core::core::dictionary::TopicDictionary;
use answer_core::core::lemmatizer::{FormLemmatizer, LowercaseLemmatizer};
use answer_core::core::normalizer::Normalizer;
use answer_core::seed::{self, DEMO_QUERIES};
use answer_core::store::{provision, AnswerStore, FileAnswerStore, SqliteAnswerStore};
use answer_core::{MatchMode, QueryPipeline, Resolution};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn seeded_database(dir: &tempfile::TempDir) -> SqliteAnswerStore {
    let mut store = SqliteAnswerStore::open(&dir.path().join("db").join("database.db")).unwrap();
    seed::reseed(&mut store).unwrap();
    store
}

#[test]
fn demo_queries_with_raw_matching() {
    let dir = tempfile::tempdir().unwrap();
    let dictionary = TopicDictionary::load(&fixture("xml/senses.xml")).unwrap();
    let pipeline = QueryPipeline::new(dictionary, seeded_database(&dir), Normalizer::new(LowercaseLemmatizer));

    let answers: Vec<Resolution> = DEMO_QUERIES
        .iter()
        .map(|query| pipeline.answer_query(query).unwrap())
        .collect();

    // "пасты" is not literally "паста", so the carbonara query finds no topic.
    assert_eq!(
        answers,
        vec![
            Resolution::NoTopic,
            Resolution::Answer("Домашний хлеб можно приготовить".to_string()),
        ]
    );
}

#[test]
fn demo_queries_with_normalized_matching() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_database(&dir);
    let service_words = store.service_words().unwrap();
    let lemmatizer = FormLemmatizer::load(&fixture("lexicon/ru.jsonl")).unwrap();
    let dictionary = TopicDictionary::load(&fixture("xml/senses.xml")).unwrap();

    let pipeline = QueryPipeline::new(
        dictionary,
        store,
        Normalizer::new(lemmatizer).with_service_words(service_words),
    )
    .with_match_mode(MatchMode::Normalized);

    assert_eq!(
        pipeline.normalize("Рецепт пасты в карбонара!").unwrap(),
        "рецепт паста карбонара"
    );
    assert_eq!(
        pipeline.answer_query("рецепт пасты карбонара").unwrap().answer(),
        Some("Паста карбонара - это классическое итальянское блюдо")
    );
    assert_eq!(pipeline.answer_query("what time is it").unwrap(), Resolution::NoTopic);
}

#[test]
fn file_snapshot_serves_the_same_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.bin");
    {
        let mut store = FileAnswerStore::open(&path).unwrap();
        provision(&mut store, &seed::demo_answers()).unwrap();
        store.flush().unwrap();
    }

    let store = FileAnswerStore::open(&path).unwrap();
    assert_eq!(store.get("суши").unwrap().as_deref(), Some("Суши - японское блюдо"));

    let dictionary = TopicDictionary::load(&fixture("xml/senses.xml")).unwrap();
    let pipeline = QueryPipeline::new(dictionary, store, Normalizer::new(LowercaseLemmatizer));
    assert!(pipeline.answer_query("хочу кофе").unwrap().is_answer());
}
