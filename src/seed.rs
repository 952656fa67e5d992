// File: src/seed.rs
use crate::core::types::AnswerRecord;
use crate::error::DependencyFailure;
use crate::store::{provision, SqliteAnswerStore};

pub const DEMO_SERVICE_WORDS: [&str; 3] = ["в", "на", "и"];

pub const DEMO_QUERIES: [&str; 2] = ["рецепт пасты карбонара", "сделать домашний хлеб"];

pub fn demo_answers() -> Vec<AnswerRecord> {
    vec![
        AnswerRecord::new(
            "кофе",
            "Заварной кофе можно приготовить при помощи заливания кипятком растворимого кофейного порошка",
        ),
        AnswerRecord::new("паста карбонара", "Паста карбонара - это классическое итальянское блюдо"),
        AnswerRecord::new("суши", "Суши - японское блюдо"),
        AnswerRecord::new("хлеб", "Домашний хлеб можно приготовить"),
    ]
}

/// Clears the database and fills it with the demo answers and service words.
pub fn reseed(store: &mut SqliteAnswerStore) -> Result<(), DependencyFailure> {
    store.reset()?;
    for word in DEMO_SERVICE_WORDS {
        store.add_service_word(word)?;
    }
    provision(store, &demo_answers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AnswerStore;

    #[test]
    fn reseed_is_repeatable() {
        let mut store = SqliteAnswerStore::open_in_memory().unwrap();
        reseed(&mut store).unwrap();
        store.put("чай", "Чай").unwrap();
        reseed(&mut store).unwrap();

        assert_eq!(store.len().unwrap(), demo_answers().len());
        assert_eq!(store.get("чай").unwrap(), None);
        assert_eq!(store.service_words().unwrap(), DEMO_SERVICE_WORDS);
    }
}
