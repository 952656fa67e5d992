// File: src/report.rs
use crate::core::pipeline::QueryPipeline;
use crate::error::Result;
use crate::store::AnswerStore;
use crossterm::style::Stylize;
use std::io::Write;

/// How the `Query:` / `Answer:` labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Plain,
    /// Bold labels, answer label coloured by hit or miss. Terminals only.
    Styled,
}

impl LabelStyle {
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            LabelStyle::Styled
        } else {
            LabelStyle::Plain
        }
    }
}

/// Answers every query and writes one block per query:
/// `Query: <raw>`, `Answer: <answer or miss>`, then a blank line.
pub fn write_answers<W: Write, S: AnswerStore>(
    out: &mut W,
    pipeline: &QueryPipeline<S>,
    queries: &[String],
    no_answer_message: &str,
    style: LabelStyle,
) -> Result<()> {
    for query in queries {
        let resolution = pipeline.answer_query(query)?;
        let answer = resolution.render(no_answer_message);
        match style {
            LabelStyle::Plain => {
                writeln!(out, "Query: {query}")?;
                writeln!(out, "Answer: {answer}")?;
            }
            LabelStyle::Styled => {
                writeln!(out, "{} {}", "Query:".bold(), query)?;
                if resolution.is_answer() {
                    writeln!(out, "{} {}", "Answer:".bold().green(), answer)?;
                } else {
                    writeln!(out, "{} {}", "Answer:".bold().yellow(), answer)?;
                }
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dictionary::TopicDictionary;
    use crate::core::lemmatizer::LowercaseLemmatizer;
    use crate::core::normalizer::Normalizer;
    use crate::core::types::{AnswerRecord, TopicEntry, NO_ANSWER_MESSAGE};
    use crate::store::MemoryAnswerStore;
    use pretty_assertions::assert_eq;

    fn pipeline() -> QueryPipeline<MemoryAnswerStore> {
        let dictionary: TopicDictionary = vec![
            TopicEntry::new("паста карбонара", "паста карбонара"),
            TopicEntry::new("хлеб", "хлеб"),
        ]
        .into();
        let store: MemoryAnswerStore =
            [AnswerRecord::new("хлеб", "Домашний хлеб можно приготовить")].into_iter().collect();
        QueryPipeline::new(dictionary, store, Normalizer::new(LowercaseLemmatizer))
    }

    fn render(queries: &[&str], style: LabelStyle) -> String {
        let queries: Vec<String> = queries.iter().map(|q| q.to_string()).collect();
        let mut out = Vec::new();
        write_answers(&mut out, &pipeline(), &queries, NO_ANSWER_MESSAGE, style).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_blocks_carry_literal_labels() {
        assert_eq!(
            render(&["рецепт пасты карбонара"], LabelStyle::Plain),
            "Query: рецепт пасты карбонара\nAnswer: No answer available\n\n"
        );
    }

    #[test]
    fn one_block_per_query_in_order() {
        assert_eq!(
            render(&["сделать домашний хлеб", "what time is it"], LabelStyle::Plain),
            "Query: сделать домашний хлеб\nAnswer: Домашний хлеб можно приготовить\n\n\
             Query: what time is it\nAnswer: No answer available\n\n"
        );
    }

    #[test]
    fn styled_labels_only_for_terminals() {
        assert_eq!(LabelStyle::for_terminal(false), LabelStyle::Plain);
        assert_eq!(LabelStyle::for_terminal(true), LabelStyle::Styled);

        let styled = render(&["сделать домашний хлеб"], LabelStyle::Styled);
        assert!(styled.contains('\u{1b}'));
        assert!(styled.contains("Домашний хлеб можно приготовить"));
        assert!(!render(&["сделать домашний хлеб"], LabelStyle::Plain).contains('\u{1b}'));
    }
}
