use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::shuffle::{sample, shuffle};
use crate::types::Word;

/// Wrong answers offered next to the correct one
pub const MAX_DISTRACTORS: usize = 3;

/// Multiple-choice question for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    word: Word,
    options: Vec<String>,
    correct_answer: String,
    is_article_question: bool,
}

impl QuizQuestion {
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Shuffled options, the correct answer among them
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn is_article_question(&self) -> bool {
        self.is_article_question
    }

    /// Position of the correct answer within `options`
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

/// Build a question for `target` with distractors taken from `pool`.
///
/// Distractors are distinct translations different from the target's, so no option
/// is a second right answer. Fewer than [`MAX_DISTRACTORS`] candidates yields a
/// shorter option list.
pub fn generate<R: Rng + ?Sized>(target: &Word, pool: &[Word], rng: &mut R) -> QuizQuestion {
    let correct_answer = target.translation.clone();

    let mut seen = HashSet::new();
    let candidates: Vec<&str> = pool
        .iter()
        .map(|w| w.translation.as_str())
        .filter(|translation| *translation != correct_answer)
        .filter(|translation| seen.insert(*translation))
        .collect();

    let distractors = sample(candidates, MAX_DISTRACTORS, rng);

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct_answer.clone());
    options.extend(distractors.into_iter().map(str::to_string));
    shuffle(&mut options, rng);

    tracing::debug!(
        word_id = %target.id,
        options = options.len(),
        "generated quiz question"
    );

    QuizQuestion {
        word: target.clone(),
        options,
        correct_answer,
        is_article_question: target.requires_article(),
    }
}

/// [`generate`] with a freshly seeded RNG
pub fn generate_question(target: &Word, pool: &[Word]) -> QuizQuestion {
    let mut rng = StdRng::from_entropy();
    generate(target, pool, &mut rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pool() -> Vec<Word> {
        vec![
            Word::new("1", "Haus", "house").with_article("das"),
            Word::new("2", "Hund", "dog").with_article("der"),
            Word::new("3", "Katze", "cat").with_article("die"),
            Word::new("4", "gut", "good"),
            Word::new("5", "schnell", "fast"),
            Word::new("6", "rasch", "fast"),
        ]
    }

    fn assert_unique(options: &[String]) {
        let unique: HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), options.len(), "duplicate options: {options:?}");
    }

    #[test]
    fn four_distinct_options_with_one_correct() {
        let words = pool();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let question = generate(&words[0], &words, &mut rng);
            assert_eq!(question.options().len(), 4);
            assert_unique(question.options());
            assert_eq!(
                question
                    .options()
                    .iter()
                    .filter(|o| o.as_str() == "house")
                    .count(),
                1
            );
            assert_eq!(question.correct_answer(), "house");
        }
    }

    #[test]
    fn shared_translations_are_never_both_offered() {
        let words = pool();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let question = generate(&words[4], &words, &mut rng);
            let fast = question
                .options()
                .iter()
                .filter(|o| o.as_str() == "fast")
                .count();
            assert_eq!(fast, 1);
            assert_unique(question.options());
        }
    }

    #[test]
    fn small_pool_yields_fewer_options() {
        let words = vec![
            Word::new("1", "Haus", "house"),
            Word::new("2", "Heim", "house"),
            Word::new("3", "Hund", "dog"),
        ];
        let mut rng = StdRng::seed_from_u64(5);

        let question = generate(&words[0], &words, &mut rng);
        assert_eq!(question.options().len(), 2);
        assert_unique(question.options());
        assert!(question.options().contains(&"dog".to_string()));
    }

    #[test]
    fn lone_word_only_has_correct_option() {
        let words = vec![Word::new("1", "Haus", "house")];
        let question = generate_question(&words[0], &words);
        assert_eq!(question.options(), ["house".to_string()]);
        assert_eq!(question.correct_index(), Some(0));
    }

    #[test]
    fn article_flag_follows_word() {
        let words = pool();
        let mut rng = StdRng::seed_from_u64(9);

        assert!(generate(&words[0], &words, &mut rng).is_article_question());
        assert!(!generate(&words[3], &words, &mut rng).is_article_question());

        let blank = Word::new("7", "Ding", "thing").with_article("");
        assert!(!generate(&blank, &words, &mut rng).is_article_question());
    }

    #[test]
    fn correct_answer_position_varies() {
        let words = pool();
        let mut rng = StdRng::seed_from_u64(21);
        let mut positions = HashSet::new();

        for _ in 0..200 {
            let question = generate(&words[1], &words, &mut rng);
            positions.insert(question.correct_index().unwrap());
        }

        assert_eq!(positions.len(), 4);
    }
}
