use serde::Serialize;

use crate::question::QuizQuestion;

/// Compound correctness of one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    BothCorrect,
    TranslationWrong,
    ArticleWrong,
    BothWrong,
}

impl Verdict {
    pub fn from_parts(translation_correct: bool, article_correct: bool) -> Self {
        match (translation_correct, article_correct) {
            (true, true) => Verdict::BothCorrect,
            (false, true) => Verdict::TranslationWrong,
            (true, false) => Verdict::ArticleWrong,
            (false, false) => Verdict::BothWrong,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::BothCorrect)
    }

    pub fn translation_correct(&self) -> bool {
        matches!(self, Verdict::BothCorrect | Verdict::ArticleWrong)
    }

    pub fn article_correct(&self) -> bool {
        matches!(self, Verdict::BothCorrect | Verdict::TranslationWrong)
    }
}

/// Result of evaluating one submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    selected_translation: String,
    selected_article: Option<String>,
    article_required: bool,
    verdict: Verdict,
}

impl AnswerOutcome {
    pub fn selected_translation(&self) -> &str {
        &self.selected_translation
    }

    pub fn selected_article(&self) -> Option<&str> {
        self.selected_article.as_deref()
    }

    pub fn article_required(&self) -> bool {
        self.article_required
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }

    pub fn translation_correct(&self) -> bool {
        self.verdict.translation_correct()
    }

    /// Always true when the question has no article part
    pub fn article_correct(&self) -> bool {
        self.verdict.article_correct()
    }

    /// One-line feedback for the answer card
    pub fn feedback(&self) -> &'static str {
        match self.verdict {
            Verdict::BothCorrect => "Correct! Well done!",
            Verdict::ArticleWrong => "Wrong article! Keep practicing!",
            Verdict::TranslationWrong if self.article_required => {
                "Wrong word! But article was right!"
            }
            _ => "Keep trying! You're learning!",
        }
    }
}

/// Score an answer. Pure: the same inputs always give the same outcome.
///
/// A missing article on an article question counts as a wrong article.
pub fn evaluate(
    question: &QuizQuestion,
    selected_translation: &str,
    selected_article: Option<&str>,
) -> AnswerOutcome {
    let translation_correct = selected_translation == question.correct_answer();

    let article_required = question.is_article_question();
    let article_correct = if article_required {
        selected_article.is_some() && selected_article == question.word().article.as_deref()
    } else {
        true
    };

    AnswerOutcome {
        selected_translation: selected_translation.to_string(),
        selected_article: selected_article.map(str::to_string),
        article_required,
        verdict: Verdict::from_parts(translation_correct, article_correct),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerRejected {
    #[error("Question already answered")]
    AlreadyAnswered,

    #[error("Select the article first")]
    ArticleRequired,

    #[error("No option at position {0}")]
    UnknownOption(usize),

    #[error("Session is not in progress")]
    SessionClosed,
}

/// Interaction state for the question on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered { selected_article: Option<String> },
    Answered(AnswerOutcome),
}

impl Default for AnswerState {
    fn default() -> Self {
        AnswerState::Unanswered {
            selected_article: None,
        }
    }
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerState::Answered(_))
    }

    pub fn outcome(&self) -> Option<&AnswerOutcome> {
        match self {
            AnswerState::Answered(outcome) => Some(outcome),
            AnswerState::Unanswered { .. } => None,
        }
    }

    pub fn selected_article(&self) -> Option<&str> {
        match self {
            AnswerState::Unanswered { selected_article } => selected_article.as_deref(),
            AnswerState::Answered(outcome) => outcome.selected_article(),
        }
    }

    /// Pick or change the article. Ignored once answered.
    pub fn select_article(&mut self, article: &str) -> bool {
        match self {
            AnswerState::Unanswered { selected_article } => {
                *selected_article = Some(article.trim().to_string());
                true
            }
            AnswerState::Answered(_) => false,
        }
    }

    /// Submit the translation at `index`.
    ///
    /// Article questions need an article selected first; the state stays unanswered
    /// when that is missing.
    pub fn submit(
        &mut self,
        question: &QuizQuestion,
        index: usize,
    ) -> Result<AnswerOutcome, AnswerRejected> {
        let selected_article = match self {
            AnswerState::Answered(_) => return Err(AnswerRejected::AlreadyAnswered),
            AnswerState::Unanswered { selected_article } => selected_article.clone(),
        };

        if question.is_article_question() && selected_article.is_none() {
            return Err(AnswerRejected::ArticleRequired);
        }

        let Some(option) = question.option(index) else {
            return Err(AnswerRejected::UnknownOption(index));
        };

        let outcome = evaluate(question, option, selected_article.as_deref());
        *self = AnswerState::Answered(outcome.clone());

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::question::generate;
    use crate::types::Word;

    fn words() -> Vec<Word> {
        vec![
            Word::new("1", "Haus", "house").with_article("das"),
            Word::new("2", "Hund", "dog").with_article("der"),
            Word::new("3", "gut", "good"),
            Word::new("4", "schnell", "fast"),
        ]
    }

    fn question_for(index: usize) -> QuizQuestion {
        let words = words();
        let mut rng = StdRng::seed_from_u64(1);
        generate(&words[index], &words, &mut rng)
    }

    #[test]
    fn non_article_word_ignores_article_input() {
        let question = question_for(2);

        for article in [None, Some("der"), Some("xyz")] {
            let outcome = evaluate(&question, "good", article);
            assert!(outcome.article_correct());
            assert!(outcome.is_correct());

            let outcome = evaluate(&question, "dog", article);
            assert!(outcome.article_correct());
            assert_eq!(outcome.verdict(), Verdict::TranslationWrong);
        }
    }

    #[test]
    fn article_word_needs_both_parts() {
        let question = question_for(0);

        assert_eq!(
            evaluate(&question, "house", Some("das")).verdict(),
            Verdict::BothCorrect
        );
        assert_eq!(
            evaluate(&question, "house", Some("der")).verdict(),
            Verdict::ArticleWrong
        );
        assert_eq!(
            evaluate(&question, "dog", Some("das")).verdict(),
            Verdict::TranslationWrong
        );
        assert_eq!(
            evaluate(&question, "dog", Some("die")).verdict(),
            Verdict::BothWrong
        );
    }

    #[test]
    fn missing_article_counts_as_wrong() {
        let question = question_for(0);
        let outcome = evaluate(&question, "house", None);
        assert!(!outcome.article_correct());
        assert!(!outcome.is_correct());
        assert_eq!(outcome.verdict(), Verdict::ArticleWrong);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let question = question_for(0);
        let first = evaluate(&question, "dog", Some("das"));
        let second = evaluate(&question, "dog", Some("das"));
        assert_eq!(first, second);
    }

    #[test]
    fn feedback_distinguishes_verdicts() {
        let article_question = question_for(0);
        assert_eq!(
            evaluate(&article_question, "house", Some("der")).feedback(),
            "Wrong article! Keep practicing!"
        );
        assert_eq!(
            evaluate(&article_question, "dog", Some("das")).feedback(),
            "Wrong word! But article was right!"
        );

        let plain_question = question_for(3);
        assert_eq!(
            evaluate(&plain_question, "dog", None).feedback(),
            "Keep trying! You're learning!"
        );
    }

    #[test]
    fn verdict_parts_round_trip() {
        for (translation, article) in [(true, true), (true, false), (false, true), (false, false)] {
            let verdict = Verdict::from_parts(translation, article);
            assert_eq!(verdict.translation_correct(), translation);
            assert_eq!(verdict.article_correct(), article);
            assert_eq!(verdict.is_correct(), translation && article);
        }
    }

    #[test]
    fn article_must_come_before_translation() {
        let question = question_for(0);
        let correct = question.correct_index().unwrap();
        let mut state = AnswerState::default();

        assert_eq!(
            state.submit(&question, correct).unwrap_err(),
            AnswerRejected::ArticleRequired
        );
        assert!(!state.is_answered());

        assert!(state.select_article("das"));
        let outcome = state.submit(&question, correct).unwrap();
        assert!(outcome.is_correct());
    }

    #[test]
    fn answer_is_final() {
        let question = question_for(2);
        let correct = question.correct_index().unwrap();
        let mut state = AnswerState::default();

        state.submit(&question, correct).unwrap();
        assert_eq!(
            state.submit(&question, correct).unwrap_err(),
            AnswerRejected::AlreadyAnswered
        );
        assert!(!state.select_article("der"));
        assert!(state.outcome().unwrap().is_correct());
    }

    #[test]
    fn unknown_option_keeps_article_selection() {
        let question = question_for(0);
        let mut state = AnswerState::default();
        state.select_article("die");

        assert_eq!(
            state.submit(&question, 9).unwrap_err(),
            AnswerRejected::UnknownOption(9)
        );
        assert_eq!(state.selected_article(), Some("die"));
    }
}
