use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::answer::{AnswerOutcome, AnswerRejected, AnswerState};
use crate::error::SessionError;
use crate::question::{QuizQuestion, generate};
use crate::session::{SessionState, SessionSummary, SessionTracker};
use crate::types::VocabularyPool;

/// One running quiz: pool, counters, the question on screen and its answer state.
pub struct QuizSession<R = StdRng> {
    pool: VocabularyPool,
    tracker: SessionTracker,
    question: QuizQuestion,
    answer: AnswerState,
    rng: R,
}

impl QuizSession<StdRng> {
    pub fn start(pool: VocabularyPool) -> Result<Self, SessionError> {
        Self::start_with_rng(pool, StdRng::from_entropy())
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn start_with_rng(pool: VocabularyPool, mut rng: R) -> Result<Self, SessionError> {
        let mut tracker = SessionTracker::new(pool.tier());
        tracker.start()?;

        let question = generate(pool.random_word(&mut rng), pool.words(), &mut rng);

        Ok(Self {
            pool,
            tracker,
            question,
            answer: AnswerState::default(),
            rng,
        })
    }

    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn pool(&self) -> &VocabularyPool {
        &self.pool
    }

    /// Number of the question on screen, starting at 1
    pub fn question_number(&self) -> u32 {
        self.tracker.total()
    }

    pub fn select_article(&mut self, article: &str) -> bool {
        self.answer.select_article(article)
    }

    /// Answer the current question with the option at `index` and count the result.
    /// Rejected without touching the answer state once the session has ended.
    pub fn submit(&mut self, index: usize) -> Result<AnswerOutcome, AnswerRejected> {
        if self.tracker.state() != SessionState::InProgress {
            return Err(AnswerRejected::SessionClosed);
        }

        let outcome = self.answer.submit(&self.question, index)?;
        self.tracker
            .record_answer(&outcome)
            .map_err(|_| AnswerRejected::SessionClosed)?;

        Ok(outcome)
    }

    /// Draw the next word. An unanswered question is skipped without being counted.
    pub fn next_question(&mut self) -> Result<&QuizQuestion, SessionError> {
        self.tracker.advance()?;

        let target = self.pool.random_word(&mut self.rng).clone();
        self.question = generate(&target, self.pool.words(), &mut self.rng);
        self.answer = AnswerState::default();

        Ok(&self.question)
    }

    pub fn end(&mut self) -> Result<SessionSummary, SessionError> {
        self.tracker.end()?;
        Ok(self.tracker.summary())
    }
}
