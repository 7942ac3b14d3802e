use std::time::{Duration, SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::answer::AnswerOutcome;
use crate::error::SessionError;
use crate::types::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Ended,
}

/// Per-session counters and timestamps
#[derive(Debug, Clone)]
pub struct SessionTracker {
    id: Uuid,
    tier: Tier,
    state: SessionState,
    correct: u32,
    incorrect: u32,
    total: u32,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
}

impl SessionTracker {
    pub fn new(tier: Tier) -> Self {
        Self {
            id: Uuid::new_v4(),
            tier,
            state: SessionState::NotStarted,
            correct: 0,
            incorrect: 0,
            total: 0,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.start_at(SystemTime::now())
    }

    /// The first question is already in flight, so `total` starts at 1.
    pub fn start_at(&mut self, now: SystemTime) -> Result<(), SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        self.state = SessionState::InProgress;
        self.correct = 0;
        self.incorrect = 0;
        self.total = 1;
        self.started_at = Some(now);
        self.ended_at = None;

        tracing::info!(session_id = %self.id, tier = %self.tier, "session started");
        Ok(())
    }

    pub fn record_answer(&mut self, outcome: &AnswerOutcome) -> Result<(), SessionError> {
        self.ensure_in_progress()?;

        if outcome.is_correct() {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }

        tracing::debug!(
            session_id = %self.id,
            correct = self.correct,
            incorrect = self.incorrect,
            "answer recorded"
        );
        Ok(())
    }

    /// Count a newly drawn question
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        self.total += 1;
        Ok(())
    }

    pub fn end(&mut self) -> Result<(), SessionError> {
        self.end_at(SystemTime::now())
    }

    /// Ending an ended session is a no-op and keeps the first end time.
    pub fn end_at(&mut self, now: SystemTime) -> Result<(), SessionError> {
        match self.state {
            SessionState::Ended => Ok(()),
            SessionState::NotStarted => Err(SessionError::NotInProgress { state: self.state }),
            SessionState::InProgress => {
                self.state = SessionState::Ended;
                self.ended_at = Some(now);
                tracing::info!(
                    session_id = %self.id,
                    correct = self.correct,
                    incorrect = self.incorrect,
                    duration_secs = self.duration_secs(),
                    "session ended"
                );
                Ok(())
            }
        }
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            Ok(())
        } else {
            Err(SessionError::NotInProgress { state: self.state })
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn attempted(&self) -> u32 {
        self.correct + self.incorrect
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }

    /// Fraction of attempted questions answered correctly, 0.0 when none attempted
    pub fn accuracy(&self) -> f64 {
        match self.attempted() {
            0 => 0.0,
            attempted => f64::from(self.correct) / f64::from(attempted),
        }
    }

    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }

    /// Whole seconds between start and end, 0 until the session has ended
    pub fn duration_secs(&self) -> u64 {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => end
                .duration_since(start)
                .unwrap_or(Duration::ZERO)
                .as_secs(),
            _ => 0,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            tier: self.tier,
            correct: self.correct,
            incorrect: self.incorrect,
            attempted: self.attempted(),
            total: self.total,
            accuracy_percent: self.accuracy_percent(),
            duration_secs: self.duration_secs(),
        }
    }
}

/// Snapshot for the stats screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub tier: Tier,
    pub correct: u32,
    pub incorrect: u32,
    pub attempted: u32,
    pub total: u32,
    pub accuracy_percent: u32,
    pub duration_secs: u64,
}

impl SessionSummary {
    /// Duration as m:ss
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }

    pub fn encouragement(&self) -> &'static str {
        match self.accuracy_percent {
            80.. => "Excellent work! You're making amazing progress!",
            60..=79 => "Good job! Keep practicing - you're doing great!",
            _ => "Keep going! Every practice makes you better!",
        }
    }
}
