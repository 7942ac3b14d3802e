use wortkarte_core::answer::AnswerOutcome;
use wortkarte_core::question::QuizQuestion;
use wortkarte_core::session::SessionSummary;
use wortkarte_core::types::Tier;

#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> app
    StartSession(Tier),
    SelectArticle(String),
    /// Zero-based index into the question's options
    SelectOption(usize),
    NextQuestion,
    EndSession,
    NewSession,
    Quit,

    // app -> UI
    BackendReady,
    ShowStart {
        selected: Tier,
    },
    ShowQuestion(QuestionCard),
    ArticleSelected(String),
    ArticleRequired,
    ShowOutcome(OutcomeCard),
    ShowExample {
        question_number: u32,
        sentence: String,
    },
    ShowSummary(SessionSummary),
    ShowError(String),
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct QuestionCard {
    /// 1-based position in the session
    pub number: u32,
    pub question: QuizQuestion,
    /// Article choices, empty unless the question asks for one
    pub articles: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OutcomeCard {
    pub number: u32,
    pub question: QuizQuestion,
    pub outcome: AnswerOutcome,
}

/// Which screen the UI is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Question { article_required: bool },
    Answered,
    Summary,
}
