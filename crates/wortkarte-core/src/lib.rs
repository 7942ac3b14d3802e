pub mod answer;
pub mod error;
pub mod language;
pub mod preprocess;
pub mod question;
pub mod quiz;
pub mod session;
pub mod shuffle;
pub mod types;

pub use answer::{AnswerOutcome, AnswerRejected, AnswerState, Verdict, evaluate};
pub use error::{LoadError, SessionError, StoreError};
pub use language::LanguagePack;
pub use question::{QuizQuestion, generate, generate_question};
pub use quiz::QuizSession;
pub use session::{SessionState, SessionSummary, SessionTracker};
pub use types::{ExampleMap, Tier, VocabularyPool, Word};
