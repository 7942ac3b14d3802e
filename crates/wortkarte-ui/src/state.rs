use wortkarte_core::types::Tier;
use wortkarte_types::{AppEvent, Screen};

/// What the terminal currently shows, rebuilt from app events
#[derive(Debug, Clone)]
pub struct UiState {
    pub screen: Screen,
    pub selected_tier: Tier,
    pub articles: Vec<String>,
    pub option_count: usize,
    /// Question on screen, 0 before the first one
    pub question_number: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            selected_tier: Tier::default(),
            articles: Vec::new(),
            option_count: 0,
            question_number: 0,
        }
    }
}

impl UiState {
    /// Update from an app event. Returns false when the event belongs to a question that
    /// is no longer on screen and should not be drawn.
    pub fn apply(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::ShowStart { selected } => {
                self.screen = Screen::Start;
                self.selected_tier = *selected;
                self.question_number = 0;
            }
            AppEvent::ShowQuestion(card) => {
                self.screen = Screen::Question {
                    article_required: card.question.is_article_question(),
                };
                self.articles = card.articles.clone();
                self.option_count = card.question.options().len();
                self.question_number = card.number;
            }
            AppEvent::ShowOutcome(card) => {
                if card.number != self.question_number {
                    return false;
                }
                self.screen = Screen::Answered;
            }
            AppEvent::ShowExample {
                question_number, ..
            } => {
                return self.screen == Screen::Answered && *question_number == self.question_number;
            }
            AppEvent::ShowSummary(_) => {
                self.screen = Screen::Summary;
                self.articles.clear();
                self.option_count = 0;
            }
            _ => {}
        }

        true
    }
}
