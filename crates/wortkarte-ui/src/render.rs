use std::fmt::Write;

use wortkarte_config::Config;
use wortkarte_core::answer::{AnswerOutcome, Verdict};
use wortkarte_core::session::SessionSummary;
use wortkarte_core::types::Tier;
use wortkarte_lang_german::Article;
use wortkarte_types::{AppEvent, OutcomeCard, QuestionCard};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Turns app events into terminal text
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    clear_screen: bool,
    show_romanization: bool,
    show_plural: bool,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            color: config.ui.color,
            clear_screen: config.ui.clear_screen,
            show_romanization: config.quiz.show_romanization,
            show_plural: config.quiz.show_plural,
        }
    }

    /// No escapes, every optional line shown
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            show_romanization: true,
            show_plural: true,
        }
    }

    /// Text for `event`, or `None` if it has no visible effect
    pub fn render(&self, event: &AppEvent) -> Option<String> {
        let text = match event {
            AppEvent::ShowStart { selected } => self.start(*selected),
            AppEvent::ShowQuestion(card) => self.question(card),
            AppEvent::ArticleSelected(article) => {
                format!(
                    "Article: {}. Now choose the translation.\n",
                    self.article(article)
                )
            }
            AppEvent::ArticleRequired => {
                format!("{}\n", self.paint(YELLOW, "Choose an article first."))
            }
            AppEvent::ShowOutcome(card) => self.outcome(card),
            AppEvent::ShowExample { sentence, .. } => {
                format!("  {} {}\n", self.paint(DIM, "Example:"), sentence)
            }
            AppEvent::ShowSummary(summary) => self.summary(summary),
            AppEvent::ShowError(message) => {
                format!("{} {}\n", self.paint(RED, "Error:"), message)
            }
            _ => return None,
        };

        Some(text)
    }

    fn start(&self, selected: Tier) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", self.paint(BOLD, "Choose your level"));

        for tier in Tier::ALL {
            let marker = if tier == selected { '>' } else { ' ' };
            let _ = writeln!(
                out,
                " {} [{}] {} {}",
                marker,
                tier.as_str().to_lowercase(),
                tier.label(),
                tier.description()
            );
        }

        out
    }

    fn question(&self, card: &QuestionCard) -> String {
        let mut out = String::new();
        if self.clear_screen {
            out.push_str(CLEAR);
        }

        let question = &card.question;
        let word = question.word();

        let _ = writeln!(out, "\nQuestion {}", card.number);
        let _ = write!(out, "  {}", self.paint(BOLD, &word.word));
        if self.show_romanization {
            if let Some(romanization) = &word.romanization {
                let _ = write!(out, " ({})", romanization);
            }
        }
        out.push('\n');

        if question.is_article_question() {
            let articles: Vec<String> = card.articles.iter().map(|a| self.article(a)).collect();
            let _ = writeln!(out, "  Article: {}", articles.join(" / "));
        }

        for (i, option) in question.options().iter().enumerate() {
            let _ = writeln!(out, "  {}) {}", i + 1, option);
        }

        out
    }

    fn outcome(&self, card: &OutcomeCard) -> String {
        let outcome = &card.outcome;
        let word = card.question.word();
        let mut out = String::new();

        let color = if outcome.is_correct() { GREEN } else { RED };
        let _ = writeln!(out, "{}", self.paint(color, outcome.feedback()));

        out.push_str("  ");
        match word.article.as_deref() {
            Some(article) if word.requires_article() => {
                let _ = write!(out, "{} {}", self.article(article), word.word);
            }
            _ => out.push_str(&word.word),
        }
        let _ = write!(out, " = {}", card.question.correct_answer());
        if let Some(gender) = word
            .article
            .as_deref()
            .and_then(Article::from_str)
            .map(|article| article.gender())
        {
            let _ = write!(out, " ({})", gender);
        }
        out.push('\n');

        if let Some(line) = self.mistakes(outcome) {
            let _ = writeln!(out, "  {}", line);
        }

        if self.show_plural {
            if let Some(plural) = &word.plural {
                let _ = writeln!(out, "  Plural: {}", plural);
            }
        }

        out
    }

    fn mistakes(&self, outcome: &AnswerOutcome) -> Option<String> {
        let chosen_article = outcome.selected_article().unwrap_or("-");

        match outcome.verdict() {
            Verdict::BothCorrect => None,
            Verdict::TranslationWrong => {
                Some(format!("You chose: {}", outcome.selected_translation()))
            }
            Verdict::ArticleWrong => Some(format!("You chose: {}", chosen_article)),
            Verdict::BothWrong if outcome.article_required() => Some(format!(
                "You chose: {} {}",
                chosen_article,
                outcome.selected_translation()
            )),
            Verdict::BothWrong => Some(format!("You chose: {}", outcome.selected_translation())),
        }
    }

    fn summary(&self, summary: &SessionSummary) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", self.paint(BOLD, "Session complete"));
        let _ = writeln!(out, "  Level:     {}", summary.tier.label());
        let _ = writeln!(out, "  Correct:   {}", summary.correct);
        let _ = writeln!(out, "  Incorrect: {}", summary.incorrect);
        let _ = writeln!(out, "  Questions: {}", summary.total);
        let _ = writeln!(out, "  Accuracy:  {}%", summary.accuracy_percent);
        let _ = writeln!(out, "  Time:      {}", summary.duration_display());
        let _ = writeln!(out, "{}", summary.encouragement());

        out
    }

    fn article(&self, article: &str) -> String {
        match Article::from_str(article) {
            Some(known) => self.paint(known.ansi_color(), article),
            None => article.to_string(),
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}
