use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wortkarte_core::language::LanguagePack;
use wortkarte_core::quiz::QuizSession;
use wortkarte_core::types::Tier;
use wortkarte_types::{AppEvent, QuestionCard};

use crate::state::AppState;

pub mod answer;
pub mod end_session;
pub mod next_question;
pub mod start_session;

use answer::{handle_article_selection, handle_option_selection};
use end_session::{handle_end_session, handle_new_session};
use next_question::handle_next_question;
use start_session::handle_start_session;

/// The quiz in progress plus the example lookup for the question on screen
pub struct ActiveSession {
    pub quiz: QuizSession,
    /// Cancelled once the question it was started for leaves the screen
    pub example_token: Option<CancellationToken>,
}

impl ActiveSession {
    pub fn new(quiz: QuizSession) -> Self {
        Self {
            quiz,
            example_token: None,
        }
    }

    /// Drop any example still being resolved for the current question
    pub fn cancel_example(&mut self) {
        if let Some(token) = self.example_token.take() {
            token.cancel();
        }
    }
}

/// Per-loop state shared by the handlers
pub struct EventContext {
    pub state: Arc<AppState>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
    pub cancel: CancellationToken,
    pub session: Option<ActiveSession>,
    /// Tier of the last session, preselected on the start screen
    pub last_tier: Tier,
}

impl EventContext {
    pub fn language(&self) -> &dyn LanguagePack {
        self.state.language().as_ref()
    }

    pub async fn send(&self, event: AppEvent) -> anyhow::Result<()> {
        self.app_to_ui_tx.send(event).await?;
        Ok(())
    }
}

/// Card for the question on screen. Articles are only offered for article questions.
pub fn question_card(language: &dyn LanguagePack, quiz: &QuizSession) -> QuestionCard {
    let question = quiz.question().clone();
    let articles = if question.is_article_question() {
        language
            .articles()
            .iter()
            .map(|article| article.to_string())
            .collect()
    } else {
        Vec::new()
    };

    QuestionCard {
        number: quiz.question_number(),
        question,
        articles,
    }
}

/// Whether the loop keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let last_tier = state.config.read().await.quiz.default_tier;

    let mut ctx = EventContext {
        state,
        app_to_ui_tx,
        cancel,
        session: None,
        last_tier,
    };

    ctx.send(AppEvent::BackendReady).await?;
    ctx.send(AppEvent::ShowStart {
        selected: ctx.last_tier,
    })
    .await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = ctx.cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        if handle_events(&mut ctx, event).await? == Flow::Quit {
            break;
        }
    }

    if let Some(active) = ctx.session.as_mut() {
        active.cancel_example();
    }

    Ok(())
}

pub async fn handle_events(ctx: &mut EventContext, event: AppEvent) -> anyhow::Result<Flow> {
    match event {
        AppEvent::StartSession(tier) => {
            handle_start_session(ctx, tier).await?;
        }
        AppEvent::SelectArticle(article) => {
            handle_article_selection(ctx, article).await?;
        }
        AppEvent::SelectOption(index) => {
            handle_option_selection(ctx, index).await?;
        }
        AppEvent::NextQuestion => {
            handle_next_question(ctx).await?;
        }
        AppEvent::EndSession => {
            handle_end_session(ctx).await?;
        }
        AppEvent::NewSession => {
            handle_new_session(ctx).await?;
        }
        AppEvent::Quit => {
            tracing::info!("Quit requested");
            let _ = ctx.send(AppEvent::Shutdown).await;
            return Ok(Flow::Quit);
        }
        AppEvent::BackendReady
        | AppEvent::ShowStart { .. }
        | AppEvent::ShowQuestion(_)
        | AppEvent::ArticleSelected(_)
        | AppEvent::ArticleRequired
        | AppEvent::ShowOutcome(_)
        | AppEvent::ShowExample { .. }
        | AppEvent::ShowSummary(_)
        | AppEvent::ShowError(_)
        | AppEvent::Shutdown => {
            // UI-only event, ignore in backend
        }
    }

    Ok(Flow::Continue)
}
