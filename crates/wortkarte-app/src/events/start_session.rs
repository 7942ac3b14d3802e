use wortkarte_core::quiz::QuizSession;
use wortkarte_core::types::Tier;
use wortkarte_types::AppEvent;

use crate::events::{ActiveSession, EventContext, question_card};

pub async fn handle_start_session(ctx: &mut EventContext, tier: Tier) -> anyhow::Result<()> {
    if let Some(mut previous) = ctx.session.take() {
        tracing::warn!("Replacing session {} without ending it", previous.quiz.tracker().id());
        previous.cancel_example();
    }
    ctx.last_tier = tier;

    let pool = match ctx.state.store.load(tier).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Cannot start level {}: {}", tier, e);
            ctx.send(AppEvent::ShowError(e.to_string())).await?;
            ctx.send(AppEvent::ShowStart { selected: tier }).await?;
            return Ok(());
        }
    };

    let quiz = QuizSession::start(pool)?;
    tracing::info!(
        "Session {} started at level {} with {} words",
        quiz.tracker().id(),
        tier,
        quiz.pool().len()
    );

    let card = question_card(ctx.language(), &quiz);
    ctx.session = Some(ActiveSession::new(quiz));
    ctx.send(AppEvent::ShowQuestion(card)).await
}
