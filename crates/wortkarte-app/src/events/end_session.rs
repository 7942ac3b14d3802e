use wortkarte_types::AppEvent;

use crate::events::EventContext;

pub async fn handle_end_session(ctx: &mut EventContext) -> anyhow::Result<()> {
    let Some(mut active) = ctx.session.take() else {
        tracing::debug!("End requested without a session");
        return ctx
            .send(AppEvent::ShowStart {
                selected: ctx.last_tier,
            })
            .await;
    };

    active.cancel_example();

    let summary = active.quiz.end()?;
    tracing::info!(
        "Session {} ended: {}/{} correct, {}% in {}s",
        summary.session_id,
        summary.correct,
        summary.attempted,
        summary.accuracy_percent,
        summary.duration_secs
    );

    ctx.send(AppEvent::ShowSummary(summary)).await
}

pub async fn handle_new_session(ctx: &mut EventContext) -> anyhow::Result<()> {
    if let Some(mut active) = ctx.session.take() {
        active.cancel_example();
    }

    ctx.send(AppEvent::ShowStart {
        selected: ctx.last_tier,
    })
    .await
}
