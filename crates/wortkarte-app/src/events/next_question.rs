use wortkarte_types::AppEvent;

use crate::events::{EventContext, question_card};

pub async fn handle_next_question(ctx: &mut EventContext) -> anyhow::Result<()> {
    let Some(active) = ctx.session.as_mut() else {
        tracing::debug!("Next question without a session");
        return Ok(());
    };

    active.cancel_example();

    if let Err(e) = active.quiz.next_question() {
        tracing::warn!("Cannot advance: {}", e);
        return Ok(());
    }

    let card = question_card(ctx.state.language().as_ref(), &active.quiz);
    ctx.send(AppEvent::ShowQuestion(card)).await
}
