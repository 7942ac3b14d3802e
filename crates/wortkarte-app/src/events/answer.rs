use wortkarte_core::answer::AnswerRejected;
use wortkarte_types::{AppEvent, OutcomeCard};

use crate::events::EventContext;

pub async fn handle_article_selection(
    ctx: &mut EventContext,
    article: String,
) -> anyhow::Result<()> {
    if !ctx.language().is_article(&article) {
        tracing::warn!("Not an article: '{}'", article);
        return Ok(());
    }

    let Some(active) = ctx.session.as_mut() else {
        tracing::debug!("Article selected without a session");
        return Ok(());
    };

    if active.quiz.select_article(&article) {
        tracing::debug!("Article '{}' selected", article);
        ctx.send(AppEvent::ArticleSelected(article)).await?;
    } else {
        tracing::debug!("Article '{}' ignored", article);
    }

    Ok(())
}

pub async fn handle_option_selection(ctx: &mut EventContext, index: usize) -> anyhow::Result<()> {
    let Some(active) = ctx.session.as_mut() else {
        tracing::debug!("Option selected without a session");
        return Ok(());
    };

    let outcome = match active.quiz.submit(index) {
        Ok(outcome) => outcome,
        Err(AnswerRejected::ArticleRequired) => {
            return ctx.send(AppEvent::ArticleRequired).await;
        }
        Err(AnswerRejected::AlreadyAnswered) => {
            tracing::debug!("Question already answered, ignoring option {}", index);
            return Ok(());
        }
        Err(AnswerRejected::SessionClosed) => {
            tracing::debug!("Session closed, ignoring option {}", index);
            return Ok(());
        }
        Err(e @ AnswerRejected::UnknownOption(_)) => {
            tracing::warn!("{}", e);
            return ctx.send(AppEvent::ShowError(e.to_string())).await;
        }
    };

    let number = active.quiz.question_number();
    let question = active.quiz.question().clone();
    let word = question.word().clone();
    tracing::info!(
        "Question {}: {:?} ({}/{})",
        number,
        outcome.verdict(),
        active.quiz.tracker().correct(),
        active.quiz.tracker().attempted()
    );

    // a token per question; next/end cancel it so a late example is never shown
    active.cancel_example();
    let token = ctx.cancel.child_token();
    active.example_token = Some(token.clone());

    ctx.send(AppEvent::ShowOutcome(OutcomeCard {
        number,
        question,
        outcome,
    }))
    .await?;

    let resolver = ctx.state.resolver.clone();
    let tx = ctx.app_to_ui_tx.clone();
    tokio::spawn(async move {
        let sentence = resolver
            .resolve(word.example_id.as_deref(), &word.translation, &word.word)
            .await;

        if token.is_cancelled() {
            tracing::debug!("Example for question {} arrived too late", number);
            return;
        }

        let _ = tx
            .send(AppEvent::ShowExample {
                question_number: number,
                sentence,
            })
            .await;
    });

    Ok(())
}
