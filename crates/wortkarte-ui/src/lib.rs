use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;
use wortkarte_config::Config;
use wortkarte_types::AppEvent;

pub mod input;
pub mod render;
pub mod state;

pub use input::{hint, parse_input};
pub use render::Renderer;
pub use state::UiState;

/// Terminal front end on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let renderer = {
        let config = config.read().await;
        Renderer::new(&config)
    };

    run_ui(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        renderer,
        app_to_ui_rx,
        ui_to_app_tx,
    )
    .await
}

/// Drive the UI over any line source and writer until the app sends `Shutdown` or a
/// channel closes. End of input counts as `Quit`.
pub async fn run_ui<I, W>(
    input: I,
    mut output: W,
    renderer: Renderer,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state = UiState::default();
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] App channel closed");
                    break;
                };

                if matches!(event, AppEvent::Shutdown) {
                    tracing::debug!("[UI] Shutdown received");
                    break;
                }

                if !state.apply(&event) {
                    tracing::debug!("[UI] Dropping event for a question no longer shown");
                    continue;
                }

                if let Some(text) = renderer.render(&event) {
                    output.write_all(text.as_bytes()).await?;
                    output.flush().await?;
                }
            }
            line = lines.next_line(), if input_open => {
                let event = match line? {
                    Some(line) => match parse_input(&state, &line) {
                        Some(event) => event,
                        None => {
                            output.write_all(format!("{}\n", hint(&state)).as_bytes()).await?;
                            output.flush().await?;
                            continue;
                        }
                    },
                    None => {
                        tracing::debug!("[UI] Input closed");
                        input_open = false;
                        AppEvent::Quit
                    }
                };

                if ui_to_app_tx.send(event).await.is_err() {
                    tracing::debug!("[UI] App is gone");
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;
    use wortkarte_core::types::Tier;

    use super::*;

    #[tokio::test]
    async fn typed_lines_become_events() {
        let (app_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
        let (ui_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();

        app_tx
            .send(AppEvent::ShowStart { selected: Tier::A })
            .await
            .unwrap();

        let mut output = Vec::new();
        let input = BufReader::new(&b"x\nb\n"[..]);

        let driver = async {
            let first = ui_rx.recv().await.unwrap();
            let second = ui_rx.recv().await.unwrap();
            app_tx.send(AppEvent::Shutdown).await.unwrap();
            (first, second)
        };

        let (result, (first, second)) = timeout(Duration::from_secs(2), async {
            tokio::join!(
                run_ui(input, &mut output, Renderer::plain(), app_rx, ui_tx),
                driver
            )
        })
        .await
        .expect("ui loop did not stop");

        result.unwrap();
        assert!(matches!(first, AppEvent::StartSession(Tier::B)));
        assert!(matches!(second, AppEvent::Quit));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Type a, b or c"));
    }

    #[tokio::test]
    async fn closed_app_channel_ends_loop() {
        let (app_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
        let (ui_tx, _ui_rx) = kanal::unbounded_async::<AppEvent>();
        drop(app_tx);

        let mut output = Vec::new();
        let (_keep_open, reader) = tokio::io::duplex(64);

        let result = timeout(
            Duration::from_secs(2),
            run_ui(
                BufReader::new(reader),
                &mut output,
                Renderer::plain(),
                app_rx,
                ui_tx,
            ),
        )
        .await
        .expect("ui loop did not stop");

        assert!(result.is_ok());
    }
}
