use std::io::BufRead;

use kanal::{AsyncSender, Sender};
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Where search queries come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Words given on the command line
    Words(Vec<String>),
    Stdin,
}

impl From<Vec<String>> for InputSource {
    fn from(words: Vec<String>) -> Self {
        if words.is_empty() {
            InputSource::Stdin
        } else {
            InputSource::Words(words)
        }
    }
}

pub async fn watcher_io(
    source: InputSource,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match source {
        InputSource::Words(words) => {
            tracing::info!("Looking up {} word(s) from the command line", words.len());

            tokio::select! {
                result = send_words(words, &event_tx) => result?,
                _ = cancel.cancelled() => {
                    tracing::info!("Word feeder stopping");
                }
            }
        }
        InputSource::Stdin => {
            tracing::info!("Reading queries from stdin");

            // Detached: shutdown never waits on a blocked read
            let tx = event_tx.to_sync();
            std::thread::Builder::new()
                .name("lexis-stdin".to_string())
                .spawn(move || {
                    let stdin = std::io::stdin();
                    read_queries(stdin.lock(), &tx);
                    tracing::debug!("stdin reader stopping");
                })?;
        }
    }

    Ok(())
}

async fn send_words(words: Vec<String>, event_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    for word in words {
        event_tx.send(AppEvent::Search(word)).await?;
    }
    event_tx.send(AppEvent::InputClosed).await?;
    Ok(())
}

/// Forward lines as events until EOF, `:quit` or a closed channel
pub fn read_queries<R: BufRead>(reader: R, tx: &Sender<AppEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        let Some(event) = parse_line(&line) else {
            continue;
        };
        let quit = matches!(event, AppEvent::Quit);

        if tx.send(event).is_err() || quit {
            return;
        }
    }

    let _ = tx.send(AppEvent::InputClosed);
}

pub fn parse_line(line: &str) -> Option<AppEvent> {
    let trimmed = line.trim();

    match trimmed {
        "" => None,
        ":q" | ":quit" | ":exit" => Some(AppEvent::Quit),
        ":chart" => Some(AppEvent::ShowChart),
        ":json" => Some(AppEvent::DumpChart),
        _ => Some(AppEvent::Search(trimmed.to_string())),
    }
}
