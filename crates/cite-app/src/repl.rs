use std::future::Future;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::events::{Flow, handle_command, parse_command};
use crate::session::Session;
use crate::ui;

/// Read commands from stdin until EOF, `:quit` or Ctrl+C
pub async fn run(session: &Session) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let mut stdout = io::stdout();

    if interactive {
        writeln!(stdout, "ISBN 引用生成器  (:help)")?;
        let state = session.snapshot().await;
        write!(stdout, "{}", ui::render_history(&state.history))?;
    }

    run_with(
        session,
        BufReader::new(tokio::io::stdin()),
        signal::ctrl_c(),
        interactive,
        &mut stdout,
    )
    .await
}

/// Command loop over `input`.
///
/// `interrupt` is polled for the whole loop, so one that fires while a
/// command runs ends the loop as soon as that command returns.
pub(crate) async fn run_with<R, I>(
    session: &Session,
    input: R,
    interrupt: I,
    prompt: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    I: Future<Output = io::Result<()>>,
{
    tokio::pin!(interrupt);
    let mut lines = input.lines();

    loop {
        if prompt {
            let state = session.snapshot().await;
            write!(out, "{}", ui::render_prompt(&state))?;
            out.flush()?;
        }

        let line = tokio::select! {
            biased;
            _ = &mut interrupt => {
                tracing::info!("Interrupted");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };

        let Some(command) = parse_command(&line) else {
            continue;
        };

        if handle_command(session, command, out).await? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
