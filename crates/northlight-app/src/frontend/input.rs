//! Reads typed lines and hands them to the session one query at a time.

use northlight_chat::{SessionController, SubmitOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

const QUIT_COMMAND: &str = "/quit";
const BUSY_HINT: &str = "(still waiting for the previous reply)";

/// How reading stopped, and the last submission that was accepted.
pub(crate) struct InputEnd {
    pub quit: bool,
    pub in_flight: Option<JoinHandle<SubmitOutcome>>,
}

/// Submit each non-blank line until `/quit` or end of input.
///
/// This loop is the only submitter, so an unfinished task means a query
/// is in flight even before that task has first been polled.
pub(crate) async fn read_lines<R>(
    session: &SessionController,
    reader: R,
) -> std::io::Result<InputEnd>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut in_flight: Option<JoinHandle<SubmitOutcome>> = None;

    while let Some(line) = lines.next_line().await? {
        if line.trim() == QUIT_COMMAND {
            return Ok(InputEnd {
                quit: true,
                in_flight,
            });
        }
        if in_flight.as_ref().is_some_and(|task| !task.is_finished()) {
            eprintln!("{BUSY_HINT}");
            continue;
        }

        session.set_input(line);
        if !session.can_submit() {
            continue;
        }
        let text = session.pending_input();
        let submitter = session.clone();
        in_flight = Some(tokio::spawn(async move { submitter.submit(text).await }));
    }

    Ok(InputEnd {
        quit: false,
        in_flight,
    })
}
