//! Line-oriented terminal front-end over a session controller.

mod input;
mod profile;
mod render;
mod setup;

use std::io::Write;

use northlight_chat::SessionController;
use northlight_common::SharedNotificationQueue;
use northlight_config::NorthlightConfig;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, info, warn};

use crate::cli::Args;

use input::InputEnd;
use profile::Profile;

/// Run one session until `/quit` or end of input.
pub(crate) async fn run(args: &Args, config: &NorthlightConfig) -> northlight_common::Result<()> {
    let toasts = SharedNotificationQueue::new(config.notifications.capacity as usize);
    let session = setup::build_session(
        args.mode,
        config,
        args.base_url.as_deref(),
        toasts.clone(),
    )?;
    let profile = Profile::for_mode(args.mode, config);

    render::print_header(&profile, &session.transcript());
    converse(
        session,
        toasts,
        profile,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        std::io::stderr(),
    )
    .await
}

/// Feed `input` to the session while a renderer task draws its events.
async fn converse<R, W, E>(
    session: SessionController,
    toasts: SharedNotificationQueue,
    profile: Profile,
    input: R,
    out: W,
    err: E,
) -> northlight_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
    E: Write + Send + 'static,
{
    let renderer = tokio::spawn(render::render_events(
        session.subscribe(),
        toasts,
        profile,
        out,
        err,
    ));

    let InputEnd { quit, mut in_flight } = input::read_lines(&session, input).await?;

    // On end of input let the last reply arrive; `/quit` leaves immediately.
    if !quit {
        if let Some(handle) = in_flight.take() {
            match handle.await {
                Ok(outcome) => debug!(?outcome, "Final submission settled"),
                Err(e) => warn!("Submission task failed: {e}"),
            }
        }
    }

    // Teardown publishes `Closed`, which lets the renderer finish its backlog.
    session.teardown();
    if let Some(handle) = in_flight {
        handle.abort();
    }
    if let Err(e) = renderer.await {
        warn!("Renderer task failed: {e}");
    }
    info!(session = %session.id(), messages = session.message_count(), "Session closed");
    Ok(())
}
