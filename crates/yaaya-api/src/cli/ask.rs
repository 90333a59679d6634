//! `yaaya ask`: one exchange from the terminal.

use crate::state::AppState;

/// Run `message` through the chat service and print the reply.
///
/// Uses a throwaway session, so nothing carries over between invocations.
pub async fn ask(state: &AppState, message: &str) -> anyhow::Result<()> {
    let reply = state.chat_service.handle(None, message).await?;
    tracing::debug!(source = ?reply.source, mode = state.mode(), "Reply ready");
    println!("{}", reply.reply);
    Ok(())
}
