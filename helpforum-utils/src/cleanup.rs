use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::debug;
use twilight_http::Client;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

/// Delay before the "pinned a message" system notice is removed.
pub const PIN_NOTICE_TTL: Duration = Duration::from_secs(10);

/// Delete a message once `delay` has elapsed.
///
/// Runs detached; a message that is already gone is not an error.
pub fn schedule_message_delete(
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    delay: Duration,
) {
    tokio::spawn(async move {
        sleep(delay).await;

        if let Err(source) = http.delete_message(channel_id, message_id).await {
            debug!(
                ?source,
                channel_id = channel_id.get(),
                message_id = message_id.get(),
                "delayed message delete failed"
            );
        }
    });
}
