use tokio::sync::broadcast;
use uuid::Uuid;

/// Store mutations are announced over a broadcast channel so a renderer can
/// redraw without polling the substrate. Sends with no listener are fine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    AccountRegistered(String),
    SessionStarted(String),
    SessionEnded,
    PostCreated(Uuid),
    PostDeleted(Uuid),
    // post, user, membership after the toggle
    PostLikeToggled(Uuid, String, bool),
}

pub type EventSender = broadcast::Sender<StoreEvent>;
pub type EventReceiver = broadcast::Receiver<StoreEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    broadcast::channel(16)
}

/// Drains whatever the receiver currently holds, looking for one event.
pub fn try_recv_contains(receiver: &mut EventReceiver, expected: StoreEvent) -> bool {
    while let Ok(event) = receiver.try_recv() {
        if event == expected {
            return true;
        }
    }
    false
}
