use crate::Orientation;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type SubscriptionId = u64;

/// Tracks the accelerometer and notifies subscribers of orientation changes.
///
/// A notification is sent only when the orientation really changes to a defined value, so a
/// sensor repeating itself or dropping to `Undefined` stays silent.
#[derive(Debug, Default)]
pub struct OrientationManager {
    has_accelerometer: bool,
    orientation: Orientation,
    subscribers: Vec<(SubscriptionId, UnboundedSender<Orientation>)>,
    next_id: SubscriptionId,
}

/// The receiving end of one subscriber. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    receiver: UnboundedReceiver<Orientation>,
}

impl Subscription {
    pub async fn recv(&mut self) -> Option<Orientation> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<Orientation> {
        self.receiver.try_recv().ok()
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl OrientationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_accelerometer(&self) -> bool {
        self.has_accelerometer
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn subscribe(&mut self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, sender));
        Subscription { id, receiver }
    }

    /// Cancels `subscription` right away instead of waiting for it to be dropped.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(id, _)| *id != subscription.id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// The sensor appeared or went away. Losing it resets the orientation without notifying.
    pub fn set_has_accelerometer(&mut self, has_accelerometer: bool) {
        self.has_accelerometer = has_accelerometer;
        if !has_accelerometer {
            self.orientation = Orientation::Undefined;
        }
        tracing::debug!("Accelerometer present: {}", has_accelerometer);
    }

    /// A reading from the sensor. Ignored while there is no accelerometer.
    pub fn sensor_update(&mut self, orientation: Orientation) {
        if !self.has_accelerometer || orientation == self.orientation {
            return;
        }
        self.orientation = orientation;
        if orientation == Orientation::Undefined {
            return;
        }
        tracing::debug!("Orientation changed to {}", orientation);
        // Subscribers whose receiver is gone are dropped here.
        self.subscribers
            .retain(|(_, sender)| sender.send(orientation).is_ok());
    }
}
