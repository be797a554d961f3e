use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::model::TrackInfo;

/// Notifications sent by the synthesizer to its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthEvent {
    /// Playback of the current MIDI file began
    Started,

    /// The current MIDI file played to its end
    Ended,

    /// One track changed (program change, note on/off, ...)
    Updated(TrackInfo),

    /// Periodic progress while playing
    Playbacking { tick: u64 },
}

/// Fan-out of synth events to every subscriber
#[derive(Clone, Default)]
pub struct SynthEventBus {
    subscribers: Arc<Mutex<Vec<Sender<SynthEvent>>>>,
}

impl SynthEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self) -> Receiver<SynthEvent> {
        let (tx, rx) = unbounded::<SynthEvent>();
        {
            let mut subscribers = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.push(tx);
        }
        rx
    }

    /// Send to all live subscribers, dropping the disconnected ones
    pub fn publish(&self, event: SynthEvent) {
        log::trace!("Synth event: {:?}", event);
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus = SynthEventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(SynthEvent::Started);

        assert_eq!(a.try_recv().unwrap(), SynthEvent::Started);
        assert_eq!(b.try_recv().unwrap(), SynthEvent::Started);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let bus = SynthEventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(SynthEvent::Ended);

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), SynthEvent::Ended);
    }
}
