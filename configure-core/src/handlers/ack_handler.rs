use crate::config::Config;
use crate::errors::{Escalation, ProtocolViolation};
use crate::models::{Handle, ResolvedGeometry, SurfaceWindow, WindowHandle};
use crate::transmit::ConfigureSink;
use crate::{resolver, Negotiator, Serial};

/// What an ack did to a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledged {
    /// The configuration that won.
    pub serial: Serial,
    /// Older configurations dropped unapplied, oldest first.
    pub superseded: Vec<Serial>,
    /// The geometry applied to the window.
    pub geometry: ResolvedGeometry,
}

impl<H, C, SINK> Negotiator<H, C, SINK>
where
    H: Handle,
    C: Config,
    SINK: ConfigureSink<H>,
{
    /// Handles a client's ack of `serial` for `handle`.
    ///
    /// On success the winning configuration is resolved against the buffer the window has
    /// committed, applied to `window` and released.
    ///
    /// # Errors
    ///
    /// Returns the [`ProtocolViolation`] when the ack does not name a pending configuration.
    /// Deciding what to do about the client is left to the caller, see [`Self::escalation`].
    pub fn acknowledge(
        &mut self,
        handle: &WindowHandle<H>,
        serial: Serial,
        window: &mut impl SurfaceWindow,
    ) -> Result<Acknowledged, ProtocolViolation> {
        let result = match self.queues.get_mut(handle) {
            Some(queue) => queue.acknowledge(serial),
            None => Err(ProtocolViolation::UnknownWindow { serial }),
        };
        let resolution = match result {
            Ok(resolution) => resolution,
            Err(violation) => {
                if self.escalation(&violation) != Escalation::Ignore {
                    tracing::warn!("Client of {:?} misbehaved: {}", handle, violation);
                }
                return Err(violation);
            }
        };

        let committed = window.committed_buffer_size();
        let geometry = resolver::resolve(&*window, &resolution.won, committed);
        window.apply_geometry(&geometry);
        tracing::debug!(
            "Configure {} won for {:?}, applied {:?}",
            resolution.won.serial(),
            handle,
            geometry
        );

        Ok(Acknowledged {
            serial: resolution.won.serial(),
            superseded: resolution.superseded,
            geometry,
        })
    }

    /// What the configured policy says should happen to a client over `violation`.
    pub fn escalation(&self, violation: &ProtocolViolation) -> Escalation {
        self.config.violation_policy().escalate(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gravity, MoveResizeFlags, Rect, Size, Surface};

    const WINDOW: WindowHandle<i32> = WindowHandle(7);

    #[test]
    fn ack_picks_the_winner_and_applies_it() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::new(Rect::new(0, 0, 100, 100));
        let s1 = negotiator.propose_relative(WINDOW, 0, 0, 10, 10, 1).unwrap();
        let s2 = negotiator.propose_relative(WINDOW, 0, 0, 20, 20, 1).unwrap();
        let s3 = negotiator.propose_relative(WINDOW, 0, 0, 30, 30, 1).unwrap();

        surface.commit_buffer(Size::new(20, 20));
        let acked = negotiator.acknowledge(&WINDOW, s2, &mut surface).unwrap();

        assert_eq!(acked.serial, s2);
        assert_eq!(acked.superseded, vec![s1]);
        assert_eq!(surface.rect, Rect::new(0, 0, 20, 20));
        assert_eq!(negotiator.queue(&WINDOW).unwrap().head(), Some(s3));
        assert_eq!(negotiator.pending_len(&WINDOW), 1);
    }

    #[test]
    fn unknown_serial_is_reported_and_nothing_changes() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::new(Rect::new(0, 0, 100, 100));
        negotiator.propose_empty(WINDOW);
        negotiator.propose_empty(WINDOW);
        let elsewhere = negotiator.propose_empty(WindowHandle(8)).unwrap();

        let err = negotiator
            .acknowledge(&WINDOW, elsewhere, &mut surface)
            .unwrap_err();
        assert_eq!(err, ProtocolViolation::ForeignSerial { serial: elsewhere });
        assert_eq!(negotiator.pending_len(&WINDOW), 2);
        assert_eq!(surface.rect, Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn ack_for_a_window_that_never_negotiated() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::default();
        let serial = negotiator.propose_empty(WINDOW).unwrap();
        let err = negotiator
            .acknowledge(&WindowHandle(99), serial, &mut surface)
            .unwrap_err();
        assert_eq!(err, ProtocolViolation::UnknownWindow { serial });
        assert_eq!(negotiator.escalation(&err), Escalation::Log);
    }

    #[test]
    fn acking_twice_is_a_violation() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::new(Rect::new(0, 0, 100, 100));
        let serial = negotiator.propose_empty(WINDOW).unwrap();
        negotiator.acknowledge(&WINDOW, serial, &mut surface).unwrap();
        assert_eq!(
            negotiator.acknowledge(&WINDOW, serial, &mut surface),
            Err(ProtocolViolation::StaleSerial { serial })
        );
    }

    #[test]
    fn applied_serials_never_go_backwards() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::new(Rect::new(0, 0, 100, 100));
        let old = negotiator.propose_relative(WINDOW, 0, 0, 10, 10, 1).unwrap();
        let new = negotiator.propose_relative(WINDOW, 0, 0, 20, 20, 1).unwrap();
        negotiator.acknowledge(&WINDOW, new, &mut surface).unwrap();
        assert!(negotiator.acknowledge(&WINDOW, old, &mut surface).is_err());
        assert_eq!(negotiator.queue(&WINDOW).unwrap().last_won(), Some(new));
    }

    #[test]
    fn gravity_is_applied_when_the_move_resize_wins() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::new(Rect::new(0, 0, 100, 100));
        let serial = negotiator.propose_move_resize(
            WINDOW,
            &surface,
            0,
            0,
            50,
            50,
            1,
            MoveResizeFlags::RESIZE_ACTION,
            Gravity::SouthEast,
        )
        .unwrap();
        surface.commit_buffer(Size::new(50, 50));
        let acked = negotiator.acknowledge(&WINDOW, serial, &mut surface).unwrap();
        assert_eq!(acked.geometry.rect(), Rect::new(50, 50, 50, 50));
        assert_eq!(surface.rect, Rect::new(50, 50, 50, 50));
    }
}
