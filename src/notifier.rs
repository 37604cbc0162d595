//! Result notifiers that hand outcomes to async consumers.

use strictly_gomoku::{Outcome, ResultNotifier};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Forwards each outcome over an unbounded channel, logging it on the way.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    outcome_tx: mpsc::UnboundedSender<Outcome>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        (Self { outcome_tx }, outcome_rx)
    }
}

impl ResultNotifier for ChannelNotifier {
    fn notify(&mut self, outcome: Outcome) {
        info!(%outcome, "Game finished");
        if self.outcome_tx.send(outcome).is_err() {
            warn!(%outcome, "Outcome receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_gomoku::Player;

    #[test]
    fn test_outcome_reaches_receiver() {
        let (mut notifier, mut outcome_rx) = ChannelNotifier::channel();
        notifier.notify(Outcome::Tie);
        notifier.notify(Outcome::WonBy(Player::White));
        assert_eq!(outcome_rx.try_recv(), Ok(Outcome::Tie));
        assert_eq!(outcome_rx.try_recv(), Ok(Outcome::WonBy(Player::White)));
    }

    #[test]
    fn test_dropped_receiver_is_tolerated() {
        let (mut notifier, outcome_rx) = ChannelNotifier::channel();
        drop(outcome_rx);
        notifier.notify(Outcome::Tie);
    }
}
