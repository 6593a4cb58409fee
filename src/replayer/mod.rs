//! Replay Engine
//!
//! Consumes the command stream produced by the scanner, runs it through
//! the delayed-debounce queue and maintains the grid position. The
//! position is only meaningful once the stream, including the final
//! queue flush, has been fully processed.

pub mod delay_queue;
pub mod position;

pub use delay_queue::DelayQueue;
pub use position::{GridPosition, GRID_MAX, GRID_MIN};

use crate::scanner::{Command, FrameScanner};
use crate::Result;

/// Replays a filtered command stream onto a grid position.
pub struct MoveReplayer {
    queue: DelayQueue,
    position: GridPosition,
}

impl MoveReplayer {
    /// Create a replayer at the starting position with an empty queue.
    pub fn new() -> Self {
        MoveReplayer {
            queue: DelayQueue::new(),
            position: GridPosition::start(),
        }
    }

    /// Feed one command; returns the command applied this step, if any.
    pub fn feed(&mut self, command: Command) -> Option<Command> {
        let due = self.queue.ingest(command);
        if let Some(applied) = due {
            log::trace!("applying delayed command {:?}", applied);
            self.position.apply(applied);
        }
        due
    }

    /// Current position. Mid-stream values are for tracing only.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Drain the queue and return the final position.
    pub fn finish(self) -> GridPosition {
        let MoveReplayer {
            queue,
            mut position,
        } = self;
        for command in queue.flush() {
            log::trace!("flushing command {:?}", command);
            position.apply(command);
        }
        position
    }
}

impl Default for MoveReplayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay a complete transmission buffer and return the final position.
pub fn replay(data: &[u8]) -> Result<GridPosition> {
    let mut scanner = FrameScanner::new(data);
    let mut replayer = MoveReplayer::new();
    while let Some(command) = scanner.try_next()? {
        replayer.feed(command);
    }
    Ok(replayer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(commands: &[Command]) -> GridPosition {
        let mut replayer = MoveReplayer::new();
        for &command in commands {
            replayer.feed(command);
        }
        replayer.finish()
    }

    #[test]
    fn test_no_commands_keeps_start() {
        assert_eq!(feed_all(&[]), GridPosition::start());
    }

    #[test]
    fn test_short_stream_resolves_via_flush() {
        let pos = feed_all(&[Command::Right, Command::Right, Command::Down]);
        assert_eq!(pos, GridPosition { x: 2, y: 4 });
    }

    #[test]
    fn test_triple_cancels_entirely() {
        let pos = feed_all(&[Command::Up, Command::Up, Command::Up]);
        assert_eq!(pos, GridPosition::start());
    }

    #[test]
    fn test_run_of_four_applies_one() {
        let pos = feed_all(&[Command::Up; 4]);
        assert_eq!(pos, GridPosition { x: 0, y: 3 });
    }

    #[test]
    fn test_mixed_stream_applies_mid_flight() {
        // Fourth command evicts the first Up, which is applied before
        // the flush drains the rest.
        let mut replayer = MoveReplayer::new();
        replayer.feed(Command::Up);
        replayer.feed(Command::Right);
        replayer.feed(Command::Up);
        assert_eq!(replayer.feed(Command::Right), Some(Command::Up));
        assert_eq!(replayer.position(), GridPosition { x: 0, y: 3 });
        let pos = replayer.finish();
        assert_eq!(pos, GridPosition { x: 2, y: 2 });
    }
}
