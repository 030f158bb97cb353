/*!
 * Live progress reporting for treeclip
 *
 * A minimum-interval repaint loop that redraws the walk counters and the
 * partially-built tree in place while the scanner runs.
 */

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{cursor, queue, terminal};
use tokio::task::{self, JoinHandle};
use tokio::time::{self, Instant};

use crate::types::{SharedContext, SharedTree};
use crate::writer::render_tree;

/// Refresh interval for the live status view.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Rows kept free below the status block so a repaint never scrolls the
/// terminal.
const BOTTOM_MARGIN: u16 = 4;

/// Repeats an action with a fixed minimum spacing between invocations.
///
/// A slow action delays the next round rather than overlapping it. `stop`
/// cancels a pending wait; an invocation that already started runs to
/// completion but gets no successor.
pub struct Ticker {
    interval: Duration,
    stopped: Rc<Cell<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stopped: Rc::new(Cell::new(false)),
            handle: None,
        }
    }

    /// Begin the loop: the action runs immediately, then again after
    /// `max(interval - elapsed, 0)` each round. Any previously pending loop
    /// is cancelled. Must run inside a `tokio::task::LocalSet`.
    pub fn start<F>(&mut self, mut action: F)
    where
        F: FnMut() + 'static,
    {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.stopped.set(false);

        let stopped = Rc::clone(&self.stopped);
        let interval = self.interval;
        self.handle = Some(task::spawn_local(async move {
            loop {
                if stopped.get() {
                    break;
                }
                let started = Instant::now();
                action();
                time::sleep(interval.saturating_sub(started.elapsed())).await;
            }
        }));
    }

    /// Prevent any further invocation and cancel a pending wait.
    pub fn stop(&mut self) {
        self.stopped.set(true);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Paints the walk counters and as much of the tree as fits the terminal,
/// rewinding the cursor over the previous frame each round.
pub struct StatusReporter {
    tree: SharedTree,
    ctx: SharedContext,
    /// Lines painted by the previous frame, for the next cursor-up
    lines_written: u16,
}

impl StatusReporter {
    pub fn new(tree: SharedTree, ctx: SharedContext) -> Self {
        Self {
            tree,
            ctx,
            lines_written: 0,
        }
    }

    /// Redraw the status block over the previous one.
    pub fn repaint(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.lines_written > 0 {
            queue!(
                stdout,
                cursor::MoveUp(self.lines_written),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        }

        let rows = terminal::size().map(|(_, rows)| rows).unwrap_or(24);
        let line_budget = rows.saturating_sub(BOTTOM_MARGIN).max(1) as usize;

        let header = {
            let ctx = self.ctx.borrow();
            format!(
                "processed: {}  ignored: {}  queued: {}",
                ctx.processed, ctx.ignored, ctx.queued
            )
        };
        let body = {
            let tree = self.tree.borrow();
            render_tree(&tree, tree.root(), true)
        };

        let mut written: u16 = 1;
        writeln!(stdout, "{header}")?;
        for line in body.lines().take(line_budget - 1) {
            writeln!(stdout, "{line}")?;
            written += 1;
        }
        stdout.flush()?;
        self.lines_written = written;
        Ok(())
    }
}
