// scheduler.rs - Recurring timers on a dedicated tokio thread
//
// The timer thread only emits tokens. Grids are stepped on whichever thread
// drains the ticks, so simulation state never crosses threads.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::error::SchedulerError;
use crate::playback::{Tick, TimerFacility, TimerToken};

/// Called from the timer thread after each tick is queued.
pub type Wake = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
enum Command {
    Arm { token: TimerToken, period: Duration },
    Cancel { token: TimerToken },
}

/// A tick in the queue, plus the flag that keeps its timer from queueing another.
struct Queued {
    tick: Tick,
    pending: Arc<AtomicBool>,
}

/// UI-side handle: arms and cancels timers, drains their ticks.
///
/// Each timer has at most one tick queued; periods that elapse while it
/// sits undrained are dropped.
pub struct TokioTimers {
    next: u64,
    commands: UnboundedSender<Command>,
    ticks: UnboundedReceiver<Queued>,
}

/// Timer-side loop. Runs until every [`TokioTimers`] handle is dropped.
pub struct TimerService {
    commands: UnboundedReceiver<Command>,
    ticks: UnboundedSender<Queued>,
    wake: Wake,
}

/// Connected handle/service pair; the service still has to be driven.
pub fn channel(wake: Wake) -> (TokioTimers, TimerService) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let timers = TokioTimers {
        next: 0,
        commands: command_tx,
        ticks: tick_rx,
    };
    let service = TimerService {
        commands: command_rx,
        ticks: tick_tx,
        wake,
    };
    (timers, service)
}

impl TokioTimers {
    /// Starts a current-thread runtime on its own thread and serves timers there.
    pub fn spawn(wake: Wake) -> Result<Self, SchedulerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(SchedulerError::Runtime)?;

        let (timers, service) = channel(wake);
        thread::Builder::new()
            .name("life-timers".into())
            .spawn(move || runtime.block_on(service.run()))
            .map_err(SchedulerError::Thread)?;

        Ok(timers)
    }

    /// Next queued tick, without waiting.
    pub fn try_next_tick(&mut self) -> Option<Tick> {
        let queued = self.ticks.try_recv().ok()?;
        queued.pending.store(false, Ordering::Release);
        Some(queued.tick)
    }

    /// Every queued tick, each token at most once, in arrival order.
    ///
    /// Ticks from different timers can interleave with a tick that was
    /// re-queued mid-drain; duplicates collapse so a slow frame skips
    /// generations instead of replaying them.
    pub fn drain_ticks(&mut self) -> Vec<TimerToken> {
        let mut seen = HashSet::new();
        let mut tokens = Vec::new();
        while let Some(tick) = self.try_next_tick() {
            if seen.insert(tick.token) {
                tokens.push(tick.token);
            }
        }
        tokens
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("timer thread is gone; command dropped");
        }
    }
}

impl TimerFacility for TokioTimers {
    fn arm(&mut self, period: Duration) -> TimerToken {
        self.next += 1;
        let token = TimerToken(self.next);
        self.send(Command::Arm { token, period });
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.send(Command::Cancel { token });
    }
}

impl TimerService {
    pub async fn run(mut self) {
        let mut running: HashMap<TimerToken, JoinHandle<()>> = HashMap::new();

        while let Some(command) = self.commands.recv().await {
            match command {
                Command::Arm { token, period } => {
                    let task = tokio::spawn(recurring(token, period, self.ticks.clone(), self.wake.clone()));
                    if let Some(previous) = running.insert(token, task) {
                        previous.abort();
                    }
                }
                Command::Cancel { token } => {
                    if let Some(task) = running.remove(&token) {
                        task.abort();
                    }
                }
            }
            running.retain(|_, task| !task.is_finished());
        }

        for (_, task) in running {
            task.abort();
        }
        debug!("timer service stopped");
    }
}

async fn recurring(token: TimerToken, period: Duration, ticks: UnboundedSender<Queued>, wake: Wake) {
    let period = period.max(Duration::from_millis(1));
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let pending = Arc::new(AtomicBool::new(false));

    loop {
        interval.tick().await;
        if pending.swap(true, Ordering::AcqRel) {
            continue; // previous tick not drained yet
        }
        let queued = Queued {
            tick: Tick { token },
            pending: pending.clone(),
        };
        if ticks.send(queued).is_err() {
            break; // receiver dropped
        }
        wake();
    }
}
