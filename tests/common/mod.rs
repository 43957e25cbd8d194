//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use unipolar_stepper::motion::Pattern;
use unipolar_stepper::{LineProvider, MonotonicClock};

/// Every level written to any line, in order, as `(line id, level)`.
pub type WriteLog = Rc<RefCell<Vec<(u8, bool)>>>;

/// Write failure injected by a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFault;

impl embedded_hal::digital::Error for LineFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output line appending to a shared write log.
pub struct RecordingLine {
    pub id: u8,
    writes: WriteLog,
    faulty: Rc<Cell<bool>>,
    released: Rc<RefCell<Vec<u8>>>,
}

impl RecordingLine {
    fn record(&mut self, level: bool) -> Result<(), LineFault> {
        if self.faulty.get() {
            return Err(LineFault);
        }
        self.writes.borrow_mut().push((self.id, level));
        Ok(())
    }
}

impl ErrorType for RecordingLine {
    type Error = LineFault;
}

impl OutputPin for RecordingLine {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false)
    }
}

impl Drop for RecordingLine {
    fn drop(&mut self) {
        self.released.borrow_mut().push(self.id);
    }
}

/// Acquisition failure reported by [`Bench`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchError {
    /// Line is reserved and cannot be claimed.
    Busy(u8),
}

/// Line provider handing out recording lines.
#[derive(Default)]
pub struct Bench {
    pub writes: WriteLog,
    pub faulty: Rc<Cell<bool>>,
    pub claimed: Rc<RefCell<Vec<u8>>>,
    pub released: Rc<RefCell<Vec<u8>>>,
    pub busy: Vec<u8>,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to hand out `line`.
    pub fn with_busy(mut self, line: u8) -> Self {
        self.busy.push(line);
        self
    }

    /// Build four lines directly, bypassing acquisition.
    pub fn lines(&self, ids: [u8; 4]) -> [RecordingLine; 4] {
        ids.map(|id| self.line(id))
    }

    fn line(&self, id: u8) -> RecordingLine {
        RecordingLine {
            id,
            writes: self.writes.clone(),
            faulty: self.faulty.clone(),
            released: self.released.clone(),
        }
    }

    /// Make every subsequent write fail, or succeed again.
    pub fn set_faulty(&self, faulty: bool) {
        self.faulty.set(faulty);
    }

    /// All writes so far, grouped into four-line patterns in write order.
    pub fn patterns(&self) -> Vec<Pattern> {
        self.writes
            .borrow()
            .chunks(4)
            .map(|chunk| {
                let mut pattern = [false; 4];
                for (i, (_, level)) in chunk.iter().enumerate() {
                    pattern[i] = *level;
                }
                pattern
            })
            .collect()
    }

    /// Forget the writes so far.
    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }

    /// Number of phase writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    /// Last level written to each of `ids`, or `None` if never written.
    pub fn levels(&self, ids: [u8; 4]) -> [Option<bool>; 4] {
        let writes = self.writes.borrow();
        ids.map(|id| writes.iter().rev().find(|(line, _)| *line == id).map(|(_, level)| *level))
    }
}

impl LineProvider for Bench {
    type Line = RecordingLine;
    type Error = BenchError;

    fn acquire(&mut self, line: u8) -> Result<Self::Line, Self::Error> {
        if self.busy.contains(&line) {
            return Err(BenchError::Busy(line));
        }
        self.claimed.borrow_mut().push(line);
        Ok(self.line(line))
    }
}

/// Simulated clock advancing a fixed tick per reading.
#[derive(Clone)]
pub struct SimClock {
    pub now: Rc<Cell<Duration>>,
    tick: Duration,
}

impl SimClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            now: Rc::new(Cell::new(Duration::ZERO)),
            tick,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

impl MonotonicClock for SimClock {
    fn now(&mut self) -> Duration {
        let reading = self.now.get();
        self.now.set(reading + self.tick);
        reading
    }
}

/// Clock fast enough that dwell never dominates a test.
pub fn sim_clock() -> SimClock {
    SimClock::new(Duration::from_micros(100))
}
