//! Recording doubles for the transport, reset line and delay
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::convert::Infallible;

use display_interface::DisplayError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::interface::{BusWidth, PanelIo};

/// One transaction as seen by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tx {
    Param(u8, Vec<u8>),
    Color(Option<u8>, Vec<u8>),
}

/// Anything observable, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tx(Tx),
    Reset(bool),
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn transactions(log: &Log) -> Vec<Tx> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Tx(tx) => Some(tx.clone()),
            _ => None,
        })
        .collect()
}

/// Transport that records every attempted transaction and can be told
/// to fail the n-th one (0-based).
pub struct RecordingIo {
    pub log: Log,
    pub attempts: usize,
    pub fail_at: Option<usize>,
    pub width: BusWidth,
}

impl RecordingIo {
    pub fn new(log: &Log) -> Self {
        RecordingIo {
            log: log.clone(),
            attempts: 0,
            fail_at: None,
            width: BusWidth::Bits16,
        }
    }

    pub fn failing_at(log: &Log, n: usize) -> Self {
        RecordingIo {
            fail_at: Some(n),
            ..RecordingIo::new(log)
        }
    }

    fn record(&mut self, tx: Tx) -> Result<(), DisplayError> {
        let n = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(n) {
            return Err(DisplayError::BusWriteError);
        }
        self.log.borrow_mut().push(Event::Tx(tx));
        Ok(())
    }
}

impl PanelIo for RecordingIo {
    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.record(Tx::Param(cmd, params.to_vec()))
    }

    fn tx_color(&mut self, cmd: Option<u8>, data: &[u8]) -> Result<(), DisplayError> {
        self.record(Tx::Color(cmd, data.to_vec()))
    }

    fn bus_width(&self) -> BusWidth {
        self.width
    }
}

/// Reset line whose every transition fails
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = embedded_hal::digital::ErrorKind;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(embedded_hal::digital::ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(embedded_hal::digital::ErrorKind::Other)
    }
}

pub struct RecordingPin(pub Log);

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push(Event::Reset(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push(Event::Reset(true));
        Ok(())
    }
}

pub struct RecordingDelay(pub Log);

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Event::DelayMs(ms));
    }
}
