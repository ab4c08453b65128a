//! ILI9486 Panel Driver Implementation
//!
//! [`Ili9486`] turns draw requests into the controller's wire protocol and
//! keeps the one piece of controller state the driver has to remember, the
//! MADCTL orientation register.
//!
//! ## Lifecycle
//!
//! 1. [`Ili9486::new`] binds a transport, an optional reset line and a delay,
//!    and allocates the RGB666 conversion buffer.
//! 1. [`Ili9486::reset`] pulses the reset line.
//! 1. [`Ili9486::init`] sends the fixed register sequence. Drawing before
//!    this has happened is a caller error; the driver does not track it.
//! 1. Any number of [`Ili9486::draw`], [`Ili9486::set_mirror`],
//!    [`Ili9486::set_swap_axes`], [`Ili9486::invert_color`] and
//!    [`Ili9486::display_power`] calls.
//! 1. Drop the panel, or [`Ili9486::release`] it to get the transport back.
//!
//! ## Blit protocol
//!
//! Every [`Ili9486::draw`] emits exactly four transactions:
//!
//! | # | Transaction | Channel |
//! |---|---|---|
//! | 1 | CASET + start/end coordinates | color |
//! | 2 | RASET + start/end coordinates | color |
//! | 3 | RAMWR | param |
//! | 4 | RGB666 payload, 3 bytes/pixel | color |
//!
//! The coordinates are laid out for [`PanelIo::bus_width`] and sent on the
//! color channel, which the transport never widens: 8 bytes with a zero pad
//! before each byte on a 16-bit bus, 4 plain bytes on an 8-bit one.
//!
//! The driver is not reentrant: the conversion buffer is reused by every
//! blit. Share a panel between tasks only behind an external lock.

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::cmd::Cmd;
use crate::color::{self, BYTES_PER_PIXEL};
use crate::config::PanelConfig;
use crate::error::{DisplayError, Error, Phase};
use crate::flag::Flag;
use crate::init::{InitStep, INIT_SEQUENCE};
use crate::interface::{BusWidth, PanelIo};
use crate::madctl::ModeRegister;

/// Opcode reported for failures that did not involve a command (ILI9486 NOP).
const NO_CMD: u8 = 0x00;

/// Placeholder for boards without a reset line.
///
/// With `None` as the reset pin, [`Ili9486::reset`] succeeds without doing anything.
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// ILI9486 panel instance
///
/// ## Type Parameters
///
/// - `IO` - command transport, owned or borrowed (`&mut T` works too)
/// - `RST` - reset output pin
/// - `DELAY` - delay provider for reset and init settle times
pub struct Ili9486<IO, RST, DELAY> {
    io: IO,
    rst: Option<RST>,
    delay: DELAY,
    x_gap: u16,
    y_gap: u16,
    width: u16,
    height: u16,
    mode: ModeRegister,
    /// Last inversion state sent; the controller holds the real one
    inverted: bool,
    /// RGB666 scratch, `capacity * 3` bytes, never resized
    conv_buf: Vec<u8>,
    capacity: usize,
}

impl<IO, RST, DELAY> Ili9486<IO, RST, DELAY>
where
    IO: PanelIo,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the panel. Nothing is sent to the controller.
    pub fn new(io: IO, rst: Option<RST>, delay: DELAY, config: PanelConfig) -> Result<Self, Error> {
        let capacity = config.max_transfer_pixels;
        if capacity == 0 {
            log::error!("conversion buffer capacity must be non-zero");
            return Err(Error::InvalidArgument);
        }
        let bytes = capacity
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(Error::InvalidArgument)?;

        let mut conv_buf = Vec::new();
        conv_buf.try_reserve_exact(bytes).map_err(|_| {
            log::error!("no memory for {} byte conversion buffer", bytes);
            Error::OutOfMemory
        })?;
        conv_buf.resize(bytes, 0);

        log::debug!(
            "creating new Ili9486 instance: {}x{}, gap ({}, {}), {} pixel buffer",
            config.width,
            config.height,
            config.x_gap,
            config.y_gap,
            capacity
        );

        Ok(Ili9486 {
            io,
            rst,
            delay,
            x_gap: config.x_gap,
            y_gap: config.y_gap,
            width: config.width,
            height: config.height,
            mode: ModeRegister::new(config.color_order),
            inverted: false,
            conv_buf,
            capacity,
        })
    }

    /// Pulse the reset line low then high. A no-op without a reset pin.
    pub fn reset(&mut self) -> Result<(), Error> {
        let Some(rst) = self.rst.as_mut() else {
            log::debug!("no reset line configured, skipping hardware reset");
            return Ok(());
        };

        log::info!("hardware reset");
        rst.set_low()
            .map_err(|_| Error::transport(NO_CMD, Phase::Reset)(DisplayError::RSError))?;
        self.delay.delay_ms(Flag::HW_RESET_PULSE_MS);
        rst.set_high()
            .map_err(|_| Error::transport(NO_CMD, Phase::Reset)(DisplayError::RSError))?;
        self.delay.delay_ms(Flag::HW_RESET_SETTLE_MS);
        Ok(())
    }

    /// Send the fixed initialization sequence.
    ///
    /// The first failing step aborts the sequence; the controller state is then
    /// unknown and the caller should reset and init again.
    pub fn init(&mut self) -> Result<(), Error> {
        log::info!("sending ILI9486 init sequence");
        for step in INIT_SEQUENCE {
            log::debug!("init step: {:?}", step);
            match *step {
                InitStep::Cmd(cmd) => self.send_init(cmd, &[])?,
                InitStep::CmdData(cmd, params) => self.send_init(cmd, params)?,
                InitStep::ModeRegister => {
                    let bits = self.mode.bits();
                    self.send_init(Cmd::MADCTL, &[bits])?;
                }
                InitStep::DelayMs(ms) => self.delay.delay_ms(ms),
            }
        }
        log::info!("init sequence complete");
        Ok(())
    }

    fn send_init(&mut self, cmd: u8, params: &[u8]) -> Result<(), Error> {
        self.io.tx_param(cmd, params).map_err(|e| {
            log::error!("init command 0x{:02X} failed: {:?}", cmd, e);
            Error::transport(cmd, Phase::Init)(e)
        })
    }

    /// Draw `pixels` (row-major RGB565) into the half-open rectangle
    /// `[x_start, x_end) x [y_start, y_end)`.
    ///
    /// Requests are validated before anything is sent: an empty or inverted
    /// rectangle, a pixel slice of the wrong length, or a window pushed past
    /// the 16-bit address space by the gap is [`Error::InvalidArgument`]; more
    /// pixels than the conversion buffer holds is [`Error::SizeLimitExceeded`].
    pub fn draw(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        pixels: &[u16],
    ) -> Result<(), Error> {
        if x_end <= x_start || y_end <= y_start {
            log::error!(
                "empty window x {}..{}, y {}..{}",
                x_start,
                x_end,
                y_start,
                y_end
            );
            return Err(Error::InvalidArgument);
        }

        let count = usize::from(x_end - x_start) * usize::from(y_end - y_start);
        if count > self.capacity {
            log::error!(
                "Flush too large! pixels={} max={}",
                count,
                self.capacity
            );
            return Err(Error::SizeLimitExceeded {
                requested: count,
                capacity: self.capacity,
            });
        }
        if pixels.len() != count {
            log::error!(
                "pixel buffer holds {} samples, window needs {}",
                pixels.len(),
                count
            );
            return Err(Error::InvalidArgument);
        }

        let width = self.io.bus_width();
        let caset =
            window_params(x_start, x_end, self.x_gap, width).ok_or(Error::InvalidArgument)?;
        let raset =
            window_params(y_start, y_end, self.y_gap, width).ok_or(Error::InvalidArgument)?;

        log::debug!(
            "draw: x {}..{}, y {}..{} ({} pixels)",
            x_start,
            x_end,
            y_start,
            y_end,
            count
        );

        self.io
            .tx_color(Some(Cmd::CASET), caset.as_bytes())
            .map_err(Error::transport(Cmd::CASET, Phase::ColumnSet))?;
        self.io
            .tx_color(Some(Cmd::RASET), raset.as_bytes())
            .map_err(Error::transport(Cmd::RASET, Phase::RowSet))?;

        let bytes = count * BYTES_PER_PIXEL;
        color::convert(pixels, &mut self.conv_buf[..bytes]);

        self.io
            .tx_param(Cmd::RAMWR, &[])
            .map_err(Error::transport(Cmd::RAMWR, Phase::MemoryWrite))?;
        self.io
            .tx_color(None, &self.conv_buf[..bytes])
            .map_err(Error::transport(Cmd::RAMWR, Phase::Payload))
    }

    /// Set mirror-X / mirror-Y. The register mirror only changes once the
    /// controller has accepted the new value.
    pub fn set_mirror(&mut self, x: bool, y: bool) -> Result<(), Error> {
        log::info!("mirror x={} y={}", x, y);
        self.write_mode(self.mode.with_mirror(x, y))
    }

    /// Set swap-axes. Same commit rule as [`Ili9486::set_mirror`].
    pub fn set_swap_axes(&mut self, swap: bool) -> Result<(), Error> {
        log::info!("swap axes={}", swap);
        self.write_mode(self.mode.with_swap_axes(swap))
    }

    fn write_mode(&mut self, next: ModeRegister) -> Result<(), Error> {
        self.io
            .tx_param(Cmd::MADCTL, &[next.bits()])
            .map_err(|e| {
                log::error!(
                    "MADCTL 0x{:02X} rejected, keeping 0x{:02X}: {:?}",
                    next.bits(),
                    self.mode.bits(),
                    e
                );
                Error::transport(Cmd::MADCTL, Phase::Mode)(e)
            })?;
        self.mode = next;
        Ok(())
    }

    /// Turn color inversion on or off
    pub fn invert_color(&mut self, invert: bool) -> Result<(), Error> {
        let cmd = if invert { Cmd::INVERT_ON } else { Cmd::INVERT_OFF };
        self.io
            .tx_param(cmd, &[])
            .map_err(Error::transport(cmd, Phase::Invert))?;
        self.inverted = invert;
        Ok(())
    }

    /// Turn the display output on or off
    pub fn display_power(&mut self, on: bool) -> Result<(), Error> {
        let cmd = if on { Cmd::DISPLAY_ON } else { Cmd::DISPLAY_OFF };
        self.io
            .tx_param(cmd, &[])
            .map_err(Error::transport(cmd, Phase::Power))
    }
}

impl<IO, RST, DELAY> Ili9486<IO, RST, DELAY> {
    /// Replace the coordinate offset. Takes effect on the next blit.
    pub fn set_gap(&mut self, x_gap: u16, y_gap: u16) {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
    }

    /// Current coordinate offset
    pub fn gap(&self) -> (u16, u16) {
        (self.x_gap, self.y_gap)
    }

    /// Current mode register mirror
    pub fn mode_register(&self) -> ModeRegister {
        self.mode
    }

    /// Whether inversion was last switched on
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Largest blit, in pixels
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drawable `(width, height)` in the current orientation
    pub fn resolution(&self) -> (u16, u16) {
        if self.mode.swap_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Tear down the panel, freeing the conversion buffer and handing back
    /// the transport, reset pin and delay untouched.
    pub fn release(self) -> (IO, Option<RST>, DELAY) {
        (self.io, self.rst, self.delay)
    }
}

/// CASET/RASET parameter block, laid out for the bus word width
struct Window {
    bytes: [u8; 8],
    len: usize,
}

impl Window {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Encode a CASET/RASET parameter block for `[start, end)` shifted by `gap`:
/// start and end-1 as big-endian 16-bit values. On a 16-bit bus each byte is
/// preceded by a zero pad byte. `None` if the shifted window leaves the
/// address space.
fn window_params(start: u16, end: u16, gap: u16, width: BusWidth) -> Option<Window> {
    let first = start.checked_add(gap)?;
    let last = end.checked_add(gap)?.checked_sub(1)?;
    let [first_hi, first_lo] = first.to_be_bytes();
    let [last_hi, last_lo] = last.to_be_bytes();
    Some(match width {
        BusWidth::Bits16 => Window {
            bytes: [0x00, first_hi, 0x00, first_lo, 0x00, last_hi, 0x00, last_lo],
            len: 8,
        },
        BusWidth::Bits8 => Window {
            bytes: [first_hi, first_lo, last_hi, last_lo, 0, 0, 0, 0],
            len: 4,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::madctl::ColorOrder;
    use crate::testing::{
        log, transactions, Event, FailingPin, Log, RecordingDelay, RecordingIo, RecordingPin, Tx,
    };
    use alloc::vec;

    type TestPanel = Ili9486<RecordingIo, RecordingPin, RecordingDelay>;

    fn panel_with(io: RecordingIo, log: &Log, config: PanelConfig) -> TestPanel {
        Ili9486::new(
            io,
            Some(RecordingPin(log.clone())),
            RecordingDelay(log.clone()),
            config,
        )
        .unwrap()
    }

    fn panel(log: &Log) -> TestPanel {
        panel_with(RecordingIo::new(log), log, PanelConfig::default())
    }

    #[test]
    fn rejects_zero_capacity() {
        let log = log();
        let result = Ili9486::new(
            RecordingIo::new(&log),
            None::<NoResetPin>,
            RecordingDelay(log.clone()),
            PanelConfig::default().with_max_transfer_pixels(0),
        );
        assert!(matches!(result, Err(Error::InvalidArgument)));
    }

    #[test]
    fn construction_sends_nothing() {
        let log = log();
        let panel = panel(&log);
        assert!(log.borrow().is_empty());
        assert_eq!(panel.capacity(), 320 * 80);
        assert_eq!(panel.mode_register().bits(), 0x48);
    }

    #[test]
    fn reset_pulses_low_then_high() {
        let log = log();
        let mut panel = panel(&log);
        panel.reset().unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Reset(false),
                Event::DelayMs(10),
                Event::Reset(true),
                Event::DelayMs(10),
            ]
        );
    }

    #[test]
    fn reset_line_failure_is_reported_without_waiting() {
        let log = log();
        let mut panel = Ili9486::new(
            RecordingIo::new(&log),
            Some(FailingPin),
            RecordingDelay(log.clone()),
            PanelConfig::default(),
        )
        .unwrap();

        assert_eq!(
            panel.reset(),
            Err(Error::Transport {
                cmd: 0x00,
                phase: Phase::Reset,
                source: DisplayError::RSError,
            })
        );
        // no pulse delay after the failed set_low
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reset_without_pin_is_a_no_op() {
        let log = log();
        let mut panel = Ili9486::new(
            RecordingIo::new(&log),
            None::<NoResetPin>,
            RecordingDelay(log.clone()),
            PanelConfig::default(),
        )
        .unwrap();
        panel.reset().unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn init_sends_the_fixed_sequence_with_delays() {
        let log = log();
        let mut panel = panel(&log);
        panel.init().unwrap();

        let events = log.borrow();
        assert_eq!(events[0], Event::Tx(Tx::Param(Cmd::SW_RESET, vec![])));
        assert_eq!(events[1], Event::DelayMs(120));
        assert_eq!(events[2], Event::Tx(Tx::Param(Cmd::SLEEP_OUT, vec![])));
        assert_eq!(events[3], Event::DelayMs(20));
        assert_eq!(events[4], Event::Tx(Tx::Param(0xB0, vec![0x00])));
        assert_eq!(events[5], Event::Tx(Tx::Param(0xB1, vec![0xB0, 0x11])));

        let tail = &events[events.len() - 4..];
        assert_eq!(
            tail,
            [
                Event::Tx(Tx::Param(Cmd::PIXEL_FORMAT, vec![0x66])),
                Event::Tx(Tx::Param(Cmd::MADCTL, vec![0x48])),
                Event::Tx(Tx::Param(Cmd::DISPLAY_ON, vec![])),
                Event::DelayMs(20),
            ]
        );
        // 15 register writes, 3 settle delays
        assert_eq!(events.len(), 18);
    }

    #[test]
    fn init_stops_at_first_failure() {
        let log = log();
        let mut panel = panel_with(RecordingIo::failing_at(&log, 2), &log, PanelConfig::default());

        let err = panel.init().unwrap_err();
        assert_eq!(
            err,
            Error::Transport {
                cmd: 0xB0,
                phase: Phase::Init,
                source: DisplayError::BusWriteError,
            }
        );
        // SW_RESET, delay, SLEEP_OUT, delay and nothing after the failed step
        assert_eq!(transactions(&log).len(), 2);
        let (io, _, _) = panel.release();
        assert_eq!(io.attempts, 3);
    }

    #[test]
    fn draw_emits_four_transactions_in_order() {
        let log = log();
        let mut panel = panel(&log);
        let pixels = [0xF800, 0x07E0, 0x001F, 0xFFFF, 0x0000, 0xF800];
        panel.draw(1, 2, 4, 4, &pixels).unwrap();

        assert_eq!(
            transactions(&log),
            vec![
                Tx::Color(Some(Cmd::CASET), vec![0, 0x00, 0, 0x01, 0, 0x00, 0, 0x03]),
                Tx::Color(Some(Cmd::RASET), vec![0, 0x00, 0, 0x02, 0, 0x00, 0, 0x03]),
                Tx::Param(Cmd::RAMWR, vec![]),
                Tx::Color(
                    None,
                    vec![
                        0xF8, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0xFC, 0xF8,
                        0x00, 0x00, 0x00, 0xF8, 0x00, 0x00,
                    ]
                ),
            ]
        );
    }

    #[test]
    fn draw_applies_gap_to_both_edges() {
        let log = log();
        let config = PanelConfig::default().with_gap(0x100, 3);
        let mut panel = panel_with(RecordingIo::new(&log), &log, config);
        panel.draw(0x10, 0, 0x12, 1, &[0, 0]).unwrap();

        let txs = transactions(&log);
        assert_eq!(
            txs[0],
            Tx::Color(Some(Cmd::CASET), vec![0, 0x01, 0, 0x10, 0, 0x01, 0, 0x11])
        );
        assert_eq!(
            txs[1],
            Tx::Color(Some(Cmd::RASET), vec![0, 0x00, 0, 0x03, 0, 0x00, 0, 0x03])
        );
    }

    #[test]
    fn eight_bit_bus_gets_unpadded_windows() {
        let log = log();
        let mut io = RecordingIo::new(&log);
        io.width = BusWidth::Bits8;
        let mut panel = panel_with(io, &log, PanelConfig::default().with_gap(0, 0x100));
        panel.draw(0, 0, 320, 1, &[0; 320]).unwrap();

        let txs = transactions(&log);
        assert_eq!(
            txs[0],
            Tx::Color(Some(Cmd::CASET), vec![0x00, 0x00, 0x01, 0x3F])
        );
        assert_eq!(
            txs[1],
            Tx::Color(Some(Cmd::RASET), vec![0x01, 0x00, 0x01, 0x00])
        );
        assert_eq!(txs.len(), 4);
    }

    #[test]
    fn set_gap_moves_following_blits() {
        let log = log();
        let mut panel = panel(&log);
        panel.set_gap(0, 0x20);
        assert_eq!(panel.gap(), (0, 0x20));
        panel.draw(0, 0, 1, 1, &[0]).unwrap();

        assert_eq!(
            transactions(&log)[1],
            Tx::Color(Some(Cmd::RASET), vec![0, 0x00, 0, 0x20, 0, 0x00, 0, 0x20])
        );
    }

    #[test]
    fn oversized_blit_sends_nothing() {
        let log = log();
        let config = PanelConfig::default().with_max_transfer_pixels(4);
        let mut panel = panel_with(RecordingIo::new(&log), &log, config);

        let pixels = [0u16; 6];
        let err = panel.draw(0, 0, 3, 2, &pixels).unwrap_err();
        assert_eq!(
            err,
            Error::SizeLimitExceeded {
                requested: 6,
                capacity: 4
            }
        );
        assert!(transactions(&log).is_empty());

        // exactly at capacity is fine
        panel.draw(0, 0, 2, 2, &pixels[..4]).unwrap();
        assert_eq!(transactions(&log).len(), 4);
    }

    #[test]
    fn malformed_blits_are_invalid_arguments() {
        let log = log();
        let mut panel = panel(&log);

        assert_eq!(panel.draw(5, 0, 5, 1, &[]), Err(Error::InvalidArgument));
        assert_eq!(panel.draw(0, 3, 1, 2, &[]), Err(Error::InvalidArgument));
        assert_eq!(panel.draw(0, 0, 2, 1, &[0]), Err(Error::InvalidArgument));

        panel.set_gap(1, 0);
        assert_eq!(
            panel.draw(u16::MAX - 1, 0, u16::MAX, 1, &[0]),
            Err(Error::InvalidArgument)
        );
        assert!(transactions(&log).is_empty());
    }

    #[test]
    fn draw_stops_at_the_failed_transaction() {
        let phases = [
            (Cmd::CASET, Phase::ColumnSet),
            (Cmd::RASET, Phase::RowSet),
            (Cmd::RAMWR, Phase::MemoryWrite),
            (Cmd::RAMWR, Phase::Payload),
        ];
        for (n, (cmd, phase)) in phases.into_iter().enumerate() {
            let log = log();
            let mut panel =
                panel_with(RecordingIo::failing_at(&log, n), &log, PanelConfig::default());

            let err = panel.draw(0, 0, 2, 2, &[0; 4]).unwrap_err();
            assert_eq!(
                err,
                Error::Transport {
                    cmd,
                    phase,
                    source: DisplayError::BusWriteError
                }
            );
            let (io, _, _) = panel.release();
            assert_eq!(io.attempts, n + 1, "failure at step {}", n + 1);
        }
    }

    #[test]
    fn mirror_and_swap_touch_only_their_bits() {
        let log = log();
        let mut panel = panel(&log);
        let base = panel.mode_register().bits();

        panel.set_mirror(true, false).unwrap();
        panel.set_swap_axes(true).unwrap();

        let bits = panel.mode_register().bits();
        assert_eq!(bits, base | 0x40 | 0x20);
        assert_eq!(bits & 0x80, 0);
        assert_eq!(
            transactions(&log),
            vec![
                Tx::Param(Cmd::MADCTL, vec![0x48]),
                Tx::Param(Cmd::MADCTL, vec![0x68]),
            ]
        );
    }

    #[test]
    fn failed_mode_write_keeps_previous_register() {
        let log = log();
        let mut panel = panel_with(RecordingIo::failing_at(&log, 1), &log, PanelConfig::default());

        panel.set_swap_axes(true).unwrap();
        let before = panel.mode_register();

        let err = panel.set_mirror(false, true).unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                cmd: Cmd::MADCTL,
                phase: Phase::Mode,
                ..
            }
        ));
        assert_eq!(panel.mode_register(), before);

        // next init re-sends the register the controller actually holds
        panel.init().unwrap();
        let madctl: Vec<Tx> = transactions(&log)
            .into_iter()
            .filter(|tx| matches!(tx, Tx::Param(Cmd::MADCTL, _)))
            .collect();
        assert_eq!(
            madctl,
            vec![
                Tx::Param(Cmd::MADCTL, vec![0x68]),
                Tx::Param(Cmd::MADCTL, vec![0x68]),
            ]
        );
    }

    #[test]
    fn rgb_order_survives_orientation_changes() {
        let log = log();
        let config = PanelConfig::default().with_color_order(ColorOrder::Rgb);
        let mut panel = panel_with(RecordingIo::new(&log), &log, config);

        panel.set_mirror(false, true).unwrap();
        panel.set_swap_axes(true).unwrap();
        assert_eq!(panel.mode_register().bits(), 0x80 | 0x20);
    }

    #[test]
    fn invert_and_power_are_single_commands() {
        let log = log();
        let mut panel = panel(&log);
        panel.invert_color(true).unwrap();
        assert!(panel.is_inverted());
        panel.invert_color(false).unwrap();
        panel.display_power(false).unwrap();
        panel.display_power(true).unwrap();

        assert_eq!(
            transactions(&log),
            vec![
                Tx::Param(0x21, vec![]),
                Tx::Param(0x20, vec![]),
                Tx::Param(0x28, vec![]),
                Tx::Param(0x29, vec![]),
            ]
        );
        assert_eq!(panel.mode_register().bits(), 0x48);
    }

    #[test]
    fn resolution_follows_swap_axes() {
        let log = log();
        let mut panel = panel(&log);
        assert_eq!(panel.resolution(), (320, 480));
        panel.set_swap_axes(true).unwrap();
        assert_eq!(panel.resolution(), (480, 320));
    }
}
