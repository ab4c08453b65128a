//! Command transport between the driver and the controller
//!
//! The driver only ever needs two kinds of transaction:
//!
//! - [`PanelIo::tx_param`]: an opcode followed by a handful of register
//!   parameters, sent at the bus's command width.
//! - [`PanelIo::tx_color`]: an optional opcode followed by a long payload,
//!   sent verbatim. Pixel data and, on this controller, window coordinates
//!   travel this way.
//!
//! [`SpiInterface`] drives the usual SPI + D/C wiring. [`DataCommandIo`]
//! wraps anything that already implements
//! [`display_interface::WriteOnlyDataCommand`].
use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

/// Most short parameters a single [`PanelIo::tx_param`] call carries.
/// The longest fixed register write (gamma tables) is 15 bytes.
pub const MAX_PARAMS: usize = 32;

/// Byte-oriented command/parameter channel to the controller.
pub trait PanelIo {
    /// Send `cmd` followed by short register parameters.
    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), DisplayError>;

    /// Send `cmd` (if any) followed by `data` on the color channel, unmodified.
    fn tx_color(&mut self, cmd: Option<u8>, data: &[u8]) -> Result<(), DisplayError>;

    /// Word width the controller sees for commands and parameters.
    ///
    /// Parameters sent over the color channel (window coordinates) have to
    /// be laid out for this width by the caller.
    fn bus_width(&self) -> BusWidth;
}

impl<T: PanelIo + ?Sized> PanelIo for &mut T {
    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), DisplayError> {
        T::tx_param(self, cmd, params)
    }

    fn tx_color(&mut self, cmd: Option<u8>, data: &[u8]) -> Result<(), DisplayError> {
        T::tx_color(self, cmd, data)
    }

    fn bus_width(&self) -> BusWidth {
        T::bus_width(self)
    }
}

/// Width of one command/parameter word on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusWidth {
    /// Plain 4-wire SPI, one byte per command or parameter
    Bits8,
    /// 16-bit parallel bus fed by shift registers: every command and
    /// parameter byte goes out as a big-endian word `[0x00, byte]`
    #[default]
    Bits16,
}

/// SPI connection with a Data/Command select line
///
pub struct SpiInterface<SPI, DC> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Command and parameter word width
    width: BusWidth,
}

impl<SPI, DC> SpiInterface<SPI, DC> {
    /// Create the interface. Nothing is sent until the driver asks for it.
    pub fn new(spi: SPI, dc: DC, width: BusWidth) -> Self {
        SpiInterface { spi, dc, width }
    }

    /// Hand back the SPI device and D/C pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Basic function for sending commands
    fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        let result = match self.width {
            BusWidth::Bits8 => self.spi.write(&[command]),
            BusWidth::Bits16 => self.spi.write(&[0x00, command]),
        };
        result.map_err(|e| {
            log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
            DisplayError::BusWriteError
        })
    }

    /// Basic function for sending an array of u8-values of data over spi
    fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(data)
            .map_err(|_| DisplayError::BusWriteError)
    }
}

impl<SPI, DC> PanelIo for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), DisplayError> {
        if params.len() > MAX_PARAMS {
            return Err(DisplayError::InvalidFormatError);
        }
        self.cmd(cmd)?;
        if params.is_empty() {
            return Ok(());
        }

        match self.width {
            BusWidth::Bits8 => self.data(params),
            BusWidth::Bits16 => {
                let mut words = [0u8; MAX_PARAMS * 2];
                for (word, &byte) in words.chunks_exact_mut(2).zip(params) {
                    word[1] = byte;
                }
                self.data(&words[..params.len() * 2])
            }
        }
    }

    fn tx_color(&mut self, cmd: Option<u8>, data: &[u8]) -> Result<(), DisplayError> {
        if let Some(cmd) = cmd {
            self.cmd(cmd)?;
        }
        self.data(data)
    }

    fn bus_width(&self) -> BusWidth {
        self.width
    }
}

/// Adapter for an existing `display-interface` implementation
/// (display-interface-spi, display-interface-parallel-gpio, ...).
///
/// Those interfaces are byte wide, so this behaves like [`BusWidth::Bits8`].
pub struct DataCommandIo<DI> {
    di: DI,
}

impl<DI> DataCommandIo<DI> {
    /// Wrap a display interface
    pub fn new(di: DI) -> Self {
        DataCommandIo { di }
    }

    /// Hand back the wrapped interface
    pub fn release(self) -> DI {
        self.di
    }
}

impl<DI: WriteOnlyDataCommand> PanelIo for DataCommandIo<DI> {
    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.di.send_commands(DataFormat::U8(&[cmd]))?;
        if params.is_empty() {
            return Ok(());
        }
        self.di.send_data(DataFormat::U8(params))
    }

    fn tx_color(&mut self, cmd: Option<u8>, data: &[u8]) -> Result<(), DisplayError> {
        if let Some(cmd) = cmd {
            self.di.send_commands(DataFormat::U8(&[cmd]))?;
        }
        self.di.send_data(DataFormat::U8(data))
    }

    fn bus_width(&self) -> BusWidth {
        BusWidth::Bits8
    }
}
