use anyhow::anyhow;

use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::{prelude::*, text::Text};

use esp_idf_svc::hal::delay::{Delay, FreeRtos};
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::spi;

use ili9486::pins::{Pins, PIXEL_CLOCK_HZ};
use ili9486::prelude::*;

/// Packed RGB565 from 8-bit channels
const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Fill `[x0, x1) x [y0, y1)` one row per blit, through the generic panel interface.
fn fill_rows<P: Panel>(
    panel: &mut P,
    row: &mut Vec<u16>,
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
    color: u16,
) -> Result<(), P::Error> {
    row.clear();
    row.resize(usize::from(x1 - x0), color);
    for y in y0..y1 {
        panel.draw_bitmap(x0, y, x1, y + 1, &row[..])?;
    }
    Ok(())
}

/// Six equal horizontal bands: R, G, B, Y, C, M
fn color_bars<P: Panel>(panel: &mut P, width: u16, height: u16) -> Result<(), P::Error> {
    let bands = [
        rgb565(255, 0, 0),
        rgb565(0, 255, 0),
        rgb565(0, 0, 255),
        rgb565(255, 255, 0),
        rgb565(0, 255, 255),
        rgb565(255, 0, 255),
    ];
    let band = height / bands.len() as u16;
    let mut row = Vec::with_capacity(usize::from(width));
    for (i, color) in bands.into_iter().enumerate() {
        let y0 = band * i as u16;
        fill_rows(panel, &mut row, 0, y0, width, y0 + band, color)?;
    }
    Ok(())
}

/// Four equal vertical bands: R, G, B, W
fn vertical_bars<P: Panel>(panel: &mut P, width: u16, height: u16) -> Result<(), P::Error> {
    let bands = [
        rgb565(255, 0, 0),
        rgb565(0, 255, 0),
        rgb565(0, 0, 255),
        rgb565(255, 255, 255),
    ];
    let band = width / bands.len() as u16;
    let mut row = Vec::with_capacity(usize::from(band));
    for (i, color) in bands.into_iter().enumerate() {
        let x0 = band * i as u16;
        fill_rows(panel, &mut row, x0, 0, x0 + band, height, color)?;
    }
    Ok(())
}

/// Red at the top fading to blue at the bottom, one row per blit
fn gradient<P: Panel>(panel: &mut P, width: u16, height: u16) -> Result<(), P::Error> {
    let mut row = Vec::with_capacity(usize::from(width));
    let last = u32::from(height.max(2) - 1);
    for y in 0..height {
        let val = (u32::from(y) * 255 / last) as u8;
        fill_rows(panel, &mut row, 0, y, width, y + 1, rgb565(val, 0, 255 - val))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().expect("Could not take peripherals");
    let pins = peripherals.pins;

    log::info!(
        "Initialize SPI bus: SCK={} MOSI={} CS={} DC={} RST={} BL={}",
        Pins::SCK,
        Pins::MOSI,
        Pins::CS,
        Pins::DC,
        Pins::RST,
        Pins::BACKLIGHT
    );
    let spi = spi::SpiDeviceDriver::new_single(
        peripherals.spi2,
        pins.gpio18,                    // SCK - Pins::SCK
        pins.gpio23,                    // MOSI - Pins::MOSI
        Option::<gpio::AnyIOPin>::None, // write-only bus
        Some(pins.gpio5),               // CS - Pins::CS
        &spi::SpiDriverConfig::new().dma(spi::Dma::Auto(4096)),
        &spi::SpiConfig::new().baudrate(PIXEL_CLOCK_HZ.Hz().into()),
    )?;

    let dc = gpio::PinDriver::output(pins.gpio21)?; // Pins::DC
    let rst = gpio::PinDriver::output(pins.gpio22)?; // Pins::RST
    let mut backlight = gpio::PinDriver::output(pins.gpio4)?; // Pins::BACKLIGHT

    // keep the backlight off while the controller comes up
    backlight.set_low()?;

    log::info!("Install ILI9486 panel driver");
    let iface = SpiInterface::new(spi, dc, BusWidth::Bits16);
    let mut panel = Ili9486::new(iface, Some(rst), Delay::default(), PanelConfig::default())
        .map_err(|e| anyhow!("Panel create failed: {}", e))?;

    panel
        .reset()
        .map_err(|e| anyhow!("Panel reset failed: {}", e))?;
    panel
        .init()
        .map_err(|e| anyhow!("Panel init failed: {}", e))?;
    panel
        .display_power(true)
        .map_err(|e| anyhow!("Display on failed: {}", e))?;

    backlight.set_high()?;
    log::info!("ILI9486 initialization complete");

    // Full screen solid colours
    for (name, color) in [
        ("WHITE", Rgb565::WHITE),
        ("RED", Rgb565::RED),
        ("GREEN", Rgb565::GREEN),
        ("BLUE", Rgb565::BLUE),
    ] {
        log::info!("{}", name);
        panel
            .clear(color)
            .map_err(|e| anyhow!("Fill {} failed: {}", name, e))?;
        FreeRtos::delay_ms(2000);
    }
    log::info!("VISUAL CHECK: full screen changed colour 4 times");
    log::info!("  RED shows as BLUE -> wrong color order (MADCTL bit 3)");
    log::info!("  Only top strip    -> RASET addressing wrong");

    // Horizontal colour bars
    let (width, height) = panel.resolution();
    color_bars(&mut panel, width, height)
        .map_err(|e| anyhow!("Colour bars failed: {}", e))?;
    log::info!("VISUAL CHECK: 6 equal bands R/G/B/Y/C/M top to bottom");
    FreeRtos::delay_ms(3000);

    // Vertical colour bars
    vertical_bars(&mut panel, width, height)
        .map_err(|e| anyhow!("Vertical bars failed: {}", e))?;
    log::info!("VISUAL CHECK: 4 equal vertical bands R/G/B/W left to right");
    log::info!("  Wrong width -> CASET addressing wrong");
    FreeRtos::delay_ms(3000);

    // Full screen gradient
    gradient(&mut panel, width, height).map_err(|e| anyhow!("Gradient failed: {}", e))?;
    log::info!("VISUAL CHECK: smooth red to blue gradient top to bottom");
    log::info!("  Banding      -> RASET byte order wrong");
    log::info!("  Wrong colour -> color order or RGB666 conversion wrong");
    FreeRtos::delay_ms(3000);

    // Single pixel at origin
    panel
        .clear(Rgb565::BLACK)
        .map_err(|e| anyhow!("Clear failed: {}", e))?;
    panel
        .draw(0, 0, 1, 1, &[rgb565(255, 0, 0)])
        .map_err(|e| anyhow!("Pixel failed: {}", e))?;
    log::info!("VISUAL CHECK: ONE red dot top-left on black");
    FreeRtos::delay_ms(2000);

    // Orientation: marker block and label in the logical top-left corner
    let label = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
    for (swap, mirror_x, mirror_y) in [
        (false, true, false),
        (false, false, true),
        (true, false, false),
        (true, true, true),
    ] {
        panel
            .set_swap_axes(swap)
            .and_then(|_| panel.set_mirror(mirror_x, mirror_y))
            .map_err(|e| anyhow!("Orientation change failed: {}", e))?;
        log::info!(
            "swap={} mirror_x={} mirror_y={} MADCTL=0x{:02X}",
            swap,
            mirror_x,
            mirror_y,
            panel.mode_register().bits()
        );

        panel
            .clear(Rgb565::BLACK)
            .map_err(|e| anyhow!("Clear failed: {}", e))?;
        Rectangle::new(Point::zero(), Size::new(40, 40))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::YELLOW))
            .draw(&mut panel)
            .map_err(|e| anyhow!("Marker failed: {}", e))?;
        Text::new("ILI9486", Point::new(50, 30), label)
            .draw(&mut panel)
            .map_err(|e| anyhow!("Label failed: {}", e))?;
        FreeRtos::delay_ms(3000);
    }

    // back to the power-on orientation
    panel
        .set_swap_axes(false)
        .and_then(|_| panel.set_mirror(true, false))
        .map_err(|e| anyhow!("Orientation reset failed: {}", e))?;

    log::info!("Colour inversion on / off");
    panel
        .invert_color(true)
        .map_err(|e| anyhow!("Invert failed: {}", e))?;
    FreeRtos::delay_ms(2000);
    panel
        .invert_color(false)
        .map_err(|e| anyhow!("Invert failed: {}", e))?;

    log::info!("Display off / on");
    panel
        .display_power(false)
        .map_err(|e| anyhow!("Display off failed: {}", e))?;
    FreeRtos::delay_ms(1000);
    panel
        .display_power(true)
        .map_err(|e| anyhow!("Display on failed: {}", e))?;

    log::info!("Test card complete");
    Ok(())
}
