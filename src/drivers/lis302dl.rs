//! LIS302DL 3-axis MEMS accelerometer driver (SPI, mode 3).
//!
//! Generic over any [`SpiDevice`] so the same driver runs against the real
//! `esp-idf-hal` SPI bus on hardware and a scripted register map in tests.
//! Axis registers are signed 8-bit at ±2 g full scale.

use embedded_hal::spi::SpiDevice;

use crate::app::ports::AxisSample;
use crate::error::SensorError;

const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL_REG1: u8 = 0x20;
const REG_CTRL_REG2: u8 = 0x21;
const REG_CTRL_REG3: u8 = 0x22;
const REG_OUT_X: u8 = 0x29;
const REG_OUT_Y: u8 = 0x2B;
const REG_OUT_Z: u8 = 0x2D;

/// Address bit 7 set selects a register read.
const READ_FLAG: u8 = 0x80;

/// Fixed WHO_AM_I response for the LIS302DL die.
const CHIP_ID: u8 = 0x3B;

/// CTRL_REG1: device active, 100 Hz data rate, X/Y axes enabled.
const CTRL_REG1_ACTIVE: u8 = 0x43;

pub struct Lis302dl<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Lis302dl<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Probe the chip identity and bring the device out of power-down.
    ///
    /// Must complete before [`read_axes`](Self::read_axes) returns valid
    /// data.
    pub fn init(&mut self) -> Result<(), SensorError> {
        let id = self.read_reg(REG_WHO_AM_I)?;
        if id != CHIP_ID {
            return Err(SensorError::WrongChipId(id));
        }

        self.write_reg(REG_CTRL_REG1, CTRL_REG1_ACTIVE)?;
        self.write_reg(REG_CTRL_REG2, 0x00)?;
        self.write_reg(REG_CTRL_REG3, 0x00)?;
        Ok(())
    }

    /// One sample of all three axes, raw signed counts.
    pub fn read_axes(&mut self) -> Result<AxisSample, SensorError> {
        let x = self.read_reg(REG_OUT_X)? as i8;
        let y = self.read_reg(REG_OUT_Y)? as i8;
        let z = self.read_reg(REG_OUT_Z)? as i8;
        Ok(AxisSample { x, y, z })
    }

    fn read_reg(&mut self, addr: u8) -> Result<u8, SensorError> {
        let mut buf = [addr | READ_FLAG, 0x00];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(|_| SensorError::BusFault)?;
        Ok(buf[1])
    }

    fn write_reg(&mut self, addr: u8, value: u8) -> Result<(), SensorError> {
        self.spi
            .write(&[addr, value])
            .map_err(|_| SensorError::BusFault)
    }
}
