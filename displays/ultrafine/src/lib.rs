//! High level hidapi abstraction for the LG UltraFine backlight interface
//!
//! UltraFine displays expose backlight control as a vendor HID interface
//! whose product string contains `BRIGHTNESS`. The brightness register is
//! read and written through 7-byte feature reports (see [`report`]) and only
//! accepts values from a fixed step table (see [`steps`]).

use hidapi::{HidApi, HidDevice};

use crate::report::{decode_brightness, encode_brightness, REPORT_SIZE};

pub mod error;
pub mod report;
pub mod steps;

pub use error::{Result, UltrafineError};

pub mod consts {
    /// LG's USB vendor id
    pub const VENDOR_ID: u16 = 0x043e;
    /// Substring of the product string naming the backlight interface
    pub const PRODUCT_TAG: &str = "BRIGHTNESS";
    /// Lowest register value the hardware accepts
    pub const MIN_BRIGHTNESS: u16 = 0x0190;
    /// Highest register value the hardware accepts
    pub const MAX_BRIGHTNESS: u16 = 0xd2f0;
}

/// Backlight read/write capability, the seam the interactive session and
/// its tests run over.
pub trait Backlight {
    fn brightness(&mut self) -> Result<u16>;
    fn set_brightness(&mut self, val: u16) -> Result<()>;
}

/// Details for one enumerated LG HID interface, as reported by hidapi.
#[derive(Debug, Clone)]
pub struct DeviceSummary {
    pub product_id: u16,
    pub path: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub product: String,
    pub release_number: u16,
    pub interface_number: i32,
    /// Whether this interface advertises the backlight product tag
    pub is_backlight: bool,
}

/// High level abstraction for managing an UltraFine backlight.
///
/// Owns the HID handle exclusively; the handle is released when the value
/// drops, on every exit path.
pub struct UltraFine {
    device: HidDevice,
    product: String,
}

impl UltraFine {
    /// Find and open the first backlight interface
    pub fn open() -> Result<Self> {
        let api = HidApi::new().map_err(UltrafineError::Init)?;
        let info = api
            .device_list()
            .find(|d| {
                d.vendor_id() == consts::VENDOR_ID
                    && d.product_string()
                        .is_some_and(|p| p.contains(consts::PRODUCT_TAG))
            })
            .ok_or(UltrafineError::DeviceNotFound)?;
        let device = info.open_device(&api).map_err(UltrafineError::Open)?;
        Ok(Self {
            device,
            product: info.product_string().unwrap_or("UltraFine").to_string(),
        })
    }

    /// Product string of the opened interface
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Read the current register value from the device
    pub fn brightness(&self) -> Result<u16> {
        let mut buf = [0u8; REPORT_SIZE];
        self.device.get_feature_report(&mut buf)?;
        Ok(decode_brightness(&buf))
    }

    /// Write a register value to the device
    pub fn set_brightness(&self, val: u16) -> Result<()> {
        self.device.send_feature_report(&encode_brightness(val))?;
        Ok(())
    }
}

impl Backlight for UltraFine {
    fn brightness(&mut self) -> Result<u16> {
        UltraFine::brightness(self)
    }

    fn set_brightness(&mut self, val: u16) -> Result<()> {
        UltraFine::set_brightness(self, val)
    }
}

/// Enumerate every LG HID interface currently connected
pub fn enumerate() -> Result<Vec<DeviceSummary>> {
    let api = HidApi::new().map_err(UltrafineError::Init)?;
    Ok(api
        .device_list()
        .filter(|d| d.vendor_id() == consts::VENDOR_ID)
        .map(|d| DeviceSummary {
            product_id: d.product_id(),
            path: d.path().to_string_lossy().into_owned(),
            serial_number: d.serial_number().unwrap_or_default().to_string(),
            manufacturer: d.manufacturer_string().unwrap_or_default().to_string(),
            product: d.product_string().unwrap_or_default().to_string(),
            release_number: d.release_number(),
            interface_number: d.interface_number(),
            is_backlight: d
                .product_string()
                .is_some_and(|p| p.contains(consts::PRODUCT_TAG)),
        })
        .collect())
}
