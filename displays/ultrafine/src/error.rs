use hidapi::HidError;

pub type Result<T> = std::result::Result<T, UltrafineError>;

/// Errors from locating or talking to the backlight interface.
///
/// `Init`, `DeviceNotFound` and `Open` are fatal to the caller; a `Hid`
/// transport error only fails the single transaction that raised it.
#[derive(Debug, thiserror::Error)]
pub enum UltrafineError {
    #[error("failed to initialize hidapi: {0}")]
    Init(#[source] HidError),

    #[error("no UltraFine backlight device found")]
    DeviceNotFound,

    #[error("unable to open device: {0}")]
    Open(#[source] HidError),

    #[error("hid error: {0}")]
    Hid(#[from] HidError),
}
