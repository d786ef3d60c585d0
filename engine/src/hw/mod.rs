#[cfg(target_os = "macos")]
pub mod coreaudio;
pub mod lockscreen;
pub mod traits;

use self::traits::{AudioHost, DeviceId};

#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub id: DeviceId,

    pub name: String,

    pub output_channels: u32,

    pub nominal_sample_rate: Option<f64>,
}

/// Audio queries against the real host platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformHost;

#[cfg(target_os = "macos")]
impl AudioHost for PlatformHost {
    fn device_ids(&self) -> Vec<DeviceId> {
        coreaudio::device_ids().unwrap_or_default()
    }

    fn device_name(&self, id: DeviceId) -> Option<String> {
        coreaudio::device_name(id)
    }

    fn nominal_sample_rate(&self, id: DeviceId) -> Option<f64> {
        coreaudio::nominal_sample_rate(id)
    }
}

// No audio backend elsewhere; every probe degrades to "not found".
#[cfg(not(target_os = "macos"))]
impl AudioHost for PlatformHost {
    fn device_ids(&self) -> Vec<DeviceId> {
        Vec::new()
    }

    fn device_name(&self, _id: DeviceId) -> Option<String> {
        None
    }

    fn nominal_sample_rate(&self, _id: DeviceId) -> Option<f64> {
        None
    }
}

#[cfg(target_os = "macos")]
pub fn list_devices() -> Vec<DeviceInfo> {
    coreaudio::list_devices()
}

#[cfg(not(target_os = "macos"))]
pub fn list_devices() -> Vec<DeviceInfo> {
    Vec::new()
}
