/// Opaque OS-assigned audio device handle, valid only for the lifetime of
/// the enumeration snapshot it came from.
pub type DeviceId = u32;

/// Host platform audio queries, substitutable so readiness probing can be
/// tested without real hardware.
///
/// Every method degrades instead of failing: an enumeration failure is an
/// empty list, an unreadable property is `None`.
pub trait AudioHost {
    fn device_ids(&self) -> Vec<DeviceId>;
    fn device_name(&self, id: DeviceId) -> Option<String>;
    fn nominal_sample_rate(&self, id: DeviceId) -> Option<f64>;
}
