#![cfg(target_os = "macos")]

//! Integration test for the readiness probe against the live CoreAudio HAL.
//!
//! Cross-checks the probe against the real device list. Marked `#[ignore]`
//! because it requires real audio hardware and cannot run in headless CI.

#[cfg(test)]
mod tests {
    use audiogate_engine::hw::traits::AudioHost;
    use audiogate_engine::hw::{self, PlatformHost};
    use audiogate_engine::probe::{self, Readiness};

    #[test]
    #[ignore = "requires CoreAudio hardware"]
    fn test_probe_agrees_with_live_device_list() {
        let host = PlatformHost;
        let devices = hw::list_devices();
        assert!(!devices.is_empty(), "no CoreAudio devices found");

        // The first device with a readable name is, in enumeration order,
        // the one a probe for that name must land on.
        let first = host
            .device_ids()
            .into_iter()
            .find_map(|id| host.device_name(id).map(|name| (id, name)))
            .expect("no device with a readable name");
        let (id, name) = first;

        match host.nominal_sample_rate(id) {
            Some(rate) => {
                let desired = (rate as i64).to_string();
                assert_eq!(probe::check(&host, &name, &desired), Readiness::Ready);
                // Probing the same device for an impossible rate must report
                // a rate mismatch, not absence.
                assert_eq!(probe::check(&host, &name, "1"), Readiness::WrongRate);
            }
            None => {
                assert_eq!(probe::check(&host, &name, "48000"), Readiness::WrongRate);
            }
        }

        // A name no device carries is never found.
        let absent: String = devices
            .iter()
            .map(|d| d.name.as_str())
            .collect::<String>()
            + "-absent";
        assert_eq!(probe::check(&host, &absent, "48000"), Readiness::NotFound);
    }
}
