use crate::hw::traits::AudioHost;

/// Outcome of a device readiness probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    WrongRate,
    NotFound,
}

impl Readiness {
    pub fn token(&self) -> &'static str {
        match self {
            Readiness::Ready => "READY",
            Readiness::WrongRate => "WRONG_RATE",
            Readiness::NotFound => "NOT_FOUND",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Readiness::Ready => 0,
            _ => 1,
        }
    }
}

/// Decide whether a connected device named `target` is running at
/// `desired_rate`.
///
/// Takes one enumeration snapshot and scans it in host order. Devices whose
/// name cannot be read, or whose name is not exactly equal to `target`, are
/// skipped. The first name match decides the outcome; the reported rate is
/// truncated to an integer and its decimal form compared against
/// `desired_rate` as a string. An unreadable rate on a matched device counts
/// as a wrong rate.
pub fn check(host: &impl AudioHost, target: &str, desired_rate: &str) -> Readiness {
    for id in host.device_ids() {
        match host.device_name(id) {
            Some(name) if name == target => {
                return match host.nominal_sample_rate(id) {
                    Some(rate) if (rate as i64).to_string() == desired_rate => Readiness::Ready,
                    _ => Readiness::WrongRate,
                };
            }
            _ => {}
        }
    }
    Readiness::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::traits::{AudioHost, DeviceId};

    struct FakeHost {
        devices: Vec<(DeviceId, Option<&'static str>, Option<f64>)>,
    }

    impl AudioHost for FakeHost {
        fn device_ids(&self) -> Vec<DeviceId> {
            self.devices.iter().map(|d| d.0).collect()
        }

        fn device_name(&self, id: DeviceId) -> Option<String> {
            self.devices
                .iter()
                .find(|d| d.0 == id)
                .and_then(|d| d.1.map(str::to_string))
        }

        fn nominal_sample_rate(&self, id: DeviceId) -> Option<f64> {
            self.devices.iter().find(|d| d.0 == id).and_then(|d| d.2)
        }
    }

    #[test]
    fn test_not_found_when_no_name_matches() {
        let host = FakeHost {
            devices: vec![(1, Some("Built-in Output"), Some(44100.0))],
        };
        let readiness = check(&host, "DAC X", "48000");
        assert_eq!(readiness, Readiness::NotFound);
        assert_eq!(readiness.token(), "NOT_FOUND");
        assert_eq!(readiness.exit_code(), 1);
    }

    #[test]
    fn test_ready_on_exact_name_and_rate() {
        let host = FakeHost {
            devices: vec![
                (1, Some("Built-in Output"), Some(44100.0)),
                (2, Some("DAC X"), Some(48000.0)),
            ],
        };
        let readiness = check(&host, "DAC X", "48000");
        assert_eq!(readiness, Readiness::Ready);
        assert_eq!(readiness.token(), "READY");
        assert_eq!(readiness.exit_code(), 0);
    }

    #[test]
    fn test_wrong_rate_when_rate_differs() {
        let host = FakeHost {
            devices: vec![(1, Some("DAC X"), Some(44100.0))],
        };
        let readiness = check(&host, "DAC X", "48000");
        assert_eq!(readiness, Readiness::WrongRate);
        assert_eq!(readiness.token(), "WRONG_RATE");
        assert_eq!(readiness.exit_code(), 1);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let host = FakeHost {
            devices: vec![(1, Some("DAC X"), Some(48000.0))],
        };
        assert_eq!(check(&host, "dac x", "48000"), Readiness::NotFound);
    }

    #[test]
    fn test_unreadable_name_is_skipped() {
        let host = FakeHost {
            devices: vec![(1, None, Some(48000.0)), (2, Some("DAC X"), Some(48000.0))],
        };
        assert_eq!(check(&host, "DAC X", "48000"), Readiness::Ready);
    }

    #[test]
    fn test_unreadable_rate_on_matched_device_is_wrong_rate() {
        let host = FakeHost {
            devices: vec![(1, Some("DAC X"), None)],
        };
        assert_eq!(check(&host, "DAC X", "48000"), Readiness::WrongRate);
    }

    #[test]
    fn test_first_name_match_decides() {
        // Two devices share the target name; only the first in enumeration
        // order is examined.
        let host = FakeHost {
            devices: vec![
                (1, Some("DAC X"), Some(44100.0)),
                (2, Some("DAC X"), Some(48000.0)),
            ],
        };
        assert_eq!(check(&host, "DAC X", "48000"), Readiness::WrongRate);
    }

    #[test]
    fn test_rate_is_truncated_not_rounded() {
        let host = FakeHost {
            devices: vec![(1, Some("DAC X"), Some(44100.9))],
        };
        assert_eq!(check(&host, "DAC X", "44100"), Readiness::Ready);
        assert_eq!(check(&host, "DAC X", "44101"), Readiness::WrongRate);
    }

    #[test]
    fn test_empty_device_list_is_not_found() {
        let host = FakeHost { devices: vec![] };
        assert_eq!(check(&host, "DAC X", "48000"), Readiness::NotFound);
    }
}
