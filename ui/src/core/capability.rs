//! Device capability detection for decorative motion.
//!
//! The decision is a pure function of three signals so it can be tested
//! without a browser. Providers only collect the signals.

use crate::config::{
    DEFAULT_DEVICE_MEMORY_GB, DEFAULT_LOGICAL_CORES, MIN_DEVICE_MEMORY_GB,
    MIN_LOGICAL_CORES_EXCLUSIVE,
};

/// Raw runtime hints. `None` means the environment did not expose the value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceSignals {
    pub prefers_reduced_motion: bool,
    pub device_memory_gb: Option<f64>,
    pub logical_cores: Option<u32>,
}

impl DeviceSignals {
    pub fn memory_or_default(&self) -> f64 {
        self.device_memory_gb.unwrap_or(DEFAULT_DEVICE_MEMORY_GB)
    }

    pub fn cores_or_default(&self) -> u32 {
        self.logical_cores.unwrap_or(DEFAULT_LOGICAL_CORES)
    }

    pub fn motion_policy(&self) -> MotionPolicy {
        MotionPolicy {
            animate: should_animate(
                self.prefers_reduced_motion,
                self.memory_or_default(),
                self.cores_or_default(),
            ),
        }
    }
}

/// Rich animation only when motion is not reduced and the device clears both
/// hardware thresholds.
pub fn should_animate(prefers_reduced_motion: bool, memory_gb: f64, logical_cores: u32) -> bool {
    !prefers_reduced_motion
        && memory_gb >= MIN_DEVICE_MEMORY_GB
        && logical_cores > MIN_LOGICAL_CORES_EXCLUSIVE
}

/// Session-wide animation gate, provided as context by the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPolicy {
    pub animate: bool,
}

impl MotionPolicy {
    /// Pick `animated` or `fallback` depending on the gate.
    pub fn class<'a>(&self, animated: &'a str, fallback: &'a str) -> &'a str {
        if self.animate {
            animated
        } else {
            fallback
        }
    }
}

pub trait CapabilityProvider {
    fn signals(&self) -> DeviceSignals;

    fn motion_policy(&self) -> MotionPolicy {
        self.signals().motion_policy()
    }
}

/// Reads `matchMedia`, `navigator.deviceMemory` and
/// `navigator.hardwareConcurrency`. Off the web it reports nothing, which
/// resolves to the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCapabilities;

impl CapabilityProvider for BrowserCapabilities {
    #[cfg(target_arch = "wasm32")]
    fn signals(&self) -> DeviceSignals {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return DeviceSignals::default();
        };

        let prefers_reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);

        let navigator = window.navigator();
        // Not in web-sys: Chromium-only and absent elsewhere.
        let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v > 0.0);

        let cores = navigator.hardware_concurrency();
        let logical_cores = (cores.is_finite() && cores >= 1.0).then_some(cores as u32);

        DeviceSignals {
            prefers_reduced_motion,
            device_memory_gb,
            logical_cores,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn signals(&self) -> DeviceSignals {
        DeviceSignals::default()
    }
}

/// Fixed signals, for previews and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCapabilities(pub DeviceSignals);

impl CapabilityProvider for FixedCapabilities {
    fn signals(&self) -> DeviceSignals {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_always_disables() {
        for (mem, cores) in [(0.5, 1), (4.0, 3), (64.0, 128)] {
            assert!(!should_animate(true, mem, cores));
        }
    }

    #[test]
    fn thresholds() {
        assert!(should_animate(false, 4.0, 3));
        assert!(should_animate(false, 8.0, 16));
        assert!(!should_animate(false, 3.9, 8));
        assert!(!should_animate(false, 8.0, 2));
        assert!(!should_animate(false, 2.0, 2));
    }

    #[test]
    fn missing_signals_fall_back_to_animating() {
        let provider = FixedCapabilities(DeviceSignals::default());
        assert!(provider.motion_policy().animate);
    }

    #[test]
    fn partial_signals_use_defaults_for_the_rest() {
        let low_memory = FixedCapabilities(DeviceSignals {
            device_memory_gb: Some(2.0),
            ..Default::default()
        });
        assert!(!low_memory.motion_policy().animate);

        let dual_core = FixedCapabilities(DeviceSignals {
            logical_cores: Some(2),
            ..Default::default()
        });
        assert!(!dual_core.motion_policy().animate);
    }

    #[test]
    fn class_helper_follows_the_gate() {
        let on = MotionPolicy { animate: true };
        let off = MotionPolicy::default();
        assert_eq!(on.class("a", "b"), "a");
        assert_eq!(off.class("a", "b"), "b");
    }
}
