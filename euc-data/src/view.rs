//! The user's selections, captured as one immutable value per render pass.

use euc_core::model::{Disruption, MaterialFilter};
use euc_core::timeline::clamp_months;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub material: MaterialFilter,
    pub disruption: Disruption,
    /// Months ahead on the timeline slider, 0-24
    pub timeline_months: u32,
    /// Show only bottleneck locations
    pub bottleneck_mode: bool,
    pub auto_rotate: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            material: MaterialFilter::All,
            disruption: Disruption::None,
            timeline_months: 0,
            bottleneck_mode: false,
            auto_rotate: true,
        }
    }

    pub fn with_material(self, material: MaterialFilter) -> Self {
        Self { material, ..self }
    }

    pub fn with_disruption(self, disruption: Disruption) -> Self {
        Self { disruption, ..self }
    }

    /// Months beyond the 24-month horizon are clamped.
    pub fn with_timeline(self, months: u32) -> Self {
        Self {
            timeline_months: clamp_months(months),
            ..self
        }
    }

    pub fn with_bottleneck_mode(self, bottleneck_mode: bool) -> Self {
        Self {
            bottleneck_mode,
            ..self
        }
    }

    pub fn with_auto_rotate(self, auto_rotate: bool) -> Self {
        Self {
            auto_rotate,
            ..self
        }
    }

    /// Control-panel click: selecting the active scenario again resets it.
    pub fn toggle_disruption(self, disruption: Disruption) -> Self {
        if self.disruption == disruption {
            self.with_disruption(Disruption::None)
        } else {
            self.with_disruption(disruption)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let view = ViewState::default();
        assert_eq!(view.material, MaterialFilter::All);
        assert_eq!(view.disruption, Disruption::None);
        assert_eq!(view.timeline_months, 0);
        assert!(!view.bottleneck_mode);
        assert!(view.auto_rotate);
    }

    #[test]
    fn timeline_clamps() {
        assert_eq!(ViewState::new().with_timeline(30).timeline_months, 24);
        assert_eq!(ViewState::new().with_timeline(12).timeline_months, 12);
    }

    #[test]
    fn toggling_twice_resets() {
        let view = ViewState::new().toggle_disruption(Disruption::Suez);
        assert_eq!(view.disruption, Disruption::Suez);
        let view = view.toggle_disruption(Disruption::Rotterdam);
        assert_eq!(view.disruption, Disruption::Rotterdam);
        let view = view.toggle_disruption(Disruption::Rotterdam);
        assert_eq!(view.disruption, Disruption::None);
    }

    #[test]
    fn builders_leave_other_fields() {
        let view = ViewState::new()
            .with_material(MaterialFilter::Cobalt)
            .with_bottleneck_mode(true);
        let changed = view.with_disruption(Disruption::ChinaBan);
        assert_eq!(changed.material, MaterialFilter::Cobalt);
        assert!(changed.bottleneck_mode);
        // original value untouched
        assert_eq!(view.disruption, Disruption::None);
    }
}
