//! Attribute contouring: recolor every element by a normalized section
//! attribute and expose the legend tick values.

use shared::{ModelError, ModelResult};

use crate::build::{ContourAttribute, DEFAULT_COLOR};
use crate::ramp::RampKind;
use crate::state::model::ModelState;

/// Number of labeled ticks on the legend strip
pub const LEGEND_TICKS: usize = 6;

/// Legend tick values from max down to min.
///
/// The first tick is exactly the maximum, the last exactly the minimum,
/// interior ticks step down by range/N.
pub fn legend_tick_values(min: f64, max: f64) -> Vec<f64> {
    let step = (max - min) / LEGEND_TICKS as f64;
    (1..=LEGEND_TICKS)
        .map(|i| {
            if i == 1 {
                max
            } else if i == LEGEND_TICKS {
                min
            } else {
                max - step * (i - 1) as f64
            }
        })
        .collect()
}

pub struct ContourState {
    enabled: bool,
    pub attribute: ContourAttribute,
    pub ramp: RampKind,
    /// (min, max) of the attribute over the model while enabled
    range: Option<(f64, f64)>,
}

impl Default for ContourState {
    fn default() -> Self {
        Self {
            enabled: false,
            attribute: ContourAttribute::WallThickness,
            ramp: RampKind::default(),
            range: None,
        }
    }
}

impl ContourState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    pub fn legend_ticks(&self) -> Option<Vec<f64>> {
        self.range.map(|(min, max)| legend_tick_values(min, max))
    }

    /// Turn contouring on and recolor the model.
    ///
    /// Fails with `EmptySelection` on an empty model, leaving the mode off.
    pub fn enable(&mut self, model: &mut ModelState) -> ModelResult<()> {
        if model.is_empty() {
            self.enabled = false;
            self.range = None;
            return Err(ModelError::EmptySelection);
        }
        self.enabled = true;
        self.apply(model);
        Ok(())
    }

    /// Turn contouring off and return every element to the default color
    pub fn disable(&mut self, model: &mut ModelState) {
        self.enabled = false;
        self.range = None;
        let ids: Vec<_> = model.elements().iter().map(|e| e.id.clone()).collect();
        for id in ids {
            model.set_base_color(&id, DEFAULT_COLOR);
        }
    }

    /// Recompute the range and recolor; call after the attribute, the
    /// ramp, or the model itself changed while enabled
    pub fn apply(&mut self, model: &mut ModelState) {
        if !self.enabled {
            return;
        }
        let Some((min, max)) = model.attribute_range(self.attribute) else {
            self.range = None;
            return;
        };
        self.range = Some((min, max));

        let ramp = self.ramp.ramp();
        let span = max - min;
        let recolor: Vec<_> = model
            .elements()
            .iter()
            .map(|e| {
                // Degenerate range: everything normalizes to 0
                let t = if span > 0.0 {
                    ((e.attributes.value_of(self.attribute) - min) / span) as f32
                } else {
                    0.0
                };
                (e.id.clone(), ramp.sample(t))
            })
            .collect();

        for (id, color) in recolor {
            model.set_base_color(&id, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::assemble;
    use crate::fixtures::*;
    use crate::ramp::RAINBOW;

    fn loaded_model(doc: &shared::Document) -> ModelState {
        let (elements, _) = assemble(doc);
        let mut m = ModelState::default();
        m.replace(elements);
        m
    }

    #[test]
    fn test_legend_ticks_end_exactly_on_extremes() {
        let ticks = legend_tick_values(0.0, 2.0);
        assert_eq!(ticks.len(), LEGEND_TICKS);
        assert_eq!(ticks[0], 2.0);
        assert_eq!(ticks[LEGEND_TICKS - 1], 0.0);
    }

    #[test]
    fn test_legend_ticks_millimeter_labels() {
        // 0..2 m renders as 2000, 1667, 1333, 1000, 667, 0 mm
        let mm: Vec<i64> = legend_tick_values(0.0, 2.0)
            .iter()
            .map(|v| (v * 1000.0).round() as i64)
            .collect();
        assert_eq!(mm, vec![2000, 1667, 1333, 1000, 667, 0]);
    }

    #[test]
    fn test_contour_normalizes_thickness_spread() {
        // Thicknesses 10/20/30 mm: the middle element normalizes to 0.5
        let mut m = loaded_model(&document_thickness_spread());
        let mut c = ContourState::default();
        c.attribute = ContourAttribute::WallThickness;
        c.enable(&mut m).unwrap();

        assert_eq!(c.range(), Some((0.010, 0.030)));
        let colors: Vec<[f32; 3]> = m.elements().iter().map(|e| e.base_color).collect();
        assert_eq!(colors[0], RAINBOW.sample(0.0));
        assert_eq!(colors[1], RAINBOW.sample(0.5));
        assert_eq!(colors[2], RAINBOW.sample(1.0));
    }

    #[test]
    fn test_contour_sets_display_color_too() {
        let mut m = loaded_model(&document_thickness_spread());
        let mut c = ContourState::default();
        c.enable(&mut m).unwrap();
        for e in m.elements() {
            assert_eq!(e.base_color, e.display_color);
        }
    }

    #[test]
    fn test_degenerate_range_normalizes_to_zero() {
        // All elements identical: everything gets the ramp start color
        let mut m = loaded_model(&document_straight_group(&[1.0, 1.0, 1.0]));
        let mut c = ContourState::default();
        c.attribute = ContourAttribute::OuterDiameter;
        c.enable(&mut m).unwrap();

        for e in m.elements() {
            assert_eq!(e.base_color, RAINBOW.sample(0.0));
        }
    }

    #[test]
    fn test_enable_on_empty_model_fails_and_stays_off() {
        let mut m = ModelState::default();
        let mut c = ContourState::default();
        let err = c.enable(&mut m).unwrap_err();
        assert_eq!(err, ModelError::EmptySelection);
        assert!(!c.is_enabled());
        assert!(c.legend_ticks().is_none());
    }

    #[test]
    fn test_disable_restores_default_colors() {
        let mut m = loaded_model(&document_thickness_spread());
        let mut c = ContourState::default();
        c.enable(&mut m).unwrap();
        c.disable(&mut m);

        assert!(!c.is_enabled());
        assert!(c.legend_ticks().is_none());
        for e in m.elements() {
            assert_eq!(e.base_color, DEFAULT_COLOR);
            assert_eq!(e.display_color, DEFAULT_COLOR);
        }
    }

    #[test]
    fn test_apply_is_noop_while_disabled() {
        let mut m = loaded_model(&document_thickness_spread());
        let mut c = ContourState::default();
        c.apply(&mut m);
        for e in m.elements() {
            assert_eq!(e.base_color, DEFAULT_COLOR);
        }
    }

    #[test]
    fn test_switching_attribute_recolors() {
        let mut m = loaded_model(&document_straight_group(&[0.5, 1.0, 2.0]));
        let mut c = ContourState::default();
        c.attribute = ContourAttribute::OuterDiameter;
        c.enable(&mut m).unwrap();
        assert_eq!(c.range(), Some((0.5, 2.0)));

        c.attribute = ContourAttribute::WallThickness;
        c.apply(&mut m);
        assert_eq!(c.range(), Some((0.5 / 25.0, 2.0 / 25.0)));
    }
}
