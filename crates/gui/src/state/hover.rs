//! Hover tracking: at most one element is highlighted at a time, and the
//! previous one returns to its resting color the moment focus moves.

use shared::ElementId;

use crate::build::HIGHLIGHT_COLOR;
use crate::state::model::ModelState;

/// What changed between two hover frames
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    /// Same element (or still nothing) under the cursor
    None,
    /// Cursor moved from empty space onto an element
    Enter(ElementId),
    /// Cursor jumped straight from one element to another
    Switch { from: ElementId, to: ElementId },
    /// Cursor left the hovered element for empty space
    Leave(ElementId),
}

/// Pure transition step, separated from the color application for testing
pub fn resolve_hover(nearest: Option<&ElementId>, previous: Option<&ElementId>) -> HoverTransition {
    match (previous, nearest) {
        (None, None) => HoverTransition::None,
        (None, Some(to)) => HoverTransition::Enter(to.clone()),
        (Some(from), None) => HoverTransition::Leave(from.clone()),
        (Some(from), Some(to)) => {
            if from == to {
                HoverTransition::None
            } else {
                HoverTransition::Switch {
                    from: from.clone(),
                    to: to.clone(),
                }
            }
        }
    }
}

#[derive(Default)]
pub struct HoverState {
    hovered: Option<ElementId>,
}

impl HoverState {
    pub fn hovered(&self) -> Option<&ElementId> {
        self.hovered.as_ref()
    }

    /// Advance one frame: restore the element losing focus to its resting
    /// color, paint the element gaining focus, remember the new state.
    pub fn update(&mut self, model: &mut ModelState, nearest: Option<ElementId>) -> HoverTransition {
        let transition = resolve_hover(nearest.as_ref(), self.hovered.as_ref());

        match &transition {
            HoverTransition::None => {}
            HoverTransition::Enter(to) => {
                model.set_display_color(to, HIGHLIGHT_COLOR);
            }
            HoverTransition::Switch { from, to } => {
                self.restore(model, from);
                model.set_display_color(to, HIGHLIGHT_COLOR);
            }
            HoverTransition::Leave(from) => {
                self.restore(model, from);
            }
        }

        self.hovered = nearest;
        transition
    }

    /// Drop the highlight without a pick, e.g. when the model is replaced
    pub fn reset(&mut self, model: &mut ModelState) {
        if let Some(id) = self.hovered.take() {
            self.restore(model, &id);
        }
    }

    fn restore(&self, model: &mut ModelState, id: &str) {
        if let Some(base) = model.element(id).map(|e| e.base_color) {
            model.set_display_color(id, base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{assemble, DEFAULT_COLOR, HIGHLIGHT_COLOR};
    use crate::fixtures::*;

    fn loaded_model() -> ModelState {
        let (elements, _) = assemble(&document_straight_group(&[0.5, 1.0]));
        let mut m = ModelState::default();
        m.replace(elements);
        m
    }

    fn id(m: &ModelState, idx: usize) -> ElementId {
        m.elements()[idx].id.clone()
    }

    #[test]
    fn test_resolve_empty_to_empty() {
        assert_eq!(resolve_hover(None, None), HoverTransition::None);
    }

    #[test]
    fn test_resolve_enter() {
        let a = "a".to_string();
        assert_eq!(
            resolve_hover(Some(&a), None),
            HoverTransition::Enter(a.clone())
        );
    }

    #[test]
    fn test_resolve_stay_on_same_element() {
        let a = "a".to_string();
        assert_eq!(resolve_hover(Some(&a), Some(&a)), HoverTransition::None);
    }

    #[test]
    fn test_resolve_switch() {
        let a = "a".to_string();
        let b = "b".to_string();
        assert_eq!(
            resolve_hover(Some(&b), Some(&a)),
            HoverTransition::Switch {
                from: a.clone(),
                to: b.clone()
            }
        );
    }

    #[test]
    fn test_resolve_leave() {
        let a = "a".to_string();
        assert_eq!(resolve_hover(None, Some(&a)), HoverTransition::Leave(a.clone()));
    }

    #[test]
    fn test_enter_highlights_element() {
        let mut m = loaded_model();
        let mut h = HoverState::default();
        let target = id(&m, 0);

        h.update(&mut m, Some(target.clone()));
        assert_eq!(h.hovered(), Some(&target));
        assert_eq!(m.element(&target).unwrap().display_color, HIGHLIGHT_COLOR);
    }

    #[test]
    fn test_leave_restores_resting_color() {
        let mut m = loaded_model();
        let mut h = HoverState::default();
        let target = id(&m, 0);

        h.update(&mut m, Some(target.clone()));
        h.update(&mut m, None);
        assert!(h.hovered().is_none());
        assert_eq!(m.element(&target).unwrap().display_color, DEFAULT_COLOR);
    }

    #[test]
    fn test_switch_moves_highlight() {
        let mut m = loaded_model();
        let mut h = HoverState::default();
        let first = id(&m, 0);
        let second = id(&m, 1);

        h.update(&mut m, Some(first.clone()));
        h.update(&mut m, Some(second.clone()));

        assert_eq!(m.element(&first).unwrap().display_color, DEFAULT_COLOR);
        assert_eq!(m.element(&second).unwrap().display_color, HIGHLIGHT_COLOR);
        assert_eq!(h.hovered(), Some(&second));
    }

    #[test]
    fn test_leave_restores_contoured_base_color() {
        // When a contour set a non-default base color, leave must restore
        // that color, not the amber default
        let mut m = loaded_model();
        let mut h = HoverState::default();
        let target = id(&m, 0);
        m.set_base_color(&target, [0.0, 0.5, 1.0]);

        h.update(&mut m, Some(target.clone()));
        h.update(&mut m, None);
        assert_eq!(m.element(&target).unwrap().display_color, [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_reset_clears_highlight() {
        let mut m = loaded_model();
        let mut h = HoverState::default();
        let target = id(&m, 0);

        h.update(&mut m, Some(target.clone()));
        h.reset(&mut m);
        assert!(h.hovered().is_none());
        assert_eq!(m.element(&target).unwrap().display_color, DEFAULT_COLOR);
    }
}
