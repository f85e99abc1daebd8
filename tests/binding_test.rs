use std::cell::RefCell;
use std::rc::Rc;

use tonnage_variance::core::binding::{TextField, VarianceBinding};
use tonnage_variance::domain::ports::{StatusSink, VarianceSink};
use tonnage_variance::BreakStatus;

#[derive(Default)]
struct RecordingStatus {
    state: Rc<RefCell<(String, String)>>,
}

impl RecordingStatus {
    fn handle(&self) -> Rc<RefCell<(String, String)>> {
        Rc::clone(&self.state)
    }
}

impl StatusSink for RecordingStatus {
    fn set_text(&mut self, text: &str) {
        self.state.borrow_mut().0 = text.to_string();
    }

    fn set_color(&mut self, color: &str) {
        self.state.borrow_mut().1 = color.to_string();
    }
}

#[derive(Default)]
struct RecordingVariance {
    value: Rc<RefCell<String>>,
}

impl RecordingVariance {
    fn handle(&self) -> Rc<RefCell<String>> {
        Rc::clone(&self.value)
    }
}

impl VarianceSink for RecordingVariance {
    fn set_value(&mut self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

#[test]
fn test_binding_writes_both_sinks() {
    let expected = TextField::new("100");
    let actual = TextField::new("105");

    let status = RecordingStatus::default();
    let status_state = status.handle();
    let variance = RecordingVariance::default();
    let variance_value = variance.handle();

    let mut binding = VarianceBinding::bind(
        Some(expected),
        Some(actual),
        Some(Box::new(status)),
        Some(Box::new(variance)),
    )
    .unwrap();

    let result = binding.on_input_changed();

    assert_eq!(result.status, BreakStatus::Overbreak);
    assert_eq!(
        status_state.borrow().0,
        "⚠️ Overbreak (+5.00 t) — possible grade dilution."
    );
    assert_eq!(status_state.borrow().1, "orange");
    assert_eq!(*variance_value.borrow(), "5.00");
}

#[test]
fn test_clearing_leaves_color_unchanged() {
    let expected = TextField::new("100");
    let actual = TextField::new("95");

    let status = RecordingStatus::default();
    let status_state = status.handle();
    let variance = RecordingVariance::default();
    let variance_value = variance.handle();

    let mut binding = VarianceBinding::bind(
        Some(expected.clone()),
        Some(actual.clone()),
        Some(Box::new(status)),
        Some(Box::new(variance)),
    )
    .unwrap();

    binding.on_input_changed();
    assert_eq!(status_state.borrow().1, "red");

    // The user blanks the actual field: text and variance clear, the color
    // stays whatever it last was
    actual.set("");
    let result = binding.on_input_changed();

    assert_eq!(result.status, BreakStatus::Unknown);
    assert_eq!(status_state.borrow().0, "");
    assert_eq!(status_state.borrow().1, "red");
    assert_eq!(*variance_value.borrow(), "");
}

#[test]
fn test_last_change_wins() {
    let expected = TextField::new("100");
    let actual = TextField::new("90");

    let status = RecordingStatus::default();
    let status_state = status.handle();

    let mut binding = VarianceBinding::bind(
        Some(expected.clone()),
        Some(actual.clone()),
        Some(Box::new(status)),
        None,
    )
    .unwrap();

    binding.on_input_changed();
    actual.set("110");
    binding.on_input_changed();
    actual.set("100");
    binding.on_input_changed();

    assert_eq!(status_state.borrow().0, "✅ On Target (0.00 t)");
    assert_eq!(status_state.borrow().1, "limegreen");
}

#[test]
fn test_missing_input_field_deactivates_binding() {
    let binding = VarianceBinding::bind(None::<TextField>, Some(TextField::new("5")), None, None);
    assert!(binding.is_none());
}

#[test]
fn test_missing_sinks_are_tolerated() {
    let mut binding = VarianceBinding::bind(
        Some(TextField::new("100")),
        Some(TextField::new("107")),
        None,
        None,
    )
    .unwrap();

    let result = binding.on_input_changed();
    assert_eq!(result.variance, Some(7.0));
}
