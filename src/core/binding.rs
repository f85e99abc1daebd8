use std::cell::RefCell;
use std::rc::Rc;

use crate::core::variance::compute;
use crate::domain::model::VarianceResult;
use crate::domain::ports::{FieldSource, StatusSink, VarianceSink};

/// Wires the variance calculation to concrete form fields.
///
/// Both input fields are required at bind time; either of the output sinks
/// may be absent and its writes are simply skipped, mirroring the defensive
/// checks the form has always done. Recomputation happens synchronously per
/// change notification from the current snapshot of both fields, so the last
/// notification always wins.
pub struct VarianceBinding<E: FieldSource, A: FieldSource> {
    expected: E,
    actual: A,
    status_sink: Option<Box<dyn StatusSink>>,
    variance_sink: Option<Box<dyn VarianceSink>>,
}

impl<E: FieldSource, A: FieldSource> VarianceBinding<E, A> {
    /// Binds the calculator to its fields. Returns `None` without activating
    /// when a required input field is missing; that is a wiring fault worth
    /// one warning, not an error.
    pub fn bind(
        expected: Option<E>,
        actual: Option<A>,
        status_sink: Option<Box<dyn StatusSink>>,
        variance_sink: Option<Box<dyn VarianceSink>>,
    ) -> Option<Self> {
        let (Some(expected), Some(actual)) = (expected, actual) else {
            tracing::warn!("Tonnage variance binding: input fields not found");
            return None;
        };

        Some(Self {
            expected,
            actual,
            status_sink,
            variance_sink,
        })
    }

    /// Recomputes from the current field values and pushes the results into
    /// whichever sinks are present. An empty display text clears the status
    /// element; its color is only touched when a status is known.
    pub fn on_input_changed(&mut self) -> VarianceResult {
        let result = compute(&self.expected.value(), &self.actual.value());

        if let Some(sink) = self.status_sink.as_deref_mut() {
            sink.set_text(&result.display_text);
            if let Some(color) = result.display_color {
                sink.set_color(color);
            }
        }

        if let Some(sink) = self.variance_sink.as_deref_mut() {
            sink.set_value(&result.variance_field());
        }

        result
    }
}

/// An editable text field with shared handles, the in-process stand-in for a
/// form input. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct TextField(Rc<RefCell<String>>);

impl TextField {
    pub fn new(initial: &str) -> Self {
        Self(Rc::new(RefCell::new(initial.to_string())))
    }

    pub fn set(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

impl FieldSource for TextField {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }
}
