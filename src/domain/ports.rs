/// A readable numeric-text field on the production entry form.
pub trait FieldSource {
    fn value(&self) -> String;
}

/// The break-result display: a text element with a settable color.
pub trait StatusSink {
    fn set_text(&mut self, text: &str);
    fn set_color(&mut self, color: &str);
}

/// The variance form field that stores the formatted number.
pub trait VarianceSink {
    fn set_value(&mut self, value: &str);
}
