//! Declared input fields and payload collection.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Raised when a submit is blocked before reaching the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please fill in the '{field}' field")]
    Required { field: String },
}

/// One declared input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub placeholder: String,
    pub required: bool,
    pub multiline: bool,
}

impl FieldSpec {
    pub fn required(name: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            required: true,
            multiline: false,
        }
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

/// Field name to value, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormPayload {
    entries: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.entries.push((name.to_string(), value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Editable values for a fixed set of declared fields.
#[derive(Debug, Clone)]
pub struct FormFields {
    specs: Vec<FieldSpec>,
    values: Vec<String>,
    focused: usize,
}

impl FormFields {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let values = vec![String::new(); specs.len()];
        Self {
            specs,
            values,
            focused: 0,
        }
    }

    /// Name, email and message, all required.
    pub fn contact() -> Self {
        Self::new(vec![
            FieldSpec::required("name", "Your Name"),
            FieldSpec::required("email", "Your Email"),
            FieldSpec::required("message", "Your Message").multiline(),
        ])
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.index_of(name).map(|index| self.values[index].as_str())
    }

    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                self.values[index] = value.to_string();
                true
            }
            None => false,
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.name == name)
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Move focus; `len()` is a valid position and stands for the send button.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % (self.specs.len() + 1);
    }

    pub fn focus_prev(&mut self) {
        let slots = self.specs.len() + 1;
        self.focused = (self.focused + slots - 1) % slots;
    }

    pub fn button_focused(&self) -> bool {
        self.focused == self.specs.len()
    }

    pub fn insert_char(&mut self, ch: char) {
        let Some(spec) = self.specs.get(self.focused) else {
            return;
        };
        if ch == '\n' && !spec.multiline {
            return;
        }
        self.values[self.focused].push(ch);
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.pop();
        }
    }

    /// Empty every field and return focus to the first one.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.focused = 0;
    }

    /// Collect the payload, refusing empty required fields. Whitespace
    /// counts as content.
    pub fn collect(&self) -> Result<FormPayload, FieldError> {
        let mut payload = FormPayload::new();
        for (spec, value) in self.specs.iter().zip(&self.values) {
            if spec.required && value.is_empty() {
                return Err(FieldError::Required {
                    field: spec.name.clone(),
                });
            }
            payload = payload.with(&spec.name, value);
        }
        Ok(payload)
    }
}
