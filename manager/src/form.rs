/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Value,
    Domain,
}

/// The form's in-memory field values.
///
/// Fields change only through [`set`](FormState::set); there is no
/// validation at edit time. A successful submission clears all three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    value: String,
    domain: String,
}

impl FormState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub(crate) fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Value => self.value = value,
            FormField::Domain => self.domain = value,
        }
    }

    /// A submission goes through only when name and value are both
    /// non-empty. The domain is always optional.
    pub(crate) fn is_submittable(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.name.clear();
        self.value.clear();
        self.domain.clear();
    }
}
