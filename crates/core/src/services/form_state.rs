use crate::errors::CoreError;
use crate::models::form::{is_digits_only, Algorithm, FormField, FormParameters, Period};

/// Change that sibling widgets need to hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    PeriodChanged(Period),
    LimitChanged(String),
}

/// Result of feeding one keystroke/selection into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Input discarded; the field keeps its previous value.
    Rejected,
    /// Field updated, nobody else cares.
    Applied,
    /// Field updated and the chart query should follow.
    Notify(FormEvent),
}

/// Holds the parameter form's five fields.
///
/// Numeric fields only ever hold digits: anything else is dropped at input
/// time, without an error. Values are not re-validated on submit.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    params: FormParameters,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: FormParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &FormParameters {
        &self.params
    }

    /// Copy of the whole form, as posted on submit.
    #[must_use]
    pub fn snapshot(&self) -> FormParameters {
        self.params.clone()
    }

    /// Apply a new value to one field.
    ///
    /// Dropdown fields must carry a known option; an unknown value can only
    /// come from a broken frontend and is reported as a validation error.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<FieldUpdate, CoreError> {
        if field.is_numeric() && !is_digits_only(value) {
            return Ok(FieldUpdate::Rejected);
        }

        let update = match field {
            FormField::Period => {
                let period: Period = value.parse()?;
                self.params.period = period;
                FieldUpdate::Notify(FormEvent::PeriodChanged(period))
            }
            FormField::Limit => {
                self.params.limit = value.to_string();
                FieldUpdate::Notify(FormEvent::LimitChanged(value.to_string()))
            }
            FormField::Lookback => {
                self.params.lookback = value.to_string();
                FieldUpdate::Applied
            }
            FormField::Rebalance => {
                self.params.rebalance = value.to_string();
                FieldUpdate::Applied
            }
            FormField::Algorithm => {
                let algorithm: Algorithm = value.parse()?;
                self.params.algorithm = algorithm;
                FieldUpdate::Applied
            }
        };
        Ok(update)
    }
}
