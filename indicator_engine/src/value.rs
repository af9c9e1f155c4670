use serde::{Serialize, Serializer};

/// One indicator cell: a finite number, or nothing when the defining window
/// lacks history.
///
/// `Defined` never holds NaN or an infinity; [`IndicatorValue::from_f64`]
/// folds those into `Undefined` so they cannot leak into formatting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IndicatorValue {
    Defined(f64),
    #[default]
    Undefined,
}

impl IndicatorValue {
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            IndicatorValue::Defined(value)
        } else {
            IndicatorValue::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            IndicatorValue::Defined(v) => Some(v),
            IndicatorValue::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, IndicatorValue::Defined(_))
    }
}

impl From<Option<f64>> for IndicatorValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(IndicatorValue::Undefined, IndicatorValue::from_f64)
    }
}

/// Serialized as a number or `null`.
impl Serialize for IndicatorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}
