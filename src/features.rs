//! Feature extraction from submitted form fields.

use crate::error::AppError;

/// Ordered numeric values extracted from form fields, in submission order.
///
/// No named schema is enforced: the form layout is expected to match the
/// feature order the classifier was trained on, and a count or order
/// mismatch only surfaces at inference time.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Parse form key/value pairs into a feature vector.
    ///
    /// Fails on the first value that is not a valid number.
    pub fn from_form_pairs(pairs: &[(String, String)]) -> Result<Self, AppError> {
        if pairs.is_empty() {
            return Err(AppError::EmptyForm);
        }

        let mut values = Vec::with_capacity(pairs.len());
        for (name, raw) in pairs {
            let parsed = raw.trim().parse::<f64>().map_err(|_| AppError::InvalidFeature {
                name: name.clone(),
                value: raw.clone(),
            })?;
            values.push(parsed);
        }

        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_preserves_order() {
        let fields = pairs(&[("tsh", "2.5"), ("t3", "1"), ("age", "29")]);
        let vector = FeatureVector::from_form_pairs(&fields).unwrap();
        assert_eq!(vector.values(), &[2.5, 1.0, 29.0]);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let fields = pairs(&[("tsh", " 2.5 ")]);
        let vector = FeatureVector::from_form_pairs(&fields).unwrap();
        assert_eq!(vector.values(), &[2.5]);
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let fields = pairs(&[("age", "29"), ("tsh", "abc")]);
        let err = FeatureVector::from_form_pairs(&fields).unwrap_err();
        match err {
            AppError::InvalidFeature { name, value } => {
                assert_eq!(name, "tsh");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_form_is_rejected() {
        let err = FeatureVector::from_form_pairs(&[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyForm));
    }
}
