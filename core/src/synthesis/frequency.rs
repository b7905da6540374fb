use crate::prelude::{WaveError, WaveResult};
use serde::{Deserialize, Serialize};

/// Frequencies plotted when a run does not name its own.
pub const DEFAULT_FREQUENCIES_HZ: [f64; 3] = [10.0, 7.0, 5.0];

/// Ordered list of signal frequencies in hertz.
///
/// Duplicates are kept. Zero and negative values are accepted and produce a
/// constant or mirrored waveform respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FrequencySet {
    values: Vec<f64>,
}

impl FrequencySet {
    pub fn new(values: Vec<f64>) -> WaveResult<Self> {
        if values.is_empty() {
            return Err(WaveError::EmptyFrequencySet);
        }
        if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
            return Err(WaveError::InvalidFrequency(format!(
                "{} is not a finite frequency",
                bad
            )));
        }
        Ok(Self { values })
    }

    /// Parses a comma and/or whitespace separated list such as `"10, 7 5"`.
    pub fn parse(input: &str) -> WaveResult<Self> {
        let values = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| WaveError::InvalidFrequency(format!("cannot parse {:?}", token)))
            })
            .collect::<WaveResult<Vec<_>>>()?;
        Self::new(values)
    }

    /// An absent list falls back to [`DEFAULT_FREQUENCIES_HZ`]; a supplied
    /// list must be valid on its own.
    pub fn resolve(values: Option<Vec<f64>>) -> WaveResult<Self> {
        match values {
            Some(values) => Self::new(values),
            None => Ok(Self::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for FrequencySet {
    fn default() -> Self {
        Self {
            values: DEFAULT_FREQUENCIES_HZ.to_vec(),
        }
    }
}

impl TryFrom<Vec<f64>> for FrequencySet {
    type Error = WaveError;

    fn try_from(values: Vec<f64>) -> WaveResult<Self> {
        Self::new(values)
    }
}

impl From<FrequencySet> for Vec<f64> {
    fn from(set: FrequencySet) -> Self {
        set.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_commas_and_spaces() {
        let set = FrequencySet::parse("10, 7 5,,2.5").unwrap();
        assert_eq!(set.as_slice(), &[10.0, 7.0, 5.0, 2.5]);
    }

    #[test]
    fn parse_keeps_duplicates_and_order() {
        let set = FrequencySet::parse("3,1,3").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3.0, 1.0, 3.0]);
    }

    #[test]
    fn parse_rejects_blank_and_malformed_input() {
        assert_eq!(FrequencySet::parse("  , "), Err(WaveError::EmptyFrequencySet));
        assert!(matches!(
            FrequencySet::parse("10,abc"),
            Err(WaveError::InvalidFrequency(_))
        ));
        assert!(matches!(
            FrequencySet::parse("inf"),
            Err(WaveError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn zero_and_negative_frequencies_are_allowed() {
        let set = FrequencySet::new(vec![0.0, -4.0]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn resolve_falls_back_only_when_absent() {
        assert_eq!(FrequencySet::resolve(None).unwrap(), FrequencySet::default());
        assert_eq!(
            FrequencySet::resolve(Some(vec![])),
            Err(WaveError::EmptyFrequencySet)
        );
        assert_eq!(
            FrequencySet::resolve(Some(vec![2.0])).unwrap().as_slice(),
            &[2.0]
        );
    }
}
