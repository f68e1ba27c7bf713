use std::fmt;

use crate::error::MetricsError;

/// A binary class label: 0 is negative, 1 is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryLabel {
    /// Class 0.
    Negative,
    /// Class 1.
    Positive,
}

impl BinaryLabel {
    /// Map a raw label value onto a binary label. `None` for anything but 0 or 1.
    #[must_use]
    pub fn from_index(value: usize) -> Option<Self> {
        match value {
            0 => Some(Self::Negative),
            1 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Return the raw label value (0 or 1).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }

    /// Parse the label at `index` of `sequence`.
    pub(crate) fn parse(
        value: usize,
        sequence: LabelSequence,
        index: usize,
    ) -> Result<Self, MetricsError> {
        Self::from_index(value).ok_or(MetricsError::InvalidLabel {
            sequence,
            index,
            value,
        })
    }
}

impl From<bool> for BinaryLabel {
    fn from(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl fmt::Display for BinaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Which of the two index-aligned label sequences a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSequence {
    /// Ground-truth labels.
    Actual,
    /// Model predictions.
    Predicted,
}

impl fmt::Display for LabelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actual => f.write_str("actual"),
            Self::Predicted => f.write_str("predicted"),
        }
    }
}
