//! Enrollment touch stages
//!
//! Registering a fingerprint takes several touches. The first and last use
//! dedicated opcodes, every touch in between uses the same intermediate one.
//! Order is enforced by the sensor itself.

use std::iter;

use crate::error::{Error, Result};

/// Which capture phase an enrollment touch belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EnrollStage {
    First = 0x01,
    Intermediate = 0x02,
    Last = 0x03,
}

impl EnrollStage {
    /// Fewest touches the sensor accepts (first, one intermediate, last)
    pub const MIN_TOUCHES: u8 = 3;

    /// Most touches the sensor accepts (first, four intermediates, last)
    pub const MAX_TOUCHES: u8 = 6;

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Stage order for an enrollment of `touches` presses
    ///
    /// # Examples
    ///
    /// ```
    /// use fp1020a_types::EnrollStage;
    ///
    /// let stages: Vec<_> = EnrollStage::sequence(3).unwrap().collect();
    /// assert_eq!(
    ///     stages,
    ///     [EnrollStage::First, EnrollStage::Intermediate, EnrollStage::Last]
    /// );
    /// ```
    pub fn sequence(touches: u8) -> Result<impl Iterator<Item = EnrollStage>> {
        if !(Self::MIN_TOUCHES..=Self::MAX_TOUCHES).contains(&touches) {
            return Err(Error::Validation(format!(
                "Enrollment needs {}-{} touches, got {}",
                Self::MIN_TOUCHES,
                Self::MAX_TOUCHES,
                touches
            )));
        }

        let intermediates = usize::from(touches - 2);
        Ok(iter::once(Self::First)
            .chain(iter::repeat_n(Self::Intermediate, intermediates))
            .chain(iter::once(Self::Last)))
    }
}

impl TryFrom<u8> for EnrollStage {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x01 => Ok(Self::First),
            0x02 => Ok(Self::Intermediate),
            0x03 => Ok(Self::Last),
            _ => Err(Error::Parse(format!("Invalid enroll stage: 0x{:02X}", value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_six_touch_sequence() {
        let stages: Vec<_> = EnrollStage::sequence(6).unwrap().collect();
        assert_eq!(
            stages,
            vec![
                EnrollStage::First,
                EnrollStage::Intermediate,
                EnrollStage::Intermediate,
                EnrollStage::Intermediate,
                EnrollStage::Intermediate,
                EnrollStage::Last,
            ]
        );
    }

    #[test]
    fn test_sequence_bounds() {
        assert!(EnrollStage::sequence(2).is_err());
        assert!(EnrollStage::sequence(7).is_err());
        assert_eq!(EnrollStage::sequence(3).unwrap().count(), 3);
    }

    #[test]
    fn test_stage_codes() {
        assert_eq!(EnrollStage::First.code(), 0x01);
        assert_eq!(EnrollStage::try_from(0x03).unwrap(), EnrollStage::Last);
        assert!(EnrollStage::try_from(0x04).is_err());
    }
}
