use derive_more::{Add, AddAssign, Deref, Display, Into};
use serde::{Deserialize, Serialize};

/// How much of a pigment to add, in CMYK percentage points. Never negative.
#[derive(
    Debug, Copy, Clone, Add, AddAssign, Display, Into, PartialEq, PartialOrd, Deref, Serialize, Deserialize,
)]
#[serde(from = "f32", into = "f32")]
pub struct PigmentAmount(f32);

impl From<f32> for PigmentAmount {
    fn from(v: f32) -> Self {
        PigmentAmount::new(v)
    }
}

impl PigmentAmount {
    /// Negative amounts and NaN become zero.
    pub fn new(v: f32) -> Self {
        PigmentAmount(v.max(0.0))
    }

    pub fn set(&mut self, v: PigmentAmount) {
        self.0 = *v;
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for PigmentAmount {
    fn default() -> Self {
        PigmentAmount::new(0.0)
    }
}

#[cfg(test)]
mod test {
    use super::PigmentAmount;

    #[test]
    fn never_negative() {
        assert!(PigmentAmount::new(-3.0).is_zero());
        assert!(PigmentAmount::new(f32::NAN).is_zero());
        assert_eq!(*PigmentAmount::new(12.5), 12.5);
    }

    #[test]
    fn sums() {
        let mut total = PigmentAmount::new(100.0) + PigmentAmount::new(50.0);
        total += PigmentAmount::new(50.0);
        assert_eq!(f32::from(total), 200.0);
        assert_eq!(total.to_string(), "200");

        total.set(PigmentAmount::new(7.5));
        assert_eq!(*total, 7.5);
    }

    #[test]
    fn deserializing_clamps() {
        let amount: PigmentAmount = serde_json::from_str("-40.0").unwrap();
        assert!(amount.is_zero());
        let amount: PigmentAmount = serde_json::from_str("12.5").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "12.5");
    }
}
