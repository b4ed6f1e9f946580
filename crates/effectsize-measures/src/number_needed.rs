//! Number needed to treat (NNT) and number needed to harm (NNH)
//!
//! Both are reciprocals of an absolute difference in event rates between a
//! control arm (CER) and an experimental arm (EER). A difference pointing the
//! "wrong" way is reported on the other side instead of as a negative number:
//! a treatment that raises the event rate gets an NNH, an adverse event that
//! becomes rarer gets an NNT.

use effectsize_core::{Error, Measure, Result, Undefined};
use serde::{Deserialize, Serialize};

/// Which side of the comparison the number refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Patients treated for one extra to benefit
    Benefit,
    /// Patients treated for one extra to be harmed
    Harm,
}

/// A number needed to treat or harm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberNeeded {
    pub direction: Direction,
    /// 1 / |risk difference|
    pub value: f64,
    /// Signed ARR (for NNT) or ARI (for NNH)
    pub risk_difference: f64,
}

impl NumberNeeded {
    fn from_difference(risk_difference: f64, positive: Direction, negative: Direction) -> Self {
        Self {
            direction: if risk_difference > 0.0 { positive } else { negative },
            value: 1.0 / risk_difference.abs(),
            risk_difference,
        }
    }

    pub fn is_benefit(&self) -> bool {
        self.direction == Direction::Benefit
    }

    pub fn is_harm(&self) -> bool {
        self.direction == Direction::Harm
    }

    /// Whole patients to draw in an icon array: nearest integer, at least 1
    pub fn whole_patients(&self) -> u64 {
        self.value.round().max(1.0) as u64
    }

    /// Rounded up, the convention for reporting NNT in clinical summaries
    pub fn rounded_up(&self) -> u64 {
        self.value.ceil() as u64
    }
}

fn validate_rate(name: &str, rate: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(Error::out_of_range(name, rate, 0.0, 1.0));
    }
    Ok(rate)
}

/// NNT from the control and experimental event rates of a desired outcome
/// reduction
///
/// ARR = CER − EER. A positive ARR gives NNT = 1/ARR; a negative ARR is
/// reported as harm with NNH = 1/|ARR|; zero is `no-difference`. Rates must
/// lie in [0, 1].
pub fn number_needed_to_treat(cer: f64, eer: f64) -> Result<Measure<NumberNeeded>> {
    let arr = validate_rate("cer", cer)? - validate_rate("eer", eer)?;
    if arr == 0.0 {
        return Ok(Measure::Undefined(Undefined::NoDifference));
    }
    Ok(Measure::Value(NumberNeeded::from_difference(
        arr,
        Direction::Benefit,
        Direction::Harm,
    )))
}

/// NNH from the control and experimental rates of an adverse event
///
/// ARI = EER − CER. A positive ARI gives NNH = 1/ARI; a negative ARI is
/// reported as a benefit with NNT = 1/|ARI|; zero is `no-difference`.
pub fn number_needed_to_harm(cer_adverse: f64, eer_adverse: f64) -> Result<Measure<NumberNeeded>> {
    let eer_adverse = validate_rate("eer_adverse", eer_adverse)?;
    let ari = eer_adverse - validate_rate("cer_adverse", cer_adverse)?;
    if ari == 0.0 {
        return Ok(Measure::Undefined(Undefined::NoDifference));
    }
    Ok(Measure::Value(NumberNeeded::from_difference(
        ari,
        Direction::Harm,
        Direction::Benefit,
    )))
}
