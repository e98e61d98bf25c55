// Resume analysis: skill extraction, keyword mining and ATS scoring.
// Everything here is pure and synchronous; no I/O, no LLM calls.

pub mod ats_scorer;
pub mod dictionaries;
pub mod keywords;
pub mod skills;
pub mod stopwords;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(0.004), 0.0);
    }
}
