//! Post-execution memory reports

use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use uvm_common::UvmError;

/// A half-open `[start, end)` window over VM memory, written `start:end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRange {
    pub start: i64,
    pub end: i64,
}

impl MemoryRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Checks the window against a memory of `size` cells.
    ///
    /// Bounds are never clamped: anything outside `[0, size]`, or a start past
    /// the end, is a `RangeError`.
    pub fn validate(&self, size: usize) -> Result<Range<usize>, UvmError> {
        if self.start > self.end {
            return Err(UvmError::range(format!(
                "start {} is greater than end {}",
                self.start, self.end
            )));
        }

        let start = usize::try_from(self.start)
            .map_err(|_| UvmError::range(format!("start {} is negative", self.start)))?;
        let end = usize::try_from(self.end)
            .ok()
            .filter(|&end| end <= size)
            .ok_or_else(|| {
                UvmError::range(format!("end {} exceeds memory size {}", self.end, size))
            })?;

        Ok(start..end)
    }
}

impl FromStr for MemoryRange {
    type Err = UvmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| UvmError::range(format!("expected `start:end`, got `{}`", s)))?;

        let parse = |bound: &str| {
            bound
                .trim()
                .parse::<i64>()
                .map_err(|_| UvmError::range(format!("invalid bound `{}` in `{}`", bound, s)))
        };

        Ok(MemoryRange::new(parse(start)?, parse(end)?))
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// The result record written after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryReport {
    pub memory: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_range() {
        assert_eq!("0:5".parse::<MemoryRange>().unwrap(), MemoryRange::new(0, 5));
        assert_eq!(" 10 : 20 ".parse::<MemoryRange>().unwrap(), MemoryRange::new(10, 20));
        assert_eq!(MemoryRange::new(3, 9).to_string(), "3:9");
    }

    #[test]
    fn test_parse_range_errors() {
        for bad in ["", "5", "a:b", "1:2:3", ":4"] {
            assert!(
                matches!(bad.parse::<MemoryRange>(), Err(UvmError::RangeError { .. })),
                "`{}` should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(MemoryRange::new(0, 10_000).validate(10_000).unwrap(), 0..10_000);
        assert_eq!(MemoryRange::new(7, 7).validate(10_000).unwrap(), 7..7);
        assert!(MemoryRange::new(-1, 5).validate(10_000).is_err());
        assert!(MemoryRange::new(0, 10_001).validate(10_000).is_err());
        assert!(MemoryRange::new(6, 5).validate(10_000).is_err());
    }

    #[test]
    fn test_report_serialization() {
        let report = MemoryReport {
            memory: vec![925, 1850],
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"memory":[925,1850]}"#
        );
    }
}
