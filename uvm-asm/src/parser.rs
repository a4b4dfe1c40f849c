use crate::types::{ParsedLine, SourceInstruction};
use uvm_common::UvmError;

/// Line-oriented reader for listings of the form `A=<int>, B=<int>`.
pub struct Parser {
    case_insensitive: bool,
}

impl Parser {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    /// Parses every non-blank line. Stops at the first malformed line.
    pub fn parse_source(&self, source: &str) -> Result<Vec<ParsedLine>, UvmError> {
        let mut parsed = Vec::new();

        for (i, line) in source.lines().enumerate() {
            if let Some(instruction) = self.parse_line(line, i + 1)? {
                parsed.push(ParsedLine {
                    instruction,
                    line_number: i + 1,
                });
            }
        }

        Ok(parsed)
    }

    /// Returns `Ok(None)` for blank and comment-only lines.
    pub fn parse_line(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<Option<SourceInstruction>, UvmError> {
        // Remove comments
        let line = match line.find(|c: char| c == ';' || c == '#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() > 2 {
            return Err(UvmError::malformed(
                line_number,
                format!("expected at most 2 fields, got {}", fields.len()),
            ));
        }

        let mut instruction = SourceInstruction::default();
        let mut seen_a = false;
        let mut seen_b = false;

        for field in fields {
            let field = field.trim();
            if field.is_empty() {
                return Err(UvmError::malformed(line_number, "empty field"));
            }

            let (key, value) = field.split_once('=').ok_or_else(|| {
                UvmError::malformed(line_number, format!("missing '=' in `{}`", field))
            })?;

            let key = key.trim();
            let key = if self.case_insensitive {
                key.to_uppercase()
            } else {
                key.to_string()
            };
            let value = parse_integer(value.trim())
                .map_err(|message| UvmError::malformed(line_number, message))?;

            match key.as_str() {
                "A" => {
                    if seen_a {
                        return Err(UvmError::malformed(line_number, "duplicate field A"));
                    }
                    if seen_b {
                        return Err(UvmError::malformed(line_number, "field A must precede B"));
                    }
                    seen_a = true;
                    instruction.a = value;
                }
                "B" => {
                    if seen_b {
                        return Err(UvmError::malformed(line_number, "duplicate field B"));
                    }
                    seen_b = true;
                    instruction.b = value;
                }
                other => {
                    return Err(UvmError::malformed(
                        line_number,
                        format!("unknown field `{}`", other),
                    ));
                }
            }
        }

        Ok(Some(instruction))
    }
}

/// Parses a decimal, `0x` hex or `0b` binary integer with an optional sign.
///
/// Literals wider than 64 bits wrap; the low bits, which are all the encoder
/// keeps, stay exact.
pub fn parse_integer(operand: &str) -> Result<i64, String> {
    let (negative, digits) = match operand.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, operand.strip_prefix('+').unwrap_or(operand)),
    };

    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else {
        (10, digits)
    };

    if digits.is_empty() {
        return Err(format!("invalid integer `{}`", operand));
    }

    let mut value: i64 = 0;
    for ch in digits.chars() {
        let digit = ch
            .to_digit(radix)
            .ok_or_else(|| format!("invalid integer `{}`", operand))?;
        value = value.wrapping_mul(radix as i64).wrapping_add(digit as i64);
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uvm_common::{mask_opcode, mask_operand};

    fn parse_one(line: &str) -> Result<Option<SourceInstruction>, UvmError> {
        Parser::new(true).parse_line(line, 1)
    }

    #[test]
    fn test_parse_simple_instruction() {
        let lines = Parser::new(true).parse_source("A=1, B=803").unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].instruction, SourceInstruction::new(1, 803));
        assert_eq!(lines[0].line_number, 1);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(
            parse_one("  A = 3 ,   B= 4  ").unwrap(),
            Some(SourceInstruction::new(3, 4))
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        assert_eq!(parse_one("A=2").unwrap(), Some(SourceInstruction::new(2, 0)));
        assert_eq!(parse_one("B=42").unwrap(), Some(SourceInstruction::new(0, 42)));
    }

    #[test]
    fn test_blank_lines_skipped_and_numbered() {
        let source = "A=1, B=5\n\n   \nA=2, B=0\n";
        let lines = Parser::new(true).parse_source(source).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line_number, 4);
        assert_eq!(lines[1].instruction, SourceInstruction::new(2, 0));
    }

    #[test]
    fn test_ignore_comments() {
        assert_eq!(
            parse_one("A=1, B=5 ; push five").unwrap(),
            Some(SourceInstruction::new(1, 5))
        );
        assert_eq!(parse_one("# header").unwrap(), None);
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_one("A1, B=2").unwrap_err();
        assert!(matches!(err, UvmError::MalformedInstruction { line: 1, .. }));
    }

    #[test]
    fn test_non_integer_value() {
        assert!(parse_one("A=one, B=2").is_err());
        assert!(parse_one("A=1, B=").is_err());
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(parse_one("A=1, B=2, C=3").is_err());
        assert!(parse_one("A=1,").is_err());
    }

    #[test]
    fn test_field_order_fixed() {
        assert!(parse_one("B=2, A=1").is_err());
        assert!(parse_one("A=1, A=2").is_err());
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(parse_one("a=1, b=2").unwrap(), Some(SourceInstruction::new(1, 2)));
        assert!(Parser::new(false).parse_line("a=1, b=2", 1).is_err());
    }

    #[test]
    fn test_error_reports_offending_line() {
        let err = Parser::new(true)
            .parse_source("A=1, B=5\nA=2, B=0\ngarbage\n")
            .unwrap_err();
        assert!(matches!(err, UvmError::MalformedInstruction { line: 3, .. }));
    }

    #[test]
    fn test_parse_integer_forms() {
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer("-7").unwrap(), -7);
        assert_eq!(parse_integer("+7").unwrap(), 7);
        assert_eq!(parse_integer("0xFF").unwrap(), 255);
        assert_eq!(parse_integer("0b1010").unwrap(), 10);
        assert!(parse_integer("12abc").is_err());
        assert!(parse_integer("0x").is_err());
    }

    #[test]
    fn test_sign_only_before_prefix() {
        assert_eq!(parse_integer("-0x10").unwrap(), -16);
        assert!(parse_integer("0x-5").is_err());
        assert!(parse_integer("0x+5").is_err());
        assert!(parse_integer("0b-1").is_err());
        assert!(parse_one("A=1, B=0x-5").is_err());
    }

    #[test]
    fn test_wide_literals_keep_low_bits() {
        // 2^64 + 1 and 2^64 + 5
        let inst = parse_one("A=18446744073709551617, B=18446744073709551621")
            .unwrap()
            .unwrap();
        assert_eq!(mask_opcode(inst.a), 1);
        assert_eq!(mask_operand(inst.b), 5);

        assert_eq!(parse_integer("-9223372036854775808").unwrap(), i64::MIN);
        assert_eq!(mask_operand(parse_integer("0x100000000000000007").unwrap()), 7);
    }
}
