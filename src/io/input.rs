//! Bounded-integer prompting from a console stream
//!
//! Invalid lines are discarded and the prompt repeats; only a closed input
//! stream ends the loop. The reader and writer are generic so tests can
//! drive a session from in-memory buffers.

use std::io::{BufRead, Write};

use crate::io::error::{Result, TourError};

/// Prompt until a line parses as an integer within `[lower, upper]`
///
/// The prompt is written without a trailing newline, the way a console
/// session leaves the cursor on the prompt line. Non-integer lines and
/// integers outside the bounds are discarded silently and the prompt repeats.
///
/// # Errors
///
/// Returns `InputClosed` if the input stream reaches end-of-file before an
/// acceptable value arrives, and `FileSystem` if reading or writing fails.
pub fn prompt_bounded_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    lower: usize,
    upper: usize,
    prompt: &str,
) -> Result<usize> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(TourError::InputClosed {
                prompt: prompt.to_string(),
            });
        }

        if let Ok(value) = line.trim().parse::<i64>() {
            if (lower as i64..=upper as i64).contains(&value) {
                return Ok(value as usize);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_value_inside_bounds() {
        let mut input = Cursor::new("7\n");
        let mut output = Vec::new();

        let value = prompt_bounded_integer(&mut input, &mut output, 3, 10, "rows: ");
        assert!(matches!(value, Ok(7)));
        assert_eq!(String::from_utf8_lossy(&output), "rows: ");
    }

    #[test]
    fn test_discards_invalid_lines_and_reprompts() {
        let mut input = Cursor::new("knight\n0\n11\n-4\n10\n");
        let mut output = Vec::new();

        let value = prompt_bounded_integer(&mut input, &mut output, 3, 10, "rows: ");
        assert!(matches!(value, Ok(10)));
        // One prompt per discarded line plus the accepted one
        assert_eq!(String::from_utf8_lossy(&output).matches("rows: ").count(), 5);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let result = prompt_bounded_integer(&mut input, &mut output, 3, 10, "rows: ");
        assert!(matches!(result, Err(TourError::InputClosed { .. })));
    }

    #[test]
    fn test_boundary_values_are_inclusive() {
        let mut output = Vec::new();

        let mut lower_input = Cursor::new("3\n");
        let lower = prompt_bounded_integer(&mut lower_input, &mut output, 3, 10, "rows: ");
        assert!(matches!(lower, Ok(3)));

        let mut upper_input = Cursor::new("10\n");
        let upper = prompt_bounded_integer(&mut upper_input, &mut output, 3, 10, "rows: ");
        assert!(matches!(upper, Ok(10)));
    }
}
