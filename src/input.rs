//! Line-oriented console input: coordinate parsing and re-prompting readers.

use std::io::{self, BufRead, Write};

use crate::board::Coord;

/// Parse `"row,col"` into a coordinate.
///
/// Spaces anywhere in the text are ignored. Both halves must be non-negative
/// integers; whether the cell lies on the board is checked by the caller.
pub fn parse_coord(text: &str) -> Option<Coord> {
    let text: String = text.chars().filter(|c| *c != ' ').collect();
    let (row, col) = text.split_once(',')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

/// Read one line, without its line terminator.
///
/// Running out of input is an `UnexpectedEof` error so prompt loops cannot spin forever.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Print `message` and read a non-empty line.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;
        let line = read_line(input)?;
        let line = line.trim();
        if !line.is_empty() {
            return Ok(line.to_string());
        }
    }
}

/// Print `message` and read a non-negative integer.
///
/// Non-numeric and negative answers, and zero when `allow_zero` is false,
/// print `error_message` and ask again.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    error_message: &str,
    allow_zero: bool,
) -> io::Result<usize> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;
        match read_line(input)?.trim().parse::<usize>() {
            Ok(0) if !allow_zero => {}
            Ok(n) => return Ok(n),
            Err(_) => {}
        }
        tracing::warn!("rejected numeric input");
        writeln!(output, "{error_message}")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("2,3"), Some((2, 3)));
        assert_eq!(parse_coord(" 10 , 4 "), Some((10, 4)));
        assert_eq!(parse_coord("0,0\n".trim()), Some((0, 0)));
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("23"), None);
        assert_eq!(parse_coord("a,b"), None);
        assert_eq!(parse_coord("-1,2"), None);
        assert_eq!(parse_coord("1,2,3"), None);
        assert_eq!(parse_coord(",4"), None);
    }

    #[test]
    fn test_prompt_number_retries() {
        let mut input = Cursor::new("abc\n-3\n0\n4\n");
        let mut output = Vec::new();
        let n = prompt_number(&mut input, &mut output, "How many? ", "Nope", false).unwrap();
        assert_eq!(n, 4);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Nope").count(), 3);
        assert_eq!(text.matches("How many? ").count(), 4);
    }

    #[test]
    fn test_prompt_number_allows_zero() {
        let mut input = Cursor::new("0\n");
        let mut output = Vec::new();
        let n = prompt_number(&mut input, &mut output, "> ", "Nope", true).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_prompt_number_eof() {
        let mut input = Cursor::new("x\n");
        let mut output = Vec::new();
        let err = prompt_number(&mut input, &mut output, "> ", "Nope", true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_line_skips_blank() {
        let mut input = Cursor::new("\n   \nAda\r\n");
        let mut output = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut output, "Name: ").unwrap(), "Ada");
    }
}
