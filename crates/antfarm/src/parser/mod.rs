use thiserror::Error;

use crate::farm::{Farm, FarmBuilder, FarmError};

/// Rejection of a farm description file.
///
/// Line numbers are 1-based and refer to the physical line in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input, expected an ant count")]
    MissingAntCount,
    #[error("line {line}: invalid ant count '{text}', must be a positive integer")]
    BadAntCount { line: usize, text: String },
    #[error("line {line}: malformed room line '{text}', expected 'name x y'")]
    MalformedRoom { line: usize, text: String },
    #[error("line {line}: invalid coordinate in '{text}'")]
    BadCoordinate { line: usize, text: String },
    #[error("line {line}: invalid room name '{name}'")]
    BadRoomName { line: usize, name: String },
    #[error("line {line}: malformed tunnel '{text}', expected 'a-b'")]
    MalformedTunnel { line: usize, text: String },
    #[error("line {line}: {source}")]
    At { line: usize, source: FarmError },
    #[error(transparent)]
    Structure(#[from] FarmError),
}

/// Parse a farm description into an immutable [`Farm`].
///
/// The format, line by line:
/// - the first non-comment line is the ant count, a positive integer;
/// - `#...` lines are comments; `##start` and `##end` mark the next room
///   line as source and sink respectively;
/// - a room line is `name x y` with integer coordinates;
/// - a tunnel line is `a-b` between two already defined rooms.
///
/// Room names must not begin with `L` or `#` and must not contain `-`.
/// Anything else, including blank lines, is rejected.
pub fn parse(input: &str) -> Result<Farm, ParseError> {
    let mut builder = FarmBuilder::new();
    let mut ant_count: Option<usize> = None;
    let mut next_is_source = false;
    let mut next_is_sink = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;

        if raw.starts_with('#') {
            if raw == "##start" {
                next_is_source = true;
            } else if raw == "##end" {
                next_is_sink = true;
            }
            continue;
        }

        if ant_count.is_none() {
            let count = raw.parse::<usize>().ok().filter(|&n| n >= 1).ok_or_else(|| {
                ParseError::BadAntCount {
                    line,
                    text: raw.to_string(),
                }
            })?;
            ant_count = Some(count);
            continue;
        }

        // A tunnel line is a single token; room coordinates may be negative,
        // so a `-` alone does not make a line a tunnel.
        if !raw.contains(char::is_whitespace) && raw.contains('-') {
            parse_tunnel(&mut builder, raw, line)?;
        } else {
            parse_room(&mut builder, raw, line, next_is_source, next_is_sink)?;
            next_is_source = false;
            next_is_sink = false;
        }
    }

    let ant_count = ant_count.ok_or(ParseError::MissingAntCount)?;
    Ok(builder.finish(ant_count)?)
}

fn parse_room(
    builder: &mut FarmBuilder,
    raw: &str,
    line: usize,
    is_source: bool,
    is_sink: bool,
) -> Result<(), ParseError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let &[name, x, y] = fields.as_slice() else {
        return Err(ParseError::MalformedRoom {
            line,
            text: raw.to_string(),
        });
    };
    if name.starts_with('L') || name.starts_with('#') || name.contains('-') {
        return Err(ParseError::BadRoomName {
            line,
            name: name.to_string(),
        });
    }
    let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
        return Err(ParseError::BadCoordinate {
            line,
            text: raw.to_string(),
        });
    };
    builder
        .add_room(name, x, y, is_source, is_sink)
        .map(|_| ())
        .map_err(|source| ParseError::At { line, source })
}

fn parse_tunnel(builder: &mut FarmBuilder, raw: &str, line: usize) -> Result<(), ParseError> {
    let mut parts = raw.split('-');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MalformedTunnel {
            line,
            text: raw.to_string(),
        });
    };
    if a.is_empty() || b.is_empty() {
        return Err(ParseError::MalformedTunnel {
            line,
            text: raw.to_string(),
        });
    }
    builder
        .add_tunnel(a, b)
        .map_err(|source| ParseError::At { line, source })
}
