//! The edge list domain type and the free-text edge parser.

use thiserror::Error;

/// Lowest coordinate a user-entered endpoint may have.
pub const COORD_MIN: i64 = 0;
/// Highest coordinate a user-entered endpoint may have.
pub const COORD_MAX: i64 = 4000;

/// A colored line segment between two endpoints.
///
/// User-entered edges always hold whole numbers in `[COORD_MIN, COORD_MAX]`;
/// server-produced edges carry whatever coordinates the route service
/// reported, so the fields are `f64` like the wire format.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub color: String,
}

/// Why a submitted block of edge text was rejected.
///
/// Line numbers are 1-based, matching what the user sees in the textarea.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseEdgeError {
	#[error("line {line}: expected \"x1 y1 x2 y2 color\", found {found} value(s)")]
	MissingTokens { line: usize, found: usize },

	#[error("line {line}: coordinates must be integers, found \"{token}\"")]
	NotAnInteger { line: usize, token: String },

	#[error("line {line}: coordinates must be between {COORD_MIN} and {COORD_MAX}, found {value}")]
	OutOfRange { line: usize, value: i64 },

	#[error("no edges were given")]
	Empty,
}

/// Parse a multi-line block of `x1 y1 x2 y2 color` lines into edges.
///
/// Acceptance is all-or-nothing: the first invalid line rejects the whole
/// block, and a block that yields no edges at all is rejected too. Tokens
/// past the color are ignored.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>, ParseEdgeError> {
	let mut edges = Vec::new();

	for (i, raw) in text.lines().enumerate() {
		let line = i + 1;
		let tokens: Vec<&str> = raw.split_whitespace().collect();
		if tokens.len() < 5 {
			return Err(ParseEdgeError::MissingTokens {
				line,
				found: tokens.len(),
			});
		}

		let mut coords = [0i64; 4];
		for (slot, token) in coords.iter_mut().zip(&tokens[..4]) {
			let value: i64 = token.parse().map_err(|_| ParseEdgeError::NotAnInteger {
				line,
				token: (*token).to_string(),
			})?;
			if !(COORD_MIN..=COORD_MAX).contains(&value) {
				return Err(ParseEdgeError::OutOfRange { line, value });
			}
			*slot = value;
		}

		edges.push(Edge {
			x1: coords[0] as f64,
			y1: coords[1] as f64,
			x2: coords[2] as f64,
			y2: coords[3] as f64,
			color: tokens[4].to_string(),
		});
	}

	if edges.is_empty() {
		return Err(ParseEdgeError::Empty);
	}
	Ok(edges)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn edge(x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> Edge {
		Edge {
			x1,
			y1,
			x2,
			y2,
			color: color.to_string(),
		}
	}

	#[test]
	fn single_valid_line() {
		assert_eq!(
			parse_edges("0 0 100 100 red"),
			Ok(vec![edge(0.0, 0.0, 100.0, 100.0, "red")])
		);
	}

	#[test]
	fn multiple_lines_keep_input_order() {
		let parsed = parse_edges("0 0 100 100 red\n5 6 7 8 blue\n4000 4000 0 0 rebeccapurple");
		assert_eq!(
			parsed,
			Ok(vec![
				edge(0.0, 0.0, 100.0, 100.0, "red"),
				edge(5.0, 6.0, 7.0, 8.0, "blue"),
				edge(4000.0, 4000.0, 0.0, 0.0, "rebeccapurple"),
			])
		);
	}

	#[test]
	fn negative_coordinate_rejects_whole_batch() {
		assert_eq!(
			parse_edges("0 0 100 100 red\n-1 0 1 1 blue"),
			Err(ParseEdgeError::OutOfRange { line: 2, value: -1 })
		);
	}

	#[test]
	fn coordinate_above_limit_rejects_whole_batch() {
		assert_eq!(
			parse_edges("0 0 4001 100 red"),
			Err(ParseEdgeError::OutOfRange {
				line: 1,
				value: 4001
			})
		);
	}

	#[test]
	fn non_integer_coordinate_is_rejected() {
		assert_eq!(
			parse_edges("0 0 1.5 100 red"),
			Err(ParseEdgeError::NotAnInteger {
				line: 1,
				token: "1.5".to_string()
			})
		);
	}

	#[test]
	fn short_line_is_rejected() {
		assert_eq!(
			parse_edges("1 2 3 red"),
			Err(ParseEdgeError::MissingTokens { line: 1, found: 4 })
		);
	}

	#[test]
	fn blank_line_between_edges_rejects_whole_batch() {
		assert_eq!(
			parse_edges("0 0 1 1 red\n\n2 2 3 3 blue"),
			Err(ParseEdgeError::MissingTokens { line: 2, found: 0 })
		);
	}

	#[test]
	fn empty_input_yields_no_edges() {
		assert_eq!(parse_edges(""), Err(ParseEdgeError::Empty));
	}

	#[test]
	fn extra_tokens_after_color_are_ignored() {
		assert_eq!(
			parse_edges("1 2 3 4 green ignored trailing"),
			Ok(vec![edge(1.0, 2.0, 3.0, 4.0, "green")])
		);
	}

	#[test]
	fn repeated_whitespace_splits_cleanly() {
		assert_eq!(
			parse_edges("  10\t20   30 40   black  "),
			Ok(vec![edge(10.0, 20.0, 30.0, 40.0, "black")])
		);
	}

	#[test]
	fn boundary_coordinates_are_accepted() {
		assert_eq!(
			parse_edges("0 4000 4000 0 orange"),
			Ok(vec![edge(0.0, 4000.0, 4000.0, 0.0, "orange")])
		);
	}
}
