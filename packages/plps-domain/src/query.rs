pub const DEFAULT_LIMIT: u32 = 8;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 20;

pub const DEFAULT_MIN_CHARS: u32 = 2;
pub const MAX_MIN_CHARS: u32 = 10;

pub const OVERSAMPLE_FACTOR: u32 = 8;
pub const OVERSAMPLE_FLOOR: u32 = 50;
pub const OVERSAMPLE_CEILING: u32 = 200;

/// Case-folded, trimmed form used for every comparison between a title and a term.
pub fn normalize(text: &str) -> String {
	text.trim().to_lowercase()
}

/// The term a request actually searches for, or `None` when nothing is left after trimming.
pub fn effective_term(raw: &str) -> Option<&str> {
	let trimmed = raw.trim();

	if trimmed.is_empty() { None } else { Some(trimmed) }
}

pub fn clamp_limit(requested: i64) -> u32 {
	requested.clamp(MIN_LIMIT as i64, MAX_LIMIT as i64) as u32
}

/// Limit from a form field. Absent or non-integer input falls back to [`DEFAULT_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> u32 {
	match raw.map(str::trim).and_then(|value| value.parse::<i64>().ok()) {
		Some(value) => clamp_limit(value),
		None => DEFAULT_LIMIT,
	}
}

/// Candidate pool size for a display limit.
pub fn oversample_limit(limit: u32) -> u32 {
	limit.saturating_mul(OVERSAMPLE_FACTOR).clamp(OVERSAMPLE_FLOOR, OVERSAMPLE_CEILING)
}

pub fn clamp_min_chars(requested: i64) -> u32 {
	requested.clamp(1, MAX_MIN_CHARS as i64) as u32
}
