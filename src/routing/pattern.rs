//! Path pattern compilation and structural matching.
//!
//! Patterns are path templates made of literal segments and `{name}`
//! parameter segments, e.g. `/{category_slug}/{product_slug}/`. A
//! parameter segment captures exactly one path segment (it never crosses
//! a `/`), so a pattern with N segments only matches paths with exactly
//! N segments. Matching is trailing-slash tolerant: `/cart` and `/cart/`
//! resolve identically.

use std::collections::HashMap;

use super::error::RouteError;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 512;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 16;

/// Maximum allowed size for the compiled regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled path pattern.
///
/// The original pattern string is preserved verbatim for display and for
/// reverse URL generation; matching runs against an anchored regex
/// compiled from the normalized pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled anchored regex.
	regex: regex::Regex,
	/// Parameter names in pattern order.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`RouteError::InvalidPattern`] if the pattern is empty or
	/// does not start with `/`, exceeds the length or segment limits,
	/// contains a malformed `{name}` parameter, or fails to compile.
	pub fn new(pattern: &str) -> Result<Self, RouteError> {
		let invalid = |reason: &str| RouteError::InvalidPattern {
			pattern: pattern.to_string(),
			reason: reason.to_string(),
		};

		if pattern.is_empty() || !pattern.starts_with('/') {
			return Err(invalid("pattern must be non-empty and start with '/'"));
		}
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(invalid("pattern exceeds maximum length"));
		}
		if pattern.split('/').count() > MAX_PATH_SEGMENTS {
			return Err(invalid("pattern exceeds maximum segment count"));
		}

		let (regex_str, param_names) = Self::compile(normalize(pattern))
			.map_err(|reason| invalid(&reason))?;

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| invalid(&e.to_string()))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Compiles a normalized pattern into a regex string and its ordered
	/// parameter names.
	fn compile(pattern: &str) -> Result<(String, Vec<String>), String> {
		let mut regex_str = String::from("^");
		let mut param_names: Vec<String> = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut param = String::new();
					let mut closed = false;
					for next in chars.by_ref() {
						if next == '}' {
							closed = true;
							break;
						}
						param.push(next);
					}
					if !closed {
						return Err("unclosed parameter brace".to_string());
					}
					if param.is_empty()
						|| !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
					{
						return Err(format!("invalid parameter name `{}`", param));
					}
					if param_names.contains(&param) {
						return Err(format!("duplicate parameter name `{}`", param));
					}
					// One path segment per parameter, never crossing '/'
					regex_str.push_str(&format!("(?P<{}>[^/]+)", param));
					param_names.push(param);
				}
				'}' => return Err("unmatched closing brace".to_string()),
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|'
				| '\\' => {
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => regex_str.push(c),
			}
		}

		regex_str.push('$');
		Ok((regex_str, param_names))
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Attempts to match a path, binding parameter segments to their
	/// literal values.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		self.regex.captures(normalize(path)).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect()
		})
	}

	/// Checks whether this pattern matches the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(normalize(path))
	}

	/// Generates a path from this pattern with the given parameter
	/// bindings, preserving the pattern's literal text (including any
	/// trailing slash) verbatim.
	///
	/// Returns `None` if a parameter binding is missing.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut result = self.pattern.clone();
		for name in &self.param_names {
			let value = params.get(name)?;
			result = result.replace(&format!("{{{}}}", name), value);
		}
		Some(result)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

/// Strips a single trailing slash so `/cart` and `/cart/` compare equal.
/// The root path `/` is left untouched.
fn normalize(path: &str) -> &str {
	if path.len() > 1 && path.ends_with('/') {
		&path[..path.len() - 1]
	} else {
		path
	}
}
