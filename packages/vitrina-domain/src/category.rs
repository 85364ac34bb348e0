/// Badge color when a category name has no assigned color.
pub const DEFAULT_CATEGORY_COLOR: &str = "#9333ea";

/// Editorial color assignments, keyed by category name.
const CATEGORY_COLORS: &[(&str, &str)] = &[
	("Business Strategy", "#3b82f6"),
	("Digital Transformation", "#8b5cf6"),
	("Process Management", "#ec4899"),
	("Artificial Intelligence", "#06b6d4"),
	("Case Studies", "#f59e0b"),
	("Software Development", "#10b981"),
];

pub fn category_color(name: &str) -> &'static str {
	CATEGORY_COLORS
		.iter()
		.find_map(|(known, color)| (*known == name).then_some(*color))
		.unwrap_or(DEFAULT_CATEGORY_COLOR)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_names_map_to_their_color() {
		assert_eq!(category_color("Business Strategy"), "#3b82f6");
		assert_eq!(category_color("Software Development"), "#10b981");
	}

	#[test]
	fn unknown_names_get_the_default() {
		assert_eq!(category_color("Quantum Gardening"), DEFAULT_CATEGORY_COLOR);
	}
}
