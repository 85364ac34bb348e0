use time::macros::datetime;

use vitrina_domain::{Category, Post};

/// Hand-authored posts served when the live fetch fails. The requested
/// locale is stamped onto every entry so the locale stage keeps them all.
pub fn fallback_posts(locale: &str) -> Vec<Post> {
	let categories = fallback_categories();
	let entries = [
		(
			1,
			"The Future of Business Optimization",
			"future-business-optimization",
			"Explore how modern business optimization techniques are transforming industries",
			"# The Future of Business Optimization\n\nBusiness optimization has evolved significantly in recent years...",
			datetime!(2023-05-15 10:00 UTC),
			true,
			8,
			"https://images.unsplash.com/photo-1560732488-7b5e485f6504",
			0,
		),
		(
			2,
			"Digital Transformation Strategies for 2023",
			"digital-transformation-strategies-2023",
			"Learn the top digital transformation strategies that will dominate the business landscape",
			"# Digital Transformation Strategies for 2023\n\nDigital transformation continues to be a priority...",
			datetime!(2023-04-20 10:00 UTC),
			true,
			6,
			"https://images.unsplash.com/photo-1519389950473-47ba0277781c",
			1,
		),
		(
			3,
			"Optimizing Business Processes with AI",
			"optimizing-business-processes-ai",
			"How artificial intelligence is revolutionizing business process optimization",
			"# Optimizing Business Processes with AI\n\nArtificial intelligence is transforming how businesses operate...",
			datetime!(2023-03-10 10:00 UTC),
			false,
			5,
			"https://images.unsplash.com/photo-1661956602944-249bcd04b63f",
			3,
		),
		(
			4,
			"Case Study: Manufacturing Efficiency Improvement",
			"case-study-manufacturing-efficiency",
			"A detailed case study on how we improved manufacturing efficiency by 35%",
			"# Case Study: Manufacturing Efficiency Improvement\n\nIn this case study, we explore how a manufacturing company...",
			datetime!(2023-02-28 10:00 UTC),
			false,
			7,
			"https://images.unsplash.com/photo-1551288049-bebda4e38f71",
			4,
		),
		(
			5,
			"Best Practices for Process Documentation",
			"best-practices-process-documentation",
			"Learn how to document your business processes effectively for better results",
			"# Best Practices for Process Documentation\n\nEffective process documentation is essential for business...",
			datetime!(2023-02-15 10:00 UTC),
			false,
			6,
			"https://images.unsplash.com/photo-1573164713714-d95e436ab8d6",
			2,
		),
		(
			6,
			"Building Custom Software Solutions",
			"building-custom-software-solutions",
			"The complete guide to developing custom software solutions for your business",
			"# Building Custom Software Solutions\n\nCustom software development can provide significant advantages...",
			datetime!(2023-01-20 10:00 UTC),
			false,
			8,
			"https://images.unsplash.com/photo-1454165804606-c3d57bc86b40",
			5,
		),
	];

	entries
		.into_iter()
		.map(
			|(
				id,
				title,
				slug,
				excerpt,
				content,
				published_at,
				featured,
				read_time,
				cover_image,
				category,
			)| Post {
				id,
				title: title.to_string(),
				slug: slug.to_string(),
				excerpt: excerpt.to_string(),
				content: content.to_string(),
				published_at,
				featured,
				read_time,
				cover_image: cover_image.to_string(),
				locale: locale.to_string(),
				author: None,
				category: Some(categories[category].clone()),
			},
		)
		.collect()
}

pub fn fallback_categories() -> Vec<Category> {
	[
		(1, "Business Strategy", "business-strategy", "#3b82f6"),
		(2, "Digital Transformation", "digital-transformation", "#8b5cf6"),
		(3, "Process Management", "process-management", "#ec4899"),
		(4, "Artificial Intelligence", "artificial-intelligence", "#06b6d4"),
		(5, "Case Studies", "case-studies", "#f59e0b"),
		(6, "Software Development", "software-development", "#10b981"),
	]
	.into_iter()
	.map(|(id, name, slug, color)| Category {
		id,
		name: name.to_string(),
		slug: slug.to_string(),
		color: color.to_string(),
	})
	.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn six_entries_with_stamped_locale_and_categories() {
		let posts = fallback_posts("es");

		assert_eq!(posts.len(), 6);
		assert!(posts.iter().all(|post| post.locale == "es"));
		assert!(posts.iter().all(|post| post.category.is_some()));
		assert_eq!(posts.iter().filter(|post| post.featured).count(), 2);
	}

	#[test]
	fn category_colors_match_the_fixed_table() {
		for category in fallback_categories() {
			assert_eq!(category.color, vitrina_domain::category::category_color(&category.name));
		}
	}
}
