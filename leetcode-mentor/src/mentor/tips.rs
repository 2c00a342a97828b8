//! Static study tips shown after a session with `--tips`.

pub struct TipGroup {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

pub const TIP_GROUPS: [TipGroup; 3] = [
    TipGroup {
        title: "Problem Approach",
        tips: &[
            "Read the problem twice",
            "Understand constraints",
            "Think of edge cases",
            "Start with brute force",
        ],
    },
    TipGroup {
        title: "Optimization Strategy",
        tips: &[
            "Identify bottlenecks",
            "Use appropriate data structures",
            "Consider time vs space tradeoffs",
            "Think of mathematical shortcuts",
        ],
    },
    TipGroup {
        title: "Best Practices",
        tips: &[
            "Write clean, readable code",
            "Add meaningful comments",
            "Test with examples",
            "Practice similar problems",
        ],
    },
];

/// Render all tip groups as plain text.
pub fn render_tips() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str("Pro Tips\n");
    out.push_str(&format!("{}\n", "=".repeat(80)));
    for group in &TIP_GROUPS {
        out.push_str(&format!("\n{}\n", group.title));
        for tip in group.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }
    out
}
