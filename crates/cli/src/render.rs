//! Plain-text rendering of project cards.

use std::fmt::Write;

use talentboard_core::{ApplicationAffordance, ProjectCard};

/// Render one card as a short block of lines.
pub fn render_card(card: &ProjectCard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#{} {} [{}]", card.id, card.title, card.category);
    let _ = writeln!(
        out,
        "    {} | {} | {} applicant(s){}",
        card.budget,
        card.complexity.label(),
        card.applicant_count,
        card.deadline
            .as_deref()
            .map(|d| format!(" | due {d}"))
            .unwrap_or_default()
    );
    if let Some(owner) = &card.owner_name {
        let _ = writeln!(out, "    by {owner}");
    }
    if let Some(description) = &card.description {
        let _ = writeln!(out, "    {description}");
    }
    if !card.skills.is_empty() {
        let _ = writeln!(out, "    skills: {}", card.skills.join(", "));
    }
    if let Some(duration) = &card.estimated_duration {
        let _ = writeln!(out, "    duration: {duration}");
    }
    let _ = write!(out, "    {}", render_affordance(card.affordance));

    out
}

fn render_affordance(affordance: ApplicationAffordance) -> String {
    if affordance.can_apply() {
        format!("[ {} ]", affordance.label())
    } else {
        format!("({})", affordance.label())
    }
}
