//! Card view model shared by every project rendering.
//!
//! Compact (dashboard) and expanded (discovery) cards differ only in how
//! much detail they carry. Both take their affordance from the one
//! resolver in [`crate::state`].

use serde::Serialize;

use crate::project::{Complexity, Project};
use crate::state::ApplicationAffordance;
use crate::types::Id;

/// Maximum number of skill tags on a compact card.
pub const COMPACT_SKILL_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    Compact,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: Id,
    pub title: String,
    /// Omitted on compact cards.
    pub description: Option<String>,
    pub category: String,
    pub budget: String,
    pub deadline: Option<String>,
    pub complexity: Complexity,
    pub skills: Vec<String>,
    pub estimated_duration: Option<String>,
    pub applicant_count: u32,
    pub owner_name: Option<String>,
    pub affordance: ApplicationAffordance,
}

impl ProjectCard {
    pub fn new(project: &Project, layout: CardLayout) -> Self {
        let mut skills: Vec<String> = project
            .required_skills()
            .into_iter()
            .map(str::to_string)
            .collect();

        let (description, estimated_duration) = match layout {
            CardLayout::Compact => {
                skills.truncate(COMPACT_SKILL_LIMIT);
                (None, None)
            }
            CardLayout::Expanded => (
                project.description.clone(),
                project.estimated_duration.clone(),
            ),
        };

        Self {
            id: project.id.clone(),
            title: project.title.clone().unwrap_or_default(),
            description,
            category: project.category.clone(),
            budget: format_budget(project.budget),
            deadline: project.deadline.clone(),
            complexity: project.display_complexity(),
            skills,
            estimated_duration,
            applicant_count: project.applicant_count,
            owner_name: project.owner.as_ref().map(|o| o.name.clone()),
            affordance: project.affordance(),
        }
    }
}

/// Format a whole-rupiah amount as `Rp 1.500.000`.
pub fn format_budget(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ApplicationStatus, ProjectStatus};

    fn project() -> Project {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Mobile app",
            "description": "Build it",
            "category": "Mobile",
            "budget": 2500000,
            "requiredSkills": "Kotlin, Swift, Flutter, Firebase",
            "estimatedDuration": "1 month",
            "applicantCount": 2,
            "owner": { "id": 1, "nama": "PT Maju" },
            "status": "OPEN",
            "myApplicationStatus": "APPROVED"
        }))
        .unwrap()
    }

    #[test]
    fn budget_uses_dot_grouping() {
        assert_eq!(format_budget(0), "Rp 0");
        assert_eq!(format_budget(999), "Rp 999");
        assert_eq!(format_budget(1000), "Rp 1.000");
        assert_eq!(format_budget(1_500_000), "Rp 1.500.000");
    }

    #[test]
    fn compact_card_trims_detail() {
        let card = ProjectCard::new(&project(), CardLayout::Compact);
        assert_eq!(card.skills, vec!["Kotlin", "Swift", "Flutter"]);
        assert!(card.description.is_none());
        assert!(card.estimated_duration.is_none());
        assert_eq!(card.budget, "Rp 2.500.000");
    }

    #[test]
    fn expanded_card_keeps_everything() {
        let card = ProjectCard::new(&project(), CardLayout::Expanded);
        assert_eq!(card.skills.len(), 4);
        assert_eq!(card.description.as_deref(), Some("Build it"));
        assert_eq!(card.owner_name.as_deref(), Some("PT Maju"));
        assert_eq!(card.complexity, Complexity::Intermediate);
    }

    #[test]
    fn both_layouts_share_the_resolved_affordance() {
        for status in ApplicationStatus::ALL {
            let mut p = project();
            p.my_application_status = status;
            p.status = ProjectStatus::Open;
            let compact = ProjectCard::new(&p, CardLayout::Compact);
            let expanded = ProjectCard::new(&p, CardLayout::Expanded);
            assert_eq!(compact.affordance, expanded.affordance);
            assert_eq!(compact.affordance, p.affordance());
        }
    }
}
