//! Advice rules: a pure function from [`Answers`] to advice text.
//!
//! Rule order is fixed: header, exactly one experience fragment, the
//! goal-triggered fragments, the learning-triggered fragment, then the closer.
//! Only the experience rule is a mutually exclusive branch; the others are
//! evaluated independently and appended when they fire.

use crate::questions::{Answers, Experience, Goal, Learning};

pub const HEADER: &str = "Based on your answers, here is some general advice:";

pub const FOUNDATIONAL_SKILLS: &str = "- Focus on building foundational skills: get comfortable with core tools, \
ask questions, and learn from senior colleagues.";
pub const RESPONSIBILITY_GROWTH: &str = "- Look for opportunities to take on more responsibility: own a feature \
or service end to end, and mentor newer team members.";
pub const STRATEGIC_IMPACT: &str = "- Focus on strategic impact: shape technical direction, influence \
architecture decisions, and grow the people around you.";

pub const COMPENSATION: &str = "- Research salary benchmarks for your role and region, and prepare \
evidence of your impact before negotiating.";
pub const WORK_LIFE_BALANCE: &str = "- Identify sources of imbalance (on-call load, scope creep, \
meetings) and discuss boundaries with your manager.";

pub const CERTIFICATIONS: &str = "- Prioritize certifications that align with your target role, \
and pair them with hands-on projects.";

pub const CLOSER: &str = "Remember: Continuous learning, networking, and seeking feedback are crucial \
for IT career growth.";

/// Build the advice text for a completed questionnaire.
pub fn generate(answers: &Answers) -> String {
    let mut lines: Vec<&str> = vec![HEADER, experience_fragment(answers.experience)];

    if answers.goal == Goal::Compensation {
        lines.push(COMPENSATION);
    }
    if answers.goal == Goal::WorkLifeBalance {
        lines.push(WORK_LIFE_BALANCE);
    }
    if answers.learning == Learning::Certifications {
        lines.push(CERTIFICATIONS);
    }

    let mut advice = lines.join("\n");
    advice.push_str("\n\n");
    advice.push_str(CLOSER);
    advice
}

fn experience_fragment(experience: Experience) -> &'static str {
    match experience {
        Experience::Entry => FOUNDATIONAL_SKILLS,
        Experience::Mid => RESPONSIBILITY_GROWTH,
        Experience::Senior => STRATEGIC_IMPACT,
    }
}
