//! Deterministic eight-node roadmap used whenever generation is unavailable or fails.

use crate::roadmap::models::{Difficulty, Resource, SkillNode, SkillRoadmap};

type MockNode = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Difficulty,
    &'static [(&'static str, &'static str)],
);

const MOCK_NODES: [MockNode; 8] = [
    (
        "skill-1",
        "Learn Basic Programming Concepts",
        "Master fundamental programming concepts including variables, data types, control structures, and functions.",
        "0-3 months",
        Difficulty::Beginner,
        &[
            ("Codecademy - Learn Programming", "https://www.codecademy.com/"),
            (
                "CS50: Introduction to Computer Science",
                "https://cs50.harvard.edu/college/2023/fall/",
            ),
        ],
    ),
    (
        "skill-2",
        "Object-Oriented Programming",
        "Understand OOP principles including classes, objects, inheritance, polymorphism, and encapsulation.",
        "0-3 months",
        Difficulty::Beginner,
        &[(
            "Object-Oriented Programming in Java",
            "https://www.coursera.org/learn/object-oriented-java",
        )],
    ),
    (
        "skill-3",
        "Version Control with Git",
        "Learn to manage code repositories, track changes, and collaborate using Git and GitHub.",
        "0-3 months",
        Difficulty::Beginner,
        &[
            ("Git - The Simple Guide", "https://rogerdudler.github.io/git-guide/"),
            ("GitHub Learning Lab", "https://lab.github.com/"),
        ],
    ),
    (
        "skill-4",
        "Frontend Development",
        "Master HTML, CSS, and JavaScript to build interactive user interfaces.",
        "3-6 months",
        Difficulty::Intermediate,
        &[
            ("MDN Web Docs", "https://developer.mozilla.org/"),
            ("Frontend Masters", "https://frontendmasters.com/"),
        ],
    ),
    (
        "skill-5",
        "Backend Development",
        "Learn server-side programming, API design, and database management.",
        "3-6 months",
        Difficulty::Intermediate,
        &[
            ("Node.js Documentation", "https://nodejs.org/en/docs/"),
            ("MongoDB University", "https://university.mongodb.com/"),
        ],
    ),
    (
        "skill-6",
        "Software Testing",
        "Understand different testing methodologies and tools to ensure code quality.",
        "6-12 months",
        Difficulty::Intermediate,
        &[(
            "Test Automation University",
            "https://testautomationu.applitools.com/",
        )],
    ),
    (
        "skill-7",
        "System Design",
        "Learn to design scalable, resilient software systems and architectures.",
        "1-2 years",
        Difficulty::Advanced,
        &[(
            "System Design Primer",
            "https://github.com/donnemartin/system-design-primer",
        )],
    ),
    (
        "skill-8",
        "DevOps and Deployment",
        "Master CI/CD pipelines, containerization, and cloud deployment.",
        "1-2 years",
        Difficulty::Advanced,
        &[
            ("Docker Documentation", "https://docs.docker.com/"),
            (
                "AWS Training and Certification",
                "https://aws.amazon.com/training/",
            ),
        ],
    ),
];

/// The node content is fixed; only `career_title` varies.
pub fn mock_roadmap(career_title: &str) -> SkillRoadmap {
    let skill_nodes = MOCK_NODES
        .iter()
        .map(
            |&(id, title, description, timeframe, difficulty, resources)| SkillNode {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                timeframe: timeframe.to_string(),
                difficulty,
                resources: Some(
                    resources
                        .iter()
                        .map(|&(name, url)| Resource {
                            name: name.to_string(),
                            url: url.to_string(),
                        })
                        .collect(),
                ),
            },
        )
        .collect();

    SkillRoadmap {
        career_title: career_title.to_string(),
        skill_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_is_keyed_only_by_title() {
        let a = mock_roadmap("Chef");
        let b = mock_roadmap("Pilot");
        assert_eq!(a.career_title, "Chef");
        assert_eq!(b.career_title, "Pilot");
        assert_eq!(a.skill_nodes, b.skill_nodes);
        assert_eq!(a, mock_roadmap("Chef"));
    }

    #[test]
    fn test_mock_has_eight_progressive_nodes() {
        let roadmap = mock_roadmap("Chef");
        assert_eq!(roadmap.skill_nodes.len(), 8);
        assert_eq!(roadmap.skill_nodes[0].id, "skill-1");
        assert_eq!(roadmap.skill_nodes[7].id, "skill-8");
        assert_eq!(roadmap.skill_nodes[0].difficulty, Difficulty::Beginner);
        assert_eq!(roadmap.skill_nodes[7].difficulty, Difficulty::Advanced);
        assert!(roadmap
            .skill_nodes
            .iter()
            .all(|n| n.resources.as_ref().is_some_and(|r| !r.is_empty())));
    }
}
