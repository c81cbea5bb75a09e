//! Static interest-profiler data served when the upstream assessment is unreachable.

use crate::catalog::models::{AnswerOption, InterestProfiler, InterestResult, Question};

const QUESTIONS: &[(&str, &str)] = &[
    ("Realistic", "Build kitchen cabinets"),
    ("Realistic", "Lay brick or tile"),
    ("Investigative", "Study animal behavior"),
    ("Investigative", "Develop a new medicine"),
    ("Artistic", "Write books or plays"),
    ("Artistic", "Play a musical instrument"),
    ("Social", "Teach children how to read"),
    ("Social", "Help people with personal problems"),
    ("Enterprising", "Sell merchandise at a department store"),
    ("Enterprising", "Manage a retail store"),
    ("Conventional", "Organize and file records"),
    ("Conventional", "Keep track of inventory"),
    ("Realistic", "Repair household appliances"),
    ("Investigative", "Study ways to reduce water pollution"),
    ("Artistic", "Design artwork for magazines"),
    ("Social", "Help conduct a group therapy session"),
    ("Enterprising", "Buy and sell stocks and bonds"),
    ("Conventional", "Develop a spreadsheet using computer software"),
    ("Realistic", "Assemble electronic parts"),
    ("Investigative", "Conduct chemical experiments"),
];

const ANSWER_LABELS: [&str; 5] = [
    "STRONGLY DISLIKE",
    "DISLIKE",
    "UNSURE",
    "LIKE",
    "STRONGLY LIKE",
];

const RESULTS: &[(&str, u32, &str)] = &[
    (
        "Realistic",
        15,
        "People with Realistic interests like work that includes practical, hands-on problems and answers. They like working with plants, animals, and materials like wood, tools, and machinery. They often enjoy working outdoors.",
    ),
    (
        "Investigative",
        20,
        "People with Investigative interests like work that has to do with ideas and thinking rather than physical activity. They like searching for facts and figuring out problems.",
    ),
    (
        "Artistic",
        18,
        "People with Artistic interests like work that deals with the artistic side of things, such as acting, music, art, and design. They like creativity in their work and work that can be done without following a clear set of rules.",
    ),
    (
        "Social",
        25,
        "People with Social interests like working with others to help them learn and grow. They like working with people more than working with objects, machines, or information.",
    ),
    (
        "Enterprising",
        22,
        "People with Enterprising interests like work that has to do with starting up and carrying out business projects. They like taking action rather than thinking about things.",
    ),
    (
        "Conventional",
        12,
        "People with Conventional interests like work that follows set procedures and routines. They prefer working with information and paying attention to details rather than working with ideas.",
    ),
];

pub fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .zip(1u32..)
        .map(|(&(area, text), index)| Question {
            index,
            area: area.to_string(),
            text: text.to_string(),
        })
        .collect()
}

pub fn answer_options() -> Vec<AnswerOption> {
    ANSWER_LABELS
        .iter()
        .zip(1u8..)
        .map(|(&name, value)| AnswerOption {
            value,
            name: name.to_string(),
        })
        .collect()
}

pub fn profiler() -> InterestProfiler {
    InterestProfiler {
        questions: questions(),
        answer_options: answer_options(),
    }
}

/// Six interest areas in fixed order, unsorted.
pub fn results() -> Vec<InterestResult> {
    RESULTS
        .iter()
        .map(|&(area, score, description)| InterestResult {
            area: area.to_string(),
            score,
            description: description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_are_indexed_from_one() {
        let qs = questions();
        assert_eq!(qs.len(), 20);
        assert_eq!(qs[0].index, 1);
        assert_eq!(qs[19].index, 20);
        assert_eq!(qs[19].text, "Conduct chemical experiments");
    }

    #[test]
    fn test_answer_scale_runs_one_to_five() {
        let options = answer_options();
        let values: Vec<u8> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(options[2].name, "UNSURE");
    }

    #[test]
    fn test_results_cover_six_areas() {
        let areas: Vec<String> = results().into_iter().map(|r| r.area).collect();
        assert_eq!(
            areas,
            [
                "Realistic",
                "Investigative",
                "Artistic",
                "Social",
                "Enterprising",
                "Conventional"
            ]
        );
    }
}
