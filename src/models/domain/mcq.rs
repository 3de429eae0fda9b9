use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Mcq {
    pub question_number: u32, // assigned by the extractor, starts at 1
    pub question: String,
    pub options: McqOptions,
    pub correct_answer: String, // one of "a".."d"
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqOptions {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mcq {
        Mcq {
            question_number: 1,
            question: "What is 2+2".to_string(),
            options: McqOptions {
                a: "3".to_string(),
                b: "4".to_string(),
                c: "5".to_string(),
                d: "6".to_string(),
            },
            correct_answer: "b".to_string(),
        }
    }

    #[test]
    fn mcq_serializes_with_lettered_option_keys() {
        let value = serde_json::to_value(sample()).expect("mcq should serialize");

        assert_eq!(
            value,
            serde_json::json!({
                "question_number": 1,
                "question": "What is 2+2",
                "options": { "a": "3", "b": "4", "c": "5", "d": "6" },
                "correct_answer": "b"
            })
        );
    }
}
