#[cfg(test)]
pub mod fixtures {
    /// Output shaped like a well-behaved model response with three questions.
    pub fn sample_model_output() -> &'static str {
        "Here are the questions:\n\n\
         1. What is the capital of France?\n\
         a) Berlin\n\
         b) Madrid\n\
         c) Paris\n\
         d) Rome\n\
         Answer: c)\n\n\
         2. Which planet is known as the Red Planet?\n\
         a) Venus\n\
         b) Mars\n\
         c) Jupiter\n\
         d) Saturn\n\
         Answer: b)\n\n\
         3. What gas do plants absorb?\n\
         a) Carbon dioxide\n\
         b) Oxygen\n\
         c) Nitrogen\n\
         d) Helium\n\
         Answer: a)\n"
    }

    pub fn single_question_output() -> &'static str {
        "1. What is 2+2?a) 3 b) 4 c) 5 d) 6 Answer: b)"
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_contain_answer_markers() {
        assert_eq!(sample_model_output().matches("Answer:").count(), 3);
        assert_eq!(single_question_output().matches("Answer:").count(), 1);
    }
}
