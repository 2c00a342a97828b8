//! Common utilities for mentor module tests

use leetcode_mentor::mentor::types::{Difficulty, Language, ProblemSubmission};

pub const TWO_SUM: &str = "Two Sum\n\
Given an array of integers nums and an integer target, return indices of the \
two numbers such that they add up to target.\n\
Input: nums = [2,7,11,15], target = 9\n\
Output: [0,1]";

/// A valid Easy/Python submission for the Two Sum problem.
pub fn two_sum_submission() -> ProblemSubmission {
    ProblemSubmission::new(TWO_SUM, Difficulty::Easy, Language::Python)
}

/// A submission with the given statement, Easy/Python otherwise.
pub fn submission_with(statement: &str) -> ProblemSubmission {
    ProblemSubmission::new(statement, Difficulty::Easy, Language::Python)
}
