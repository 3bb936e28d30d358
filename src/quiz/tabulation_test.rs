use super::*;
use crate::quiztools::MaxEvaluator;
use crate::widgets::Choice;

/// A question whose single choice carries `add`, checked or not.
fn question(add: Option<&str>, checked: bool) -> Question {
    let mut choice = Choice::new("only");
    if let Some(add) = add {
        choice = choice.with_add(add);
    }
    let id = choice.id();
    let mut question = Question::new("q").with_choice(choice);
    if checked {
        question.check(id);
    }
    question
}

fn values(tabulation: &Tabulation) -> Vec<(&str, f64)> {
    tabulation.dimensions().iter().collect()
}

#[test]
fn single_checked_choice_sets_named_dimensions() {
    let questions = [question(Some("a:2,b:3"), true)];
    let report = tabulate("a,b", &questions, &MaxEvaluator).unwrap();
    assert_eq!(values(&report.tabulation), vec![("a", 2.0), ("b", 3.0)]);
    assert_eq!(report.tabulation.result_label(), "b");
    assert!(report.is_complete());
}

#[test]
fn deltas_only_touch_named_dimensions() {
    let questions = [question(Some("b:1.5"), true), question(Some("b:-0.5"), true)];
    let report = tabulate("a,b,c", &questions, &MaxEvaluator).unwrap();
    assert_eq!(values(&report.tabulation), vec![("a", 0.0), ("b", 1.0), ("c", 0.0)]);
}

#[test]
fn unknown_dimension_fails() {
    let questions = [question(Some("z:1"), true)];
    let err = tabulate("a,b", &questions, &MaxEvaluator).unwrap_err();
    assert_eq!(err, QuizError::UnknownDimension { dimension: "z".into() });
}

#[test]
fn malformed_add_command_fails() {
    let questions = [question(Some("a:many"), true)];
    let err = tabulate("a", &questions, &MaxEvaluator).unwrap_err();
    assert!(matches!(err, QuizError::InvalidValue { .. }));
}

#[test]
fn unchecked_add_commands_are_ignored() {
    let questions = [question(Some("z:1"), false)];
    let report = tabulate("a", &questions, &MaxEvaluator).unwrap();
    assert_eq!(report.answered, 0);
    assert_eq!(report.total, 1);
}

#[test]
fn answered_counts_choices_without_add_command() {
    let questions = [question(None, true), question(Some("a:1"), false)];
    let report = tabulate("a", &questions, &MaxEvaluator).unwrap();
    assert_eq!(report.answered, 1);
    assert_eq!(report.total, 2);
    assert!(!report.is_complete());
}

#[test]
fn into_complete_rejects_partial_reports() {
    let questions = [question(None, true), question(None, false)];
    let report = tabulate("a", &questions, &MaxEvaluator).unwrap();
    assert_eq!(report.into_complete().unwrap_err(), QuizError::Incomplete { answered: 1, total: 2 });
}

#[test]
fn no_questions_is_trivially_complete() {
    let report = tabulate("a", &[] as &[Question], &MaxEvaluator).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.tabulation.result_label(), "a");
}

#[test]
fn evaluator_sees_finished_mapping() {
    let questions = [question(Some("coolness:1"), true)];
    let evaluator = |d: &Dimensions| {
        if d.get("coolness").unwrap_or_default() > 0.0 { "cool".to_owned() } else { "uncool".to_owned() }
    };
    let report = tabulate("coolness", &questions, &evaluator).unwrap();
    assert_eq!(report.tabulation.result_label(), "cool");
}

#[test]
fn tabulation_serializes_with_camel_case_label() {
    let questions = [question(Some("a:2"), true)];
    let report = tabulate("a", &questions, &MaxEvaluator).unwrap();
    let json = serde_json::to_value(&report.tabulation).unwrap();
    assert_eq!(json, serde_json::json!({"dimensions": {"a": 2.0}, "resultLabel": "a"}));
}

#[test]
fn overflowing_scores_fail_instead_of_going_infinite() {
    let questions = [question(Some("a:1e308"), true), question(Some("a:1e308"), true)];
    let err = tabulate("a", &questions, &MaxEvaluator).unwrap_err();
    assert!(matches!(err, QuizError::InvalidValue { ref reason, .. } if reason.contains("overflows")));
}
