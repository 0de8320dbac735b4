//! Integration tests for the scripted conversation flow
//!
//! Drives whole conversations through the public session API and checks the
//! assembled snippet and its formatted block.

use dailysnip::session::{ChatSession, SubmitOutcome};
use dailysnip::snippet::{build_snippet, format_snippet};
use dailysnip::types::Role;

/// One full turn: submit then commit the pending reply.
fn run_turn(session: &mut ChatSession, input: &str) {
    assert_eq!(session.submit(input), SubmitOutcome::Accepted);
    session.commit_reply().expect("reply should be pending");
}

mod conversation_tests {
    use super::*;

    #[test]
    fn full_conversation_produces_the_expected_snippet() {
        let mut session = ChatSession::new();
        for input in ["A", "B", "C", "D", "E"] {
            run_turn(&mut session, input);
        }

        assert!(session.is_complete());
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);

        let snippet = last.snippet.as_ref().expect("completion carries a snippet");
        assert_eq!(snippet.what, "A");
        assert_eq!(snippet.why, "B");
        assert_eq!(snippet.highlight, "C");
        assert_eq!(snippet.lowlight, "D");
        assert_eq!(snippet.tomorrow, "E");
    }

    #[test]
    fn each_turn_appends_exactly_one_question_and_one_answer() {
        let mut session = ChatSession::new();
        let answers = ["stood up the staging env", "release prep", "zero downtime", "flaky dns", "cut the release"];
        for (turn, input) in answers.iter().enumerate() {
            run_turn(&mut session, input);
            assert_eq!(session.messages().len(), 3 + turn * 2);
        }
    }

    #[test]
    fn questions_arrive_in_the_scripted_order() {
        let mut session = ChatSession::new();
        let expected_fragments = ["Why", "Highlight", "Lowlight", "Tomorrow"];
        for (input, fragment) in ["A", "B", "C", "D"].iter().zip(expected_fragments) {
            run_turn(&mut session, input);
            let question = &session.messages().last().unwrap().content;
            assert!(
                question.contains(fragment),
                "expected {fragment:?} in {question:?}"
            );
        }
    }

    #[test]
    fn blank_submissions_do_not_advance_the_conversation() {
        let mut session = ChatSession::new();
        run_turn(&mut session, "wrote tests");

        let before = session.messages().len();
        assert_eq!(session.submit("   "), SubmitOutcome::IgnoredEmpty);
        assert_eq!(session.submit("\n"), SubmitOutcome::IgnoredEmpty);
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn a_second_submission_during_the_typing_window_is_dropped() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit("first answer"), SubmitOutcome::Accepted);
        assert!(session.is_replying());
        assert_eq!(session.submit("impatient follow-up"), SubmitOutcome::IgnoredBusy);

        session.commit_reply().unwrap();
        // greeting + accepted answer + its reply only
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn conversation_keeps_answering_after_completion() {
        let mut session = ChatSession::new();
        for input in ["A", "B", "C", "D", "E"] {
            run_turn(&mut session, input);
        }
        run_turn(&mut session, "one more thought");

        assert!(session.is_complete());
        assert!(session.messages().last().unwrap().snippet.is_some());
    }
}

mod formatting_tests {
    use super::*;

    #[test]
    fn formatted_block_carries_each_answer_under_its_header() {
        let mut session = ChatSession::new();
        for input in ["A", "B", "C", "D", "E"] {
            run_turn(&mut session, input);
        }

        let block = format_snippet(&build_snippet(session.messages()));
        let mut position = 0;
        for (header, value) in [
            ("## What", "A"),
            ("## Why", "B"),
            ("## Highlight", "C"),
            ("## Lowlight", "D"),
            ("## Tomorrow", "E"),
        ] {
            let header_at = block[position..]
                .find(header)
                .unwrap_or_else(|| panic!("{header} out of order in {block:?}"));
            position += header_at;
            let section_start = position + header.len();
            assert!(block[section_start..].trim_start().starts_with(value));
        }
    }

    #[test]
    fn formatting_the_same_transcript_twice_is_identical() {
        let mut session = ChatSession::new();
        for input in ["docs", "onboarding", "good feedback", "slow start", "reviews"] {
            run_turn(&mut session, input);
        }

        let first = format_snippet(&build_snippet(session.messages()));
        let second = format_snippet(&build_snippet(session.messages()));
        assert_eq!(first, second);
    }

    #[test]
    fn partial_transcript_formats_with_empty_sections() {
        let mut session = ChatSession::new();
        run_turn(&mut session, "migrated the database");
        run_turn(&mut session, "quarterly goal");

        let snippet = build_snippet(session.messages());
        assert_eq!(snippet.highlight, "");
        assert_eq!(snippet.lowlight, "");
        assert_eq!(snippet.tomorrow, "");

        let block = format_snippet(&snippet);
        assert!(block.contains("## What\nmigrated the database"));
        assert!(block.contains("## Tomorrow\n"));
    }
}
