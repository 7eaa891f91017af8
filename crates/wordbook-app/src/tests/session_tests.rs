use std::io::Cursor;

use wordbook_config::Config;
use wordbook_dictionary::RecordParser;

use crate::session::{Flow, Session};
use crate::state::AppState;

const DATA: &str = "\
Cat|noun -=>> A small animal..
Run|verb -=>> To move fast. |noun -=>> A fast pace. |noun -=>> A fast pace.
Run|verb -=>> To manage.
csc340|noun -=>> A programming course.
";

fn state() -> AppState {
    AppState::new(Config::default(), RecordParser::default().parse(DATA))
}

fn transcript(state: &AppState, input: &str) -> String {
    let mut output = Vec::new();
    Session::new(state, Cursor::new(input.as_bytes()), &mut output)
        .run()
        .expect("session io");
    String::from_utf8(output).expect("utf8 output")
}

#[test]
fn test_banner_and_numbered_prompts() {
    let state = state();
    let out = transcript(&state, "cat\n!q\n");

    assert!(out.starts_with("====== DICTIONARY 340 RUST =====\n"));
    assert!(out.contains("------ Keywords: 3\n"));
    assert!(out.contains("------ Definitions: 6\n"));
    assert!(out.contains("Search [1]: "));
    assert!(out.contains("Search [2]: "));
    assert!(!out.contains("Search [3]: "));
    assert!(out.ends_with("-----THANK YOU-----\n"));
}

#[test]
fn test_lookup_renders_sorted_entries() {
    let state = state();
    let out = transcript(&state, "RUN\n!q\n");

    let pace = out.find("        Run [noun] : A fast pace.").unwrap();
    let manage = out.find("        Run [verb] : To manage.").unwrap();
    let fast = out.find("        Run [verb] : To move fast.").unwrap();
    assert!(pace < manage && manage < fast);
}

#[test]
fn test_reverse_and_distinct() {
    let state = state();
    let out = transcript(&state, "run distinct reverse\n!q\n");

    assert_eq!(out.matches("Run [noun] : A fast pace.").count(), 1);
    let fast = out.find("Run [verb] : To move fast.").unwrap();
    let pace = out.find("Run [noun] : A fast pace.").unwrap();
    assert!(fast < pace);
}

#[test]
fn test_prefix_word_lookup() {
    let state = state();
    let out = transcript(&state, "CsC340\n!q\n");
    assert!(out.contains("        CSC340 [noun] : A programming course.\n"));
}

#[test]
fn test_unsatisfiable_filter_prints_not_found() {
    let state = state();
    let out = transcript(&state, "cat verb\n!q\n");

    assert!(out.contains("<NOT FOUND> To be considered for the next release. Thank you."));
    assert!(out.contains("PARAMETER HOW-TO,  please enter:"));
    assert!(!out.contains("Cat [noun]"));
}

#[test]
fn test_misplaced_modifier_is_reported_and_skipped() {
    let state = state();
    let out = transcript(&state, "run distinct noun\n!q\n");

    assert!(out.contains("        <The entered 3rd parameter 'noun' is NOT 'distinct'.>\n"));
    assert!(out.contains("        <The entered 3rd parameter 'noun' is NOT 'reverse'.>\n"));
    assert!(out.contains("        <The entered 3rd parameter 'noun' was disregarded.>\n"));
    assert!(out.contains("        <The 3rd parameter should be 'distinct' or 'reverse'.>\n"));
    // distinct still applied, noun filter not
    assert_eq!(out.matches("Run [noun] : A fast pace.").count(), 1);
    assert!(out.contains("Run [verb] : To manage."));
}

#[test]
fn test_unknown_word() {
    let state = state();
    let out = transcript(&state, "dog\n!q\n");
    assert!(out.contains("<NOT FOUND>"));
    assert!(out.contains("PARAMETER HOW-TO"));
}

#[test]
fn test_bad_token_counts_show_manual() {
    let state = state();
    let mut output = Vec::new();
    let mut session = Session::new(&state, Cursor::new(&b""[..]), &mut output);

    assert_eq!(session.handle_line("\n").unwrap(), Flow::Continue);
    assert_eq!(
        session.handle_line("cat noun distinct reverse extra\n").unwrap(),
        Flow::Continue
    );
    assert_eq!(session.handle_line("!help\n").unwrap(), Flow::Continue);
    assert_eq!(session.handle_line("!Q\n").unwrap(), Flow::Quit);
    drop(session);

    let out = String::from_utf8(output).unwrap();
    assert_eq!(out.matches("PARAMETER HOW-TO").count(), 3);
    assert!(!out.contains("<NOT FOUND>"));
}

#[test]
fn test_end_of_input_ends_session() {
    let state = state();
    let out = transcript(&state, "cat");
    assert!(out.contains("Cat [noun] : A small animal."));
    assert!(out.ends_with("-----THANK YOU-----\n"));
}
