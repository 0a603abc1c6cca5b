//! Pointer-driven runs of the overlay: every assertion follows a real click.

use egui::vec2;
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable;
use quiz_overlay::ui::modal::{HELP_CAPTION, HELP_TEXT};
use quiz_overlay::{QuizEvent, QuizView};

const OWNERSHIP: &str = r#"{
    "questions": {
        "q2": {
            "prompt": "Which references may exist at the same time?",
            "answers": { "many": "Any number of shared references", "readonly": "Shared references to data nobody mutates" },
            "distractors": { "owned": "Two owners of one `String`" }
        },
        "q1": {
            "prompt": "What happens to `s` after `let t = s;`?",
            "answers": { "moved": "The value is moved into `t`" },
            "distractors": { "copied": "The value is copied", "cloned": "The heap buffer is cloned" }
        }
    }
}"#;

/// Below the `md` breakpoint the close icon sits in its own row above the card.
const NARROW: f32 = 480.0;
/// At `md` and up the close icon floats on the card's corner.
const WIDE: f32 = 1100.0;

struct Host {
    view: QuizView,
    events: Vec<QuizEvent>,
}

fn harness(width: f32) -> Harness<'static, Host> {
    let host = Host {
        view: QuizView::from_json(OWNERSHIP).unwrap(),
        events: Vec::new(),
    };
    Harness::builder()
        .with_size(vec2(width, 900.0))
        .build_ui_state(
            |ui, host: &mut Host| {
                if let Some(event) = host.view.show(ui) {
                    host.events.push(event);
                }
            },
            host,
        )
}

fn click(harness: &mut Harness<'_, Host>, label: &str) {
    harness.get_by_label(label).click();
    harness.run();
}

fn started(width: f32) -> Harness<'static, Host> {
    let mut harness = harness(width);
    click(&mut harness, "Start");
    assert_eq!(harness.state().events, [QuizEvent::Opened]);
    assert!(harness.state().view.modal().is_open());
    harness
}

fn help_shown(harness: &Harness<'_, Host>) -> bool {
    harness.state().view.modal().session().unwrap().help_shown()
}

fn caption_toggles_help_and_close_icon_closes(width: f32) {
    let mut harness = started(width);
    assert!(!help_shown(&harness));
    assert!(harness.query_by_label(HELP_TEXT).is_none());

    click(&mut harness, HELP_CAPTION);
    assert!(help_shown(&harness), "caption click at width {width}");
    assert!(harness.query_by_label(HELP_TEXT).is_some());

    click(&mut harness, HELP_CAPTION);
    assert!(!help_shown(&harness));

    click(&mut harness, "✖");
    assert!(!harness.state().view.modal().is_open(), "close click at width {width}");
    assert_eq!(harness.state().events.last(), Some(&QuizEvent::Closed));
    assert!(harness.query_by_label(HELP_CAPTION).is_none());
}

fn single_choice_is_submitted(width: f32) {
    let mut harness = started(width);
    click(&mut harness, "copied");
    click(&mut harness, "moved");
    click(&mut harness, "Submit");

    assert_eq!(
        harness.state().events.last(),
        Some(&QuizEvent::Submitted {
            question_key: "q1".to_owned(),
            selection: vec!["moved".to_owned()],
        })
    );
    assert!(harness.state().view.modal().is_open());
}

fn navigation_moves_between_questions(width: f32) {
    let mut harness = started(width);
    click(&mut harness, "Next ▶");
    assert_eq!(
        harness.state().events.last(),
        Some(&QuizEvent::Navigated { index: 1 })
    );
    let session = harness.state().view.modal().session().unwrap();
    assert_eq!(session.header(), "Question 2/2");

    click(&mut harness, "many");
    click(&mut harness, "owned");
    click(&mut harness, "readonly");
    click(&mut harness, "owned");
    click(&mut harness, "Submit");
    assert_eq!(
        harness.state().events.last(),
        Some(&QuizEvent::Submitted {
            question_key: "q2".to_owned(),
            selection: vec!["many".to_owned(), "readonly".to_owned()],
        })
    );

    click(&mut harness, "◀ Previous");
    assert_eq!(
        harness.state().events.last(),
        Some(&QuizEvent::Navigated { index: 0 })
    );
    let session = harness.state().view.modal().session().unwrap();
    assert_eq!(session.header(), "Question 1/2");
    assert!(session.responses().selection().is_empty());
}

#[test]
fn narrow_caption_toggles_help_and_close_icon_closes() {
    caption_toggles_help_and_close_icon_closes(NARROW);
}

#[test]
fn wide_caption_toggles_help_and_close_icon_closes() {
    caption_toggles_help_and_close_icon_closes(WIDE);
}

#[test]
fn narrow_single_choice_is_submitted() {
    single_choice_is_submitted(NARROW);
}

#[test]
fn wide_single_choice_is_submitted() {
    single_choice_is_submitted(WIDE);
}

#[test]
fn narrow_navigation_moves_between_questions() {
    navigation_moves_between_questions(NARROW);
}

#[test]
fn wide_navigation_moves_between_questions() {
    navigation_moves_between_questions(WIDE);
}

#[test]
fn closing_and_starting_again_resets_the_session() {
    let mut harness = started(NARROW);
    click(&mut harness, "Next ▶");
    click(&mut harness, HELP_CAPTION);
    click(&mut harness, "✖");
    click(&mut harness, "Start");

    assert_eq!(
        harness.state().events,
        [
            QuizEvent::Opened,
            QuizEvent::Navigated { index: 1 },
            QuizEvent::Closed,
            QuizEvent::Opened,
        ]
    );
    let session = harness.state().view.modal().session().unwrap();
    assert_eq!(session.index(), 0);
    assert!(!session.help_shown());
}
