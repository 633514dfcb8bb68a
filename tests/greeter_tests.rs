/// Greeter integration tests — the built-in story and RON-loaded templates.

use std::path::Path;
use sunvale_greeter::{greet, Greeter, StoryTemplate, DEFAULT_NAME};

#[test]
fn fixture_matches_builtin_story() {
    let path = Path::new("tests/fixtures/sunvale.ron");
    let loaded = StoryTemplate::load_from_ron(path).unwrap();
    assert_eq!(loaded, StoryTemplate::sunvale());
}

#[test]
fn loaded_greeter_agrees_with_greet() {
    let path = Path::new("tests/fixtures/sunvale.ron");
    let greeter = Greeter::new(StoryTemplate::load_from_ron(path).unwrap());
    for name in [None, Some("Ada"), Some("")] {
        assert_eq!(greeter.greet(name), greet(name));
    }
}

#[test]
fn name_substituted_verbatim() {
    let names = [
        "Ada",
        "",
        DEFAULT_NAME,
        "O'Brien & \"friends\"",
        "{name}",
        "{{",
        "日本語",
        "  padded  ",
        "line\nbreak",
    ];

    let template_len = Greeter::default().template_len();
    for name in names {
        let story = greet(name);
        assert!(
            story.contains(&format!("Hello, {}!", name)),
            "missing greeting for {:?}",
            name
        );
        assert_eq!(story.len(), template_len + name.len(), "length for {:?}", name);
    }
}

#[test]
fn surrounding_text_is_constant() {
    let ada = greet("Ada");
    let grace = greet("Grace");
    let (ada_head, ada_tail) = ada.split_once("Ada").unwrap();
    let (grace_head, grace_tail) = grace.split_once("Grace").unwrap();
    assert_eq!(ada_head, grace_head);
    assert_eq!(ada_tail, grace_tail);
}

#[test]
fn story_has_four_sentences() {
    let story = greet(None);
    assert!(story.ends_with("You took a deep breath, smiled, and felt at home."));
    assert_eq!(story.matches(". ").count(), 2);
    assert_eq!(story.matches("\" ").count(), 1);
}
