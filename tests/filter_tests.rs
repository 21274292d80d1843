//! Filtering tests for kman
//!
//! Exercise the wildcard filter over plain name lists, typed into a selection engine
//! the way the picker applies it to a directory snapshot.

use kman::app::SelectionEngine;
use kman::core::{FilterError, WildcardMatcher};

/// Types `filter` into a fresh engine over `files` and returns what it selects.
fn filter_files(files: &[&str], filter: &str) -> Result<Vec<String>, FilterError> {
    WildcardMatcher::compile(filter)?;
    let mut engine = SelectionEngine::new(files.iter().map(|s| s.to_string()).collect());
    for c in filter.chars() {
        engine.push(c);
    }
    Ok(engine.snapshot())
}

const FRUIT: [&str; 5] = [
    "green apple",
    "red apple",
    "yellow apple",
    "yellow banana",
    "brown banana",
];

#[test]
fn simple_filtering() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        filter_files(&FRUIT, "apple")?,
        vec!["green apple", "red apple", "yellow apple"]
    );
    Ok(())
}

#[test]
fn filtering_with_wildcard() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        filter_files(&FRUIT, "*ana")?,
        vec!["yellow banana", "brown banana"]
    );
    Ok(())
}

#[test]
fn filtering_with_space() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        filter_files(&FRUIT, " apple")?,
        vec!["green apple", "red apple", "yellow apple"]
    );
    assert_eq!(filter_files(&["a b", "ab"], " b")?, vec!["a b"]);
    Ok(())
}

#[test]
fn filtering_with_single_character_wildcard() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        filter_files(&FRUIT, "a??le")?,
        vec!["green apple", "red apple", "yellow apple"]
    );
    Ok(())
}

#[test]
fn empty_filter_is_identity() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(filter_files(&FRUIT, "")?, FRUIT.to_vec());
    let none: [&str; 0] = [];
    assert!(filter_files(&none, "x")?.is_empty());
    Ok(())
}

#[test]
fn leading_and_trailing_stars_are_redundant() -> Result<(), Box<dyn std::error::Error>> {
    let plain = filter_files(&FRUIT, "ow")?;
    assert_eq!(plain, vec!["yellow apple", "yellow banana", "brown banana"]);
    assert_eq!(filter_files(&FRUIT, "*ow")?, plain);
    assert_eq!(filter_files(&FRUIT, "ow*")?, plain);
    assert_eq!(filter_files(&FRUIT, "*ow*")?, plain);
    Ok(())
}

#[test]
fn literal_filters_are_substring_matches() -> Result<(), Box<dyn std::error::Error>> {
    let names = [
        "deploy.yaml",
        "deploy-v2.yaml",
        "svc(internal).yaml",
        "config[prod].yml",
        "a+b.json",
        "notes",
    ];
    for filter in ["deploy", ".yaml", "(internal)", "[prod]", "a+b", "-v2", "s"] {
        let expected: Vec<&str> = names
            .iter()
            .copied()
            .filter(|n| n.contains(filter))
            .collect();
        assert_eq!(filter_files(&names, filter)?, expected, "filter {:?}", filter);
    }
    Ok(())
}

#[test]
fn refiltering_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let first = filter_files(&FRUIT, "y*a")?;
    let second = filter_files(&FRUIT, "y*a")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn engine_follows_typed_filter() {
    let mut engine = SelectionEngine::new(FRUIT.iter().map(|s| s.to_string()).collect());
    for c in "*ana".chars() {
        engine.push(c);
    }
    assert_eq!(
        engine.selection().collect::<Vec<_>>(),
        vec!["yellow banana", "brown banana"]
    );
    assert_eq!(engine.title(), "Filter: *ana");

    for _ in 0..4 {
        engine.backspace();
    }
    assert_eq!(engine.len(), FRUIT.len());
    assert!(!engine.backspace());
}
