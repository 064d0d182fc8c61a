use seq_drills::{topic_occurrences, topics, MatchOptions, Topics};

#[test]
fn test_topics_macro_empty() {
    let table = topics!();
    assert_eq!(table, Topics::new());
}

#[test]
fn test_topics_macro_single_topic() {
    let table = topics! { "price" => ["cost", "cheap"] };

    let mut expected = Topics::new();
    expected.insert(
        "price".to_string(),
        vec!["cost".to_string(), "cheap".to_string()],
    );
    assert_eq!(table, expected);
}

#[test]
fn test_topics_macro_accepts_expressions() {
    let topic = String::from("delivery");
    let keyword = "courier";
    let table = topics! {
        topic => [keyword, 'x'],
        "empty" => [],
    };

    assert_eq!(table["delivery"], vec!["courier".to_string(), "x".to_string()]);
    assert!(table["empty"].is_empty());
}

#[test]
fn test_topics_macro_feeds_counter() {
    let table = topics! {
        "size" => ["small", "large"],
        "color" => ["red"],
    };
    let reviews = vec!["Small but fine".to_string(), "red and large".to_string()];

    let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
    assert_eq!(counts.count("size"), 2);
    assert_eq!(counts.count("color"), 1);
}
