use seq_drills::{
    find_index, first_unique_char, lowest, max_consecutive_ones, max_subarray_sum,
    rating_buckets, reversed, second_largest, smallest_missing_positive, topic_occurrences,
    topics, word_frequency, word_preserving_prefix, CaseMatching, Countdown, Error,
    FrequencyMap, MatchMode, MatchOptions, RatingBucket,
};

const QUOTE: &str = "I believe that people are really good at heart";

#[test]
fn test_smallest_missing_positive_examples() {
    assert_eq!(smallest_missing_positive(&[1, 3, 6, 4, 1, 2]), 5);
    assert_eq!(smallest_missing_positive(&[1, 2, 3]), 4);
    assert_eq!(smallest_missing_positive(&[-1, -3]), 1);
    assert_eq!(smallest_missing_positive(&[]), 1);
}

#[test]
fn test_smallest_missing_positive_large_values() {
    assert_eq!(smallest_missing_positive(&[i64::MAX, 1]), 2);
    assert_eq!(smallest_missing_positive(&[i64::MIN, 0, 1, 2]), 3);
}

#[test]
fn test_word_preserving_prefix_examples() {
    assert_eq!(word_preserving_prefix(5, QUOTE).unwrap(), "I believe");
    assert_eq!(word_preserving_prefix(20, QUOTE).unwrap(), "I believe that people");
    assert_eq!(word_preserving_prefix(200, QUOTE).unwrap(), QUOTE);

    let err = word_preserving_prefix(-1, QUOTE).unwrap_err();
    assert_eq!(err, Error::InvalidIndex { index: -1 });
    println!("Rejected: {}", err);
}

#[test]
fn test_word_preserving_prefix_repeated_spaces() {
    let text = "ab  cd";
    assert_eq!(word_preserving_prefix(2, text).unwrap(), "ab ");
    assert_eq!(word_preserving_prefix(3, text).unwrap(), "ab  cd");
}

#[test]
fn test_max_consecutive_ones_example() {
    assert_eq!(max_consecutive_ones(&[0, 1, 3, 1, 1, 1, 0, 1, 1, 1, 1, 0]), 4);
    assert_eq!(max_consecutive_ones(&[1, 1, 1]), 3);
}

#[test]
fn test_max_subarray_sum_examples() {
    assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
    assert_eq!(max_subarray_sum(&[5]), Ok(5));
    assert_eq!(max_subarray_sum(&[-3, -1, -2]), Ok(-1));

    let err = max_subarray_sum(&[]).unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("max_subarray_sum"));
}

#[test]
fn test_second_largest_examples() {
    assert_eq!(second_largest(&[10, 5, 10, 8]), Some(8));
    assert_eq!(second_largest(&[-1, -2, -3]), Some(-2));
    assert_eq!(second_largest(&[4, 4]), None);
    assert_eq!(second_largest::<i64>(&[]), None);
}

#[test]
fn test_first_unique_char_examples() {
    assert_eq!(first_unique_char("SimpleSam"), Some('i'));
    assert_eq!(first_unique_char("swiss"), Some('w'));
    assert_eq!(first_unique_char("aabb"), None);
    assert_eq!(first_unique_char(""), None);
}

#[test]
fn test_pure_functions_repeat_identically() {
    let values = [3, -4, 1, 1, 9, -2, 1];
    assert_eq!(
        smallest_missing_positive(&values),
        smallest_missing_positive(&values)
    );
    assert_eq!(max_subarray_sum(&values), max_subarray_sum(&values));
    assert_eq!(second_largest(&values), second_largest(&values));
    assert_eq!(
        word_preserving_prefix(7, QUOTE),
        word_preserving_prefix(7, QUOTE)
    );
}

#[test]
fn test_word_frequency() {
    let words = ["to", "be", "or", "not", "to", "be"];
    let counts = word_frequency(words);

    assert_eq!(counts.count("to"), 2);
    assert_eq!(counts.count("not"), 1);
    assert_eq!(counts.count("To"), 0);
    assert_eq!(counts.total(), words.len());
    assert_eq!(counts.most_common(), Some((&"to".to_string(), 2)));
}

#[test]
fn test_word_frequency_serializes_in_first_seen_order() {
    let counts = word_frequency(vec!["b".to_string(), "a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&counts).unwrap();
    assert_eq!(json, r#"{"b":2,"a":1}"#);

    let back: FrequencyMap<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counts);
}

#[test]
fn test_topic_occurrences_default_matching() {
    let table = topics! {
        "battery life" => ["charge"],
        "camera" => ["photo", "picture"],
        "price" => [],
    };
    let reviews = [
        "Battery Life is great, photo quality too",
        "battery life could be better",
        "BATTERY LIFE terrible",
        "The Picture looks washed out",
        "takes a photo and a picture fast",
    ];

    let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());

    assert_eq!(counts.count("battery life"), 2);
    assert_eq!(counts.count("camera"), 3);
    assert_eq!(counts.get("price"), Some(0));
    assert!(counts.contains_key("price"));

    let order: Vec<&String> = counts.keys().collect();
    assert_eq!(order, vec!["battery life", "camera", "price"]);
}

#[test]
fn test_topic_occurrences_insensitive_whole_words() {
    let table = topics! { "cost" => ["pricey"] };
    let reviews = ["COST is high", "too costly", "a bit Pricey", "no comment"];

    let options = MatchOptions::new()
        .with_case_matching(CaseMatching::Insensitive)
        .with_mode(MatchMode::WholeWord);
    let counts = topic_occurrences(&table, &reviews, &options);
    assert_eq!(counts.count("cost"), 2);

    let counts = topic_occurrences(&table, &reviews, &MatchOptions::strict_words());
    assert_eq!(counts.count("cost"), 2);

    let substring = MatchOptions::new().with_case_matching(CaseMatching::Insensitive);
    let counts = topic_occurrences(&table, &reviews, &substring);
    assert_eq!(counts.count("cost"), 3);
}

#[test]
fn test_topic_occurrences_no_reviews() {
    let table = topics! { "a" => ["b"] };
    let reviews: [&str; 0] = [];
    let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
    assert_eq!(counts.get("a"), Some(0));
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_rating_buckets_serialize_labels() {
    let counts = rating_buckets(&[9.0, 1.0, 0.0, 12.0, 9.9]);
    assert_eq!(counts.count(&RatingBucket::Excellent), 2);
    assert_eq!(counts.count(&RatingBucket::VeryBad), 1);
    assert_eq!(counts.total(), 3);

    let json = serde_json::to_string(&counts).unwrap();
    assert_eq!(json, r#"{"Excellent":2,"Very bad":1}"#);
}

#[test]
fn test_generic_helpers() {
    let movies = ["Batman", "Spiderman", "Superman"];
    assert_eq!(find_index(&movies, &"Superman"), Some(2));
    assert_eq!(lowest(&movies), Some(&"Batman"));
    assert_eq!(reversed(&movies), vec!["Superman", "Spiderman", "Batman"]);

    let countdown: Vec<usize> = Countdown::new(5).into_iter().collect();
    assert_eq!(countdown, vec![5, 4, 3, 2, 1]);
}
