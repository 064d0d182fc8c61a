/// Builds a [`Topics`](crate::Topics) table from topic names and keyword lists.
///
/// ```rust
/// use seq_drills::topics;
///
/// let table = topics! {
///     "price" => ["cost", "cheap"],
///     "screen" => [],
/// };
/// assert_eq!(table.len(), 2);
/// assert_eq!(table["price"], vec!["cost", "cheap"]);
/// ```
#[macro_export]
macro_rules! topics {
    // Handle empty table
    () => {
        $crate::Topics::new()
    };

    // Handle topics with keyword lists
    ($($topic:expr => [ $($keyword:expr),* $(,)? ]),+ $(,)?) => {{
        let mut table = $crate::Topics::new();
        $(
            table.insert(
                ::std::string::ToString::to_string(&$topic),
                vec![$(::std::string::ToString::to_string(&$keyword)),*],
            );
        )+
        table
    }};
}
