// PRDatabase — Record search

use crate::store::ClientRecord;

/// Case-insensitive substring match against the record's name or email.
/// An empty query matches everything.
pub fn matches_query(record: &ClientRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.email.to_lowercase().contains(&needle)
}

/// Records matching `query`, in their original order.
pub fn filter_records<'r, I>(records: I, query: &str) -> Vec<&'r ClientRecord>
where
    I: IntoIterator<Item = &'r ClientRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_query(record, query))
        .collect()
}
