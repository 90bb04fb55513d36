//! Display labels for foreign ids.
//!
//! Lookups are a linear scan of the reference list: the first entry whose id
//! matches supplies the label, and an id with no match resolves to itself.

pub fn resolve_label<R, IF, LF>(id: &str, refs: &[R], ref_id: IF, label: LF) -> String
where
    IF: Fn(&R) -> &str,
    LF: Fn(&R) -> &str,
{
    refs.iter()
        .find(|r| ref_id(r) == id)
        .map(|r| label(r).to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Labels for each record's foreign id, in record order.
pub fn resolve_labels<'a, T: 'a, R, I, TF, IF, LF>(
    records: I,
    id_of: TF,
    refs: &[R],
    ref_id: IF,
    label: LF,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a T>,
    TF: Fn(&T) -> &str,
    IF: Fn(&R) -> &str,
    LF: Fn(&R) -> &str,
{
    records
        .into_iter()
        .map(|record| resolve_label(id_of(record), refs, &ref_id, &label))
        .collect()
}
