//! Filter-expression construction for the `q` parameter of `GET /cards`.

/// Builds the filter expression for a card search.
///
/// Blank inputs count as absent. Returns `None` when neither is given, in
/// which case no `q` parameter is sent.
pub fn filter_expression(query: Option<&str>, set_id: Option<&str>) -> Option<String> {
    let query = query.filter(|q| !q.is_empty());
    let set_id = set_id.filter(|s| !s.is_empty());

    match (query, set_id) {
        (Some(q), Some(s)) => Some(format!("name:{} set.id:{}", q, s)),
        (Some(q), None) => Some(format!("name:{}", q)),
        (None, Some(s)) => Some(format!("set.id:{}", s)),
        (None, None) => None,
    }
}
