/// Appends a fragment of ingredients (typed, dictated or detected) to the
/// text collected so far.
///
/// The result is one `", "` separated list: empty entries left by doubled,
/// leading or trailing commas are dropped.
pub fn append_ingredients(existing: &str, addition: &str) -> String {
    let entries: Vec<&str> = existing
        .split(',')
        .chain(addition.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();
    entries.join(", ")
}

/// Joins detected ingredient names into one comma separated fragment.
pub fn join_ingredients<S: AsRef<str>>(ingredients: &[S]) -> String {
    ingredients
        .iter()
        .map(|ingredient| ingredient.as_ref().trim())
        .filter(|ingredient| !ingredient.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
