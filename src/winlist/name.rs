pub const NO_NAME: &str = "N/A";

/// Pick a displayable window name from the EWMH name, falling back to the
/// ICCCM name and finally to the `NO_NAME` sentinel. A name that is absent
/// or blank (whitespace-only) falls through to the next tier; the fallback
/// is only queried when the primary tier misses.
pub fn select_name<F>(
    primary: Option<String>,
    fallback: F,
) -> String
where
    F: FnOnce() -> Option<String>,
{
    primary
        .filter(|name| !name.trim().is_empty())
        .or_else(|| fallback().filter(|name| !name.trim().is_empty()))
        .unwrap_or_else(|| NO_NAME.to_owned())
}
