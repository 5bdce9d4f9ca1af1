use std::fmt::Display;

/// Write a comma-separated list of values, an empty list puts no constraint
/// and is written as a wildcard.
pub(crate) fn write_selector(
    f: &mut std::fmt::Formatter<'_>,
    seq: &[impl Display],
) -> std::fmt::Result {
    let Some(first) = seq.first() else {
        return write!(f, "*");
    };

    write!(f, "{first}")?;

    for elem in &seq[1..] {
        write!(f, ",{elem}")?;
    }

    Ok(())
}
