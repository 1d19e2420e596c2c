/// Returns the lower-cased part after the single `@` of an address.
///
/// `None` when the candidate has no `@`, more than one, or nothing after it.
pub fn extract_domain(candidate: &str) -> Option<String> {
    let mut parts = candidate.split('@');
    let (_, domain) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || domain.is_empty() {
        return None;
    }
    Some(domain.to_lowercase())
}
