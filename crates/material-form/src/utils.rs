//! Display helpers for file names.
//!
//! Lengths are counted in `char`s (Unicode scalar values), never bytes, so a
//! cut never lands inside a multi-byte character.

/// Label width used by the texture map form.
pub const DEFAULT_LABEL_LEN: usize = 55;

/// Characters kept from the end of a shortened name (extension and suffix).
pub const KEPT_TAIL: usize = 15;

pub const ELISION: &str = " ~ ";

/// Shorten `name` to at most `max_len` characters by eliding its middle.
///
/// Names that already fit are returned unchanged. Longer names keep their last
/// [`KEPT_TAIL`] characters so the distinguishing suffix stays visible.
pub fn shorten(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        return name.to_string();
    }

    let elision = ELISION.chars().count();
    if max_len <= KEPT_TAIL + elision {
        return chars[chars.len() - max_len..].iter().collect();
    }

    let head = max_len - KEPT_TAIL - elision;
    let mut out = String::with_capacity(name.len());
    out.extend(&chars[..head]);
    out.push_str(ELISION);
    out.extend(&chars[chars.len() - KEPT_TAIL..]);
    out
}

/// Join dropped file names into a one-line summary, `a.usdz + b.usdz`.
pub fn join_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(s: &str, n: usize) -> String {
        let chars: Vec<char> = s.chars().collect();
        chars[chars.len() - n..].iter().collect()
    }

    #[test]
    fn test_short_names_unchanged() {
        assert_eq!(shorten("wood_albedo.png", DEFAULT_LABEL_LEN), "wood_albedo.png");
        let exact = "x".repeat(DEFAULT_LABEL_LEN);
        assert_eq!(shorten(&exact, DEFAULT_LABEL_LEN), exact);
    }

    #[test]
    fn test_long_names_keep_tail() {
        let name = format!("{}_clearcoatRoughness.png", "very_long_material_name".repeat(4));
        let short = shorten(&name, DEFAULT_LABEL_LEN);
        assert_eq!(short.chars().count(), DEFAULT_LABEL_LEN);
        assert!(short.contains(ELISION));
        assert_eq!(tail(&short, KEPT_TAIL), tail(&name, KEPT_TAIL));
        assert!(short.starts_with("very_long_material_name"));
    }

    #[test]
    fn test_bound_holds_for_every_length() {
        for len in DEFAULT_LABEL_LEN + 1..DEFAULT_LABEL_LEN + 40 {
            let name: String = (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
            let short = shorten(&name, DEFAULT_LABEL_LEN);
            assert!(short.chars().count() <= DEFAULT_LABEL_LEN);
            assert_eq!(tail(&short, KEPT_TAIL), tail(&name, KEPT_TAIL));
        }
    }

    #[test]
    fn test_multibyte_names() {
        let name = format!("{}_normal.png", "テクスチャ".repeat(15));
        let short = shorten(&name, DEFAULT_LABEL_LEN);
        assert_eq!(short.chars().count(), DEFAULT_LABEL_LEN);
        assert!(short.ends_with("_normal.png"));
    }

    #[test]
    fn test_tiny_limit() {
        assert_eq!(shorten("abcdefghijklmnopqrstuvwxyz", 10), "qrstuvwxyz");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(["car.usdz"]), "car.usdz");
        assert_eq!(join_names(["car.obj", "car.mtl"]), "car.obj + car.mtl");
    }
}
