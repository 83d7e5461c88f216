/// Cell strings the CSV readers of the original data treated as absent.
pub const MISSING_SENTINELS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null"];

/// Missing values become `""`; everything else is kept verbatim.
pub fn normalize_missing(value: &str) -> String {
    if MISSING_SENTINELS.contains(&value.trim()) {
        String::new()
    } else {
        value.to_string()
    }
}

/// Suffix repeated names with `.1`, `.2`, ... so every field name is unique.
/// `["Yds", "TD", "Yds"]` → `["Yds", "TD", "Yds.1"]`.
pub fn disambiguate_headers(headers: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(headers.len());
    for name in headers {
        let mut candidate = name.clone();
        let mut n = 0;
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{}.{}", name, n);
        }
        out.push(candidate);
    }
    out
}
