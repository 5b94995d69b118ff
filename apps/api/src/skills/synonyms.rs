/// Fixed synonym groups: `(canonical, variants)`. Two comparison keys are
/// equivalent when both appear in the same group.
///
/// Entries are written as people spell them, not as comparison keys, so a
/// variant containing stripped punctuation (`ci/cd`) can never be hit.
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript"]),
    ("typescript", &["ts"]),
    ("nodejs", &["node", "node.js"]),
    ("reactjs", &["react", "react.js"]),
    ("vuejs", &["vue", "vue.js"]),
    ("angularjs", &["angular"]),
    ("postgresql", &["postgres", "psql"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s"]),
    ("amazonwebservices", &["aws"]),
    ("googlecloudplatform", &["gcp"]),
    ("microsoftazure", &["azure"]),
    ("continuousintegration", &["ci"]),
    ("continuousdeployment", &["cd"]),
    ("cicd", &["ci/cd", "ci", "cd"]),
];

/// True when `a` and `b` both belong to at least one synonym group.
pub fn share_group(a: &str, b: &str) -> bool {
    SYNONYM_GROUPS.iter().any(|(canonical, variants)| {
        let in_group = |key: &str| key == *canonical || variants.contains(&key);
        in_group(a) && in_group(b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_and_variant_share_group() {
        assert!(share_group("javascript", "js"));
        assert!(share_group("ecmascript", "javascript"));
        assert!(share_group("k8s", "kubernetes"));
    }

    #[test]
    fn test_two_variants_share_group() {
        assert!(share_group("js", "ecmascript"));
        assert!(share_group("postgres", "psql"));
    }

    #[test]
    fn test_ci_and_cd_meet_through_cicd_group() {
        assert!(share_group("ci", "cd"));
        assert!(share_group("ci", "cicd"));
    }

    #[test]
    fn test_unrelated_keys_do_not_share_group() {
        assert!(!share_group("java", "javascript"));
        assert!(!share_group("aws", "gcp"));
    }

    #[test]
    fn test_unknown_key_not_in_any_group() {
        assert!(!share_group("rust", "rust"));
    }
}
