//! Property-based tests for role matching.

use proptest::prelude::*;

use crate::auth::access::{authorize, role_matches};
use crate::auth::roles::SystemRole;

fn arb_role() -> impl Strategy<Value = SystemRole> {
    proptest::sample::select(SystemRole::ALL.to_vec())
}

fn arb_roles() -> impl Strategy<Value = Vec<SystemRole>> {
    proptest::collection::vec(arb_role(), 1..5)
}

/// Random casing of an ASCII string.
fn arb_recased(s: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), s.len()).prop_map(move |flips| {
        s.chars()
            .zip(flips)
            .map(|(c, up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Empty requirement list admits any set of claims.
    #[test]
    fn prop_no_requirement_always_allows(claims in proptest::collection::vec(".{0,20}", 0..4)) {
        let refs: Vec<&str> = claims.iter().map(String::as_str).collect();
        prop_assert!(authorize(&refs, &[]).is_ok());
    }

    /// A role always satisfies itself by display name and by key.
    #[test]
    fn prop_role_matches_itself(role in arb_role()) {
        prop_assert!(role_matches(role.display_name(), role));
        prop_assert!(role_matches(role.key(), role));
    }

    /// Matching ignores case and surrounding whitespace.
    #[test]
    fn prop_matching_is_case_insensitive(
        role in arb_role(),
        pad in "[ ]{0,3}",
    ) {
        let upper = format!("{pad}{}{pad}", role.display_name().to_uppercase());
        prop_assert!(role_matches(&upper, role));
    }

    /// Any claim containing "admin" passes any admin requirement.
    #[test]
    fn prop_admin_claims_pass_admin_requirements(
        prefix in "[a-z\\-]{0,8}",
        marker in arb_recased("admin"),
        suffix in "[a-z\\-]{0,8}",
    ) {
        let claim = format!("{prefix}{marker}{suffix}");
        for role in SystemRole::ALL {
            if role.display_name().to_lowercase().contains("admin") {
                prop_assert!(role_matches(&claim, role));
            }
        }
    }

    /// Adding claims never turns a grant into a denial.
    #[test]
    fn prop_more_claims_never_hurt(
        required in arb_roles(),
        granted in arb_role(),
        extra in arb_role(),
    ) {
        let base = [granted.display_name()];
        let more = [granted.display_name(), extra.display_name()];
        if authorize(&base, &required).is_ok() {
            prop_assert!(authorize(&more, &required).is_ok());
        }
    }

    /// A denial echoes exactly what was claimed.
    #[test]
    fn prop_denial_reports_claims(required in arb_roles()) {
        let claims = ["definitely not a role"];
        let err = authorize(&claims, &required).unwrap_err();
        prop_assert_eq!(err.claimed, vec!["definitely not a role".to_string()]);
        prop_assert_eq!(err.required.len(), required.len());
    }
}
