//! The default set of checks.

use crate::{
    defaults, enum_sequence, field_order, type_references, Indentation, MapKeys, Naming, Optional,
};
use thrift_lint_core::CheckBox;

/// Returns every built-in check except `annotations`, in registration order.
///
/// `annotations` needs the final list of check IDs, so it is added by the
/// caller once the standard has been applied.
#[must_use]
pub fn all_checks() -> Vec<CheckBox> {
    vec![
        Box::new(Indentation::new()),
        Box::new(Naming::new()),
        Box::new(Optional::new()),
        defaults(),
        enum_sequence(),
        Box::new(MapKeys::new()),
        type_references(),
        field_order(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrift_lint_core::Checks;

    #[test]
    fn test_all_checks_register() {
        let checks = Checks::from_checks(all_checks()).unwrap();
        assert_eq!(
            checks.ids(),
            vec![
                "indentation",
                "naming",
                "optional",
                "defaults",
                "enum",
                "map",
                "types",
                "field.order",
            ]
        );
        assert!(checks.iter().all(|c| !c.description().is_empty()));
    }
}
