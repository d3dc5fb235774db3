//! The terminal-type set: leaves of the printed tree.
//!
//! A fixed, closed set of types rendered through their default textual
//! conversion and never traversed field by field: `i32`, `f64`, `f32`,
//! `String`, `DateTime<Utc>`, `TimeDelta`. Membership is decided by exact
//! `TypeId` match and is not configurable.
//!
//! The set is a dispatch table keyed by type identity: each entry downcasts
//! to its concrete type once and renders via `Display`. Null never reaches
//! this table — the printer handles it first.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};

use crate::field::Reflect;

type LeafRenderer = fn(&dyn Any) -> Option<String>;

fn leaf<V: Any + ToString>(value: &dyn Any) -> Option<String> {
    value.downcast_ref::<V>().map(V::to_string)
}

static TERMINALS: LazyLock<HashMap<TypeId, LeafRenderer>> = LazyLock::new(|| {
    let mut table: HashMap<TypeId, LeafRenderer> = HashMap::new();
    table.insert(TypeId::of::<i32>(), leaf::<i32>);
    table.insert(TypeId::of::<f64>(), leaf::<f64>);
    table.insert(TypeId::of::<f32>(), leaf::<f32>);
    table.insert(TypeId::of::<String>(), leaf::<String>);
    table.insert(TypeId::of::<DateTime<Utc>>(), leaf::<DateTime<Utc>>);
    table.insert(TypeId::of::<TimeDelta>(), leaf::<TimeDelta>);
    table
});

/// Returns `true` if `id` is a member of the terminal-type set.
pub fn is_terminal(id: TypeId) -> bool {
    TERMINALS.contains_key(&id)
}

/// Render a terminal value through its default textual conversion.
///
/// Returns `None` if the value's runtime type is not in the set, in which
/// case the caller traverses it as a composite.
pub fn render_terminal(value: &dyn Reflect) -> Option<String> {
    let any = value.as_any();
    TERMINALS.get(&any.type_id()).and_then(|render| render(any))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn set_membership_is_exact() {
        assert!(is_terminal(TypeId::of::<i32>()));
        assert!(is_terminal(TypeId::of::<f64>()));
        assert!(is_terminal(TypeId::of::<f32>()));
        assert!(is_terminal(TypeId::of::<String>()));
        assert!(is_terminal(TypeId::of::<DateTime<Utc>>()));
        assert!(is_terminal(TypeId::of::<TimeDelta>()));

        // Close relatives are not members: classification is by exact type.
        assert!(!is_terminal(TypeId::of::<i64>()));
        assert!(!is_terminal(TypeId::of::<u32>()));
        assert!(!is_terminal(TypeId::of::<bool>()));
        assert!(!is_terminal(TypeId::of::<&str>()));
    }

    #[test]
    fn renders_default_conversions() {
        assert_eq!(render_terminal(&19i32), Some("19".to_string()));
        assert_eq!(render_terminal(&1.5f64), Some("1.5".to_string()));
        assert_eq!(render_terminal(&2.5f32), Some("2.5".to_string()));
        assert_eq!(
            render_terminal(&"Alexander".to_string()),
            Some("Alexander".to_string())
        );
    }

    #[test]
    fn renders_time_types_via_display() {
        let at = Utc.with_ymd_and_hms(2024, 11, 28, 12, 0, 9).unwrap();
        assert_eq!(render_terminal(&at), Some(at.to_string()));

        let delta = TimeDelta::seconds(90);
        assert_eq!(render_terminal(&delta), Some(delta.to_string()));
    }

    #[test]
    fn declines_non_members() {
        assert_eq!(render_terminal(&19i64), None);
        assert_eq!(render_terminal(&true), None);
    }

    proptest::proptest! {
        #[test]
        fn every_i32_renders_as_to_string(n in proptest::num::i32::ANY) {
            proptest::prop_assert_eq!(render_terminal(&n), Some(n.to_string()));
        }
    }
}
