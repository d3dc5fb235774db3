//! The `reflect_struct!` registration macro.

/// Register a composite type for printing.
///
/// Generates coherent [`Describe`](crate::Describe) and
/// [`Reflect`](crate::Reflect) impls from a single field list, so the static
/// table and the instance view cannot drift apart. Fields appear in the
/// output in the order listed here.
///
/// Each entry is `name: DeclaredType = |instance| accessor`, where the
/// accessor is an ordinary expression yielding `Option<&dyn Reflect>`.
/// Nullable and boxed fields are expressed directly in the accessor:
///
/// ```
/// use ogp_reflect::{reflect_struct, Reflect};
///
/// struct Person {
///     name: String,
///     age: i32,
///     father: Option<Box<Person>>,
/// }
///
/// reflect_struct!(Person, "Person", {
///     name: String = |p| Some(&p.name),
///     age: i32 = |p| Some(&p.age),
///     father: Person = |p| p.father.as_deref().map(|f| f as &dyn Reflect),
/// });
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ty, $name:literal, {
        $( $field:ident : $decl:ty = |$this:ident| $get:expr ),+ $(,)?
    }) => {
        impl $crate::Describe for $ty {
            const NAME: &'static str = $name;

            fn field_defs() -> &'static [$crate::FieldDef<Self>] {
                const DEFS: &[$crate::FieldDef<$ty>] = &[
                    $(
                        $crate::FieldDef {
                            name: stringify!($field),
                            declared: {
                                fn token() -> $crate::TypeToken {
                                    $crate::TypeToken::of::<$decl>()
                                }
                                token
                            },
                            get: {
                                fn get<'a>(
                                    $this: &'a $ty,
                                ) -> ::core::option::Option<&'a dyn $crate::Reflect> {
                                    $get
                                }
                                get
                            },
                        },
                    )+
                ];
                DEFS
            }
        }

        impl $crate::Reflect for $ty {
            fn type_name(&self) -> &'static str {
                <$ty as $crate::Describe>::NAME
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                <$ty as $crate::Describe>::field_defs()
                    .iter()
                    .map(|def| $crate::FieldRef {
                        name: def.name,
                        declared: (def.declared)(),
                        value: (def.get)(self),
                    })
                    .collect()
            }
        }
    };
}
