// Declarative registration macros: the per-type registration table standing
// in for runtime field reflection.

/// Registers a struct as a [`Composite`](crate::Composite).
///
/// Lists the fields to expose, in declaration order. The optional
/// `Type: ancestor_field { ... }` form designates one field as the nearest
/// ancestor composite, modeling one level of an inheritance chain; the
/// ancestor's fields are converted first and are overwritten by derived
/// fields with colliding output keys.
///
/// Customization hooks keep their provided defaults; implement
/// [`Composite`](crate::Composite) by hand to override them.
///
/// # Examples
///
/// ```
/// use wrapmap::{impl_wrappable_struct, wrap};
///
/// struct Animal {
///     legs: u32,
/// }
///
/// struct Dog {
///     base: Animal,
///     name: String,
/// }
///
/// impl_wrappable_struct!(Animal { legs });
/// impl_wrappable_struct!(Dog: base { name });
///
/// let dog = Dog {
///     base: Animal { legs: 4 },
///     name: "Rex".to_owned(),
/// };
///
/// let map = wrap(&dog).unwrap();
/// assert_eq!(map["legs"], 4);
/// assert_eq!(map["name"], "Rex");
/// ```
#[macro_export]
macro_rules! impl_wrappable_struct {
    (@imp $ty:ty, { $($field:ident),* }, $($ancestor:ident)?) => {
        impl $crate::Wrappable for $ty {
            #[inline]
            fn wrap_ref(&self) -> $crate::WrapRef<'_> {
                $crate::WrapRef::Composite(self)
            }
        }

        impl $crate::Composite for $ty {
            fn field_len(&self) -> usize {
                const NAMES: &[&str] = &[$(stringify!($field)),*];
                NAMES.len()
            }

            fn name_at(&self, index: usize) -> Option<&str> {
                const NAMES: &[&str] = &[$(stringify!($field)),*];
                NAMES.get(index).copied()
            }

            fn field_at(&self, index: usize) -> Option<&dyn $crate::Wrappable> {
                let fields: &[&dyn $crate::Wrappable] = &[$(&self.$field),*];
                fields.get(index).copied()
            }

            $(
                fn ancestor(&self) -> Option<&dyn $crate::Composite> {
                    Some(&self.$ancestor)
                }
            )?
        }
    };
    ($ty:ty : $ancestor:ident { $($field:ident),* $(,)? }) => {
        $crate::impl_wrappable_struct!(@imp $ty, { $($field),* }, $ancestor);
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        $crate::impl_wrappable_struct!(@imp $ty, { $($field),* },);
    };
}

/// Registers an enum without a raw backing value as a
/// [`Variant`](crate::Variant).
///
/// Lists every case; a case carrying associated values names a binding for
/// its first payload (further payload values are ignored, the stable
/// multi-payload policy). Payload types must implement
/// [`Wrappable`](crate::Wrappable).
///
/// A no-payload case converts to its name string in leaf position (and to
/// an empty mapping at top level); a payload case converts to
/// `{case_name: converted_payload}`.
///
/// # Examples
///
/// ```
/// use wrapmap::{impl_wrappable_enum, wrap};
///
/// enum Message {
///     Ping,
///     Text(String),
/// }
///
/// impl_wrappable_enum!(Message { Ping, Text(body) });
///
/// let map = wrap(&Message::Text("hi".to_owned())).unwrap();
/// assert_eq!(map["Text"], "hi");
/// ```
#[macro_export]
macro_rules! impl_wrappable_enum {
    ($ty:ty { $( $case:ident $( ( $payload:ident $(, $extra:ident)* $(,)? ) )? ),+ $(,)? }) => {
        impl $crate::Wrappable for $ty {
            #[inline]
            fn wrap_ref(&self) -> $crate::WrapRef<'_> {
                $crate::WrapRef::Variant(self)
            }
        }

        impl $crate::Variant for $ty {
            fn variant_name(&self) -> &str {
                match self {
                    $(
                        Self::$case $( ( $payload, .. ) )? => {
                            $( let _ = $payload; )?
                            stringify!($case)
                        }
                    )+
                }
            }

            fn payload(&self) -> Option<&dyn $crate::Wrappable> {
                match self {
                    $(
                        Self::$case $( ( $payload, .. ) )? => {
                            let payload: Option<&dyn $crate::Wrappable> = None;
                            $( let payload = Some($payload as &dyn $crate::Wrappable); )?
                            payload
                        }
                    )+
                }
            }
        }
    };
}

/// Registers an enum backed by a raw value: it converts to that raw value
/// with no further recursion.
///
/// The `Type as int` form uses the discriminant (the enum must be fieldless
/// and `Copy`); the arm form maps each case to an explicit raw value
/// expression (an integer, string, float, char or bool literal).
///
/// # Examples
///
/// ```
/// use wrapmap::{impl_wrappable_raw_enum, impl_wrappable_struct, wrap};
///
/// #[derive(Clone, Copy)]
/// enum Speed {
///     Slow = 1,
///     Fast = 5,
/// }
///
/// enum Plan {
///     Free,
///     Pro,
/// }
///
/// impl_wrappable_raw_enum!(Speed as i64);
/// impl_wrappable_raw_enum!(Plan {
///     Free => "free",
///     Pro => "pro",
/// });
///
/// struct Account {
///     speed: Speed,
///     plan: Plan,
/// }
/// impl_wrappable_struct!(Account { speed, plan });
///
/// let map = wrap(&Account { speed: Speed::Fast, plan: Plan::Free }).unwrap();
/// assert_eq!(map["speed"], 5);
/// assert_eq!(map["plan"], "free");
/// ```
#[macro_export]
macro_rules! impl_wrappable_raw_enum {
    ($ty:ty as $int:ty) => {
        impl $crate::Wrappable for $ty {
            #[inline]
            fn wrap_ref(&self) -> $crate::WrapRef<'_> {
                $crate::WrapRef::Raw($crate::Primitive::Int(*self as $int as i64))
            }
        }
    };
    ($ty:ty { $( $case:ident => $raw:expr ),+ $(,)? }) => {
        impl $crate::Wrappable for $ty {
            fn wrap_ref(&self) -> $crate::WrapRef<'_> {
                match self {
                    $( Self::$case => $crate::WrapRef::Raw($crate::Primitive::from($raw)), )+
                }
            }
        }
    };
}
