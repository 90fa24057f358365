/// Implement [`Record`] for a plain struct whose fields all convert through
/// [`FromCell`].
///
/// The optional trailing `readonly { .. }` block lists fields that exist on
/// the struct but must never be written by mapping; they are reported with
/// no assignment op and bound as no-ops.
///
/// ```
/// use rowcast::impl_record;
///
/// #[derive(Debug, Default)]
/// struct Person {
///     name: String,
///     age: i64,
///     id: i64,
/// }
/// impl_record!(Person { name: String, age: i64 } readonly { id: i64 });
/// ```
///
/// [`Record`]: crate::Record
/// [`FromCell`]: crate::FromCell
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        $crate::impl_record!($ty { $($field : $fty),* } readonly {});
    };
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }
     readonly { $($ro:ident : $roty:ty),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn fields() -> Vec<$crate::FieldDescriptor<Self>> {
                vec![
                    $(
                        $crate::FieldDescriptor {
                            name: stringify!($field),
                            kind: <$fty as $crate::FromCell>::KIND,
                            assign: Some(
                                (|record: &mut $ty, value: $crate::CellValue| {
                                    if let Some(v) = <$fty as $crate::FromCell>::from_cell(value) {
                                        record.$field = v;
                                    }
                                }) as fn(&mut $ty, $crate::CellValue),
                            ),
                        },
                    )*
                    $(
                        $crate::FieldDescriptor {
                            name: stringify!($ro),
                            kind: <$roty as $crate::FromCell>::KIND,
                            assign: None,
                        },
                    )*
                ]
            }
        }
    };
}
