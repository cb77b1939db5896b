/// Declares the field catalog of one or more registers.
///
/// Each register becomes a module of [`Field`](crate::Field) constants named after the hardware
/// fields, plus a `FIELDS` table listing them in declaration order. Tables of several registers
/// are collected with [`register_fields!`](crate::register_fields).
///
/// A field is written `NAME @ pos` for a single bit or `NAME @ pos : width` for a run of bits.
/// Appending `[bits]` to a multi-bit field also declares `NAME_0`, `NAME_1`, ... as the `u32`
/// masks of each constituent bit. Optional trailing sections follow the fields, in this order:
///
/// - `; unions { NAME = expr, ... }` declares fields that deliberately span other fields. They
///   are not listed in `FIELDS`.
/// - `; legacy { OLD = NEW, ... }` declares older names as aliases of current fields.
/// - `; values { NAME = expr, ... }` declares pre-shifted `u32` field values.
///
/// # Examples
///
/// ```
/// register_field::fields! {
///     /// Control register.
///     pub mod cr {
///         EN @ 0,
///         MODE @ 4 : 2 [bits],
///         DATA @ 8 : 8;
///         legacy {
///             ENABLE = EN,
///         };
///         values {
///             MODE_FAST = 0x0000_0020,
///         }
///     }
/// }
///
/// assert_eq!(cr::MODE.mask(), 0x30);
/// assert_eq!(cr::MODE_1, 0x20);
/// assert_eq!(cr::ENABLE, cr::EN);
/// assert_eq!(cr::MODE_FAST, cr::MODE.value(0b10));
/// assert_eq!(cr::FIELDS.len(), 3);
/// ```
///
/// A field that does not fit in a 32-bit word is rejected at compile time:
///
/// ```compile_fail
/// register_field::fields! {
///     pub mod cr {
///         WIDE @ 24 : 16,
///     }
/// }
/// ```
#[macro_export]
macro_rules! fields {
    (@field $(#[$attr:meta])* $name:ident $pos:tt) => {
        $(#[$attr])*
        pub const $name: $crate::Field = $crate::Field::bit($pos);
    };
    (@field $(#[$attr:meta])* $name:ident $pos:tt $width:tt) => {
        $(#[$attr])*
        pub const $name: $crate::Field = $crate::Field::new($pos, $width);
    };
    (@field $(#[$attr:meta])* $name:ident $pos:tt $width:tt [bits]) => {
        $(#[$attr])*
        pub const $name: $crate::Field = $crate::Field::new($pos, $width);

        $crate::__private::seq!(N in 0..$width {
            $crate::__private::paste! {
                #[doc = concat!("Bit ", stringify!(N), " of [`", stringify!($name), "`].")]
                pub const [<$name _ N>]: u32 = $name.bit_mask(N);
            }
        });
    };

    (
        $(
            $(#[$attr:meta])*
            $vis:vis mod $module:ident {
                $(
                    $(#[$field_attr:meta])*
                    $name:ident @ $pos:tt $(: $width:tt)? $([$bits:ident])?
                ),* $(,)?
                $(; unions {
                    $( $(#[$union_attr:meta])* $union:ident = $union_expr:expr ),* $(,)?
                })?
                $(; legacy {
                    $( $(#[$legacy_attr:meta])* $alias:ident = $target:ident ),* $(,)?
                })?
                $(; values {
                    $( $(#[$value_attr:meta])* $value:ident = $expr:expr ),* $(,)?
                })?
            }
        )*
    ) => {
        $(
            $(#[$attr])*
            $vis mod $module {
                $(
                    $crate::fields!(@field $(#[$field_attr])* $name $pos $($width)? $([$bits])?);
                )*

                $($(
                    $(#[$union_attr])*
                    pub const $union: $crate::Field = $union_expr;
                )*)?

                $($(
                    $(#[$legacy_attr])*
                    pub const $alias: $crate::Field = $target;
                )*)?

                $($(
                    $(#[$value_attr])*
                    pub const $value: u32 = $expr;
                )*)?

                /// Every field of the register in declaration order, legacy aliases excluded.
                pub const FIELDS: &[$crate::FieldDesc] = &[
                    $(
                        $crate::FieldDesc {
                            name: stringify!($name),
                            field: $name,
                        },
                    )*
                ];
            }
        )*
    };
}

/// Builds a table of [`RegisterFields`](crate::RegisterFields) from field modules declared with
/// [`fields!`](crate::fields).
///
/// Each entry is either a module name, which also names the register, or `"register" => module`
/// when several registers share one field module.
///
/// ```
/// use register_field::{fields, register_fields, RegisterFields};
///
/// fields! {
///     pub mod cr { EN @ 0 }
///     pub mod dr { DATA @ 0 : 16 }
/// }
///
/// const REGISTERS: &[RegisterFields] = register_fields![cr, "dr1" => dr, "dr2" => dr];
///
/// assert_eq!(REGISTERS.len(), 3);
/// assert_eq!(REGISTERS[2].register, "dr2");
/// assert_eq!(REGISTERS[2].field("DATA"), Some(dr::DATA));
/// ```
#[macro_export]
macro_rules! register_fields {
    (@entry $module:ident) => {
        $crate::RegisterFields {
            register: stringify!($module),
            fields: $module::FIELDS,
        }
    };
    (@entry $register:literal => $module:ident) => {
        $crate::RegisterFields {
            register: $register,
            fields: $module::FIELDS,
        }
    };
    ($($register:tt $(=> $module:ident)?),* $(,)?) => {
        &[$($crate::register_fields!(@entry $register $(=> $module)?)),*]
    };
}
