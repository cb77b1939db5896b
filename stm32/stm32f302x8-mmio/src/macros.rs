macro_rules! mmio_device {
    // Top-level matcher.
    (
        doc_name: $doc_name:literal,
        struct_name: $struct_name:ident,
        size: $size:literal,
        instances: {
            $( $instance:ident: $base:ident ),*
            $(,)?
        },
        regs: {
            $(
                $offset:literal $reg_name:ident:
                $reg_type:tt
                $(= $reg_access:ident $(($($arg:tt)*))?)?
            ),*
            $(,)?
        },
    ) => {
        #[doc = concat!("The ", $doc_name, " register block.")]
        #[repr(C)]
        pub struct RegisterBlock {
            $($reg_name: $reg_type,)*
        }

        const _: () = assert!(::core::mem::size_of::<RegisterBlock>() == $size);
        $(
            const _: () = assert!(::core::mem::offset_of!(RegisterBlock, $reg_name) == $offset);
        )*

        impl RegisterBlock {
            /// The size of the block in bytes.
            pub const SIZE: usize = $size;

            /// Every register of the block, reserved gaps included, in address order.
            pub const REGISTERS: &'static [crate::RegisterDesc] = &[
                $(
                    crate::RegisterDesc {
                        name: stringify!($reg_name),
                        offset: $offset,
                        size: ::core::mem::size_of::<$reg_type>(),
                        access: mmio_device!(@access $($reg_access)?),
                    },
                )*
            ];
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[doc = concat!("Represents permission to access a ", $doc_name, " register block.")]
        pub struct $struct_name<'reg> {
            ptr: *mut RegisterBlock,
            _phantom_lifetime: ::core::marker::PhantomData<&'reg ()>,
        }

        // SAFETY: A handle is only an address. Serializing access to the registers behind it is
        // the caller's concern, exactly as with the fixed-address instances.
        unsafe impl Send for $struct_name<'_> {}
        unsafe impl Sync for $struct_name<'_> {}

        impl<'reg> $struct_name<'reg> {
            $(
                #[doc = concat!(
                    "Returns a handle to the ",
                    stringify!($instance),
                    " instance at [`",
                    stringify!($base),
                    "`](crate::memory_map::",
                    stringify!($base),
                    ").",
                )]
                pub fn $instance(root: crate::PermissionRoot) -> Self {
                    let _ = root;
                    unsafe { Self::from_ptr(crate::memory_map::$base as *mut RegisterBlock) }
                }
            )*

            /// Creates a handle to the register block at `ptr`.
            ///
            /// # Safety
            ///
            /// `ptr` must be valid for volatile reads and writes of a whole `RegisterBlock` for
            /// `'reg`: either the peripheral itself or memory standing in for it.
            pub const unsafe fn from_ptr(ptr: *mut RegisterBlock) -> Self {
                Self {
                    ptr,
                    _phantom_lifetime: ::core::marker::PhantomData,
                }
            }

            /// Returns the block pointer.
            pub fn as_ptr(&self) -> *mut RegisterBlock {
                self.ptr
            }

            /// Returns the base address of the block.
            pub fn base(&self) -> usize {
                self.ptr as usize
            }

            $(
                mmio_device! {
                    @reg_accessors $doc_name $offset $reg_name ($reg_type)
                    $($reg_access $($($arg)*)?)?
                }
            )*
        }
    };

    // Access kinds for the register table.
    (@access) => { crate::Access::Reserved };
    (@access ro) => { crate::Access::ReadOnly };
    (@access wo) => { crate::Access::WriteOnly };
    (@access rw) => { crate::Access::ReadWrite };
    (@access sub) => { crate::Access::Block };

    // Dispatch on access specifiers.
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:tt)) => {};
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:ty) ro) => {
        mmio_device! { @address_of $offset $name }
        mmio_device! { @read $doc_name $name $type }
    };
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:tt) ro indexed) => {
        mmio_device! { @address_of_indexed $offset $name $type }
        mmio_device! { @read_indexed $doc_name $name $type }
    };
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:ty) wo) => {
        mmio_device! { @address_of $offset $name }
        mmio_device! { @write $doc_name $name $type }
    };
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:ty) rw) => {
        mmio_device! { @address_of $offset $name }
        mmio_device! { @read $doc_name $name $type }
        mmio_device! { @write $doc_name $name $type }
        mmio_device! { @modify $name $type }
    };
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:tt) rw indexed) => {
        mmio_device! { @address_of_indexed $offset $name $type }
        mmio_device! { @read_indexed $doc_name $name $type }
        mmio_device! { @write_indexed $doc_name $name $type }
        mmio_device! { @modify_indexed $name $type }
    };
    (@reg_accessors $doc_name:literal $offset:literal $name:ident ($type:tt) sub $handle:ident) => {
        mmio_device! { @address_of_indexed $offset $name $type }
        mmio_device! { @sub $name $type $handle }
    };

    // Register addresses.
    (@address_of $offset:literal $name:ident) => {
        ::paste::paste! {
            #[doc = concat!("Returns the address of `", stringify!($name), "`.")]
            pub fn [<address_of_ $name>](&self) -> usize {
                self.base() + $offset
            }
        }
    };
    (@address_of_indexed $offset:literal $name:ident [$type:ty; $count:literal]) => {
        ::paste::paste! {
            #[doc = concat!("Returns the address of `", stringify!($name), "[index]`.")]
            pub fn [<address_of_ $name>](&self, index: usize) -> usize {
                assert!(index < $count, "register index out of range");
                self.base() + $offset + index * ::core::mem::size_of::<$type>()
            }
        }
    };

    // Non-indexed read implementation.
    (@read $doc_name:literal $name:ident $type:ty) => {
        ::paste::paste! {
            #[inline(always)]
            pub fn [<read_ $name>](&self) -> $type {
                let ptr = ::memoffset::raw_field!(self.ptr, RegisterBlock, $name);
                let value = unsafe { ::core::ptr::read_volatile(ptr) };
                crate::trace::read($doc_name, stringify!($name), ptr as usize, value);
                value
            }
        }
    };

    // Non-indexed write implementation.
    (@write $doc_name:literal $name:ident $type:ty) => {
        ::paste::paste! {
            #[inline(always)]
            pub fn [<write_ $name>](&self, value: $type) {
                let ptr = ::memoffset::raw_field!(self.ptr, RegisterBlock, $name).cast_mut();
                crate::trace::write($doc_name, stringify!($name), ptr as usize, value);
                unsafe { ::core::ptr::write_volatile(ptr, value) };
            }
        }
    };

    // Non-indexed modify implementation.
    (@modify $name:ident $type:ty) => {
        ::paste::paste! {
            #[inline(always)]
            pub fn [<modify_ $name>](
                &self,
                u: crate::Uninterruptible,
                f: impl FnOnce($type) -> $type,
            ) {
                let _ = u;
                self.[<write_ $name>](f(self.[<read_ $name>]()));
            }
        }
    };

    // Indexed read implementation.
    (@read_indexed $doc_name:literal $name:ident [$type:ty; $count:literal]) => {
        ::paste::paste! {
            #[inline(always)]
            pub fn [<read_ $name>](&self, index: usize) -> $type {
                assert!(index < $count, "register index out of range");
                let ptr = unsafe {
                    ::memoffset::raw_field!(self.ptr, RegisterBlock, $name)
                        .cast::<$type>()
                        .add(index)
                };
                let value = unsafe { ::core::ptr::read_volatile(ptr) };
                crate::trace::read($doc_name, stringify!($name), ptr as usize, value);
                value
            }
        }

        ::seq_macro::seq!(N in 0..$count {
            ::paste::paste! {
                #[inline(always)]
                pub fn [<read_ $name _ N>](&self) -> $type {
                    self.[<read_ $name>](N)
                }
            }
        });
    };

    // Indexed write implementation.
    (@write_indexed $doc_name:literal $name:ident [$type:ty; $count:literal]) => {
        ::paste::paste! {
            #[inline(always)]
            pub fn [<write_ $name>](&self, index: usize, value: $type) {
                assert!(index < $count, "register index out of range");
                let ptr = unsafe {
                    ::memoffset::raw_field!(self.ptr, RegisterBlock, $name)
                        .cast_mut()
                        .cast::<$type>()
                        .add(index)
                };
                crate::trace::write($doc_name, stringify!($name), ptr as usize, value);
                unsafe { ::core::ptr::write_volatile(ptr, value) };
            }
        }

        ::seq_macro::seq!(N in 0..$count {
            ::paste::paste! {
                #[inline(always)]
                pub fn [<write_ $name _ N>](&self, value: $type) {
                    self.[<write_ $name>](N, value);
                }
            }
        });
    };

    // Indexed modify implementation.
    (@modify_indexed $name:ident [$type:ty; $count:literal]) => {
        ::paste::paste! {
            #[inline(always)]
            pub fn [<modify_ $name>](
                &self,
                u: crate::Uninterruptible,
                index: usize,
                f: impl FnOnce($type) -> $type,
            ) {
                let _ = u;
                self.[<write_ $name>](index, f(self.[<read_ $name>](index)));
            }
        }

        ::seq_macro::seq!(N in 0..$count {
            ::paste::paste! {
                #[inline(always)]
                pub fn [<modify_ $name _ N>](
                    &self,
                    u: crate::Uninterruptible,
                    f: impl FnOnce($type) -> $type,
                ) {
                    self.[<modify_ $name>](u, N, f);
                }
            }
        });
    };

    // Nested register blocks.
    (@sub $name:ident [$type:ty; $count:literal] $handle:ident) => {
        ::paste::paste! {
            #[doc = concat!("Returns a handle to `", stringify!($name), "[index]`.")]
            pub fn $name(&self, index: usize) -> $handle<'reg> {
                assert!(index < $count, "register block index out of range");
                unsafe {
                    $handle::from_ptr(
                        ::memoffset::raw_field!(self.ptr, RegisterBlock, $name)
                            .cast_mut()
                            .cast::<$type>()
                            .add(index),
                    )
                }
            }
        }

        ::seq_macro::seq!(N in 0..$count {
            ::paste::paste! {
                pub fn [<$name _ N>](&self) -> $handle<'reg> {
                    self.$name(N)
                }
            }
        });
    };
}
