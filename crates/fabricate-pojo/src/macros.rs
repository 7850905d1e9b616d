//! Registration macros.
//!
//! ```rust
//! use fabricate_pojo::{pojo, pojo_enum, pojos};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Plan {
//!     Free,
//!     Pro,
//! }
//! pojo_enum!(Plan { Free, Pro });
//!
//! #[derive(Debug, Default)]
//! struct Customer {
//!     name: String,
//!     email: String,
//!     plan: Option<Plan>,
//!     tags: Vec<String>,
//! }
//! pojo!(Customer { name, email, plan, tags });
//!
//! let customer = pojos::<Customer>().unwrap().get();
//! assert!(customer.email.contains('@'));
//! assert!(customer.plan.is_some());
//! ```

/// Implement `Pojo` and `Shape` for a struct with a `Default` constructor.
///
/// Every listed field becomes a settable field named after the Rust field.
#[macro_export]
macro_rules! pojo {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Pojo for $ty {
            fn layout() -> $crate::Layout<Self> {
                $crate::Layout::new()
                    .constructor(<$ty as ::std::default::Default>::default)
                    $(.field(stringify!($field), |target: &mut $ty, value| target.$field = value))*
            }
        }

        $crate::pojo_shape!($ty);
    };
}

/// Implement `Shape` for a type with a hand-written `Pojo` impl.
#[macro_export]
macro_rules! pojo_shape {
    ($ty:ty) => {
        impl $crate::Shape for $ty {
            fn shape(
                resolver: &mut $crate::Resolver<'_>,
            ) -> ::std::result::Result<$crate::Generator<Self>, $crate::GeneratorError> {
                resolver.pojo::<Self>()
            }
        }
    };
}

/// Implement `Enumerated` and `Shape` for a fieldless enum.
#[macro_export]
macro_rules! pojo_enum {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::Enumerated for $ty {
            fn values() -> ::std::vec::Vec<Self> {
                ::std::vec![$($ty::$variant),*]
            }
        }

        impl $crate::Shape for $ty {
            fn shape(
                resolver: &mut $crate::Resolver<'_>,
            ) -> ::std::result::Result<$crate::Generator<Self>, $crate::GeneratorError> {
                resolver.enumeration::<Self>()
            }
        }
    };
}
