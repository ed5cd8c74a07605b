//! Operator sugar for selectors.
//!
//! The `define_ops_selector!` macro implements `BitAnd`, `BitOr`, and `Not` on the given
//! selector-like type, so you can write `p & q`, `p | q`, and `!p`. The operators always build
//! the curried combinators of [`crate::logic`].
macro_rules! define_ops_selector {
    (
        $name:ident
        $( <
            $( $gen_name:ident: $gen:tt ),+ $(,)?
        > )?
    ) => {
        impl <
            $( $( $gen_name: $gen ),+ , )?
            _O1: $crate::selector::Selector
        > std::ops::BitAnd<_O1> for $name $( <
                $( $gen_name ),+
            > )? {
            type Output = $crate::logic::And<Self, _O1>;

            fn bitand(self, rhs: _O1) -> Self::Output {
                $crate::logic::And { lhs: self, rhs }
            }
        }

        impl <
            $( $( $gen_name: $gen ),+ , )?
            _O1: $crate::selector::Selector
        > std::ops::BitOr<_O1> for $name $( <
                $( $gen_name ),+
            > )? {
            type Output = $crate::logic::Or<Self, _O1>;

            fn bitor(self, rhs: _O1) -> Self::Output {
                $crate::logic::Or { lhs: self, rhs }
            }
        }

        impl $( <
            $( $gen_name: $gen ),+
        > )? std::ops::Not for $name $( <
                $( $gen_name ),+
            > )? {
            type Output = $crate::logic::Not<Self>;

            fn not(self) -> Self::Output {
                $crate::logic::Not { inner: self }
            }
        }
    };
}
