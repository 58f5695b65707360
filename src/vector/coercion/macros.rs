/// Register a Promotion
///
/// Registers the common type of a pair of distinct element types, in both
/// operand orders, for a pairwise coercion trait such as
/// [crate::vector::coercion::CommonNum].
///
#[macro_export]
macro_rules! register {
    ( $trait:ident: ($lty:ty , $rty:ty) => $target:ty ) => {
        // register unification into RHS
        impl $trait for ($lty, $rty)
        where
            $lty: $crate::vector::coercion::CoerceInto<$target>,
            $rty: $crate::vector::coercion::CoerceInto<$target>,
        {
            type Common = $target;
            #[inline]
            fn into_common(self) -> (Self::Common, Self::Common) {
                (
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.0),
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.1),
                )
            }
        }

        // register unification into LHS
        impl $trait for ($rty, $lty)
        where
            $lty: $crate::vector::coercion::CoerceInto<$target>,
            $rty: $crate::vector::coercion::CoerceInto<$target>,
        {
            type Common = $target;
            #[inline]
            fn into_common(self) -> (Self::Common, Self::Common) {
                (
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.0),
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.1),
                )
            }
        }
    };
}
