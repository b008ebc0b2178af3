//! Macros for ergonomic state definitions.

/// Generate a state enum usable as a [`StateId`](crate::core::StateId).
///
/// The enum derives the bounds the engine needs, displays as its variant
/// name, and gets a `labels()` helper for feeding an
/// [`FsmBuilder`](crate::builder::FsmBuilder).
///
/// # Example
///
/// ```
/// use strictstate::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Pending => "awaiting payment",
///         Paid => "paid",
///         Shipped => "on its way",
///     }
/// }
///
/// assert_eq!(OrderState::Paid.to_string(), "Paid");
/// assert_eq!(OrderState::Shipped.label(), "on its way");
/// assert_eq!(OrderState::labels().len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Human-readable label of the state.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Every variant paired with its label, in declaration order.
            pub fn labels() -> Vec<(Self, &'static str)> {
                vec![$((Self::$variant, $label)),*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str(stringify!($variant))),*
                }
            }
        }
    };
}
