use std::fmt::Debug;

/// Set of columns a resource listing may be ordered by.
///
/// Each resource supplies one of these; the resolver never needs to know
/// which resource it is serving.
pub trait SortField: Copy + Eq + Debug + 'static {
    /// Identifier field. Default ordering and the only ordering seek
    /// pagination runs under.
    const IDENTIFIER: Self;

    /// Every field a client may name in `order`.
    const ALL: &'static [Self];

    /// Wire name accepted in the `order` parameter.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Declares a resource's sortable-field enum and its [`SortField`] impl.
///
/// The enum must contain an `Id` variant, which becomes the identifier field.
macro_rules! sort_fields {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::query::SortField for $name {
            const IDENTIFIER: Self = Self::Id;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }
    };
}

pub(crate) use sort_fields;

/// Field plus direction a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderSpec<F> {
    field: F,
    descending: bool,
}

impl<F: SortField> OrderSpec<F> {
    #[must_use]
    pub fn new(field: F, descending: bool) -> Self {
        Self { field, descending }
    }

    #[must_use]
    pub fn ascending(field: F) -> Self {
        Self::new(field, false)
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }
}

impl<F: SortField> Default for OrderSpec<F> {
    fn default() -> Self {
        Self::ascending(F::IDENTIFIER)
    }
}
