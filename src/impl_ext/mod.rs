// Crate-internal.
// ---

pub(crate) mod standard_accounts {
    pub(crate) mod core;
    pub(crate) mod vat;
}
pub(crate) mod standard_keywords;
pub(crate) mod standard_payers;

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext`.

    pub mod standard_accounts {
        pub use crate::impl_ext::standard_accounts::core::*;
        pub use crate::impl_ext::standard_accounts::vat::*;
    }

    pub mod standard_keywords {
        pub use crate::impl_ext::standard_keywords::*;
    }

    pub mod standard_payers {
        pub use crate::impl_ext::standard_payers::*;
    }
}
