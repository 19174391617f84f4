// Crate-internal.
// ---

pub(crate) mod standard_rates {
    pub(crate) mod q4_2025;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in `crate::ext`.

    pub mod standard_rates {
        pub use crate::impl_ext::standard_rates::q4_2025::*;
    }
}
