// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod expenses_csv_datasource;
        pub(crate) mod run_config_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod flag_model;
        pub(crate) mod integer_model;
        pub(crate) mod text_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod expenses_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account_code;
        pub(crate) mod expense_record;
        pub(crate) mod ledger_row;
        pub(crate) mod run_config;
    }
    pub(crate) mod logic {
        pub(crate) mod account_classifier;
        pub(crate) mod account_resolver;
        pub(crate) mod batch_state;
        pub(crate) mod description_composer;
        pub(crate) mod ledger_compiler;
        pub(crate) mod ledger_emitter;
    }
    pub(crate) mod repositories {
        pub(crate) mod expenses_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod compile_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod journal_printer;
    pub(crate) mod ledger_sheet_writer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account_code::*;
        pub use crate::domain::entities::expense_record::*;
        pub use crate::domain::entities::ledger_row::*;
        pub use crate::domain::entities::run_config::*;
    }
}
