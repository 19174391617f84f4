// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod rate_schedule_ron_datasource;
        pub(crate) mod trip_ledger_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod jurisdiction_model;
        pub(crate) mod quantity_model;
        pub(crate) mod rate_schedule_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod fuel_tax_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod advisory;
        pub(crate) mod apportionment_result;
        pub(crate) mod fuel_tax_report;
        pub(crate) mod fuel_type;
        pub(crate) mod jurisdiction;
        pub(crate) mod jurisdiction_summary;
        pub(crate) mod rate_table;
        pub(crate) mod report_totals;
        pub(crate) mod reporting_period;
        pub(crate) mod trip_entry;
    }
    pub(crate) mod logic {
        pub(crate) mod advisory_processor;
        pub(crate) mod apportionment_engine;
        pub(crate) mod pipeline;
        pub(crate) mod report_summarizer;
        pub(crate) mod trip_aggregator;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod fuel_tax_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod apportion_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_exporter;
    pub(crate) mod json_exporter;
    pub(crate) mod summary_printer;
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
        pub use crate::domain::entities::advisory::*;
        pub use crate::domain::entities::apportionment_result::*;
        pub use crate::domain::entities::fuel_tax_report::*;
        pub use crate::domain::entities::fuel_type::*;
        pub use crate::domain::entities::jurisdiction::*;
        pub use crate::domain::entities::jurisdiction_summary::*;
        pub use crate::domain::entities::rate_table::*;
        pub use crate::domain::entities::report_totals::*;
        pub use crate::domain::entities::reporting_period::*;
        pub use crate::domain::entities::trip_entry::*;
    }

    pub mod pipeline {
        pub use crate::domain::logic::pipeline::*;
    }
}
