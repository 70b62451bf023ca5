//! Yoyaku scheduling engine - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `yoyaku::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use yoyaku_core::*;
    pub use yoyaku_service::*;

    // Re-export db crate with all its public modules
    pub mod db {
        pub use yoyaku_db::db::*;
    }

    // Re-export models
    pub mod model {
        pub use yoyaku_db::model::*;
    }

    // Re-export app middleware and handlers
    pub mod middleware {
        pub use yoyaku_app::middleware::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use yoyaku_app::*;

    pub mod api {
        pub use yoyaku_app::app::api::*;
    }
}
