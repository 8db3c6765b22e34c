// Start of file: /src/routes/mod.rs

/*
    * The routes module organizes logical route groupings.
    * Each sub-module defines and registers specific endpoints.
*/

pub mod fallback;
pub mod root;

// End of file: /src/routes/mod.rs
