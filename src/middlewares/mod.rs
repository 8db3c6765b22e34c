// Start of file: /src/middlewares/mod.rs

/*
    * Middleware module entry file. Re-exports our custom middlewares:
    * - request_logger
    * - start_time
*/

pub mod request_logger;
pub mod start_time;

// End of file: /src/middlewares/mod.rs
