//! In-memory service doubles used by tests and the `--stubs` demo mode.

pub mod stubs;

pub use stubs::StubUserAdminService;
