//! In-memory persistence adapters.
//!
//! Back the repository ports with process-local maps. Used by the binary
//! until a database adapter exists, and by integration tests.

mod in_memory_menu_repository;
mod in_memory_user_repository;

pub use in_memory_menu_repository::InMemoryMenuRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
