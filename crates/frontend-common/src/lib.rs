pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod scheduler;
pub mod storage;

pub use auth::{check_session, logout, SessionStatus};
pub use client::create_authenticated_client;
pub use components::Spinner;
pub use config::{PortalConfig, StorageKeys};
pub use scheduler::{GlooScheduler, ManualScheduler, Scheduler, TaskHandle};
pub use storage::{BrowserSessionStore, MemorySessionStore, SessionStore, StorageError};
