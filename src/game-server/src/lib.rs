pub mod config;
pub mod entrypoint;
pub mod model {
    pub mod external;
}
pub mod service {
    pub mod game_manager;
}
pub mod session;
