pub mod model {
    pub mod game;
}
pub mod utility;
