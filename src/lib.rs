pub mod console;
pub mod sjadam;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{Context, Error, anyhow};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::ops::{Add, Sub};
    }
}

pub mod prelude {
    pub use super::console::*;
    pub use super::sjadam::prelude::*;
    pub use super::utils::prelude::*;
}
