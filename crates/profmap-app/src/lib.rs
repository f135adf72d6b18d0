// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod filter;
pub mod forms;
pub mod ids;
pub mod lookup;
pub mod map;
pub mod model;
pub mod photo;
pub mod selection;
pub mod state;
pub mod store;

pub use filter::*;
pub use forms::*;
pub use ids::*;
pub use lookup::*;
pub use map::*;
pub use model::*;
pub use photo::*;
pub use selection::*;
pub use state::*;
pub use store::*;
