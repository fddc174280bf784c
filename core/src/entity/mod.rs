pub mod prelude;

pub mod saved_recipes;
