pub mod robot_bounds_module;
pub mod robot_convex_hull_module;
pub mod robot_description_module;
pub mod robot_model_module;
pub mod robot_stance_module;
