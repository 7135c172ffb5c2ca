pub mod constants;
pub mod day;
pub mod grocery;
pub mod nutrients;
pub mod selector;
pub mod week;

pub use day::generate_day;
pub use grocery::build_grocery_list;
pub use nutrients::{
    basal_metabolic_rate, compute_targets, macro_grams, total_daily_energy_expenditure,
    water_target_ml,
};
pub use selector::{pick_random_meal, select_meal};
pub use week::{add_meal, generate_week, remove_meal, swap_meal};
