pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_week_csv;
pub use prompts::{
    PartialProfile, collect_profile, confirm_overwrite, edit_week, prompt_diet, prompt_yes_no,
    resolve_meal,
};
pub use render::{
    display_day, display_grocery_list, display_meal_list, display_targets, display_week_plan,
};
