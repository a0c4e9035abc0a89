pub mod seed_activities;

pub use seed_activities::seed_activities;
