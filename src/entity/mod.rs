pub mod agent;
pub mod chase;
pub mod collision;
pub mod direction;
pub mod moving;
pub mod pickup;
pub mod pursuer;
