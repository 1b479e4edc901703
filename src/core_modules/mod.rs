pub mod buffer;
pub mod distance;
pub mod lloyd;
pub mod mean;
pub mod pixel;
pub mod recolor;
pub mod seeder;
pub mod utils;
