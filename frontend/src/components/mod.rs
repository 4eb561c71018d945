pub mod calendar_grid;
pub mod day_detail;
pub mod photo_collage;
pub mod welcome_screen;
