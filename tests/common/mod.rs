pub mod scripted_surface;
pub mod synthetic_image;
