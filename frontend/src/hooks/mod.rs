pub mod use_auto_advance;
pub mod use_pointer_parallax;
pub mod use_reduced_motion;
pub mod use_reservation;
