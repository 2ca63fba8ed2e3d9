pub mod featured_dishes;
pub mod footer;
pub mod gallery_carousel;
pub mod hero;
pub mod menu_section;
pub mod navbar;
pub mod reservation_modal;
pub mod reserve_section;
pub mod testimonials;
pub mod time_slot_picker;

pub use featured_dishes::FeaturedDishes;
pub use footer::Footer;
pub use gallery_carousel::GalleryCarousel;
pub use hero::Hero;
pub use menu_section::MenuSection;
pub use navbar::Navbar;
pub use reserve_section::ReserveSection;
pub use testimonials::Testimonials;
