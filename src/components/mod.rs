//! UI Components
//!
//! Pages, cards and the shared chrome.

mod auth_forms;
mod filter_input;
mod food_page;
mod home_page;
mod hotel_page;
mod map_page;
mod message_modal;
mod nav_bar;
mod place_card;
mod saved_page;
mod tour_page;
mod transport_page;
mod weather_widget;

pub use auth_forms::{LoginForm, SignupForm};
pub use filter_input::FilterInput;
pub use food_page::FoodPage;
pub use home_page::HomePage;
pub use hotel_page::HotelPage;
pub use map_page::MapPage;
pub use message_modal::{MessageModal, Modal, ModalBody};
pub use nav_bar::NavBar;
pub use place_card::PlaceCard;
pub use saved_page::SavedPage;
pub use tour_page::TourPage;
pub use transport_page::TransportPage;
pub use weather_widget::WeatherWidget;
