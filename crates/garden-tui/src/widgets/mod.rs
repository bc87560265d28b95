mod card;
mod contact;
mod depth;
mod detail;
mod feedback;
mod gesture;
mod intro;
mod navigation;
mod popup;
mod status_bar;

pub use card::CardWidget;
pub use contact::ContactWidget;
pub use depth::DepthWidget;
pub use detail::DetailWidget;
pub use feedback::FeedbackWidget;
pub use gesture::GestureWidget;
pub use intro::IntroWidget;
pub use navigation::NavigationWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
